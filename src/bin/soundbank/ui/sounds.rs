//! Sound list and detail line

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use saavy_bank::Sound;

pub fn render_sound_list(frame: &mut Frame, area: Rect, sounds: &[&Sound], selected: usize) {
    let block = Block::default().title(" Sounds ").borders(Borders::ALL);

    let items: Vec<ListItem> = sounds
        .iter()
        .map(|sound| ListItem::new(sound.name().to_string()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_details(frame: &mut Frame, area: Rect, sound: &Sound, sample_rate: f32) {
    let block = Block::default()
        .title(format!(" {} ", sound.name()))
        .borders(Borders::ALL);

    let note = match sound.note_duration() {
        Some(d) => format!("{d:.2}s"),
        None => "-".to_string(),
    };

    let line = Line::from(vec![
        Span::styled("samples ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", sound.len())),
        Span::styled("length ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.3}s  ", sound.duration_seconds(sample_rate))),
        Span::styled("peak ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.3}  ", sound.peak())),
        Span::styled("rms ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.3}  ", sound.rms())),
        Span::styled("note ", Style::default().fg(Color::DarkGray)),
        Span::raw(note),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
