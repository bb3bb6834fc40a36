//! TUI module for soundbank
//!
//! Browse the rendered sounds: list on the left, waveform and spectrum of
//! the selected sound on the right.

mod sounds;
mod spectrum;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use saavy_bank::{Sound, SoundBank};
use std::time::Duration;

use sounds::{render_details, render_sound_list};
use spectrum::{analyze, render_spectrum};
use waveform::render_waveform;

/// Inspector application state
pub struct Inspector<'a> {
    /// Rendered sounds, in bank order
    sounds: Vec<&'a Sound>,
    /// Bank sample rate in Hz
    sample_rate: f32,
    /// Index into `sounds`
    selected: usize,
    /// Spectrum of the selected sound: (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
    /// Whether the app should quit
    should_quit: bool,
}

impl<'a> Inspector<'a> {
    pub fn new(bank: &'a SoundBank, selected: usize) -> Self {
        let sounds: Vec<&Sound> = bank.iter().collect();
        let selected = selected.min(sounds.len().saturating_sub(1));
        let mut inspector = Self {
            sounds,
            sample_rate: bank.config().sample_rate,
            selected,
            spectrum: Vec::new(),
            should_quit: false,
        };
        inspector.refresh_spectrum();
        inspector
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select(self.selected + 1),
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        if index < self.sounds.len() && index != self.selected {
            self.selected = index;
            self.refresh_spectrum();
        }
    }

    fn refresh_spectrum(&mut self) {
        self.spectrum = match self.sounds.get(self.selected) {
            Some(sound) => analyze(sound.samples(), self.sample_rate),
            None => Vec::new(),
        };
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(rows[0]);

        render_sound_list(frame, columns[0], &self.sounds, self.selected);

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Details
                Constraint::Percentage(55), // Waveform
                Constraint::Min(6),         // Spectrum
            ])
            .split(columns[1]);

        if let Some(sound) = self.sounds.get(self.selected) {
            render_details(frame, panels[0], sound, self.sample_rate);
            render_waveform(frame, panels[1], sound.samples());
        }
        render_spectrum(frame, panels[2], &self.spectrum);

        let help = Paragraph::new(" [Q] Quit  [Up/Down] Select sound")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[1]);
    }
}
