//! Waveform widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Most points handed to the chart; longer buffers are decimated
const MAX_POINTS: usize = 2048;

/// Render a whole buffer as a line chart
pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[f32]) {
    let block = Block::default().title(" Waveform ").borders(Borders::ALL);

    let step = samples.len().div_ceil(MAX_POINTS).max(1);
    let len = samples.len().max(1) as f64;

    // Convert audio samples to chart data points
    let data: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, &sample)| (i as f64 / len, sample as f64))
        .collect();

    // Mixed layers can exceed full scale; widen the axis instead of clipping
    let peak = samples
        .iter()
        .filter(|s| s.is_finite())
        .fold(1.0f32, |acc, &s| acc.max(s.abs())) as f64;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-peak, peak])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
