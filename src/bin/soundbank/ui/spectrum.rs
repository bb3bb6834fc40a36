//! Spectrum widget
//!
//! One FFT over the whole rendered buffer, sampled at log-spaced bins.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 64;

/// Magnitude spectrum of `samples` as (frequency_hz, magnitude_db) pairs
pub fn analyze(samples: &[f32], sample_rate: f32) -> Vec<(f64, f64)> {
    let len = samples.len();
    if len < 2 {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(len);

    // Hann window - reduces spectral leakage
    let denom = (len - 1) as f32;
    let mut scratch: Vec<Complex<f32>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let w = 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos());
            let s = if s.is_finite() { s } else { 0.0 };
            Complex::new(s * w, 0.0)
        })
        .collect();

    fft.process(&mut scratch);

    // Log-spaced frequency bins (20 Hz to Nyquist)
    let max_freq = (sample_rate / 2.0).min(20_000.0).max(1.0) as f64;
    let min_freq = 20.0f64.min(max_freq);
    let ratio = max_freq / min_freq;
    let half = (len / 2).max(1);

    (0..SPECTRUM_BINS)
        .map(|i| {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = min_freq * ratio.powf(t);
            let index = ((freq * len as f64 / sample_rate as f64).round() as usize).min(half - 1);
            let bin = scratch[index];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            (freq, 10.0 * (power as f64).log10())
        })
        .collect()
}

/// Render the spectrum widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_freq = spectrum
        .iter()
        .map(|(f, _)| *f)
        .fold(0.0, f64::max)
        .max(1.0);
    let max_db = spectrum
        .iter()
        .map(|(_, db)| *db)
        .fold(-100.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .labels(vec!["0".to_string(), format!("{:.0} Hz", max_freq)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-100.0, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
