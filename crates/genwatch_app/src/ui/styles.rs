use genwatch_core::{BarTint, StatusCategory};
use ratatui::style::{Color, Modifier, Style};

/// Spinner animation frames, advanced once per UI tick.
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Gauge fill style for a bar tint. The bold modifier stands in for the
/// striped/animated base style of the original bar.
pub fn tint_style(tint: BarTint) -> Style {
    let color = match tint {
        BarTint::Primary => Color::Blue,
        BarTint::Danger => Color::Red,
        BarTint::Success => Color::Green,
        BarTint::Warning => Color::Yellow,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Text style for the single status line.
pub fn category_style(category: StatusCategory) -> Style {
    match category {
        StatusCategory::Info => Style::default().fg(Color::Cyan),
        StatusCategory::Success => Style::default().fg(Color::Green),
        StatusCategory::Error => Style::default().fg(Color::Red),
        StatusCategory::Complete => Style::default().fg(Color::Yellow),
    }
}
