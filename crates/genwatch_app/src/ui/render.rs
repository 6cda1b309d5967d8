use genwatch_core::AppViewModel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use super::styles;

pub fn render(frame: &mut Frame, view: &AppViewModel, tick: u64) {
    let (input_area, gauge_area, status_area, footer_area) = compute_layout(frame.area());

    render_input(frame, input_area, view);
    render_gauge(frame, gauge_area, view);
    render_status(frame, status_area, view);
    render_footer(frame, footer_area, view, tick);
}

fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // idea input
            Constraint::Length(3), // progress gauge
            Constraint::Length(3), // latest status
            Constraint::Length(2), // spinner / download / hints
            Constraint::Min(0),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let title = if view.submit_enabled {
        "Project idea (Enter to generate, Esc to quit)"
    } else {
        "Project idea (generation in progress)"
    };
    let input = Paragraph::new(view.idea_input.as_str())
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);
}

fn render_gauge(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let label = format!("{} ({}%)", view.bar_label, view.percent);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(styles::tint_style(view.bar_tint))
        .percent(u16::from(view.percent))
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    // A single entry only; each snapshot replaces the previous one.
    let line = match &view.status_line {
        Some(status) => Line::from(Span::styled(
            status.message.clone(),
            styles::category_style(status.category),
        )),
        None => Line::from(""),
    };
    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &AppViewModel, tick: u64) {
    let mut spans: Vec<Span> = Vec::new();
    if view.spinner_visible {
        spans.push(Span::styled(
            format!("{} working ", styles::spinner_frame(tick)),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(url) = &view.download_url {
        spans.push(Span::styled(
            format!("download ready: {url}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::raw(""));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
