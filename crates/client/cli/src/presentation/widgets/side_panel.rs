//! Side panel: lifetime counters and achievements.

use pet_core::{PetView, VitalsView};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

/// Achievements listed before the panel truncates.
const MAX_BADGES: usize = 6;

pub fn render(frame: &mut Frame, area: Rect, view: &PetView) {
    let mut lines = Vec::new();

    match &view.vitals {
        VitalsView::Meters {
            commits,
            commands,
            files,
            ..
        } => {
            lines.push(Line::from(Span::styled("Stats", theme::title())));
            lines.push(Line::raw(format!("  Commits:  {commits}")));
            lines.push(Line::raw(format!("  Commands: {commands}")));
            lines.push(Line::raw(format!("  Files:    {files}")));
        }
        VitalsView::Hearts {
            weight,
            session_age_hours,
            lifetime_hours,
            ..
        } => {
            lines.push(Line::from(Span::styled("Care", theme::title())));
            lines.push(Line::raw(format!("  Weight:   {weight:.1} kg")));
            lines.push(Line::raw(format!("  Session:  {session_age_hours:.1} h")));
            lines.push(Line::raw(format!("  Lifetime: {lifetime_hours:.1} h")));
        }
    }

    lines.push(Line::raw(""));
    if view.achievements.is_empty() {
        lines.push(Line::from(Span::styled("No achievements yet", theme::dim())));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Achievements ({})", view.achievements.len()),
            theme::title(),
        )));
        for badge in view.achievements.iter().take(MAX_BADGES) {
            lines.push(Line::raw(format!("  * {}", badge.title())));
        }
        if view.achievements.len() > MAX_BADGES {
            lines.push(Line::from(Span::styled(
                format!("  ...and {} more", view.achievements.len() - MAX_BADGES),
                theme::dim(),
            )));
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Pet "));
    frame.render_widget(paragraph, area);
}
