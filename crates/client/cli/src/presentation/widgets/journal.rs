//! Scrolling activity log panel.

use pet_core::PetView;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &PetView) {
    let visible = area.height.saturating_sub(2) as usize;

    // view.journal is newest first; show oldest of the window at the top
    let lines: Vec<Line> = view
        .journal
        .iter()
        .take(visible)
        .rev()
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.at.format("%H:%M:%S ").to_string(), theme::dim()),
                Span::styled(entry.text.clone(), theme::journal_style(entry.level)),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Activity "));
    frame.render_widget(paragraph, area);
}
