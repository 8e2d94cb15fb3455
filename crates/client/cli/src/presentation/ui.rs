//! UI composition: the main layout and the help overlay.

use anyhow::Result;
use pet_core::PetView;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, widgets},
    state::{AppMode, AppState},
};

/// Everything a render pass needs.
pub struct RenderContext<'a> {
    pub view: &'a PetView,
    pub app_state: &'a AppState,
}

/// Draw one frame.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Pet + vitals, side panel
                Constraint::Length(8), // Activity log
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.view);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(chunks[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(7), Constraint::Length(5)])
            .split(columns[0]);

        widgets::pet::render(frame, left[0], ctx.view, ctx.app_state);
        widgets::vitals::render(frame, left[1], ctx.view);
        widgets::side_panel::render(frame, columns[1], ctx.view);

        widgets::journal::render(frame, chunks[2], ctx.view);
        widgets::footer::render(frame, chunks[3]);

        if ctx.app_state.mode == AppMode::Help {
            widgets::help::render(frame, centered_rect(60, 70, frame.area()));
        }
    })?;

    Ok(())
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
