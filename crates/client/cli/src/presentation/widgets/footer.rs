//! Footer with key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(
            " [F]eed  [P]lay  [S]leep  [C]ode  [X] Clean",
            theme::dim(),
        ),
        Span::raw("   "),
        Span::styled("[?] Help  [Q]uit", theme::dim()),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
