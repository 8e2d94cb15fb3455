//! Help overlay listing key bindings and what each action does.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("f", "Feed       restores hunger, a little happiness"),
    ("p", "Play       boosts happiness, costs energy"),
    ("s", "Sleep      restores energy, burns a little hunger"),
    ("c", "Code       big XP roll, costs energy and hunger"),
    ("x", "Clean      clears up after the pet"),
    ("?", "Help       toggle this screen"),
    ("q", "Quit       saves and exits"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Caring for your pet", theme::title())),
        Line::raw(""),
    ];
    for (key, text) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key}  "), theme::title()),
            Span::raw(*text),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Stats decay while you are away; the pet remembers.",
        theme::dim(),
    )));

    frame.render_widget(Clear, area);
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(paragraph, area);
}
