//! The creature itself: XP bar plus a three-line animated critter.

use pet_core::{Emotion, PetView, VitalsView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::state::AppState;

const HEAD: &str = " /\\_/\\ ";
const FACE_NORMAL: &str = "( o.o )";
const FACE_HAPPY: &str = "( ^.^ )";
const FACE_SAD: &str = "( ;_; )";
const FACE_HUNGRY: &str = "( o~o )";
const FACE_SLEEPING: &str = "( -.- )z";
const LEGS_IDLE: &str = " |_|_| ";

/// Leg positions for the walk cycle, in frame order.
const WALK_LEGS: &[&str] = &[" |_|_| ", " /_|_\\ ", " |_|_| ", " \\_|_/ "];

pub fn render(frame: &mut Frame, area: Rect, view: &PetView, app: &AppState) {
    let mut lines = Vec::new();

    if let VitalsView::Meters {
        xp,
        xp_to_next,
        progress,
        ..
    } = &view.vitals
    {
        lines.push(xp_bar(*xp, *xp_to_next, *progress));
        lines.push(Line::raw(""));
    }

    let (face, legs, walks) = pose(view.emotion, app);
    let pad = if walks {
        " ".repeat(app.walk_offset() as usize)
    } else {
        "    ".to_string()
    };
    for body_line in [HEAD, face, legs] {
        lines.push(Line::raw(format!("{pad}{body_line}")));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", view.name)),
    );
    frame.render_widget(paragraph, area);
}

/// Face and legs for the current emotion; only a content pet wanders.
fn pose(emotion: Emotion, app: &AppState) -> (&'static str, &'static str, bool) {
    match emotion {
        Emotion::Normal => (FACE_NORMAL, WALK_LEGS[app.walk_frame()], true),
        Emotion::Happy => (FACE_HAPPY, WALK_LEGS[app.walk_frame()], true),
        Emotion::Sad => (FACE_SAD, LEGS_IDLE, false),
        Emotion::Hungry => (FACE_HUNGRY, LEGS_IDLE, false),
        Emotion::Sleeping => (FACE_SLEEPING, LEGS_IDLE, false),
    }
}

fn xp_bar(xp: u64, xp_to_next: u64, progress: f64) -> Line<'static> {
    const WIDTH: usize = 20;
    let filled = ((progress * WIDTH as f64) as usize).min(WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(WIDTH - filled));
    Line::from(vec![
        Span::styled(bar, Style::default().fg(Color::Cyan)),
        Span::styled(format!(" XP: {xp}/{xp_to_next}"), theme::dim()),
    ])
}
