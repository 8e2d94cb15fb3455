//! Value-based styling shared by the widgets.

use pet_core::JournalLevel;
use ratatui::style::{Color, Modifier, Style};

/// Color a percentage meter by how urgent it is.
pub fn meter_style(value: f64) -> Style {
    if value < 30.0 {
        Style::default().fg(Color::Red)
    } else if value < 60.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Color a hearts meter (0..=4).
pub fn hearts_style(hearts: u8) -> Style {
    match hearts {
        0 | 1 => Style::default().fg(Color::Red),
        2 => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Green),
    }
}

/// Style a journal line by its importance.
pub fn journal_style(level: JournalLevel) -> Style {
    match level {
        JournalLevel::Info => Style::default().fg(Color::White),
        JournalLevel::Reward => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        JournalLevel::Complaint => Style::default().fg(Color::Yellow),
    }
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
