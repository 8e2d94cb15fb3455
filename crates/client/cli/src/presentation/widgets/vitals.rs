//! Stat gauges for whichever ruleset the pet lives under.

use pet_core::{PetView, SimConfig, VitalsView};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &PetView) {
    let lines = match &view.vitals {
        VitalsView::Meters {
            hunger,
            happiness,
            energy,
            ..
        } => vec![
            meter_line("Hunger", *hunger),
            meter_line("Happy ", *happiness),
            meter_line("Energy", *energy),
        ],
        VitalsView::Hearts {
            hunger_hearts,
            health_hearts,
            poop_count,
            ..
        } => {
            let mut lines = vec![
                hearts_line("Hunger", *hunger_hearts),
                hearts_line("Health", *health_hearts),
            ];
            if *poop_count > 0 {
                lines.push(Line::from(Span::styled(
                    format!("Poop   {} pile(s) - press X to clean", poop_count),
                    theme::journal_style(pet_core::JournalLevel::Complaint),
                )));
            } else {
                lines.push(Line::from(Span::styled("All clean", theme::dim())));
            }
            lines
        }
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Vitals "));
    frame.render_widget(paragraph, area);
}

fn meter_line(label: &str, value: f64) -> Line<'static> {
    const WIDTH: usize = 10;
    let filled = ((value / 100.0 * WIDTH as f64) as usize).min(WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(WIDTH - filled));
    Line::from(vec![
        Span::raw(format!("{label} ")),
        Span::styled(bar, theme::meter_style(value)),
        Span::styled(format!(" {:3.0}%", value), theme::meter_style(value)),
    ])
}

fn hearts_line(label: &str, hearts: u8) -> Line<'static> {
    let max = SimConfig::MAX_HEARTS as usize;
    let filled = hearts as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(max - filled.min(max)));
    Line::from(vec![
        Span::raw(format!("{label} [")),
        Span::styled(bar, theme::hearts_style(hearts)),
        Span::raw("]"),
    ])
}
