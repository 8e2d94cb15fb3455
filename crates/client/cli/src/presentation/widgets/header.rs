//! Header bar: pet identity plus the derived sky state.

use pet_core::{DayPhase, PetView, VitalsView, Weather};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &PetView) {
    let identity = match &view.vitals {
        VitalsView::Meters { level, .. } => format!("{} (Level {})", view.name, level),
        VitalsView::Hearts { weight, .. } => format!("{} ({:.1} kg)", view.name, weight),
    };

    let sky = format!("{} | {}", day_label(view.day_phase), weather_label(view.weather));

    let line = Line::from(vec![
        Span::styled(identity, theme::title()),
        Span::raw("   "),
        Span::styled(sky, theme::dim()),
    ]);

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" lofty "));
    frame.render_widget(paragraph, area);
}

fn day_label(phase: DayPhase) -> &'static str {
    match phase {
        DayPhase::Day => "Day",
        DayPhase::Night => "Night",
    }
}

fn weather_label(weather: Weather) -> &'static str {
    match weather {
        Weather::Clear => "Clear skies",
        Weather::Rain => "Rainy",
        Weather::Snow => "Snowing",
    }
}
