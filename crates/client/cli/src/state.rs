//! Client-local UI state: mode and the walk animation.
//!
//! Animation is purely presentational and never touches the pet state; it
//! advances on the frame interval and derives everything from one counter.

/// Which screen the client is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
}

/// Mutable UI state owned by the event loop.
#[derive(Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Frame-interval ticks since start; drives the walk cycle.
    ticks: u64,
}

impl AppState {
    /// Frame ticks per animation step (~300 ms at 20 fps).
    const STEP_TICKS: u64 = 6;
    /// Frame ticks per horizontal move (~1 s at 20 fps).
    const MOVE_TICKS: u64 = 20;
    /// Walk span in columns before wrapping.
    const WALK_SPAN: u64 = 28;

    pub fn advance_animation(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Current walk-cycle frame index in `0..4`.
    pub fn walk_frame(&self) -> usize {
        ((self.ticks / Self::STEP_TICKS) % 4) as usize
    }

    /// Current horizontal offset of the creature.
    pub fn walk_offset(&self) -> u16 {
        ((self.ticks / Self::MOVE_TICKS) % Self::WALK_SPAN) as u16
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }
}
