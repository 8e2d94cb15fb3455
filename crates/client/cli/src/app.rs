//! Application wiring and the event loop.
//!
//! The loop coordinates three concerns: runtime view events, keyboard input
//! (polled on the frame interval), and rendering. Actions are forwarded to
//! the runtime's serialized worker; this side never mutates pet state.

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{self, Duration, MissedTickBehavior};

use pet_core::PetView;
use pet_runtime::{FileSaveRepository, PetEvent, Runtime, RuntimeHandle};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::terminal::{self, Tui};
use crate::presentation::ui::{self, RenderContext};
use crate::state::{AppMode, AppState};

const FRAME_INTERVAL_MS: u64 = 50;

pub struct CliApp {
    config: CliConfig,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let repository = match &self.config.save_path {
            Some(path) => FileSaveRepository::new(path)?,
            None => FileSaveRepository::at_default_path()?,
        };
        tracing::info!(path = %repository.path().display(), "using save file");

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .repository(repository)
            .spawn()?;

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(
            runtime.handle(),
            runtime.subscribe_events(),
            runtime.initial_view().clone(),
        );
        let result = event_loop.run(&mut terminal).await;

        drop(guard);

        // Quit path: the worker performs its final save before joining
        runtime.shutdown().await?;
        result
    }
}

struct EventLoop {
    handle: RuntimeHandle,
    events: broadcast::Receiver<PetEvent>,
    input: InputHandler,
    app_state: AppState,
    view: PetView,
}

impl EventLoop {
    fn new(
        handle: RuntimeHandle,
        events: broadcast::Receiver<PetEvent>,
        initial_view: PetView,
    ) -> Self {
        Self {
            handle,
            events,
            input: InputHandler,
            app_state: AppState::default(),
            view: initial_view,
        }
    }

    async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        let mut frame = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                event = self.events.recv() => match event {
                    Ok(PetEvent::View(view)) => {
                        self.view = *view;
                        self.render(terminal)?;
                    }
                    Ok(PetEvent::Saved) => {}
                    Err(RecvError::Closed) => {
                        tracing::warn!("event stream closed");
                        break;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("dropped {skipped} stale events");
                    }
                },
                _ = frame.tick() => {
                    if self.handle_input().await? {
                        break;
                    }
                    self.app_state.advance_animation();
                    self.render(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Drain pending key events; returns true when the app should exit.
    async fn handle_input(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match self.input.handle_key(key) {
                    KeyAction::Quit => return Ok(true),
                    KeyAction::Back => match self.app_state.mode {
                        AppMode::Help => self.app_state.toggle_help(),
                        AppMode::Normal => return Ok(true),
                    },
                    KeyAction::ToggleHelp => self.app_state.toggle_help(),
                    KeyAction::Submit(action) => {
                        if self.handle.submit_action(action).await.is_err() {
                            tracing::warn!("runtime stopped; exiting");
                            return Ok(true);
                        }
                    }
                    KeyAction::None => {}
                }
            }
        }
        Ok(false)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &RenderContext {
                view: &self.view,
                app_state: &self.app_state,
            },
        )
    }
}
