//! User actions and their state transitions.
//!
//! Each action lives in its own module with its own rejection enum; the
//! engine routes through [`ActionTransition`] so every mutation follows the
//! same validate-then-apply path. A rejection's `Display` text is the
//! flavor line shown to the player.

mod clean;
mod code;
mod feed;
mod play;
mod sleep;
mod transition;

pub use clean::{CleanAction, CleanError};
pub use code::{CodeAction, CodeError};
pub use feed::{FeedAction, FeedError};
pub use play::{PlayAction, PlayError};
pub use sleep::SleepAction;
pub use transition::{ActionReceipt, ActionTransition};

/// Discrete user commands the engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Action {
    Feed,
    Play,
    Sleep,
    Code,
    Clean,
}

/// Rejection type for actions without preconditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this rejection should never be constructed")]
pub enum NeverRejected {}

/// A refused action, wrapping the per-action rejection.
///
/// Not a failure of the engine: the caller turns the `Display` text into a
/// journal complaint and the pet state stays byte-for-byte untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Play(#[from] PlayError),

    #[error("{0}")]
    Sleep(#[from] NeverRejected),

    #[error("{0}")]
    Code(#[from] CodeError),

    #[error("{0}")]
    Clean(#[from] CleanError),
}
