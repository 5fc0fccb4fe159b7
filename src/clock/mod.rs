//! Clock core: the two-player state machine and the pure helpers that turn
//! its numbers into something to show.

pub mod duration;
pub mod format;
pub mod game;
pub mod urgency;

pub use duration::parse_duration;
pub use format::format_time;
pub use game::{Game, GameStatus, Side, TapOutcome};
pub use urgency::{Rgb, UrgencyPalette};
