//! Tomato Clock - a session/break countdown timer
//!
//! The core is [`timer::TimerController`], a state machine over
//! [`state::TimerState`] that talks to the outside world only through the
//! presenter, audio cue and scheduler it is given. The remaining modules host
//! one controller in a tokio task and expose its buttons over HTTP.

pub mod config;
pub mod state;
pub mod timer;
pub mod harness;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerState};
pub use timer::TimerController;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
