//! State management module
//!
//! The timer's own data and the shared state behind the HTTP surface.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use timer_state::{
    format_clock, Direction, Mode, RunState, TimerDefaults, TimerState, BREAK_LABEL, MAX_LENGTH,
    MIN_LENGTH, SESSION_LABEL,
};
