//! Presentation and side-effect collaborators
//!
//! Concrete implementations of the timer's presenter and audio cue used by
//! the server binary.

pub mod audio;
pub mod display;

// Re-export main types
pub use audio::BellCue;
pub use display::{Display, DisplayPresenter};
