//! Timer state machine and its collaborator seams
//!
//! [`TimerController`] holds the rules; presentation, audio and tick
//! scheduling are injected through [`Presenter`], [`AudioCue`] and
//! [`Scheduler`].

pub mod controller;
pub mod presenter;
pub mod scheduler;

// Re-export main types
pub use controller::TimerController;
pub use presenter::{AudioCue, Presenter};
pub use scheduler::{Scheduler, TickToken, TICK_PERIOD};
