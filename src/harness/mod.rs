//! Deterministic collaborators for exercising the timer without a runtime
//!
//! [`RecordingPresenter`] captures every presenter and audio call in order;
//! [`ManualScheduler`] keeps virtual time that only moves when advanced.

pub mod manual_scheduler;
pub mod recorder;

pub use manual_scheduler::ManualScheduler;
pub use recorder::{Notification, RecordingPresenter};
