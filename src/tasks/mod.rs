//! Background tasks module
//!
//! This module contains the task that owns the running timer.

pub mod timer_task;

// Re-export main items
pub use timer_task::{spawn_timer_task, TimerCommand, TimerHandle, TokioScheduler};
