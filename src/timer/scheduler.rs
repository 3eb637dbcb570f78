//! Recurring tick scheduling
//!
//! The controller arms and cancels its one-second tick through [`Scheduler`].
//! Each armed schedule is identified by a [`TickToken`]; ticks are delivered
//! back to the controller carrying that token, so a tick from a schedule that
//! has since been cancelled can be recognised and dropped.
//!
//! Production code uses the tokio-backed scheduler in
//! [`crate::tasks::timer_task`]; tests use
//! [`crate::harness::ManualScheduler`].

use std::time::Duration;

/// Fixed cadence of the countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one armed recurring tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(pub u64);

/// Arms and cancels recurring ticks.
///
/// Implementations must stop delivering ticks for a token once `cancel` has
/// returned. The controller guarantees it never has two tokens armed.
pub trait Scheduler {
    /// Start delivering `token` every `period`, first delivery one period
    /// from now
    fn schedule(&mut self, token: TickToken, period: Duration);

    /// Stop delivering `token`
    fn cancel(&mut self, token: TickToken);
}
