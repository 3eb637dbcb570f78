//! Timer state structure and the small value types around it

use serde::{Deserialize, Serialize};

/// Shortest configurable interval, in minutes
pub const MIN_LENGTH: u32 = 1;
/// Longest configurable interval, in minutes
pub const MAX_LENGTH: u32 = 60;

/// Display label shown while the work interval runs
pub const SESSION_LABEL: &str = "Session";
/// Display label shown while the rest interval runs
pub const BREAK_LABEL: &str = "Break";

/// Which length regime the clock currently represents.
///
/// Also used to name the length being adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Session,
    Break,
}

impl Mode {
    /// The mode a countdown switches into when this one runs out
    pub fn opposite(self) -> Self {
        match self {
            Mode::Session => Mode::Break,
            Mode::Break => Mode::Session,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Session => SESSION_LABEL,
            Mode::Break => BREAK_LABEL,
        }
    }
}

/// Whether the recurring tick is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Stopped,
    Running,
}

/// Direction of a length adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increment,
    Decrement,
}

/// Lengths loaded at startup and on every reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerDefaults {
    pub session_length: u32,
    pub break_length: u32,
}

impl TimerDefaults {
    /// Build defaults, pulling each length into `[MIN_LENGTH, MAX_LENGTH]`
    pub fn new(session_length: u32, break_length: u32) -> Self {
        Self {
            session_length: session_length.clamp(MIN_LENGTH, MAX_LENGTH),
            break_length: break_length.clamp(MIN_LENGTH, MAX_LENGTH),
        }
    }
}

impl Default for TimerDefaults {
    fn default() -> Self {
        Self {
            session_length: 25,
            break_length: 5,
        }
    }
}

/// Authoritative timer data. Mutated only by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Minutes left on the displayed clock
    pub minutes: u32,
    /// Seconds left on the displayed clock, always `0..=59`
    pub seconds: u32,
    pub session_length: u32,
    pub break_length: u32,
    pub mode: Mode,
    pub run_state: RunState,
}

impl TimerState {
    /// Fresh state: stopped, in session mode, clock at the session length
    pub fn new(defaults: TimerDefaults) -> Self {
        Self {
            minutes: defaults.session_length,
            seconds: 0,
            session_length: defaults.session_length,
            break_length: defaults.break_length,
            mode: Mode::Session,
            run_state: RunState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Configured length for the given mode
    pub fn length(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Session => self.session_length,
            Mode::Break => self.break_length,
        }
    }

    pub(crate) fn length_mut(&mut self, mode: Mode) -> &mut u32 {
        match mode {
            Mode::Session => &mut self.session_length,
            Mode::Break => &mut self.break_length,
        }
    }

    /// Whether the clock shows `00:00`
    pub fn is_expired(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Clock text as rendered by the presentation layer
    pub fn clock_text(&self) -> String {
        format_clock(self.minutes, self.seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerDefaults::default())
    }
}

/// Format minutes and seconds as zero-padded `MM:SS`
pub fn format_clock(minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_startup_values() {
        let state = TimerState::default();
        assert_eq!(state.minutes, 25);
        assert_eq!(state.seconds, 0);
        assert_eq!(state.session_length, 25);
        assert_eq!(state.break_length, 5);
        assert_eq!(state.mode, Mode::Session);
        assert_eq!(state.run_state, RunState::Stopped);
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(5, 0), "05:00");
        assert_eq!(format_clock(0, 9), "00:09");
        assert_eq!(format_clock(60, 0), "60:00");
    }

    #[test]
    fn defaults_are_clamped_into_range() {
        let defaults = TimerDefaults::new(0, 90);
        assert_eq!(defaults.session_length, MIN_LENGTH);
        assert_eq!(defaults.break_length, MAX_LENGTH);
    }

    #[test]
    fn initial_clock_follows_default_session_length() {
        let state = TimerState::new(TimerDefaults::new(50, 10));
        assert_eq!(state.clock_text(), "50:00");
        assert_eq!(state.length(Mode::Break), 10);
    }

    #[test]
    fn modes_alternate() {
        assert_eq!(Mode::Session.opposite(), Mode::Break);
        assert_eq!(Mode::Break.opposite(), Mode::Session);
        assert_eq!(Mode::Session.label(), "Session");
        assert_eq!(Mode::Break.label(), "Break");
    }
}
