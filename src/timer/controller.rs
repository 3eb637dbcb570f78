//! Timer state machine
//!
//! | State   | start_or_pause      | reset                  | adjust_length | tick                |
//! |---------|---------------------|------------------------|---------------|---------------------|
//! | Stopped | Running, arm tick   | Stopped, reinitialise  | clamped ±1    | ignored             |
//! | Running | Stopped, cancel     | cancel, reinitialise   | ignored       | decrement or switch |

use tracing::{debug, info, warn};

use super::{AudioCue, Presenter, Scheduler, TickToken, TICK_PERIOD};
use crate::state::{Direction, Mode, RunState, TimerDefaults, TimerState, MAX_LENGTH, MIN_LENGTH};

/// Owns one [`TimerState`] and drives it from commands and ticks.
///
/// Every operation runs to completion, including the presenter calls it
/// triggers, before returning.
#[derive(Debug)]
pub struct TimerController<P, A, S> {
    state: TimerState,
    defaults: TimerDefaults,
    presenter: P,
    audio: A,
    scheduler: S,
    /// Token of the armed recurring tick, `Some` exactly while running
    active_tick: Option<TickToken>,
    next_token: u64,
}

impl<P, A, S> TimerController<P, A, S>
where
    P: Presenter,
    A: AudioCue,
    S: Scheduler,
{
    /// Create a stopped controller loaded with `defaults` and push the full
    /// initial display to the presenter.
    pub fn new(defaults: TimerDefaults, presenter: P, audio: A, scheduler: S) -> Self {
        let mut controller = Self {
            state: TimerState::new(defaults),
            defaults,
            presenter,
            audio,
            scheduler,
            active_tick: None,
            next_token: 0,
        };
        controller.render_all();
        controller
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Token of the currently armed tick, if running
    pub fn active_tick(&self) -> Option<TickToken> {
        self.active_tick
    }

    /// Toggle between running and stopped
    pub fn start_or_pause(&mut self) {
        match self.state.run_state {
            RunState::Running => {
                self.state.run_state = RunState::Stopped;
                self.disarm_tick();
                self.presenter.play_icon_updated(false);
                info!("Timer paused at {}", self.state.clock_text());
            }
            RunState::Stopped => {
                self.state.run_state = RunState::Running;
                self.presenter.play_icon_updated(true);
                self.arm_tick();
                info!(
                    "Timer started in {} mode at {}",
                    self.state.mode.label(),
                    self.state.clock_text()
                );
            }
        }
    }

    /// Deliver a scheduled tick. Ticks from a schedule that is no longer
    /// armed are dropped.
    pub fn on_tick(&mut self, token: TickToken) {
        if self.active_tick != Some(token) {
            debug!("Dropping stale tick {:?} (armed: {:?})", token, self.active_tick);
            return;
        }
        self.tick();
    }

    /// One elapsed second while running: count down, or switch modes once
    /// the clock has reached `00:00`.
    pub fn tick(&mut self) {
        debug_assert!(self.state.is_running(), "tick delivered while stopped");
        if !self.state.is_running() {
            warn!("Ignoring tick while stopped");
            return;
        }

        if !self.state.is_expired() {
            if self.state.seconds == 0 {
                self.state.seconds = 59;
                self.state.minutes -= 1;
            } else {
                self.state.seconds -= 1;
            }
            debug!("Tick: {}", self.state.clock_text());
            self.presenter.clock_updated(self.state.minutes, self.state.seconds);
            return;
        }

        self.disarm_tick();
        self.audio.play();

        let mode = self.state.mode.opposite();
        self.state.mode = mode;
        self.state.minutes = self.state.length(mode);
        self.state.seconds = 0;
        info!("Switching to {} mode for {} minutes", mode.label(), self.state.minutes);

        self.presenter.mode_label_updated(mode.label());
        self.presenter.clock_updated(self.state.minutes, self.state.seconds);
        self.arm_tick();
    }

    /// Stop the clock and reload the defaults. Always allowed.
    pub fn reset(&mut self) {
        if self.state.is_running() {
            self.disarm_tick();
        }
        self.state = TimerState::new(self.defaults);
        info!("Timer reset to {}", self.state.clock_text());
        self.render_all();
    }

    /// Step a configured length by one minute. Ignored while running or when
    /// the result would leave `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn adjust_length(&mut self, target: Mode, direction: Direction) {
        if self.state.is_running() {
            debug!("Ignoring {:?} length change while running", target);
            return;
        }

        let current = self.state.length(target);
        let adjusted = match direction {
            Direction::Increment if current < MAX_LENGTH => current + 1,
            Direction::Decrement if current > MIN_LENGTH => current - 1,
            _ => {
                debug!("{:?} length already at {}, ignoring {:?}", target, current, direction);
                return;
            }
        };

        *self.state.length_mut(target) = adjusted;
        self.presenter.length_updated(target, adjusted);
        debug!("{:?} length set to {}", target, adjusted);

        // The paused clock face follows the active mode's length
        if self.state.mode == target {
            self.state.minutes = adjusted;
            self.state.seconds = 0;
            self.presenter.clock_updated(self.state.minutes, self.state.seconds);
        }
    }

    fn render_all(&mut self) {
        self.presenter.length_updated(Mode::Break, self.state.break_length);
        self.presenter.length_updated(Mode::Session, self.state.session_length);
        self.presenter.mode_label_updated(self.state.mode.label());
        self.presenter.clock_updated(self.state.minutes, self.state.seconds);
        self.presenter.play_icon_updated(false);
    }

    fn arm_tick(&mut self) {
        debug_assert!(self.active_tick.is_none(), "arming a second tick");
        if let Some(stale) = self.active_tick.take() {
            warn!("Tick {:?} still armed while arming a new one, cancelling", stale);
            self.scheduler.cancel(stale);
        }
        let token = TickToken(self.next_token);
        self.next_token += 1;
        self.scheduler.schedule(token, TICK_PERIOD);
        self.active_tick = Some(token);
    }

    fn disarm_tick(&mut self) {
        if let Some(token) = self.active_tick.take() {
            self.scheduler.cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{ManualScheduler, Notification, RecordingPresenter};

    type Controller = TimerController<RecordingPresenter, RecordingPresenter, ManualScheduler>;

    fn controller() -> (Controller, RecordingPresenter, ManualScheduler) {
        let recorder = RecordingPresenter::new();
        let scheduler = ManualScheduler::new();
        let controller = TimerController::new(
            TimerDefaults::default(),
            recorder.clone(),
            recorder.clone(),
            scheduler.clone(),
        );
        recorder.take();
        (controller, recorder, scheduler)
    }

    #[test]
    fn new_pushes_full_display() {
        let recorder = RecordingPresenter::new();
        let _controller = TimerController::new(
            TimerDefaults::default(),
            recorder.clone(),
            recorder.clone(),
            ManualScheduler::new(),
        );
        assert_eq!(
            recorder.notifications(),
            vec![
                Notification::Length { target: Mode::Break, value: 5 },
                Notification::Length { target: Mode::Session, value: 25 },
                Notification::ModeLabel("Session".to_string()),
                Notification::Clock { minutes: 25, seconds: 0 },
                Notification::PlayIcon { is_playing: false },
            ]
        );
    }

    #[test]
    fn start_arms_one_tick_and_pause_cancels_it() {
        let (mut timer, recorder, scheduler) = controller();

        timer.start_or_pause();
        assert_eq!(timer.state().run_state, RunState::Running);
        assert_eq!(scheduler.armed().len(), 1);
        assert_eq!(scheduler.armed_period(), Some(TICK_PERIOD));
        assert_eq!(recorder.take(), vec![Notification::PlayIcon { is_playing: true }]);

        timer.start_or_pause();
        assert_eq!(timer.state().run_state, RunState::Stopped);
        assert!(!scheduler.is_armed());
        assert_eq!(timer.active_tick(), None);
        assert_eq!(recorder.take(), vec![Notification::PlayIcon { is_playing: false }]);
    }

    #[test]
    fn tick_borrows_a_minute() {
        let (mut timer, recorder, scheduler) = controller();
        timer.start_or_pause();

        scheduler.advance(1, |token| timer.on_tick(token));
        assert_eq!((timer.state().minutes, timer.state().seconds), (24, 59));
        assert_eq!(recorder.last_clock(), Some((24, 59)));

        scheduler.advance(59, |token| timer.on_tick(token));
        assert_eq!((timer.state().minutes, timer.state().seconds), (24, 0));
    }

    #[test]
    fn stale_token_is_dropped() {
        let (mut timer, _recorder, scheduler) = controller();
        timer.start_or_pause();
        let first = scheduler.armed()[0];
        timer.start_or_pause();
        timer.start_or_pause();

        timer.on_tick(first);
        assert_eq!(timer.state().clock_text(), "25:00");
    }

    #[test]
    fn expired_clock_switches_mode_with_cue_before_display() {
        let (mut timer, recorder, scheduler) = controller();
        timer.adjust_length(Mode::Session, Direction::Decrement);
        for _ in 0..23 {
            timer.adjust_length(Mode::Session, Direction::Decrement);
        }
        timer.start_or_pause();
        scheduler.advance(60, |token| timer.on_tick(token));
        assert!(timer.state().is_expired());
        recorder.take();

        scheduler.advance(1, |token| timer.on_tick(token));
        assert_eq!(timer.state().mode, Mode::Break);
        assert_eq!(timer.state().clock_text(), "05:00");
        assert_eq!(
            recorder.take(),
            vec![
                Notification::AudioCue,
                Notification::ModeLabel("Break".to_string()),
                Notification::Clock { minutes: 5, seconds: 0 },
            ]
        );
        assert_eq!(scheduler.armed().len(), 1);
        assert!(timer.state().is_running());
    }

    #[test]
    fn reset_forces_play_icon_and_defaults() {
        let (mut timer, recorder, scheduler) = controller();
        timer.adjust_length(Mode::Break, Direction::Increment);
        timer.start_or_pause();
        scheduler.advance(5, |token| timer.on_tick(token));
        recorder.take();

        timer.reset();
        assert_eq!(timer.state(), &TimerState::default());
        assert!(!scheduler.is_armed());
        assert_eq!(
            recorder.take(),
            vec![
                Notification::Length { target: Mode::Break, value: 5 },
                Notification::Length { target: Mode::Session, value: 25 },
                Notification::ModeLabel("Session".to_string()),
                Notification::Clock { minutes: 25, seconds: 0 },
                Notification::PlayIcon { is_playing: false },
            ]
        );
    }

    #[test]
    fn adjusting_inactive_mode_leaves_clock() {
        let (mut timer, recorder, _scheduler) = controller();
        timer.adjust_length(Mode::Break, Direction::Decrement);
        assert_eq!(timer.state().break_length, 4);
        assert_eq!(timer.state().clock_text(), "25:00");
        assert_eq!(
            recorder.take(),
            vec![Notification::Length { target: Mode::Break, value: 4 }]
        );
    }

    #[test]
    fn adjusting_active_mode_moves_clock() {
        let (mut timer, recorder, scheduler) = controller();
        timer.start_or_pause();
        scheduler.advance(7, |token| timer.on_tick(token));
        timer.start_or_pause();
        recorder.take();

        timer.adjust_length(Mode::Session, Direction::Increment);
        assert_eq!((timer.state().minutes, timer.state().seconds), (26, 0));
        assert_eq!(
            recorder.take(),
            vec![
                Notification::Length { target: Mode::Session, value: 26 },
                Notification::Clock { minutes: 26, seconds: 0 },
            ]
        );
    }

    #[test]
    fn adjusting_while_running_is_ignored() {
        let (mut timer, recorder, _scheduler) = controller();
        timer.start_or_pause();
        recorder.take();
        let before = timer.state().clone();

        for target in [Mode::Session, Mode::Break] {
            for direction in [Direction::Increment, Direction::Decrement] {
                timer.adjust_length(target, direction);
            }
        }
        assert_eq!(timer.state(), &before);
        assert!(recorder.notifications().is_empty());
    }

    #[test]
    fn lengths_stop_at_bounds() {
        let (mut timer, _recorder, _scheduler) = controller();
        for _ in 0..100 {
            timer.adjust_length(Mode::Break, Direction::Increment);
        }
        assert_eq!(timer.state().break_length, MAX_LENGTH);
        for _ in 0..100 {
            timer.adjust_length(Mode::Break, Direction::Decrement);
        }
        assert_eq!(timer.state().break_length, MIN_LENGTH);
    }
}
