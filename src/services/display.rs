//! Rendered display fields published over a watch channel

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    state::{format_clock, Mode, TimerDefaults, SESSION_LABEL},
    timer::Presenter,
};

/// What a front end shows: the clock face, the mode label, the two length
/// fields and the play/pause icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub clock: String,
    pub label: String,
    pub session_length: u32,
    pub break_length: u32,
    pub playing: bool,
}

impl Display {
    pub fn new(defaults: TimerDefaults) -> Self {
        Self {
            clock: format_clock(defaults.session_length, 0),
            label: SESSION_LABEL.to_string(),
            session_length: defaults.session_length,
            break_length: defaults.break_length,
            playing: false,
        }
    }
}

/// Presenter keeping a [`Display`] and publishing every change
#[derive(Debug)]
pub struct DisplayPresenter {
    display: Display,
    display_tx: watch::Sender<Display>,
}

impl DisplayPresenter {
    /// Create the presenter together with a receiver for display updates
    pub fn new(defaults: TimerDefaults) -> (Self, watch::Receiver<Display>) {
        let display = Display::new(defaults);
        let (display_tx, display_rx) = watch::channel(display.clone());
        (Self { display, display_tx }, display_rx)
    }

    fn publish(&self) {
        if let Err(e) = self.display_tx.send(self.display.clone()) {
            warn!("Failed to publish display update: {}", e);
        }
    }
}

impl Presenter for DisplayPresenter {
    fn clock_updated(&mut self, minutes: u32, seconds: u32) {
        self.display.clock = format_clock(minutes, seconds);
        self.publish();
    }

    fn mode_label_updated(&mut self, label: &str) {
        debug!("Display label: {}", label);
        self.display.label = label.to_string();
        self.publish();
    }

    fn length_updated(&mut self, target: Mode, value: u32) {
        match target {
            Mode::Session => self.display.session_length = value,
            Mode::Break => self.display.break_length = value,
        }
        self.publish();
    }

    fn play_icon_updated(&mut self, is_playing: bool) {
        self.display.playing = is_playing;
        self.publish();
    }
}
