//! Presenter and audio cue that record calls

use std::sync::{Arc, Mutex};

use crate::{
    state::Mode,
    timer::{AudioCue, Presenter},
};

/// One observed call on a collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Clock { minutes: u32, seconds: u32 },
    ModeLabel(String),
    Length { target: Mode, value: u32 },
    PlayIcon { is_playing: bool },
    AudioCue,
}

/// Presenter and audio cue that record every call in order.
///
/// Clones share the same log, so one clone can be handed to the controller
/// as presenter, another as audio cue, and a third kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, notification: Notification) {
        if let Ok(mut log) = self.log.lock() {
            log.push(notification);
        }
    }

    /// Copy of everything recorded so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Drain the log, returning what was recorded
    pub fn take(&self) -> Vec<Notification> {
        self.log
            .lock()
            .map(|mut log| std::mem::take(&mut *log))
            .unwrap_or_default()
    }

    pub fn audio_cues(&self) -> usize {
        self.notifications()
            .iter()
            .filter(|n| matches!(n, Notification::AudioCue))
            .count()
    }

    /// Most recent clock update, if any
    pub fn last_clock(&self) -> Option<(u32, u32)> {
        self.notifications().iter().rev().find_map(|n| match n {
            Notification::Clock { minutes, seconds } => Some((*minutes, *seconds)),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn clock_updated(&mut self, minutes: u32, seconds: u32) {
        self.push(Notification::Clock { minutes, seconds });
    }

    fn mode_label_updated(&mut self, label: &str) {
        self.push(Notification::ModeLabel(label.to_string()));
    }

    fn length_updated(&mut self, target: Mode, value: u32) {
        self.push(Notification::Length { target, value });
    }

    fn play_icon_updated(&mut self, is_playing: bool) {
        self.push(Notification::PlayIcon { is_playing });
    }
}

impl AudioCue for RecordingPresenter {
    fn play(&mut self) {
        self.push(Notification::AudioCue);
    }
}
