//! Collaborators the controller notifies
//!
//! The controller never renders anything itself. Every visible change is
//! pushed through [`Presenter`], and the mode-switch sound through
//! [`AudioCue`].

use crate::state::Mode;

/// Receives display updates from the controller
pub trait Presenter {
    /// Clock face changed; render as `MM:SS`
    fn clock_updated(&mut self, minutes: u32, seconds: u32);

    /// Mode label changed; one of `"Session"` or `"Break"`
    fn mode_label_updated(&mut self, label: &str);

    /// A configured length changed
    fn length_updated(&mut self, target: Mode, value: u32);

    /// Play/pause icon. `true` while the clock runs (pause icon shown).
    fn play_icon_updated(&mut self, is_playing: bool);
}

/// Fire-and-forget sound played on each mode switch
pub trait AudioCue {
    fn play(&mut self);
}
