//! Mode switch cue

use std::io::Write;
use tracing::{info, warn};

use crate::timer::AudioCue;

/// Logs every cue and, when enabled, rings the terminal bell
#[derive(Debug, Clone, Default)]
pub struct BellCue {
    ring_bell: bool,
}

impl BellCue {
    pub fn new(ring_bell: bool) -> Self {
        Self { ring_bell }
    }
}

impl AudioCue for BellCue {
    fn play(&mut self) {
        info!("Mode switch cue");
        if !self.ring_bell {
            return;
        }

        // \x07 is the ASCII bell character
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            warn!("Failed to ring terminal bell: {}", e);
        }
    }
}
