//! Virtual-time scheduler

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::timer::{Scheduler, TickToken, TICK_PERIOD};

#[derive(Debug, Default)]
struct ManualInner {
    armed: Vec<(TickToken, Duration)>,
    scheduled: usize,
    cancelled: usize,
}

/// Scheduler whose ticks fire only when [`ManualScheduler::advance`] is
/// called.
///
/// Clones share state: hand one to the controller, keep one to advance time.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens currently armed
    pub fn armed(&self) -> Vec<TickToken> {
        self.inner
            .lock()
            .map(|inner| inner.armed.iter().map(|(token, _)| *token).collect())
            .unwrap_or_default()
    }

    pub fn is_armed(&self) -> bool {
        !self.armed().is_empty()
    }

    /// Period the first armed token was scheduled with
    pub fn armed_period(&self) -> Option<Duration> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.armed.first().map(|(_, period)| *period))
    }

    /// Total number of `schedule` calls seen
    pub fn scheduled_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.scheduled).unwrap_or(0)
    }

    /// Total number of `cancel` calls seen
    pub fn cancelled_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.cancelled).unwrap_or(0)
    }

    /// Advance virtual time by `periods` ticks of [`TICK_PERIOD`], handing the
    /// armed token to `deliver` once per period. Returns how many ticks were
    /// delivered.
    ///
    /// The armed token is re-read before every delivery, so a delivery that
    /// cancels or re-arms is honoured on the next step.
    pub fn advance<F>(&self, periods: u32, mut deliver: F) -> u32
    where
        F: FnMut(TickToken),
    {
        let mut delivered = 0;
        for _ in 0..periods {
            // Lock must be released before `deliver` re-enters schedule/cancel
            let due = self
                .inner
                .lock()
                .ok()
                .and_then(|inner| inner.armed.first().map(|(token, _)| *token));
            if let Some(token) = due {
                deliver(token);
                delivered += 1;
            }
        }
        delivered
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TickToken, period: Duration) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.armed.push((token, period));
            inner.scheduled += 1;
        }
    }

    fn cancel(&mut self, token: TickToken) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.armed.retain(|(armed, _)| *armed != token);
            inner.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_until_cancelled() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(TickToken(7), TICK_PERIOD);
        assert_eq!(scheduler.armed_period(), Some(TICK_PERIOD));

        let mut seen = Vec::new();
        let mut handle = scheduler.clone();
        let delivered = scheduler.advance(5, |token| {
            seen.push(token);
            if seen.len() == 3 {
                handle.cancel(token);
            }
        });

        assert_eq!(delivered, 3);
        assert_eq!(seen, vec![TickToken(7); 3]);
        assert!(!scheduler.is_armed());
        assert_eq!((scheduler.scheduled_count(), scheduler.cancelled_count()), (1, 1));
    }
}
