//! Timer background task
//!
//! One task owns the [`TimerController`] and processes commands and ticks one
//! at a time. Ticks come from [`TokioScheduler`], which runs each armed
//! schedule as its own interval task feeding tokens back over a channel.

use std::{collections::HashMap, time::Duration};
use tokio::{
    sync::{mpsc, oneshot},
    task::AbortHandle,
    time::{interval_at, Instant},
};
use tracing::{debug, info};

use crate::{
    state::{Direction, Mode, TimerDefaults, TimerState},
    timer::{AudioCue, Presenter, Scheduler, TickToken, TimerController},
};

/// Scheduler that runs each armed tick as a tokio interval task
#[derive(Debug)]
pub struct TokioScheduler {
    tick_tx: mpsc::UnboundedSender<TickToken>,
    running: HashMap<TickToken, AbortHandle>,
}

impl TokioScheduler {
    pub fn new(tick_tx: mpsc::UnboundedSender<TickToken>) -> Self {
        Self {
            tick_tx,
            running: HashMap::new(),
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, token: TickToken, period: Duration) {
        let tick_tx = self.tick_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tick_tx.send(token).is_err() {
                    // Timer task is gone
                    break;
                }
            }
        });
        self.running.insert(token, handle.abort_handle());
    }

    fn cancel(&mut self, token: TickToken) {
        if let Some(handle) = self.running.remove(&token) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.running.drain() {
            handle.abort();
        }
    }
}

/// Command sent to the timer task. Each carries a reply channel receiving the
/// state after the command has been applied.
#[derive(Debug)]
pub enum TimerCommand {
    StartOrPause(oneshot::Sender<TimerState>),
    Reset(oneshot::Sender<TimerState>),
    AdjustLength {
        target: Mode,
        direction: Direction,
        reply: oneshot::Sender<TimerState>,
    },
    Snapshot(oneshot::Sender<TimerState>),
}

/// Cloneable handle for sending commands to the timer task
#[derive(Debug, Clone)]
pub struct TimerHandle {
    command_tx: mpsc::Sender<TimerCommand>,
}

impl TimerHandle {
    async fn request<F>(&self, build: F) -> Result<TimerState, String>
    where
        F: FnOnce(oneshot::Sender<TimerState>) -> TimerCommand,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|e| format!("Failed to send timer command: {}", e))?;
        reply_rx
            .await
            .map_err(|e| format!("Timer task dropped the reply: {}", e))
    }

    pub async fn start_or_pause(&self) -> Result<TimerState, String> {
        self.request(TimerCommand::StartOrPause).await
    }

    pub async fn reset(&self) -> Result<TimerState, String> {
        self.request(TimerCommand::Reset).await
    }

    pub async fn adjust_length(&self, target: Mode, direction: Direction) -> Result<TimerState, String> {
        self.request(|reply| TimerCommand::AdjustLength { target, direction, reply })
            .await
    }

    pub async fn snapshot(&self) -> Result<TimerState, String> {
        self.request(TimerCommand::Snapshot).await
    }
}

/// Spawn the timer task and return a handle to it.
///
/// The task ends once every [`TimerHandle`] clone has been dropped.
pub fn spawn_timer_task<P, A>(defaults: TimerDefaults, presenter: P, audio: A) -> TimerHandle
where
    P: Presenter + Send + 'static,
    A: AudioCue + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel(32);
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let controller = TimerController::new(defaults, presenter, audio, TokioScheduler::new(tick_tx));

    tokio::spawn(timer_task(controller, command_rx, tick_rx));

    TimerHandle { command_tx }
}

async fn timer_task<P, A>(
    mut controller: TimerController<P, A, TokioScheduler>,
    mut command_rx: mpsc::Receiver<TimerCommand>,
    mut tick_rx: mpsc::UnboundedReceiver<TickToken>,
) where
    P: Presenter,
    A: AudioCue,
{
    info!("Starting timer task");

    loop {
        tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                let reply = match command {
                    TimerCommand::StartOrPause(reply) => {
                        controller.start_or_pause();
                        reply
                    }
                    TimerCommand::Reset(reply) => {
                        controller.reset();
                        reply
                    }
                    TimerCommand::AdjustLength { target, direction, reply } => {
                        controller.adjust_length(target, direction);
                        reply
                    }
                    TimerCommand::Snapshot(reply) => reply,
                };
                if reply.send(controller.state().clone()).is_err() {
                    debug!("Timer command caller went away before the reply");
                }
            }

            Some(token) = tick_rx.recv() => {
                controller.on_tick(token);
            }
        }
    }

    info!("All timer handles dropped, stopping timer task");
}
