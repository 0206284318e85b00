use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::message::Message;

/// Owned handle to the task posting [`Message::Tick`] at a fixed cadence.
///
/// Cancelling, or dropping the handle, aborts the task.
#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn onto the current tokio runtime. The first tick fires one
    /// `period` after the call.
    pub fn spawn(period: Duration, generation: u64, sender: UnboundedSender<Message>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(Message::Tick { generation }).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(generation, ?period, "ticker spawned");
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(self) {
        tracing::debug!(generation = self.generation, "ticker cancelled");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
