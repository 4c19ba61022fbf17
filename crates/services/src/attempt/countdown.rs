use std::time::Duration;

use log::debug;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time;

/// Event stream of a running [`Countdown`].
///
/// Every event carries the generation of the countdown that produced it.
/// Aborting a countdown cannot recall events it already queued on the
/// channel, so readers use the generation to tell a live countdown's
/// events from leftovers of one that was since replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Fired once per second while time remains.
    Tick { generation: u64, remaining_secs: u64 },
    /// Fired exactly once when the limit runs out; the task ends after it.
    Expired { generation: u64 },
}

/// Per-question countdown running as a background task.
///
/// Dropping the value aborts the task, so a holder cancels a timer by
/// replacing or clearing the slot that owns it. Expiry is reported on the
/// event channel only; acting on it is the caller's job.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawns a ticker that counts `limit` down in whole seconds, stamping
    /// every event with `generation`.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(
        generation: u64,
        limit: Duration,
        events: UnboundedSender<CountdownEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            // the first tick completes immediately
            interval.tick().await;

            let mut remaining_secs = limit.as_secs();
            loop {
                interval.tick().await;
                remaining_secs = remaining_secs.saturating_sub(1);
                if remaining_secs == 0 {
                    let _ = events.send(CountdownEvent::Expired { generation });
                    break;
                }
                let tick = CountdownEvent::Tick {
                    generation,
                    remaining_secs,
                };
                if events.send(tick).is_err() {
                    debug!("countdown listener dropped; stopping ticker");
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Stops the countdown without firing `Expired`.
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Whether the underlying task has run to completion or been aborted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
