use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::boot::progress::BootConfig;

/// Notifications produced by the boot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootSignal {
    /// One period of the progress timer elapsed
    Tick,
    /// The settle delay after completion elapsed
    Settled,
}

/// Background timer feeding the boot sequencer.
///
/// The periodic ticker and the settle delay each run as a tokio task that
/// sends [`BootSignal`]s over a channel. Dropping the timer aborts both, so no
/// work outlives the page that started it.
#[derive(Debug)]
pub struct BootTimer {
    config: BootConfig,
    sender: UnboundedSender<BootSignal>,
    ticker: Option<JoinHandle<()>>,
    settle: Option<JoinHandle<()>>,
}

impl BootTimer {
    /// Start ticking. The first tick fires one period after start.
    pub fn start(config: BootConfig) -> (Self, UnboundedReceiver<BootSignal>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        let tick_sender = sender.clone();
        let period = config.tick;
        let ticker = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tick_sender.send(BootSignal::Tick).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(
            tick_ms = period.as_millis() as u64,
            step = config.step,
            "boot timer started"
        );

        (
            Self {
                config,
                sender,
                ticker: Some(ticker),
                settle: None,
            },
            receiver,
        )
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stop the periodic ticker. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        match self.ticker.take() {
            Some(handle) => {
                handle.abort();
                tracing::debug!("boot timer stopped");
                true
            }
            None => false,
        }
    }

    /// Arm the settle delay. Returns `false` if it was already armed.
    pub fn schedule_settle(&mut self) -> bool {
        if self.settle.is_some() {
            return false;
        }

        let sender = self.sender.clone();
        let delay = self.config.settle;
        self.settle = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = sender.send(BootSignal::Settled);
        }));
        true
    }
}

impl Drop for BootTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
        if let Some(handle) = self.settle.take() {
            handle.abort();
        }
    }
}
