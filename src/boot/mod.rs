pub mod progress;
pub mod screen;
pub mod timer;

pub use progress::{
    status_text, BootConfig, BootSequencer, Phase, StatusBand, TickOutcome, TimerState,
    MAX_PROGRESS,
};
pub use screen::SplashScreen;
pub use timer::{BootSignal, BootTimer};

use tokio::sync::mpsc::UnboundedReceiver;

/// A running boot sequence: the sequencer plus the timer feeding it
#[derive(Debug)]
pub struct BootProcess {
    sequencer: BootSequencer,
    timer: Option<BootTimer>,
}

impl BootProcess {
    /// Start the timer. Signals from the returned receiver go to [`BootProcess::handle`].
    pub fn start(config: BootConfig) -> (Self, UnboundedReceiver<BootSignal>) {
        let (timer, signals) = BootTimer::start(config);
        (
            Self {
                sequencer: BootSequencer::new(config),
                timer: Some(timer),
            },
            signals,
        )
    }

    pub fn sequencer(&self) -> &BootSequencer {
        &self.sequencer
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Apply a timer signal. Returns `true` when this signal moved the page to the main view.
    pub fn handle(&mut self, signal: BootSignal) -> bool {
        match signal {
            BootSignal::Tick => {
                if self.sequencer.tick() == TickOutcome::Completed {
                    if let Some(timer) = self.timer.as_mut() {
                        timer.stop();
                        timer.schedule_settle();
                    }
                }
                false
            }
            BootSignal::Settled => {
                let switched = self.sequencer.settle();
                if switched {
                    self.timer = None;
                    tracing::info!("boot finished, showing main view");
                }
                switched
            }
        }
    }

    /// Skip the splash entirely
    pub fn skip(&mut self) -> bool {
        self.timer = None;
        self.sequencer.finish_now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{self, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_transition_waits_for_progress_and_settle_delay() {
        let config = BootConfig::new(Duration::from_millis(45), 2, Duration::from_millis(220));
        let started = Instant::now();
        let (mut boot, mut signals) = BootProcess::start(config);

        while let Some(signal) = signals.recv().await {
            if boot.handle(signal) {
                break;
            }
            assert_eq!(boot.phase(), Phase::Splash);
        }

        assert_eq!(boot.phase(), Phase::Main);
        assert_eq!(boot.sequencer().progress(), MAX_PROGRESS);
        assert!(started.elapsed() >= Duration::from_millis(50 * 45 + 220));
        assert!(!boot.is_timer_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_signals_do_not_fire_twice() {
        let config = BootConfig::new(Duration::from_millis(10), 50, Duration::from_millis(20));
        let (mut boot, mut signals) = BootProcess::start(config);

        let mut transitions = 0;
        while let Some(signal) = signals.recv().await {
            if boot.handle(signal) {
                transitions += 1;
                break;
            }
        }

        for signal in [BootSignal::Tick, BootSignal::Settled, BootSignal::Tick] {
            if boot.handle(signal) {
                transitions += 1;
            }
        }
        assert_eq!(transitions, 1);
        assert_eq!(boot.phase(), Phase::Main);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_completion() {
        let (boot, mut signals) = BootProcess::start(BootConfig::default());
        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(boot.sequencer().progress(), 0);
        drop(boot);

        time::sleep(Duration::from_secs(5)).await;
        while signals.try_recv().is_ok() {}
        assert_eq!(signals.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip() {
        let (mut boot, _signals) = BootProcess::start(BootConfig::default());
        assert!(boot.skip());
        assert_eq!(boot.phase(), Phase::Main);
        assert!(!boot.is_timer_active());
        assert!(!boot.handle(BootSignal::Settled));
    }
}
