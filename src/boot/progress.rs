use std::time::Duration;

/// Progress value at which the boot sequence is considered finished
pub const MAX_PROGRESS: u8 = 100;

/// Timing constants for the boot sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootConfig {
    /// Period of the progress timer
    pub tick: Duration,
    /// Amount added to the progress on every tick
    pub step: u8,
    /// Pause between reaching 100% and switching to the main view
    pub settle: Duration,
}

impl BootConfig {
    /// Build a config, clamping the step into `1..=100` so the sequence always terminates
    pub fn new(tick: Duration, step: u8, settle: Duration) -> Self {
        Self {
            tick,
            step: step.clamp(1, MAX_PROGRESS),
            settle,
        }
    }

    /// Number of ticks needed to move the progress from 0 to 100
    pub fn ticks_to_complete(&self) -> u32 {
        let step = u32::from(self.step.max(1));
        u32::from(MAX_PROGRESS).div_ceil(step)
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(28), 1, Duration::from_millis(450))
    }
}

/// Which view the page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Main,
}

/// State of the progress timer as seen by the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Completed,
}

/// What a single timer tick did to the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved forward to the contained value
    Advanced(u8),
    /// Progress had already reached 100; the timer must stop and the settle delay begin
    Completed,
    /// The tick arrived after completion and changed nothing
    Ignored,
}

/// Status message bands, ordered by progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusBand {
    WarmingUp,
    LoadingChrome,
    TuningGradients,
    AlmostReady,
    Ready,
}

impl StatusBand {
    pub const ALL: [StatusBand; 5] = [
        StatusBand::WarmingUp,
        StatusBand::LoadingChrome,
        StatusBand::TuningGradients,
        StatusBand::AlmostReady,
        StatusBand::Ready,
    ];

    /// Band for a progress value. Bands are closed-open: `[0,25) [25,55) [55,85) [85,100) [100,..]`
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            0..=24 => StatusBand::WarmingUp,
            25..=54 => StatusBand::LoadingChrome,
            55..=84 => StatusBand::TuningGradients,
            85..=99 => StatusBand::AlmostReady,
            _ => StatusBand::Ready,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn text(&self) -> &'static str {
        match self {
            StatusBand::WarmingUp => "Warming up…",
            StatusBand::LoadingChrome => "Loading UI chrome…",
            StatusBand::TuningGradients => "Tuning gradients…",
            StatusBand::AlmostReady => "Almost ready…",
            StatusBand::Ready => "Ready.",
        }
    }
}

/// Human-readable status for a progress value
pub fn status_text(progress: u8) -> &'static str {
    StatusBand::for_progress(progress).text()
}

/// Drives the splash progress and the one-shot splash → main transition.
///
/// The sequencer is pure state: a timer feeds it ticks and, once it reports
/// [`TickOutcome::Completed`], a single settle notification. Completion is
/// latched, so ticks that were already queued when the timer stopped are
/// harmless.
#[derive(Debug, Clone)]
pub struct BootSequencer {
    config: BootConfig,
    progress: u8,
    state: TimerState,
    phase: Phase,
}

impl BootSequencer {
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            progress: 0,
            state: TimerState::Running,
            phase: Phase::Splash,
        }
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timer_state(&self) -> TimerState {
        self.state
    }

    pub fn status_band(&self) -> StatusBand {
        StatusBand::for_progress(self.progress)
    }

    pub fn status_text(&self) -> &'static str {
        status_text(self.progress)
    }

    pub fn ticks_to_complete(&self) -> u32 {
        self.config.ticks_to_complete()
    }

    /// Handle one timer tick
    pub fn tick(&mut self) -> TickOutcome {
        if self.progress >= MAX_PROGRESS {
            return if self.complete() {
                TickOutcome::Completed
            } else {
                TickOutcome::Ignored
            };
        }

        self.progress = self
            .progress
            .saturating_add(self.config.step)
            .min(MAX_PROGRESS);
        TickOutcome::Advanced(self.progress)
    }

    /// Latch the sequence as completed. Returns `true` only on the first call.
    pub fn complete(&mut self) -> bool {
        if self.state == TimerState::Completed {
            return false;
        }
        self.state = TimerState::Completed;
        tracing::debug!(progress = self.progress, "boot sequence completed");
        true
    }

    /// Switch to the main view once the settle delay has elapsed.
    /// Returns `true` only for the single splash → main transition.
    pub fn settle(&mut self) -> bool {
        if self.state != TimerState::Completed || self.phase == Phase::Main {
            return false;
        }
        self.phase = Phase::Main;
        tracing::debug!("switching from splash to main view");
        true
    }

    /// Jump straight to the main view, going through the same latch
    pub fn finish_now(&mut self) -> bool {
        self.progress = MAX_PROGRESS;
        self.complete();
        self.settle()
    }
}
