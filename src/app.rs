use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::boot::{BootConfig, BootProcess};
use crate::config::AppConfig;
use crate::events::{EventHandler, EventResult};
use crate::skin::{SkinRegistry, SkinSelector};
use crate::storage::PreferenceStore;
use crate::ui::UI;

pub struct App {
    should_quit: bool,
    ui: UI,
    event_handler: EventHandler,
    selector: SkinSelector,
    boot_config: BootConfig,
    frame_interval: Duration,
    skip_splash: bool,
}

impl App {
    pub fn new(config: &AppConfig, store: Arc<dyn PreferenceStore>) -> Result<Self> {
        let registry = SkinRegistry::builtin().context("Failed to load built-in skins")?;
        let selector = SkinSelector::new(Arc::new(registry), store);

        Ok(Self {
            should_quit: false,
            ui: UI::new(),
            event_handler: EventHandler::new(),
            selector,
            boot_config: config.boot.to_boot_config(),
            frame_interval: config.ui.frame_interval(),
            skip_splash: false,
        })
    }

    /// Start on the main view instead of the boot splash
    pub fn with_skip_splash(mut self, skip: bool) -> Self {
        self.skip_splash = skip;
        self
    }

    pub fn selector(&self) -> &SkinSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut SkinSelector {
        &mut self.selector
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Act on the outcome of a key press
    pub fn apply(&mut self, result: EventResult) {
        let outcome = match result {
            EventResult::Continue => return,
            EventResult::Quit => {
                self.should_quit = true;
                return;
            }
            EventResult::SelectSkin(index) => self.selector.select_position(index),
            EventResult::NextSkin => self.selector.cycle_next(),
            EventResult::PreviousSkin => self.selector.cycle_previous(),
        };

        if let Err(e) = outcome {
            tracing::debug!("ignoring skin key: {}", e);
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Crix requires a proper terminal (TTY) to run. Please run it in a terminal emulator."
            ));
        }

        enable_raw_mode().map_err(|e| {
            anyhow::anyhow!(
                "Failed to enable raw mode: {}. Make sure you're running in a proper terminal.",
                e
            )
        })?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let (mut boot, mut signals) = BootProcess::start(self.boot_config);
        if self.skip_splash {
            boot.skip();
        }
        tracing::debug!(
            ticks = boot.sequencer().ticks_to_complete(),
            skip = self.skip_splash,
            "boot sequence started"
        );

        loop {
            while let Ok(signal) = signals.try_recv() {
                boot.handle(signal);
            }

            terminal.draw(|f| self.ui.render(f, boot.sequencer(), &self.selector))?;

            if event::poll(self.frame_interval)? {
                if let Event::Key(key) = event::read()? {
                    let result = self.event_handler.handle_key_event(key, boot.phase());
                    self.apply(result);
                }
            }

            if self.should_quit {
                tracing::info!(skin = %self.selector.active_id(), "quitting");
                break;
            }
        }

        Ok(())
    }
}
