pub mod backdrop;
pub mod content;
pub mod landing;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::boot::{BootSequencer, Phase, SplashScreen};
use crate::skin::SkinSelector;

pub use landing::{LandingPage, PageLayout};

/// Top-level renderer: the splash while booting, the landing page afterwards
#[derive(Debug, Default)]
pub struct UI {
    splash: SplashScreen,
    landing: LandingPage,
}

impl UI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, frame: &mut Frame, boot: &BootSequencer, selector: &SkinSelector) {
        let area = frame.size();
        match boot.phase() {
            Phase::Splash => self.splash.render(frame, area, boot, selector.tokens()),
            Phase::Main => self.landing.render(frame, area, selector),
        }
    }
}

/// A `width` x `height` rectangle centered in `r`, shrunk to fit when `r` is smaller
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(popup_layout[1])[1]
}
