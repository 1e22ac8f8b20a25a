use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::boot::progress::BootSequencer;
use crate::skin::ResolvedTokens;
use crate::ui::backdrop::{Backdrop, Scanlines};
use crate::ui::centered_rect;
use crate::ui::content::{
    BRAND, SPLASH_BADGE, SPLASH_FOOTER, SPLASH_PROCESS, SPLASH_TAGLINE,
};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 13;

/// Full-screen boot splash
#[derive(Debug, Default)]
pub struct SplashScreen;

impl SplashScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the splash for the current progress
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        sequencer: &BootSequencer,
        tokens: &ResolvedTokens,
    ) {
        frame.render_widget(Clear, area);
        frame.render_widget(Backdrop::new(tokens), area);

        let card_area = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border)
            .border_style(tokens.border_style(true))
            .style(tokens.panel());
        let content_area = card.inner(card_area).inner(&Margin {
            vertical: 1,
            horizontal: 2,
        });
        frame.render_widget(card, card_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Brand + badge
                Constraint::Length(1), // Tagline
                Constraint::Length(1),
                Constraint::Length(1), // Status text
                Constraint::Length(1), // Progress bar
                Constraint::Length(1), // Process label + percent
                Constraint::Length(1),
                Constraint::Min(1), // Footer
            ])
            .split(content_area);

        self.render_brand(frame, rows[0], tokens);

        let tagline = Paragraph::new(SPLASH_TAGLINE).style(tokens.muted());
        frame.render_widget(tagline, rows[1]);

        let status = Paragraph::new(sequencer.status_text()).style(tokens.muted());
        frame.render_widget(status, rows[3]);

        let gauge = Gauge::default()
            .gauge_style(tokens.gauge())
            .use_unicode(true)
            .percent(u16::from(sequencer.progress()))
            .label("");
        frame.render_widget(gauge, rows[4]);

        self.render_process_line(frame, rows[5], sequencer, tokens);

        let footer = Paragraph::new(SPLASH_FOOTER)
            .alignment(Alignment::Center)
            .style(tokens.muted());
        frame.render_widget(footer, rows[7]);

        if tokens.overlays.scanlines {
            frame.render_widget(Scanlines, area);
        }
    }

    fn render_brand(&self, frame: &mut Frame, area: Rect, tokens: &ResolvedTokens) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(11)])
            .split(area);

        let brand = Line::from(vec![
            Span::styled("▣ ", Style::default().fg(tokens.accent)),
            Span::styled(
                tokens.heading_text(BRAND),
                tokens.heading().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(brand), columns[0]);

        let badge = Paragraph::new(Span::styled(format!(" {} ", SPLASH_BADGE), tokens.chip()))
            .alignment(Alignment::Right);
        frame.render_widget(badge, columns[1]);
    }

    fn render_process_line(
        &self,
        frame: &mut Frame,
        area: Rect,
        sequencer: &BootSequencer,
        tokens: &ResolvedTokens,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        frame.render_widget(Paragraph::new(SPLASH_PROCESS).style(tokens.muted()), columns[0]);
        frame.render_widget(
            Paragraph::new(format!("{}%", sequencer.progress()))
                .alignment(Alignment::Right)
                .style(tokens.muted()),
            columns[1],
        );
    }
}
