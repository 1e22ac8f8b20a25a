use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::backdrop::{Backdrop, Scanlines};
use super::content::{
    NavLink, ABOUT_BODY, ABOUT_KICKER, ABOUT_TAGS, ABOUT_TITLE, BRAND, BRAND_SUBTITLE, BUILDER,
    COPYRIGHT, DOCS, FEATURES, HERO_BODY, HERO_KICKER, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA,
    HERO_TITLE, NAV_LINKS, SWITCHER_HINT, SWITCHER_TITLE,
};
use crate::skin::{ResolvedTokens, SkinSelector};

/// Section rectangles of the landing page.
///
/// Depends only on the terminal size, so every skin lays out identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub hero: Rect,
    pub about: Rect,
    pub features: Rect,
    pub switcher: Rect,
    pub footer: Rect,
}

impl PageLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(9), // Hero
                Constraint::Length(8), // About
                Constraint::Min(5),    // Feature cards
                Constraint::Length(3), // Skin switcher
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            hero: chunks[1],
            about: chunks[2],
            features: chunks[3],
            switcher: chunks[4],
            footer: chunks[5],
        }
    }

    /// One rectangle per feature card
    pub fn feature_cards(&self) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, FEATURES.len() as u32); FEATURES.len()])
            .split(self.features)
            .to_vec()
    }
}

/// The main view shown after the splash
#[derive(Debug, Default)]
pub struct LandingPage;

impl LandingPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, selector: &SkinSelector) {
        let tokens = selector.tokens();
        let layout = PageLayout::compute(area);

        frame.render_widget(Clear, area);
        frame.render_widget(Backdrop::new(tokens), area);

        self.render_header(frame, layout.header, tokens);
        self.render_hero(frame, layout.hero, tokens);
        self.render_about(frame, layout.about, tokens);
        self.render_features(frame, &layout, tokens);
        self.render_switcher(frame, layout.switcher, selector);
        self.render_footer(frame, layout.footer, tokens);

        if tokens.overlays.scanlines {
            frame.render_widget(Scanlines, area);
        }
    }

    fn panel<'a>(&self, tokens: &ResolvedTokens) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(tokens.border)
            .border_style(tokens.border_style(false))
            .style(tokens.panel())
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, tokens: &ResolvedTokens) {
        let block = self.panel(tokens);
        let inner = block.inner(area).inner(&Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(block, area);

        let nav: Vec<Span> = NAV_LINKS
            .iter()
            .flat_map(|link| link_spans(link, tokens))
            .collect();
        let nav_width = Line::from(nav.clone()).width() as u16;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(nav_width)])
            .split(inner);

        let brand = Line::from(vec![
            Span::styled("▣ ", Style::default().fg(tokens.accent)),
            Span::styled(tokens.heading_text(BRAND), tokens.heading()),
            Span::raw(" "),
            Span::styled(BRAND_SUBTITLE, tokens.muted()),
        ]);
        frame.render_widget(Paragraph::new(brand), columns[0]);
        frame.render_widget(
            Paragraph::new(Line::from(nav)).alignment(Alignment::Right),
            columns[1],
        );
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect, tokens: &ResolvedTokens) {
        let block = self.panel(tokens).style(tokens.hero());
        let inner = block.inner(area).inner(&Margin {
            vertical: 0,
            horizontal: 2,
        });
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Kicker
                Constraint::Length(1), // Title
                Constraint::Min(1),    // Body
                Constraint::Length(1), // Calls to action
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", HERO_KICKER), tokens.chip())),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(tokens.heading_text(HERO_TITLE), tokens.heading())),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(HERO_BODY).wrap(Wrap { trim: true }),
            rows[2],
        );

        let actions = Line::from(vec![
            Span::styled(format!(" {} ", HERO_PRIMARY_CTA), tokens.button()),
            Span::styled(format!(" {} ", DOCS.href), tokens.muted()),
            Span::raw("  "),
            Span::styled(format!(" {} ", HERO_SECONDARY_CTA), tokens.chip()),
            Span::styled(format!(" {} ", BUILDER.href), tokens.muted()),
        ]);
        frame.render_widget(Paragraph::new(actions), rows[3]);
    }

    fn render_about(&self, frame: &mut Frame, area: Rect, tokens: &ResolvedTokens) {
        let block = self.panel(tokens);
        let inner = block.inner(area).inner(&Margin {
            vertical: 0,
            horizontal: 2,
        });
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(ABOUT_KICKER, Style::default().fg(tokens.accent_alt))),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(tokens.heading_text(ABOUT_TITLE), tokens.heading())),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(ABOUT_BODY)
                .style(tokens.muted())
                .wrap(Wrap { trim: true }),
            rows[2],
        );

        let mut tags = Vec::with_capacity(ABOUT_TAGS.len() * 2);
        for tag in ABOUT_TAGS {
            tags.push(Span::styled(format!(" {} ", tag), tokens.chip()));
            tags.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(tags)), rows[3]);
    }

    fn render_features(&self, frame: &mut Frame, layout: &PageLayout, tokens: &ResolvedTokens) {
        for (feature, area) in FEATURES.iter().zip(layout.feature_cards()) {
            let block = self
                .panel(tokens)
                .title(Span::styled(tokens.heading_text(feature.title), tokens.heading()));
            let inner = block.inner(area).inner(&Margin {
                vertical: 0,
                horizontal: 1,
            });
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(feature.description)
                    .style(tokens.muted())
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
    }

    fn render_switcher(&self, frame: &mut Frame, area: Rect, selector: &SkinSelector) {
        let tokens = selector.tokens();
        let block = self
            .panel(tokens)
            .border_style(tokens.border_style(true))
            .title(Span::styled(tokens.heading_text(SWITCHER_TITLE), tokens.heading()));
        let inner = block.inner(area).inner(&Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(block, area);

        let hint_width = Line::from(SWITCHER_HINT).width() as u16;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(hint_width)])
            .split(inner);

        let active = selector.active_id();
        let mut entries = Vec::new();
        for (index, skin) in selector.registry().skins().iter().enumerate() {
            let (marker, style) = if skin.id == active {
                ("▸", tokens.selected())
            } else {
                (" ", tokens.chip())
            };
            entries.push(Span::styled(
                format!("{}{} {} ", marker, index + 1, skin.name),
                style,
            ));
            entries.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(entries)), columns[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(SWITCHER_HINT, tokens.muted())).alignment(Alignment::Right),
            columns[1],
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, tokens: &ResolvedTokens) {
        let mut spans = vec![
            Span::styled(format!("{} {}", COPYRIGHT, BRAND), tokens.muted()),
            Span::styled(" · ", tokens.muted()),
        ];
        spans.extend(NAV_LINKS.iter().flat_map(|link| link_spans(link, tokens)));

        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .style(tokens.page()),
            area,
        );
    }
}

fn link_spans<'a>(link: &NavLink, tokens: &ResolvedTokens) -> [Span<'a>; 2] {
    [
        Span::styled(link.label, tokens.link()),
        Span::styled(format!(" {}  ", link.href), tokens.muted()),
    ]
}
