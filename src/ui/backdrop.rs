//! Decorative page backgrounds.
//!
//! Overlays only ever change cell styles, never symbols, so switching skins
//! leaves the rendered text untouched.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::skin::ResolvedTokens;

/// Page background with the skin's noise or tile pattern
pub struct Backdrop<'a> {
    tokens: &'a ResolvedTokens,
}

impl<'a> Backdrop<'a> {
    pub fn new(tokens: &'a ResolvedTokens) -> Self {
        Self { tokens }
    }
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = self.tokens.page();
        let tinted = base.bg(self.tokens.overlay_tint);
        let overlays = self.tokens.overlays;
        let threshold = (self.tokens.overlay_opacity * 100.0).round() as u32;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let tint = (overlays.noise && noise(x, y) < threshold)
                    || (overlays.tiled && tile(x, y));
                let cell = buf.get_mut(x, y);
                cell.set_symbol(" ");
                cell.set_style(if tint { tinted } else { base });
            }
        }
    }
}

/// Dims every other row, drawn on top of the finished page
pub struct Scanlines;

impl Widget for Scanlines {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        for y in (area.top()..area.bottom()).filter(|y| y % 2 == 1) {
            buf.set_style(Rect::new(area.x, y, area.width, 1), dim);
        }
    }
}

// Cheap deterministic hash so the grain stays put between frames.
fn noise(x: u16, y: u16) -> u32 {
    let h = u32::from(x)
        .wrapping_mul(73_856_093)
        ^ u32::from(y).wrapping_mul(19_349_663);
    ((h.wrapping_mul(2_654_435_761) >> 16) & 0xffff) % 100
}

fn tile(x: u16, y: u16) -> bool {
    (x / 4 + y / 2) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::{builtin_skins, ResolvedTokens, SkinId};

    fn tokens(id: SkinId) -> ResolvedTokens {
        let skins = builtin_skins().unwrap();
        ResolvedTokens::resolve(skins.iter().find(|s| s.id == id).unwrap())
    }

    #[test]
    fn test_noise_is_deterministic_and_bounded() {
        for y in 0..20 {
            for x in 0..80 {
                assert_eq!(noise(x, y), noise(x, y));
                assert!(noise(x, y) < 100);
            }
        }
    }

    #[test]
    fn test_backdrop_only_paints_blank_cells() {
        for id in SkinId::ALL {
            let tokens = tokens(id);
            let area = Rect::new(0, 0, 40, 10);
            let mut buf = Buffer::empty(area);
            Backdrop::new(&tokens).render(area, &mut buf);
            assert!(buf.content.iter().all(|cell| cell.symbol() == " "));
        }
    }

    #[test]
    fn test_tiled_backdrop_alternates() {
        let tokens = tokens(SkinId::Neocities);
        let area = Rect::new(0, 0, 16, 4);
        let mut buf = Buffer::empty(area);
        Backdrop::new(&tokens).render(area, &mut buf);

        assert_eq!(buf.get(0, 0).bg, tokens.overlay_tint);
        assert_eq!(buf.get(4, 0).bg, tokens.page_background);
        assert_eq!(buf.get(0, 2).bg, tokens.page_background);
    }

    #[test]
    fn test_plain_backdrop_has_no_tint() {
        let tokens = tokens(SkinId::Terminal);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        Backdrop::new(&tokens).render(area, &mut buf);
        assert!(buf.content.iter().all(|cell| cell.bg == tokens.page_background));
    }

    #[test]
    fn test_scanlines_dim_odd_rows() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        Scanlines.render(area, &mut buf);

        assert!(!buf.get(0, 0).modifier.contains(Modifier::DIM));
        assert!(buf.get(0, 1).modifier.contains(Modifier::DIM));
        assert!(!buf.get(5, 2).modifier.contains(Modifier::DIM));
        assert!(buf.get(9, 3).modifier.contains(Modifier::DIM));
    }
}
