use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use super::Skin;

/// Token keys every skin defines and the renderer reads
pub const TOKEN_KEYS: [&str; 13] = [
    "accent",
    "accent_alt",
    "border",
    "heading_case",
    "heading_weight",
    "highlight",
    "ink",
    "ink_muted",
    "line",
    "overlay_opacity",
    "overlay_tint",
    "surface",
    "surface_alt",
];

/// Decorative overlays switched on by a skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub noise: bool,
    pub scanlines: bool,
    pub tiled: bool,
}

impl Overlays {
    pub fn any(&self) -> bool {
        self.noise || self.scanlines || self.tiled
    }
}

/// A skin's string tokens converted into terminal styles.
///
/// Resolution never fails: a missing or malformed value is logged and replaced
/// with the terminal default for that slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTokens {
    pub ink: Color,
    pub ink_muted: Color,
    pub surface: Color,
    pub surface_alt: Color,
    pub line: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub highlight: Color,
    pub overlay_tint: Color,
    pub page_background: Color,
    pub hero_background: Color,
    /// Share of cells touched by the noise and tile overlays, in `0.0..=1.0`
    pub overlay_opacity: f32,
    pub border: BorderType,
    pub heading_modifier: Modifier,
    pub uppercase_headings: bool,
    pub overlays: Overlays,
}

impl ResolvedTokens {
    pub fn resolve(skin: &Skin) -> Self {
        // Translucent colors are composited over the surface, so resolve it first.
        let surface = color_token(skin, "surface", Color::Reset, Color::Reset);
        let color = |key: &str, fallback: Color| color_token(skin, key, surface, fallback);

        let surface_alt = color("surface_alt", surface);
        let page_background = optional_color(skin, skin.page_background.as_deref(), surface, surface);
        let hero_background = optional_color(skin, skin.hero_overlay.as_deref(), surface, surface_alt);

        Self {
            ink: color("ink", Color::Reset),
            ink_muted: color("ink_muted", Color::Reset),
            surface,
            surface_alt,
            line: color("line", Color::Reset),
            accent: color("accent", Color::Reset),
            accent_alt: color("accent_alt", Color::Reset),
            highlight: color("highlight", Color::Reset),
            overlay_tint: color("overlay_tint", surface),
            page_background,
            hero_background,
            overlay_opacity: opacity_token(skin, "overlay_opacity"),
            border: border_token(skin),
            heading_modifier: match skin.token("heading_weight") {
                Some("bold") => Modifier::BOLD,
                _ => Modifier::empty(),
            },
            uppercase_headings: skin.token("heading_case") == Some("upper"),
            overlays: Overlays {
                noise: skin.show_noise,
                scanlines: skin.scanlines,
                tiled: skin.tiled_background,
            },
        }
    }

    pub fn page(&self) -> Style {
        Style::default().fg(self.ink).bg(self.page_background)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.ink).bg(self.surface)
    }

    pub fn hero(&self) -> Style {
        Style::default().fg(self.ink).bg(self.hero_background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.ink_muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.ink).add_modifier(self.heading_modifier)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.accent } else { self.line })
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn chip(&self) -> Style {
        Style::default().fg(self.ink).bg(self.surface_alt)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.surface)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.surface)
            .bg(self.accent_alt)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge(&self) -> Style {
        Style::default().fg(self.accent).bg(self.surface_alt)
    }

    /// Apply the skin's heading case to a heading string
    pub fn heading_text(&self, text: &str) -> String {
        if self.uppercase_headings {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

fn color_token(skin: &Skin, key: &str, backdrop: Color, fallback: Color) -> Color {
    match skin.token(key) {
        Some(value) => parse_color(value, backdrop).unwrap_or_else(|| {
            tracing::warn!(skin = %skin.id, key, value, "unparseable color token");
            fallback
        }),
        None => {
            tracing::warn!(skin = %skin.id, key, "missing color token");
            fallback
        }
    }
}

fn optional_color(skin: &Skin, value: Option<&str>, backdrop: Color, fallback: Color) -> Color {
    match value {
        Some(value) => parse_color(value, backdrop).unwrap_or_else(|| {
            tracing::warn!(skin = %skin.id, value, "unparseable background color");
            fallback
        }),
        None => fallback,
    }
}

fn opacity_token(skin: &Skin, key: &str) -> f32 {
    match skin.token(key).map(|v| v.trim().parse::<f32>()) {
        Some(Ok(value)) if value.is_finite() => value.clamp(0.0, 1.0),
        _ => {
            tracing::warn!(skin = %skin.id, key, "invalid opacity token");
            0.0
        }
    }
}

fn border_token(skin: &Skin) -> BorderType {
    match skin.token("border") {
        Some("plain") => BorderType::Plain,
        Some("rounded") => BorderType::Rounded,
        Some("double") => BorderType::Double,
        Some("thick") => BorderType::Thick,
        other => {
            tracing::warn!(skin = %skin.id, value = ?other, "unknown border token");
            BorderType::Plain
        }
    }
}

/// Parse `#rrggbb`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
///
/// Alpha is composited over `backdrop` when the backdrop is an RGB color.
pub fn parse_color(value: &str, backdrop: Color) -> Option<Color> {
    let value = value.trim();

    if value.starts_with('#') {
        let (r, g, b) = hex_to_rgb(value)?;
        return Some(Color::Rgb(r, g, b));
    }

    let (args, has_alpha) = if let Some(rest) = value.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = value.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let alpha = if has_alpha {
        let a = parts[3].parse::<f32>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };

    Some(blend((r, g, b), backdrop, alpha))
}

/// Convert a `#rrggbb` string to its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.starts_with('#') || hex.len() != 7 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some((r, g, b))
}

fn blend((r, g, b): (u8, u8, u8), backdrop: Color, alpha: f32) -> Color {
    let Color::Rgb(br, bg, bb) = backdrop else {
        return Color::Rgb(r, g, b);
    };
    let mix = |fg: u8, bg: u8| -> u8 {
        (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}
