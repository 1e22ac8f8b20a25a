//! Built-in skins.
//!
//! Each skin is an embedded TOML document. All of them define the same token
//! keys; the registry refuses to start otherwise.

use super::{Skin, SkinId, SkinResult};

/// Skin used when nothing valid is stored
pub const DEFAULT_SKIN: SkinId = SkinId::Y2k;

const Y2K: &str = r##"
id = "y2k"
name = "Y2K Gloss"
description = "Glossy chrome, aqua gradients and soft glass panels"
page_background = "#2bb5c8"
hero_overlay = "rgba(99,183,255,0.55)"
show_noise = true

[tokens]
ink = "#0b2a4a"
ink_muted = "rgba(11,42,74,0.78)"
surface = "#dff3ff"
surface_alt = "#bfffe7"
line = "#63b7ff"
accent = "#3f7dff"
accent_alt = "#2ee7d1"
highlight = "#1fb2c8"
overlay_tint = "rgba(255,255,255,0.20)"
overlay_opacity = "0.28"
border = "rounded"
heading_weight = "bold"
heading_case = "normal"
"##;

const TERMINAL: &str = r##"
id = "terminal"
name = "Terminal"
description = "Phosphor green on black with CRT scanlines"
page_background = "#000000"
scanlines = true

[tokens]
ink = "#33ff66"
ink_muted = "#1fa84a"
surface = "#050805"
surface_alt = "#0b140b"
line = "#1f7a3a"
accent = "#33ff66"
accent_alt = "#9dff9d"
highlight = "#ffcc00"
overlay_tint = "rgba(51,255,102,0.12)"
overlay_opacity = "0.50"
border = "plain"
heading_weight = "bold"
heading_case = "upper"
"##;

const DARK: &str = r##"
id = "dark"
name = "Dark Glass"
description = "Smoked glass panels over a midnight backdrop"
page_background = "#0a0d16"
hero_overlay = "#1b2440"
show_noise = true

[tokens]
ink = "#e6edf7"
ink_muted = "rgba(230,237,247,0.68)"
surface = "#0f1320"
surface_alt = "#171c2e"
line = "#2c3552"
accent = "#7aa2ff"
accent_alt = "#b38cff"
highlight = "#5eead4"
overlay_tint = "rgba(255,255,255,0.06)"
overlay_opacity = "0.12"
border = "rounded"
heading_weight = "bold"
heading_case = "normal"
"##;

const NEOCITIES: &str = r##"
id = "neocities"
name = "Neocities"
description = "Hand-made homepage energy: tiled backdrops and loud links"
page_background = "#ffd6ec"
tiled_background = true

[tokens]
ink = "#1a0033"
ink_muted = "#5b2a86"
surface = "#fff6fb"
surface_alt = "#ffe1f0"
line = "#ff3fa4"
accent = "#0000ee"
accent_alt = "#551a8b"
highlight = "#ffff00"
overlay_tint = "rgba(255,63,164,0.18)"
overlay_opacity = "0.50"
border = "double"
heading_weight = "bold"
heading_case = "upper"
"##;

/// Parse every built-in skin, in switcher order
pub fn builtin_skins() -> SkinResult<Vec<Skin>> {
    [Y2K, TERMINAL, DARK, NEOCITIES]
        .into_iter()
        .map(Skin::from_toml)
        .collect()
}
