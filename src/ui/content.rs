//! Static copy for the splash and landing page.

/// A plain outbound link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// One of the landing page feature cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const BRAND: &str = "Crix";
pub const BRAND_SUBTITLE: &str = "UI Framework";

pub const DOCS: NavLink = NavLink {
    label: "Docs",
    href: "/docs",
};
pub const BUILDER: NavLink = NavLink {
    label: "Builder",
    href: "/builder",
};
pub const NAV_LINKS: [NavLink; 2] = [DOCS, BUILDER];

pub const SPLASH_TAGLINE: &str = "skin-first • cross-platform • glossy UI";
pub const SPLASH_BADGE: &str = "booting";
pub const SPLASH_PROCESS: &str = "boot.exe";
pub const SPLASH_FOOTER: &str = "© 2025 Crix Framework";

pub const HERO_KICKER: &str = "glossy • chrome • skins";
pub const HERO_TITLE: &str = "Crix UI Framework";
pub const HERO_BODY: &str = "A skin-first, cross-platform UI framework for glossy desktop vibes, \
with modern ergonomics and a builder-friendly architecture.";
pub const HERO_PRIMARY_CTA: &str = "Read the Docs";
pub const HERO_SECONDARY_CTA: &str = "Open Builder";

pub const ABOUT_KICKER: &str = "What is Crix?";
pub const ABOUT_TITLE: &str = "Skin-first UI, by design";
pub const ABOUT_BODY: &str = "Crix treats the visual layer as data: palettes, materials, borders, \
highlights, and layout rules are all part of the \u{201c}skin.\u{201d} You can ship radically \
different looks without rewriting component logic.";
pub const ABOUT_TAGS: [&str; 5] = [
    "Themes as data",
    "Chrome + glass materials",
    "Predictable layout",
    "Micro-motion (optional)",
    "Builder-ready output",
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Skin-first",
        description: "Swap the vibe with a skin file: colors, materials, and affordances.",
    },
    Feature {
        title: "Builder",
        description: "A visual editor that generates real projects you can commit and ship.",
    },
    Feature {
        title: "Cross-platform",
        description: "One UI tree with consistent rendering and input behavior across targets.",
    },
    Feature {
        title: "Delight",
        description: "Gloss, depth, and subtle motion, enabled when you want it.",
    },
];

pub const SWITCHER_TITLE: &str = "Skins";
pub const SWITCHER_HINT: &str = "Tab/←→ cycle · 1-4 pick · q quit";
pub const COPYRIGHT: &str = "© 2025";
