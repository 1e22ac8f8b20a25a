pub mod builtin;
pub mod registry;
pub mod selector;
pub mod tokens;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use builtin::{builtin_skins, DEFAULT_SKIN};
pub use registry::SkinRegistry;
pub use selector::{initial_skin, SkinSelector, SKIN_PREFERENCE_KEY};
pub use tokens::{Overlays, ResolvedTokens, TOKEN_KEYS};

pub type SkinResult<T> = Result<T, SkinError>;

/// Skin definition and selection errors
#[derive(Error, Debug)]
pub enum SkinError {
    /// Requested id is not a registered skin
    #[error("Unknown skin: {0}")]
    UnknownSkin(String),

    /// Embedded skin definition could not be parsed
    #[error("Failed to parse skin definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Skin '{0}' is registered more than once")]
    Duplicate(SkinId),

    #[error("Default skin '{0}' is not registered")]
    MissingDefault(SkinId),

    #[error("No skins registered")]
    Empty,

    /// A skin does not define the same token keys as the rest of the registry
    #[error("Skin '{skin}' tokens differ from '{reference}': missing {missing:?}, unexpected {unexpected:?}")]
    TokenMismatch {
        skin: SkinId,
        reference: SkinId,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// Identifier of a built-in skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinId {
    Y2k,
    Terminal,
    Dark,
    Neocities,
}

impl SkinId {
    pub const ALL: [SkinId; 4] = [
        SkinId::Y2k,
        SkinId::Terminal,
        SkinId::Dark,
        SkinId::Neocities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinId::Y2k => "y2k",
            SkinId::Terminal => "terminal",
            SkinId::Dark => "dark",
            SkinId::Neocities => "neocities",
        }
    }
}

impl fmt::Display for SkinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SkinId {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SkinError::UnknownSkin(s.to_string()))
    }
}

/// A named, immutable bundle of style tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub id: SkinId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tokens: BTreeMap<String, String>,
    /// Color painted behind the whole page; falls back to the `surface` token
    #[serde(default)]
    pub page_background: Option<String>,
    /// Color tinting the hero section; falls back to the `surface_alt` token
    #[serde(default)]
    pub hero_overlay: Option<String>,
    #[serde(default)]
    pub show_noise: bool,
    #[serde(default)]
    pub scanlines: bool,
    #[serde(default)]
    pub tiled_background: bool,
}

impl Skin {
    /// Parse a skin from its TOML definition
    pub fn from_toml(source: &str) -> SkinResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn token(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }

    pub fn token_keys(&self) -> BTreeSet<&str> {
        self.tokens.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_id_round_trip() {
        for id in SkinId::ALL {
            assert_eq!(id.as_str().parse::<SkinId>().unwrap(), id);
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_unknown_skin_id() {
        assert!(matches!(
            "bogus".parse::<SkinId>(),
            Err(SkinError::UnknownSkin(ref s)) if s == "bogus"
        ));
        // Ids are matched exactly, the way a stored key is compared
        assert!("Terminal".parse::<SkinId>().is_err());
        assert!(" dark".parse::<SkinId>().is_err());
    }

    #[test]
    fn test_skin_from_toml_defaults() {
        let skin = Skin::from_toml(
            r##"
id = "dark"
name = "Minimal"

[tokens]
ink = "#ffffff"
"##,
        )
        .unwrap();

        assert_eq!(skin.id, SkinId::Dark);
        assert_eq!(skin.token("ink"), Some("#ffffff"));
        assert_eq!(skin.token("accent"), None);
        assert!(skin.page_background.is_none());
        assert!(!skin.show_noise && !skin.scanlines && !skin.tiled_background);
    }

    #[test]
    fn test_skin_from_toml_rejects_unknown_id() {
        let result = Skin::from_toml(
            r#"
id = "vaporwave"
name = "Nope"
[tokens]
"#,
        );
        assert!(matches!(result, Err(SkinError::Parse(_))));
    }
}
