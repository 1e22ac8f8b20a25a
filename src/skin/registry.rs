use std::collections::BTreeSet;

use super::builtin::{builtin_skins, DEFAULT_SKIN};
use super::{Skin, SkinError, SkinId, SkinResult};

/// Immutable table of the available skins.
///
/// Built once at start-up and shared read-only. Construction checks that ids
/// are unique, that the default is present and that every skin defines the
/// same token keys, so lookups never have to cope with a half-defined skin.
#[derive(Debug, Clone)]
pub struct SkinRegistry {
    skins: Vec<Skin>,
    default_index: usize,
}

impl SkinRegistry {
    pub fn new(skins: Vec<Skin>, default_id: SkinId) -> SkinResult<Self> {
        let reference = skins.first().ok_or(SkinError::Empty)?;
        let reference_keys = reference.token_keys();

        let mut seen = BTreeSet::new();
        for skin in &skins {
            if !seen.insert(skin.id) {
                return Err(SkinError::Duplicate(skin.id));
            }

            let keys = skin.token_keys();
            if keys != reference_keys {
                return Err(SkinError::TokenMismatch {
                    skin: skin.id,
                    reference: reference.id,
                    missing: reference_keys
                        .difference(&keys)
                        .map(|k| k.to_string())
                        .collect(),
                    unexpected: keys
                        .difference(&reference_keys)
                        .map(|k| k.to_string())
                        .collect(),
                });
            }
        }

        let default_index = skins
            .iter()
            .position(|s| s.id == default_id)
            .ok_or(SkinError::MissingDefault(default_id))?;

        Ok(Self {
            skins,
            default_index,
        })
    }

    /// Registry of the built-in skins with the standard default
    pub fn builtin() -> SkinResult<Self> {
        Self::new(builtin_skins()?, DEFAULT_SKIN)
    }

    pub fn default_id(&self) -> SkinId {
        self.skins[self.default_index].id
    }

    pub fn default_skin(&self) -> &Skin {
        &self.skins[self.default_index]
    }

    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    pub fn ids(&self) -> Vec<SkinId> {
        self.skins.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }

    pub fn get(&self, id: SkinId) -> Option<&Skin> {
        self.skins.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SkinId) -> bool {
        self.get(id).is_some()
    }

    /// Parse a raw id and check it is registered
    pub fn lookup(&self, raw: &str) -> Option<SkinId> {
        raw.parse::<SkinId>().ok().filter(|id| self.contains(*id))
    }

    /// Skin for an id, or the default skin if it is not registered
    pub fn resolve(&self, id: SkinId) -> &Skin {
        self.get(id).unwrap_or_else(|| self.default_skin())
    }

    /// Skin for a raw id, or the default skin if the id is unknown
    pub fn resolve_str(&self, raw: &str) -> &Skin {
        match self.lookup(raw) {
            Some(id) => self.resolve(id),
            None => self.default_skin(),
        }
    }

    /// Zero-based position of a skin in switcher order
    pub fn position(&self, id: SkinId) -> Option<usize> {
        self.skins.iter().position(|s| s.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Skin> {
        self.skins.get(index)
    }

    /// Skin following `id` in switcher order, wrapping around
    pub fn next_after(&self, id: SkinId) -> SkinId {
        let index = self.position(id).unwrap_or(self.default_index);
        self.skins[(index + 1) % self.skins.len()].id
    }

    /// Skin preceding `id` in switcher order, wrapping around
    pub fn previous_before(&self, id: SkinId) -> SkinId {
        let index = self.position(id).unwrap_or(self.default_index);
        self.skins[(index + self.skins.len() - 1) % self.skins.len()].id
    }
}
