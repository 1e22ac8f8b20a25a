use std::sync::Arc;

use super::registry::SkinRegistry;
use super::tokens::ResolvedTokens;
use super::{Skin, SkinError, SkinId, SkinResult};
use crate::storage::PreferenceStore;

/// Key under which the selected skin id is stored
pub const SKIN_PREFERENCE_KEY: &str = "crix-skin";

/// Skin to start with: the stored id if it is registered, the default otherwise.
///
/// Never fails. An unavailable store, a missing entry, an unreadable store or
/// an unknown id all yield the registry default.
pub fn initial_skin(registry: &SkinRegistry, store: &dyn PreferenceStore) -> SkinId {
    if !store.is_available() {
        return registry.default_id();
    }

    match store.get(SKIN_PREFERENCE_KEY) {
        Ok(Some(raw)) => registry.lookup(&raw).unwrap_or_else(|| {
            tracing::debug!(stored = %raw, "ignoring unknown stored skin");
            registry.default_id()
        }),
        Ok(None) => registry.default_id(),
        Err(e) => {
            tracing::warn!("failed to read skin preference: {}", e);
            registry.default_id()
        }
    }
}

/// The active skin plus the store it is remembered in
#[derive(Debug)]
pub struct SkinSelector {
    registry: Arc<SkinRegistry>,
    store: Arc<dyn PreferenceStore>,
    active: SkinId,
    tokens: ResolvedTokens,
}

impl SkinSelector {
    pub fn new(registry: Arc<SkinRegistry>, store: Arc<dyn PreferenceStore>) -> Self {
        let active = initial_skin(&registry, store.as_ref());
        let tokens = ResolvedTokens::resolve(registry.resolve(active));
        tracing::debug!(skin = %active, "initial skin");

        Self {
            registry,
            store,
            active,
            tokens,
        }
    }

    pub fn registry(&self) -> &SkinRegistry {
        &self.registry
    }

    pub fn active_id(&self) -> SkinId {
        self.active
    }

    pub fn active(&self) -> &Skin {
        self.registry.resolve(self.active)
    }

    /// Styles of the active skin, resolved once per change
    pub fn tokens(&self) -> &ResolvedTokens {
        &self.tokens
    }

    /// Select a skin by raw id. Unknown ids are rejected and the current skin kept.
    pub fn set_skin(&mut self, raw: &str) -> SkinResult<SkinId> {
        let id = self
            .registry
            .lookup(raw)
            .ok_or_else(|| SkinError::UnknownSkin(raw.to_string()))?;
        self.select(id)
    }

    /// Select a skin by id and persist the choice
    pub fn select(&mut self, id: SkinId) -> SkinResult<SkinId> {
        if !self.registry.contains(id) {
            return Err(SkinError::UnknownSkin(id.to_string()));
        }

        if id != self.active {
            self.active = id;
            self.tokens = ResolvedTokens::resolve(self.registry.resolve(id));
            tracing::info!(skin = %id, "skin changed");
        }
        self.persist(id);
        Ok(id)
    }

    /// Select the skin at a zero-based switcher position
    pub fn select_position(&mut self, index: usize) -> SkinResult<SkinId> {
        let id = self
            .registry
            .at(index)
            .map(|skin| skin.id)
            .ok_or_else(|| SkinError::UnknownSkin(format!("#{}", index + 1)))?;
        self.select(id)
    }

    pub fn cycle_next(&mut self) -> SkinResult<SkinId> {
        let id = self.registry.next_after(self.active);
        self.select(id)
    }

    pub fn cycle_previous(&mut self) -> SkinResult<SkinId> {
        let id = self.registry.previous_before(self.active);
        self.select(id)
    }

    // Best-effort: a failed write never changes the in-memory selection.
    fn persist(&self, id: SkinId) {
        if let Err(e) = self.store.set(SKIN_PREFERENCE_KEY, id.as_str()) {
            tracing::warn!(skin = %id, "failed to persist skin preference: {}", e);
        }
    }
}
