//! The favorites store: animal ids the visitor has marked.
//!
//! Ids keep insertion order for display. Every toggle is written through to
//! storage before the in-memory list changes; a failed write leaves both
//! untouched. The store is independent of the session: logging out keeps
//! favorites, and toggling never touches the session records.

use tracing::debug;

use crate::storage::{self, KeyValueStore, StorageError, FAVORITES_KEY};

#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    ids: Vec<i64>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the persisted favorites; a corrupt record counts as empty.
    pub fn restore(storage: S) -> Self {
        let stored: Vec<i64> = storage::load_json(&storage, FAVORITES_KEY).unwrap_or_default();
        let mut ids = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        debug!(count = ids.len(), "favorites restored");
        Self { storage, ids }
    }

    /// Add `animal_id` if absent, remove it if present. Returns whether the
    /// animal is a favorite afterwards.
    pub fn toggle_favorite(&mut self, animal_id: i64) -> Result<bool, StorageError> {
        let mut next = self.ids.clone();
        let now_favorite = match next.iter().position(|&id| id == animal_id) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(animal_id);
                true
            }
        };

        storage::save_json(&self.storage, FAVORITES_KEY, &next)?;
        self.ids = next;
        debug!(animal_id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, animal_id: i64) -> bool {
        self.ids.contains(&animal_id)
    }

    /// Favorite ids in the order they were added.
    pub fn favorites(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
