use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::game::quiz::definition::QuestionId;
use crate::storage::KeyValueStore;


pub const KEY_SAVED: &str = "quiz_ind_saved";
pub const KEY_MISSED: &str = "quiz_ind_errors";

/// Saved and missed question ids, mirrored to the store on every change.
#[derive(Debug)]
pub struct PersistedSets<S> {
    store: S,
    saved: BTreeSet<QuestionId>,
    missed: BTreeSet<QuestionId>,
}

impl<S: KeyValueStore> PersistedSets<S> {
    pub fn load(store: S) -> Self {
        let saved = read_ids(&store, KEY_SAVED);
        let missed = read_ids(&store, KEY_MISSED);
        debug!(
            "Loaded {} saved and {} missed question ids",
            saved.len(),
            missed.len()
        );
        PersistedSets {
            store,
            saved,
            missed,
        }
    }

    #[cfg(test)]
    pub fn saved(&self) -> &BTreeSet<QuestionId> {
        &self.saved
    }

    #[cfg(test)]
    pub fn missed(&self) -> &BTreeSet<QuestionId> {
        &self.missed
    }

    pub fn is_saved(&self, id: QuestionId) -> bool {
        self.saved.contains(&id)
    }

    pub fn is_missed(&self, id: QuestionId) -> bool {
        self.missed.contains(&id)
    }

    /// Returns whether the question is saved after the toggle.
    pub fn toggle_saved(&mut self, id: QuestionId) -> bool {
        let is_saved = if self.saved.remove(&id) {
            false
        } else {
            self.saved.insert(id)
        };
        write_ids(&mut self.store, KEY_SAVED, &self.saved);
        is_saved
    }

    /// Keeps `missed` in sync with the most recent check of each question.
    pub fn record_outcome(&mut self, id: QuestionId, is_correct: bool) {
        let changed = if is_correct {
            self.missed.remove(&id)
        } else {
            self.missed.insert(id)
        };
        if changed {
            write_ids(&mut self.store, KEY_MISSED, &self.missed);
        }
    }
}

fn read_ids<S: KeyValueStore>(store: &S, key: &str) -> BTreeSet<QuestionId> {
    let raw = match store.get(key) {
        Some(raw) => raw,
        None => return BTreeSet::new(),
    };
    match serde_json::from_str::<Vec<QuestionId>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            warn!("Ignoring malformed value under {}: {}", key, e);
            BTreeSet::new()
        }
    }
}

fn write_ids<S: KeyValueStore>(store: &mut S, key: &str, ids: &BTreeSet<QuestionId>) {
    let result = serde_json::to_string(ids)
        .map_err(anyhow::Error::from)
        .and_then(|value| store.set(key, &value));
    if let Err(e) = result {
        warn!("Could not persist {}: {:#}", key, e);
    }
}
