use anyhow::{anyhow, Error, Result};
use rand::Rng;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use crate::game::quiz::definition::{Question, QuestionBank, QuestionId};
use crate::game::quiz::persisted::PersistedSets;
use crate::storage::KeyValueStore;


pub type Queue = Vec<Arc<Question>>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterMode {
    All,
    Saved,
    Missed,
}

impl FilterMode {
    pub fn admits<S: KeyValueStore>(self, id: QuestionId, sets: &PersistedSets<S>) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Saved => sets.is_saved(id),
            FilterMode::Missed => sets.is_missed(id),
        }
    }
}

impl Default for FilterMode {
    fn default() -> Self {
        FilterMode::All
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" | "tutti" => Ok(FilterMode::All),
            "saved" | "salvati" => Ok(FilterMode::Saved),
            "missed" | "errors" | "sbagliati" => Ok(FilterMode::Missed),
            other => Err(anyhow!("Unknown filter: {}", other)),
        }
    }
}

/// Builds the working queue. Membership is a snapshot of `sets` at call time.
pub fn build<S, R>(
    bank: &QuestionBank,
    filter: FilterMode,
    sets: &PersistedSets<S>,
    randomize: bool,
    rng: &mut R,
) -> Queue
where
    S: KeyValueStore,
    R: Rng + ?Sized,
{
    let mut queue: Queue = bank
        .questions()
        .iter()
        .filter(|q| filter.admits(q.id, sets))
        .cloned()
        .collect();

    if randomize {
        shuffle(&mut queue, rng);
    } else {
        queue.sort_by_key(|q| q.id);
    }

    debug!(
        "Built queue of {} questions (filter: {:?}, randomize: {})",
        queue.len(),
        filter,
        randomize
    );
    queue
}

/// Fisher-Yates: every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
