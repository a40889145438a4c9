//! InMemoryPersistence - records saves in memory, for tests and
//! non-persisting deployments.

use std::sync::{Arc, RwLock};

use super::Persistence;
use crate::country::Country;
use crate::error::PersistenceError;

#[derive(Default)]
struct State {
    seed: Vec<Country>,
    saved: Option<Vec<Country>>,
    saves: usize,
    fail_saves: bool,
}

/// Persistence fake backed by a shared in-memory snapshot.
///
/// Clones share state, so a test can keep a handle after moving one into
/// the store and inspect what was written.
#[derive(Clone, Default)]
pub struct InMemoryPersistence {
    state: Arc<RwLock<State>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `countries` as the persisted list.
    pub fn with_countries(countries: Vec<Country>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                seed: countries,
                ..State::default()
            })),
        }
    }

    /// Make every subsequent `save` fail.
    pub fn fail_saves(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_saves = fail;
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.state.read().map(|s| s.saves).unwrap_or(0)
    }

    /// The list written by the last successful save.
    pub fn last_saved(&self) -> Option<Vec<Country>> {
        self.state.read().ok().and_then(|s| s.saved.clone())
    }
}

impl Persistence for InMemoryPersistence {
    fn load(&self) -> Result<Vec<Country>, PersistenceError> {
        let state = self
            .state
            .read()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;
        Ok(state.saved.clone().unwrap_or_else(|| state.seed.clone()))
    }

    fn save(&self, countries: &[Country]) -> Result<(), PersistenceError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;

        if state.fail_saves {
            return Err(PersistenceError::Unavailable("save disabled".into()));
        }

        state.saved = Some(countries.to_vec());
        state.saves += 1;
        Ok(())
    }
}
