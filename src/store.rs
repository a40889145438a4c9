//! CountryStore - the ordered country list and its only mutation point.
//!
//! Records keep insertion order. Every mutation is staged on a copy of the
//! list, handed to the persistence port, and only then made visible, all
//! while the write lock is held. A failed save therefore leaves both the
//! in-memory list and the id counter untouched.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::country::{Country, CountryInput};
use crate::error::StoreError;
use crate::persistence::Persistence;
use crate::query::{self, QueryOptions};

struct Records {
    countries: Vec<Country>,
    /// Next id to hand out. Never decreases, so ids freed by a delete are
    /// not reused. `None` once `u64::MAX` has been used.
    next_id: Option<u64>,
}

impl Records {
    fn new(countries: Vec<Country>) -> Self {
        let next_id = match countries.iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { countries, next_id }
    }

    fn position_by_code(&self, code: &str) -> Option<usize> {
        self.countries.iter().position(|c| c.matches_code(code))
    }

    fn position_by_id(&self, id: u64) -> Option<usize> {
        self.countries.iter().position(|c| c.id == id)
    }
}

/// How an edit locates its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryKey<'a> {
    Code(&'a str),
    Id(u64),
}

impl std::fmt::Display for CountryKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryKey::Code(code) => write!(f, "code {}", code),
            CountryKey::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// In-memory country list with a pluggable persistence port.
pub struct CountryStore<P> {
    records: RwLock<Records>,
    persistence: P,
}

impl<P: Persistence> CountryStore<P> {
    /// Hydrate a store from whatever `persistence` currently holds.
    pub fn open(persistence: P) -> Result<Self, StoreError> {
        let countries = persistence.load()?;
        info!(count = countries.len(), "country store loaded");
        Ok(Self {
            records: RwLock::new(Records::new(countries)),
            persistence,
        })
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// All records in insertion order.
    pub fn list(&self) -> Result<Vec<Country>, StoreError> {
        Ok(self.read()?.countries.clone())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.countries.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Derived view of the current records. See [`query::query`].
    pub fn query(&self, options: &QueryOptions) -> Result<Vec<Country>, StoreError> {
        let records = self.read()?;
        let view = query::query(&records.countries, options);
        debug!(?options, total = records.countries.len(), returned = view.len(), "country query");
        Ok(view)
    }

    /// First record whose alpha-2 or alpha-3 code matches `code`, ignoring
    /// case.
    pub fn find_by_code(&self, code: &str) -> Result<Country, StoreError> {
        let records = self.read()?;
        records
            .position_by_code(code)
            .map(|i| records.countries[i].clone())
            .ok_or_else(|| StoreError::NotFound(CountryKey::Code(code).to_string()))
    }

    pub fn find_by_id(&self, id: u64) -> Result<Country, StoreError> {
        let records = self.read()?;
        records
            .position_by_id(id)
            .map(|i| records.countries[i].clone())
            .ok_or_else(|| StoreError::NotFound(CountryKey::Id(id).to_string()))
    }

    /// Admit a new record.
    ///
    /// Rejected with [`StoreError::Duplicate`] when any stored record
    /// shares the candidate's alpha-2 or alpha-3 code.
    pub fn add(&self, input: CountryInput) -> Result<Country, StoreError> {
        let mut records = self.write()?;

        if records.countries.iter().any(|c| c.shares_key_with(&input)) {
            return Err(StoreError::Duplicate {
                alpha2_code: input.alpha2_code,
                alpha3_code: input.alpha3_code,
            });
        }

        let id = records.next_id.ok_or(StoreError::IdsExhausted)?;
        let country = input.into_country(id);
        let mut staged = records.countries.clone();
        staged.push(country.clone());
        self.persistence.save(&staged)?;

        records.countries = staged;
        records.next_id = id.checked_add(1);
        info!(id = country.id, name = %country.name, "country added");
        Ok(country)
    }

    /// Replace every mutable field of the record found by `key`.
    ///
    /// No validation and no key-uniqueness check happen here; the caller
    /// supplies the complete record.
    pub fn edit(&self, key: CountryKey<'_>, input: CountryInput) -> Result<Country, StoreError> {
        let mut records = self.write()?;

        let index = match key {
            CountryKey::Code(code) => records.position_by_code(code),
            CountryKey::Id(id) => records.position_by_id(id),
        }
        .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        let mut staged = records.countries.clone();
        staged[index].replace_with(input);
        self.persistence.save(&staged)?;

        let country = staged[index].clone();
        records.countries = staged;
        info!(id = country.id, %key, "country updated");
        Ok(country)
    }

    /// Remove the first record matching `code`, returning it.
    pub fn delete(&self, code: &str) -> Result<Country, StoreError> {
        let mut records = self.write()?;

        let index = records
            .position_by_code(code)
            .ok_or_else(|| StoreError::NotFound(CountryKey::Code(code).to_string()))?;

        let mut staged = records.countries.clone();
        let removed = staged.remove(index);
        self.persistence.save(&staged)?;

        records.countries = staged;
        info!(id = removed.id, code, "country deleted");
        Ok(removed)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }
}
