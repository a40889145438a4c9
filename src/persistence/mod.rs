//! Persistence port for the country store.
//!
//! The store hydrates itself through [`Persistence::load`] once and hands
//! the full record list to [`Persistence::save`] after every successful
//! mutation. Implementations decide whether and where that list is kept.
//!
//! ## Example
//!
//! ```ignore
//! use country_atlas::{CountryStore, JsonFilePersistence};
//!
//! let port = JsonFilePersistence::new("countries.json").write_through(true);
//! let store = CountryStore::open(port)?;
//! ```

mod in_memory;
mod json_file;

use crate::country::Country;
use crate::error::PersistenceError;

/// Durable storage for the whole country list.
pub trait Persistence: Send + Sync {
    /// Read the persisted records, in stored order.
    fn load(&self) -> Result<Vec<Country>, PersistenceError>;

    /// Replace the persisted records with `countries`.
    fn save(&self, countries: &[Country]) -> Result<(), PersistenceError>;
}

pub use in_memory::InMemoryPersistence;
pub use json_file::JsonFilePersistence;
