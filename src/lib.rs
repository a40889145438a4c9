pub mod config;
mod country;
mod error;
pub mod logging;
mod persistence;
pub mod query;
pub mod service;
mod store;
pub mod validate;

pub use config::{ServiceConfig, ValidationMode};
pub use country::{Country, CountryInput};
pub use error::{PersistenceError, StoreError};
pub use persistence::{InMemoryPersistence, JsonFilePersistence, Persistence};
pub use query::{query, QueryOptions};
pub use service::{ApiError, CountryService};
pub use store::{CountryKey, CountryStore};
pub use validate::{validate, FieldError};
