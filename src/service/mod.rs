//! Country service — request handling on top of the country store.
//!
//! `CountryService<P>` owns a [`CountryStore`] and the [`ServiceConfig`]
//! and exposes one method per endpoint. The methods apply validation,
//! call the store, and log the outcome; `http` maps them onto axum routes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use country_atlas::{service, CountryInput, CountryService, CountryStore, InMemoryPersistence, ServiceConfig};
//!
//! let store = CountryStore::open(InMemoryPersistence::new())?;
//! let service = Arc::new(CountryService::new(store, ServiceConfig::default()));
//!
//! // Direct calls
//! service.add(CountryInput::new("Chile", "CL", "CHL"))?;
//!
//! // HTTP transport, until ctrl-c
//! service::serve(service, "0.0.0.0:3000", async {
//!     let _ = tokio::signal::ctrl_c().await;
//! })
//! .await?;
//! ```

mod error;
mod http;
mod view;

use tracing::warn;

use crate::config::ServiceConfig;
use crate::country::{Country, CountryInput};
use crate::persistence::Persistence;
use crate::query::QueryOptions;
use crate::store::{CountryKey, CountryStore};
use crate::validate;

pub use error::{ApiError, DUPLICATE_MESSAGE, INTERNAL_MESSAGE, NOT_FOUND_MESSAGE};
pub use http::{router, serve};
pub use view::render_listing;

pub const UPDATED_MESSAGE: &str = "Country updated successfully.";
pub const DELETED_MESSAGE: &str = "Country deleted successfully.";

pub struct CountryService<P> {
    store: CountryStore<P>,
    config: ServiceConfig,
}

impl<P: Persistence> CountryService<P> {
    pub fn new(store: CountryStore<P>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &CountryStore<P> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Options for the listing from its raw query-string flags, using the
    /// configured result limit.
    pub fn list_options(
        &self,
        sort: Option<&str>,
        visited: Option<&str>,
        limit: Option<&str>,
    ) -> QueryOptions {
        QueryOptions::from_flags(sort, visited, limit, self.config.list_limit)
    }

    pub fn list(&self, options: &QueryOptions) -> Result<Vec<Country>, ApiError> {
        Ok(self.store.query(options)?)
    }

    pub fn get(&self, code: &str) -> Result<Country, ApiError> {
        Ok(self.store.find_by_code(&code.to_ascii_uppercase())?)
    }

    /// Validate and admit a new country.
    pub fn add(&self, input: CountryInput) -> Result<Country, ApiError> {
        let errors = validate::validate(&input, self.config.validation);
        if !errors.is_empty() {
            warn!(?errors, "add rejected by validation");
            return Err(ApiError::Validation(errors));
        }

        self.store.add(input).map_err(|e| {
            warn!(error = %e, "add rejected by store");
            ApiError::from(e)
        })
    }

    /// Replace the record found by code (case-insensitive) or by id.
    pub fn edit(&self, key: CountryKey<'_>, input: CountryInput) -> Result<Country, ApiError> {
        let result = match key {
            CountryKey::Code(code) => {
                let code = code.to_ascii_uppercase();
                self.store.edit(CountryKey::Code(&code), input)
            }
            CountryKey::Id(_) => self.store.edit(key, input),
        };
        result.map_err(|e| {
            warn!(error = %e, "edit failed");
            ApiError::from(e)
        })
    }

    /// Replace the record with the given id. An id that is not an integer
    /// cannot match any record and is reported as not found.
    pub fn edit_by_raw_id(&self, raw_id: &str, input: CountryInput) -> Result<Country, ApiError> {
        match raw_id.trim().parse::<u64>() {
            Ok(id) => self.edit(CountryKey::Id(id), input),
            Err(_) => {
                warn!(raw_id, "edit by non-numeric id");
                Err(crate::error::StoreError::NotFound(format!("id {}", raw_id)).into())
            }
        }
    }

    pub fn delete(&self, code: &str) -> Result<Country, ApiError> {
        self.store
            .delete(&code.to_ascii_uppercase())
            .map_err(|e| {
                warn!(error = %e, "delete failed");
                ApiError::from(e)
            })
    }
}
