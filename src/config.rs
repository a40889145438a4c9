//! Service configuration.

use serde::{Deserialize, Serialize};

/// Which fields the validator requires on add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Only `name` must be non-empty.
    NameOnly,
    /// `name`, `alpha2Code` and `alpha3Code` must all be non-empty.
    #[default]
    Strict,
}

/// Runtime knobs for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub validation: ValidationMode,
    /// Maximum number of records the listing returns when limiting is on.
    pub list_limit: usize,
    /// Answer a successful add with `303 See Other` to the listing instead
    /// of the created record.
    pub redirect_after_add: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Strict,
            list_limit: crate::query::DEFAULT_LIMIT,
            redirect_after_add: false,
        }
    }
}
