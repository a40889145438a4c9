//! Country records as stored and as received on the wire.

use serde::{Deserialize, Deserializer, Serialize};

/// A stored country.
///
/// `id` is assigned by the store. The alpha-2 and alpha-3 codes are the
/// natural key: no two stored records share either one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alpha2_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alpha3_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visited: bool,
}

impl Country {
    /// True when `code` equals either the alpha-2 or the alpha-3 code,
    /// ignoring ASCII case.
    pub fn matches_code(&self, code: &str) -> bool {
        self.alpha2_code.eq_ignore_ascii_case(code) || self.alpha3_code.eq_ignore_ascii_case(code)
    }

    /// True when `other` carries the same alpha-2 or the same alpha-3 code.
    pub fn shares_key_with(&self, other: &CountryInput) -> bool {
        self.alpha2_code == other.alpha2_code || self.alpha3_code == other.alpha3_code
    }

    /// Overwrite every mutable field with the values from `input`.
    ///
    /// This is a full replacement: fields the caller left out arrive here
    /// as empty strings / `false` and are written as such.
    pub fn replace_with(&mut self, input: CountryInput) {
        self.name = input.name;
        self.alpha2_code = input.alpha2_code;
        self.alpha3_code = input.alpha3_code;
        self.visited = input.visited;
    }
}

/// Request body for add and edit.
///
/// Every field defaults when absent or `null` so that validation, not
/// deserialization, decides what is missing. A client-supplied `id` is
/// accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alpha2_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alpha3_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visited: bool,
}

impl CountryInput {
    pub fn new(name: impl Into<String>, alpha2: impl Into<String>, alpha3: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alpha2_code: alpha2.into(),
            alpha3_code: alpha3.into(),
            visited: false,
        }
    }

    pub fn visited(mut self, visited: bool) -> Self {
        self.visited = visited;
        self
    }

    pub(crate) fn into_country(self, id: u64) -> Country {
        Country {
            id,
            name: self.name,
            alpha2_code: self.alpha2_code,
            alpha3_code: self.alpha3_code,
            visited: self.visited,
        }
    }
}

/// Treat an explicit JSON `null` like an omitted field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
