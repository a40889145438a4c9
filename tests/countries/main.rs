//! Country service integration tests.
//!
//! Each test starts an axum server on an ephemeral port and drives it with
//! reqwest.

mod crud;
