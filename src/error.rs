//! Application-level error type returned by all Tauri command handlers.
//!
//! `AppError` is serialized to `{ kind, message }` JSON payloads so the
//! frontend can pattern-match on a stable `kind` string.

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Top-level error returned by Tauri command handlers.
///
/// Serialized with serde's adjacently-tagged representation:
/// `{ "kind": "<variant>", "message": "<human-readable text>" }`
///
/// The TypeScript counterpart is:
/// ```ts
/// type AppError = { kind: string; message: string };
/// ```
#[derive(Debug, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum AppError {
    /// A requested product is not in the catalog.
    #[error("{0}")]
    NotFound(String),

    /// A category label that matches neither the sentinel nor any category.
    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    /// Checkout was requested with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A state lock was poisoned by a panicking holder.
    #[error("{0}")]
    StateLock(String),

    /// The store configuration could not be loaded or is invalid.
    #[error("{0}")]
    Config(String),

    /// A catalog failed validation.
    #[error("{0}")]
    Catalog(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<CatalogError> for AppError {
    /// Unknown category labels keep their own variant so the frontend can
    /// tell a bad filter click from a broken catalog.
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownCategory(label) => Self::UnknownCategory(label),
            other => Self::Catalog(other.to_string()),
        }
    }
}
