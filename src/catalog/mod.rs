//! Marketplace data access
//!
//! Views never own their data; they ask a [`CatalogSource`] when they are
//! entered. [`FixtureCatalog`] serves built-in sample data or a JSON file of
//! the same shape.

mod fixtures;
mod traits;

use std::path::PathBuf;
use thiserror::Error;

pub use fixtures::{FixtureCatalog, MarketplaceFixtures};
pub use traits::CatalogSource;

#[cfg(test)]
pub use traits::MockCatalogSource;

/// Failures from a catalog source
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
