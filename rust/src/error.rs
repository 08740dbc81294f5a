//! Crate-level error taxonomy
//!
//! Only two things can go wrong at this level: a request arrives with an
//! unusable query, or the catalog fails validation at startup. Provider
//! failures are deliberately absent: the orchestrator absorbs them and
//! falls back to the deterministic scorer, so they can never reach a
//! caller of the public API.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Main error type for the suggestion system
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Request-shape error: the query was missing or not usable text.
    /// Surfaced to HTTP callers as 400.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Catalog configuration error. Fatal at startup; the process must not
    /// serve traffic with a malformed catalog.
    #[error("configuration error: {0}")]
    Configuration(#[from] CatalogError),
}
