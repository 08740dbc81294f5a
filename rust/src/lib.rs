//! iconrec - Query-to-Icon Recommendation Service
//!
//! This crate turns a free-text description of a concept into a short ranked
//! list of icon suggestions drawn from a fixed set of icon libraries.
//!
//! ## Architecture
//! All suggestion requests flow through one chain:
//! Query -> IconSuggester -> (LLM provider attempt) -> on failure -> keyword scorer
//!
//! The scorer is the deterministic core: a pure function over the immutable
//! icon catalog that never fails and never blocks. Provider calls are the
//! only suspending operations and are always time-bounded.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iconrec::{catalog::IconCatalog, scorer};
//!
//! let catalog = IconCatalog::builtin().expect("builtin catalog is valid");
//! let suggestions = scorer::rank("crowd funding", &catalog);
//! assert!(suggestions.len() <= scorer::MAX_SUGGESTIONS);
//! ```

// Core error handling
pub mod error;

// Static icon library registry
pub mod catalog;

// Deterministic relevance ranking - THE single fallback path
pub mod scorer;

// Shared output record
pub mod suggestion;

// Asset URL derivation and placeholders
pub mod assets;

// LLM-backed suggestion generation with deterministic fallback
pub mod agentic;

// Public re-exports for the suggestion chain
pub use agentic::{IconSuggester, LlmClient, ProviderError, SuggestBackend};
pub use catalog::{IconCatalog, IconEntry, IconLibrary};
pub use error::SuggestError;
pub use scorer::MAX_SUGGESTIONS;
pub use suggestion::Suggestion;
