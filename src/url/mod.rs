//! URL predicates and filtering
//!
//! Pure functions for URL validity, internal/external classification, and
//! glob-based include/exclude filtering of discovered page sets.

pub mod classify;
pub mod filter;
pub mod matcher;

pub use classify::{authority_of, is_internal_url, is_valid_url};
pub use filter::UrlFilter;
pub use matcher::{compile_glob, matches_glob};
