//! URL handling module for sitegrab
//!
//! This module provides canonicalization of discovered hrefs and the scope
//! predicate that keeps the crawl inside one site.

mod domain;
mod normalize;
mod scope;

// Re-export main functions
pub use domain::extract_domain;
pub use normalize::normalize;
pub use scope::in_scope;
