//! URL handling module for campus-crawl
//!
//! This module provides canonicalization (the dedup identity of a page),
//! link resolution and same-domain checks.

mod canonical;
mod domain;

pub use canonical::{canonicalize, canonicalize_url, resolve_link};
pub use domain::{extract_domain, is_internal_link};
