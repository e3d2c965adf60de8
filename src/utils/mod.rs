//! Utility functions for URL processing.
//!
//! - [`absolute_url`] - Decides whether a string is a resolvable absolute URL
//! - [`base_url`] - Base URL sanitisation for the local and production hosts
//! - [`url_rewriter`] - Local → production base substitution

pub mod absolute_url;
pub mod base_url;
pub mod url_rewriter;
