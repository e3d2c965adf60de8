//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`SiteConfiguration`] - Local / production base URLs and the activation rule
//! - [`ProbeResult`] - Tri-state outcome of an existence probe
//! - [`Resolution`] - A resolved URL with the path that produced it
//! - [`ClearOutcome`] - Result of an explicit cache clear

pub mod clear_outcome;
pub mod probe_result;
pub mod resolution;
pub mod site_configuration;

pub use clear_outcome::ClearOutcome;
pub use probe_result::ProbeResult;
pub use resolution::{Resolution, ResolutionSource};
pub use site_configuration::SiteConfiguration;
