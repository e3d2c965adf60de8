//! Domain layer containing the resolution model and its ports.
//!
//! # Architecture
//!
//! - [`entities`] - Configuration, probe results and resolutions
//! - [`repositories`] - Storage trait definitions
//! - [`prober`] - Network existence check trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod prober;
pub mod repositories;
