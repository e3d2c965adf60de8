//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cache;
pub mod health;
pub mod resolve;
pub mod settings;

pub use cache::{cache_stats_handler, clear_cache_handler};
pub use health::health_handler;
pub use resolve::resolve_handler;
pub use settings::{get_settings_handler, update_settings_handler};
