//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Cache → probe → rewrite → store
//! - [`services::gate::ConfigurationGate`] - Activation decision in front of the resolver
//! - [`services::cache_service::CacheService`] - Cache clearing and statistics
//! - [`services::settings_service::SettingsService`] - Production URL setting
//! - [`services::auth_service::AuthService`] - Admin token authentication

pub mod services;
