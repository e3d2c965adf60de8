//! Business logic services for the application layer.

pub mod auth_service;
pub mod cache_service;
pub mod gate;
pub mod resolver_service;
pub mod settings_service;

pub use auth_service::AuthService;
pub use cache_service::CacheService;
pub use gate::ConfigurationGate;
pub use resolver_service::ResolverService;
pub use settings_service::SettingsService;
