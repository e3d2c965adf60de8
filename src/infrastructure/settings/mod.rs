//! Settings storage backends.

mod memory_settings;
mod pg_settings;
mod redis_settings;

pub use memory_settings::InMemorySettingsRepository;
pub use pg_settings::PgSettingsRepository;
pub use redis_settings::RedisSettingsRepository;
