use asset_fallback::config::{self, Config};
use asset_fallback::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: `RUST_LOG` filter, text or JSON lines.
fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);

    if config.log_format == "json" {
        subscriber.json().with_current_span(true).init();
    } else {
        subscriber.init();
    }
}
