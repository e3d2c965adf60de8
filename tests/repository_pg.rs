use std::sync::Arc;

use asset_fallback::domain::repositories::{PRODUCTION_URL_KEY, ResolutionCache, SettingsRepository};
use asset_fallback::infrastructure::cache::PgResolutionCache;
use asset_fallback::infrastructure::settings::PgSettingsRepository;
use sqlx::PgPool;

#[sqlx::test]
#[cfg_attr(not(feature = "db-tests"), ignore)]
async fn test_put_get_and_overwrite(pool: PgPool) {
    let cache = PgResolutionCache::new(Arc::new(pool));
    let key = "https://staging.example.com/img/a.png";

    assert!(cache.get(key).await.unwrap().is_none());

    cache.put(key, key).await.unwrap();
    assert_eq!(cache.get(key).await.unwrap().as_deref(), Some(key));

    cache
        .put(key, "https://www.example.com/img/a.png")
        .await
        .unwrap();
    assert_eq!(
        cache.get(key).await.unwrap().as_deref(),
        Some("https://www.example.com/img/a.png")
    );
    assert_eq!(cache.len().await.unwrap(), 1);
}

#[sqlx::test]
#[cfg_attr(not(feature = "db-tests"), ignore)]
async fn test_clear_returns_removed_count(pool: PgPool) {
    let cache = PgResolutionCache::new(Arc::new(pool));

    assert_eq!(cache.clear().await.unwrap(), 0);

    cache.put("https://staging.example.com/a.png", "x").await.unwrap();
    cache.put("https://staging.example.com/b.png", "y").await.unwrap();

    assert_eq!(cache.clear().await.unwrap(), 2);
    assert_eq!(cache.len().await.unwrap(), 0);
    assert!(cache.health_check().await);
}

#[sqlx::test]
#[cfg_attr(not(feature = "db-tests"), ignore)]
async fn test_concurrent_puts_to_distinct_keys(pool: PgPool) {
    let cache = Arc::new(PgResolutionCache::new(Arc::new(pool)));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let cache = cache.clone();
            tokio::spawn(async move {
                let key = format!("https://staging.example.com/{}.png", i);
                cache.put(&key, &key).await.unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cache.len().await.unwrap(), 16);
}

#[sqlx::test]
#[cfg_attr(not(feature = "db-tests"), ignore)]
async fn test_settings_roundtrip(pool: PgPool) {
    let repo = PgSettingsRepository::new(Arc::new(pool));

    assert!(repo.get_setting(PRODUCTION_URL_KEY).await.unwrap().is_none());

    repo.put_setting(PRODUCTION_URL_KEY, "https://www.example.com")
        .await
        .unwrap();
    repo.put_setting(PRODUCTION_URL_KEY, "https://prod.example.com")
        .await
        .unwrap();
    assert_eq!(
        repo.get_setting(PRODUCTION_URL_KEY).await.unwrap().as_deref(),
        Some("https://prod.example.com")
    );

    repo.put_setting(PRODUCTION_URL_KEY, "").await.unwrap();
    assert_eq!(
        repo.get_setting(PRODUCTION_URL_KEY).await.unwrap().as_deref(),
        Some("")
    );
}
