//! Asset URL resolution: cache lookup, existence probe, rewrite, store.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, warn};

use crate::domain::entities::{Resolution, ResolutionSource, SiteConfiguration};
use crate::domain::prober::ExistenceProber;
use crate::domain::repositories::ResolutionCache;
use crate::utils::absolute_url::is_absolute_url;
use crate::utils::url_rewriter::rewrite;

const CACHE_HITS: &str = "asset_fallback_cache_hits_total";
const CACHE_MISSES: &str = "asset_fallback_cache_misses_total";
const PROBES: &str = "asset_fallback_probes_total";
const REWRITES: &str = "asset_fallback_rewrites_total";
const CACHE_WRITE_FAILURES: &str = "asset_fallback_cache_write_failures_total";

/// Decides which URL to serve for a candidate asset URL.
///
/// Holds no state of its own beyond its injected dependencies and the
/// configuration snapshot it was built with.
///
/// # Resolution Flow
///
/// 1. Inactive configuration or non-URL input → returned unchanged
/// 2. Cache hit → cached value, no probe
/// 3. Cache miss → probe; only `NotFound` rewrites the local base to the
///    production base
/// 4. The decision is stored under the original URL whichever branch ran
///
/// Failures never surface to the caller: an unreadable cache counts as a
/// miss and an unwritable cache only costs a re-probe next time.
pub struct ResolverService {
    cache: Arc<dyn ResolutionCache>,
    prober: Arc<dyn ExistenceProber>,
    configuration: SiteConfiguration,
}

impl ResolverService {
    /// Creates a new resolver.
    pub fn new(
        cache: Arc<dyn ResolutionCache>,
        prober: Arc<dyn ExistenceProber>,
        configuration: SiteConfiguration,
    ) -> Self {
        Self {
            cache,
            prober,
            configuration,
        }
    }

    pub fn configuration(&self) -> &SiteConfiguration {
        &self.configuration
    }

    /// Returns the URL to serve for `source_url`.
    pub async fn resolve(&self, source_url: &str) -> String {
        self.resolve_detailed(source_url).await.url
    }

    /// Like [`Self::resolve`], also reporting how the URL was obtained.
    pub async fn resolve_detailed(&self, source_url: &str) -> Resolution {
        let Some(production_base) = self.configuration.active_production_base() else {
            return Resolution::pass_through(source_url);
        };

        if !is_absolute_url(source_url) {
            return Resolution::pass_through(source_url);
        }

        match self.cache.get(source_url).await {
            Ok(Some(resolved)) => {
                counter!(CACHE_HITS).increment(1);
                debug!("Cache HIT: {} -> {}", source_url, resolved);
                return Resolution {
                    url: resolved,
                    source: ResolutionSource::CacheHit,
                    cached: true,
                };
            }
            Ok(None) => {
                counter!(CACHE_MISSES).increment(1);
                debug!("Cache MISS: {}", source_url);
            }
            Err(e) => {
                counter!(CACHE_MISSES).increment(1);
                warn!("Cache read failed for {}, probing instead: {}", source_url, e);
            }
        }

        let probe = self.prober.check(source_url).await;
        counter!(PROBES, "result" => probe.as_str()).increment(1);

        let resolved = if probe.requires_fallback() {
            counter!(REWRITES).increment(1);
            rewrite(
                source_url,
                &self.configuration.local_base_url,
                production_base,
            )
        } else {
            source_url.to_string()
        };

        if resolved != source_url {
            debug!("Rewrote {} -> {}", source_url, resolved);
        }

        let cached = match self.cache.put(source_url, &resolved).await {
            Ok(()) => true,
            Err(e) => {
                counter!(CACHE_WRITE_FAILURES).increment(1);
                warn!("Failed to cache resolution for {}: {}", source_url, e);
                false
            }
        };

        Resolution {
            url: resolved,
            source: ResolutionSource::Probed(probe),
            cached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProbeResult;
    use crate::domain::prober::MockExistenceProber;
    use crate::domain::repositories::{MockResolutionCache, StoreError};
    use crate::infrastructure::cache::InMemoryResolutionCache;

    const LOCAL: &str = "https://staging.example.com";
    const PRODUCTION: &str = "https://www.example.com";
    const IMAGE: &str = "https://staging.example.com/img/a.png";

    fn active_config() -> SiteConfiguration {
        SiteConfiguration::new(LOCAL.to_string(), Some(PRODUCTION.to_string()))
    }

    fn prober_returning(result: ProbeResult, times: usize) -> MockExistenceProber {
        let mut prober = MockExistenceProber::new();
        prober.expect_check().times(times).returning(move |_| result);
        prober
    }

    fn resolver(
        cache: Arc<dyn ResolutionCache>,
        prober: MockExistenceProber,
        config: SiteConfiguration,
    ) -> ResolverService {
        ResolverService::new(cache, Arc::new(prober), config)
    }

    #[tokio::test]
    async fn test_not_found_is_rewritten_to_production() {
        let cache = Arc::new(InMemoryResolutionCache::new());
        let service = resolver(
            cache.clone(),
            prober_returning(ProbeResult::NotFound, 1),
            active_config(),
        );

        let resolution = service.resolve_detailed(IMAGE).await;

        assert_eq!(resolution.url, "https://www.example.com/img/a.png");
        assert_eq!(
            resolution.source,
            ResolutionSource::Probed(ProbeResult::NotFound)
        );
        assert!(resolution.cached);
        assert_eq!(
            cache.get(IMAGE).await.unwrap().as_deref(),
            Some("https://www.example.com/img/a.png")
        );
    }

    #[tokio::test]
    async fn test_found_and_indeterminate_leave_url_unchanged() {
        for result in [ProbeResult::Found, ProbeResult::Indeterminate] {
            let cache = Arc::new(InMemoryResolutionCache::new());
            let service = resolver(cache.clone(), prober_returning(result, 1), active_config());

            assert_eq!(service.resolve(IMAGE).await, IMAGE);
            assert_eq!(cache.get(IMAGE).await.unwrap().as_deref(), Some(IMAGE));
        }
    }

    #[tokio::test]
    async fn test_second_resolve_is_served_from_cache_without_probe() {
        let cache = Arc::new(InMemoryResolutionCache::new());
        let service = resolver(
            cache,
            prober_returning(ProbeResult::NotFound, 1),
            active_config(),
        );

        let first = service.resolve(IMAGE).await;
        let second = service.resolve_detailed(IMAGE).await;

        assert_eq!(first, second.url);
        assert_eq!(second.source, ResolutionSource::CacheHit);
    }

    #[tokio::test]
    async fn test_found_decision_is_cached_too() {
        let cache = Arc::new(InMemoryResolutionCache::new());
        let service = resolver(
            cache,
            prober_returning(ProbeResult::Found, 1),
            active_config(),
        );

        service.resolve(IMAGE).await;
        let second = service.resolve_detailed(IMAGE).await;

        assert_eq!(second.url, IMAGE);
        assert_eq!(second.source, ResolutionSource::CacheHit);
    }

    #[tokio::test]
    async fn test_cached_value_is_returned_verbatim() {
        let cache = Arc::new(InMemoryResolutionCache::new());
        cache.put(IMAGE, "https://legacy.example.org/a.png").await.unwrap();
        let service = resolver(
            cache,
            prober_returning(ProbeResult::Found, 0),
            active_config(),
        );

        assert_eq!(
            service.resolve(IMAGE).await,
            "https://legacy.example.org/a.png"
        );
    }

    #[tokio::test]
    async fn test_non_url_passes_through_without_cache_or_probe() {
        let mut cache = MockResolutionCache::new();
        cache.expect_get().times(0);
        cache.expect_put().times(0);

        let service = resolver(
            Arc::new(cache),
            prober_returning(ProbeResult::NotFound, 0),
            active_config(),
        );

        let resolution = service.resolve_detailed("not a url").await;
        assert_eq!(resolution.url, "not a url");
        assert_eq!(resolution.source, ResolutionSource::PassThrough);
        assert!(!resolution.cached);
    }

    #[tokio::test]
    async fn test_inactive_configuration_passes_through() {
        let inactive = [
            SiteConfiguration::new(LOCAL.to_string(), None),
            SiteConfiguration::new(LOCAL.to_string(), Some(LOCAL.to_string())),
            SiteConfiguration::new(LOCAL.to_string(), Some(String::new())),
        ];

        for config in inactive {
            let mut cache = MockResolutionCache::new();
            cache.expect_get().times(0);

            let service = resolver(
                Arc::new(cache),
                prober_returning(ProbeResult::NotFound, 0),
                config,
            );

            assert_eq!(service.resolve(IMAGE).await, IMAGE);
        }
    }

    #[tokio::test]
    async fn test_foreign_host_not_found_stays_unchanged() {
        let cache = Arc::new(InMemoryResolutionCache::new());
        let service = resolver(
            cache,
            prober_returning(ProbeResult::NotFound, 1),
            active_config(),
        );

        let url = "https://cdn.other.net/img/a.png";
        assert_eq!(service.resolve(url).await, url);
    }

    #[tokio::test]
    async fn test_cache_read_failure_falls_back_to_probe() {
        let mut cache = MockResolutionCache::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Connection("refused".into())));
        cache.expect_put().times(1).returning(|_, _| Ok(()));

        let service = resolver(
            Arc::new(cache),
            prober_returning(ProbeResult::NotFound, 1),
            active_config(),
        );

        assert_eq!(
            service.resolve(IMAGE).await,
            "https://www.example.com/img/a.png"
        );
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_returns_decision() {
        let mut cache = MockResolutionCache::new();
        cache.expect_get().times(2).returning(|_| Ok(None));
        cache
            .expect_put()
            .withf(|key, value| key == IMAGE && value == "https://www.example.com/img/a.png")
            .times(2)
            .returning(|_, _| Err(StoreError::Operation("quota exceeded".into())));

        let service = resolver(
            Arc::new(cache),
            prober_returning(ProbeResult::NotFound, 2),
            active_config(),
        );

        let first = service.resolve_detailed(IMAGE).await;
        assert_eq!(first.url, "https://www.example.com/img/a.png");
        assert!(!first.cached);

        // Nothing was stored, so the next call probes again.
        let second = service.resolve_detailed(IMAGE).await;
        assert_eq!(
            second.source,
            ResolutionSource::Probed(ProbeResult::NotFound)
        );
    }

    #[tokio::test]
    async fn test_distinct_urls_get_independent_entries_and_reprobe_after_clear() {
        let cache = Arc::new(InMemoryResolutionCache::new());
        let mut prober = MockExistenceProber::new();
        prober
            .expect_check()
            .withf(|url| url.ends_with("a.png"))
            .times(2)
            .returning(|_| ProbeResult::NotFound);
        prober
            .expect_check()
            .withf(|url| url.ends_with("b.png"))
            .times(2)
            .returning(|_| ProbeResult::Found);

        let service = resolver(cache.clone(), prober, active_config());
        let b = "https://staging.example.com/img/b.png";

        service.resolve(IMAGE).await;
        service.resolve(b).await;
        assert_eq!(cache.len().await.unwrap(), 2);

        assert_eq!(cache.clear().await.unwrap(), 2);

        service.resolve(IMAGE).await;
        service.resolve(b).await;
        assert_eq!(cache.len().await.unwrap(), 2);
    }
}
