//! Configuration gate in front of the resolver.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::ResolverService;
use crate::domain::entities::{Resolution, SiteConfiguration};
use crate::domain::prober::ExistenceProber;
use crate::domain::repositories::ResolutionCache;

struct GateState {
    configuration: SiteConfiguration,
    resolver: Option<Arc<ResolverService>>,
}

/// Decides once per configuration whether resolution is active.
///
/// While inactive, [`ConfigurationGate::resolve`] passes every URL through
/// without touching the cache or the network. The decision is recomputed only
/// when [`ConfigurationGate::reconfigure`] is called after a settings save.
pub struct ConfigurationGate {
    cache: Arc<dyn ResolutionCache>,
    prober: Arc<dyn ExistenceProber>,
    state: RwLock<Arc<GateState>>,
}

impl ConfigurationGate {
    pub fn new(
        cache: Arc<dyn ResolutionCache>,
        prober: Arc<dyn ExistenceProber>,
        configuration: SiteConfiguration,
    ) -> Self {
        let state = Self::build_state(&cache, &prober, configuration);
        Self {
            cache,
            prober,
            state: RwLock::new(Arc::new(state)),
        }
    }

    fn build_state(
        cache: &Arc<dyn ResolutionCache>,
        prober: &Arc<dyn ExistenceProber>,
        configuration: SiteConfiguration,
    ) -> GateState {
        let resolver = if configuration.is_active() {
            info!(
                "Asset fallback active: {} -> {}",
                configuration.local_base_url,
                configuration.production_base_url.as_deref().unwrap_or_default()
            );
            Some(Arc::new(ResolverService::new(
                cache.clone(),
                prober.clone(),
                configuration.clone(),
            )))
        } else {
            info!("Asset fallback inactive: no distinct production URL configured");
            None
        };

        GateState {
            configuration,
            resolver,
        }
    }

    fn snapshot(&self) -> Arc<GateState> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in a new configuration.
    ///
    /// Cached decisions are kept; they keep pointing at the previous
    /// production URL until the cache is cleared.
    pub fn reconfigure(&self, configuration: SiteConfiguration) {
        let state = Arc::new(Self::build_state(&self.cache, &self.prober, configuration));
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn is_active(&self) -> bool {
        self.snapshot().resolver.is_some()
    }

    /// The resolver for the current configuration, `None` while inactive.
    ///
    /// The handle keeps the configuration it was built with even if the gate
    /// is reconfigured afterwards, so a caller holding it sees one consistent
    /// decision.
    pub fn resolver(&self) -> Option<Arc<ResolverService>> {
        self.snapshot().resolver.clone()
    }

    pub fn configuration(&self) -> SiteConfiguration {
        self.snapshot().configuration.clone()
    }

    /// Resolves `url` when active, otherwise returns it unchanged.
    pub async fn resolve(&self, url: &str) -> Resolution {
        match self.resolver() {
            Some(resolver) => resolver.resolve_detailed(url).await,
            None => Resolution::pass_through(url),
        }
    }
}
