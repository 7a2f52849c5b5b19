use parking_lot::RwLock;

use crate::enums::HttpMethod;
use crate::path::CacheStats;
use crate::router::{Router, RouterError, RouterOptions, RouterResult};
use crate::types::{MatchedRoute, RouteInfo};

#[derive(Debug)]
struct SharedState<H, M> {
    router: Router<H, M>,
    sealed: bool,
}

/// Thread-shareable router: one writer registers, any number of readers
/// look up. After `seal` only `replace` can change the routes.
#[derive(Debug)]
pub struct SharedRouter<H, M = ()> {
    inner: RwLock<SharedState<H, M>>,
}

impl<H, M> Default for SharedRouter<H, M> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<H, M> SharedRouter<H, M> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self::from_router(Router::new(options))
    }

    pub fn from_router(router: Router<H, M>) -> Self {
        Self {
            inner: RwLock::new(SharedState {
                router,
                sealed: false,
            }),
        }
    }

    pub fn register(
        &self,
        method: impl Into<HttpMethod>,
        pattern: &str,
        handler: H,
        middleware: Vec<M>,
    ) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.sealed {
            return Err(RouterError::AddWhileSealed {
                path: pattern.to_string(),
            });
        }

        guard.router.register(method, pattern, handler, middleware)
    }

    pub fn add(&self, method: impl Into<HttpMethod>, pattern: &str, handler: H) -> RouterResult<()> {
        self.register(method, pattern, handler, Vec::new())
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();
        guard.sealed = true;
        tracing::event!(
            tracing::Level::DEBUG,
            operation = "seal",
            routes = guard.router.len() as u64
        );
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().sealed
    }

    /// Swaps in a fully built router, returning the previous one. Readers
    /// see either the old tree or the new one, never a partial build.
    pub fn replace(&self, router: Router<H, M>) -> Router<H, M> {
        let mut guard = self.inner.write();
        std::mem::replace(&mut guard.router, router)
    }

    /// See [`Router::allowed_methods`] for how a higher-priority node hides
    /// methods that `find` reaches by backtracking.
    pub fn allowed_methods(&self, path: &str) -> Vec<HttpMethod> {
        self.inner.read().router.allowed_methods(path)
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.inner.read().router.has_path(path)
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.inner.read().router.routes()
    }

    pub fn clear_cache(&self) {
        self.inner.read().router.clear_cache();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.inner.read().router.cache_stats()
    }

    pub fn len(&self) -> usize {
        self.inner.read().router.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().router.is_empty()
    }
}

impl<H: Clone, M: Clone> SharedRouter<H, M> {
    pub fn find(&self, method: impl Into<HttpMethod>, path: &str) -> Option<MatchedRoute<H, M>> {
        let guard = self.inner.read();
        guard.router.find(method, path).map(|found| found.cloned())
    }
}
