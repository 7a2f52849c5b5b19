use crate::enums::HttpMethod;
use crate::matcher::{Params, Target, resolve};
use crate::path::{CacheStats, Segmenter};
use crate::radix::RadixTree;
use crate::router::{RouterOptions, RouterResult};
use crate::types::{Endpoint, RouteInfo, RouteMatch, Segments};

/// Method + path router over a prefix tree.
///
/// Registration takes `&mut self` and is expected to finish before the
/// router is shared; lookups take `&self`. The segment cache is the only
/// state mutated by lookups and sits behind its own lock.
#[derive(Debug)]
pub struct Router<H, M = ()> {
    tree: RadixTree<H, M>,
    segmenter: Segmenter,
    options: RouterOptions,
}

impl<H, M> Default for Router<H, M> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<H, M> Router<H, M> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default();
        Self {
            tree: RadixTree::new(),
            segmenter: Segmenter::new(options.max_cache_size, options.eviction),
            options,
        }
    }

    /// Like `new`, but rejects options that fail validation.
    pub fn with_options(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Registers `handler` and `middleware` for `method` on `pattern`.
    ///
    /// Re-registering the same method and pattern replaces the earlier
    /// handler. Only fails when a name conflict is rejected by
    /// `ConflictMode::Reject`.
    pub fn register(
        &mut self,
        method: impl Into<HttpMethod>,
        pattern: &str,
        handler: H,
        middleware: Vec<M>,
    ) -> RouterResult<()> {
        let method = method.into();
        let segments = self.segmenter.split(pattern);
        let endpoint = Endpoint {
            handler,
            middleware,
        };

        self.tree.insert(
            method,
            pattern,
            &segments,
            endpoint,
            self.options.param_conflict,
        )?;
        Ok(())
    }

    pub fn add(
        &mut self,
        method: impl Into<HttpMethod>,
        pattern: &str,
        handler: H,
    ) -> RouterResult<()> {
        self.register(method, pattern, handler, Vec::new())
    }

    /// Resolves `method` and `path` to a handler, its middleware and the
    /// bound parameters. `None` covers both an unknown path and a known path
    /// without `method`; use `allowed_methods` to tell them apart.
    pub fn find(
        &self,
        method: impl Into<HttpMethod>,
        path: &str,
    ) -> Option<RouteMatch<'_, H, M>> {
        let method = method.into();
        tracing::event!(tracing::Level::TRACE, operation="find", method=%method, path=%path);

        let segments = self.segmenter.split(path);
        let mut captures = Vec::new();
        let id = resolve(&self.tree, &segments, Target::Method(&method), &mut captures)?;
        let endpoint = self.tree.node(id).handlers().get(&method)?;

        Some(RouteMatch {
            handler: &endpoint.handler,
            middleware: &endpoint.middleware,
            params: Params::from_captures(&captures),
        })
    }

    /// Methods registered on the node `path` resolves to, in registration
    /// order. Empty when no node matches.
    ///
    /// Resolution stops at the first node, by static > param > wildcard
    /// priority, that holds a handler for any method. A lower-priority node
    /// reached by `find` through backtracking is not consulted, so with
    /// `GET /users/me` and `DELETE /users/:id` registered this returns only
    /// `GET` for `/users/me` even though `find(DELETE, "/users/me")` matches.
    pub fn allowed_methods(&self, path: &str) -> Vec<HttpMethod> {
        let segments = self.segmenter.split(path);
        let mut captures = Vec::new();
        match resolve(&self.tree, &segments, Target::AnyMethod, &mut captures) {
            Some(id) => self.tree.node(id).handlers().methods().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn has_path(&self, path: &str) -> bool {
        !self.allowed_methods(path).is_empty()
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.tree.routes()
    }

    pub fn split(&self, path: &str) -> Segments {
        self.segmenter.split(path)
    }

    pub fn clear_cache(&self) {
        self.segmenter.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.segmenter.stats()
    }

    /// Number of distinct (method, pattern) registrations.
    pub fn len(&self) -> usize {
        self.tree.route_count()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.route_count() == 0
    }

    pub fn tree(&self) -> &RadixTree<H, M> {
        &self.tree
    }
}
