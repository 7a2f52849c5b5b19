use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::enums::HttpMethod;
use crate::matcher::Params;

/// Non-empty path segments, shared between the segment cache and callers.
pub type Segments = Arc<[Box<str>]>;

/// Handler and middleware stored for one method on a terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<H, M> {
    pub handler: H,
    pub middleware: Vec<M>,
}

/// Borrowed lookup result.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'a, H, M> {
    pub handler: &'a H,
    pub middleware: &'a [M],
    pub params: Params,
}

impl<H: Clone, M: Clone> RouteMatch<'_, H, M> {
    pub fn cloned(&self) -> MatchedRoute<H, M> {
        MatchedRoute {
            handler: self.handler.clone(),
            middleware: self.middleware.to_vec(),
            params: self.params.clone(),
        }
    }
}

/// Owned lookup result, returned where the tree sits behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute<H, M> {
    pub handler: H,
    pub middleware: Vec<M>,
    pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteInfo {
    pub method: HttpMethod,
    pub path: String,
}
