use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::enums::{HttpMethod, MethodMask};
use crate::types::Endpoint;

/// Index of a node inside the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    /// `None` once the arena has outgrown the `u32` index space.
    #[inline(always)]
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(NodeId)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Static,
    Param,
    Wildcard,
}

/// Method to endpoint association list, in registration order.
#[derive(Debug)]
pub struct MethodTable<H, M> {
    mask: MethodMask,
    entries: SmallVec<[(HttpMethod, Endpoint<H, M>); 4]>,
}

impl<H, M> Default for MethodTable<H, M> {
    fn default() -> Self {
        Self {
            mask: MethodMask::empty(),
            entries: SmallVec::new(),
        }
    }
}

impl<H, M> MethodTable<H, M> {
    #[inline]
    pub fn get(&self, method: &HttpMethod) -> Option<&Endpoint<H, M>> {
        if !self.mask.contains(method.mask()) {
            return None;
        }
        self.entries
            .iter()
            .find(|(registered, _)| registered == method)
            .map(|(_, endpoint)| endpoint)
    }

    #[inline]
    pub fn contains(&self, method: &HttpMethod) -> bool {
        self.get(method).is_some()
    }

    /// Stores `endpoint` for `method`, returning the endpoint it replaced.
    pub fn insert(
        &mut self,
        method: HttpMethod,
        endpoint: Endpoint<H, M>,
    ) -> Option<Endpoint<H, M>> {
        if let Some((_, existing)) = self
            .entries
            .iter_mut()
            .find(|(registered, _)| *registered == method)
        {
            return Some(std::mem::replace(existing, endpoint));
        }
        self.mask |= method.mask();
        self.entries.push((method, endpoint));
        None
    }

    pub fn methods(&self) -> impl Iterator<Item = &HttpMethod> {
        self.entries.iter().map(|(method, _)| method)
    }

    pub fn mask(&self) -> MethodMask {
        self.mask
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
pub struct Node<H, M> {
    pub(crate) literal: Box<str>,
    pub(crate) kind: NodeKind,
    pub(crate) static_children: FastHashMap<Box<str>, NodeId>,
    pub(crate) param_child: Option<NodeId>,
    pub(crate) wildcard_child: Option<NodeId>,
    // unset for static nodes
    pub(crate) param_name: Option<Box<str>>,
    pub(crate) handlers: MethodTable<H, M>,
}

impl<H, M> Node<H, M> {
    pub(crate) fn root() -> Self {
        Self::with_kind(NodeKind::Static, "", None)
    }

    pub(crate) fn new_static(literal: &str) -> Self {
        Self::with_kind(NodeKind::Static, literal, None)
    }

    pub(crate) fn new_param(literal: &str, name: &str) -> Self {
        Self::with_kind(NodeKind::Param, literal, Some(name))
    }

    pub(crate) fn new_wildcard(literal: &str, name: &str) -> Self {
        Self::with_kind(NodeKind::Wildcard, literal, Some(name))
    }

    fn with_kind(kind: NodeKind, literal: &str, name: Option<&str>) -> Self {
        Self {
            literal: Box::from(literal),
            kind,
            static_children: FastHashMap::new(),
            param_child: None,
            wildcard_child: None,
            param_name: name.map(Box::from),
            handlers: MethodTable::default(),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Name bound when this node is reached; `None` for static nodes.
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    #[inline]
    pub fn static_child(&self, segment: &str) -> Option<NodeId> {
        self.static_children.get(segment).copied()
    }

    pub fn param_child(&self) -> Option<NodeId> {
        self.param_child
    }

    pub fn wildcard_child(&self) -> Option<NodeId> {
        self.wildcard_child
    }

    pub fn handlers(&self) -> &MethodTable<H, M> {
        &self.handlers
    }
}
