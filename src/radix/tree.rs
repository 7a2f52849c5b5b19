use super::node::{Node, NodeId};
use super::{RadixError, RadixResult};

/// Arena-backed prefix tree. Node 0 is the root; nodes are never removed.
#[derive(Debug)]
pub struct RadixTree<H, M> {
    pub(crate) nodes: Vec<Node<H, M>>,
    pub(crate) route_count: usize,
}

impl<H, M> Default for RadixTree<H, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, M> RadixTree<H, M> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            route_count: 0,
        }
    }

    #[inline(always)]
    pub fn root(&self) -> &Node<H, M> {
        self.node(NodeId::ROOT)
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &Node<H, M> {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<H, M> {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn alloc(&mut self, node: Node<H, M>) -> RadixResult<NodeId> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(RadixError::NodeLimit {
            nodes: self.nodes.len(),
        })?;
        self.nodes.push(node);
        Ok(id)
    }

    /// Number of distinct (method, pattern) registrations.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
