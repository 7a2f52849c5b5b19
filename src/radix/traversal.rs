use super::node::{NodeId, NodeKind};
use super::tree::RadixTree;
use crate::pattern::WILDCARD_NAME;
use crate::types::RouteInfo;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

impl<H, M> RadixTree<H, M> {
    /// Every (method, pattern) pair in the tree, static branches first, then
    /// the parameter branch, then the wildcard branch. Static siblings are
    /// visited in lexical order so the listing is stable.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let mut out = Vec::with_capacity(self.route_count);
        let mut stack: Vec<(NodeId, String)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
        stack.push((NodeId::ROOT, String::new()));

        while let Some((id, path)) = stack.pop() {
            let node = self.node(id);
            let display = if path.is_empty() { "/" } else { path.as_str() };
            for method in node.handlers().methods() {
                out.push(RouteInfo {
                    method: method.clone(),
                    path: display.to_string(),
                });
            }

            // pushed in reverse so pops follow static, param, wildcard
            if let Some(child) = node.wildcard_child() {
                stack.push((child, self.extend_path(&path, child)));
            }
            if let Some(child) = node.param_child() {
                stack.push((child, self.extend_path(&path, child)));
            }
            let mut statics: Vec<(&str, NodeId)> = node
                .static_children
                .iter()
                .map(|(key, child)| (key.as_ref(), *child))
                .collect();
            statics.sort_unstable_by(|a, b| b.0.cmp(a.0));
            for (_, child) in statics {
                stack.push((child, self.extend_path(&path, child)));
            }
        }

        out
    }

    fn extend_path(&self, prefix: &str, child: NodeId) -> String {
        let node = self.node(child);
        let mut path = String::with_capacity(prefix.len() + node.literal().len() + 2);
        path.push_str(prefix);
        path.push('/');
        match node.kind() {
            NodeKind::Static => path.push_str(node.literal()),
            NodeKind::Param => {
                path.push(':');
                path.push_str(node.param_name().unwrap_or_default());
            }
            NodeKind::Wildcard => match node.param_name() {
                Some(WILDCARD_NAME) | None => path.push('*'),
                Some(name) => {
                    path.push('*');
                    path.push_str(name);
                }
            },
        }
        path
    }
}
