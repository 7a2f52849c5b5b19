use std::borrow::Cow;

use crate::enums::HttpMethod;
use crate::matcher::Capture;
use crate::pattern::WILDCARD_NAME;
use crate::radix::{NodeId, RadixTree};

/// What a terminal node must offer for a descent to succeed.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target<'m> {
    Method(&'m HttpMethod),
    AnyMethod,
}

/// Depth-first search for the node `segments` resolve to.
///
/// At each node the static child is tried first, then the parameter child,
/// then the wildcard child. A failed branch is abandoned and its bindings
/// are truncated from `captures`, so only the successful path's bindings
/// remain. Wildcard consumption is unconditional: it returns its node
/// without consulting `target`.
pub(crate) fn resolve<'t, 'p, H, M>(
    tree: &'t RadixTree<H, M>,
    segments: &'p [Box<str>],
    target: Target<'_>,
    captures: &mut Vec<Capture<'t, 'p>>,
) -> Option<NodeId> {
    descend(tree, NodeId::ROOT, segments, 0, target, captures)
}

fn descend<'t, 'p, H, M>(
    tree: &'t RadixTree<H, M>,
    id: NodeId,
    segments: &'p [Box<str>],
    index: usize,
    target: Target<'_>,
    captures: &mut Vec<Capture<'t, 'p>>,
) -> Option<NodeId> {
    let node = tree.node(id);

    let Some(segment) = segments.get(index) else {
        return accepts(tree, id, target).then_some(id);
    };

    if let Some(child) = node.static_child(segment)
        && let Some(found) = descend(tree, child, segments, index + 1, target, captures)
    {
        return Some(found);
    }

    if let Some(child) = node.param_child() {
        let checkpoint = captures.len();
        let name = tree.node(child).param_name().unwrap_or_default();
        captures.push((name, Cow::Borrowed(segment.as_ref())));
        if let Some(found) = descend(tree, child, segments, index + 1, target, captures) {
            return Some(found);
        }
        captures.truncate(checkpoint);
    }

    if let Some(child) = node.wildcard_child() {
        let name = tree.node(child).param_name().unwrap_or(WILDCARD_NAME);
        captures.push((name, Cow::Owned(segments[index..].join("/"))));
        return Some(child);
    }

    None
}

#[inline]
fn accepts<H, M>(tree: &RadixTree<H, M>, id: NodeId, target: Target<'_>) -> bool {
    let handlers = tree.node(id).handlers();
    match target {
        Target::Method(method) => handlers.contains(method),
        Target::AnyMethod => !handlers.is_empty(),
    }
}
