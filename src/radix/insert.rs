use super::{Node, NodeId, RadixError, RadixResult, RadixTree};
use crate::enums::HttpMethod;
use crate::pattern::{PatternSegment, parse_pattern};
use crate::router::ConflictMode;
use crate::types::Endpoint;

impl<H, M> RadixTree<H, M> {
    /// Walks or creates one node per pattern segment and stores `endpoint`
    /// under `method` on the terminal node. Returns the endpoint it replaced.
    ///
    /// Segments after a wildcard are ignored. A parameter or wildcard edge
    /// keeps the name it was created with; under `ConflictMode::Reject` a
    /// differing name fails before any node is created.
    pub fn insert(
        &mut self,
        method: HttpMethod,
        pattern: &str,
        segments: &[Box<str>],
        endpoint: Endpoint<H, M>,
        conflict: ConflictMode,
    ) -> RadixResult<Option<Endpoint<H, M>>> {
        tracing::event!(tracing::Level::TRACE, operation="insert", method=%method, pattern=%pattern);

        let parsed = parse_pattern(segments);
        if conflict == ConflictMode::Reject {
            self.check_conflicts(pattern, &parsed)?;
        }

        let mut current = NodeId::ROOT;
        for (segment, pat) in segments.iter().zip(parsed.iter()) {
            current = match *pat {
                PatternSegment::Static(literal) => self.descend_static(current, literal)?,
                PatternSegment::Param(name) => self.descend_param(current, segment, name)?,
                PatternSegment::Wildcard(name) => self.descend_wildcard(current, segment, name)?,
            };
        }

        let replaced = self.node_mut(current).handlers.insert(method, endpoint);
        if replaced.is_some() {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "insert",
                pattern = %pattern,
                "replaced existing handler"
            );
        } else {
            self.route_count += 1;
        }

        Ok(replaced)
    }

    fn descend_static(&mut self, parent: NodeId, literal: &str) -> RadixResult<NodeId> {
        if let Some(child) = self.node(parent).static_child(literal) {
            return Ok(child);
        }
        let child = self.alloc(Node::new_static(literal))?;
        self.node_mut(parent)
            .static_children
            .insert(Box::from(literal), child);
        Ok(child)
    }

    fn descend_param(&mut self, parent: NodeId, segment: &str, name: &str) -> RadixResult<NodeId> {
        if let Some(child) = self.node(parent).param_child {
            self.note_alias(child, name);
            return Ok(child);
        }
        let child = self.alloc(Node::new_param(segment, name))?;
        self.node_mut(parent).param_child = Some(child);
        Ok(child)
    }

    fn descend_wildcard(
        &mut self,
        parent: NodeId,
        segment: &str,
        name: &str,
    ) -> RadixResult<NodeId> {
        if let Some(child) = self.node(parent).wildcard_child {
            self.note_alias(child, name);
            return Ok(child);
        }
        let child = self.alloc(Node::new_wildcard(segment, name))?;
        self.node_mut(parent).wildcard_child = Some(child);
        Ok(child)
    }

    fn note_alias(&self, child: NodeId, requested: &str) {
        let existing = self.node(child).param_name().unwrap_or_default();
        if existing != requested {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "insert",
                existing = %existing,
                requested = %requested,
                "edge keeps its first name"
            );
        }
    }

    /// Read-only walk reporting the first edge whose name differs from the
    /// pattern's. Stops at the first segment that would create a node.
    fn check_conflicts(&self, pattern: &str, parsed: &[PatternSegment<'_>]) -> RadixResult<()> {
        let mut current = NodeId::ROOT;
        for pat in parsed {
            let node = self.node(current);
            let next = match *pat {
                PatternSegment::Static(literal) => node.static_child(literal),
                PatternSegment::Param(requested) => {
                    if let Some(child) = node.param_child {
                        let existing = self.node(child).param_name().unwrap_or_default();
                        if existing != requested {
                            return Err(RadixError::ParamNameConflict {
                                pattern: pattern.to_string(),
                                existing: existing.to_string(),
                                requested: requested.to_string(),
                            });
                        }
                    }
                    node.param_child
                }
                PatternSegment::Wildcard(requested) => {
                    if let Some(child) = node.wildcard_child {
                        let existing = self.node(child).param_name().unwrap_or_default();
                        if existing != requested {
                            return Err(RadixError::WildcardNameConflict {
                                pattern: pattern.to_string(),
                                existing: existing.to_string(),
                                requested: requested.to_string(),
                            });
                        }
                    }
                    node.wildcard_child
                }
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::split_segments;
    use crate::radix::NodeKind;

    fn insert(
        tree: &mut RadixTree<u32, ()>,
        pattern: &str,
        handler: u32,
        conflict: ConflictMode,
    ) -> RadixResult<Option<Endpoint<u32, ()>>> {
        let segments = split_segments(pattern);
        let endpoint = Endpoint {
            handler,
            middleware: Vec::new(),
        };
        tree.insert(HttpMethod::Get, pattern, &segments, endpoint, conflict)
    }

    #[test]
    fn shared_prefixes_reuse_nodes() {
        let mut tree = RadixTree::new();
        insert(&mut tree, "/api/users", 1, ConflictMode::FirstWins).unwrap();
        insert(&mut tree, "/api/posts", 2, ConflictMode::FirstWins).unwrap();

        // root, api, users, posts
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.route_count(), 2);
    }

    #[test]
    fn wildcard_node_is_terminal_and_childless() {
        let mut tree = RadixTree::new();
        insert(&mut tree, "/files/*rest/ignored/:x", 1, ConflictMode::FirstWins).unwrap();

        let files = tree.root().static_child("files").unwrap();
        let wildcard = tree.node(files).wildcard_child().unwrap();
        let node = tree.node(wildcard);

        assert_eq!(node.kind(), NodeKind::Wildcard);
        assert_eq!(node.param_name(), Some("rest"));
        assert!(node.static_children.is_empty());
        assert!(node.param_child().is_none());
        assert_eq!(node.handlers().len(), 1);
    }

    #[test]
    fn second_param_name_aliases_first_edge() {
        let mut tree = RadixTree::new();
        insert(&mut tree, "/users/:id", 1, ConflictMode::FirstWins).unwrap();
        insert(&mut tree, "/users/:name/posts", 2, ConflictMode::FirstWins).unwrap();

        let users = tree.root().static_child("users").unwrap();
        let param = tree.node(users).param_child().unwrap();
        assert_eq!(tree.node(param).param_name(), Some("id"));
        assert!(tree.node(param).static_child("posts").is_some());
    }

    #[test]
    fn reject_mode_fails_without_touching_tree() {
        let mut tree = RadixTree::new();
        insert(&mut tree, "/users/:id", 1, ConflictMode::Reject).unwrap();
        let before = tree.node_count();

        let err = insert(&mut tree, "/users/:name/posts", 2, ConflictMode::Reject).unwrap_err();

        assert_eq!(
            err,
            RadixError::ParamNameConflict {
                pattern: "/users/:name/posts".to_string(),
                existing: "id".to_string(),
                requested: "name".to_string(),
            }
        );
        assert_eq!(tree.node_count(), before);
        assert_eq!(tree.route_count(), 1);
    }

    #[test]
    fn reject_mode_detects_wildcard_rename() {
        let mut tree = RadixTree::new();
        insert(&mut tree, "/static/*", 1, ConflictMode::Reject).unwrap();
        let err = insert(&mut tree, "/static/*path", 2, ConflictMode::Reject).unwrap_err();

        assert!(matches!(err, RadixError::WildcardNameConflict { ref existing, .. } if existing == "*"));
    }
}
