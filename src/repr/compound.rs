/*!
# Compound Graphs

In a compound graph every node has at most one parent, so the nodes form a forest. Nodes without
a parent are attached to an invisible root represented by [`INVALID_NODE`].
*/

use fxhash::{FxHashMap, FxHashSet};

use super::*;
use crate::{error::*, node::*, ops::*};

/// Parent/child forest over node handles
#[derive(Debug, Clone)]
pub(crate) struct Hierarchy {
    parent: FxHashMap<Node, Node>,
    children: FxHashMap<Node, FxHashSet<Node>>,
}

impl Hierarchy {
    pub fn new() -> Self {
        let mut children = FxHashMap::default();
        children.insert(INVALID_NODE, FxHashSet::default());
        Self {
            parent: FxHashMap::default(),
            children,
        }
    }

    /// Registers a new node as a child of the root
    pub fn attach_root(&mut self, u: Node) {
        self.parent.insert(u, INVALID_NODE);
        self.children.insert(u, FxHashSet::default());
        self.children.entry(INVALID_NODE).or_default().insert(u);
    }

    /// Returns the parent of `u`, or `None` if `u` is attached to the root
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parent
            .get(&u)
            .copied()
            .filter(|&p| p != INVALID_NODE)
    }

    /// Returns the children of `u`; pass [`INVALID_NODE`] for the children of the root
    pub fn children_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.children.get(&u).into_iter().flatten().copied()
    }

    /// Moves `child` below `parent` (which may be [`INVALID_NODE`])
    pub fn set_parent(&mut self, child: Node, parent: Node) {
        if let Some(previous) = self.parent.insert(child, parent) {
            if let Some(siblings) = self.children.get_mut(&previous) {
                siblings.remove(&child);
            }
        }
        self.children.entry(parent).or_default().insert(child);
    }

    /// Detaches `u` and moves its children to the parent of `u`
    pub fn remove(&mut self, u: Node) {
        let parent = self.parent.remove(&u).unwrap_or(INVALID_NODE);
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.remove(&u);
        }

        for child in self.children.remove(&u).unwrap_or_default() {
            self.parent.insert(child, parent);
            self.children.entry(parent).or_default().insert(child);
        }
    }
}

impl<N, E, L> Graph<N, E, L> {
    fn parent_handle(&self, u: Node) -> Option<Node> {
        self.hierarchy.as_ref()?.parent_of(u)
    }

    /// Returns the parent of `v`.
    ///
    /// Returns `None` if the graph is not compound, `v` does not exist, or `v` has no parent.
    pub fn parent(&self, v: impl NodeId) -> Option<&str> {
        let u = self.handle_of(&v.node_id())?;
        self.parent_handle(u).map(|p| self.name_of(p))
    }

    /// Returns the children of `v`, or `None` if `v` does not exist.
    /// Nodes of a non-compound graph have no children.
    pub fn children(&self, v: impl NodeId) -> Option<Vec<&str>> {
        let u = self.handle_of(&v.node_id())?;
        Some(match &self.hierarchy {
            Some(hierarchy) => hierarchy.children_of(u).map(|c| self.name_of(c)).collect(),
            None => Vec::new(),
        })
    }

    /// Returns all nodes without a parent. In a non-compound graph these are all nodes.
    pub fn root_children(&self) -> Vec<&str> {
        match &self.hierarchy {
            Some(hierarchy) => hierarchy
                .children_of(INVALID_NODE)
                .map(|c| self.name_of(c))
                .collect(),
            None => self.nodes().collect(),
        }
    }

    fn ensure_compound(&self) -> Result<()> {
        if self.hierarchy.is_none() {
            tracing::debug!("rejected parent assignment in non-compound graph");
            return Err(GraphError::NotCompound);
        }
        Ok(())
    }

    /// Returns the closest ancestor of `u` that has a handle in `mapping`, or [`INVALID_NODE`].
    /// Removed ancestors on the way are memoized in `memo`.
    fn nearest_kept_ancestor(
        &self,
        u: Node,
        mapping: &[Node],
        memo: &mut FxHashMap<Node, Node>,
    ) -> Node {
        let mut skipped = Vec::new();
        let mut current = self.parent_handle(u).unwrap_or(INVALID_NODE);

        let ancestor = loop {
            if current == INVALID_NODE || mapping[current as usize] != INVALID_NODE {
                break current;
            }
            if let Some(&known) = memo.get(&current) {
                break known;
            }
            skipped.push(current);
            current = self.parent_handle(current).unwrap_or(INVALID_NODE);
        };

        for removed in skipped {
            memo.insert(removed, ancestor);
        }
        ancestor
    }
}

impl<N: Clone, E: Clone, L> Graph<N, E, L> {
    /// Makes `parent` the parent of `child`, creating both nodes if necessary.
    ///
    /// # Errors
    /// - [`GraphError::NotCompound`] if the graph was not constructed as compound,
    /// - [`GraphError::CompoundCycle`] if `parent` is `child` itself or one of its descendants.
    ///
    /// The graph is left untouched on error.
    ///
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut graph: Graph = Graph::with_options(GraphOptions::default().compound(true));
    /// graph.set_parent("a", "parent").unwrap();
    /// assert_eq!(graph.parent("a"), Some("parent"));
    /// assert!(graph.set_parent("parent", "a").is_err());
    /// ```
    pub fn set_parent(&mut self, child: impl NodeId, parent: impl NodeId) -> Result<&mut Self> {
        self.ensure_compound()?;
        let (child, parent) = (child.node_id(), parent.node_id());

        let mut creates_cycle = parent == child;
        let mut ancestor = self.handle_of(&parent);
        while let Some(a) = ancestor.filter(|_| !creates_cycle) {
            creates_cycle = self.name_of(a) == child;
            ancestor = self.parent_handle(a);
        }
        if creates_cycle {
            tracing::debug!(child = %child, parent = %parent, "rejected cyclic parent assignment");
            return Err(GraphError::CompoundCycle {
                child: child.into_owned(),
                parent: parent.into_owned(),
            });
        }

        let p = self.ensure_node(&parent);
        let c = self.ensure_node(&child);
        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.set_parent(c, p);
        }
        Ok(self)
    }

    /// Moves `child` back to the root, creating it if necessary.
    ///
    /// Fails with [`GraphError::NotCompound`] if the graph was not constructed as compound.
    pub fn remove_parent(&mut self, child: impl NodeId) -> Result<&mut Self> {
        self.ensure_compound()?;
        let c = self.ensure_node(&child.node_id());
        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.set_parent(c, INVALID_NODE);
        }
        Ok(self)
    }
}

impl<N: Clone, E: Clone, L: Clone> Graph<N, E, L> {
    /// Returns a new graph containing the nodes whose id satisfies `keep` and the edges
    /// between them. Labels, options, default label providers and the graph label are copied.
    ///
    /// In a compound graph every kept node is attached to its nearest kept ancestor.
    ///
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut graph: Graph = Graph::with_options(GraphOptions::default().compound(true));
    /// graph.set_parent("c", "b").unwrap();
    /// graph.set_parent("b", "a").unwrap();
    /// graph.set_edge("a", "c");
    ///
    /// let filtered = graph.filter_nodes(|v| v != "b");
    /// assert_eq!(filtered.parent("c"), Some("a"));
    /// assert!(filtered.has_edge("a", "c"));
    /// ```
    pub fn filter_nodes<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let mut filtered = Self::with_options(self.options);
        filtered.label = self.label.clone();
        filtered.default_node_label = self.default_node_label.clone();
        filtered.default_edge_label = self.default_edge_label.clone();

        let mut mapping = vec![INVALID_NODE; self.node_bound()];
        for u in self.vertices() {
            let slot = self.slot(u);
            if keep(&*slot.name) {
                mapping[u as usize] = filtered.insert_node(slot.name.clone(), slot.label.clone());
            }
        }

        for (key, slot) in &self.edges {
            let (v, w) = (mapping[key.v as usize], mapping[key.w as usize]);
            if v != INVALID_NODE && w != INVALID_NODE {
                filtered.insert_edge(v, w, key.name.clone(), slot.label.clone());
            }
        }

        if self.hierarchy.is_some() {
            let mut memo = FxHashMap::default();
            for u in self.vertices() {
                if mapping[u as usize] == INVALID_NODE {
                    continue;
                }

                let ancestor = self.nearest_kept_ancestor(u, &mapping, &mut memo);
                if ancestor != INVALID_NODE {
                    if let Some(hierarchy) = filtered.hierarchy.as_mut() {
                        hierarchy.set_parent(mapping[u as usize], mapping[ancestor as usize]);
                    }
                }
            }
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::graph::tests::assert_consistent;
    use itertools::Itertools;

    fn compound() -> Graph<String> {
        Graph::with_options(GraphOptions::default().compound(true))
    }

    #[test]
    fn non_compound_rejects_parents() {
        let mut graph: Graph = Graph::new();
        assert!(matches!(
            graph.set_parent("a", "b"),
            Err(GraphError::NotCompound)
        ));
        assert!(matches!(
            graph.remove_parent("a"),
            Err(GraphError::NotCompound)
        ));
        assert_eq!(graph.node_count(), 0);

        graph.set_nodes(["a", "b"]);
        assert_eq!(graph.parent("a"), None);
        assert_eq!(graph.children("a"), Some(vec![]));
        assert_eq!(graph.children("zzz"), None);
        assert_eq!(graph.root_children().into_iter().sorted().collect_vec(), vec!["a", "b"]);
    }

    #[test]
    fn set_parent_creates_nodes_and_moves_children() {
        let mut graph = compound();
        graph.set_parent("a", "parent").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.parent("a"), Some("parent"));
        assert_eq!(graph.children("parent"), Some(vec!["a"]));
        assert_eq!(graph.root_children(), vec!["parent"]);

        graph.set_parent("a", "other").unwrap();
        assert_eq!(graph.parent("a"), Some("other"));
        assert_eq!(graph.children("parent"), Some(vec![]));
        assert_eq!(graph.children("other"), Some(vec!["a"]));

        graph.remove_parent("a").unwrap();
        assert_eq!(graph.parent("a"), None);
        assert_eq!(
            graph.root_children().into_iter().sorted().collect_vec(),
            vec!["a", "other", "parent"]
        );
    }

    #[test]
    fn set_parent_rejects_cycles() {
        let mut graph = compound();
        graph.set_parent("b", "a").unwrap();
        graph.set_parent("c", "b").unwrap();

        assert!(matches!(
            graph.set_parent("a", "c"),
            Err(GraphError::CompoundCycle { ref child, ref parent }) if child == "a" && parent == "c"
        ));
        assert!(matches!(
            graph.set_parent("a", "a"),
            Err(GraphError::CompoundCycle { .. })
        ));
        assert!(matches!(
            graph.set_parent("new", "new"),
            Err(GraphError::CompoundCycle { .. })
        ));

        // nothing changed
        assert_eq!(graph.parent("a"), None);
        assert!(!graph.has_node("new"));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn remove_node_reparents_children_to_grandparent() {
        let mut graph = compound();
        graph.set_parent("b", "a").unwrap();
        graph.set_parent("c1", "b").unwrap();
        graph.set_parent("c2", "b").unwrap();

        graph.remove_node("b");
        assert_eq!(graph.parent("c1"), Some("a"));
        assert_eq!(graph.parent("c2"), Some("a"));
        assert_eq!(
            graph.children("a").unwrap().into_iter().sorted().collect_vec(),
            vec!["c1", "c2"]
        );

        // removing a root-level node moves its children to the root
        graph.remove_node("a");
        assert_eq!(graph.parent("c1"), None);
        assert_eq!(
            graph.root_children().into_iter().sorted().collect_vec(),
            vec!["c1", "c2"]
        );
        assert_consistent(&graph);
    }

    #[test]
    fn recycled_handles_start_at_root() {
        let mut graph = compound();
        graph.set_parent("x", "y").unwrap();
        graph.remove_node("x");
        graph.set_node("z");
        assert_eq!(graph.parent("z"), None);
        assert_eq!(graph.children("y"), Some(vec![]));
    }

    #[test]
    fn filter_nodes_copies_labels_and_edges() {
        let mut graph: Graph<String, u32, &str> = Graph::new();
        graph.set_graph_label("meta");
        graph.set_node_label("a", Some("A".into()));
        graph.set_edge_label("a", "b", Some(1));
        graph.set_edge_label("b", "c", Some(2));
        graph.set_edge_label("a", "c", Some(3));

        let filtered = graph.filter_nodes(|v| v != "b");
        assert_eq!(filtered.node_count(), 2);
        assert_eq!(filtered.edge_count(), 1);
        assert_eq!(filtered.node("a"), Some(&"A".to_string()));
        assert_eq!(filtered.edge("a", "c"), Some(&3));
        assert_eq!(filtered.graph_label(), Some(&"meta"));
        assert!(filtered.is_directed());
        assert_consistent(&filtered);

        // the source is untouched
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn filter_nodes_promotes_ancestors() {
        let mut graph = compound();
        graph.set_parent("d", "c").unwrap();
        graph.set_parent("c", "b").unwrap();
        graph.set_parent("b", "a").unwrap();
        graph.set_parent("e", "c").unwrap();
        graph.set_parent("f", "b").unwrap();

        let filtered = graph.filter_nodes(|v| !matches!(v, "b" | "c"));
        assert_eq!(filtered.parent("d"), Some("a"));
        assert_eq!(filtered.parent("e"), Some("a"));
        assert_eq!(filtered.parent("f"), Some("a"));
        assert_eq!(filtered.parent("a"), None);

        let filtered = graph.filter_nodes(|v| v != "a");
        assert_eq!(filtered.parent("b"), None);
        assert_eq!(filtered.parent("c"), Some("b"));
    }

    #[test]
    fn filter_nodes_keeps_named_undirected_edges() {
        let mut graph: Graph<(), u32> =
            Graph::with_options(GraphOptions::default().directed(false).multigraph(true));
        graph.set_edge_label("b", "a", Some(1));
        graph.set_named_edge_label("a", "b", "x", Some(2)).unwrap();
        graph.set_named_edge("b", "c", "y").unwrap();

        let filtered = graph.filter_nodes(|v| v != "c");
        assert!(!filtered.is_directed());
        assert!(filtered.is_multigraph());
        assert_eq!(filtered.node_count(), 2);
        assert_eq!(filtered.edge_count(), 2);
        assert_eq!(filtered.edge("a", "b"), Some(&1));
        assert_eq!(filtered.named_edge("b", "a", "x"), Some(&2));
        assert!(!filtered.has_named_edge("b", "c", "y"));
        assert_consistent(&filtered);
    }
}
