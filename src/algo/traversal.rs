/*!
Depth-first traversals.

[`DepthFirstSearch`] visits all nodes reachable from a sequence of roots, sharing one visited
set between the roots, and emits every node exactly once either on first visit (pre-order) or
after all nodes reachable from it have been emitted (post-order). Directed graphs are navigated
along successors, undirected graphs along all neighbors.

The search keeps an explicit call stack, so deep graphs cannot overflow the thread stack.
*/

use super::*;

/// Position at which a node is emitted during a depth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsOrder {
    /// Emit a node when it is first reached
    Pre,
    /// Emit a node once all nodes reachable from it have been emitted
    Post,
}

/// Iterator over node handles in depth-first pre- or post-order
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList + 'a,
{
    graph: &'a G,
    order: DfsOrder,
    visited: NodeBitSet,
    roots: std::vec::IntoIter<Node>,
    call_stack: Vec<(Node, Navigation<'a, G>)>,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a search starting from `roots` in the given order.
    /// ** Panics if a root is not a live handle **
    pub fn new<I>(graph: &'a G, roots: I, order: DfsOrder) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            graph,
            order,
            visited: NodeBitSet::new(graph.node_bound() as NumNodes),
            roots: roots.into_iter().collect_vec().into_iter(),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Marks `u` as visited and descends into it
    fn enter(&mut self, u: Node) -> Option<Node> {
        self.visited.set_bit(u);
        self.call_stack.push((u, self.graph.navigate_from(u)));
        (self.order == DfsOrder::Pre).then_some(u)
    }

    /// Returns *true* if `u` was reached by the search so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<'a, G> Iterator for DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, neighbors)) = self.call_stack.last_mut() {
                let u = *u;
                let visited = &self.visited;
                match neighbors.find(|&v| !visited.get_bit(v)) {
                    Some(v) => {
                        if let Some(x) = self.enter(v) {
                            return Some(x);
                        }
                    }
                    None => {
                        self.call_stack.pop();
                        if self.order == DfsOrder::Post {
                            return Some(u);
                        }
                    }
                }
                continue;
            }

            let visited = &self.visited;
            let root = self.roots.find(|&r| !visited.get_bit(r))?;
            if let Some(x) = self.enter(root) {
                return Some(x);
            }
        }
    }
}

/// Provides depth-first searches directly on the graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over all nodes reachable from `roots` in depth-first `order`
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph: Graph = Graph::new();
    /// graph.set_path(["a", "b", "c"]);
    ///
    /// let a = graph.handle_of("a").unwrap();
    /// let order = graph
    ///     .depth_first_search([a], DfsOrder::Post)
    ///     .map(|u| graph.name_of(u))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(order, vec!["c", "b", "a"]);
    /// ```
    fn depth_first_search<I>(&self, roots: I, order: DfsOrder) -> DepthFirstSearch<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        DepthFirstSearch::new(self, roots, order)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

/// Resolves all roots before any traversal starts
fn resolve_roots<G, I>(graph: &G, roots: I) -> Result<Vec<Node>>
where
    G: AdjacencyList,
    I: IntoIterator,
    I::Item: NodeId,
{
    roots
        .into_iter()
        .map(|root| {
            let id = root.node_id();
            graph.handle_of(&id).ok_or_else(|| {
                tracing::debug!(root = %id, "traversal root not in graph");
                GraphError::MissingNode(id.into_owned())
            })
        })
        .collect()
}

/// Returns the ids of all nodes reachable from `roots` in depth-first `order`.
///
/// Fails with [`GraphError::MissingNode`] if any root does not exist; in this case no
/// traversal is performed.
#[tracing::instrument(skip_all, fields(order = ?order))]
pub fn dfs<G, I>(graph: &G, roots: I, order: DfsOrder) -> Result<Vec<String>>
where
    G: AdjacencyList,
    I: IntoIterator,
    I::Item: NodeId,
{
    let roots = resolve_roots(graph, roots)?;
    Ok(graph
        .depth_first_search(roots, order)
        .map(|u| graph.name_of(u).to_string())
        .collect())
}

/// Depth-first pre-order from `roots`; see [`dfs`]
pub fn preorder<G, I>(graph: &G, roots: I) -> Result<Vec<String>>
where
    G: AdjacencyList,
    I: IntoIterator,
    I::Item: NodeId,
{
    dfs(graph, roots, DfsOrder::Pre)
}

/// Depth-first post-order from `roots`; see [`dfs`]
pub fn postorder<G, I>(graph: &G, roots: I) -> Result<Vec<String>>
where
    G: AdjacencyList,
    I: IntoIterator,
    I::Item: NodeId,
{
    dfs(graph, roots, DfsOrder::Post)
}
