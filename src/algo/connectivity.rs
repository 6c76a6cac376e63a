use std::iter::FusedIterator;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns the weakly connected components of the graph, i.e. edges are followed in both
    /// directions. Isolated nodes form singleton components.
    fn weakly_connected_components(&self) -> WeaklyConnectedComponents<'_, Self> {
        WeaklyConnectedComponents::new(self)
    }

    /// Returns the strongly connected components of the graph as an iterator of `Vec<Node>`
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns the strongly connected components of the graph as an iterator of `Vec<Node>`
    /// In contrast to [`Connectivity::strongly_connected_components`], this methods includes SCCs of size 1
    /// if and only if the node has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }

    /// Returns *true* if no strongly connected component contains a cycle
    fn is_acyclic(&self) -> bool {
        self.strongly_connected_components_no_singletons()
            .next()
            .is_none()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over weakly connected components.
///
/// Nodes are swept in [`GraphNodeOrder::vertices`] order; each node not covered yet seeds a new
/// component which collects everything reachable via successors or predecessors.
pub struct WeaklyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    seeds: std::vec::IntoIter<Node>,
    stack: Vec<Node>,
}

impl<'a, G> WeaklyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: NodeBitSet::new(graph.node_bound() as NumNodes),
            seeds: graph.vertices().collect_vec().into_iter(),
            stack: Vec::with_capacity(32),
        }
    }
}

impl<'a, G> Iterator for WeaklyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let visited = &self.visited;
        let seed = self.seeds.find(|&u| !visited.get_bit(u))?;

        self.visited.set_bit(seed);
        self.stack.push(seed);

        let mut component = Vec::new();
        while let Some(u) = self.stack.pop() {
            component.push(u);
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.stack.push(v);
                }
            }
        }

        Some(component)
    }
}

impl<'a, G> FusedIterator for WeaklyConnectedComponents<'a, G> where G: AdjacencyList {}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the nodes of one strongly connected component at a
/// time. Each component starts with its root; the order of the remaining nodes within a component
/// is unspecified. The components themselves are in the reverse topological order of the SCCs
/// (i.e. if each SCC were contracted into a single node).
pub struct StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    idx: Node,

    states: Vec<NodeState>,
    roots: Vec<Node>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<Node>,

    call_stack: Vec<StackFrame<'a, G>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.node_bound()],
            roots: graph.vertices().collect(),
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Each node that is not part of a circle is returned as its own SCC.
    /// By setting `include = false`, those nodes are not returned.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Just like in a classic DFS where we want to compute a spanning-forest, we will need to
    /// to visit each node at least once. We start with the first live node and cover all nodes
    /// reachable from there in `search`. Then, we search for an untouched node here, and start over.
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.roots.len() {
            let v = self.roots[self.potentially_unvisited];
            if !self.states[v as usize].visited {
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this is the first step
    /// to a recursive call of search.
    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            first_call: true,
            neighbors: self.graph.successors_of(node),
        });
    }

    fn search(&mut self) -> Option<Vec<Node>> {
        /*
        On first visit of a node v it is assigned a DFS index and the same low_link value, the
        smallest index known to be reachable from v. Processing a successor may trigger a
        "recursive call", which is simulated by pushing a frame onto `self.call_stack`; the
        frame keeps the partially consumed successor iterator so that the parent can resume
        where it left off. Once all successors of v are processed, v is the root of an SCC iff
        its low_link equals its index, and the SCC consists of all nodes above v on the path stack.

        All state lives in `self`, so we can return a component and resume on the next call.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len() as Node;

                self.states[v as usize].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            for w in frame.neighbors.by_ref() {
                let w_state = self.states[w as usize];
                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[frame.node as usize].try_lower_link(w_state.index);
                }
            }

            let frame = self.call_stack.pop()?;
            let state = self.states[v as usize];

            self.states[frame.parent as usize].try_lower_link(state.low_link);

            if state.is_root() {
                if !self.include_singletons
                    && self.path_stack.last() == Some(&v)
                    && !self.graph.has_self_loop(v)
                {
                    // skip producing component descriptor, since we have a singleton node
                    // but we need to undo
                    self.states[v as usize].on_stack = false;
                    self.path_stack.pop();
                } else {
                    let component = self
                        .path_stack
                        .split_off(frame.initial_stack_len as usize);

                    for &w in &component {
                        self.states[w as usize].on_stack = false;
                    }

                    debug_assert_eq!(component.first(), Some(&v));

                    return Some(component);
                }
            }
        }

        None
    }
}

impl<'a, G> Iterator for StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    /// Returns either a vector of node ids that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<'a, G> FusedIterator for StronglyConnectedComponents<'a, G> where G: AdjacencyList {}

struct StackFrame<'a, T>
where
    T: AdjacencyList + 'a,
{
    node: Node,
    parent: Node,
    initial_stack_len: Node,
    first_call: bool,
    neighbors: T::NeighborIter<'a>,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl NodeState {
    fn visit(&mut self, u: Node) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

fn into_names<G>(graph: &G, components: impl Iterator<Item = Vec<Node>>) -> Vec<Vec<String>>
where
    G: GraphNodeOrder,
{
    components
        .map(|comp| {
            comp.into_iter()
                .map(|u| graph.name_of(u).to_string())
                .collect()
        })
        .collect()
}

/// Returns the weakly connected components of `graph` as lists of node ids.
/// Every node appears in exactly one component.
///
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut graph: Graph = Graph::new();
/// graph.set_path(["a", "b", "c"]).set_edge("d", "c").set_edge("e", "f");
///
/// let components = sort_components(components(&graph));
/// assert_eq!(components, vec![vec!["a", "b", "c", "d"], vec!["e", "f"]]);
/// ```
#[tracing::instrument(skip_all, fields(nodes = graph.number_of_nodes()))]
pub fn components<G>(graph: &G) -> Vec<Vec<String>>
where
    G: AdjacencyList,
{
    into_names(graph, graph.weakly_connected_components())
}

/// Returns the strongly connected components of `graph` as lists of node ids, in reverse
/// topological order of the condensation. Every node appears in exactly one component.
#[tracing::instrument(skip_all, fields(nodes = graph.number_of_nodes()))]
pub fn tarjan<G>(graph: &G) -> Vec<Vec<String>>
where
    G: AdjacencyList,
{
    into_names(graph, graph.strongly_connected_components())
}

/// Returns all strongly connected components that contain a cycle: those with more than one
/// node, and single nodes with a self-loop.
#[tracing::instrument(skip_all, fields(nodes = graph.number_of_nodes()))]
pub fn find_cycles<G>(graph: &G) -> Vec<Vec<String>>
where
    G: AdjacencyList,
{
    into_names(graph, graph.strongly_connected_components_no_singletons())
}

/// Returns *true* if `graph` contains no directed cycle (self-loops included)
pub fn is_acyclic<G>(graph: &G) -> bool
where
    G: AdjacencyList,
{
    Connectivity::is_acyclic(graph)
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components<T: Ord>(mut components: Vec<Vec<T>>) -> Vec<Vec<T>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_unstable();
    components
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn weak_components_partition_nodes() {
        let mut graph: Graph = Graph::new();
        graph
            .set_path(["a", "b", "c"])
            .set_edge("d", "c")
            .set_edge("e", "f")
            .set_node("g");

        let comps = sort_components(components(&graph));
        assert_eq!(comps, vec![
            vec!["a", "b", "c", "d"],
            vec!["e", "f"],
            vec!["g"]
        ]);
    }

    #[test]
    fn weak_components_of_empty_graph() {
        let graph: Graph = Graph::new();
        assert!(components(&graph).is_empty());
        assert!(tarjan(&graph).is_empty());
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn weak_components_of_undirected_graph() {
        let mut graph: Graph = Graph::with_options(GraphOptions::default().directed(false));
        graph
            .set_path(["c", "b"])
            .set_edge("d", "a")
            .set_edge("e", "e")
            .set_node("f");

        let comps = sort_components(components(&graph));
        assert_eq!(comps, vec![
            vec!["a", "d"],
            vec!["b", "c"],
            vec!["e"],
            vec!["f"]
        ]);
    }

    #[test]
    fn chain_components_are_dependency_last() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "c"]);

        assert_eq!(tarjan(&graph), vec![vec!["c"], vec!["b"], vec!["a"]]);
        assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    pub fn scc() {
        let mut graph: Graph = Graph::new();
        for (u, v) in [
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ] {
            graph.set_edge(u, v);
        }

        let sccs = tarjan(&graph);
        assert_eq!(sccs.len(), 3);

        // sink component first
        assert_eq!(sort_components(vec![sccs[0].clone()]), vec![vec!["5", "6"]]);

        let sccs = sort_components(sccs);
        assert_eq!(sccs[0], ["0", "1", "4"]);
        assert_eq!(sccs[1], ["2", "3", "7"]);
        assert_eq!(sccs[2], ["5", "6"]);
    }

    #[test]
    fn triangle_is_one_cycle() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "c", "a"]);

        let sccs = tarjan(&graph);
        assert_eq!(sort_components(sccs), vec![vec!["a", "b", "c"]]);

        let cycles = find_cycles(&graph);
        assert_eq!(sort_components(cycles), vec![vec!["a", "b", "c"]]);
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn self_loops_and_singletons() {
        let mut graph: Graph = Graph::new();
        graph.set_edge("a", "a").set_node("b").set_path(["c", "d", "c"]);

        let sccs = sort_components(tarjan(&graph));
        assert_eq!(sccs, vec![vec!["a"], vec!["b"], vec!["c", "d"]]);

        let cycles = sort_components(find_cycles(&graph));
        assert_eq!(cycles, vec![vec!["a"], vec!["c", "d"]]);

        let mut graph: Graph = Graph::new();
        graph.set_path(["x", "y", "z"]);
        assert!(find_cycles(&graph).is_empty());
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn components_begin_with_root() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "c", "a"]).set_edge("c", "d");

        let sccs = tarjan(&graph);
        assert_eq!(sccs.len(), 2);
        assert_eq!(sccs[0], ["d"]);
        assert_eq!(sccs[1][0], "a");
    }

    #[test]
    fn random_sccs_are_consistent_with_reachability() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..10 {
            let mut graph: Graph = Graph::new();
            let n = 30u32;
            graph.set_nodes(0..n);
            for _ in 0..45 {
                graph.set_edge(rng.random_range(0..n), rng.random_range(0..n));
            }

            let reach = |u: Node| {
                let mut seen = graph
                    .depth_first_search([u], DfsOrder::Pre)
                    .collect_vec();
                seen.sort_unstable();
                seen
            };

            let sccs = graph.strongly_connected_components().collect_vec();
            assert_eq!(sccs.iter().map(|c| c.len()).sum::<usize>(), n as usize);

            for comp in &sccs {
                for &u in comp {
                    for &v in comp {
                        assert!(reach(u).binary_search(&v).is_ok());
                    }
                }
            }

            // nodes of different components are not mutually reachable
            for (i, a) in sccs.iter().enumerate() {
                for b in &sccs[i + 1..] {
                    assert!(
                        reach(a[0]).binary_search(&b[0]).is_err()
                            || reach(b[0]).binary_search(&a[0]).is_err()
                    );
                }
            }
        }
    }
}
