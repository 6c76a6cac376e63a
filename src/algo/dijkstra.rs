/*!
Single-source shortest paths with non-negative edge weights.

[`Dijkstra`] and [`DijkstraAll`] follow the setter pattern: both start with unit weights along
out-edges, and the weight function (`with_weight`) or the edge enumeration (`with_edges`) can be
replaced before calling `run`. Undirected graphs typically want `with_edges` to return all edges
incident to a node.
*/

use super::*;

/// Dijkstra's algorithm from a single source.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut graph: Graph<(), f64> = Graph::new();
/// graph
///     .set_edge_label("a", "b", Some(1.0))
///     .set_edge_label("b", "c", Some(2.0))
///     .set_edge_label("a", "c", Some(4.0));
///
/// let paths = Dijkstra::new(&graph, "a")
///     .with_weight(|e| graph.edge_by(e).copied().unwrap_or(1.0))
///     .run()
///     .unwrap();
/// assert_eq!(paths.distance_to("c"), Some(3.0));
/// assert_eq!(paths.path_to("c").unwrap(), ["a", "b", "c"]);
/// ```
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    source: String,
    costs: EdgeCosts<'a>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: EdgeAdjacency,
{
    pub fn new(graph: &'a G, source: impl NodeId) -> Self {
        Self {
            graph,
            source: source.node_id().into_owned(),
            costs: EdgeCosts::default(),
        }
    }

    /// Sets the length of an edge; the default is `1` for every edge
    pub fn with_weight<F>(mut self, weight: F) -> Self
    where
        F: Fn(&Edge) -> f64 + 'a,
    {
        self.costs.weight = Some(Box::new(weight));
        self
    }

    /// Sets the edges relaxed when leaving a node; the default are its out-edges
    pub fn with_edges<F>(mut self, edges: F) -> Self
    where
        F: Fn(&str) -> Vec<Edge> + 'a,
    {
        self.costs.edges = Some(Box::new(edges));
        self
    }

    /// Computes distances and predecessors of all nodes.
    ///
    /// # Errors
    /// - [`GraphError::MissingNode`] if the source is not part of the graph,
    /// - [`GraphError::NegativeWeight`] as soon as a relaxed edge has negative weight.
    #[tracing::instrument(skip_all, fields(source = %self.source))]
    pub fn run(&self) -> Result<ShortestPaths> {
        let source = self.graph.handle_of(&self.source).ok_or_else(|| {
            tracing::debug!("source not in graph");
            GraphError::MissingNode(self.source.clone())
        })?;
        single_source(self.graph, source, &self.costs)
    }
}

/// Dijkstra's algorithm from every node of the graph
pub struct DijkstraAll<'a, G> {
    graph: &'a G,
    costs: EdgeCosts<'a>,
}

impl<'a, G> DijkstraAll<'a, G>
where
    G: EdgeAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            costs: EdgeCosts::default(),
        }
    }

    /// See [`Dijkstra::with_weight`]
    pub fn with_weight<F>(mut self, weight: F) -> Self
    where
        F: Fn(&Edge) -> f64 + 'a,
    {
        self.costs.weight = Some(Box::new(weight));
        self
    }

    /// See [`Dijkstra::with_edges`]
    pub fn with_edges<F>(mut self, edges: F) -> Self
    where
        F: Fn(&str) -> Vec<Edge> + 'a,
    {
        self.costs.edges = Some(Box::new(edges));
        self
    }

    /// Runs one search per node; fails on the first negative weight encountered
    #[tracing::instrument(skip_all, fields(nodes = self.graph.number_of_nodes()))]
    pub fn run(&self) -> Result<AllShortestPaths> {
        self.graph
            .vertices()
            .map(|u| {
                let paths = single_source(self.graph, u, &self.costs)?;
                Ok((self.graph.name_of(u).to_string(), paths))
            })
            .collect()
    }
}

/// Shortest paths from `source` with unit weights along out-edges; see [`Dijkstra`]
pub fn dijkstra<G>(graph: &G, source: impl NodeId) -> Result<ShortestPaths>
where
    G: EdgeAdjacency,
{
    Dijkstra::new(graph, source).run()
}

/// Shortest paths between all pairs with unit weights along out-edges; see [`DijkstraAll`]
pub fn dijkstra_all<G>(graph: &G) -> Result<AllShortestPaths>
where
    G: EdgeAdjacency,
{
    DijkstraAll::new(graph).run()
}

fn single_source<G>(graph: &G, source: Node, costs: &EdgeCosts<'_>) -> Result<ShortestPaths>
where
    G: EdgeAdjacency,
{
    let bound = graph.node_bound();
    let mut distances = vec![f64::INFINITY; bound];
    let mut predecessors = vec![INVALID_NODE; bound];
    let mut heap = IndexedMinHeap::with_bound(bound);

    distances[source as usize] = 0.0;
    for u in graph.vertices() {
        heap.push(u, distances[u as usize]);
    }

    while let Some((u, distance)) = heap.pop_min() {
        // everything still queued is unreachable
        if distance == f64::INFINITY {
            break;
        }

        costs.for_each_edge(graph, u, |edge, w| {
            let weight = costs.weight(edge);
            if weight < 0.0 {
                tracing::debug!(edge = %edge, weight, "negative edge weight");
                return Err(GraphError::NegativeWeight {
                    edge: edge.clone(),
                    weight,
                });
            }

            let candidate = distance + weight;
            if candidate < distances[w as usize] {
                distances[w as usize] = candidate;
                predecessors[w as usize] = u;
                heap.decrease(w, candidate);
            }
            Ok(())
        })?;
    }

    let entries = graph
        .vertices()
        .map(|u| {
            let distance = distances[u as usize];
            let predecessor = predecessors[u as usize];
            let entry = if distance == f64::INFINITY {
                PathEntry::unreachable()
            } else {
                PathEntry {
                    distance,
                    predecessor: (predecessor != INVALID_NODE)
                        .then(|| graph.name_of(predecessor).to_string()),
                }
            };
            (graph.name_of(u).to_string(), entry)
        })
        .collect();

    Ok(ShortestPaths::new(graph.name_of(source).to_string(), entries))
}
