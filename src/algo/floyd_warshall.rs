use super::*;

/// All-pairs shortest paths by the Floyd–Warshall algorithm.
///
/// Negative weights are accepted. The distance of a node to itself is `0` unless a self-loop
/// says otherwise; if several edges connect the same ordered pair, the one enumerated last
/// determines the initial distance. Negative cycles are not detected: distances on them are
/// meaningless and [`ShortestPaths::path_to`] may return `None`.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut graph: Graph<(), f64> = Graph::new();
/// graph
///     .set_edge_label("a", "b", Some(4.0))
///     .set_edge_label("a", "c", Some(1.0))
///     .set_edge_label("c", "b", Some(-2.0));
///
/// let all = FloydWarshall::new(&graph)
///     .with_weight(|e| graph.edge_by(e).copied().unwrap_or(1.0))
///     .run()
///     .unwrap();
/// assert_eq!(all["a"].distance_to("b"), Some(-1.0));
/// assert_eq!(all["a"].predecessor_of("b"), Some("c"));
/// ```
pub struct FloydWarshall<'a, G> {
    graph: &'a G,
    costs: EdgeCosts<'a>,
}

impl<'a, G> FloydWarshall<'a, G>
where
    G: EdgeAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
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

    /// Sets the edges leaving a node; the default are its out-edges
    pub fn with_edges<F>(mut self, edges: F) -> Self
    where
        F: Fn(&str) -> Vec<Edge> + 'a,
    {
        self.costs.edges = Some(Box::new(edges));
        self
    }

    /// Computes the shortest paths between all ordered pairs of nodes.
    ///
    /// Only fails with [`GraphError::MissingNode`] if a custom edge function returns an edge
    /// whose far endpoint is not part of the graph.
    #[tracing::instrument(skip_all, fields(nodes = self.graph.number_of_nodes()))]
    pub fn run(&self) -> Result<AllShortestPaths> {
        let graph = self.graph;
        let nodes = graph.vertices().collect_vec();
        let n = nodes.len();

        let mut index = vec![0usize; graph.node_bound()];
        for (i, &u) in nodes.iter().enumerate() {
            index[u as usize] = i;
        }

        // row-major n x n matrices; predecessors are stored as row indices
        let mut distance = vec![f64::INFINITY; n * n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n * n];

        for (i, &u) in nodes.iter().enumerate() {
            distance[i * n + i] = 0.0;
            self.costs.for_each_edge(graph, u, |edge, w| {
                let j = index[w as usize];
                distance[i * n + j] = self.costs.weight(edge);
                predecessor[i * n + j] = Some(i);
                Ok(())
            })?;
        }

        for k in 0..n {
            for i in 0..n {
                let ik = distance[i * n + k];
                if ik == f64::INFINITY {
                    continue;
                }

                for j in 0..n {
                    let candidate = ik + distance[k * n + j];
                    if candidate < distance[i * n + j] {
                        distance[i * n + j] = candidate;
                        predecessor[i * n + j] = predecessor[k * n + j];
                    }
                }
            }
        }

        let results = nodes
            .iter()
            .enumerate()
            .map(|(i, &u)| {
                let entries = nodes
                    .iter()
                    .enumerate()
                    .map(|(j, &w)| {
                        let entry = PathEntry {
                            distance: distance[i * n + j],
                            predecessor: predecessor[i * n + j]
                                .map(|p| graph.name_of(nodes[p]).to_string()),
                        };
                        (graph.name_of(w).to_string(), entry)
                    })
                    .collect();

                let source = graph.name_of(u).to_string();
                (source.clone(), ShortestPaths::new(source, entries))
            })
            .collect();

        Ok(results)
    }
}

/// All-pairs shortest paths with unit weights along out-edges; see [`FloydWarshall`]
pub fn floyd_warshall<G>(graph: &G) -> Result<AllShortestPaths>
where
    G: EdgeAdjacency,
{
    FloydWarshall::new(graph).run()
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn weighted(edges: &[(&str, &str, f64)]) -> Graph<(), f64> {
        let mut graph = Graph::new();
        for &(v, w, weight) in edges {
            graph.set_edge_label(v, w, Some(weight));
        }
        graph
    }

    #[test]
    fn empty_graph() {
        let graph: Graph = Graph::new();
        assert!(floyd_warshall(&graph).unwrap().is_empty());
    }

    #[test]
    fn unit_weights() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "c"]).set_node("x");

        let all = floyd_warshall(&graph).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all["a"].distance_to("a"), Some(0.0));
        assert_eq!(all["a"].predecessor_of("a"), None);
        assert_eq!(all["a"].distance_to("c"), Some(2.0));
        assert_eq!(all["a"].predecessor_of("c"), Some("b"));
        assert_eq!(all["c"].distance_to("a"), Some(f64::INFINITY));
        assert_eq!(all["x"].distance_to("a"), Some(f64::INFINITY));
        assert_eq!(all["a"].path_to("c").unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn negative_weights() {
        let graph = weighted(&[
            ("a", "b", 1.0),
            ("a", "c", -2.0),
            ("b", "d", 3.0),
            ("c", "d", 3.0),
        ]);

        let all = FloydWarshall::new(&graph)
            .with_weight(|e| *graph.edge_by(e).unwrap())
            .run()
            .unwrap();
        assert_eq!(all["a"].distance_to("d"), Some(1.0));
        assert_eq!(all["a"].predecessor_of("d"), Some("c"));
        assert_eq!(all["a"].path_to("d").unwrap(), ["a", "c", "d"]);
        assert_eq!(all["b"].distance_to("d"), Some(3.0));
    }

    #[test]
    fn self_loop_overrides_diagonal() {
        let graph = weighted(&[("a", "a", 5.0), ("a", "b", 1.0)]);

        let all = FloydWarshall::new(&graph)
            .with_weight(|e| *graph.edge_by(e).unwrap())
            .run()
            .unwrap();
        let entry = all["a"].get("a").unwrap();
        assert_eq!(entry.distance, 5.0);
        assert_eq!(entry.predecessor.as_deref(), Some("a"));
        assert_eq!(all["b"].distance_to("b"), Some(0.0));
    }

    #[test]
    fn undirected_with_incident_edges() {
        let mut graph: Graph = Graph::with_options(GraphOptions::default().directed(false));
        graph.set_path(["a", "b", "c"]);

        let all = FloydWarshall::new(&graph)
            .with_edges(|v| {
                graph
                    .node_edges(v)
                    .unwrap_or_default()
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .run()
            .unwrap();
        assert_eq!(all["c"].distance_to("a"), Some(2.0));
        assert_eq!(all["a"].distance_to("c"), Some(2.0));
        assert_eq!(all["c"].predecessor_of("a"), Some("b"));
    }

    #[test]
    fn agrees_with_dijkstra() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        for _ in 0..10 {
            let mut graph: Graph<(), f64> = Graph::new();
            graph.set_nodes(0..25);
            for _ in 0..80 {
                let u = rng.random_range(0..25u32);
                let v = rng.random_range(0..25u32);
                let weight = rng.random_range(0..10) as f64;
                graph.set_edge_label(u, v, Some(weight));
            }

            let weight = |e: &Edge| *graph.edge_by(e).unwrap();
            let expected = DijkstraAll::new(&graph).with_weight(weight).run().unwrap();
            let actual = FloydWarshall::new(&graph).with_weight(weight).run().unwrap();

            for (source, paths) in &expected {
                for (target, entry) in paths.iter() {
                    let distance = actual[source].distance_to(target).unwrap();
                    if source == target {
                        // a self-loop may set the diagonal of the matrix
                        assert!(distance >= 0.0);
                    } else {
                        assert_eq!(distance, entry.distance, "{source} -> {target}");
                    }
                }
            }
        }
    }
}
