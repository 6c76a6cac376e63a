use super::*;

/// Returns the ids of all nodes such that for every edge `(v, w)`, `v` precedes `w`.
///
/// The order is built by walking backwards along predecessors, starting from every sink.
/// Fails with [`GraphError::Cycle`] if the graph contains a cycle (self-loops included).
///
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut graph: Graph = Graph::new();
/// graph.set_path(["b", "c", "a"]);
/// assert_eq!(topsort(&graph).unwrap(), ["b", "c", "a"]);
///
/// graph.set_edge("a", "b");
/// assert!(matches!(topsort(&graph), Err(GraphError::Cycle)));
/// ```
#[tracing::instrument(skip_all, fields(nodes = graph.number_of_nodes()))]
pub fn topsort<G>(graph: &G) -> Result<Vec<String>>
where
    G: AdjacencyList,
{
    let mut visited = NodeBitSet::new(graph.node_bound() as NumNodes);
    let mut on_path = NodeBitSet::new(graph.node_bound() as NumNodes);
    let mut order = Vec::with_capacity(graph.len());
    let mut call_stack = Vec::with_capacity(32);

    for sink in graph.sink_vertices() {
        if visited.set_bit(sink) {
            continue;
        }
        on_path.set_bit(sink);
        call_stack.push((sink, graph.predecessors_of(sink)));

        while let Some((u, predecessors)) = call_stack.last_mut() {
            let u = *u;
            match predecessors.next() {
                Some(v) if on_path.get_bit(v) => {
                    tracing::debug!(node = graph.name_of(v), "cycle detected");
                    return Err(GraphError::Cycle);
                }
                Some(v) if !visited.set_bit(v) => {
                    on_path.set_bit(v);
                    call_stack.push((v, graph.predecessors_of(v)));
                }
                Some(_) => {}
                None => {
                    call_stack.pop();
                    on_path.clear_bit(u);
                    order.push(graph.name_of(u).to_string());
                }
            }
        }
    }

    if order.len() != graph.len() {
        tracing::debug!(
            sorted = order.len(),
            nodes = graph.len(),
            "nodes unreachable from any sink"
        );
        return Err(GraphError::Cycle);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn assert_topological<N, E, L>(graph: &Graph<N, E, L>, order: &[String]) {
        assert_eq!(order.len(), graph.node_count());
        let position = |v: &str| order.iter().position(|u| u == v).unwrap();
        for edge in graph.edges() {
            assert!(position(edge.v()) < position(edge.w()), "{edge} violated");
        }
    }

    #[test]
    fn empty_graph() {
        let graph: Graph = Graph::new();
        assert!(topsort(&graph).unwrap().is_empty());
    }

    #[test]
    fn diamond() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "d"]).set_path(["a", "c", "d"]);

        let order = topsort(&graph).unwrap();
        assert_eq!(order.first().map(String::as_str), Some("a"));
        assert_eq!(order.last().map(String::as_str), Some("d"));
        assert_topological(&graph, &order);
    }

    #[test]
    fn disconnected_parts() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b"]).set_path(["c", "d"]).set_node("e");
        let order = topsort(&graph).unwrap();
        assert_topological(&graph, &order);
    }

    #[test]
    fn cycles_fail() {
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "c", "a"]).set_edge("c", "d");
        assert!(matches!(topsort(&graph), Err(GraphError::Cycle)));

        // no sink at all
        let mut graph: Graph = Graph::new();
        graph.set_path(["a", "b", "a"]);
        assert!(matches!(topsort(&graph), Err(GraphError::Cycle)));

        let mut graph: Graph = Graph::new();
        graph.set_edge("a", "a");
        assert!(matches!(topsort(&graph), Err(GraphError::Cycle)));

        let mut graph: Graph = Graph::new();
        graph.set_edge("a", "a").set_edge("a", "b");
        assert!(matches!(topsort(&graph), Err(GraphError::Cycle)));
    }

    #[test]
    fn random_dags() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..20 {
            let mut graph: Graph = Graph::new();
            let n = 40u32;
            graph.set_nodes((0..n).rev());
            for _ in 0..80 {
                let u = rng.random_range(0..n - 1);
                let v = rng.random_range(u + 1..n);
                graph.set_edge(u, v);
            }

            let order = topsort(&graph).unwrap();
            assert_topological(&graph, &order);
        }
    }
}
