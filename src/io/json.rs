/*!
# JSON Records

[`write`] converts a graph into a [`GraphRecord`] that serializes to the following shape:

```json
{
  "options": { "directed": true, "multigraph": false, "compound": true },
  "nodes": [ { "v": "a", "value": "label", "parent": "p" }, { "v": "p" } ],
  "edges": [ { "v": "a", "w": "p", "name": "n", "value": 3 } ],
  "value": "graph label"
}
```

Absent labels, parents and names are omitted. [`read`] rebuilds an equivalent graph by replaying
the record: graph label first, then every node (and its parent), then every edge.
*/

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{error::*, prelude::*};

/// Serializable snapshot of a whole graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord<N, E, L> {
    #[serde(default)]
    pub options: GraphOptions,
    #[serde(default = "Vec::new")]
    pub nodes: Vec<NodeRecord<N>>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeRecord<E>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<L>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord<N> {
    pub v: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<N>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<E> {
    pub v: String,
    pub w: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<E>,
}

/// Captures options, labels, hierarchy and edges of `graph`
pub fn write<N, E, L>(graph: &Graph<N, E, L>) -> GraphRecord<N, E, L>
where
    N: Clone,
    E: Clone,
    L: Clone,
{
    let nodes = graph
        .nodes()
        .map(|v| NodeRecord {
            v: v.to_string(),
            value: graph.node(v).cloned(),
            parent: graph.parent(v).map(str::to_string),
        })
        .collect();

    let edges = graph
        .edges()
        .map(|edge| EdgeRecord {
            v: edge.v().to_string(),
            w: edge.w().to_string(),
            name: edge.name().map(str::to_string),
            value: graph.edge_by(edge).cloned(),
        })
        .collect();

    GraphRecord {
        options: graph.options(),
        nodes,
        edges,
        value: graph.graph_label().cloned(),
    }
}

/// Rebuilds a graph from a record.
///
/// # Errors
/// Fails if the record is inconsistent with its own options: a parent in a non-compound graph
/// ([`GraphError::NotCompound`]), a cyclic hierarchy ([`GraphError::CompoundCycle`]) or a named
/// edge in a non-multigraph ([`GraphError::MultiEdgeUnsupported`]).
#[tracing::instrument(skip_all, fields(nodes = record.nodes.len(), edges = record.edges.len()))]
pub fn read<N, E, L>(record: GraphRecord<N, E, L>) -> Result<Graph<N, E, L>>
where
    N: Clone,
    E: Clone,
{
    let mut graph = Graph::with_options(record.options);
    if let Some(value) = record.value {
        graph.set_graph_label(value);
    }

    for node in record.nodes {
        graph.set_node_label(&node.v, node.value);
        if let Some(parent) = node.parent {
            graph.set_parent(&node.v, &parent)?;
        }
    }

    for edge in record.edges {
        let descriptor = match &edge.name {
            Some(name) => Edge::named(&edge.v, &edge.w, name),
            None => Edge::new(&edge.v, &edge.w),
        };
        graph.set_edge_by_label(&descriptor, edge.value)?;
    }

    Ok(graph)
}

/// Serializes `graph` into a compact JSON string
pub fn to_json_string<N, E, L>(graph: &Graph<N, E, L>) -> Result<String>
where
    N: Clone + Serialize,
    E: Clone + Serialize,
    L: Clone + Serialize,
{
    Ok(serde_json::to_string(&write(graph))?)
}

/// Parses a graph from a JSON string produced by [`to_json_string`] (or any compatible record)
pub fn from_json_str<N, E, L>(json: &str) -> Result<Graph<N, E, L>>
where
    N: Clone + DeserializeOwned,
    E: Clone + DeserializeOwned,
    L: DeserializeOwned,
{
    read(serde_json::from_str(json)?)
}
