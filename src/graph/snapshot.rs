//! Serde form of a graph
//!
//! A snapshot lists the node values and the edges as
//! `[source, destination, weight]` triples:
//!
//! ```json
//! { "nodes": ["a", "b"], "edges": [["a", "b", 3]] }
//! ```

use super::store::Graph;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when rebuilding a graph from a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("edge {index} references a {endpoint} missing from the node list")]
    DanglingEdge { index: usize, endpoint: Endpoint },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which end of a snapshot edge names an unknown node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Owned node and edge lists of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<N, E> {
    pub nodes: Vec<N>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<(N, N, E)>,
}

#[derive(Serialize)]
struct SnapshotRef<'a, N, E> {
    nodes: Vec<&'a N>,
    edges: Vec<(&'a N, &'a N, &'a E)>,
}

impl<N: Ord + Clone, E: Ord> Graph<N, E> {
    /// Copy the graph's nodes and edges out, both in ascending order
    pub fn to_snapshot(&self) -> GraphSnapshot<N, E>
    where
        E: Clone,
    {
        GraphSnapshot {
            nodes: self.get_nodes(),
            edges: self
                .iter()
                .map(|(s, d, w)| (s.clone(), d.clone(), w.clone()))
                .collect(),
        }
    }

    /// Build a graph from a snapshot
    ///
    /// Duplicate nodes and edges collapse.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::DanglingEdge`] if an edge names a node that
    /// is not in the node list. The error carries the edge's position and
    /// the end that is missing.
    pub fn from_snapshot(snapshot: GraphSnapshot<N, E>) -> Result<Self, SnapshotError> {
        let mut graph = Self::from_nodes(snapshot.nodes);
        for (index, (src, dst, weight)) in snapshot.edges.into_iter().enumerate() {
            if let Err(err) = graph.insert_edge(&src, &dst, weight) {
                let endpoint = if err.node() == &src {
                    Endpoint::Source
                } else {
                    Endpoint::Destination
                };
                return Err(SnapshotError::DanglingEdge { index, endpoint });
            }
        }
        Ok(graph)
    }

    /// Parse a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, SnapshotError>
    where
        N: DeserializeOwned,
        E: DeserializeOwned,
    {
        let snapshot: GraphSnapshot<N, E> = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Render the graph as a pretty-printed JSON snapshot
    pub fn to_json(&self) -> Result<String, SnapshotError>
    where
        N: Serialize,
        E: Serialize,
    {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<N, E> Serialize for Graph<N, E>
where
    N: Ord + Clone + Serialize,
    E: Ord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnapshotRef {
            nodes: self.nodes().collect(),
            edges: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, N, E> Deserialize<'de> for Graph<N, E>
where
    N: Ord + Clone + Deserialize<'de>,
    E: Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = GraphSnapshot::<N, E>::deserialize(deserializer)?;
        Self::from_snapshot(snapshot).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_nodes_and_ordered_edges() {
        let mut g: Graph<String, i64> = Graph::from_nodes(["b".to_string(), "a".to_string()]);
        g.insert_edge(&"b".to_string(), &"a".to_string(), 1).unwrap();
        g.insert_edge(&"a".to_string(), &"b".to_string(), 2).unwrap();

        let value = serde_json::to_value(&g).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": ["a", "b"],
                "edges": [["a", "b", 2], ["b", "a", 1]]
            })
        );
    }

    #[test]
    fn deserializes_fixture() {
        let fixture = json!({
            "nodes": ["hello", "how", "are"],
            "edges": [["hello", "how", 5], ["hello", "are", 8], ["hello", "are", 2]]
        });
        let g: Graph<String, i64> = serde_json::from_value(fixture).unwrap();

        assert_eq!(g.node_count(), 3);
        assert_eq!(
            g.get_weights(&"hello".to_string(), &"are".to_string()).unwrap(),
            vec![2, 8]
        );
    }

    #[test]
    fn edges_default_to_empty() {
        let g: Graph<i32, i32> = serde_json::from_value(json!({ "nodes": [3, 1, 3] })).unwrap();
        assert_eq!(g.get_nodes(), vec![1, 3]);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let result = Graph::<i32, i32>::from_json(r#"{ "nodes": [1], "edges": [[1, 1, 0], [1, 2, 0]] }"#);
        assert!(matches!(
            result,
            Err(SnapshotError::DanglingEdge {
                index: 1,
                endpoint: Endpoint::Destination
            })
        ));
    }

    #[test]
    fn dangling_source_is_named() {
        let err = Graph::<i32, i32>::from_json(r#"{ "nodes": [1], "edges": [[7, 1, 0]] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::DanglingEdge {
                index: 0,
                endpoint: Endpoint::Source
            }
        ));
        assert_eq!(
            err.to_string(),
            "edge 0 references a source missing from the node list"
        );
    }

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
    struct Label(String);

    #[test]
    fn node_types_without_default_deserialize() {
        let g = Graph::<Label, u8>::from_json(r#"{ "nodes": ["x"] }"#).unwrap();
        assert!(g.is_node(&Label("x".to_string())));

        let snapshot: GraphSnapshot<Label, Label> =
            serde_json::from_value(json!({ "nodes": ["x"], "edges": [["x", "x", "w"]] })).unwrap();
        let rebuilt = Graph::from_snapshot(snapshot).unwrap();
        assert_eq!(rebuilt.edge_count(), 1);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let result = Graph::<i32, i32>::from_json("{ nodes: ");
        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn snapshot_rebuilds_an_equal_graph() {
        let g: Graph<i32, i32> = Graph::from_edges([(1, 2, 3), (2, 2, 1), (4, 1, 0)]);
        let rebuilt = Graph::from_snapshot(g.to_snapshot()).unwrap();
        assert_eq!(rebuilt, g);
    }
}
