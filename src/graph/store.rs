//! Graph: the node and edge store
//!
//! Nodes and edges live in index-stable arenas owned by the graph. A
//! `BTreeMap` from node value to [`NodeId`] gives the ascending node order,
//! and each node keeps its outgoing edges sorted by (destination value,
//! weight). Together these define the global edge order walked by
//! [`Cursor`](super::Cursor).

use super::arena::Arena;
use super::edge::{EdgeId, EdgeSlot};
use super::error::{GraphError, GraphResult, Operation};
use super::node::{NodeId, NodeSlot};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A directed, weighted multigraph
///
/// Node values are unique. Any number of edges may connect the same ordered
/// pair of nodes as long as their weights differ. Self-loops are allowed.
///
/// Cloning yields a fully independent copy. `std::mem::take` moves the
/// contents out and leaves an empty graph behind.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    /// Node value -> slot, in ascending value order
    pub(super) index: BTreeMap<N, NodeId>,
    pub(super) nodes: Arena<NodeId, NodeSlot<N>>,
    pub(super) edges: Arena<EdgeId, EdgeSlot<E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            index: BTreeMap::new(),
            nodes: Arena::default(),
            edges: Arena::default(),
        }
    }
}

impl<N: Ord + Clone, E: Ord> Graph<N, E> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph holding the given node values and no edges
    ///
    /// Duplicate values collapse to a single node.
    pub fn from_nodes(values: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for value in values {
            graph.insert_node(value);
        }
        graph
    }

    /// Create a graph from (source, destination, weight) triples
    ///
    /// Every referenced node value is inserted first, then every edge.
    /// Duplicate triples are dropped.
    pub fn from_edges(triples: impl IntoIterator<Item = (N, N, E)>) -> Self {
        let triples: Vec<(N, N, E)> = triples.into_iter().collect();
        let mut graph = Self::new();
        for (src, dst, _) in &triples {
            graph.insert_node(src.clone());
            graph.insert_node(dst.clone());
        }
        for (src, dst, weight) in triples {
            if let (Some(s), Some(d)) = (graph.lookup(&src), graph.lookup(&dst)) {
                graph.link(s, d, weight);
            }
        }
        graph
    }

    /// Insert a node. Returns false if the value is already a node.
    pub fn insert_node(&mut self, value: N) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        let id = self.nodes.insert(NodeSlot::new(value.clone()));
        self.index.insert(value, id);
        true
    }

    /// Insert the edge `src -> dst` with the given weight
    ///
    /// Returns false if the identical edge already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    /// The graph is unchanged in that case.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> GraphResult<bool, N> {
        let s = self.require(src, Operation::InsertEdge)?;
        let d = self.require(dst, Operation::InsertEdge)?;
        let inserted = self.link(s, d, weight);
        trace!(inserted, "insert_edge");
        Ok(inserted)
    }

    /// Delete a node and every edge into or out of it
    ///
    /// Returns false if the value is not a node.
    pub fn delete_node(&mut self, value: &N) -> bool {
        let Some(id) = self.lookup(value) else {
            return false;
        };
        let removed = self.detach(id);
        debug!(removed_edges = removed.len(), "deleted node");
        true
    }

    /// Give the node `old` the value `new`, keeping all of its edges
    ///
    /// Returns false, leaving the graph unchanged, if `new` already names a
    /// different node. Replacing a value with itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `old` is absent.
    pub fn replace(&mut self, old: &N, new: N) -> GraphResult<bool, N> {
        let id = self.require(old, Operation::Replace)?;
        if *old == new {
            return Ok(true);
        }
        if self.index.contains_key(&new) {
            return Ok(false);
        }

        self.index.remove(old);
        self.index.insert(new.clone(), id);
        self.nodes[id].value = new;

        // Edges into the renamed node may now sort differently in their
        // source's outgoing list. Self-loops are covered here too.
        let mut sources: Vec<NodeId> = self.nodes[id]
            .incoming
            .iter()
            .map(|&e| self.edges[e].source)
            .collect();
        sources.sort_unstable();
        sources.dedup();
        for &source in &sources {
            self.resort_outgoing(source);
        }

        debug!(resorted = sources.len(), "replaced node value");
        Ok(true)
    }

    /// Move every edge of `old` onto `new`, then delete `old`
    ///
    /// Self-loops on `old` become self-loops on `new`. Redirected edges that
    /// duplicate an existing edge collapse into one. Merging a node into
    /// itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node is absent.
    pub fn merge_replace(&mut self, old: &N, new: &N) -> GraphResult<(), N> {
        let o = self.require(old, Operation::MergeReplace)?;
        let n = self.require(new, Operation::MergeReplace)?;
        if o == n {
            return Ok(());
        }

        let removed = self.detach(o);
        let redirected = removed.len();
        let mut collapsed = 0;
        for edge in removed {
            let source = if edge.source == o { n } else { edge.source };
            let target = if edge.target == o { n } else { edge.target };
            if !self.link(source, target, edge.weight) {
                collapsed += 1;
            }
        }

        debug!(redirected, collapsed, "merged node");
        Ok(())
    }

    /// Remove every node and edge
    pub fn clear(&mut self) {
        debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "cleared graph"
        );
        self.index.clear();
        self.nodes.clear();
        self.edges.clear();
    }

    pub fn is_node(&self, value: &N) -> bool {
        self.index.contains_key(value)
    }

    /// Whether at least one edge `src -> dst` exists
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn is_connected(&self, src: &N, dst: &N) -> GraphResult<bool, N> {
        let s = self.require(src, Operation::IsConnected)?;
        let d = self.require(dst, Operation::IsConnected)?;
        Ok(!self.edges_between(s, d).is_empty())
    }

    /// Whether the edge `src -> dst` with exactly this weight exists
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn is_connected_weight(&self, src: &N, dst: &N, weight: &E) -> GraphResult<bool, N> {
        let s = self.require(src, Operation::IsConnectedWeight)?;
        self.require(dst, Operation::IsConnectedWeight)?;
        Ok(self.search_outgoing(s, dst, weight).is_ok())
    }

    /// All node values in ascending order
    pub fn get_nodes(&self) -> Vec<N> {
        self.index.keys().cloned().collect()
    }

    /// Node values in ascending order, borrowed
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.index.keys()
    }

    /// Distinct destinations of edges leaving `src`, in ascending order
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `src` is absent.
    pub fn get_connected(&self, src: &N) -> GraphResult<Vec<N>, N> {
        let s = self.require(src, Operation::GetConnected)?;
        let mut connected: Vec<N> = Vec::new();
        for &e in &self.nodes[s].outgoing {
            let target = &self.nodes[self.edges[e].target].value;
            if connected.last() != Some(target) {
                connected.push(target.clone());
            }
        }
        Ok(connected)
    }

    /// Weights of every edge `src -> dst`, in ascending order
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn get_weights(&self, src: &N, dst: &N) -> GraphResult<Vec<E>, N>
    where
        E: Clone,
    {
        let s = self.require(src, Operation::GetWeights)?;
        let d = self.require(dst, Operation::GetWeights)?;
        Ok(self
            .edges_between(s, d)
            .iter()
            .map(|&e| self.edges[e].weight.clone())
            .collect())
    }

    /// Remove the edge `src -> dst` with this weight
    ///
    /// Returns false if no such edge exists, including when either endpoint
    /// is not a node.
    pub fn erase(&mut self, src: &N, dst: &N, weight: &E) -> bool {
        let Some(s) = self.lookup(src) else {
            return false;
        };
        match self.search_outgoing(s, dst, weight) {
            Ok(pos) => {
                let edge = self.nodes[s].outgoing[pos];
                self.unlink(edge);
                trace!("erased edge");
                true
            }
            Err(_) => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no nodes, and therefore no edges
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(super) fn lookup(&self, value: &N) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    fn require(&self, value: &N, op: Operation) -> GraphResult<NodeId, N> {
        self.lookup(value)
            .ok_or_else(|| GraphError::node_not_found(op, value.clone()))
    }

    /// Sort key of an edge within its source's outgoing list
    fn edge_key(&self, edge: EdgeId) -> (&N, &E) {
        let slot = &self.edges[edge];
        (&self.nodes[slot.target].value, &slot.weight)
    }

    /// Binary search `source`'s outgoing list for (dst, weight)
    pub(super) fn search_outgoing(&self, source: NodeId, dst: &N, weight: &E) -> Result<usize, usize> {
        self.nodes[source]
            .outgoing
            .binary_search_by(|&e| self.edge_key(e).cmp(&(dst, weight)))
    }

    /// The contiguous run of `source`'s outgoing edges that end at `target`
    fn edges_between(&self, source: NodeId, target: NodeId) -> &[EdgeId] {
        let outgoing = &self.nodes[source].outgoing;
        let dst = &self.nodes[target].value;
        let start = outgoing.partition_point(|&e| self.edge_key(e).0 < dst);
        let end = outgoing.partition_point(|&e| self.edge_key(e).0 <= dst);
        &outgoing[start..end]
    }

    /// Insert an edge between two present nodes. Returns false on a duplicate.
    fn link(&mut self, source: NodeId, target: NodeId, weight: E) -> bool {
        let pos = match self.search_outgoing(source, &self.nodes[target].value, &weight) {
            Ok(_) => return false,
            Err(pos) => pos,
        };
        let edge = self.edges.insert(EdgeSlot::new(source, target, weight));
        self.nodes[source].outgoing.insert(pos, edge);
        self.nodes[target].incoming.push(edge);
        true
    }

    /// Remove a single edge from the arena and both endpoint lists
    pub(super) fn unlink(&mut self, edge: EdgeId) -> Option<EdgeSlot<E>> {
        let slot = self.edges.remove(edge)?;
        self.nodes[slot.source].unlink_outgoing(edge);
        self.nodes[slot.target].unlink_incoming(edge);
        Some(slot)
    }

    /// Remove a node and return every edge that touched it
    ///
    /// The returned edges are already unlinked from their other endpoint.
    /// Each self-loop is returned once.
    fn detach(&mut self, id: NodeId) -> Vec<EdgeSlot<E>> {
        let Some(slot) = self.nodes.remove(id) else {
            return Vec::new();
        };
        self.index.remove(&slot.value);

        let mut removed = Vec::with_capacity(slot.outgoing.len() + slot.incoming.len());
        for edge in slot.outgoing {
            if let Some(e) = self.edges.remove(edge) {
                if !e.is_self_loop() {
                    self.nodes[e.target].unlink_incoming(edge);
                }
                removed.push(e);
            }
        }
        for edge in slot.incoming {
            // Self-loops were already taken out with the outgoing list
            if let Some(e) = self.edges.remove(edge) {
                self.nodes[e.source].unlink_outgoing(edge);
                removed.push(e);
            }
        }
        removed
    }

    fn resort_outgoing(&mut self, source: NodeId) {
        let mut outgoing = std::mem::take(&mut self.nodes[source].outgoing);
        outgoing.sort_by(|&a, &b| self.edge_key(a).cmp(&self.edge_key(b)));
        self.nodes[source].outgoing = outgoing;
    }
}

impl<N: Ord + Clone, E: Ord, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(values: [N; K]) -> Self {
        Self::from_nodes(values)
    }
}

/// Two graphs are equal when they hold the same node values and the same
/// edges, compared as (source, destination, weight) triples.
impl<N: Ord + Clone, E: Ord> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.nodes().eq(other.nodes())
            && self.iter().eq(other.iter())
    }
}

impl<N: Ord + Clone, E: Ord> Eq for Graph<N, E> {}

/// Human-readable dump: each node, then one line per outgoing edge
impl<N, E> std::fmt::Display for Graph<N, E>
where
    N: std::fmt::Display,
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (value, &id) in &self.index {
            writeln!(f, "{} (", value)?;
            for &e in &self.nodes[id].outgoing {
                let edge = &self.edges[e];
                writeln!(f, "  {} | {}", self.nodes[edge.target].value, edge.weight)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
