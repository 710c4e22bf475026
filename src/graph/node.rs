//! Node slots in the graph arena

use super::edge::EdgeId;

/// Stable handle to a node slot
///
/// Ids are reused after a node is deleted, so an id is only meaningful
/// against the graph that issued it and only until that node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node as stored in the arena
#[derive(Debug, Clone)]
pub(crate) struct NodeSlot<N> {
    /// The node's value, mirrored by the key in the value index
    pub value: N,
    /// Outgoing edges, sorted by (destination value, weight)
    pub outgoing: Vec<EdgeId>,
    /// Incoming edges, unordered
    pub incoming: Vec<EdgeId>,
}

impl<N> NodeSlot<N> {
    pub fn new(value: N) -> Self {
        Self {
            value,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Remove an edge id from the outgoing list, keeping the rest in order
    pub fn unlink_outgoing(&mut self, edge: EdgeId) {
        if let Some(pos) = self.outgoing.iter().position(|&e| e == edge) {
            self.outgoing.remove(pos);
        }
    }

    /// Remove an edge id from the incoming list
    pub fn unlink_incoming(&mut self, edge: EdgeId) {
        if let Some(pos) = self.incoming.iter().position(|&e| e == edge) {
            self.incoming.swap_remove(pos);
        }
    }
}
