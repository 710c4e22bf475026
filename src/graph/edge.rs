//! Edge slots in the graph arena

use super::node::NodeId;

/// Stable handle to an edge slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed, weighted edge as stored in the arena
///
/// The edge is owned by the arena alone. The source node's outgoing list and
/// the destination node's incoming list only hold its id.
#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: E,
}

impl<E> EdgeSlot<E> {
    pub fn new(source: NodeId, target: NodeId, weight: E) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_detection() {
        let a = NodeId::new(0);
        let b = NodeId::new(1);
        assert!(EdgeSlot::new(a, a, 1).is_self_loop());
        assert!(!EdgeSlot::new(a, b, 1).is_self_loop());
    }
}
