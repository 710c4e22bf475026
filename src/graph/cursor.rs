//! Ordered edge cursor
//!
//! Edges are visited in the global order (source, destination, weight),
//! ascending. The order is never materialized: a [`Cursor`] names a node and
//! an offset into that node's outgoing list, and is resolved against the
//! graph each time it is used.
//!
//! # Invalidation
//!
//! Any mutation of the graph other than [`Graph::erase_at`] invalidates
//! every cursor taken before it. A stale cursor is a caller bug: it is still
//! bounds-checked, so it never reads freed data, but the position it
//! denotes afterwards is unspecified.

use super::node::NodeId;
use super::store::Graph;
use std::ops::Bound;

/// A position in the global edge order
///
/// Two cursors are equal when they name the same node and edge offset, or
/// are the same sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// One before the first edge; the end of a reverse walk
    Front,
    /// The `edge`th outgoing edge of `node`
    Edge { node: NodeId, edge: usize },
    /// One past the last edge
    End,
}

impl Cursor {
    /// True for [`Cursor::Front`] and [`Cursor::End`]
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Edge { .. })
    }
}

impl<N: Ord + Clone, E: Ord> Graph<N, E> {
    /// The first edge in global order, or [`Cursor::End`] if there are no edges
    pub fn begin(&self) -> Cursor {
        self.first_edge_in(self.index.values().copied())
    }

    pub fn cbegin(&self) -> Cursor {
        self.begin()
    }

    pub fn end(&self) -> Cursor {
        Cursor::End
    }

    pub fn cend(&self) -> Cursor {
        self.end()
    }

    /// The last edge in global order, or [`Cursor::Front`] if there are no edges
    pub fn rbegin(&self) -> Cursor {
        self.last_edge_in(self.index.values().rev().copied())
    }

    pub fn crbegin(&self) -> Cursor {
        self.rbegin()
    }

    pub fn rend(&self) -> Cursor {
        Cursor::Front
    }

    pub fn crend(&self) -> Cursor {
        self.rend()
    }

    /// Step forward, skipping nodes without outgoing edges
    ///
    /// `End` stays at `End`; `Front` steps onto the first edge.
    pub fn advance(&self, cursor: &Cursor) -> Cursor {
        match *cursor {
            Cursor::End => Cursor::End,
            Cursor::Front => self.begin(),
            Cursor::Edge { node, edge } => {
                let Some(slot) = self.nodes.get(node) else {
                    return Cursor::End;
                };
                if edge + 1 < slot.outgoing.len() {
                    Cursor::Edge {
                        node,
                        edge: edge + 1,
                    }
                } else {
                    self.first_edge_after(&slot.value)
                }
            }
        }
    }

    /// Step backward, skipping nodes without outgoing edges
    ///
    /// `End` steps onto the last edge. Stepping back from the first edge
    /// lands on `Front`, which stays put.
    pub fn retreat(&self, cursor: &Cursor) -> Cursor {
        match *cursor {
            Cursor::Front => Cursor::Front,
            Cursor::End => self.rbegin(),
            Cursor::Edge { node, edge } => {
                let Some(slot) = self.nodes.get(node) else {
                    return Cursor::Front;
                };
                if edge > 0 && edge <= slot.outgoing.len() {
                    Cursor::Edge {
                        node,
                        edge: edge - 1,
                    }
                } else {
                    self.last_edge_before(&slot.value)
                }
            }
        }
    }

    /// The (source, destination, weight) triple under the cursor
    ///
    /// `None` for the sentinels and for stale cursors.
    pub fn get(&self, cursor: &Cursor) -> Option<(&N, &N, &E)> {
        let Cursor::Edge { node, edge } = *cursor else {
            return None;
        };
        let source = self.nodes.get(node)?;
        let slot = self.edges.get(*source.outgoing.get(edge)?)?;
        let target = self.nodes.get(slot.target)?;
        Some((&source.value, &target.value, &slot.weight))
    }

    /// Position of the edge `src -> dst` with this weight, or [`Cursor::End`]
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> Cursor {
        let Some(node) = self.lookup(src) else {
            return Cursor::End;
        };
        match self.search_outgoing(node, dst, weight) {
            Ok(edge) => Cursor::Edge { node, edge },
            Err(_) => Cursor::End,
        }
    }

    /// Remove the edge under the cursor and return the position of the next
    /// edge in global order
    ///
    /// The returned cursor is valid. Sentinels are returned unchanged, and a
    /// cursor that no longer names an edge yields [`Cursor::End`].
    pub fn erase_at(&mut self, cursor: Cursor) -> Cursor {
        let Cursor::Edge { node, edge } = cursor else {
            return cursor;
        };
        let Some(&id) = self.nodes.get(node).and_then(|slot| slot.outgoing.get(edge)) else {
            return Cursor::End;
        };
        self.unlink(id);

        // The outgoing list shifted left, so the same offset now names the
        // next edge of this node, if any.
        let slot = &self.nodes[node];
        if edge < slot.outgoing.len() {
            cursor
        } else {
            self.first_edge_after(&slot.value)
        }
    }

    fn first_edge_in(&self, mut ids: impl Iterator<Item = NodeId>) -> Cursor {
        ids.find(|&id| !self.nodes[id].outgoing.is_empty())
            .map_or(Cursor::End, |node| Cursor::Edge { node, edge: 0 })
    }

    fn last_edge_in(&self, mut ids: impl Iterator<Item = NodeId>) -> Cursor {
        ids.find(|&id| !self.nodes[id].outgoing.is_empty())
            .map_or(Cursor::Front, |node| Cursor::Edge {
                node,
                edge: self.nodes[node].outgoing.len() - 1,
            })
    }

    fn first_edge_after(&self, value: &N) -> Cursor {
        let after = self
            .index
            .range::<N, _>((Bound::Excluded(value), Bound::Unbounded))
            .map(|(_, &id)| id);
        self.first_edge_in(after)
    }

    fn last_edge_before(&self, value: &N) -> Cursor {
        let before = self
            .index
            .range::<N, _>((Bound::Unbounded, Bound::Excluded(value)))
            .rev()
            .map(|(_, &id)| id);
        self.last_edge_in(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(g: &Graph<i32, i32>, c: &Cursor) -> Option<(i32, i32, i32)> {
        g.get(c).map(|(s, d, w)| (*s, *d, *w))
    }

    fn sample() -> Graph<i32, i32> {
        // Node 2 and 5 have no outgoing edges and must be skipped
        let mut g = Graph::from([1, 2, 3, 4, 5]);
        g.insert_edge(&1, &2, 7).unwrap();
        g.insert_edge(&3, &1, 1).unwrap();
        g.insert_edge(&3, &1, 2).unwrap();
        g.insert_edge(&4, &5, 0).unwrap();
        g
    }

    #[test]
    fn empty_graph_begin_is_end() {
        let g: Graph<i32, i32> = Graph::from([1, 2]);
        assert_eq!(g.begin(), g.end());
        assert_eq!(g.rbegin(), g.rend());
        assert!(g.get(&g.begin()).is_none());
    }

    #[test]
    fn advance_skips_nodes_without_edges() {
        let g = sample();
        let mut c = g.begin();
        let mut seen = Vec::new();
        while c != g.end() {
            seen.push(triple(&g, &c).unwrap());
            c = g.advance(&c);
        }
        assert_eq!(seen, vec![(1, 2, 7), (3, 1, 1), (3, 1, 2), (4, 5, 0)]);
        assert_eq!(g.advance(&g.end()), g.end());
    }

    #[test]
    fn retreat_skips_nodes_without_edges() {
        let g = sample();
        let mut c = g.rbegin();
        let mut seen = Vec::new();
        while c != g.rend() {
            seen.push(triple(&g, &c).unwrap());
            c = g.retreat(&c);
        }
        assert_eq!(seen, vec![(4, 5, 0), (3, 1, 2), (3, 1, 1), (1, 2, 7)]);
    }

    #[test]
    fn retreat_from_end_is_last_edge_and_advance_from_front_is_first() {
        let g = sample();
        assert_eq!(g.retreat(&g.end()), g.rbegin());
        assert_eq!(g.advance(&g.rend()), g.begin());
        assert_eq!(g.retreat(&g.begin()), g.rend());
    }

    #[test]
    fn const_variants_match() {
        let g = sample();
        assert_eq!(g.cbegin(), g.begin());
        assert_eq!(g.cend(), g.end());
        assert_eq!(g.crbegin(), g.rbegin());
        assert_eq!(g.crend(), g.rend());
    }

    #[test]
    fn find_missing_is_end() {
        let g = sample();
        assert_eq!(g.find(&3, &1, &9), g.end());
        assert_eq!(g.find(&42, &1, &1), g.end());
        assert_eq!(g.find(&3, &42, &1), g.end());
    }

    #[test]
    fn erase_at_last_edge_of_node_moves_to_next_node() {
        let mut g = sample();
        let c = g.find(&3, &1, &2);
        let next = g.erase_at(c);
        assert_eq!(triple(&g, &next), Some((4, 5, 0)));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn erase_at_sentinels_is_noop() {
        let mut g = sample();
        assert_eq!(g.erase_at(Cursor::End), Cursor::End);
        assert_eq!(g.erase_at(Cursor::Front), Cursor::Front);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn erase_every_edge_while_walking() {
        let mut g = sample();
        let mut c = g.begin();
        while c != g.end() {
            c = g.erase_at(c);
        }
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 5);
    }

    #[test]
    fn stale_cursor_is_bounds_checked() {
        let mut g = sample();
        let c = g.find(&4, &5, &0);
        g.delete_node(&4);
        assert!(g.get(&c).is_none());
        assert!(!c.is_sentinel());
    }

    #[test]
    fn reverse_walk_stops_at_a_sentinel() {
        let g = sample();
        assert!(!g.begin().is_sentinel());
        assert!(g.end().is_sentinel());
        assert!(g.rend().is_sentinel());

        let mut c = g.rbegin();
        let mut steps = 0;
        while !c.is_sentinel() {
            steps += 1;
            c = g.retreat(&c);
        }
        assert_eq!(steps, g.edge_count());
        assert_eq!(c, g.rend());
    }
}
