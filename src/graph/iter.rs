//! Borrowing iterator over the global edge order

use super::cursor::Cursor;
use super::store::Graph;
use std::iter::FusedIterator;

/// Iterator over `(source, destination, weight)` in global edge order
///
/// Created by [`Graph::iter`]. Iterating from the back walks the same order
/// in reverse.
#[derive(Debug, Clone)]
pub struct Iter<'a, N, E> {
    graph: &'a Graph<N, E>,
    front: Cursor,
    back: Cursor,
    remaining: usize,
}

impl<N: Ord + Clone, E: Ord> Graph<N, E> {
    pub fn iter(&self) -> Iter<'_, N, E> {
        Iter {
            graph: self,
            front: self.begin(),
            back: self.rbegin(),
            remaining: self.edge_count(),
        }
    }
}

impl<'a, N: Ord + Clone, E: Ord> Iterator for Iter<'a, N, E> {
    type Item = (&'a N, &'a N, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.graph.get(&self.front)?;
        self.front = self.graph.advance(&self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Ord + Clone, E: Ord> DoubleEndedIterator for Iter<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.graph.get(&self.back)?;
        self.back = self.graph.retreat(&self.back);
        self.remaining -= 1;
        Some(item)
    }
}

impl<N: Ord + Clone, E: Ord> ExactSizeIterator for Iter<'_, N, E> {}

impl<N: Ord + Clone, E: Ord> FusedIterator for Iter<'_, N, E> {}

impl<'a, N: Ord + Clone, E: Ord> IntoIterator for &'a Graph<N, E> {
    type Item = (&'a N, &'a N, &'a E);
    type IntoIter = Iter<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned<'a>(it: impl Iterator<Item = (&'a i32, &'a i32, &'a i32)>) -> Vec<(i32, i32, i32)> {
        it.map(|(s, d, w)| (*s, *d, *w)).collect()
    }

    #[test]
    fn meets_in_the_middle() {
        let g: Graph<i32, i32> = Graph::from_edges([(1, 2, 1), (1, 2, 2), (2, 1, 1), (3, 3, 3)]);
        let mut it = g.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some((&1, &2, &1)));
        assert_eq!(it.next_back(), Some((&3, &3, &3)));
        assert_eq!(it.next(), Some((&1, &2, &2)));
        assert_eq!(it.next_back(), Some((&2, &1, &1)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn reverse_is_forward_reversed() {
        let g: Graph<i32, i32> =
            Graph::from_edges([(5, 1, 2), (1, 5, 2), (1, 5, 1), (3, 3, 0), (3, 1, 9)]);
        let mut forward = owned(g.iter());
        forward.reverse();
        assert_eq!(owned(g.iter().rev()), forward);
    }

    #[test]
    fn for_loop_over_reference() {
        let g: Graph<i32, i32> = Graph::from_edges([(1, 1, 1), (2, 1, 1)]);
        let mut count = 0;
        for (src, _, _) in &g {
            assert!(*src == 1 || *src == 2);
            count += 1;
        }
        assert_eq!(count, 2);
    }
}
