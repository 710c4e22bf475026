//! Index-stable slot storage with a free list

use super::edge::EdgeId;
use super::node::NodeId;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Typed handle into an [`Arena`]
pub(crate) trait ArenaId: Copy {
    fn from_index(index: usize) -> Self;
    fn to_index(self) -> usize;
}

impl ArenaId for NodeId {
    fn from_index(index: usize) -> Self {
        NodeId::new(index)
    }

    fn to_index(self) -> usize {
        self.index()
    }
}

impl ArenaId for EdgeId {
    fn from_index(index: usize) -> Self {
        EdgeId::new(index)
    }

    fn to_index(self) -> usize {
        self.index()
    }
}

/// Slots keep their index for as long as they are occupied. Vacated slots
/// are reused by later inserts.
#[derive(Debug, Clone)]
pub(crate) struct Arena<I, T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
    _id: PhantomData<I>,
}

impl<I, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            _id: PhantomData,
        }
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    pub fn insert(&mut self, value: T) -> I {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(value);
                I::from_index(index)
            }
            None => {
                self.slots.push(Some(value));
                I::from_index(self.slots.len() - 1)
            }
        }
    }

    pub fn remove(&mut self, id: I) -> Option<T> {
        let index = id.to_index();
        let value = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.slots.get(id.to_index())?.as_ref()
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.slots.get_mut(id.to_index())?.as_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("vacant arena slot {}", id.to_index()),
        }
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("vacant arena slot {}", id.to_index()),
        }
    }
}
