//! Index-addressed node storage for the linked list
//!
//! Nodes live in a single `Vec` of slots. A removed node's slot joins a free
//! list threaded through the vacant slots and is reused by the next insert.
//! Handles are `u32` with [`NIL`] as the "no node" sentinel.

use crate::error::{OrderlyError, Result};
use std::mem;

/// Sentinel handle meaning "no node"
pub const NIL: u32 = u32::MAX;

/// A list node: the value plus neighbour handles
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) prev: u32,
    pub(crate) next: u32,
}

#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    /// Next free slot, or `NIL`
    Vacant(u32),
}

/// Slot arena holding the nodes of one list
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: u32,
    occupied: usize,
}

impl<T> NodeArena<T> {
    /// Create an empty arena. No memory is allocated.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: NIL,
            occupied: 0,
        }
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// `true` when no slot is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Number of slots held, occupied or vacant
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Store a detached node holding `data` and return its handle.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] when the slot vector cannot grow
    /// or the handle space is exhausted. The arena is unchanged.
    pub fn try_insert(&mut self, data: T) -> Result<u32> {
        let node = Node {
            data,
            prev: NIL,
            next: NIL,
        };

        if self.free_head != NIL {
            let handle = self.free_head;
            let slot = &mut self.slots[handle as usize];
            self.free_head = match slot {
                Slot::Vacant(next_free) => *next_free,
                Slot::Occupied(_) => panic!("free list points at occupied slot {}", handle),
            };
            *slot = Slot::Occupied(node);
            self.occupied += 1;
            return Ok(handle);
        }

        let handle = self.slots.len();
        // NIL is reserved as the sentinel
        if handle >= NIL as usize {
            return Err(OrderlyError::out_of_memory(mem::size_of::<Slot<T>>()));
        }
        self.slots
            .try_reserve(1)
            .map_err(|_| OrderlyError::out_of_memory(mem::size_of::<Slot<T>>()))?;
        self.slots.push(Slot::Occupied(node));
        self.occupied += 1;
        Ok(handle as u32)
    }

    /// Take the node at `handle` out of the arena and free its slot.
    pub fn remove(&mut self, handle: u32) -> Option<Node<T>> {
        let slot = self.slots.get_mut(handle as usize)?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }
        let taken = mem::replace(slot, Slot::Vacant(self.free_head));
        self.free_head = handle;
        self.occupied -= 1;
        match taken {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }

    /// Node at `handle`
    #[inline]
    pub fn get(&self, handle: u32) -> Option<&Node<T>> {
        match self.slots.get(handle as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Mutable node at `handle`
    #[inline]
    pub fn get_mut(&mut self, handle: u32) -> Option<&mut Node<T>> {
        match self.slots.get_mut(handle as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Node at `handle`, panicking on a dangling handle.
    ///
    /// Used on handles taken from the list's own links; a miss means the
    /// chain is corrupt.
    #[inline]
    pub(crate) fn node(&self, handle: u32) -> &Node<T> {
        match self.get(handle) {
            Some(node) => node,
            None => panic!("corrupt node chain: dangling handle {}", handle),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: u32) -> &mut Node<T> {
        match self.get_mut(handle) {
            Some(node) => node,
            None => panic!("corrupt node chain: dangling handle {}", handle),
        }
    }

    /// Exchange the values stored at two handles, leaving links untouched.
    pub fn swap_data(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.slots.split_at_mut(hi as usize);
        match (&mut left[lo as usize], &mut right[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.data, &mut y.data),
            _ => panic!("corrupt node chain: swap on vacant slot ({}, {})", a, b),
        }
    }

    /// Drop every node and release the backing store.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_head = NIL;
        self.occupied = 0;
    }

    /// Raw pointer to the slot vector for the mutable iterator.
    #[inline]
    pub(crate) fn slots_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }

    /// Mutable data behind a slot pointer obtained from [`slots_ptr`].
    ///
    /// # Safety
    ///
    /// `base` must come from `slots_ptr` on this arena with no reallocation
    /// since, `handle` must address an occupied slot, and no other live
    /// reference may point at that slot's data.
    #[inline]
    pub(crate) unsafe fn data_at<'a>(base: *mut Slot<T>, handle: u32) -> (&'a mut T, u32, u32) {
        // SAFETY: the caller guarantees `base` is live and `handle` in bounds
        // with no other reference to this slot.
        let slot = unsafe { &mut *base.add(handle as usize) };
        match slot {
            Slot::Occupied(node) => (&mut node.data, node.prev, node.next),
            Slot::Vacant(_) => panic!("corrupt node chain: vacant slot {}", handle),
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
