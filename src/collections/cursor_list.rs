//! `CursorList` — a doubly linked list with an embedded, movable cursor.
//!
//! Nodes live in an index arena: `links` stores the structure (prev/next as
//! indices) and `values` stores the elements, so unlinking a node can never
//! leave a sibling pointing at freed memory. Freed slots are threaded onto a
//! free list and reused by later insertions.
//!
//! # Cursor protocol
//! The list carries a single cursor that callers move explicitly:
//!
//! ```rust
//! use skyroute::collections::CursorList;
//!
//! let mut list: CursorList<i32> = [1, 2, 3].into_iter().collect();
//! let mut seen = Vec::new();
//! list.cursor_front();
//! while !list.cursor_end() {
//!     seen.push(list.cursor_get().unwrap());
//!     list.cursor_next().unwrap();
//! }
//! assert_eq!(seen, [1, 2, 3]);
//! ```
//!
//! The embedded cursor is **not reentrant**: a second `cursor_front` while a
//! traversal is in progress resets that traversal. Read-only walks that may
//! nest should use [`CursorList::walk_front`] or [`CursorList::iter`], which
//! own their own position and leave the embedded cursor alone.
//!
//! [`CursorList::find`] doubles as a seek: on success it leaves the cursor on
//! the match.

use crate::error::{GraphError, Result};
use core::fmt;

/// Elements that expose an identity used by [`CursorList::find`].
pub trait Keyed {
    /// The identity type.
    type Key: PartialEq + Copy;

    /// Returns the identity of this element.
    fn key(&self) -> Self::Key;
}

macro_rules! impl_keyed_for_primitive {
    ($($ty:ty),*) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                #[inline]
                fn key(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

impl_keyed_for_primitive!(i32, i64, u32, u64, usize, char);

/// A slot in the links vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkSlot {
    Occupied { prev: Option<usize>, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// A doubly linked list with an embedded cursor.
#[derive(Clone)]
pub struct CursorList<T> {
    links: Vec<LinkSlot>,
    values: Vec<Option<T>>,

    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> CursorList<T> {
    /// Creates a new empty list. The cursor starts at the end position.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            values: Vec::new(),
            head: None,
            tail: None,
            cursor: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every element and releases the node arena.
    pub fn clear(&mut self) {
        self.links.clear();
        self.values.clear();
        self.head = None;
        self.tail = None;
        self.cursor = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Consumes the list, releasing every node.
    pub fn delete(self) {
        drop(self);
    }

    /// Allocates a node slot, reusing a free one when available.
    fn alloc(&mut self, value: T) -> usize {
        if let Some(free_idx) = self.free_head {
            let next_free = match self.links[free_idx] {
                LinkSlot::Free(next) => next,
                LinkSlot::Occupied { .. } => panic!("Corrupted free list"),
            };
            self.links[free_idx] = LinkSlot::Occupied { prev: None, next: None };
            self.values[free_idx] = Some(value);
            self.free_head = next_free;
            free_idx
        } else {
            let idx = self.links.len();
            self.links.push(LinkSlot::Occupied { prev: None, next: None });
            self.values.push(Some(value));
            idx
        }
    }

    /// Returns `(prev, next)` of a live node.
    fn links_of(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        match self.links[idx] {
            LinkSlot::Occupied { prev, next } => (prev, next),
            LinkSlot::Free(_) => panic!("Corrupted list: link points to free slot {idx}"),
        }
    }

    fn set_prev(&mut self, idx: usize, value: Option<usize>) {
        if let LinkSlot::Occupied { prev, .. } = &mut self.links[idx] {
            *prev = value;
        }
    }

    fn set_next(&mut self, idx: usize, value: Option<usize>) {
        if let LinkSlot::Occupied { next, .. } = &mut self.links[idx] {
            *next = value;
        }
    }

    /// Detaches a live node, frees its slot and returns its value.
    ///
    /// Does not touch the cursor; callers fix it up.
    fn unlink(&mut self, idx: usize) -> T {
        let (prev_idx, next_idx) = self.links_of(idx);

        match prev_idx {
            Some(prev) => self.set_next(prev, next_idx),
            None => self.head = next_idx,
        }
        match next_idx {
            Some(next) => self.set_prev(next, prev_idx),
            None => self.tail = prev_idx,
        }

        self.links[idx] = LinkSlot::Free(self.free_head);
        self.free_head = Some(idx);
        self.len -= 1;

        match self.values[idx].take() {
            Some(value) => value,
            None => panic!("Corrupted list: occupied slot {idx} holds no value"),
        }
    }

    /// Appends an element at the tail. O(1).
    ///
    /// When the list was empty the cursor is placed on the new element.
    pub fn push_back(&mut self, value: T) {
        let new_idx = self.alloc(value);

        match self.tail {
            Some(tail_idx) => {
                self.set_next(tail_idx, Some(new_idx));
                self.set_prev(new_idx, Some(tail_idx));
            }
            None => {
                self.head = Some(new_idx);
                self.cursor = Some(new_idx);
            }
        }

        self.tail = Some(new_idx);
        self.len += 1;
    }

    /// Prepends an element at the head. O(1).
    ///
    /// When the list was empty the cursor is placed on the new element.
    pub fn push_front(&mut self, value: T) {
        let new_idx = self.alloc(value);

        match self.head {
            Some(head_idx) => {
                self.set_prev(head_idx, Some(new_idx));
                self.set_next(new_idx, Some(head_idx));
            }
            None => {
                self.tail = Some(new_idx);
                self.cursor = Some(new_idx);
            }
        }

        self.head = Some(new_idx);
        self.len += 1;
    }

    /// Removes the tail element and returns it.
    ///
    /// A cursor on the removed node moves to the end position.
    ///
    /// # Errors
    /// [`GraphError::EmptyContainer`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail_idx = self.tail.ok_or(GraphError::EmptyContainer)?;
        if self.cursor == Some(tail_idx) {
            self.cursor = None;
        }
        Ok(self.unlink(tail_idx))
    }

    /// Removes the head element and returns it.
    ///
    /// A cursor on the removed node moves to the end position.
    ///
    /// # Errors
    /// [`GraphError::EmptyContainer`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T> {
        let head_idx = self.head.ok_or(GraphError::EmptyContainer)?;
        if self.cursor == Some(head_idx) {
            self.cursor = None;
        }
        Ok(self.unlink(head_idx))
    }

    /// Returns a reference to the front element.
    pub fn front(&self) -> Option<&T> {
        self.values[self.head?].as_ref()
    }

    /// Returns a reference to the back element.
    pub fn back(&self) -> Option<&T> {
        self.values[self.tail?].as_ref()
    }

    /// Moves the cursor to the head (end position on an empty list).
    #[inline]
    pub fn cursor_front(&mut self) {
        self.cursor = self.head;
    }

    /// Moves the cursor to the tail (end position on an empty list).
    #[inline]
    pub fn cursor_back(&mut self) {
        self.cursor = self.tail;
    }

    /// Advances the cursor one element toward the tail.
    ///
    /// Returns whether the new position holds an element; stepping past the
    /// tail lands on the end position.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is at the end position.
    pub fn cursor_next(&mut self) -> Result<bool> {
        let idx = self.cursor.ok_or(GraphError::InvalidCursor)?;
        self.cursor = self.links_of(idx).1;
        Ok(self.cursor.is_some())
    }

    /// Moves the cursor one element toward the head.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is at the end position.
    pub fn cursor_prev(&mut self) -> Result<bool> {
        let idx = self.cursor.ok_or(GraphError::InvalidCursor)?;
        self.cursor = self.links_of(idx).0;
        Ok(self.cursor.is_some())
    }

    /// Returns `true` if the cursor is at the end position.
    #[inline]
    pub fn cursor_end(&self) -> bool {
        self.cursor.is_none()
    }

    /// Returns a reference to the element under the cursor.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is at the end position.
    pub fn cursor_ref(&self) -> Result<&T> {
        self.cursor
            .and_then(|idx| self.values[idx].as_ref())
            .ok_or(GraphError::InvalidCursor)
    }

    /// Returns a copy of the element under the cursor.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is at the end position.
    pub fn cursor_get(&self) -> Result<T>
    where
        T: Copy,
    {
        self.cursor_ref().copied()
    }

    /// Removes the element under the cursor and returns it.
    ///
    /// The cursor moves to the following element. If the removed element was
    /// the tail, the cursor wraps to the head (end position once the list is
    /// empty).
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is at the end position.
    pub fn cursor_erase(&mut self) -> Result<T> {
        let idx = self.cursor.ok_or(GraphError::InvalidCursor)?;
        let next_idx = self.links_of(idx).1;
        let value = self.unlink(idx);
        self.cursor = next_idx.or(self.head);
        Ok(value)
    }

    /// Applies `f` to every element, head to tail.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for item in self {
            f(item);
        }
    }

    /// Iterates over the elements without touching the embedded cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Creates a detached read-only cursor positioned at the head.
    pub fn walk_front(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            current: self.head,
        }
    }

    /// Creates a detached read-only cursor positioned at the tail.
    pub fn walk_back(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            current: self.tail,
        }
    }
}

impl<T: Keyed> CursorList<T> {
    /// Arena index of the first element whose key equals `key`.
    fn position(&self, key: T::Key) -> Option<usize> {
        let mut current = self.head;
        while let Some(idx) = current {
            if self.values[idx].as_ref().is_some_and(|item| item.key() == key) {
                return Some(idx);
            }
            current = self.links_of(idx).1;
        }
        None
    }

    /// Searches for the first element with `key`.
    ///
    /// On success the cursor is moved onto the match; on failure the cursor
    /// is left where it was.
    pub fn find(&mut self, key: T::Key) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.cursor = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if an element with `key` exists. Leaves the cursor alone.
    pub fn contains(&self, key: T::Key) -> bool {
        self.position(key).is_some()
    }

    /// Removes the first element with `key`, as [`find`](Self::find)
    /// followed by [`cursor_erase`](Self::cursor_erase).
    pub fn remove(&mut self, key: T::Key) -> bool {
        self.find(key) && self.cursor_erase().is_ok()
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CursorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CursorList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: PartialEq> PartialEq for CursorList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorList")
            .field("len", &self.len)
            .field("items", &self.iter().collect::<Vec<_>>())
            .field("cursor_end", &self.cursor_end())
            .finish()
    }
}

/// Borrowing iterator over a [`CursorList`].
pub struct Iter<'a, T> {
    list: &'a CursorList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.front = self.list.links_of(idx).1;
        self.remaining -= 1;
        self.list.values[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.back = self.list.links_of(idx).0;
        self.remaining -= 1;
        self.list.values[idx].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator for [`CursorList`].
pub struct IntoIter<T> {
    list: CursorList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for CursorList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// A read-only cursor that owns only its own position.
///
/// Any number of these may walk the same list at once; none of them moves
/// the list's embedded cursor.
pub struct Cursor<'a, T> {
    list: &'a CursorList<T>,
    current: Option<usize>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Repositions at the head.
    pub fn seek_front(&mut self) {
        self.current = self.list.head;
    }

    /// Repositions at the tail.
    pub fn seek_back(&mut self) {
        self.current = self.list.tail;
    }

    /// Returns `true` past either end of the list.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the element under this cursor, if any.
    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        self.current.and_then(|idx| list.values[idx].as_ref())
    }

    /// Returns the element under this cursor.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] past either end of the list.
    pub fn get(&self) -> Result<&'a T> {
        self.current().ok_or(GraphError::InvalidCursor)
    }

    /// Steps toward the tail and reports whether an element is under the cursor.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if already past the end.
    pub fn move_next(&mut self) -> Result<bool> {
        let idx = self.current.ok_or(GraphError::InvalidCursor)?;
        self.current = self.list.links_of(idx).1;
        Ok(self.current.is_some())
    }

    /// Steps toward the head and reports whether an element is under the cursor.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if already past the end.
    pub fn move_prev(&mut self) -> Result<bool> {
        let idx = self.current.ok_or(GraphError::InvalidCursor)?;
        self.current = self.list.links_of(idx).0;
        Ok(self.current.is_some())
    }
}
