// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Arena-backed doubly linked list of digits.
//!
//! `DigitList` stores one digit per node. Nodes live in a `Vec` arena and
//! reference their neighbours through `NodeIndex` handles, so the classic
//! `prev`/`next` graph is expressed without aliasing pointers while splicing
//! stays O(1). Slots freed by removals are recycled through a free list.
//!
//! Positional access walks from whichever end is closer: indices below
//! `len / 2` are reached from the head via `next`, all others from the tail
//! via `prev`.
//!
//! Every structural change (insertion, removal, rotation, clearing) bumps a
//! modification stamp. Detached cursors (`DigitCursor`) record the stamp and
//! refuse to continue once it changes. Replacing values in place (`set`,
//! `swap`, sorting) is not structural.
//!
//! The list is not thread-safe. Sharing one between threads requires
//! external synchronization.

use crate::{
    cursor::DigitCursor,
    error::ListError,
    index::NodeIndex,
    iter::{IntoIter, Iter},
    node::DigitNode,
};
use fixedbitset::FixedBitSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of distinct values a digit slot can hold.
const DIGIT_DOMAIN: usize = u8::MAX as usize + 1;

/// Source of per-list identities handed to cursors.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// A doubly linked sequence of digits.
///
/// # Invariants
///
/// - `len == 0` iff `head.is_none()` iff `tail.is_none()`.
/// - For every linked pair, `a.next == Some(b)` iff `b.prev == Some(a)`.
/// - Following `next` from `head` visits exactly `len` nodes and ends at `tail`.
///
/// # Examples
///
/// ```rust
/// use octal_list::list::DigitList;
///
/// let mut list: DigitList = [1, 2, 3].into_iter().collect();
/// list.insert(1, 7).unwrap();
/// assert_eq!(list.to_vec(), vec![1, 7, 2, 3]);
/// assert_eq!(list.remove(0).unwrap(), 1);
/// assert_eq!(list.to_string(), "723");
/// ```
pub struct DigitList {
    nodes: Vec<DigitNode>,
    free: Vec<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    len: usize,
    stamp: u64,
    id: u64,
}

impl Default for DigitList {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitList {
    /// Creates a new, empty `DigitList`.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            stamp: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Creates an empty `DigitList` with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of digits in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first digit, if any.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.head.map(|h| self.node(h).value)
    }

    /// Returns the last digit, if any.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.tail.map(|t| self.node(t).value)
    }

    /// Returns the digit at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u8, ListError> {
        let handle = self.checked_locate(index)?;
        Ok(self.node(handle).value)
    }

    /// Replaces the digit at `index` and returns the previous one.
    ///
    /// The value is stored as given; no radix check is applied.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfBounds` if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u8) -> Result<u8, ListError> {
        let handle = self.checked_locate(index)?;
        Ok(std::mem::replace(&mut self.node_mut(handle).value, value))
    }

    /// Appends a digit at the tail. O(1).
    #[inline]
    pub fn push(&mut self, value: u8) {
        self.link_before(None, value);
    }

    /// Inserts a digit at the head. O(1).
    #[inline]
    pub fn push_front(&mut self, value: u8) {
        let head = self.head;
        self.link_before(head, value);
    }

    /// Removes and returns the first digit.
    #[inline]
    pub fn pop_front(&mut self) -> Option<u8> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Removes and returns the last digit.
    #[inline]
    pub fn pop_back(&mut self) -> Option<u8> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == len()` appends and `index == 0` prepends.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: u8) -> Result<(), ListError> {
        let successor = self.successor_for_insert(index)?;
        self.link_before(successor, value);
        Ok(())
    }

    /// Removes the digit at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<u8, ListError> {
        let handle = self.checked_locate(index)?;
        Ok(self.unlink(handle))
    }

    /// Removes the first occurrence of `value`. Returns `false` if absent.
    pub fn remove_value(&mut self, value: u8) -> bool {
        match self.find_forward(value) {
            Some((handle, _)) => {
                self.unlink(handle);
                true
            }
            None => false,
        }
    }

    /// Returns the position of the first occurrence of `value`.
    #[inline]
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.find_forward(value).map(|(_, index)| index)
    }

    /// Returns the position of the last occurrence of `value`, scanning from
    /// the tail.
    pub fn last_index_of(&self, value: u8) -> Option<usize> {
        let mut current = self.tail;
        let mut index = self.len;
        while let Some(handle) = current {
            index -= 1;
            let node = self.node(handle);
            if node.value == value {
                return Some(index);
            }
            current = node.prev;
        }
        None
    }

    /// Returns `true` if `value` occurs in the list.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every value of `values` occurs in the list.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Appends every value in order. Returns `true` if anything was added.
    pub fn add_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        let before = self.len;
        for v in values {
            self.push(v);
        }
        self.len != before
    }

    /// Inserts every value, in order, starting at position `index`.
    /// Returns `true` if anything was inserted.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfBounds` if `index > len()`, even when
    /// `values` is empty.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = u8>,
    {
        let successor = self.successor_for_insert(index)?;
        let before = self.len;
        for v in values {
            self.link_before(successor, v);
        }
        Ok(self.len != before)
    }

    /// Removes every occurrence of every value in `values`.
    /// Returns `true` if anything was removed.
    pub fn remove_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        let doomed = digit_set(values);
        self.unlink_where(|v| doomed.contains(v as usize))
    }

    /// Removes every digit whose value does not occur in `values`.
    /// Returns `true` if anything was removed.
    pub fn retain_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        let kept = digit_set(values);
        self.unlink_where(|v| !kept.contains(v as usize))
    }

    /// Removes all digits.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.bump_stamp();
    }

    /// Returns a double-ended iterator over the digits, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns a bidirectional cursor positioned before the digit at `start`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfBounds` if `start > len()`.
    #[inline]
    pub fn cursor(&self, start: usize) -> Result<DigitCursor, ListError> {
        let next = self.successor_for_insert(start)?;
        Ok(DigitCursor::new(next, start, self.stamp, self.id))
    }

    /// Copies the digits in `[from, to)` into a new, independent list.
    ///
    /// # Errors
    ///
    /// Returns `ListError::InvalidRange` if `from > to` or `to > len()`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<DigitList, ListError> {
        if from > to || to > self.len {
            return Err(ListError::InvalidRange {
                from,
                to,
                len: self.len,
            });
        }
        Ok(self.iter().skip(from).take(to - from).collect())
    }

    /// Returns the digits as a vector, head first.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Materializing into a caller-provided buffer is not supported; use
    /// `to_vec` or `iter` instead.
    ///
    /// # Errors
    ///
    /// Always returns `ListError::UnsupportedOperation`.
    #[inline]
    pub fn fill_slice(&self, _buffer: &mut [u8]) -> Result<usize, ListError> {
        Err(ListError::UnsupportedOperation {
            operation: "DigitList::fill_slice",
        })
    }

    /// Exchanges the values at `i` and `j`.
    ///
    /// Returns `false` without touching the list if either index is out of
    /// bounds, and `true` otherwise (including `i == j`).
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len || j >= self.len {
            return false;
        }
        if i == j {
            return true;
        }
        let (Some(a), Some(b)) = (self.locate(i), self.locate(j)) else {
            return false;
        };
        self.swap_values(a, b);
        true
    }

    /// Sorts the digits in non-decreasing order.
    ///
    /// Bubble sort over the links: adjacent out-of-order values are swapped
    /// until a full pass makes no swap. Stable, O(n^2) worst case, node
    /// identities are untouched.
    #[inline]
    pub fn sort_ascending(&mut self) {
        self.bubble_sort(|a, b| a > b);
    }

    /// Sorts the digits in non-increasing order. See `sort_ascending`.
    #[inline]
    pub fn sort_descending(&mut self) {
        self.bubble_sort(|a, b| a < b);
    }

    /// Rotates left by one: the head node moves to the tail.
    /// No-op for lists shorter than two.
    pub fn shift_left(&mut self) {
        if self.len < 2 {
            return;
        }
        if let Some(head) = self.head {
            self.detach(head);
            self.attach_before(None, head);
        }
    }

    /// Rotates right by one: the tail node moves to the head.
    /// No-op for lists shorter than two.
    pub fn shift_right(&mut self) {
        if self.len < 2 {
            return;
        }
        if let Some(tail) = self.tail {
            self.detach(tail);
            let head = self.head;
            self.attach_before(head, tail);
        }
    }

    #[inline]
    pub(crate) fn head_handle(&self) -> Option<NodeIndex> {
        self.head
    }

    #[inline]
    pub(crate) fn tail_handle(&self) -> Option<NodeIndex> {
        self.tail
    }

    #[inline]
    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    #[inline]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn node(&self, handle: NodeIndex) -> &DigitNode {
        debug_assert!(
            handle.get() < self.nodes.len(),
            "called `DigitList::node` with a handle outside the arena: the arena holds {} slots but the handle is {}",
            self.nodes.len(),
            handle
        );
        &self.nodes[handle.get()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: NodeIndex) -> &mut DigitNode {
        debug_assert!(
            handle.get() < self.nodes.len(),
            "called `DigitList::node_mut` with a handle outside the arena: the arena holds {} slots but the handle is {}",
            self.nodes.len(),
            handle
        );
        &mut self.nodes[handle.get()]
    }

    /// Finds the node at `index`, walking from the closer end.
    fn locate(&self, index: usize) -> Option<NodeIndex> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.node(current).next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in (index + 1)..self.len {
                current = self.node(current).prev?;
            }
            Some(current)
        }
    }

    #[inline]
    fn checked_locate(&self, index: usize) -> Result<NodeIndex, ListError> {
        self.locate(index).ok_or(ListError::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Resolves an insertion position to the node that will follow the new
    /// one (`None` means the tail end).
    #[inline]
    fn successor_for_insert(&self, index: usize) -> Result<Option<NodeIndex>, ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.locate(index))
    }

    fn find_forward(&self, value: u8) -> Option<(NodeIndex, usize)> {
        let mut current = self.head;
        let mut index = 0;
        while let Some(handle) = current {
            let node = self.node(handle);
            if node.value == value {
                return Some((handle, index));
            }
            current = node.next;
            index += 1;
        }
        None
    }

    fn allocate(&mut self, value: u8) -> NodeIndex {
        match self.free.pop() {
            Some(handle) => {
                *self.node_mut(handle) = DigitNode::new(value);
                handle
            }
            None => {
                self.nodes.push(DigitNode::new(value));
                NodeIndex::new(self.nodes.len() - 1)
            }
        }
    }

    /// Links a detached node in front of `successor`, or at the tail.
    fn attach_before(&mut self, successor: Option<NodeIndex>, handle: NodeIndex) {
        let predecessor = match successor {
            Some(s) => self.node(s).prev,
            None => self.tail,
        };
        {
            let node = self.node_mut(handle);
            node.prev = predecessor;
            node.next = successor;
        }
        match predecessor {
            Some(p) => self.node_mut(p).next = Some(handle),
            None => self.head = Some(handle),
        }
        match successor {
            Some(s) => self.node_mut(s).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.len += 1;
        self.bump_stamp();
    }

    /// Unlinks a node and rewires its neighbours. The slot stays allocated.
    fn detach(&mut self, handle: NodeIndex) {
        let DigitNode { prev, next, .. } = *self.node(handle);
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
        let node = self.node_mut(handle);
        node.prev = None;
        node.next = None;
        self.len -= 1;
        self.bump_stamp();
    }

    #[inline]
    fn link_before(&mut self, successor: Option<NodeIndex>, value: u8) -> NodeIndex {
        let handle = self.allocate(value);
        self.attach_before(successor, handle);
        handle
    }

    /// Unlinks a node, releases its slot and returns its digit.
    #[inline]
    fn unlink(&mut self, handle: NodeIndex) -> u8 {
        self.detach(handle);
        self.free.push(handle);
        self.node(handle).value
    }

    /// Single pass removal; `next` is captured before each unlink.
    fn unlink_where<F>(&mut self, mut doomed: F) -> bool
    where
        F: FnMut(u8) -> bool,
    {
        let mut modified = false;
        let mut current = self.head;
        while let Some(handle) = current {
            let node = *self.node(handle);
            current = node.next;
            if doomed(node.value) {
                self.unlink(handle);
                modified = true;
            }
        }
        modified
    }

    #[inline]
    fn swap_values(&mut self, a: NodeIndex, b: NodeIndex) {
        let va = self.node(a).value;
        let vb = self.node(b).value;
        self.node_mut(a).value = vb;
        self.node_mut(b).value = va;
    }

    fn bubble_sort<F>(&mut self, out_of_order: F)
    where
        F: Fn(u8, u8) -> bool,
    {
        if self.len < 2 {
            return;
        }
        loop {
            let mut swapped = false;
            let mut current = self.head;
            while let Some(handle) = current {
                let Some(next) = self.node(handle).next else {
                    break;
                };
                if out_of_order(self.node(handle).value, self.node(next).value) {
                    self.swap_values(handle, next);
                    swapped = true;
                }
                current = Some(next);
            }
            if !swapped {
                break;
            }
        }
    }

    #[inline]
    fn bump_stamp(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }
}

fn digit_set<I>(values: I) -> FixedBitSet
where
    I: IntoIterator<Item = u8>,
{
    let mut set = FixedBitSet::with_capacity(DIGIT_DOMAIN);
    for v in values {
        set.insert(v as usize);
    }
    set
}

impl Clone for DigitList {
    /// Deep-copies the digits into a freshly compacted arena.
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitList {}

impl std::hash::Hash for DigitList {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for v in self.iter() {
            v.hash(state);
        }
    }
}

impl FromIterator<u8> for DigitList {
    #[inline]
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = DigitList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl Extend<u8> for DigitList {
    #[inline]
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl IntoIterator for DigitList {
    type Item = u8;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a> IntoIterator for &'a DigitList {
    type Item = u8;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for DigitList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitList")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for DigitList {
    /// Writes the digits back to back, head first (`[1, 2, 3]` -> `123`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.iter() {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
