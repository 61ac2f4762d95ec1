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

//! Iterators over `DigitList`.
//!
//! `Iter` borrows the list, so the borrow checker rules out structural
//! modification while it is alive. `IntoIter` consumes the list and pops
//! from either end.

use crate::{index::NodeIndex, list::DigitList};
use std::iter::FusedIterator;

/// A borrowing, double-ended iterator over the digits of a `DigitList`.
///
/// # Examples
///
/// ```rust
/// # use octal_list::list::DigitList;
/// let list: DigitList = [1, 2, 3].into_iter().collect();
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a DigitList,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(list: &'a DigitList) -> Self {
        Self {
            list,
            front: list.head_handle(),
            back: list.tail_handle(),
            remaining: list.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev();
        self.remaining -= 1;
        Some(node.value())
    }
}

impl ExactSizeIterator for Iter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}

impl std::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Iter(remaining: {})", self.remaining)
    }
}

/// An owning iterator over the digits of a `DigitList`.
#[derive(Debug, Clone)]
pub struct IntoIter {
    list: DigitList,
}

impl IntoIter {
    #[inline]
    pub(crate) fn new(list: DigitList) -> Self {
        Self { list }
    }
}

impl Iterator for IntoIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

#[cfg(test)]
mod tests {
    use crate::list::DigitList;

    #[test]
    fn test_forward_iteration_is_finite() {
        let list: DigitList = [4, 0, 7].into_iter().collect();
        let mut it = list.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_fresh_iterator_restarts() {
        let list: DigitList = [1, 2].into_iter().collect();
        let mut first = list.iter();
        first.next();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first.collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_meeting_in_the_middle() {
        let list: DigitList = [1, 2, 3, 4, 5].into_iter().collect();
        let mut it = list.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_iteration_after_interior_edits() {
        let mut list: DigitList = [1, 2, 3].into_iter().collect();
        list.remove(1).unwrap();
        list.insert(1, 6).unwrap();
        list.push_front(0);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![0, 1, 6, 3]);
        assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![3, 6, 1, 0]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let list: DigitList = [1, 2, 3].into_iter().collect();
        let mut it = list.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let list: DigitList = [3, 3, 1].into_iter().collect();
        let mut sum = 0u32;
        for v in &list {
            sum += v as u32;
        }
        assert_eq!(sum, 7);
    }
}
