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

//! Detached bidirectional cursor over a `DigitList`.
//!
//! A `DigitCursor` does not borrow the list it walks. It stores the handle of
//! the node the next forward step would return, its logical position, and
//! the list's modification stamp taken at creation. Every call receives the
//! list explicitly and first compares stamps: once the list has been
//! structurally modified by anyone else, the cursor fails fast with
//! `ListError::ConcurrentModification` instead of following stale handles.
//! A cursor handed a list other than the one that created it fails with
//! `ListError::ForeignList`.
//!
//! The cursor mutates only through `set`. Structural `insert` and `remove`
//! are rejected with `ListError::UnsupportedOperation`.
//!
//! # Examples
//!
//! ```rust
//! # use octal_list::list::DigitList;
//! let mut list: DigitList = [1, 2, 3].into_iter().collect();
//! let mut cursor = list.cursor(0).unwrap();
//! assert_eq!(cursor.next(&list).unwrap(), Some(1));
//! cursor.set(&mut list, 7).unwrap();
//! assert_eq!(cursor.next(&list).unwrap(), Some(2));
//! assert_eq!(cursor.previous(&list).unwrap(), Some(2));
//! assert_eq!(list.to_vec(), vec![7, 2, 3]);
//! ```

use crate::{error::ListError, index::NodeIndex, list::DigitList};

/// A bidirectional position between two digits of a `DigitList`.
///
/// Positions run from `0` (before the head) to `len` (after the tail).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitCursor {
    next: Option<NodeIndex>,
    next_index: usize,
    last_returned: Option<NodeIndex>,
    expected_stamp: u64,
    owner: u64,
}

impl DigitCursor {
    #[inline]
    pub(crate) fn new(
        next: Option<NodeIndex>,
        next_index: usize,
        stamp: u64,
        owner: u64,
    ) -> Self {
        Self {
            next,
            next_index,
            last_returned: None,
            expected_stamp: stamp,
            owner,
        }
    }

    /// Returns `true` if a forward step would yield a digit.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if a backward step would yield a digit.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.next_index > 0
    }

    /// Position of the digit the next forward step would return.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Position of the digit the next backward step would return, or `None`
    /// at the front.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    /// Steps forward and returns the digit passed over, or `None` at the end.
    ///
    /// # Errors
    ///
    /// Returns `ListError::ConcurrentModification` if `list` changed
    /// structurally since the cursor was created, and
    /// `ListError::ForeignList` if `list` did not create the cursor.
    pub fn next(&mut self, list: &DigitList) -> Result<Option<u8>, ListError> {
        self.check_stamp(list)?;
        let Some(handle) = self.next else {
            return Ok(None);
        };
        let node = list.node(handle);
        self.last_returned = Some(handle);
        self.next = node.next();
        self.next_index += 1;
        Ok(Some(node.value()))
    }

    /// Steps backward and returns the digit passed over, or `None` at the
    /// front.
    ///
    /// # Errors
    ///
    /// Returns `ListError::ConcurrentModification` if `list` changed
    /// structurally since the cursor was created, and
    /// `ListError::ForeignList` if `list` did not create the cursor.
    pub fn previous(&mut self, list: &DigitList) -> Result<Option<u8>, ListError> {
        self.check_stamp(list)?;
        if self.next_index == 0 {
            return Ok(None);
        }
        let target = match self.next {
            Some(handle) => list.node(handle).prev(),
            None => list.tail_handle(),
        };
        let Some(handle) = target else {
            return Ok(None);
        };
        self.next = Some(handle);
        self.last_returned = Some(handle);
        self.next_index -= 1;
        Ok(Some(list.node(handle).value()))
    }

    /// Replaces the digit most recently returned by `next` or `previous` and
    /// returns the old value.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IllegalState` if no step has been taken yet, and
    /// `ListError::ConcurrentModification` if `list` changed structurally, and
    /// `ListError::ForeignList` if `list` did not create the cursor.
    pub fn set(&self, list: &mut DigitList, value: u8) -> Result<u8, ListError> {
        self.check_stamp(list)?;
        let handle = self.last_returned.ok_or(ListError::IllegalState)?;
        Ok(std::mem::replace(&mut list.node_mut(handle).value, value))
    }

    /// Structural insertion through a cursor is not supported.
    ///
    /// # Errors
    ///
    /// Always returns `ListError::UnsupportedOperation`.
    #[inline]
    pub fn insert(&mut self, _list: &mut DigitList, _value: u8) -> Result<(), ListError> {
        Err(ListError::UnsupportedOperation {
            operation: "DigitCursor::insert",
        })
    }

    /// Structural removal through a cursor is not supported.
    ///
    /// # Errors
    ///
    /// Always returns `ListError::UnsupportedOperation`.
    #[inline]
    pub fn remove(&mut self, _list: &mut DigitList) -> Result<u8, ListError> {
        Err(ListError::UnsupportedOperation {
            operation: "DigitCursor::remove",
        })
    }

    #[inline]
    fn check_stamp(&self, list: &DigitList) -> Result<(), ListError> {
        if list.id() != self.owner {
            return Err(ListError::ForeignList {
                owner: self.owner,
                found: list.id(),
            });
        }
        let found = list.stamp();
        if found != self.expected_stamp {
            return Err(ListError::ConcurrentModification {
                expected: self.expected_stamp,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[u8]) -> DigitList {
        values.iter().copied().collect()
    }

    #[test]
    fn test_forward_and_backward_walk() {
        let list = list_of(&[1, 2, 3]);
        let mut c = list.cursor(0).unwrap();
        assert!(c.has_next());
        assert!(!c.has_previous());
        assert_eq!(c.previous_index(), None);

        assert_eq!(c.next(&list), Ok(Some(1)));
        assert_eq!(c.next(&list), Ok(Some(2)));
        assert_eq!(c.next(&list), Ok(Some(3)));
        assert_eq!(c.next(&list), Ok(None));
        assert!(!c.has_next());
        assert_eq!(c.next_index(), 3);
        assert_eq!(c.previous_index(), Some(2));

        assert_eq!(c.previous(&list), Ok(Some(3)));
        assert_eq!(c.previous(&list), Ok(Some(2)));
        assert_eq!(c.previous(&list), Ok(Some(1)));
        assert_eq!(c.previous(&list), Ok(None));
        assert_eq!(c.next_index(), 0);
    }

    #[test]
    fn test_start_positions() {
        let list = list_of(&[4, 5, 6]);

        let mut mid = list.cursor(1).unwrap();
        assert_eq!(mid.next_index(), 1);
        assert_eq!(mid.next(&list), Ok(Some(5)));

        let mut end = list.cursor(3).unwrap();
        assert!(!end.has_next());
        assert!(end.has_previous());
        assert_eq!(end.previous(&list), Ok(Some(6)));

        assert_eq!(
            list.cursor(4),
            Err(ListError::IndexOutOfBounds { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let list = DigitList::new();
        let mut c = list.cursor(0).unwrap();
        assert!(!c.has_next());
        assert!(!c.has_previous());
        assert_eq!(c.next(&list), Ok(None));
        assert_eq!(c.previous(&list), Ok(None));
    }

    #[test]
    fn test_set_replaces_last_returned() {
        let mut list = list_of(&[1, 2, 3]);
        let mut c = list.cursor(0).unwrap();

        assert_eq!(c.set(&mut list, 9), Err(ListError::IllegalState));

        c.next(&list).unwrap();
        c.next(&list).unwrap();
        assert_eq!(c.set(&mut list, 7), Ok(2));
        assert_eq!(list.to_vec(), vec![1, 7, 3]);

        c.previous(&list).unwrap();
        c.previous(&list).unwrap();
        assert_eq!(c.set(&mut list, 0), Ok(1));
        assert_eq!(list.to_vec(), vec![0, 7, 3]);

        // `set` is not structural, so the cursor remains usable.
        assert_eq!(c.next(&list), Ok(Some(0)));
    }

    #[test]
    fn test_structural_operations_are_unsupported() {
        let mut list = list_of(&[1, 2]);
        let mut c = list.cursor(0).unwrap();
        c.next(&list).unwrap();
        assert!(matches!(
            c.insert(&mut list, 3),
            Err(ListError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            c.remove(&mut list),
            Err(ListError::UnsupportedOperation { .. })
        ));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_outside_structural_change_fails_fast() {
        let mut list = list_of(&[1, 2, 3]);
        let mut c = list.cursor(0).unwrap();
        c.next(&list).unwrap();

        list.remove(1).unwrap();

        assert!(matches!(
            c.next(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
        assert!(matches!(
            c.previous(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
        assert!(matches!(
            c.set(&mut list, 5),
            Err(ListError::ConcurrentModification { .. })
        ));
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_outside_value_change_keeps_cursor_valid() {
        let mut list = list_of(&[3, 1, 2]);
        let mut c = list.cursor(0).unwrap();
        list.sort_ascending();
        assert_eq!(c.next(&list), Ok(Some(1)));
    }

    #[test]
    fn test_clear_and_rotation_invalidate() {
        let mut list = list_of(&[1, 2, 3]);
        let mut c = list.cursor(0).unwrap();
        list.shift_left();
        assert!(c.next(&list).is_err());

        let mut c = list.cursor(0).unwrap();
        list.clear();
        assert!(c.next(&list).is_err());
    }

    #[test]
    fn test_cursor_rejects_other_list_with_matching_stamp() {
        let a = list_of(&[1, 2, 3, 4, 5]);
        let mut c = a.cursor(4).unwrap();

        let mut b = list_of(&[7, 7, 7]);
        b.pop_back();
        b.pop_back();
        assert_eq!(b.stamp(), a.stamp());

        assert!(matches!(c.next(&b), Err(ListError::ForeignList { .. })));
        assert!(matches!(c.previous(&b), Err(ListError::ForeignList { .. })));
        assert!(matches!(c.set(&mut b, 0), Err(ListError::ForeignList { .. })));
        assert_eq!(b.to_vec(), vec![7]);
        assert_eq!(c.next(&a), Ok(Some(5)));
    }

    #[test]
    fn test_cursor_rejects_clone_of_its_list() {
        let list = list_of(&[1, 2]);
        let copy = list.clone();
        let mut c = list.cursor(0).unwrap();
        assert!(matches!(c.next(&copy), Err(ListError::ForeignList { .. })));
    }
}
