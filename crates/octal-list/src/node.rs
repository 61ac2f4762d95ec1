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

use crate::index::NodeIndex;

/// The storage unit of a `DigitList`: one digit and the handles of its
/// neighbours.
///
/// Links are plain arena handles, not owning pointers. The list owning the
/// arena is responsible for keeping `prev`/`next` symmetric.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitNode {
    pub(crate) value: u8,
    pub(crate) prev: Option<NodeIndex>,
    pub(crate) next: Option<NodeIndex>,
}

impl DigitNode {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) const fn new(value: u8) -> Self {
        Self {
            value,
            prev: None,
            next: None,
        }
    }

    /// Returns the digit stored in this node.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the handle of the preceding node, if any.
    #[inline]
    pub const fn prev(&self) -> Option<NodeIndex> {
        self.prev
    }

    /// Returns the handle of the following node, if any.
    #[inline]
    pub const fn next(&self) -> Option<NodeIndex> {
        self.next
    }

    /// Returns `true` if the node has no neighbours on either side.
    #[inline]
    pub const fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

impl std::fmt::Display for DigitNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitNode({})", self.value)
    }
}
