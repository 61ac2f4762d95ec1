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

//! Errors reported by `DigitList` and `DigitCursor`.
//!
//! Every variant terminates only the operation that produced it; the list is
//! left exactly as it was before the call.

/// The error type for index-based list access and cursor operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An index was outside the valid bounds for the operation.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// A `[from, to)` range was reversed or exceeded the list length.
    InvalidRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// The operation is not supported by this container or cursor.
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// A cursor was asked to replace an element before it returned one.
    IllegalState,
    /// The list was structurally modified after the cursor was created.
    ConcurrentModification {
        /// Modification stamp recorded by the cursor.
        expected: u64,
        /// Modification stamp of the list at the time of the call.
        found: u64,
    },
    /// The cursor was used with a list other than the one that created it.
    ForeignList {
        /// Identity of the list that created the cursor.
        owner: u64,
        /// Identity of the list passed to the cursor.
        found: u64,
    },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            Self::InvalidRange { from, to, len } => {
                write!(f, "Invalid range [{}, {}) for length {}", from, to, len)
            }
            Self::UnsupportedOperation { operation } => {
                write!(f, "Unsupported operation: {}", operation)
            }
            Self::IllegalState => {
                write!(f, "Cursor has not returned an element to replace")
            }
            Self::ConcurrentModification { expected, found } => write!(
                f,
                "List was structurally modified outside the cursor (expected stamp {}, found {})",
                expected, found
            ),
            Self::ForeignList { owner, found } => write!(
                f,
                "Cursor belongs to list {} but was used with list {}",
                owner, found
            ),
        }
    }
}

impl std::error::Error for ListError {}
