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

//! # Octal List
//!
//! A doubly linked list of digits, built for storing a non-negative integer
//! one octal digit per node.
//!
//! ## Architecture
//!
//! * **`index`**: `NodeIndex`, the typed handle of a node slot.
//! * **`node`**: `DigitNode`, one digit plus `prev`/`next` handles.
//! * **`list`**: `DigitList`, the arena-backed list with positional access,
//!   search, bulk operations, sub-lists, swapping, bubble sorting and rotation.
//! * **`iter`**: Borrowing (`Iter`) and owning (`IntoIter`) double-ended iterators.
//! * **`cursor`**: `DigitCursor`, a detached bidirectional cursor that fails
//!   fast once the list is structurally modified behind its back.
//! * **`error`**: `ListError`.
//!
//! ## Design Philosophy
//!
//! 1.  **No aliasing pointers**: nodes live in a `Vec` arena and link to each
//!     other through typed handles; freed slots are recycled.
//! 2.  **Shorter walk**: positional access starts from the closer end.
//! 3.  **Explicit errors**: out-of-range access returns `ListError` instead of
//!     panicking.

pub mod cursor;
pub mod error;
pub mod index;
pub mod iter;
pub mod list;
pub mod node;

pub use cursor::DigitCursor;
pub use error::ListError;
pub use list::DigitList;
