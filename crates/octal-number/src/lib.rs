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

//! # Octal Number
//!
//! Numeric operations on octal digit lists: conversion from and to decimal
//! text, bitwise AND, and loading/saving through a text source or sink.
//!
//! ## Architecture
//!
//! * **`radix`**: Decimal text <-> octal `DigitList`, and re-expressing a list
//!   digit by digit in base 10. Arbitrary precision is provided by `num-bigint`.
//! * **`bitwise`**: `and`, the bitwise AND of two lists' magnitudes.
//! * **`loading`**: `NumberLoader`, reading the first line of a file or
//!   reader and writing decimal text back.
//! * **`monitor`**: `ConversionMonitor` observers (no-op, logging, composite)
//!   that see every accepted and rejected input.
//! * **`error`**: `ConversionError`.
//!
//! ## Example
//!
//! ```rust
//! use octal_number::{bitwise, radix};
//!
//! let a = radix::from_decimal("10");
//! let b = radix::from_decimal("6");
//! let c = bitwise::and(&a, &b).unwrap();
//! assert_eq!(radix::to_decimal(&c).unwrap(), "2");
//! ```

pub mod bitwise;
pub mod error;
pub mod loading;
pub mod monitor;
pub mod radix;

pub use error::ConversionError;
pub use loading::{NumberLoader, NumberLoaderError};
