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

//! Observers for radix conversion.
//!
//! The lenient converter turns malformed and negative input into an empty
//! list, which on its own is indistinguishable from "no input". Monitors
//! receive every outcome so callers can log or count rejections without
//! switching to the strict API.
//!
//! - `conversion_monitor`: the `ConversionMonitor` trait.
//! - `no_op`: `NoOperationMonitor`, ignores every event.
//! - `log`: `LogMonitor`, prints one line per event.
//! - `composite`: `CompositeConversionMonitor`, fans events out to children.

pub mod composite;
pub mod conversion_monitor;
pub mod log;
pub mod no_op;
