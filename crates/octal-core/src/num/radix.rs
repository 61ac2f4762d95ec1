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

//! Radix descriptions for digit-per-node number storage.
//!
//! A digit list stores one digit per node as a raw `u8`. Whether that value
//! is meaningful depends on the notation the list is interpreted in, which
//! is what `Radix` describes. Only the two notations the workspace converts
//! between are modelled.

/// A numeral system understood by the digit containers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Radix {
    /// Base 8, the storage notation of digit lists.
    Octal,
    /// Base 10, the external text notation.
    Decimal,
}

impl Radix {
    /// Returns the number of distinct digits of this radix.
    #[inline(always)]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
        }
    }

    /// Returns `true` if `digit` is a valid digit value in this radix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use octal_core::num::radix::Radix;
    /// assert!(Radix::Octal.is_digit(7));
    /// assert!(!Radix::Octal.is_digit(8));
    /// assert!(Radix::Decimal.is_digit(9));
    /// ```
    #[inline(always)]
    pub const fn is_digit(self, digit: u8) -> bool {
        (digit as u32) < self.value()
    }

    /// Renders a digit value as its ASCII character, or `None` if the value
    /// is not a digit of this radix.
    #[inline]
    pub fn digit_to_char(self, digit: u8) -> Option<char> {
        if !self.is_digit(digit) {
            return None;
        }
        char::from_digit(digit as u32, self.value())
    }

    /// Parses a single character as a digit of this radix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use octal_core::num::radix::Radix;
    /// assert_eq!(Radix::Octal.char_to_digit('7'), Some(7));
    /// assert_eq!(Radix::Octal.char_to_digit('8'), None);
    /// assert_eq!(Radix::Decimal.char_to_digit('8'), Some(8));
    /// ```
    #[inline]
    pub fn char_to_digit(self, c: char) -> Option<u8> {
        c.to_digit(self.value()).map(|d| d as u8)
    }

    /// Returns the largest digit value of this radix.
    #[inline(always)]
    pub const fn max_digit(self) -> u8 {
        (self.value() - 1) as u8
    }
}

impl From<Radix> for u32 {
    #[inline]
    fn from(radix: Radix) -> Self {
        radix.value()
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Radix::Octal => write!(f, "octal"),
            Radix::Decimal => write!(f, "decimal"),
        }
    }
}
