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

//! Bitwise combination of two octal digit lists.

use crate::{
    error::ConversionError,
    radix::{octal_digits_of, octal_magnitude},
};
use octal_list::list::DigitList;

/// Returns a fresh list holding the octal digits of `lhs AND rhs`.
///
/// Both operands are read as octal magnitudes; an empty operand is zero. A
/// zero result is the single digit `[0]`. Neither operand is modified.
///
/// # Errors
///
/// Returns `ConversionError::InvalidDigit` if either operand stores a value
/// outside `[0, 7]`. The left operand is checked first.
///
/// # Examples
///
/// ```rust
/// use octal_list::list::DigitList;
/// use octal_number::bitwise::and;
///
/// let ten: DigitList = [1, 2].into_iter().collect(); // 0b1010
/// let six: DigitList = [6].into_iter().collect(); // 0b0110
/// assert_eq!(and(&ten, &six).unwrap().to_vec(), vec![2]);
/// ```
pub fn and(lhs: &DigitList, rhs: &DigitList) -> Result<DigitList, ConversionError> {
    let a = octal_magnitude(lhs)?;
    let b = octal_magnitude(rhs)?;
    octal_digits_of(&(a & b))
}
