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

//! Conversion between decimal text and octal digit lists.
//!
//! All multi-precision arithmetic is delegated to `num-bigint`; this module
//! only drives it from and to the one-digit-per-node representation:
//!
//! - decimal text -> `BigInt` -> base 8 text -> one node per digit character,
//! - list digits -> base 8 literal -> `BigUint` -> base 10 text.
//!
//! Two flavours of parsing exist. `try_from_decimal` reports malformed and
//! negative input as errors. `from_decimal` keeps the lenient contract of
//! returning an empty list for such input, optionally reporting the
//! rejection to a `ConversionMonitor`.

use crate::{
    error::ConversionError,
    monitor::{conversion_monitor::ConversionMonitor, no_op::NoOperationMonitor},
};
use num_bigint::{BigInt, BigUint};
use num_traits::{Num, Signed, Zero};
use octal_core::num::radix::Radix;
use octal_list::list::DigitList;

/// Parses a decimal string into an octal digit list, leniently.
///
/// Surrounding whitespace is trimmed. Empty, malformed and negative input
/// all yield an empty list, so callers must treat unexpected emptiness as
/// "no number".
///
/// # Examples
///
/// ```rust
/// use octal_number::radix::{from_decimal, to_decimal};
///
/// let digits = from_decimal("83");
/// assert_eq!(digits.to_vec(), vec![1, 2, 3]);
/// assert_eq!(to_decimal(&digits).unwrap(), "83");
/// assert!(from_decimal("-5").is_empty());
/// ```
#[inline]
pub fn from_decimal(text: &str) -> DigitList {
    from_decimal_monitored(text, &mut NoOperationMonitor::new())
}

/// Same as `from_decimal`, reporting every non-empty input to `monitor`.
pub fn from_decimal_monitored<M>(text: &str, monitor: &mut M) -> DigitList
where
    M: ConversionMonitor + ?Sized,
{
    let literal = text.trim();
    if literal.is_empty() {
        return DigitList::new();
    }
    match try_from_decimal(literal) {
        Ok(digits) => {
            monitor.on_converted(literal, &digits);
            digits
        }
        Err(e) => {
            monitor.on_rejected(literal, &e);
            DigitList::new()
        }
    }
}

/// Parses a decimal string into an octal digit list, strictly.
///
/// Surrounding whitespace is trimmed and empty input yields an empty list.
/// An optional leading `+` is accepted; `-0` is zero.
///
/// # Errors
///
/// - `ConversionError::MalformedLiteral` if the text is not a base 10 integer.
/// - `ConversionError::NegativeValue` if it denotes a negative integer.
pub fn try_from_decimal(text: &str) -> Result<DigitList, ConversionError> {
    let literal = text.trim();
    if literal.is_empty() {
        return Ok(DigitList::new());
    }
    let value = parse_decimal(literal)?;
    if value.is_negative() {
        return Err(ConversionError::NegativeValue {
            literal: literal.to_owned(),
        });
    }
    digits_from_text(&value.magnitude().to_str_radix(8), Radix::Octal)
}

/// Builds a list from an octal literal, one node per character.
///
/// # Errors
///
/// Returns `ConversionError::MalformedLiteral` if any character is not an
/// octal digit.
#[inline]
pub fn from_octal_digits(text: &str) -> Result<DigitList, ConversionError> {
    digits_from_text(text.trim(), Radix::Octal)
}

/// Renders the number held in `list` in decimal. An empty list is `"0"`.
///
/// # Errors
///
/// Returns `ConversionError::InvalidDigit` if a stored value is not an
/// octal digit (possible after `DigitList::set`).
pub fn to_decimal(list: &DigitList) -> Result<String, ConversionError> {
    if list.is_empty() {
        return Ok("0".to_owned());
    }
    Ok(octal_magnitude(list)?.to_str_radix(10))
}

/// Re-expresses the number held in `list` digit by digit in base 10.
///
/// The result holds the decimal digit characters of `to_decimal(list)` as
/// values in `[0, 9]`; `[1, 2, 3]` (octal 123) becomes `[8, 3]`.
///
/// # Errors
///
/// Same as `to_decimal`.
pub fn rebase_to_decimal_digits(list: &DigitList) -> Result<DigitList, ConversionError> {
    digits_from_text(&to_decimal(list)?, Radix::Decimal)
}

/// Interprets the digits of `list` as an octal magnitude. Empty is zero.
pub(crate) fn octal_magnitude(list: &DigitList) -> Result<BigUint, ConversionError> {
    if list.is_empty() {
        return Ok(BigUint::zero());
    }
    let literal = render_digits(list, Radix::Octal)?;
    BigUint::from_str_radix(&literal, Radix::Octal.value()).map_err(|_| {
        ConversionError::MalformedLiteral {
            literal,
            radix: Radix::Octal,
        }
    })
}

/// Renders a magnitude as a fresh octal digit list.
#[inline]
pub(crate) fn octal_digits_of(magnitude: &BigUint) -> Result<DigitList, ConversionError> {
    digits_from_text(&magnitude.to_str_radix(Radix::Octal.value()), Radix::Octal)
}

fn parse_decimal(literal: &str) -> Result<BigInt, ConversionError> {
    let malformed = || ConversionError::MalformedLiteral {
        literal: literal.to_owned(),
        radix: Radix::Decimal,
    };
    // num-bigint also accepts `_` separators; plain literals only.
    let unsigned = literal
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(literal);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    BigInt::from_str_radix(literal, Radix::Decimal.value()).map_err(|_| malformed())
}

fn render_digits(list: &DigitList, radix: Radix) -> Result<String, ConversionError> {
    let mut literal = String::with_capacity(list.len());
    for (position, value) in list.iter().enumerate() {
        let c = radix
            .digit_to_char(value)
            .ok_or(ConversionError::InvalidDigit {
                position,
                value,
                radix,
            })?;
        literal.push(c);
    }
    Ok(literal)
}

fn digits_from_text(text: &str, radix: Radix) -> Result<DigitList, ConversionError> {
    let mut list = DigitList::with_capacity(text.len());
    for c in text.chars() {
        let digit = radix
            .char_to_digit(c)
            .ok_or_else(|| ConversionError::MalformedLiteral {
                literal: text.to_owned(),
                radix,
            })?;
        list.push(digit);
    }
    Ok(list)
}
