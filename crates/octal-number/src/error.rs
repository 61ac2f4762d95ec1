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

//! Errors reported while converting between digit lists and numeric text.

use octal_core::num::radix::Radix;

/// The error type for radix conversion and bitwise combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The text is not an integer literal in the expected radix.
    MalformedLiteral {
        /// The offending text, after trimming.
        literal: String,
        /// The radix the text was parsed in.
        radix: Radix,
    },
    /// The literal denotes a negative integer, which cannot be stored.
    NegativeValue {
        /// The offending text, after trimming.
        literal: String,
    },
    /// A stored digit lies outside the digit range of the radix.
    InvalidDigit {
        /// Position of the digit within its list.
        position: usize,
        /// The stored value.
        value: u8,
        /// The radix the digit was interpreted in.
        radix: Radix,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLiteral { literal, radix } => {
                write!(f, "Malformed {} literal '{}'", radix, literal)
            }
            Self::NegativeValue { literal } => {
                write!(f, "Negative value '{}' cannot be represented", literal)
            }
            Self::InvalidDigit {
                position,
                value,
                radix,
            } => write!(
                f,
                "Digit {} at position {} is not a valid {} digit",
                value, position, radix
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ConversionError::MalformedLiteral {
            literal: "12a".to_owned(),
            radix: Radix::Decimal,
        };
        assert_eq!(e.to_string(), "Malformed decimal literal '12a'");

        let e = ConversionError::NegativeValue {
            literal: "-5".to_owned(),
        };
        assert_eq!(e.to_string(), "Negative value '-5' cannot be represented");

        let e = ConversionError::InvalidDigit {
            position: 2,
            value: 9,
            radix: Radix::Octal,
        };
        assert_eq!(
            e.to_string(),
            "Digit 9 at position 2 is not a valid octal digit"
        );
    }
}
