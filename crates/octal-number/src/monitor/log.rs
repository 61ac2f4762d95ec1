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

use crate::{error::ConversionError, monitor::conversion_monitor::ConversionMonitor};
use octal_list::list::DigitList;

/// A monitor that prints one aligned line per conversion.
///
/// Successful conversions go to stdout, rejections to stderr. A header is
/// printed before the first event.
#[derive(Debug, Clone, Default)]
pub struct LogMonitor {
    converted: u64,
    rejected: u64,
    header_printed: bool,
}

impl LogMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful conversions seen so far.
    #[inline]
    pub fn converted(&self) -> u64 {
        self.converted
    }

    /// Number of rejected inputs seen so far.
    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    #[inline(always)]
    fn ensure_header(&mut self) {
        if self.header_printed {
            return;
        }
        println!("{:<6} | {:<8} | {:<24} | {}", "Seq", "Status", "Input", "Detail");
        println!("{}", "-".repeat(72));
        self.header_printed = true;
    }

    #[inline(always)]
    fn sequence(&self) -> u64 {
        self.converted + self.rejected
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(converted: {}, rejected: {})",
            self.converted, self.rejected
        )
    }
}

impl ConversionMonitor for LogMonitor {
    fn on_converted(&mut self, input: &str, digits: &DigitList) {
        self.ensure_header();
        self.converted += 1;
        println!(
            "{:<6} | {:<8} | {:<24} | octal {} ({} digits)",
            self.sequence(),
            "ok",
            input,
            digits,
            digits.len()
        );
    }

    fn on_rejected(&mut self, input: &str, error: &ConversionError) {
        self.ensure_header();
        self.rejected += 1;
        eprintln!(
            "{:<6} | {:<8} | {:<24} | {}",
            self.sequence(),
            "rejected",
            input,
            error
        );
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
