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

//! Text source and sink for octal digit lists.
//!
//! A number is stored on disk as a single decimal line. `NumberLoader` reads
//! the first line of any `BufRead`, reader, file path or string slice, trims
//! it and converts it into a `DigitList`; saving writes the decimal string
//! back verbatim, without a trailing newline.
//!
//! By default the loader is lenient and mirrors `radix::from_decimal`:
//! malformed or negative input produces an empty list. A strict loader turns
//! those cases into `NumberLoaderError::Conversion`. Either way, a failed
//! load produces no list and a failed save leaves the list untouched.

use crate::{
    error::ConversionError,
    monitor::{conversion_monitor::ConversionMonitor, no_op::NoOperationMonitor},
    radix::{from_decimal_monitored, to_decimal, try_from_decimal},
};
use octal_list::list::DigitList;
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read, Write},
    path::Path,
};

/// The error type for loading and saving numbers.
#[derive(Debug)]
pub enum NumberLoaderError {
    /// An I/O error occurred while reading or writing.
    Io(std::io::Error),
    /// The text could not be converted (strict loading, or saving a list
    /// holding a non-octal digit).
    Conversion(ConversionError),
}

impl Display for NumberLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Conversion(e) => write!(f, "Conversion error: {}", e),
        }
    }
}

impl std::error::Error for NumberLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Conversion(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for NumberLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConversionError> for NumberLoaderError {
    fn from(e: ConversionError) -> Self {
        Self::Conversion(e)
    }
}

/// A configurable loader and saver for decimal number files.
///
/// # Configuration
/// * `strict`: If true, malformed or negative input is an error instead of
///   an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberLoader {
    strict: bool,
}

impl NumberLoader {
    /// Creates a new lenient `NumberLoader`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether rejected input is reported as an error.
    #[inline]
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Returns `true` if rejected input is reported as an error.
    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Loads a number from the first line of a `BufRead`.
    #[inline]
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<DigitList, NumberLoaderError> {
        self.from_bufread_monitored(rdr, &mut NoOperationMonitor::new())
    }

    /// Loads a number from the first line of a `BufRead`, reporting the
    /// conversion outcome to `monitor`.
    pub fn from_bufread_monitored<R, M>(
        &self,
        mut rdr: R,
        monitor: &mut M,
    ) -> Result<DigitList, NumberLoaderError>
    where
        R: BufRead,
        M: ConversionMonitor + ?Sized,
    {
        let mut line = String::new();
        rdr.read_line(&mut line)?;
        let literal = line.trim();

        if !self.strict {
            return Ok(from_decimal_monitored(literal, monitor));
        }

        match try_from_decimal(literal) {
            Ok(digits) => {
                if !digits.is_empty() {
                    monitor.on_converted(literal, &digits);
                }
                Ok(digits)
            }
            Err(e) => {
                monitor.on_rejected(literal, &e);
                Err(e.into())
            }
        }
    }

    /// Loads a number from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<DigitList, NumberLoaderError> {
        self.from_path_monitored(path, &mut NoOperationMonitor::new())
    }

    /// Loads a number from a file path, reporting the conversion outcome to
    /// `monitor`. An I/O failure is not reported.
    pub fn from_path_monitored<P, M>(
        &self,
        path: P,
        monitor: &mut M,
    ) -> Result<DigitList, NumberLoaderError>
    where
        P: AsRef<Path>,
        M: ConversionMonitor + ?Sized,
    {
        let file = File::open(path)?;
        self.from_bufread_monitored(BufReader::new(file), monitor)
    }

    /// Loads a number from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<DigitList, NumberLoaderError> {
        self.from_reader_monitored(r, &mut NoOperationMonitor::new())
    }

    /// Loads a number from a generic reader, reporting the conversion
    /// outcome to `monitor`.
    #[inline]
    pub fn from_reader_monitored<R, M>(
        &self,
        r: R,
        monitor: &mut M,
    ) -> Result<DigitList, NumberLoaderError>
    where
        R: Read,
        M: ConversionMonitor + ?Sized,
    {
        self.from_bufread_monitored(BufReader::new(r), monitor)
    }

    /// Loads a number from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<DigitList, NumberLoaderError> {
        self.from_str_monitored(s, &mut NoOperationMonitor::new())
    }

    /// Loads a number from a string slice, reporting the conversion outcome
    /// to `monitor`.
    #[inline]
    pub fn from_str_monitored<M>(
        &self,
        s: &str,
        monitor: &mut M,
    ) -> Result<DigitList, NumberLoaderError>
    where
        M: ConversionMonitor + ?Sized,
    {
        self.from_bufread_monitored(s.as_bytes(), monitor)
    }

    /// Writes the decimal form of `list` to `w`.
    ///
    /// The decimal string is computed before anything is written, so a
    /// conversion failure leaves `w` untouched.
    pub fn save_to_writer<W: Write>(
        &self,
        list: &DigitList,
        mut w: W,
    ) -> Result<(), NumberLoaderError> {
        let text = to_decimal(list)?;
        w.write_all(text.as_bytes())?;
        w.flush()?;
        Ok(())
    }

    /// Writes the decimal form of `list` to the file at `path`, replacing
    /// its contents.
    pub fn save_to_path<P: AsRef<Path>>(
        &self,
        list: &DigitList,
        path: P,
    ) -> Result<(), NumberLoaderError> {
        let text = to_decimal(list)?;
        let mut file = File::create(path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::log::LogMonitor;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "octal-number-{}-{}.txt",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_reads_first_line_trimmed() {
        let loader = NumberLoader::new();
        let list = loader.from_str("  83  \n999\n").expect("Failed to load");
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_source_gives_empty_list() {
        let loader = NumberLoader::new();
        assert!(loader.from_str("").unwrap().is_empty());
        assert!(loader.strict(true).from_str("\n42").unwrap().is_empty());
    }

    #[test]
    fn test_lenient_loader_swallows_rejections() {
        let loader = NumberLoader::new();
        assert!(!loader.is_strict());
        assert!(loader.from_str("-5").unwrap().is_empty());
        assert!(loader.from_str("abc").unwrap().is_empty());
    }

    #[test]
    fn test_strict_loader_reports_rejections() {
        let loader = NumberLoader::new().strict(true);
        assert!(loader.is_strict());

        match loader.from_str("-5") {
            Err(NumberLoaderError::Conversion(ConversionError::NegativeValue { literal })) => {
                assert_eq!(literal, "-5");
            }
            other => panic!("Expected NegativeValue, got {:?}", other),
        }

        match loader.from_str("12x") {
            Err(NumberLoaderError::Conversion(ConversionError::MalformedLiteral { .. })) => {}
            other => panic!("Expected MalformedLiteral, got {:?}", other),
        }
    }

    #[test]
    fn test_monitored_load_counts() {
        let mut monitor = LogMonitor::new();
        let loader = NumberLoader::new();
        loader
            .from_bufread_monitored("83".as_bytes(), &mut monitor)
            .unwrap();
        loader
            .from_bufread_monitored("-1".as_bytes(), &mut monitor)
            .unwrap();
        assert_eq!(monitor.converted(), 1);
        assert_eq!(monitor.rejected(), 1);
    }

    #[test]
    fn test_every_source_forwards_to_monitor() {
        let path = scratch_file("monitored");
        std::fs::write(&path, "8\n").unwrap();

        let mut monitor = LogMonitor::new();
        let loader = NumberLoader::new().strict(true);

        let from_path = loader.from_path_monitored(&path, &mut monitor).unwrap();
        let from_reader = loader
            .from_reader_monitored(&b"8"[..], &mut monitor)
            .unwrap();
        let from_str = loader.from_str_monitored("8", &mut monitor).unwrap();
        assert!(loader.from_str_monitored("x", &mut monitor).is_err());

        assert_eq!(from_path.to_vec(), vec![1, 0]);
        assert_eq!(from_reader, from_path);
        assert_eq!(from_str, from_path);
        assert_eq!(monitor.converted(), 3);
        assert_eq!(monitor.rejected(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_error_display() {
        let e = NumberLoaderError::from(std::io::Error::other("boom"));
        assert_eq!(e.to_string(), "I/O error: boom");
        let e = NumberLoaderError::from(ConversionError::NegativeValue {
            literal: "-1".to_string(),
        });
        assert!(e.to_string().starts_with("Conversion error: "));
    }

    #[test]
    fn test_save_to_writer_is_verbatim() {
        let loader = NumberLoader::new();
        let list = loader.from_str("1234567890").unwrap();
        let mut out = Vec::new();
        loader.save_to_writer(&list, &mut out).unwrap();
        assert_eq!(out, b"1234567890");

        let mut out = Vec::new();
        loader.save_to_writer(&DigitList::new(), &mut out).unwrap();
        assert_eq!(out, b"0");
    }

    #[test]
    fn test_save_rejects_invalid_digits_without_writing() {
        let loader = NumberLoader::new();
        let list: DigitList = [1, 9].into_iter().collect();
        let mut out = Vec::new();
        let res = loader.save_to_writer(&list, &mut out);
        assert!(matches!(res, Err(NumberLoaderError::Conversion(_))));
        assert!(out.is_empty());
        assert_eq!(list.to_vec(), vec![1, 9]);
    }

    #[test]
    fn test_path_round_trip() {
        let path = scratch_file("round-trip");
        let loader = NumberLoader::new();
        let list = loader.from_str("18446744073709551616").unwrap();

        loader.save_to_path(&list, &path).unwrap();
        let reloaded = loader.from_path(&path).unwrap();
        assert_eq!(reloaded, list);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "18446744073709551616"
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch_file("does-not-exist");
        std::fs::remove_file(&path).ok();
        let res = NumberLoader::new().from_path(&path);
        assert!(matches!(res, Err(NumberLoaderError::Io(_))));
        assert!(res.unwrap_err().to_string().starts_with("I/O error"));
    }
}
