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

//! Fan-out monitor forwarding every event to its children in insertion order.

use crate::{error::ConversionError, monitor::conversion_monitor::ConversionMonitor};
use octal_list::list::DigitList;

/// A monitor that aggregates several monitors and forwards events to all of them.
pub struct CompositeConversionMonitor<'a> {
    monitors: Vec<Box<dyn ConversionMonitor + 'a>>,
}

impl Default for CompositeConversionMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeConversionMonitor<'a> {
    /// Creates a new empty `CompositeConversionMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ConversionMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the child monitors.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn ConversionMonitor + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn ConversionMonitor + 'a>> for CompositeConversionMonitor<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn ConversionMonitor + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for CompositeConversionMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl ConversionMonitor for CompositeConversionMonitor<'_> {
    fn on_converted(&mut self, input: &str, digits: &DigitList) {
        for m in self.monitors.iter_mut() {
            m.on_converted(input, digits);
        }
    }

    fn on_rejected(&mut self, input: &str, error: &ConversionError) {
        for m in self.monitors.iter_mut() {
            m.on_rejected(input, error);
        }
    }

    fn name(&self) -> &str {
        "CompositeConversionMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recording {
        id: usize,
        log: Rc<RefCell<Vec<(usize, &'static str)>>>,
    }

    impl ConversionMonitor for Recording {
        fn on_converted(&mut self, _input: &str, _digits: &DigitList) {
            self.log.borrow_mut().push((self.id, "converted"));
        }

        fn on_rejected(&mut self, _input: &str, _error: &ConversionError) {
            self.log.borrow_mut().push((self.id, "rejected"));
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    #[test]
    fn test_forwards_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeConversionMonitor::new();
        composite.add_monitor(Recording {
            id: 0,
            log: log.clone(),
        });
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor(Recording {
            id: 1,
            log: log.clone(),
        });
        assert_eq!(composite.len(), 3);

        composite.on_converted("1", &DigitList::new());
        composite.on_rejected(
            "-1",
            &ConversionError::NegativeValue {
                literal: "-1".to_owned(),
            },
        );

        assert_eq!(
            *log.borrow(),
            vec![
                (0, "converted"),
                (1, "converted"),
                (0, "rejected"),
                (1, "rejected")
            ]
        );
    }

    #[test]
    fn test_empty_composite_is_harmless() {
        let mut composite = CompositeConversionMonitor::default();
        assert!(composite.is_empty());
        composite.on_converted("1", &DigitList::new());
        assert_eq!(format!("{:?}", composite), "[]");
    }
}
