use std::collections::VecDeque;

use crate::interpreter::value::core::Value;

/// A bounded log of past calculations.
///
/// Each successful evaluation is recorded as a `"<expression> = <result>"`
/// line. The log holds at most `capacity` entries; recording into a full
/// history evicts the oldest entry first. Failed evaluations are never
/// recorded, so the history only ever reflects state the calculator
/// actually reached.
#[derive(Debug, Clone)]
pub struct History {
    entries:  VecDeque<String>,
    capacity: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` entries.
    ///
    /// # Example
    /// ```
    /// use safecalc::history::History;
    ///
    /// let history = History::new(10);
    /// assert!(history.is_empty());
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity),
               capacity }
    }

    /// Records a calculation, evicting the oldest entry when full.
    ///
    /// A capacity of zero keeps nothing.
    ///
    /// # Example
    /// ```
    /// use safecalc::{history::History, interpreter::value::core::Value};
    ///
    /// let mut history = History::new(2);
    /// history.record("3 + 4", &Value::Integer(7));
    /// history.record("10 / 4", &Value::Real(2.5));
    /// history.record("2 ** 10", &Value::Integer(1024));
    ///
    /// // The oldest entry was evicted to stay within capacity.
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.iter().next().unwrap(), "10 / 4 = 2.5");
    /// assert_eq!(history.latest().unwrap(), "2 ** 10 = 1024");
    /// ```
    pub fn record(&mut self, expression: &str, result: &Value) {
        while self.entries.len() >= self.capacity {
            if self.entries.pop_front().is_none() {
                return;
            }
            log::debug!("history full, evicted oldest entry");
        }
        self.entries.push_back(format!("{expression} = {result}"));
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no calculations have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}
