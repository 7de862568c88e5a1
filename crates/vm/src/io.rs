//! Console input for `input`.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated tokens read lazily from a line source.
///
/// Several values may share one line; each `input` consumes one.
pub struct InputTape<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R> InputTape<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> InputTape<R> {
    /// Next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
