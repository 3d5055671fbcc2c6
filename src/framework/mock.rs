//! # Mock Framework
//!
//! Utilities for testing output-producing components in isolation.
//!
//! Create a [`MockSink`], queue expectations with [`MockSink::expect_write`],
//! hand [`MockSink::sink`] to the component under test and finish with
//! [`MockSink::verify`].

use crate::framework::{Sink, SinkError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected `write` call and the response to give it.
struct Expectation {
    text: String,
    response: Result<(), SinkError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    writes: Vec<String>,
}

/// A mock sink with expectation tracking for fluent testing.
///
/// Clones share the same expectation queue, so the handle kept by the test
/// observes writes made through the clone given to the component.
///
/// # Example
/// ```ignore
/// let mut mock = MockSink::new();
/// mock.expect_write("a-c").return_ok();
///
/// let mut joiner = MessageJoiner::new(2, "-", mock.sink());
/// joiner.log(&records)?;
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockSink {
    state: Arc<Mutex<MockState>>,
}

impl MockSink {
    /// Creates a new mock sink with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a sink handle for the component under test.
    pub fn sink(&self) -> MockSink {
        self.clone()
    }

    /// Expects a `write` of exactly `text`.
    pub fn expect_write(&mut self, text: impl Into<String>) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            text: text.into(),
            state: self.state.clone(),
        }
    }

    /// Every text written so far, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

impl Sink for MockSink {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        let mut state = self.state.lock().unwrap();
        state.writes.push(text.to_string());
        match state.expectations.pop_front() {
            Some(expectation) if expectation.text == text => expectation.response,
            Some(expectation) => {
                panic!("Unexpected write: expected {:?}, got {:?}", expectation.text, text)
            }
            None => panic!("Unexpected write with no expectation left: {:?}", text),
        }
    }
}

/// Builder for `write` expectations.
pub struct WriteExpectationBuilder {
    text: String,
    state: Arc<Mutex<MockState>>,
}

impl WriteExpectationBuilder {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to fail with `error`.
    pub fn return_err(self, error: SinkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), SinkError>) {
        self.state.lock().unwrap().expectations.push_back(Expectation {
            text: self.text,
            response,
        });
    }
}
