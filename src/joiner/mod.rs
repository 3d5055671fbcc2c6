//! Level-filtered message joining.
//!
//! A [`MessageJoiner`] keeps the records at or above its minimum level, joins
//! their text with its separator and hands the result to a [`Sink`].

pub mod config;
pub mod error;

pub use config::*;
pub use error::*;

use crate::framework::Sink;
use crate::model::LogRecord;
use tracing::{debug, instrument, warn};

/// Filters, joins and forwards log records to a sink.
///
/// The configuration is fixed at construction; there is no way to change it
/// on a live joiner.
pub struct MessageJoiner<S: Sink> {
    config: JoinerConfig,
    sink: S,
}

impl<S: Sink> MessageJoiner<S> {
    /// Creates a joiner with the given threshold and separator.
    pub fn new(min_level: i64, separator: impl Into<String>, sink: S) -> Self {
        Self::from_config(JoinerConfig::new(min_level, separator), sink)
    }

    pub fn from_config(config: JoinerConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &JoinerConfig {
        &self.config
    }

    /// Joins the text of every record with `level >= min_level`, in input order.
    ///
    /// Returns the empty string when no record passes.
    pub fn join(&self, records: &[LogRecord]) -> String {
        records
            .iter()
            .filter(|record| record.level >= self.config.min_level)
            .map(|record| record.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }

    /// Joins `records` and writes the result to the sink.
    ///
    /// The sink is written exactly once per call, even when nothing passes
    /// the filter.
    #[instrument(skip_all, fields(min_level = self.config.min_level, records = records.len()))]
    pub fn log(&mut self, records: &[LogRecord]) -> Result<(), JoinerError> {
        let joined = self.join(records);
        debug!(len = joined.len(), "Writing joined output");

        self.sink.write(&joined).map_err(|e| {
            warn!(error = %e, "Sink write failed");
            JoinerError::from(e)
        })
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
