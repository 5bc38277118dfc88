use crate::error::PipelineError;
use crate::sink::LineSink;
use crate::source::LineSource;
use dedup_framework::{Capacity, SeenSet};
use scanner_framework::Validator;
use tracing::{debug, error, trace};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub invalid: usize,
    pub duplicates: usize,
    pub written: usize,
}

/// Drives a line source into a line sink, keeping only the first occurrence
/// of each valid date-time line.
///
/// Each line is validated, checked against the seen-set, recorded and emitted
/// before the next one is read.
pub struct Pipeline<S, K>
where
    S: LineSource,
    K: LineSink,
{
    source: S,
    sink: K,
    validator: Validator,
    seen: SeenSet,
}

impl<S, K> Pipeline<S, K>
where
    S: LineSource,
    K: LineSink,
{
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            validator: Validator::new(),
            seen: SeenSet::new(),
        }
    }

    /// Replaces the seen-set with an empty one of the given capacity.
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.seen = SeenSet::with_capacity(capacity);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Runs until the source is exhausted.
    ///
    /// Read errors, write errors and a full bounded seen-set abort the run.
    pub fn run(mut self) -> Result<RunSummary, PipelineError> {
        let mut summary = RunSummary::default();
        debug!(capacity = ?self.seen.capacity(), "pipeline started");

        loop {
            let line = match self.source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(source) => {
                    error!(lines_read = summary.lines_read, %source, "read failed");
                    return Err(PipelineError::Read {
                        lines_read: summary.lines_read,
                        source,
                    });
                }
            };
            summary.lines_read += 1;

            if let Err(rejection) = self.validator.check(&line) {
                trace!(line = summary.lines_read, %rejection, "skipping invalid line");
                summary.invalid += 1;
                continue;
            }

            if self.seen.was_seen(&line) {
                trace!(line = summary.lines_read, "skipping duplicate line");
                summary.duplicates += 1;
                continue;
            }
            if let Err(err) = self.seen.record(&line) {
                error!(line = summary.lines_read, %err, "cannot record line");
                return Err(err.into());
            }

            if let Err(source) = self.sink.emit(&line) {
                error!(line = summary.lines_read, %source, "write failed");
                return Err(PipelineError::Write { source });
            }
            summary.written += 1;
        }

        self.sink.finish().map_err(|source| {
            error!(%source, "flush failed");
            PipelineError::Write { source }
        })?;

        debug!(
            lines_read = summary.lines_read,
            invalid = summary.invalid,
            duplicates = summary.duplicates,
            written = summary.written,
            "pipeline finished"
        );
        Ok(summary)
    }
}
