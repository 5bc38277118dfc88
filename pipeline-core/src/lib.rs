//! Pipeline Core
//!
//! Reads lines, keeps the valid ISO 8601 date-times, drops repeats and writes
//! the survivors in input order.

pub mod config;
pub mod error;
pub mod files;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use common_framework::Line;
pub use config::{PipelineConfig, Sizing};
pub use dedup_framework::Capacity;
pub use error::PipelineError;
pub use files::run_files;
pub use pipeline::{Pipeline, RunSummary};
pub use sink::{LineSink, WriterSink};
pub use source::{count_lines, IterSource, LineSource, ReaderSource};
