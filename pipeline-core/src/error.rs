use dedup_framework::SeenSetError;
use std::io;
use std::path::PathBuf;

/// Failures that abort a run.
///
/// Invalid and duplicate lines are not errors; they are skipped and counted
/// in [`RunSummary`](crate::RunSummary).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("error opening input file {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error opening output file {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("did not reach end of input (failed after {lines_read} lines)")]
    Read {
        lines_read: usize,
        #[source]
        source: io::Error,
    },

    #[error("error writing output")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Capacity(#[from] SeenSetError),
}
