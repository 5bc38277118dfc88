use crate::config::{PipelineConfig, Sizing};
use crate::error::PipelineError;
use crate::pipeline::{Pipeline, RunSummary};
use crate::sink::WriterSink;
use crate::source::{count_lines, ReaderSource};
use std::fs::File;
use std::io::{BufReader, BufWriter, Seek};
use std::path::Path;
use tracing::debug;

/// Filters the file at `input` into the file at `output`.
///
/// The output file is created (or truncated) only after the input has been
/// opened and, with [`Sizing::PreCounted`], counted.
pub fn run_files(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<RunSummary, PipelineError> {
    let file = File::open(input).map_err(|source| PipelineError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let counted = match config.sizing {
        Sizing::PreCounted => {
            let count = count_lines(&mut reader)
                .and_then(|count| reader.rewind().map(|()| count))
                .map_err(|source| PipelineError::Read {
                    lines_read: 0,
                    source,
                })?;
            debug!(count, "pre-counted input lines");
            Some(count)
        }
        Sizing::Growable | Sizing::Fixed(_) => None,
    };

    let writer = File::create(output).map_err(|source| PipelineError::OpenOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Pipeline::new(
        ReaderSource::new(reader),
        WriterSink::new(BufWriter::new(writer)),
    )
    .with_capacity(config.capacity(counted))
    .run()
}
