use dedup_framework::Capacity;

/// How the seen-set is sized for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sizing {
    /// Let the seen-set grow with the number of distinct lines.
    #[default]
    Growable,
    /// Hold at most this many distinct lines; more aborts the run.
    Fixed(usize),
    /// Count the input lines first and bound the seen-set by that count.
    /// Needs a rewindable input.
    PreCounted,
}

/// Settings for [`run_files`](crate::run_files).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub sizing: Sizing,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Resolves the sizing to a capacity, given the pre-counted number of
    /// input lines when one is available.
    pub fn capacity(&self, counted_lines: Option<usize>) -> Capacity {
        match (self.sizing, counted_lines) {
            (Sizing::Growable, _) => Capacity::Unbounded,
            (Sizing::Fixed(limit), _) => Capacity::Bounded(limit),
            (Sizing::PreCounted, Some(count)) => Capacity::Bounded(count),
            (Sizing::PreCounted, None) => Capacity::Unbounded,
        }
    }
}
