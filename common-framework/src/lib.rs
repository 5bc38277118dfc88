//! Common Framework
//!
//! Leaf types shared by the scanner, the seen-set and the pipeline.

pub mod line;
pub mod position;

pub use line::Line;
pub use position::Position;
