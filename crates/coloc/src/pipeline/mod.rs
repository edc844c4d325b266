//! High-level analysis pipeline.
//!
//! This module is the internal glue layer that wires together the pipeline
//! stages: ROI resolution -> per-frame (extract -> filter -> binarize ->
//! count) -> aggregation.
//!
//! Algorithmic primitives live in the sibling modules (`mask`, `channels`,
//! `filter`, `binarize`, `coincidence`, `aggregate`). The pipeline layer
//! focuses on stage boundaries, call order, and data flow.

mod result;
mod run;

pub use result::{AnalysisInfo, ColocResult, FrameColoc};

pub(crate) use run::run;
