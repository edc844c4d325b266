//! Error taxonomy for the analysis pipeline.
//!
//! Every error is fail-fast: the pipeline validates its inputs before the
//! frame loop starts, and no partial result is ever produced.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The stack contains no frames at all.
    #[error("image stack is empty")]
    EmptyStack,

    /// A frame disagrees with the stack dimensions established by frame 0.
    #[error("frame {index} is {found:?} px, expected {expected:?} px")]
    FrameDimensionMismatch {
        index: usize,
        found: [u32; 2],
        expected: [u32; 2],
    },

    /// The supplied mask does not match the stack's frame dimensions.
    ///
    /// Without this guard, ROI coordinates taken from the mask could index
    /// outside the channel planes.
    #[error("mask is {mask:?} px but frames are {frame:?} px")]
    MaskDimensionMismatch { mask: [u32; 2], frame: [u32; 2] },

    /// The mask selects zero pixels, so percentages would divide by zero.
    #[error("mask selects no pixels; percentages are undefined")]
    EmptyRoi,
}
