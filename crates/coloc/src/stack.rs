//! Validated container for a multi-frame, three-channel image stack.

use image::RgbImage;

use crate::error::AnalysisError;

/// An ordered sequence of three-channel frames sharing one geometry.
///
/// Construction validates the stack invariants (at least one frame, all
/// frames the same size), so downstream stages can index planes without
/// re-checking dimensions. Frames are `image::RgbImage`, which guarantees
/// exactly three channels per pixel; two-channel acquisitions are expected
/// to carry an empty (constant) third channel.
#[derive(Debug, Clone)]
pub struct ImageStack {
    frames: Vec<RgbImage>,
    width: u32,
    height: u32,
}

impl ImageStack {
    /// Build a stack from decoded frames.
    ///
    /// Fails with [`AnalysisError::EmptyStack`] when `frames` is empty and
    /// with [`AnalysisError::FrameDimensionMismatch`] on the first frame
    /// whose size disagrees with frame 0.
    pub fn from_frames(frames: Vec<RgbImage>) -> Result<Self, AnalysisError> {
        let first = frames.first().ok_or(AnalysisError::EmptyStack)?;
        let (width, height) = first.dimensions();

        for (index, frame) in frames.iter().enumerate() {
            if frame.dimensions() != (width, height) {
                return Err(AnalysisError::FrameDimensionMismatch {
                    index,
                    found: [frame.width(), frame.height()],
                    expected: [width, height],
                });
            }
        }

        Ok(Self {
            frames,
            width,
            height,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames (always ≥ 1).
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Ordered frame slice.
    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }
}
