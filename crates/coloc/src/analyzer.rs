//! High-level analysis API.
//!
//! [`Analyzer`] is the primary entry point for colocalisation analysis.
//! It wraps an [`AnalysisConfig`] and runs the pipeline on validated
//! stacks. Create once, analyze many stacks.

use image::GrayImage;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::pipeline;
use crate::pipeline::ColocResult;
use crate::stack::ImageStack;

/// Primary analysis interface.
///
/// # Examples
///
/// ```
/// use coloc::{Analyzer, ImageStack};
/// use image::RgbImage;
///
/// let stack = ImageStack::from_frames(vec![RgbImage::new(64, 64)]).unwrap();
/// let analyzer = Analyzer::new();
/// let result = analyzer.analyze(&stack, None).unwrap();
/// assert_eq!(result.total_pixels, [0, 0, 0]);
/// ```
#[derive(Debug, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with full config control.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut AnalysisConfig {
        &mut self.config
    }

    /// Run the pipeline on a stack, optionally restricted to a mask ROI.
    ///
    /// `mask` must match the stack's frame dimensions; `None` selects every
    /// pixel. All validation failures abort before any frame is processed
    /// and no partial result is returned.
    pub fn analyze(
        &self,
        stack: &ImageStack,
        mask: Option<&GrayImage>,
    ) -> Result<ColocResult, AnalysisError> {
        pipeline::run(stack, mask, &self.config)
    }
}
