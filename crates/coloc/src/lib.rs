//! coloc — pixel-level colocalisation analysis for multi-channel
//! fluorescence image stacks.
//!
//! Quantifies how often two or three fluorescence channels light up at the
//! same pixel, per frame and across a whole z-stack, optionally restricted
//! to a mask-defined region of interest. The pipeline stages are:
//!
//! 1. **Mask** – resolve the ROI pixel set from an optional binary mask
//!    (no mask selects every pixel).
//! 2. **Channels** – split each frame into three single-channel planes.
//! 3. **Filter** – optional 3×3 median noise suppression per plane.
//! 4. **Binarize** – per-plane global Otsu threshold into on/off planes.
//! 5. **Coincidence** – count ROI pixels "on" in both channels of each
//!    pair (1,2), (1,3), (2,3).
//! 6. **Aggregate** – fold per-frame counts into stack totals and
//!    percentages.
//!
//! # Public API
//! - [`Analyzer`] and [`AnalysisConfig`] as primary entry points
//! - [`ImageStack`] as the validated input container
//! - [`ColocResult`] / [`FrameColoc`] / [`AnalysisInfo`] result structures
//! - [`AnalysisError`] for the fail-fast error taxonomy
//!
//! Image decoding and result persistence are deliberately outside this
//! crate; the CLI wires those up around [`Analyzer::analyze`].

mod aggregate;
mod analyzer;
mod binarize;
mod channels;
mod coincidence;
mod config;
mod error;
mod filter;
mod mask;
mod pipeline;
mod stack;

#[cfg(test)]
mod test_utils;

pub use analyzer::Analyzer;
pub use coincidence::PAIR_LABELS;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use mask::{resolve_roi, RoiPixels};
pub use pipeline::{AnalysisInfo, ColocResult, FrameColoc};
pub use stack::ImageStack;
