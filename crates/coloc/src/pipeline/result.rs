//! Serializable analysis results.

/// Metadata attached to a persisted result. Descriptive only; none of these
/// fields feed back into the computation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisInfo {
    /// Fluorophore labels for channels 1, 2, 3.
    pub channel_labels: [String; 3],
    /// Whether median noise suppression was applied.
    pub filtered: bool,
    /// Whether channel 3 carries real signal (judged from its label).
    pub has_third_channel: bool,
    /// Number of ROI pixels the percentages are normalized by.
    pub roi_pixels: u64,
    /// Number of frames processed.
    pub frame_count: usize,
    /// Frame dimensions [width, height].
    pub image_size: [u32; 2],
}

/// Coincidence counts for one frame.
///
/// Pair order is (1,2), (1,3), (2,3) for both `pixels` and `percent`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameColoc {
    /// Frame index within the stack (0-based).
    pub frame: usize,
    /// ROI pixels "on" in both channels of each pair.
    pub pixels: [u64; 3],
    /// `pixels / roi_pixels * 100` per pair.
    pub percent: [f64; 3],
}

/// Full colocalisation result for one image stack.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ColocResult {
    /// Run metadata.
    pub info: AnalysisInfo,
    /// One row per frame, ordered by frame index.
    pub per_frame: Vec<FrameColoc>,
    /// Per-pair coincidence sums across all frames.
    pub total_pixels: [u64; 3],
    /// `total_pixels / (frame_count * roi_pixels) * 100` per pair.
    pub total_percent: [f64; 3],
}
