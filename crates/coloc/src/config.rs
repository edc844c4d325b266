//! Analysis configuration.

/// Top-level analysis configuration.
///
/// All fields have working defaults; construct with
/// `AnalysisConfig::default()` and override as needed.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisConfig {
    /// Fluorophore labels for channels 1, 2, 3.
    ///
    /// Descriptive only — labels never influence the computation. A third
    /// label that is empty or `"none"` (case-insensitive) marks the third
    /// channel as absent in the result metadata.
    pub channel_labels: [String; 3],
    /// Apply median noise suppression to each channel plane before
    /// binarisation.
    pub median_filter: bool,
    /// Median window half-width in pixels; 1 is the standard 3×3 window.
    /// Ignored when `median_filter` is false.
    pub median_radius: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            channel_labels: [
                "channel1".to_string(),
                "channel2".to_string(),
                "channel3".to_string(),
            ],
            median_filter: false,
            median_radius: 1,
        }
    }
}

impl AnalysisConfig {
    /// Whether the third channel carries real signal, judged from its label.
    pub fn has_third_channel(&self) -> bool {
        let label = self.channel_labels[2].trim();
        !label.is_empty() && !label.eq_ignore_ascii_case("none")
    }
}
