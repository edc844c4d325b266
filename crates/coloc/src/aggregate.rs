//! Reduction of per-frame counts into whole-stack totals.

/// Per-frame percentage of ROI pixels coincident for each pair.
pub fn frame_percent(counts: [u64; 3], roi_pixels: usize) -> [f64; 3] {
    let n = roi_pixels as f64;
    [
        counts[0] as f64 / n * 100.0,
        counts[1] as f64 / n * 100.0,
        counts[2] as f64 / n * 100.0,
    ]
}

/// Sum per-frame counts into stack-wide totals.
pub fn total_pixels(frame_counts: &[[u64; 3]]) -> [u64; 3] {
    let mut totals = [0u64; 3];
    for counts in frame_counts {
        for (t, c) in totals.iter_mut().zip(counts) {
            *t += c;
        }
    }
    totals
}

/// Stack-wide percentages, normalized by the total number of ROI pixel
/// instances across all frames: `total / (frame_count * roi_pixels) * 100`.
pub fn total_percent(totals: [u64; 3], roi_pixels: usize, frame_count: usize) -> [f64; 3] {
    let n = (frame_count as f64) * (roi_pixels as f64);
    [
        totals[0] as f64 / n * 100.0,
        totals[1] as f64 / n * 100.0,
        totals[2] as f64 / n * 100.0,
    ]
}
