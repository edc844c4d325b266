//! Pairwise coincidence counting over the ROI.

use image::GrayImage;

use crate::mask::RoiPixels;

/// Unordered channel-pair order used throughout the crate:
/// index 0 = (1,2), index 1 = (1,3), index 2 = (2,3).
pub const PAIR_LABELS: [&str; 3] = ["1-2", "1-3", "2-3"];

/// Count, per channel pair, the ROI pixels that are "on" in both planes.
///
/// Walks the ROI coordinate list exactly once and reads the three binary
/// values at each coordinate, so the cost is O(ROI size) per frame rather
/// than O(image size). Planes must have the frame dimensions the ROI was
/// resolved against; this is guaranteed by the pipeline.
pub fn count_coincidences(roi: &RoiPixels, planes: &[GrayImage; 3]) -> [u64; 3] {
    let mut counts = [0u64; 3];

    for &[x, y] in roi.coords() {
        let on1 = planes[0].get_pixel(x, y)[0] > 0;
        let on2 = planes[1].get_pixel(x, y)[0] > 0;
        let on3 = planes[2].get_pixel(x, y)[0] > 0;

        if on1 && on2 {
            counts[0] += 1;
        }
        if on1 && on3 {
            counts[1] += 1;
        }
        if on2 && on3 {
            counts[2] += 1;
        }
    }

    counts
}
