//! Optional spatial noise suppression before binarisation.

use image::GrayImage;

/// Median-smooth one channel plane.
///
/// `radius` is the window half-width: radius 1 is the standard 3×3 median.
/// Border pixels use imageproc's policy (window coordinates clamped to the
/// image border), which keeps output dimensions identical to the input.
/// Each plane is filtered independently; there is no cross-channel or
/// cross-frame state.
pub fn median_suppress(plane: &GrayImage, radius: u32) -> GrayImage {
    imageproc::filter::median_filter(plane, radius, radius)
}
