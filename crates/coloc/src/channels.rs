//! Per-frame channel separation.

use image::{GrayImage, RgbImage};

/// Split one frame into its three single-channel intensity planes.
///
/// Plane order matches channel order: red → channel 1, green → channel 2,
/// blue → channel 3. A two-channel acquisition shows up here as a constant
/// third plane, which the binarizer maps to all-off.
pub fn split_channels(frame: &RgbImage) -> [GrayImage; 3] {
    let (w, h) = frame.dimensions();
    let mut planes = [
        GrayImage::new(w, h),
        GrayImage::new(w, h),
        GrayImage::new(w, h),
    ];

    for (x, y, px) in frame.enumerate_pixels() {
        for ch in 0..3 {
            planes[ch].put_pixel(x, y, image::Luma([px[ch]]));
        }
    }

    planes
}
