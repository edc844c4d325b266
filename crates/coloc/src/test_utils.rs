//! Shared test utilities for image-based unit tests.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Render a frame with a bright `block`×`block` top-left square in each
/// channel selected by `channels_on`; everything else is zero.
pub(crate) fn block_frame(w: u32, h: u32, block: u32, channels_on: [bool; 3]) -> RgbImage {
    let mut frame = RgbImage::new(w, h);
    for y in 0..block.min(h) {
        for x in 0..block.min(w) {
            let mut px = [0u8; 3];
            for ch in 0..3 {
                if channels_on[ch] {
                    px[ch] = 200;
                }
            }
            frame.put_pixel(x, y, Rgb(px));
        }
    }
    frame
}

/// A mask that selects every pixel.
pub(crate) fn solid_mask(w: u32, h: u32) -> GrayImage {
    GrayImage::from_pixel(w, h, Luma([255]))
}

/// Build a 0/255 plane from a per-pixel predicate.
pub(crate) fn binary_plane(w: u32, h: u32, on: impl Fn(u32, u32) -> bool) -> GrayImage {
    let mut plane = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            if on(x, y) {
                plane.put_pixel(x, y, Luma([255]));
            }
        }
    }
    plane
}
