//! Automatic global binarisation of channel planes.

use image::GrayImage;

/// Binarize one channel plane with a global Otsu threshold.
///
/// The returned plane holds 255 ("on") where the input intensity is
/// strictly greater than the computed level and 0 otherwise. The threshold
/// is computed independently per plane, so each channel of each frame gets
/// its own level without user-supplied parameters.
///
/// Convention: a uniform-intensity plane (no foreground/background
/// separation exists) binarizes to all-off. This covers the constant third
/// plane of a two-channel acquisition.
pub fn binarize(plane: &GrayImage) -> GrayImage {
    let (w, h) = plane.dimensions();
    let mut out = GrayImage::new(w, h);

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for p in plane.pixels() {
        min = min.min(p[0]);
        max = max.max(p[0]);
    }
    if min == max {
        return out;
    }

    let level = imageproc::contrast::otsu_level(plane);
    for (x, y, p) in plane.enumerate_pixels() {
        if p[0] > level {
            out.put_pixel(x, y, image::Luma([255]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn bright_block_separates_from_dark_background() {
        let mut plane = GrayImage::new(4, 4);
        for y in 0..2 {
            for x in 0..2 {
                plane.put_pixel(x, y, Luma([200]));
            }
        }

        let bin = binarize(&plane);
        let on = bin.pixels().filter(|p| p[0] > 0).count();
        assert_eq!(on, 4);
        assert_eq!(bin.get_pixel(0, 0)[0], 255);
        assert_eq!(bin.get_pixel(3, 3)[0], 0);
    }

    #[test]
    fn uniform_plane_is_all_off() {
        for v in [0u8, 128, 255] {
            let plane = GrayImage::from_pixel(5, 5, Luma([v]));
            let bin = binarize(&plane);
            assert!(bin.pixels().all(|p| p[0] == 0), "uniform {v} not all-off");
        }
    }

    #[test]
    fn output_keeps_input_dimensions() {
        let plane = GrayImage::new(7, 3);
        assert_eq!(binarize(&plane).dimensions(), (7, 3));
    }
}
