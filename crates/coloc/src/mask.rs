//! ROI resolution from an optional binary mask.

use image::GrayImage;

use crate::error::AnalysisError;

/// The resolved region of interest: ordered on-pixel coordinates.
///
/// Computed once before the frame loop and shared read-only across all
/// frames. Coordinates are stored row-major, `[x, y]`, so the counting
/// stage walks memory in the same order the planes are laid out.
#[derive(Debug, Clone)]
pub struct RoiPixels {
    coords: Vec<[u32; 2]>,
}

impl RoiPixels {
    /// Number of selected pixels (always ≥ 1 after resolution).
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Ordered `[x, y]` coordinates of the selected pixels.
    pub fn coords(&self) -> &[[u32; 2]] {
        &self.coords
    }
}

/// Resolve the ROI for a stack of `width` × `height` frames.
///
/// With no mask, every pixel is selected. With a mask, a pixel is selected
/// iff its mask intensity is greater than zero. A mask whose dimensions
/// disagree with the frames is rejected before any coordinates are taken
/// from it, and a mask selecting zero pixels is rejected because the
/// percentage normalization would divide by zero.
pub fn resolve_roi(
    mask: Option<&GrayImage>,
    width: u32,
    height: u32,
) -> Result<RoiPixels, AnalysisError> {
    let coords = match mask {
        None => {
            let mut coords = Vec::with_capacity((width as usize) * (height as usize));
            for y in 0..height {
                for x in 0..width {
                    coords.push([x, y]);
                }
            }
            coords
        }
        Some(mask) => {
            if mask.dimensions() != (width, height) {
                return Err(AnalysisError::MaskDimensionMismatch {
                    mask: [mask.width(), mask.height()],
                    frame: [width, height],
                });
            }
            let mut coords = Vec::new();
            for y in 0..height {
                for x in 0..width {
                    if mask.get_pixel(x, y)[0] > 0 {
                        coords.push([x, y]);
                    }
                }
            }
            coords
        }
    };

    if coords.is_empty() {
        return Err(AnalysisError::EmptyRoi);
    }

    Ok(RoiPixels { coords })
}
