//! Top-level pipeline orchestrator: resolve ROI → per-frame loop → aggregate.

use image::{GrayImage, RgbImage};

use crate::aggregate::{frame_percent, total_percent, total_pixels};
use crate::binarize::binarize;
use crate::channels::split_channels;
use crate::coincidence::count_coincidences;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::filter::median_suppress;
use crate::mask::{resolve_roi, RoiPixels};
use crate::stack::ImageStack;

use super::result::{AnalysisInfo, ColocResult, FrameColoc};

/// Extract → filter → binarize → count for one frame.
///
/// Pure given the shared ROI: no state survives the call, which is what
/// allows the frame loop to run in parallel under the `rayon` feature.
fn process_frame(
    index: usize,
    frame: &RgbImage,
    roi: &RoiPixels,
    config: &AnalysisConfig,
) -> FrameColoc {
    let mut planes = split_channels(frame);

    if config.median_filter {
        for plane in &mut planes {
            *plane = median_suppress(plane, config.median_radius);
        }
    }

    let binary: [GrayImage; 3] = planes.map(|p| binarize(&p));
    let pixels = count_coincidences(roi, &binary);

    tracing::debug!(
        frame = index,
        pixels_12 = pixels[0],
        pixels_13 = pixels[1],
        pixels_23 = pixels[2],
        "frame coincidences"
    );

    FrameColoc {
        frame: index,
        pixels,
        percent: frame_percent(pixels, roi.len()),
    }
}

#[cfg(not(feature = "rayon"))]
fn process_frames(stack: &ImageStack, roi: &RoiPixels, config: &AnalysisConfig) -> Vec<FrameColoc> {
    stack
        .frames()
        .iter()
        .enumerate()
        .map(|(index, frame)| process_frame(index, frame, roi, config))
        .collect()
}

#[cfg(feature = "rayon")]
fn process_frames(stack: &ImageStack, roi: &RoiPixels, config: &AnalysisConfig) -> Vec<FrameColoc> {
    use rayon::prelude::*;

    // Indexed parallel iteration keeps the per-frame report in frame order
    // regardless of completion order.
    stack
        .frames()
        .par_iter()
        .enumerate()
        .map(|(index, frame)| process_frame(index, frame, roi, config))
        .collect()
}

/// Run the full colocalisation pipeline over a validated stack.
///
/// The ROI is resolved once before the frame loop; validation failures
/// abort the run before any frame is processed.
pub fn run(
    stack: &ImageStack,
    mask: Option<&GrayImage>,
    config: &AnalysisConfig,
) -> Result<ColocResult, AnalysisError> {
    let roi = resolve_roi(mask, stack.width(), stack.height())?;

    tracing::info!(
        frames = stack.frame_count(),
        roi_pixels = roi.len(),
        filtered = config.median_filter,
        "starting colocalisation analysis"
    );

    let per_frame = process_frames(stack, &roi, config);

    let counts: Vec<[u64; 3]> = per_frame.iter().map(|f| f.pixels).collect();
    let totals = total_pixels(&counts);
    let percent = total_percent(totals, roi.len(), stack.frame_count());

    tracing::info!(
        total_12 = totals[0],
        total_13 = totals[1],
        total_23 = totals[2],
        "analysis complete"
    );

    Ok(ColocResult {
        info: AnalysisInfo {
            channel_labels: config.channel_labels.clone(),
            filtered: config.median_filter,
            has_third_channel: config.has_third_channel(),
            roi_pixels: roi.len() as u64,
            frame_count: stack.frame_count(),
            image_size: [stack.width(), stack.height()],
        },
        per_frame,
        total_pixels: totals,
        total_percent: percent,
    })
}
