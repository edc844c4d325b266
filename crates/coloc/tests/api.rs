//! Public-API integration tests for the analysis pipeline.

use approx::assert_relative_eq;
use coloc::{AnalysisConfig, AnalysisError, Analyzer, ImageStack};
use image::{GrayImage, Luma, Rgb, RgbImage};

/// Frame with a bright rectangle `[x0, x1) × [y0, y1)` in the channels
/// selected by `channels_on`.
fn rect_frame(
    w: u32,
    h: u32,
    rect: [u32; 4],
    channels_on: [bool; 3],
) -> RgbImage {
    let [x0, y0, x1, y1] = rect;
    let mut frame = RgbImage::new(w, h);
    for y in y0..y1 {
        for x in x0..x1 {
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

#[test]
fn single_frame_quarter_overlap() {
    // 4×4 frame, channels 1 and 2 on in the top-left 2×2 block, channel 3
    // dark everywhere: 4 of 16 ROI pixels coincide for pair (1,2).
    let frame = rect_frame(4, 4, [0, 0, 2, 2], [true, true, false]);
    let stack = ImageStack::from_frames(vec![frame]).unwrap();

    let result = Analyzer::new().analyze(&stack, None).unwrap();

    assert_eq!(result.info.roi_pixels, 16);
    assert_eq!(result.per_frame.len(), 1);
    assert_eq!(result.per_frame[0].pixels, [4, 0, 0]);
    assert_relative_eq!(result.per_frame[0].percent[0], 25.0);
    assert_relative_eq!(result.per_frame[0].percent[1], 0.0);
    assert_relative_eq!(result.per_frame[0].percent[2], 0.0);
    assert_eq!(result.total_pixels, [4, 0, 0]);
    assert_relative_eq!(result.total_percent[0], 25.0);
}

#[test]
fn two_frame_totals_normalize_by_roi_instances() {
    // Frame 0: 4 coincident pixels; frame 1: 8. Totals normalize by
    // 2 frames × 16 ROI pixels.
    let frames = vec![
        rect_frame(4, 4, [0, 0, 2, 2], [true, true, false]),
        rect_frame(4, 4, [0, 0, 4, 2], [true, true, false]),
    ];
    let stack = ImageStack::from_frames(frames).unwrap();

    let result = Analyzer::new().analyze(&stack, None).unwrap();

    assert_eq!(result.per_frame[0].pixels[0], 4);
    assert_eq!(result.per_frame[1].pixels[0], 8);
    assert_eq!(result.total_pixels[0], 12);
    assert_relative_eq!(result.total_percent[0], 37.5);
}

#[test]
fn runs_are_bit_identical() {
    let frames = vec![
        rect_frame(8, 8, [1, 1, 5, 4], [true, true, true]),
        rect_frame(8, 8, [2, 3, 7, 8], [true, false, true]),
    ];
    let stack = ImageStack::from_frames(frames).unwrap();
    let analyzer = Analyzer::new();

    let first = analyzer.analyze(&stack, None).unwrap();
    let second = analyzer.analyze(&stack, None).unwrap();

    assert_eq!(first.per_frame, second.per_frame);
    assert_eq!(first.total_pixels, second.total_pixels);
    assert_eq!(first.total_percent, second.total_percent);
}

#[test]
fn omitted_mask_equals_explicit_all_on_mask() {
    let frames = vec![rect_frame(6, 5, [0, 0, 3, 3], [true, true, false])];
    let stack = ImageStack::from_frames(frames).unwrap();
    let analyzer = Analyzer::new();

    let without = analyzer.analyze(&stack, None).unwrap();
    let all_on = GrayImage::from_pixel(6, 5, Luma([255]));
    let with = analyzer.analyze(&stack, Some(&all_on)).unwrap();

    assert_eq!(without.per_frame, with.per_frame);
    assert_eq!(without.total_pixels, with.total_pixels);
    assert_eq!(without.total_percent, with.total_percent);
}

#[test]
fn mask_restricts_counting_and_normalization() {
    // Coincident block fills the left half; mask selects only the right
    // half, so nothing is counted and percentages use the masked ROI size.
    let frames = vec![rect_frame(4, 4, [0, 0, 2, 4], [true, true, false])];
    let stack = ImageStack::from_frames(frames).unwrap();

    let mut mask = GrayImage::new(4, 4);
    for y in 0..4 {
        for x in 2..4 {
            mask.put_pixel(x, y, Luma([255]));
        }
    }

    let result = Analyzer::new().analyze(&stack, Some(&mask)).unwrap();
    assert_eq!(result.info.roi_pixels, 8);
    assert_eq!(result.total_pixels, [0, 0, 0]);
}

#[test]
fn empty_third_channel_never_coincides() {
    let mut config = AnalysisConfig::default();
    config.channel_labels = ["gfp".into(), "rfp".into(), "none".into()];
    let analyzer = Analyzer::with_config(config);

    // Channels 1 and 2 on in the top half, channel 3 constant zero.
    let frames = vec![rect_frame(4, 4, [0, 0, 4, 2], [true, true, false]); 2];
    let stack = ImageStack::from_frames(frames).unwrap();

    let result = analyzer.analyze(&stack, None).unwrap();
    assert!(!result.info.has_third_channel);
    assert_eq!(result.total_pixels[0], 16);
    assert_eq!(result.total_pixels[1], 0);
    assert_eq!(result.total_pixels[2], 0);
    for row in &result.per_frame {
        for p in row.percent {
            assert!((0.0..=100.0).contains(&p));
        }
    }
}

#[test]
fn median_filter_suppresses_isolated_noise() {
    // A 4×4 coincident block plus three isolated coincident noise pixels.
    // Unfiltered, the noise binarizes on; filtered, the 3×3 median removes
    // it (and erodes the block's corners).
    let mut frame = rect_frame(10, 10, [2, 2, 6, 6], [true, true, false]);
    for &(x, y) in &[(8, 1), (1, 8), (8, 8)] {
        frame.put_pixel(x, y, Rgb([200, 200, 0]));
    }
    let stack = ImageStack::from_frames(vec![frame]).unwrap();

    let unfiltered = Analyzer::new().analyze(&stack, None).unwrap();

    let mut config = AnalysisConfig::default();
    config.median_filter = true;
    let filtered = Analyzer::with_config(config).analyze(&stack, None).unwrap();

    assert_eq!(unfiltered.total_pixels[0], 19);
    assert_eq!(filtered.total_pixels[0], 12);
    assert_eq!(unfiltered.info.image_size, filtered.info.image_size);
    assert!(filtered.info.filtered);
    assert!(!unfiltered.info.filtered);
}

#[test]
fn degenerate_roi_is_a_hard_failure() {
    let stack = ImageStack::from_frames(vec![RgbImage::new(4, 4)]).unwrap();
    let empty = GrayImage::new(4, 4);
    assert_eq!(
        Analyzer::new().analyze(&stack, Some(&empty)).unwrap_err(),
        AnalysisError::EmptyRoi
    );
}

#[test]
fn result_serializes_with_stable_field_names() {
    let frame = rect_frame(4, 4, [0, 0, 2, 2], [true, true, false]);
    let stack = ImageStack::from_frames(vec![frame]).unwrap();
    let result = Analyzer::new().analyze(&stack, None).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total_pixels"][0], 4);
    assert_eq!(json["info"]["frame_count"], 1);
    assert_eq!(json["per_frame"][0]["pixels"][0], 4);
}
