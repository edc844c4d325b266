//! coloc CLI — command-line interface for colocalisation analysis.

use clap::{Args, Parser, Subcommand};
use image::RgbImage;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use coloc::{AnalysisConfig, Analyzer, ImageStack};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "coloc")]
#[command(
    about = "Quantify pixel-level colocalisation between fluorescence channels in an image stack"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one image stack and write a JSON result.
    Analyze(CliAnalyzeArgs),

    /// Print ROI statistics for a mask image.
    MaskInfo {
        /// Path to the mask image (nonzero pixels select the ROI).
        #[arg(long)]
        mask: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
struct CliAnalyzeArgs {
    /// Path to the input image. Multi-page TIFF is read as a frame stack;
    /// other formats are read as a single frame. 16-bit samples are scaled
    /// to 8-bit.
    #[arg(long)]
    image: PathBuf,

    /// Optional ROI mask image of the same dimensions as the frames
    /// (nonzero pixels select the ROI). Omitted: every pixel is analyzed.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Path to write analysis results (JSON).
    #[arg(long)]
    out: PathBuf,

    /// Fluorophore label for channel 1.
    #[arg(long, default_value = "channel1")]
    ch1: String,

    /// Fluorophore label for channel 2.
    #[arg(long, default_value = "channel2")]
    ch2: String,

    /// Fluorophore label for channel 3; "none" marks the channel as absent.
    #[arg(long, default_value = "channel3")]
    ch3: String,

    /// Apply median noise suppression before binarisation.
    #[arg(long)]
    filter: bool,

    /// Median window half-width in pixels (1 = 3×3). Used with --filter.
    #[arg(long, default_value = "1")]
    median_radius: u32,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::MaskInfo { mask } => run_mask_info(&mask),
    }
}

// ── analyze ────────────────────────────────────────────────────────────

fn run_analyze(args: &CliAnalyzeArgs) -> CliResult<()> {
    tracing::info!("Loading image stack: {}", args.image.display());
    let stack = load_stack(&args.image)?;
    tracing::info!(
        "Stack: {} frame(s), {}x{}",
        stack.frame_count(),
        stack.width(),
        stack.height()
    );

    let mask = match &args.mask {
        Some(path) => {
            tracing::info!("Loading mask: {}", path.display());
            Some(load_mask(path)?)
        }
        None => None,
    };

    let config = AnalysisConfig {
        channel_labels: [args.ch1.clone(), args.ch2.clone(), args.ch3.clone()],
        median_filter: args.filter,
        median_radius: args.median_radius,
    };
    let analyzer = Analyzer::with_config(config);

    let result = analyzer.analyze(&stack, mask.as_ref())?;

    for i in 0..3 {
        tracing::info!(
            "Pair {}: {} pixels ({:.2}%)",
            coloc::PAIR_LABELS[i],
            result.total_pixels[i],
            result.total_percent[i],
        );
    }

    let json = serde_json::to_string_pretty(&result)?;
    std::fs::write(&args.out, &json)?;
    tracing::info!("Results written to {}", args.out.display());

    Ok(())
}

// ── mask-info ──────────────────────────────────────────────────────────

fn run_mask_info(path: &Path) -> CliResult<()> {
    let mask = load_mask(path)?;
    let (w, h) = mask.dimensions();
    let roi = coloc::resolve_roi(Some(&mask), w, h)?;

    println!("mask: {}", path.display());
    println!("  dimensions:   {}x{}", w, h);
    println!("  roi pixels:   {}", roi.len());
    println!(
        "  roi fraction: {:.4}",
        roi.len() as f64 / (w as f64 * h as f64)
    );

    Ok(())
}

// ── image loading ──────────────────────────────────────────────────────

fn load_mask(path: &Path) -> CliResult<image::GrayImage> {
    let img = image::open(path).map_err(|e| -> CliError {
        format!("failed to open mask {}: {}", path.display(), e).into()
    })?;
    Ok(img.to_luma8())
}

fn load_stack(path: &Path) -> CliResult<ImageStack> {
    let is_tiff = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("tif") || e.eq_ignore_ascii_case("tiff"))
        .unwrap_or(false);

    let frames = if is_tiff {
        load_tiff_frames(path)?
    } else {
        vec![load_single_frame(path)?]
    };

    ImageStack::from_frames(frames).map_err(|e| -> CliError { e.to_string().into() })
}

fn load_single_frame(path: &Path) -> CliResult<RgbImage> {
    let img = image::open(path).map_err(|e| -> CliError {
        format!("failed to open image {}: {}", path.display(), e).into()
    })?;
    if img.color().channel_count() < 3 {
        return Err(format!(
            "{} has {} channel(s); colocalisation requires 3-channel frames",
            path.display(),
            img.color().channel_count()
        )
        .into());
    }
    Ok(img.to_rgb8())
}

/// Read every page of a TIFF as one frame of the stack.
fn load_tiff_frames(path: &Path) -> CliResult<Vec<RgbImage>> {
    let file = File::open(path)
        .map_err(|e| -> CliError { format!("failed to open {}: {}", path.display(), e).into() })?;
    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))?;

    let mut frames = Vec::new();
    loop {
        let (w, h) = decoder.dimensions()?;
        let color = decoder.colortype()?;
        let data = decoder.read_image()?;
        frames.push(tiff_frame(w, h, color, data)?);

        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }

    Ok(frames)
}

fn tiff_frame(
    w: u32,
    h: u32,
    color: tiff::ColorType,
    data: tiff::decoder::DecodingResult,
) -> CliResult<RgbImage> {
    use tiff::decoder::DecodingResult;
    use tiff::ColorType;

    let channels = match color {
        ColorType::RGB(_) => 3usize,
        ColorType::RGBA(_) => 4,
        other => {
            return Err(format!(
                "unsupported TIFF color type {:?}; colocalisation requires 3-channel frames",
                other
            )
            .into())
        }
    };

    // Interleaved samples, scaled to 8-bit.
    let samples: Vec<u8> = match data {
        DecodingResult::U8(buf) => buf,
        DecodingResult::U16(buf) => buf.iter().map(|&v| (v >> 8) as u8).collect(),
        other => {
            return Err(format!("unsupported TIFF sample format {}", sample_name(&other)).into())
        }
    };

    let expected = (w as usize) * (h as usize) * channels;
    if samples.len() != expected {
        return Err(format!(
            "TIFF frame has {} samples, expected {}",
            samples.len(),
            expected
        )
        .into());
    }

    let rgb: Vec<u8> = if channels == 3 {
        samples
    } else {
        samples
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    };

    RgbImage::from_raw(w, h, rgb)
        .ok_or_else(|| -> CliError { "TIFF frame buffer size mismatch".into() })
}

fn sample_name(data: &tiff::decoder::DecodingResult) -> &'static str {
    use tiff::decoder::DecodingResult;
    match data {
        DecodingResult::U8(_) => "u8",
        DecodingResult::U16(_) => "u16",
        DecodingResult::U32(_) => "u32",
        DecodingResult::U64(_) => "u64",
        DecodingResult::I8(_) => "i8",
        DecodingResult::I16(_) => "i16",
        DecodingResult::I32(_) => "i32",
        DecodingResult::I64(_) => "i64",
        DecodingResult::F32(_) => "f32",
        DecodingResult::F64(_) => "f64",
    }
}
