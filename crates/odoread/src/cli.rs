//! CLI command definitions using clap.

use clap::{Args, Parser, Subcommand};
use odoread_protocol::{DecimalFormatMode, ViewportDimensions};

pub mod commands;

/// Clean odometer OCR readings and crop capture frames to the odometer.
#[derive(Parser)]
#[command(name = "odoread")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// OCR timeout in milliseconds
    #[arg(long, default_value = "30000", global = true)]
    pub timeout: u64,

    /// JSON reader config file (or set ODOREAD_CONFIG)
    #[arg(long, env = "ODOREAD_CONFIG", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize raw OCR lines into odometer readings
    Normalize(NormalizeArgs),

    /// Re-punctuate a digit string for a decimal mode
    Format(FormatArgs),

    /// Re-punctuate the last line of recognized text
    Redisplay(RedisplayArgs),

    /// Compute the crop rectangle for a frame
    Geometry(GeometryArgs),

    /// Crop an image to the odometer region
    Crop(CropArgs),

    /// Crop, recognize and normalize an image
    Read(ReadArgs),
}

/// Viewport of the camera preview the frame was captured in.
#[derive(Args, Clone, Copy)]
pub struct ViewportArgs {
    /// Preview container width
    #[arg(long)]
    pub viewport_width: f64,

    /// Preview container height
    #[arg(long)]
    pub viewport_height: f64,

    /// Crop shrink factor in (0, 1] (overrides config)
    #[arg(long)]
    pub scale: Option<f64>,
}

impl ViewportArgs {
    pub fn dimensions(&self) -> ViewportDimensions {
        ViewportDimensions::new(self.viewport_width, self.viewport_height)
    }
}

/// Normalize command arguments.
#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw OCR lines (read from stdin when omitted)
    pub lines: Vec<String>,

    /// Decimal mode: none, one-decimal or two-decimal (overrides config)
    #[arg(long, short = 'm')]
    pub mode: Option<DecimalFormatMode>,

    /// Also print lines that were discarded
    #[arg(long)]
    pub keep_empty: bool,
}

/// Format command arguments.
#[derive(Parser)]
pub struct FormatArgs {
    /// Digits to re-punctuate
    pub digits: String,

    /// Decimal mode: none, one-decimal or two-decimal (overrides config)
    #[arg(long, short = 'm')]
    pub mode: Option<DecimalFormatMode>,
}

/// Redisplay command arguments.
#[derive(Parser)]
pub struct RedisplayArgs {
    /// Text lines (read from stdin when omitted)
    pub lines: Vec<String>,

    /// Decimal mode: none, one-decimal or two-decimal (overrides config)
    #[arg(long, short = 'm')]
    pub mode: Option<DecimalFormatMode>,
}

/// Geometry command arguments.
#[derive(Parser)]
pub struct GeometryArgs {
    /// Frame width in pixels
    #[arg(long)]
    pub image_width: u32,

    /// Frame height in pixels
    #[arg(long)]
    pub image_height: u32,

    #[command(flatten)]
    pub viewport: ViewportArgs,
}

/// Crop command arguments.
#[derive(Parser)]
pub struct CropArgs {
    /// Image file to crop
    pub image: String,

    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Save to file path
    #[arg(long, short = 'o', default_value = "./crop.jpg")]
    pub output: String,

    /// Output base64 instead of writing a file
    #[arg(long)]
    pub base64: bool,

    /// Grayscale, contrast and blur before cropping (overrides config)
    #[arg(long)]
    pub preprocess: bool,
}

/// Read command arguments.
#[derive(Parser)]
pub struct ReadArgs {
    /// Captured frame (PNG or JPEG)
    pub image: String,

    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Directory holding the OCR models
    #[arg(long)]
    pub models: Option<String>,

    /// Decimal mode: none, one-decimal or two-decimal (overrides config)
    #[arg(long, short = 'm')]
    pub mode: Option<DecimalFormatMode>,

    /// Grayscale, contrast and blur before cropping (overrides config)
    #[arg(long)]
    pub preprocess: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalize() {
        let cli = Cli::try_parse_from(["odoread", "normalize", "O15OO", "--mode", "one-decimal"])
            .unwrap();
        match cli.command {
            Commands::Normalize(args) => {
                assert_eq!(args.lines, vec!["O15OO".to_string()]);
                assert_eq!(args.mode, Some(DecimalFormatMode::OneDecimal));
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_parse_geometry() {
        let cli = Cli::try_parse_from([
            "odoread",
            "--json",
            "geometry",
            "--image-width",
            "3000",
            "--image-height",
            "4000",
            "--viewport-width",
            "800",
            "--viewport-height",
            "400",
            "--scale",
            "0.9",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Geometry(args) => {
                assert_eq!(args.image_width, 3000);
                assert_eq!(args.viewport.scale, Some(0.9));
            }
            _ => panic!("expected geometry"),
        }
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["odoread", "format", "15008", "--mode", "three"]).is_err());
    }
}
