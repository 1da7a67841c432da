//! telepen CLI - decode a Telepen Numeric barcode from an image file.
//!
//! This is the thin dispatch shim spec.md places out of scope for the
//! core: it just turns a file on disk into pixel rows and calls
//! `telepen_rs::decode_telepen`.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use telepen_rs::{decode_telepen, RasterImage};

/// Telepen Numeric barcode decoder
#[derive(Parser)]
#[command(name = "telepen")]
#[command(author = "telepen-rs contributors")]
#[command(version)]
#[command(about = "Decode a Telepen Numeric barcode from a raster image", long_about = None)]
#[command(after_help = "EXAMPLES:
    telepen decode -i scan.ppm
    telepen decode -i frame.raw -f raw -w 640 -H 100

SUPPORTED FORMATS:
    Input: Portable PixMap (.ppm, P6, 8-bit RGB), raw RGBA (width/height required)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a Telepen Numeric barcode from an image file
    #[command(visible_alias = "d")]
    Decode {
        /// Path to the input image file
        #[arg(short, long, help = "Path to the input image file")]
        input: PathBuf,

        /// Input format: ppm (P6) or raw (RGBA, requires --width/--height)
        #[arg(short, long, default_value = "ppm", value_enum)]
        format: InputFormat,

        /// Image width in pixels (required for raw input)
        #[arg(short, long)]
        width: Option<u32>,

        /// Image height in pixels (required for raw input)
        #[arg(short = 'H', long)]
        height: Option<u32>,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Portable PixMap (P6), 8-bit RGB
    Ppm,
    /// Raw interleaved RGBA bytes
    Raw,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode { input, format, width, height } => {
            decode_file(&input, &format, width, height)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn decode_file(
    input: &PathBuf,
    format: &InputFormat,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let image = match format {
        InputFormat::Ppm => load_ppm(&data)?,
        InputFormat::Raw => {
            let width = width.ok_or("--width is required for raw input")?;
            let height = height.ok_or("--height is required for raw input")?;
            if data.len() != 4 * width as usize * height as usize {
                return Err("raw input length does not match width * height * 4".into());
            }
            RasterImage::new(width, height, data)
        }
    };

    match decode_telepen(&image) {
        Some(text) => println!("{}", text),
        None => println!("no barcode found"),
    }
    Ok(())
}

/// Parses a binary PPM (P6) file and expands RGB triples to RGBA.
fn load_ppm(data: &[u8]) -> Result<RasterImage, Box<dyn std::error::Error>> {
    let mut fields = Vec::new();
    let mut pos = 0;

    while fields.len() < 4 {
        while pos < data.len() && data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos < data.len() && data[pos] == b'#' {
            while pos < data.len() && data[pos] != b'\n' {
                pos += 1;
            }
            continue;
        }
        let start = pos;
        while pos < data.len() && !data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if start == pos {
            return Err("truncated PPM header".into());
        }
        fields.push(std::str::from_utf8(&data[start..pos])?.to_string());
    }
    pos += 1; // single whitespace separating header from pixel data

    if fields[0] != "P6" {
        return Err(format!("unsupported PPM magic: {}", fields[0]).into());
    }
    let width: u32 = fields[1].parse()?;
    let height: u32 = fields[2].parse()?;
    let max_val: u32 = fields[3].parse()?;
    if max_val != 255 {
        return Err("only 8-bit PPM (maxval 255) is supported".into());
    }

    let rgb = &data[pos..];
    let expected = 3 * width as usize * height as usize;
    if rgb.len() < expected {
        return Err("PPM pixel data shorter than width * height * 3".into());
    }

    let mut rgba = Vec::with_capacity(4 * width as usize * height as usize);
    for px in rgb[..expected].chunks_exact(3) {
        rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
    }

    Ok(RasterImage::new(width, height, rgba))
}
