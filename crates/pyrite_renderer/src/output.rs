//! Image encoding: tone mapping and file writers.
//!
//! Linear colors are clamped, gamma corrected with a square root (gamma 2)
//! and quantized to 8 bits before being written as plain-text PPM (P3) or
//! PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use pyrite_math::Interval;
use thiserror::Error;

use crate::{Color, ImageBuffer};

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0} (expected .ppm or .png)")]
    UnsupportedFormat(String),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text PPM (P3)
    Ppm,
    Png,
}

impl OutputFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// An 8-bit RGB pixel, laid out exactly as image bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Quantize one linear channel: gamma, clamp to [0, 1], scale to 255.
#[inline]
fn to_byte(linear: f32) -> u8 {
    (255.0 * Interval::UNIT.clamp(linear_to_gamma(linear))) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> Rgb8 {
    Rgb8 {
        r: to_byte(color.x),
        g: to_byte(color.y),
        b: to_byte(color.z),
    }
}

impl ImageBuffer {
    /// Convert to 8-bit RGB pixels (for display or saving).
    pub fn to_rgb8(&self) -> Vec<Rgb8> {
        self.pixels.iter().map(|&c| color_to_rgb8(c)).collect()
    }
}

/// Write an image as plain-text PPM (P3).
///
/// One line per image row, pixels as whitespace-separated integer triples.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;
    if image.width == 0 {
        return Ok(());
    }

    for row in image.to_rgb8().chunks(image.width as usize) {
        let line: Vec<String> = row
            .iter()
            .map(|p| format!("{} {} {}", p.r, p.g, p.b))
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }

    Ok(())
}

/// Save an image as plain-text PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save an image as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let pixels = image.to_rgb8();
    image::save_buffer_with_format(
        path,
        bytemuck::cast_slice(pixels.as_slice()),
        image.width,
        image.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

/// Save an image, choosing the encoder from the file extension.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<OutputFormat> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;

    match format {
        OutputFormat::Ppm => save_ppm(image, path)?,
        OutputFormat::Png => save_png(image, path)?,
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(format)
}
