//! Image output and render progress reporting.
//!
//! The primary format is plain-text PPM (`P3`). Other extensions are encoded
//! through the `image` crate from the same 8-bit values.

use crate::ImageBuffer;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing a rendered image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Pixel buffer holds {actual} pixels, expected {width}x{height}")]
    BufferSize { width: u32, height: u32, actual: usize },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Write an image as plain-text PPM.
///
/// Header `P3`, `<width> <height>`, `255`, then one `r g b` line per pixel in
/// row-major order starting at the top-left.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    writer.flush()
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: &Path) -> OutputResult<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => {
            let file = std::fs::File::create(path)?;
            write_ppm(image, &mut BufWriter::new(file))?;
        }
        "png" | "jpg" | "jpeg" | "bmp" | "tga" => {
            let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
                .ok_or(OutputError::BufferSize {
                    width: image.width,
                    height: image.height,
                    actual: image.pixels.len(),
                })?;
            buffer.save(path)?;
        }
        other => {
            return Err(OutputError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            }));
        }
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Receives render progress, one call per scanline.
pub trait Progress {
    /// Called before rendering each scanline with the count still to go.
    fn scanline(&mut self, remaining: u32);

    /// Called once after the last scanline.
    fn finished(&mut self) {}
}

/// Discards progress.
pub struct NoProgress;

impl Progress for NoProgress {
    fn scanline(&mut self, _remaining: u32) {}
}

/// Overwrites a "Scanlines remaining" counter in place on a text stream.
///
/// Write errors are ignored: the counter is advisory and a closed stream must
/// not stop the render.
pub struct TextProgress<W: Write> {
    writer: W,
}

/// Scanline counter on stderr.
pub type StderrProgress = TextProgress<io::Stderr>;

impl<W: Write> TextProgress<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextProgress<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Progress for TextProgress<W> {
    fn scanline(&mut self, remaining: u32) {
        let _ = write!(self.writer, "\rScanlines remaining: {} ", remaining);
        let _ = self.writer.flush();
    }

    fn finished(&mut self) {
        let _ = writeln!(self.writer, "\rDone.                 ");
        let _ = self.writer.flush();
    }
}
