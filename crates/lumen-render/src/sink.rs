//! Pixel sinks: where traced colors end up.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use lumen_math::Color;

/// A write target for rendered pixels.
///
/// The renderer's contract is "write exactly once per pixel, in any
/// order, before flushing"; writes to distinct pixels may come from
/// different threads concurrently, so implementations take `&self`.
pub trait PixelSink: Send + Sync {
    /// Image size as `(columns, rows)`.
    fn dimensions(&self) -> (usize, usize);

    /// Store the color of one pixel.
    fn write_pixel(&self, col: usize, row: usize, color: Color);

    /// Finalize the image after all pixels are written.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory image buffer that can be saved as PNG.
///
/// Each pixel is a packed RGBA [`AtomicU32`], so concurrent writes to
/// distinct pixels need no lock and never alias the same cell.
#[derive(Debug)]
pub struct ImageWriter {
    cols: usize,
    rows: usize,
    pixels: Vec<AtomicU32>,
    output: Option<PathBuf>,
}

impl ImageWriter {
    /// Create a black image of `cols` x `rows` pixels.
    pub fn new(cols: usize, rows: usize) -> Self {
        let mut pixels = Vec::with_capacity(cols * rows);
        pixels.resize_with(cols * rows, || AtomicU32::new(pack([0, 0, 0])));
        Self {
            cols,
            rows,
            pixels,
            output: None,
        }
    }

    /// Set the file the image is saved to on [`PixelSink::flush`].
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Read a pixel back as 8-bit RGB.
    ///
    /// Out-of-range coordinates are a caller bug; this is only used by
    /// tests and the PNG encoder, both of which iterate the known size.
    pub fn pixel(&self, col: usize, row: usize) -> [u8; 3] {
        unpack(self.pixels[row * self.cols + col].load(Ordering::Relaxed))
    }

    /// Encode the buffer as a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let mut out = image::RgbImage::new(self.cols as u32, self.rows as u32);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.put_pixel(col as u32, row as u32, image::Rgb(self.pixel(col, row)));
            }
        }
        out.save(path)
    }
}

impl PixelSink for ImageWriter {
    fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn write_pixel(&self, col: usize, row: usize, color: Color) {
        self.pixels[row * self.cols + col].store(pack(color.to_rgb8()), Ordering::Relaxed);
    }

    fn flush(&self) -> io::Result<()> {
        match &self.output {
            Some(path) => self.write_png(path).map_err(io::Error::other),
            None => Ok(()),
        }
    }
}

fn pack([r, g, b]: [u8; 3]) -> u32 {
    u32::from_be_bytes([r, g, b, 0xff])
}

fn unpack(value: u32) -> [u8; 3] {
    let [r, g, b, _] = value.to_be_bytes();
    [r, g, b]
}
