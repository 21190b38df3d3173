//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::Argb8;
use crate::error::{Error, Result};

use std::path::Path;

/// Packed ARGB pixel access on top of a [RenderingBuffer]
///
/// [RenderingBuffer]: ../buffer/struct.RenderingBuffer.html
#[derive(Debug, Clone, PartialEq)]
pub struct Pixfmt {
    rbuf: RenderingBuffer,
}

impl Pixfmt {
    /// Create new Pixel Format of width * height pixels
    ///
    /// All pixels start fully transparent. A zero width or height is an
    /// error.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyBuffer { width, height });
        }
        Ok(Self { rbuf: RenderingBuffer::new(width, height) })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Underlying buffer
    pub fn rbuf(&self) -> &RenderingBuffer {
        &self.rbuf
    }
    /// Raw packed pixels, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.rbuf.data
    }
    /// Color at (`x`,`y`); panics outside the image
    pub fn get(&self, id: (usize, usize)) -> Argb8 {
        Argb8::from_u32(self.rbuf[id])
    }
    /// Store `c` at (`x`,`y`); panics outside the image
    pub fn set(&mut self, id: (usize, usize), c: Argb8) {
        self.rbuf[id] = c.to_u32();
    }
    /// Copies the color `c` to pixels from (`x`,`y`) to (`x+n-1`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use metaraster::{Pixfmt, Argb8};
    ///
    ///     let mut pix = Pixfmt::new(3, 2).unwrap();
    ///     pix.copy_hline(1, 1, 5, Argb8::BLACK);
    ///     assert_eq!(pix.get((0, 1)), Argb8::TRANSPARENT);
    ///     assert_eq!(pix.get((2, 1)), Argb8::BLACK);
    ///
    ///     pix.copy_hline(0, 10, 3, Argb8::BLACK); // Ignored, outside of range
    ///
    pub fn copy_hline(&mut self, x: usize, y: usize, n: usize, c: Argb8) {
        if y >= self.rbuf.height || x >= self.rbuf.width || n == 0 {
            return;
        }
        let end = std::cmp::min(x + n, self.rbuf.width);
        let v = c.to_u32();
        self.rbuf.row_mut(y)[x..end].iter_mut().for_each(|p| *p = v);
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Argb8) {
        self.rbuf.fill(c.to_u32());
    }
    /// Make every pixel fully transparent
    pub fn clear(&mut self) {
        self.fill(Argb8::TRANSPARENT);
    }
    /// Pixels converted to RGBA byte order
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rbuf.len() * 4);
        for &p in &self.rbuf.data {
            let c = Argb8::from_u32(p);
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }
    /// Write the image to a file; the format follows the file extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        image::save_buffer(
            filename,
            &self.to_rgba_bytes(),
            self.width() as u32,
            self.height() as u32,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixfmt_test() {
        let mut p = Pixfmt::new(10, 10).unwrap();
        assert_eq!(p.pixels().len(), 100);

        p.set((0, 0), Argb8::BLACK);
        assert_eq!(p.get((0, 0)), Argb8::BLACK);

        let red = Argb8::argb(128, 255, 0, 0);
        p.copy_hline(0, 1, 10, red);
        for i in 0..10 {
            assert_eq!(p.get((i, 1)), red);
        }
        p.clear();
        assert_eq!(p.get((0, 1)), Argb8::TRANSPARENT);

        p.copy_hline(5, 2, 20, Argb8::WHITE);
        for i in 0..5 {
            assert_eq!(p.get((i, 2)), Argb8::TRANSPARENT);
        }
        for i in 5..10 {
            assert_eq!(p.get((i, 2)), Argb8::WHITE);
        }
        p.copy_hline(0, 11, 20, Argb8::WHITE); // Ignored, outside of range
        p.copy_hline(11, 3, 2, Argb8::WHITE);
        assert!(p.pixels()[30..].iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Pixfmt::new(0, 4), Err(Error::EmptyBuffer { width: 0, height: 4 })));
        assert!(Pixfmt::new(4, 0).is_err());
    }

    #[test]
    fn rgba_byte_order() {
        let mut p = Pixfmt::new(1, 1).unwrap();
        p.set((0, 0), Argb8::argb(4, 1, 2, 3));
        assert_eq!(p.to_rgba_bytes(), vec![1, 2, 3, 4]);
    }
}
