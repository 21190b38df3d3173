//! Rendering buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// One packed `0xAARRGGBB` value per pixel, stored in row-major order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderingBuffer {
    /// Pixel data of the image
    pub data: Vec<u32>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new, fully transparent buffer of width by height pixels
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width,
            height,
            data: vec![0u32; width * height],
        }
    }
    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Mutable slice of a single row
    pub fn row_mut(&mut self, y: usize) -> &mut [u32] {
        debug_assert!(y < self.height);
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
    /// Set every pixel to `v`
    pub fn fill(&mut self, v: u32) {
        self.data.iter_mut().for_each(|p| *p = v);
    }
}

impl Index<(usize, usize)> for RenderingBuffer {
    type Output = u32;
    fn index(&self, index: (usize, usize)) -> &u32 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize, usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u32 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
