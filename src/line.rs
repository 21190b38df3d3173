//! Aliased lines
//!
//! Endpoints are snapped to 1/256 of a pixel, the major axis is walked one
//! pixel at a time and the minor axis follows a DDA in subpixel units.
//! Both endpoints are drawn, so a line that starts and ends inside the same
//! pixel still marks that pixel.

use crate::POLY_SUBPIXEL_SCALE;
use crate::POLY_SUBPIXEL_SHIFT;

/// Largest magnitude of a subpixel coordinate; differences still fit an i64
const COORD_LIMIT: f64 = (1u64 << 52) as f64;

/// Convert a coordinate to subpixel units, clamped to +/- 2^52
pub fn coord(c: f64) -> i64 {
    let v = (c * POLY_SUBPIXEL_SCALE as f64).round();
    if v.is_nan() {
        return 0;
    }
    v.max(-COORD_LIMIT).min(COORD_LIMIT) as i64
}

/// Integer DDA stepping `y1` to `y2` in `count` equal steps
#[derive(Debug)]
pub struct LineInterpolator {
    count: i64,
    left: i64,
    rem: i64,
    xmod: i64,
    y: i64,
}

impl LineInterpolator {
    pub fn new(y1: i64, y2: i64, count: i64) -> Self {
        let count = std::cmp::max(1, count);
        let mut left = (y2 - y1) / count;
        let mut rem = (y2 - y1) % count;
        let mut xmod = rem;
        if xmod <= 0 {
            xmod += count;
            rem += count;
            left -= 1;
        }
        xmod -= count;
        Self { y: y1, left, rem, xmod, count }
    }
    /// Current value
    pub fn y(&self) -> i64 {
        self.y
    }
    pub fn inc(&mut self) {
        self.xmod += self.rem;
        self.y += self.left;
        if self.xmod > 0 {
            self.xmod -= self.count;
            self.y += 1;
        }
    }
}

/// Pixels covered by a line, start to end inclusive
#[derive(Debug)]
pub struct LinePixels {
    /// Current position along the major axis, in pixels
    major: i64,
    /// Minor axis position, in subpixels
    minor: LineInterpolator,
    /// Line is primarily vertical
    ver: bool,
    inc: i64,
    /// Pixels still to produce
    remaining: i64,
}

impl LinePixels {
    /// Walk the line from (`x1`,`y1`) to (`x2`,`y2`)
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1_hr, y1_hr, x2_hr, y2_hr) = (coord(x1), coord(y1), coord(x2), coord(y2));
        let x1 = x1_hr >> POLY_SUBPIXEL_SHIFT;
        let x2 = x2_hr >> POLY_SUBPIXEL_SHIFT;
        let y1 = y1_hr >> POLY_SUBPIXEL_SHIFT;
        let y2 = y2_hr >> POLY_SUBPIXEL_SHIFT;
        let dy = (y2 - y1).abs();
        let dx = (x2 - x1).abs();
        let ver = dy > dx;
        let len = if ver { dy } else { dx };
        let (major, major_end, z1, z2) = if ver {
            (y1, y2, x1_hr, x2_hr)
        } else {
            (x1, x2, y1_hr, y2_hr)
        };
        let inc = if major_end >= major { 1 } else { -1 };
        let minor = LineInterpolator::new(z1, z2, len);
        Self { major, minor, ver, inc, remaining: len + 1 }
    }
    /// Number of pixels left
    pub fn len(&self) -> usize {
        self.remaining as usize
    }
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for LinePixels {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<(i64, i64)> {
        if self.remaining <= 0 {
            return None;
        }
        let minor = self.minor.y() >> POLY_SUBPIXEL_SHIFT;
        let out = if self.ver { (minor, self.major) } else { (self.major, minor) };
        self.remaining -= 1;
        if self.remaining > 0 {
            self.major += self.inc;
            self.minor.inc();
        }
        Some(out)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
