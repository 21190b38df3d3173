//! Trapezoid scan conversion
//!
//! A triangle is split at the height of its middle vertex into at most two
//! trapezoids with horizontal top and bottom edges. Each trapezoid covers
//! the pixel rows whose centers lie in `[y0, y1)`, and within a row the
//! pixels whose centers lie in `[left, right)`. Adjacent trapezoids therefore
//! never share or skip a row.
//!
//! The same rows drive both the fill and the diagnostic drawing, so what the
//! overlay shows is exactly what the fill touched.

use crate::base::RenderingBase;
use crate::color::Argb8;
use crate::math::lerp;
use crate::shader::Contrast;
use crate::Shader;

use std::cmp::Ordering;
use std::ops::Range;

/// Half height of the tick marks drawn at both ends of a metarendered row
const TICK: f64 = 0.3;

/// Tint handed to the contrast shader for metarender overlays
const META_TINT: Argb8 = Argb8::WHITE;

/// First pixel whose center is at or past `v`
fn first_center(v: f64) -> i64 {
    (v - 0.5).ceil() as i64
}

/// Pixel rows of the image
fn image_rows(ren: &RenderingBase) -> Range<i64> {
    let (_, _, ymin, ymax) = ren.limits();
    ymin..ymax + 1
}

/// Position of a trapezoid side at some height, with texture coordinates
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Edge {
    pub x: f64,
    pub u: f64,
    pub v: f64,
}

impl Edge {
    pub fn new(x: f64, u: f64, v: f64) -> Self {
        Self { x, u, v }
    }
    /// Edge without texture coordinates
    pub fn at(x: f64) -> Self {
        Self { x, u: 0.0, v: 0.0 }
    }
    /// Interpolate towards `other`; `t == 0` is `self`
    pub fn lerp(self, other: Edge, t: f64) -> Edge {
        Edge {
            x: lerp(self.x, other.x, t),
            u: lerp(self.u, other.u, t),
            v: lerp(self.v, other.v, t),
        }
    }
}

/// A straight segment of a metarender overlay
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Segment {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// One pixel row of a trapezoid, sides ordered left to right
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanRow {
    /// Pixel row
    pub y: i64,
    pub left: Edge,
    pub right: Edge,
}

impl ScanRow {
    /// Height of the row's pixel centers
    pub fn center(&self) -> f64 {
        self.y as f64 + 0.5
    }
    /// Pixel columns covered; empty when the sides coincide
    pub fn pixels(&self) -> Range<i64> {
        first_center(self.left.x)..first_center(self.right.x)
    }
    /// Texture coordinates at the center of pixel column `x`
    pub fn edge_at(&self, x: i64) -> Edge {
        let w = self.right.x - self.left.x;
        if w <= 0.0 {
            return self.left;
        }
        self.left.lerp(self.right, (x as f64 + 0.5 - self.left.x) / w)
    }
}

/// Horizontal strip between two heights
///
/// Side `a` runs from `a0` at `y0` to `a1` at `y1`, side `b` likewise.
/// Which side is left may change from row to row; rows sort that out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Trapezoid {
    pub y0: f64,
    pub y1: f64,
    pub a0: Edge,
    pub b0: Edge,
    pub a1: Edge,
    pub b1: Edge,
}

impl Trapezoid {
    /// Trapezoid without texture coordinates
    ///
    /// `x0a`,`x0b` are the sides at `y0`, `x1a`,`x1b` at `y1`
    pub fn new(x0a: f64, x0b: f64, y0: f64, x1a: f64, x1b: f64, y1: f64) -> Self {
        Self::with_edges(y0, Edge::at(x0a), Edge::at(x0b), y1, Edge::at(x1a), Edge::at(x1b))
    }
    /// Trapezoid from its four corners
    ///
    /// If `y1 < y0` both heights swap together with their sides, so `a`
    /// stays `a`.
    pub fn with_edges(y0: f64, a0: Edge, b0: Edge, y1: f64, a1: Edge, b1: Edge) -> Self {
        if y1 < y0 {
            Self { y0: y1, y1: y0, a0: a1, b0: b1, a1: a0, b1: b0 }
        } else {
            Self { y0, y1, a0, b0, a1, b1 }
        }
    }
    /// Pixel rows covered, `None` if there are none
    ///
    ///     use metaraster::Trapezoid;
    ///     let t = Trapezoid::new(0.0, 4.0, 0.5, 0.0, 4.0, 3.2);
    ///     assert_eq!(t.rows(), Some(0..3));
    ///     let flat = Trapezoid::new(0.0, 4.0, 1.6, 0.0, 4.0, 2.4);
    ///     assert_eq!(flat.rows(), None);
    ///
    pub fn rows(&self) -> Option<Range<i64>> {
        if !self.y0.is_finite() || !self.y1.is_finite() {
            return None;
        }
        let first = first_center(self.y0);
        let end = first_center(self.y1);
        if first >= end {
            None
        } else {
            Some(first..end)
        }
    }
    /// Covered rows that also lie in `limit`, `None` if there are none
    pub fn rows_within(&self, limit: Range<i64>) -> Option<Range<i64>> {
        let rows = self.rows()?;
        let start = std::cmp::max(rows.start, limit.start);
        let end = std::cmp::min(rows.end, limit.end);
        if start < end {
            Some(start..end)
        } else {
            None
        }
    }
    /// Sides at height `y`, interpolated from the corners
    pub fn edges_at(&self, y: f64) -> (Edge, Edge) {
        let t = (y - self.y0) / (self.y1 - self.y0);
        (self.a0.lerp(self.a1, t), self.b0.lerp(self.b1, t))
    }
    /// Rows in top to bottom order
    pub fn scan_rows(&self) -> impl Iterator<Item = ScanRow> {
        self.rows_iter(self.rows())
    }
    /// Rows in top to bottom order, only those in `limit`
    ///
    /// Costs nothing for rows outside `limit`, however tall the trapezoid.
    pub fn scan_rows_within(&self, limit: Range<i64>) -> impl Iterator<Item = ScanRow> {
        self.rows_iter(self.rows_within(limit))
    }
    fn rows_iter(&self, rows: Option<Range<i64>>) -> impl Iterator<Item = ScanRow> {
        let t = *self;
        rows.into_iter().flatten().map(move |y| {
            let (a, b) = t.edges_at(y as f64 + 0.5);
            let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
            ScanRow { y, left, right }
        })
    }
    /// Top, bottom, `a` and `b` sides as drawn by the trapezoid overlay
    ///
    /// The top and bottom sit on the first and last covered row centers.
    pub fn outline_segments(&self) -> Option<[Segment; 4]> {
        let rows = self.rows()?;
        let top = rows.start as f64 + 0.5;
        let bottom = (rows.end - 1) as f64 + 0.5;
        let (a0, b0) = self.edges_at(top);
        let (a1, b1) = self.edges_at(bottom);
        Some([
            Segment::new(a0.x, top, b0.x, top),
            Segment::new(a1.x, bottom, b1.x, bottom),
            Segment::new(a0.x, top, a1.x, bottom),
            Segment::new(b0.x, top, b1.x, bottom),
        ])
    }
    /// Fill every covered pixel through `shader`
    pub fn fill(&self, ren: &mut RenderingBase, shader: &dyn Shader, tint: Argb8) {
        for row in self.scan_rows_within(image_rows(ren)) {
            ren.shade_span(&row, shader, tint);
        }
    }
    /// Draw the four sides through the contrast shader
    pub fn metarender_outline(&self, ren: &mut RenderingBase) {
        if let Some(segs) = self.outline_segments() {
            log::trace!("trapezoid outline y {}..{}", self.y0, self.y1);
            for s in segs.iter() {
                ren.shade_line_px(s.x0, s.y0, s.x1, s.y1, &Contrast, META_TINT);
            }
        }
    }
    /// Draw every row as a horizontal line with a tick at either end
    pub fn metarender_hlines(&self, ren: &mut RenderingBase) {
        for row in self.scan_rows_within(image_rows(ren)) {
            let y = row.center();
            let (xa, xb) = (row.left.x, row.right.x);
            ren.shade_line_px(xa, y - TICK, xa, y + TICK, &Contrast, META_TINT);
            ren.shade_line_px(xb, y - TICK, xb, y + TICK, &Contrast, META_TINT);
            ren.shade_line_px(xa, y, xb, y, &Contrast, META_TINT);
        }
    }
}

/// Split a triangle into the trapezoids that scan convert it
///
/// Vertices are sorted by height first, so any vertex order gives the same
/// result. Trapezoids that cover no rows are left out: a flat-topped or
/// flat-bottomed triangle gives one, a zero-height triangle none.
pub fn triangle_trapezoids(points: [(f64, f64); 3], uvs: [(f64, f64); 3]) -> Vec<Trapezoid> {
    let mut v = [(points[0], uvs[0]), (points[1], uvs[1]), (points[2], uvs[2])];
    v.sort_by(|p, q| (p.0).1.partial_cmp(&(q.0).1).unwrap_or(Ordering::Equal));
    let edge = |i: usize| Edge::new((v[i].0).0, (v[i].1).0, (v[i].1).1);
    let (y0, y1, y2) = ((v[0].0).1, (v[1].0).1, (v[2].0).1);
    if !(y2 > y0) {
        return vec![];
    }
    let (e0, e1, e2) = (edge(0), edge(1), edge(2));
    // Long side at the height of the middle vertex
    let waist = e0.lerp(e2, (y1 - y0) / (y2 - y0));

    let top = Trapezoid::with_edges(y0, e0, e0, y1, e1, waist);
    let bottom = Trapezoid::with_edges(y1, e1, waist, y2, e2, e2);
    [top, bottom].iter().copied().filter(|t| t.rows().is_some()).collect()
}
