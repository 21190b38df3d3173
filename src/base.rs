//! Rendering Base
//!
//! Drawing entry points taking caller coordinates. Every point goes through
//! the current [Transform] before it reaches pixel space, and every pixel
//! write goes through [RenderingBase::shade_pixel].
//!
//! [Transform]: ../transform/struct.Transform.html
//! [RenderingBase::shade_pixel]: struct.RenderingBase.html#method.shade_pixel

use crate::clip::ClipBox;
use crate::color::Argb8;
use crate::error::Result;
use crate::line::LinePixels;
use crate::pixfmt::Pixfmt;
use crate::scan::{triangle_trapezoids, Edge, ScanRow, Trapezoid};
use crate::shader::Solid;
use crate::transform::Transform;
use crate::Shader;

use std::cmp::max;
use std::cmp::min;
use std::path::Path;

/// Texture coordinates for the three corners of a triangle
pub type TriUv = [(f64, f64); 3];
/// Texture coordinates for the four corners of a rectangle, clockwise from
/// the origin corner
pub type QuadUv = [(f64, f64); 4];

/// Texture coordinates used when a triangle is shaded without any
pub const DEFAULT_TRI_UV: TriUv = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
/// Texture coordinates used when a rectangle is shaded without any
pub const DEFAULT_QUAD_UV: QuadUv = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Pixel buffer together with the transform applied to incoming geometry
#[derive(Debug, Clone)]
pub struct RenderingBase {
    pub pixf: Pixfmt,
    transform: Transform,
    stack: Vec<Transform>,
    /// Use the shaders' alpha promises to skip work
    ///
    /// On by default. Turning it off must not change the output of shaders
    /// that keep their promises.
    pub honor_promises: bool,
}

impl RenderingBase {
    /// Create a new Rendering Base from a Pixel Format
    pub fn new(pixf: Pixfmt) -> Self {
        Self {
            pixf,
            transform: Transform::new(),
            stack: vec![],
            honor_promises: true,
        }
    }
    /// Create a new, fully transparent, width x height Rendering Base
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        Ok(Self::new(Pixfmt::new(width, height)?))
    }
    pub fn width(&self) -> usize {
        self.pixf.width()
    }
    pub fn height(&self) -> usize {
        self.pixf.height()
    }
    /// Inclusive pixel limits as (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64, i64, i64, i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w - 1, 0, h - 1)
    }
    /// Fill the whole image, ignoring the transform
    pub fn background(&mut self, color: Argb8) {
        self.pixf.fill(color);
    }
    /// Write the image to a file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        self.pixf.to_file(filename)
    }

    /// Current transform
    pub fn transform(&self) -> Transform {
        self.transform
    }
    /// Apply `m` to incoming geometry before the current transform
    pub fn apply(&mut self, m: Transform) {
        self.transform = m.mul_transform(&self.transform);
    }
    /// Go back to the identity transform and drop saved transforms
    pub fn reset_transform(&mut self) {
        self.transform = Transform::new();
        self.stack.clear();
    }
    /// Save the current transform
    pub fn push_transform(&mut self) {
        self.stack.push(self.transform);
    }
    /// Restore the last saved transform; false if there was none
    pub fn pop_transform(&mut self) -> bool {
        match self.stack.pop() {
            Some(t) => {
                self.transform = t;
                true
            }
            None => false,
        }
    }
    /// Caller coordinates to pixel coordinates
    pub fn to_pixels(&self, x: f64, y: f64) -> (f64, f64) {
        self.transform.transform(x, y)
    }

    /// Run `shader` for pixel (`x`,`y`) and store the result
    ///
    /// Pixels outside the image are ignored.
    pub fn shade_pixel(&mut self, x: i64, y: i64, shader: &dyn Shader, tint: Argb8, u: f64, v: f64) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return;
        }
        if self.honor_promises && shader.alpha_promise_0() {
            return;
        }
        let id = (x as usize, y as usize);
        let existing = if self.honor_promises && shader.alpha_promise_255() {
            Argb8::TRANSPARENT
        } else {
            self.pixf.get(id)
        };
        let c = shader.shade(tint, existing, x, y, u, v);
        self.pixf.set(id, c);
    }
    /// Shade the covered pixels of one scan row, clipped to the image
    pub fn shade_span(&mut self, row: &ScanRow, shader: &dyn Shader, tint: Argb8) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        if row.y < ymin || row.y > ymax {
            return;
        }
        let px = row.pixels();
        let (x1, x2) = (max(px.start, xmin), min(px.end, xmax + 1));
        for x in x1..x2 {
            let e = row.edge_at(x);
            self.shade_pixel(x, row.y, shader, tint, e.u, e.v);
        }
    }

    /// Box that lines are clipped to, one pixel wider than the image
    fn line_clip_box(&self) -> ClipBox {
        let (xmin, xmax, ymin, ymax) = self.limits();
        ClipBox::new(xmin as f64 - 1.0, ymin as f64 - 1.0, xmax as f64 + 2.0, ymax as f64 + 2.0)
    }
    /// Shaded line in pixel coordinates; `u` runs from 0 to 1 along it
    ///
    /// The line is clipped before it is walked, so only the part near the
    /// image costs anything.
    pub fn shade_line_px(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, shader: &dyn Shader, tint: Argb8) {
        let c = match self.line_clip_box().clip_segment(x0, y0, x1, y1) {
            Some(c) => c,
            None => return,
        };
        let px = LinePixels::new(c.x0, c.y0, c.x1, c.y1);
        let n = px.len();
        let step = if n > 1 { (c.t1 - c.t0) / (n - 1) as f64 } else { 0.0 };
        for (i, (x, y)) in px.enumerate() {
            self.shade_pixel(x, y, shader, tint, c.t0 + i as f64 * step, 0.0);
        }
    }
    /// Shaded line from (`x0`,`y0`) to (`x1`,`y1`)
    pub fn shade_line(&mut self, shader: &dyn Shader, tint: Argb8, x0: f64, y0: f64, x1: f64, y1: f64) {
        let (x0, y0) = self.to_pixels(x0, y0);
        let (x1, y1) = self.to_pixels(x1, y1);
        self.shade_line_px(x0, y0, x1, y1, shader, tint);
    }
    /// Solid line from (`x0`,`y0`) to (`x1`,`y1`)
    pub fn draw_line(&mut self, color: Argb8, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.shade_line(&Solid(color), color, x0, y0, x1, y1);
    }

    /// Shaded triangle outline
    #[allow(clippy::too_many_arguments)]
    pub fn shade_outline_tri(&mut self, shader: &dyn Shader, tint: Argb8,
                             x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.shade_line(shader, tint, x0, y0, x1, y1);
        self.shade_line(shader, tint, x1, y1, x2, y2);
        self.shade_line(shader, tint, x2, y2, x0, y0);
    }
    /// Solid triangle outline
    #[allow(clippy::too_many_arguments)]
    pub fn outline_tri(&mut self, color: Argb8, x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.shade_outline_tri(&Solid(color), color, x0, y0, x1, y1, x2, y2);
    }

    /// Filled triangle with every pixel computed by `shader`
    ///
    /// Without `uvs` the corners get [DEFAULT_TRI_UV].
    ///
    /// [DEFAULT_TRI_UV]: constant.DEFAULT_TRI_UV.html
    #[allow(clippy::too_many_arguments)]
    pub fn shade_tri(&mut self, shader: &dyn Shader, tint: Argb8, uvs: Option<&TriUv>,
                     x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) {
        let pts = [self.to_pixels(x0, y0), self.to_pixels(x1, y1), self.to_pixels(x2, y2)];
        let uvs = uvs.unwrap_or(&DEFAULT_TRI_UV);
        for t in triangle_trapezoids(pts, *uvs) {
            t.fill(self, shader, tint);
        }
    }
    /// Filled triangle of a single color
    #[allow(clippy::too_many_arguments)]
    pub fn fill_tri(&mut self, color: Argb8, x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.shade_tri(&Solid(color), color, None, x0, y0, x1, y1, x2, y2);
    }

    /// Filled rectangle with every pixel computed by `shader`
    ///
    /// A rectangle that stays axis-aligned under the transform is a single
    /// trapezoid; otherwise it is split into two triangles along the
    /// diagonal from the origin corner.
    #[allow(clippy::too_many_arguments)]
    pub fn shade_rect(&mut self, shader: &dyn Shader, tint: Argb8, uvs: Option<&QuadUv>,
                      x: f64, y: f64, width: f64, height: f64) {
        let uvs = uvs.unwrap_or(&DEFAULT_QUAD_UV);
        let corners = [(x, y), (x + width, y), (x + width, y + height), (x, y + height)];
        if self.transform.is_axis_aligned() {
            let p: Vec<(f64, f64)> = corners.iter().map(|&(x, y)| self.to_pixels(x, y)).collect();
            let e = |i: usize| Edge::new(p[i].0, uvs[i].0, uvs[i].1);
            let t = Trapezoid::with_edges(p[0].1, e(0), e(1), p[3].1, e(3), e(2));
            t.fill(self, shader, tint);
        } else {
            let c = corners;
            let upper = [uvs[0], uvs[1], uvs[2]];
            let lower = [uvs[0], uvs[2], uvs[3]];
            self.shade_tri(shader, tint, Some(&upper), c[0].0, c[0].1, c[1].0, c[1].1, c[2].0, c[2].1);
            self.shade_tri(shader, tint, Some(&lower), c[0].0, c[0].1, c[2].0, c[2].1, c[3].0, c[3].1);
        }
    }
    /// Filled rectangle of a single color
    ///
    /// An opaque color on an axis-aligned transform is copied a row at a
    /// time; the covered pixels are the same as through [`shade_rect`].
    ///
    /// [`shade_rect`]: #method.shade_rect
    pub fn fill_rect(&mut self, color: Argb8, x: f64, y: f64, width: f64, height: f64) {
        if !(self.honor_promises && color.a == 255 && self.transform.is_axis_aligned()) {
            self.shade_rect(&Solid(color), color, None, x, y, width, height);
            return;
        }
        let (x0, y0) = self.to_pixels(x, y);
        let (x1, y1) = self.to_pixels(x + width, y + height);
        let (xmin, xmax, ymin, ymax) = self.limits();
        let t = Trapezoid::new(x0, x1, y0, x0, x1, y1);
        for row in t.scan_rows_within(ymin..ymax + 1) {
            let px = row.pixels();
            let (a, b) = (max(px.start, xmin), min(px.end, xmax + 1));
            if a < b {
                self.pixf.copy_hline(a as usize, row.y as usize, (b - a) as usize, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{Noise, UvVisualize};

    fn count(ren: &RenderingBase, c: Argb8) -> usize {
        ren.pixf.pixels().iter().filter(|&&p| p == c.to_u32()).count()
    }

    #[test]
    fn rect_covers_pixel_centers() {
        let mut ren = RenderingBase::with_size(10, 10).unwrap();
        ren.fill_rect(Argb8::WHITE, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(count(&ren, Argb8::WHITE), 12);
        assert_eq!(ren.pixf.get((1, 2)), Argb8::WHITE);
        assert_eq!(ren.pixf.get((3, 5)), Argb8::WHITE);
        assert_eq!(ren.pixf.get((4, 5)), Argb8::TRANSPARENT);
    }

    #[test]
    fn opaque_fill_rect_matches_shaded_rect() {
        let rects = [(1.3, 2.6, 5.2, 3.9), (-4.0, -4.0, 30.0, 3.5), (7.5, 9.0, -3.0, -6.2), (2.0, 2.0, 0.4, 8.0)];
        let mut a = RenderingBase::with_size(12, 12).unwrap();
        a.apply(Transform::new_scale(1.5, -0.75));
        a.apply(Transform::new_translate(0.25, 11.0));
        let mut b = a.clone();
        for &(x, y, w, h) in rects.iter() {
            a.fill_rect(Argb8::rgb(200, 10, 10), x, y, w, h);
            b.shade_rect(&Solid(Argb8::rgb(200, 10, 10)), Argb8::WHITE, None, x, y, w, h);
        }
        assert_eq!(a.pixf, b.pixf);
        assert!(count(&a, Argb8::rgb(200, 10, 10)) > 0);
    }

    #[test]
    fn transform_applies_to_geometry() {
        let mut ren = RenderingBase::with_size(20, 20).unwrap();
        ren.apply(Transform::new_translate(10.0, 10.0));
        ren.apply(Transform::new_scale(2.0, 2.0));
        ren.fill_rect(Argb8::WHITE, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(count(&ren, Argb8::WHITE), 4);
        assert_eq!(ren.pixf.get((10, 10)), Argb8::WHITE);
        assert_eq!(ren.pixf.get((11, 11)), Argb8::WHITE);

        ren.push_transform();
        ren.apply(Transform::new_translate(2.0, 0.0));
        assert_eq!(ren.to_pixels(0.0, 0.0), (14.0, 10.0));
        assert!(ren.pop_transform());
        assert_eq!(ren.to_pixels(0.0, 0.0), (10.0, 10.0));
        assert!(!ren.pop_transform());
        ren.reset_transform();
        assert_eq!(ren.to_pixels(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn rotated_rect_splits_into_triangles() {
        let mut a = RenderingBase::with_size(40, 40).unwrap();
        a.apply(Transform::new_rotate(0.3));
        a.apply(Transform::new_translate(5.0, 5.0));
        a.fill_rect(Argb8::WHITE, 0.0, 0.0, 20.0, 20.0);
        // Area is preserved up to the edge pixels
        let n = count(&a, Argb8::WHITE) as i64;
        assert!((n - 400).abs() < 40, "{}", n);
    }

    #[test]
    fn clipping_ignores_outside() {
        let mut ren = RenderingBase::with_size(5, 5).unwrap();
        ren.fill_tri(Argb8::WHITE, -20.0, -20.0, 30.0, -20.0, -20.0, 30.0);
        ren.draw_line(Argb8::WHITE, -10.0, 2.5, 100.0, 2.5);
        assert_eq!(count(&ren, Argb8::WHITE), 25);
    }

    #[test]
    fn promises_do_not_change_output() {
        let mut a = RenderingBase::with_size(16, 16).unwrap();
        a.background(Argb8::rgb(1, 2, 3));
        let mut b = a.clone();
        b.honor_promises = false;
        for ren in [&mut a, &mut b].iter_mut() {
            ren.shade_rect(&Noise, Argb8::WHITE, None, 0.0, 0.0, 16.0, 16.0);
            ren.shade_tri(&UvVisualize, Argb8::WHITE, None, 2.0, 2.0, 14.0, 3.0, 6.0, 15.0);
            ren.fill_tri(Argb8::TRANSPARENT, 0.0, 0.0, 16.0, 0.0, 0.0, 16.0);
        }
        assert_eq!(a.pixf, b.pixf);
    }

    #[test]
    fn line_uv_runs_along() {
        let mut ren = RenderingBase::with_size(5, 1).unwrap();
        ren.shade_line(&UvVisualize, Argb8::WHITE, 0.5, 0.5, 4.5, 0.5);
        assert_eq!(ren.pixf.get((0, 0)), Argb8::rgb(0, 0, 0));
        assert_eq!(ren.pixf.get((4, 0)), Argb8::rgb(255, 0, 0));
    }
}
