//! Rendering and metarendering of shapes
//!
//! A single call can draw a shape into a target buffer and, at the same
//! time, draw into a second buffer how the rasterizer saw it: the true
//! outline, the triangles, the trapezoids or every scanline.
//!
//! Triangles are fully supported. Lines, rectangles, polygons and circles
//! are accepted and validated but draw nothing yet; those calls report
//! [RenderStatus::Unsupported] so callers can tell.
//!
//! [RenderStatus::Unsupported]: enum.RenderStatus.html#variant.Unsupported

use crate::base::RenderingBase;
use crate::color::Argb8;
use crate::error::Result;
use crate::scan::triangle_trapezoids;
use crate::shader::Contrast;
use crate::shape::{Point, Shape, ShapeKind, Triangle};

use std::fmt;

/// What the metarender overlay shows
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Metarender {
    /// No overlay
    None,
    /// The perfect shape outline
    Outline,
    /// The perfect triangles
    Triangle,
    /// The trapezoids the triangles are split into
    Trapezoid,
    /// Every horizontal scanline of the trapezoids
    HLine,
}

impl Default for Metarender {
    fn default() -> Metarender {
        Metarender::None
    }
}

impl fmt::Display for Metarender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metarender::None => "none",
            Metarender::Outline => "outline",
            Metarender::Triangle => "triangle",
            Metarender::Trapezoid => "trapezoid",
            Metarender::HLine => "hline",
        };
        f.write_str(s)
    }
}

/// A shape / mode pair with no drawing behind it yet
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Unsupported {
    /// Name of the shape kind
    pub kind: &'static str,
    /// Metarender mode requested, `None` for the real rendering
    pub mode: Metarender,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rendering with metarender mode {} is not implemented", self.kind, self.mode)
    }
}

/// Outcome of a successful render call
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// Everything that was asked for was drawn (possibly nothing)
    Rendered,
    /// The shape was valid but has no renderer for what was asked
    Unsupported(Unsupported),
}

impl RenderStatus {
    pub fn is_rendered(&self) -> bool {
        *self == RenderStatus::Rendered
    }
}

/// Render `shape` into `gfx` and metarender it into `meta`
///
/// Either buffer may be left out. The shape is validated first; an invalid
/// shape touches no pixels. `color` is used for the real rendering; the
/// overlay always goes through the contrast shader.
///
///     use metaraster::{Argb8, Metarender, RenderingBase, Shape, render_shape};
///
///     let mut gfx = RenderingBase::with_size(16, 16).unwrap();
///     let mut meta = RenderingBase::with_size(16, 16).unwrap();
///     let tri = Shape::triangle((0.0, 0.0), (10.0, 0.0), (5.0, 10.0), Argb8::rgb(255, 0, 0));
///     let status = render_shape(Some(&mut gfx), Some(&mut meta), Metarender::Trapezoid,
///                               &tri, tri.color).unwrap();
///     assert!(status.is_rendered());
///
pub fn render_shape(
    gfx: Option<&mut RenderingBase>,
    meta: Option<&mut RenderingBase>,
    mode: Metarender,
    shape: &Shape,
    color: Argb8,
) -> Result<RenderStatus> {
    shape.validate()?;
    log::debug!("render {} color {:08x} metarender {}", shape.kind, color.to_u32(), mode);
    match &shape.kind {
        ShapeKind::Triangle(tri) => {
            render_tri(gfx, meta, mode, &transformed(shape, tri), color);
            Ok(RenderStatus::Rendered)
        }
        other => {
            if gfx.is_none() && (meta.is_none() || mode == Metarender::None) {
                return Ok(RenderStatus::Rendered);
            }
            let unsupported = Unsupported {
                kind: other.name(),
                mode: if meta.is_some() { mode } else { Metarender::None },
            };
            log::warn!("{}", unsupported);
            Ok(RenderStatus::Unsupported(unsupported))
        }
    }
}

/// Render `shape` into `gfx` without any overlay
pub fn render(gfx: &mut RenderingBase, shape: &Shape, color: Argb8) -> Result<RenderStatus> {
    render_shape(Some(gfx), None, Metarender::None, shape, color)
}

/// Draw only the overlay of `shape` into `meta`
pub fn metarender(meta: &mut RenderingBase, mode: Metarender, shape: &Shape) -> Result<RenderStatus> {
    render_shape(None, Some(meta), mode, shape, shape.color)
}

/// Triangle with the shape's own transform applied
fn transformed(shape: &Shape, tri: &Triangle) -> Triangle {
    let t = |p: Point| {
        let (x, y) = shape.transform.transform(p.x, p.y);
        Point::new(x, y)
    };
    Triangle { p0: t(tri.p0), p1: t(tri.p1), p2: t(tri.p2) }
}

fn render_tri(gfx: Option<&mut RenderingBase>, meta: Option<&mut RenderingBase>,
              mode: Metarender, tri: &Triangle, color: Argb8) {
    let (p0, p1, p2) = (tri.p0, tri.p1, tri.p2);
    if let Some(gfx) = gfx {
        gfx.fill_tri(color, p0.x, p0.y, p1.x, p1.y, p2.x, p2.y);
    }
    let meta = match meta {
        Some(meta) => meta,
        None => return,
    };
    match mode {
        Metarender::None => {}
        Metarender::Outline | Metarender::Triangle => {
            meta.shade_outline_tri(&Contrast, Argb8::WHITE, p0.x, p0.y, p1.x, p1.y, p2.x, p2.y);
        }
        Metarender::Trapezoid | Metarender::HLine => {
            let pts = [
                meta.to_pixels(p0.x, p0.y),
                meta.to_pixels(p1.x, p1.y),
                meta.to_pixels(p2.x, p2.y),
            ];
            let traps = triangle_trapezoids(pts, [(0.0, 0.0); 3]);
            log::debug!("triangle split into {} trapezoid(s)", traps.len());
            for t in traps.iter() {
                if mode == Metarender::HLine {
                    t.metarender_hlines(meta);
                } else {
                    t.metarender_outline(meta);
                }
            }
        }
    }
}
