//! Shape rendering with a rasterizer that can draw its own workings
//!
//! How does this work
//!
//! ```text
//!    gfx  = RenderingBase( Pixfmt( RenderingBuffer ) ) + Transform
//!    meta = another RenderingBase, usually the same size
//!  Shape Operations
//!    render_shape(gfx, meta, mode, shape, color)
//!      shape.validate()            -- InvalidShape, nothing drawn
//!      shape.transform, then the buffer transform
//!      gfx:  fill_tri()
//!        triangle_trapezoids()     -- sort by y, split at middle vertex
//!        Trapezoid::fill()
//!          scan_rows_within()      -- pixel centers in [y0,y1), image rows only
//!          shade_span()            -- pixel centers in [left,right)
//!            shade_pixel()         -- alpha promises, Shader::shade
//!      meta: Outline / Triangle    -- shade_outline_tri() with Contrast
//!            Trapezoid             -- outline_segments() with Contrast
//!            HLine                 -- scan_rows_within(), one line + two ticks each
//!      every line                  -- ClipBox::clip_segment() before the DDA
//!    other shape kinds             -- RenderStatus::Unsupported
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod math;
pub mod pixfmt;
pub mod base;
pub mod transform;
pub mod line;
pub mod clip;
pub mod shader;
pub mod scan;
pub mod shape;
pub mod metarender;
pub mod scene;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::math::*;
pub use crate::pixfmt::*;
pub use crate::base::*;
pub use crate::transform::*;
pub use crate::line::*;
pub use crate::clip::*;
pub use crate::shader::*;
pub use crate::scan::*;
pub use crate::shape::*;
pub use crate::metarender::*;
pub use crate::scene::*;

const POLY_SUBPIXEL_SHIFT : i64 = 8;
const POLY_SUBPIXEL_SCALE : i64 = 1<<POLY_SUBPIXEL_SHIFT;

/// Per-pixel color function
///
/// Called once for every pixel a fill or line covers, with the pixel
/// position `x`,`y`, the shape-local texture coordinates `u`,`v` (usually
/// in [0,1]), the caller's `tint` and the color already in the destination.
/// The returned color replaces the destination pixel.
///
/// The two promises let the renderer skip work. They are trusted, not
/// checked.
pub trait Shader {
    /// Compute the new color of a pixel
    fn shade(&self, tint: Argb8, existing: Argb8, x: i64, y: i64, u: f64, v: f64) -> Argb8;
    /// Output is always fully transparent, the destination never changes
    ///
    /// The renderer then skips the shader entirely.
    fn alpha_promise_0(&self) -> bool {
        false
    }
    /// Output is always fully opaque and never depends on `existing`
    ///
    /// The renderer then does not read the destination and passes
    /// transparent black as `existing`.
    fn alpha_promise_255(&self) -> bool {
        false
    }
}

impl<S: Shader + ?Sized> Shader for &S {
    fn shade(&self, tint: Argb8, existing: Argb8, x: i64, y: i64, u: f64, v: f64) -> Argb8 {
        (**self).shade(tint, existing, x, y, u, v)
    }
    fn alpha_promise_0(&self) -> bool {
        (**self).alpha_promise_0()
    }
    fn alpha_promise_255(&self) -> bool {
        (**self).alpha_promise_255()
    }
}
