//! Demo scenes
//!
//! The scene state belongs to the caller; nothing here is global.

use crate::base::RenderingBase;
use crate::color::Argb8;
use crate::error::Result;
use crate::metarender::{metarender, render, Metarender, RenderStatus};
use crate::shader::{AlphaInterpolate, HsvVisualize, Noise, Texture, UvVisualize};
use crate::shape::Shape;
use crate::transform::Transform;

use std::fmt;

/// Demo scenes, in selection order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scene {
    /// A small triangle, enlarged, with its pixel grid and overlay
    Rasterization,
    /// Noise background and three shaded squares
    Shaders,
}

impl Scene {
    pub const ALL: [Scene; 2] = [Scene::Rasterization, Scene::Shaders];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Rasterization => "rasterization",
            Scene::Shaders => "shaders",
        }
    }
    fn index(self) -> usize {
        Scene::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Currently shown scene, stepping forwards and backwards with wrap-around
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SceneSelector {
    current: Scene,
}

impl Default for SceneSelector {
    fn default() -> Self {
        Self::new(Scene::ALL[0])
    }
}

impl SceneSelector {
    pub fn new(current: Scene) -> Self {
        Self { current }
    }
    pub fn current(&self) -> Scene {
        self.current
    }
    /// Step to the following scene
    pub fn next(&mut self) -> Scene {
        let n = Scene::ALL.len();
        self.current = Scene::ALL[(self.current.index() + 1) % n];
        self.current
    }
    /// Step to the preceding scene
    pub fn prev(&mut self) -> Scene {
        let n = Scene::ALL.len();
        self.current = Scene::ALL[(self.current.index() + n - 1) % n];
        self.current
    }
}

/// Redraw `gfx` from scratch with `scene`
///
/// `meta` selects the overlay drawn on top of the rasterization scene; the
/// shader scene has no shapes to metarender.
pub fn draw_scene(gfx: &mut RenderingBase, scene: Scene, meta: Metarender) -> Result<RenderStatus> {
    log::info!("drawing {} scene at {}x{}", scene, gfx.width(), gfx.height());
    gfx.reset_transform();
    match scene {
        Scene::Rasterization => demo_rasterization(gfx, meta),
        Scene::Shaders => {
            demo_shaders(gfx);
            Ok(RenderStatus::Rendered)
        }
    }
}

fn demo_shaders(gfx: &mut RenderingBase) {
    let (width, height) = (gfx.width() as f64, gfx.height() as f64);
    gfx.shade_rect(&Noise, Argb8::WHITE, None, 0.0, 0.0, width, height);

    let n = 3.0;
    let scale = (width / n * 0.8).min(height * 0.8);
    let spacing = (width - n * scale) / (n + 1.0);
    let offset = spacing + scale / 2.0;
    let increment = spacing + scale;
    let (x, y) = (-scale / 2.0, -scale / 2.0);

    gfx.apply(Transform::new_translate(offset, height / 2.0));
    gfx.shade_rect(&AlphaInterpolate, Argb8::from_u32(0x7f0000ff), None, x, y, scale, scale);
    gfx.apply(Transform::new_translate(increment, 0.0));
    gfx.shade_rect(&UvVisualize, Argb8::WHITE, None, x, y, scale, scale);
    gfx.apply(Transform::new_translate(increment, 0.0));
    gfx.shade_rect(&HsvVisualize, Argb8::WHITE, None, x, y, scale, scale);
}

/// Triangle drawn at 1:1 in the corner of the image
const RASTER_TRI: [(f64, f64); 3] = [(0.6, 0.9), (5.1, 17.6), (18.2, 6.3)];
/// Size of the enlarged region, in source pixels
const RASTER_GRID: i64 = 20;

fn demo_rasterization(gfx: &mut RenderingBase, meta: Metarender) -> Result<RenderStatus> {
    let (width, height) = (gfx.width() as i64, gfx.height() as i64);
    let min = std::cmp::min(width, height);
    gfx.background(Argb8::BLACK);

    let [p0, p1, p2] = RASTER_TRI;
    let red = Argb8::rgb(255, 0, 0);
    let tri = Shape::triangle(p0, p1, p2, red);
    render(gfx, &tri, red)?;

    // Enlarge the corner, sampling from a copy of what was just drawn
    let source = gfx.pixf.clone();
    let (sw, sh) = (RASTER_GRID as f64, RASTER_GRID as f64);
    let scale = std::cmp::max(1, (min - 40) / RASTER_GRID);
    let margin_x = (width - scale * RASTER_GRID) / 2;
    let margin_y = (height - scale * RASTER_GRID) / 2;
    gfx.apply(Transform::new_translate(margin_x as f64, margin_y as f64));
    gfx.apply(Transform::new_scale(scale as f64, scale as f64));

    let (uw, vh) = (sw / width as f64, sh / height as f64);
    let uvs = [(0.0, 0.0), (uw, 0.0), (uw, vh), (0.0, vh)];
    gfx.shade_rect(&Texture::new(&source), Argb8::WHITE, Some(&uvs), 0.0, 0.0, sw, sh);

    let grid = Argb8::from_u32(0x3f000000);
    for i in 0..=RASTER_GRID {
        let i = i as f64;
        gfx.draw_line(grid, i, 0.0, i, sh);
        gfx.draw_line(grid, 0.0, i, sw, i);
    }
    gfx.outline_tri(Argb8::WHITE, p0.0, p0.1, p1.0, p1.1, p2.0, p2.1);

    metarender(gfx, meta, &tri)
}
