use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use metaraster::{draw_scene, Metarender, RenderStatus, RenderingBase, Scene, SceneSelector};
use std::path::{Path, PathBuf};

/// Draw the demo scenes into PNG files
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Scene to draw
    #[arg(short, long, value_enum, default_value_t = SceneArg::Rasterization)]
    scene: SceneArg,

    /// Metarender overlay drawn over the shapes
    #[arg(short, long, value_enum, default_value_t = MetaArg::None)]
    meta: MetaArg,

    /// Image width in pixels
    #[arg(long, default_value = "400")]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value = "300")]
    height: usize,

    /// Output PNG file
    #[arg(short, long, default_value = "playground.png")]
    out: PathBuf,

    /// Draw every scene, starting with --scene, adding the scene name to
    /// the output file name
    #[arg(long)]
    all: bool,
}

#[derive(ValueEnum, Debug, Copy, Clone)]
enum SceneArg {
    Rasterization,
    Shaders,
}

impl From<SceneArg> for Scene {
    fn from(s: SceneArg) -> Scene {
        match s {
            SceneArg::Rasterization => Scene::Rasterization,
            SceneArg::Shaders => Scene::Shaders,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone)]
enum MetaArg {
    None,
    Outline,
    Triangle,
    Trapezoid,
    Hline,
}

impl From<MetaArg> for Metarender {
    fn from(m: MetaArg) -> Metarender {
        match m {
            MetaArg::None => Metarender::None,
            MetaArg::Outline => Metarender::Outline,
            MetaArg::Triangle => Metarender::Triangle,
            MetaArg::Trapezoid => Metarender::Trapezoid,
            MetaArg::Hline => Metarender::HLine,
        }
    }
}

/// `out` with `-scene` added before the extension
fn scene_path(out: &Path, scene: Scene) -> PathBuf {
    let stem = out.file_stem().and_then(|s| s.to_str()).unwrap_or("playground");
    let ext = out.extension().and_then(|s| s.to_str()).unwrap_or("png");
    out.with_file_name(format!("{}-{}.{}", stem, scene, ext))
}

fn draw(gfx: &mut RenderingBase, scene: Scene, meta: Metarender, path: &Path) -> Result<()> {
    if let RenderStatus::Unsupported(u) = draw_scene(gfx, scene, meta)? {
        warn!("{}", u);
    }
    gfx.to_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let meta = Metarender::from(args.meta);
    let mut gfx = RenderingBase::with_size(args.width, args.height)
        .context("failed to create the image")?;

    let mut selector = SceneSelector::new(args.scene.into());
    if args.all {
        for _ in 0..Scene::ALL.len() {
            let scene = selector.current();
            draw(&mut gfx, scene, meta, &scene_path(&args.out, scene))?;
            selector.next();
        }
    } else {
        draw(&mut gfx, selector.current(), meta, &args.out)?;
    }
    Ok(())
}
