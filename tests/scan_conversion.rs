extern crate metaraster;

use metaraster::{render_shape, Argb8, Metarender, RenderingBase, ShaderFn, Shape, Trapezoid};

use std::time::{Duration, Instant};

/// Adds one to the red channel of every pixel it touches
fn counter() -> ShaderFn<impl Fn(Argb8, Argb8, i64, i64, f64, f64) -> Argb8> {
    ShaderFn::new(|_tint, existing: Argb8, _x, _y, _u, _v| Argb8::argb(255, existing.r + 1, 0, 0))
}

/// Horizontal extent of a triangle at height `y`
fn extent(p: [(f64, f64); 3], y: f64) -> Option<(f64, f64)> {
    let mut xs = vec![];
    for i in 0..3 {
        let (a, b) = (p[i], p[(i + 1) % 3]);
        let (lo, hi) = if a.1 < b.1 { (a, b) } else { (b, a) };
        if lo.1 <= y && y <= hi.1 && hi.1 > lo.1 {
            xs.push(lo.0 + (hi.0 - lo.0) * (y - lo.1) / (hi.1 - lo.1));
        }
    }
    if xs.is_empty() {
        return None;
    }
    let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

#[test]
fn tall_triangle_has_no_gaps_or_overlaps() {
    let p = [(10.0, 0.3), (2.0, 50.7), (18.0, 30.2)];
    let mut ren = RenderingBase::with_size(24, 56).unwrap();
    ren.shade_tri(&counter(), Argb8::WHITE, None, p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1);

    for y in 0..56 {
        let row: Vec<Argb8> = (0..24).map(|x| ren.pixf.get((x, y))).collect();
        assert!(row.iter().all(|c| c.r <= 1), "row {} drawn twice", y);
        let n = row.iter().filter(|c| c.r == 1).count() as f64;
        let yc = y as f64 + 0.5;
        match extent(p, yc) {
            Some((x0, x1)) => {
                let w = x1 - x0;
                assert!((n - w).abs() <= 1.0, "row {}: {} pixels for width {}", y, n, w);
                if w >= 1.0 {
                    assert!(n > 0.0, "row {} skipped", y);
                }
            }
            None => assert_eq!(n, 0.0, "row {} outside the triangle", y),
        }
    }
}

#[test]
fn triangles_sharing_an_edge_partition_pixels() {
    let mut ren = RenderingBase::with_size(20, 20).unwrap();
    let c = counter();
    ren.shade_tri(&c, Argb8::WHITE, None, 0.0, 0.0, 20.0, 0.0, 0.0, 20.0);
    ren.shade_tri(&c, Argb8::WHITE, None, 20.0, 0.0, 20.0, 20.0, 0.0, 20.0);
    for y in 0..20 {
        for x in 0..20 {
            assert_eq!(ren.pixf.get((x, y)).r, 1, "pixel {},{}", x, y);
        }
    }
}

#[test]
fn stacked_trapezoids_share_no_row() {
    let a = Trapezoid::new(0.0, 8.0, 0.2, 1.0, 7.0, 4.6);
    let b = Trapezoid::new(1.0, 7.0, 4.6, 3.0, 5.0, 9.1);
    let ra = a.rows().unwrap();
    let rb = b.rows().unwrap();
    assert_eq!(ra.end, rb.start);
    assert_eq!(ra.start, 0);
    assert_eq!(rb.end, 9);
}

#[test]
fn degenerate_triangle_fills_nothing() {
    let mut ren = RenderingBase::with_size(16, 16).unwrap();
    let red = Argb8::rgb(255, 0, 0);
    let shapes = [
        Shape::triangle((3.0, 3.0), (3.0, 3.0), (12.0, 9.0), red),
        Shape::triangle((1.0, 5.0), (7.0, 5.0), (14.0, 5.0), red),
        Shape::triangle((2.0, 2.0), (6.0, 6.0), (10.0, 10.0), red),
    ];
    for s in shapes.iter() {
        let status = metaraster::render(&mut ren, s, red).unwrap();
        assert!(status.is_rendered());
    }
    assert!(ren.pixf.pixels().iter().all(|&p| p == 0));
}

#[test]
fn huge_coordinates_are_clipped() {
    let tri = Shape::triangle((-1e300, -1e300), (1e300, 1e300), (0.0, 5.0), Argb8::WHITE);
    let modes = [
        Metarender::None,
        Metarender::Outline,
        Metarender::Triangle,
        Metarender::Trapezoid,
        Metarender::HLine,
    ];
    for &mode in modes.iter() {
        let mut gfx = RenderingBase::with_size(8, 8).unwrap();
        let mut meta = RenderingBase::with_size(8, 8).unwrap();
        let status = render_shape(Some(&mut gfx), Some(&mut meta), mode, &tri, Argb8::WHITE).unwrap();
        assert!(status.is_rendered(), "{}", mode);
    }
    let mut ren = RenderingBase::with_size(8, 8).unwrap();
    ren.draw_line(Argb8::WHITE, -1e300, 4.5, 1e300, 4.5);
    ren.outline_tri(Argb8::WHITE, -1e300, -1e300, 1e300, 1e300, 0.0, 5.0);
    for x in 0..8 {
        assert_eq!(ren.pixf.get((x, 4)), Argb8::WHITE, "pixel {},4", x);
    }
}

#[test]
fn tall_triangle_costs_only_visible_rows() {
    let tri = Shape::triangle((0.0, 0.0), (1.0, 0.0), (0.5, 2e9), Argb8::WHITE);
    let mut gfx = RenderingBase::with_size(8, 8).unwrap();
    let mut meta = RenderingBase::with_size(8, 8).unwrap();
    let start = Instant::now();
    render_shape(Some(&mut gfx), Some(&mut meta), Metarender::HLine, &tri, Argb8::WHITE).unwrap();
    render_shape(None, Some(&mut meta), Metarender::Trapezoid, &tri, Argb8::WHITE).unwrap();
    assert!(start.elapsed() < Duration::from_secs(2), "took {:?}", start.elapsed());
    // Column 0 holds the centers left of x = 1 on every visible row
    for y in 0..8 {
        assert_eq!(gfx.pixf.get((0, y)), Argb8::WHITE, "row {}", y);
    }
}

#[test]
fn off_screen_geometry_draws_nothing() {
    let mut ren = RenderingBase::with_size(8, 8).unwrap();
    let far = [
        Shape::triangle((100.0, 100.0), (300.0, 120.0), (150.0, 4e9), Argb8::WHITE),
        Shape::triangle((-50.0, -9e12), (-10.0, -9e12), (-30.0, 9e12), Argb8::WHITE),
        Shape::triangle((0.0, -1e9), (8.0, -1e9), (4.0, -10.0), Argb8::WHITE),
    ];
    let start = Instant::now();
    for s in far.iter() {
        let mut meta = ren.clone();
        render_shape(Some(&mut ren), Some(&mut meta), Metarender::HLine, s, Argb8::WHITE).unwrap();
        assert!(meta.pixf.pixels().iter().all(|&p| p == 0));
    }
    ren.draw_line(Argb8::WHITE, -1e12, -5.0, 1e12, -5.0);
    ren.draw_line(Argb8::WHITE, 20.0, -1e15, 20.0, 1e15);
    assert!(start.elapsed() < Duration::from_secs(2), "took {:?}", start.elapsed());
    assert!(ren.pixf.pixels().iter().all(|&p| p == 0));
}

#[test]
fn rendering_is_repeatable() {
    let tri = Shape::triangle((1.3, 2.7), (27.9, 8.1), (11.4, 30.6), Argb8::rgb(0, 128, 255));
    let mut a = RenderingBase::with_size(32, 32).unwrap();
    let mut b = RenderingBase::with_size(32, 32).unwrap();
    for ren in [&mut a, &mut b].iter_mut() {
        ren.shade_rect(&metaraster::Noise, Argb8::WHITE, None, 0.0, 0.0, 32.0, 32.0);
        metaraster::render(ren, &tri, tri.color).unwrap();
        ren.shade_tri(&metaraster::HsvVisualize, Argb8::WHITE, None, 30.0, 1.0, 2.0, 20.0, 25.0, 31.0);
    }
    assert_eq!(a.pixf, b.pixf);
}
