//! Clipping Region

/// Inside Region
///
/// See [Liang Barsky](https://en.wikipedia.org/wiki/Liang-Barsky_algorithm)
pub const INSIDE : u8 = 0b0000;
/// Left of Region
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region
pub const RIGHT  : u8 = 0b0000_0010;
/// Below Region, smaller y
pub const BOTTOM : u8 = 0b0000_0100;
/// Above Region, larger y
pub const TOP    : u8 = 0b0000_1000;

/// Rectangle that lines are clipped against, edges included
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ClipBox {
    /// Minimum x value
    pub x1: f64,
    /// Minimum y value
    pub y1: f64,
    /// Maximum x value
    pub x2: f64,
    /// Maximum y value
    pub y2: f64,
}

impl ClipBox {
    /// Create a new clip box
    ///
    /// Values are sorted before storing
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        Self { x1, y1, x2, y2 }
    }
    /// Get location of point relative to the box
    ///
    /// Returned is a u8 made up of [INSIDE], [LEFT], [RIGHT], [BOTTOM]
    /// and [TOP] bits.
    ///
    /// [INSIDE]: constant.INSIDE.html
    /// [LEFT]: constant.LEFT.html
    /// [RIGHT]: constant.RIGHT.html
    /// [BOTTOM]: constant.BOTTOM.html
    /// [TOP]: constant.TOP.html
    pub fn clip_flags(&self, x: f64, y: f64) -> u8 {
        let mut code = INSIDE;
        if x < self.x1 { code |= LEFT; }
        if x > self.x2 { code |= RIGHT; }
        if y < self.y1 { code |= BOTTOM; }
        if y > self.y2 { code |= TOP; }
        code
    }
    /// Visible part of the segment from (`x0`,`y0`) to (`x1`,`y1`)
    ///
    /// `None` when nothing of it is inside. Segments with a non-finite
    /// endpoint or extent are dropped. An end that is cut is placed exactly
    /// on the side of the box that cut it.
    ///
    ///     use metaraster::ClipBox;
    ///     let clip = ClipBox::new(0.0, 0.0, 10.0, 10.0);
    ///     let s = clip.clip_segment(-10.0, 5.0, 10.0, 5.0).unwrap();
    ///     assert_eq!((s.x0, s.y0, s.t0), (0.0, 5.0, 0.5));
    ///     assert_eq!((s.x1, s.y1, s.t1), (10.0, 5.0, 1.0));
    ///     assert!(clip.clip_segment(-10.0, 20.0, 30.0, 20.0).is_none());
    ///
    pub fn clip_segment(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<Clipped> {
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return None;
        }
        let whole = Clipped { x0, y0, x1, y1, t0: 0.0, t1: 1.0 };
        let f0 = self.clip_flags(x0, y0);
        let f1 = self.clip_flags(x1, y1);
        if f0 == INSIDE && f1 == INSIDE {
            return Some(whole);
        }
        if f0 & f1 != INSIDE {
            return None;
        }
        let (dx, dy) = (x1 - x0, y1 - y0);
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        let sides = [
            (-dx, x0 - self.x1, LEFT),
            (dx, self.x2 - x0, RIGHT),
            (-dy, y0 - self.y1, BOTTOM),
            (dy, self.y2 - y0, TOP),
        ];
        let (mut t0, mut t1) = (0.0, 1.0);
        let (mut s0, mut s1) = (INSIDE, INSIDE);
        for &(p, q, side) in sides.iter() {
            if p == 0.0 {
                // Parallel to this side
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                    s0 = side;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                    s1 = side;
                }
            }
        }
        let (ax, ay) = self.point_on(&whole, t0, s0);
        let (bx, by) = self.point_on(&whole, t1, s1);
        Some(Clipped { x0: ax, y0: ay, x1: bx, y1: by, t0, t1 })
    }
    /// Point at `t` along `seg`, snapped onto `side`
    fn point_on(&self, seg: &Clipped, t: f64, side: u8) -> (f64, f64) {
        let (x, y) = match side {
            INSIDE if t == 0.0 => return (seg.x0, seg.y0),
            INSIDE => return (seg.x1, seg.y1),
            _ => (seg.x0 + (seg.x1 - seg.x0) * t, seg.y0 + (seg.y1 - seg.y0) * t),
        };
        let (x, y) = (x.max(self.x1).min(self.x2), y.max(self.y1).min(self.y2));
        match side {
            LEFT => (self.x1, y),
            RIGHT => (self.x2, y),
            BOTTOM => (x, self.y1),
            _ => (x, self.y2),
        }
    }
}

/// Visible part of a segment
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Clipped {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Position of (`x0`,`y0`) along the original segment, 0 at its start
    pub t0: f64,
    /// Position of (`x1`,`y1`) along the original segment, 1 at its end
    pub t1: f64,
}
