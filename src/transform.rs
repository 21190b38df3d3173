//! Transformations

/// 2D Affine Transformation
///
/// Maps `(x, y)` to `(x * sx + y * shx + tx, x * shy + y * sy + ty)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        *self = self.mul_transform(&Self::new_translate(dx, dy));
    }
    /// Add a scaling to the transform
    pub fn scale(&mut self, sx: f64, sy: f64) {
        *self = self.mul_transform(&Self::new_scale(sx, sy));
    }
    /// Add a rotation to the transform
    ///
    /// angle is in radians
    pub fn rotate(&mut self, angle: f64) {
        *self = self.mul_transform(&Self::new_rotate(angle));
    }
    /// Apply the transform to a point
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform that applies `self` first and then `m`
    pub fn mul_transform(&self, m: &Transform) -> Self {
        let t0  = self.sx  * m.sx  + self.shy * m.shx;
        let t2  = self.shx * m.sx  + self.sy  * m.shx;
        let t4  = self.tx  * m.sx  + self.ty  * m.shx + m.tx;
        let shy = self.sx  * m.shy + self.shy * m.sy;
        let sy  = self.shx * m.shy + self.sy  * m.sy;
        let ty  = self.tx  * m.shy + self.ty  * m.sy + m.ty;
        Transform { sx: t0, sy, tx: t4, ty, shx: t2, shy }
    }
    /// Rectangles stay axis-aligned: no rotation or shear
    pub fn is_axis_aligned(&self) -> bool {
        self.shx == 0.0 && self.shy == 0.0
    }
    /// Nothing but finite components
    pub fn is_finite(&self) -> bool {
        [self.sx, self.sy, self.shx, self.shy, self.tx, self.ty]
            .iter()
            .all(|v| v.is_finite())
    }
    pub fn new_scale(sx: f64, sy: f64) -> Transform {
        Self { sx, sy, ..Self::new() }
    }
    pub fn new_translate(tx: f64, ty: f64) -> Transform {
        Self { tx, ty, ..Self::new() }
    }
    /// Rotation by `ang` radians, counter-clockwise with y up
    pub fn new_rotate(ang: f64) -> Transform {
        let (sa, ca) = ang.sin_cos();
        Self { sx: ca, shx: -sa, shy: sa, sy: ca, tx: 0.0, ty: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn scale_then_translate() {
        let t = Transform::new_scale(2.0, 3.0).mul_transform(&Transform::new_translate(10.0, 20.0));
        assert!(close(t.transform(1.0, 1.0), (12.0, 23.0)));
        let mut t = Transform::new_translate(10.0, 20.0);
        t.scale(2.0, 3.0);
        assert!(close(t.transform(1.0, 1.0), (22.0, 63.0)));
        assert!(t.is_axis_aligned());
    }
    #[test]
    fn rotate_quarter_turn() {
        let t = Transform::new_rotate(std::f64::consts::FRAC_PI_2);
        assert!(close(t.transform(1.0, 0.0), (0.0, 1.0)));
        assert!(!t.is_axis_aligned());
        let mut r = Transform::new_translate(1.0, 0.0);
        r.rotate(std::f64::consts::PI);
        assert!(close(r.transform(1.0, 0.0), (-2.0, 0.0)));
    }
}
