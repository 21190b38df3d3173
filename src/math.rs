//! Fixed point helpers for 8-bit channels

/// Interpolate from `p` towards `q` by `a / 255` using fixed point math
///
/// `a == 0` returns `p`, `a == 255` returns `q`.
///
///     use metaraster::lerp_u8;
///     assert_eq!(lerp_u8(0, 255, 0), 0);
///     assert_eq!(lerp_u8(0, 255, 255), 255);
///     assert_eq!(lerp_u8(0, 255, 128), 128);
///
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q, p, a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0: i32 = (q - p) * a + base_msb - v; // Signed multiplication
    let t1: i32 = ((t0 >> base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Convert a [0,1] fraction to a channel value, clamping out of range input
pub fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= 1.0 {
        255
    } else {
        (v * 255.0) as u8
    }
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
