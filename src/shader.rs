//! Per-pixel shaders
//!
//! Every shader is a pure function of its inputs. The value a shader returns
//! is stored in the destination as-is, so shaders that want blending do it
//! themselves using the `existing` color they are handed.

use crate::color::Argb8;
use crate::math::unit_to_u8;
use crate::pixfmt::Pixfmt;
use crate::Shader;

/// Pseudorandom hash of a pixel position
///
/// Multiply / rotate / xor mixing; the low bits are uniform enough to pick
/// noise levels from.
pub fn pix_rand(ix: i64, iy: i64) -> u32 {
    let mut a = ix as u32;
    let mut b = iy as u32;
    a = a.wrapping_mul(3_284_157_443);
    b ^= a.rotate_left(16);
    b = b.wrapping_mul(1_911_520_717);
    a ^= b.rotate_left(16);
    a.wrapping_mul(2_048_419_325)
}

/// Dark gray noise in blocks of 4x4 pixels
#[derive(Debug, Default, Copy, Clone)]
pub struct Noise;

impl Shader for Noise {
    fn shade(&self, _tint: Argb8, _existing: Argb8, x: i64, y: i64, _u: f64, _v: f64) -> Argb8 {
        let n = (pix_rand(x / 4, y / 4) % 8 + 16) as u8;
        Argb8::rgb(n, n, n)
    }
    fn alpha_promise_255(&self) -> bool {
        true
    }
}

/// Blend the opaque tint over the destination, more strongly towards (1,1)
///
/// The blend factor is `(u + v) * tint alpha`, clamped to [0,1].
#[derive(Debug, Default, Copy, Clone)]
pub struct AlphaInterpolate;

impl Shader for AlphaInterpolate {
    fn shade(&self, tint: Argb8, existing: Argb8, _x: i64, _y: i64, u: f64, v: f64) -> Argb8 {
        let factor = (u + v) * tint.alpha_fraction();
        Argb8::lerp(unit_to_u8(factor), existing, tint.with_alpha(255))
    }
}

/// Red shows `u`, green shows `v`
#[derive(Debug, Default, Copy, Clone)]
pub struct UvVisualize;

impl Shader for UvVisualize {
    fn shade(&self, _tint: Argb8, _existing: Argb8, _x: i64, _y: i64, u: f64, v: f64) -> Argb8 {
        Argb8::rgb(unit_to_u8(u), unit_to_u8(v), 0)
    }
    fn alpha_promise_255(&self) -> bool {
        true
    }
}

/// Hue follows `u`, saturation falls off with `v`
#[derive(Debug, Default, Copy, Clone)]
pub struct HsvVisualize;

impl Shader for HsvVisualize {
    fn shade(&self, _tint: Argb8, _existing: Argb8, _x: i64, _y: i64, u: f64, v: f64) -> Argb8 {
        Argb8::hsv(unit_to_u8(u), 255 - unit_to_u8(v), 255)
    }
    fn alpha_promise_255(&self) -> bool {
        true
    }
}

/// Channel sum at or above which the contrast shader draws black
pub const CONTRAST_THRESHOLD: u16 = 184;

/// Black on light tints, white on dark ones
///
/// The opaque black or white is mixed over the destination by the tint's
/// alpha, alpha channel included: the result's alpha moves from the
/// destination's towards 255, it is not the tint's own alpha. Only an
/// opaque tint gives an opaque result, so no alpha promise is made. Used
/// for metarender overlays so lines stay visible over any fill.
#[derive(Debug, Default, Copy, Clone)]
pub struct Contrast;

impl Shader for Contrast {
    fn shade(&self, tint: Argb8, existing: Argb8, _x: i64, _y: i64, _u: f64, _v: f64) -> Argb8 {
        let target = if tint.channel_sum() >= CONTRAST_THRESHOLD {
            Argb8::BLACK
        } else {
            Argb8::WHITE
        };
        Argb8::lerp(tint.a, existing, target)
    }
}

/// Flat color, alpha blended over the destination
///
/// The tint handed to [Shader::shade] is ignored; the stored color decides
/// both the output and the alpha promises.
#[derive(Debug, Copy, Clone)]
pub struct Solid(pub Argb8);

impl Shader for Solid {
    fn shade(&self, _tint: Argb8, existing: Argb8, _x: i64, _y: i64, _u: f64, _v: f64) -> Argb8 {
        match self.0.a {
            255 => self.0,
            a => Argb8::lerp(a, existing, self.0.with_alpha(255)),
        }
    }
    fn alpha_promise_0(&self) -> bool {
        self.0.a == 0
    }
    fn alpha_promise_255(&self) -> bool {
        self.0.a == 255
    }
}

/// Nearest-neighbour lookup into another image at `(u * width, v * height)`
#[derive(Debug, Copy, Clone)]
pub struct Texture<'a> {
    src: &'a Pixfmt,
}

impl<'a> Texture<'a> {
    pub fn new(src: &'a Pixfmt) -> Self {
        Self { src }
    }
}

impl Shader for Texture<'_> {
    fn shade(&self, _tint: Argb8, _existing: Argb8, _x: i64, _y: i64, u: f64, v: f64) -> Argb8 {
        let sample = |t: f64, n: usize| -> usize {
            let i = (t * n as f64).floor();
            if i.is_nan() || i < 0.0 {
                0
            } else {
                std::cmp::min(i as usize, n - 1)
            }
        };
        let x = sample(u, self.src.width());
        let y = sample(v, self.src.height());
        self.src.get((x, y))
    }
}

/// A closure used as a shader, with explicitly declared alpha promises
///
/// The promises are not checked; declaring one the closure breaks gives
/// unspecified output.
///
///     use metaraster::{Argb8, Shader, ShaderFn};
///
///     let checker = ShaderFn::new(|_t, _e, x, y, _u, _v| {
///         if (x + y) % 2 == 0 { Argb8::BLACK } else { Argb8::WHITE }
///     }).opaque();
///     assert!(checker.alpha_promise_255());
///     assert_eq!(checker.shade(Argb8::WHITE, Argb8::TRANSPARENT, 1, 0, 0.0, 0.0), Argb8::WHITE);
///
pub struct ShaderFn<F> {
    func: F,
    promise_0: bool,
    promise_255: bool,
}

impl<F> ShaderFn<F>
where
    F: Fn(Argb8, Argb8, i64, i64, f64, f64) -> Argb8,
{
    pub fn new(func: F) -> Self {
        Self { func, promise_0: false, promise_255: false }
    }
    /// Declare that the closure only ever returns fully transparent colors
    pub fn transparent(mut self) -> Self {
        self.promise_0 = true;
        self
    }
    /// Declare that the closure only ever returns fully opaque colors
    pub fn opaque(mut self) -> Self {
        self.promise_255 = true;
        self
    }
}

impl<F> Shader for ShaderFn<F>
where
    F: Fn(Argb8, Argb8, i64, i64, f64, f64) -> Argb8,
{
    fn shade(&self, tint: Argb8, existing: Argb8, x: i64, y: i64, u: f64, v: f64) -> Argb8 {
        (self.func)(tint, existing, x, y, u, v)
    }
    fn alpha_promise_0(&self) -> bool {
        self.promise_0
    }
    fn alpha_promise_255(&self) -> bool {
        self.promise_255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Argb8 = Argb8::rgb(10, 20, 30);

    #[test]
    fn noise_is_positional_and_gray() {
        let a = Noise.shade(Argb8::WHITE, BG, 13, 7, 0.0, 0.0);
        let b = Noise.shade(Argb8::BLACK, Argb8::WHITE, 13, 7, 0.9, 0.1);
        assert_eq!(a, b);
        for y in -8..40 {
            for x in -8..40 {
                let c = Noise.shade(Argb8::WHITE, BG, x, y, 0.0, 0.0);
                assert_eq!(c.a, 255);
                assert_eq!(c.r, c.g);
                assert_eq!(c.g, c.b);
                assert!(c.r >= 16 && c.r <= 23, "{:?} at {},{}", c, x, y);
            }
        }
        // Blocks of 4x4 share a value
        assert_eq!(Noise.shade(BG, BG, 4, 4, 0., 0.), Noise.shade(BG, BG, 7, 7, 0., 0.));
    }

    #[test]
    fn noise_levels_vary() {
        let mut seen = [false; 8];
        for y in 0..64 {
            for x in 0..64 {
                let c = Noise.shade(BG, BG, x * 4, y * 4, 0., 0.);
                seen[(c.r - 16) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn alpha_interpolate_factor() {
        let tint = Argb8::argb(255, 0, 0, 255);
        assert_eq!(AlphaInterpolate.shade(tint, BG, 0, 0, 0.0, 0.0), BG);
        assert_eq!(AlphaInterpolate.shade(tint, BG, 0, 0, 1.0, 0.5), Argb8::rgb(0, 0, 255));
        // Half alpha at u+v = 1 is a half blend
        let tint = Argb8::argb(128, 0, 0, 255);
        let c = AlphaInterpolate.shade(tint, Argb8::rgb(0, 0, 0), 0, 0, 0.5, 0.5);
        assert!(c.b == 127 || c.b == 128, "{:?}", c);
        assert!(!AlphaInterpolate.alpha_promise_255());
    }

    #[test]
    fn uv_and_hsv() {
        assert_eq!(UvVisualize.shade(BG, BG, 0, 0, 1.0, 0.0), Argb8::rgb(255, 0, 0));
        assert_eq!(UvVisualize.shade(BG, BG, 0, 0, 0.0, 1.0), Argb8::rgb(0, 255, 0));
        assert_eq!(HsvVisualize.shade(BG, BG, 0, 0, 0.0, 0.0), Argb8::rgb(255, 0, 0));
        assert_eq!(HsvVisualize.shade(BG, BG, 0, 0, 0.3, 1.0), Argb8::WHITE);
    }

    #[test]
    fn contrast_threshold_tie_break() {
        let at = Argb8::rgb(184, 0, 0);
        let below = Argb8::rgb(183, 0, 0);
        assert_eq!(Contrast.shade(at, BG, 0, 0, 0., 0.), Argb8::BLACK);
        assert_eq!(Contrast.shade(below, BG, 0, 0, 0., 0.), Argb8::WHITE);
        let spread = Argb8::rgb(60, 62, 62);
        assert_eq!(Contrast.shade(spread, BG, 0, 0, 0., 0.), Argb8::BLACK);
        // Transparent tint leaves the destination alone
        assert_eq!(Contrast.shade(at.with_alpha(0), BG, 0, 0, 0., 0.), BG);
        // Half tint alpha blends, so the destination matters
        let half = Contrast.shade(Argb8::argb(128, 255, 255, 255), Argb8::rgb(255, 0, 0), 0, 0, 0., 0.);
        assert_eq!(half, Argb8::rgb(127, 0, 0));
        assert!(!Contrast.alpha_promise_255() && !Contrast.alpha_promise_0());
    }

    #[test]
    fn solid_promises_follow_alpha() {
        assert!(Solid(Argb8::WHITE).alpha_promise_255());
        assert!(Solid(Argb8::TRANSPARENT).alpha_promise_0());
        let half = Solid(Argb8::argb(128, 255, 255, 255));
        assert!(!half.alpha_promise_0() && !half.alpha_promise_255());
        assert_eq!(half.shade(Argb8::WHITE, Argb8::BLACK, 0, 0, 0., 0.), Argb8::rgb(128, 128, 128));
    }

    #[test]
    fn texture_clamps() {
        let mut src = Pixfmt::new(2, 2).unwrap();
        src.set((1, 1), Argb8::WHITE);
        let tex = Texture::new(&src);
        assert_eq!(tex.shade(BG, BG, 0, 0, 0.75, 0.75), Argb8::WHITE);
        assert_eq!(tex.shade(BG, BG, 0, 0, 5.0, 5.0), Argb8::WHITE);
        assert_eq!(tex.shade(BG, BG, 0, 0, -1.0, 0.2), Argb8::TRANSPARENT);
    }
}
