//! Colors

use crate::math::lerp_u8;

/// Color as Alpha, Red, Green, and Blue, 8 bits each
///
/// Packs into a `u32` as `0xAARRGGBB`. Alpha is straight (not
/// pre-multiplied); 0 is fully transparent, 255 fully opaque.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Argb8 {
    /// Alpha
    pub a: u8,
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Argb8 {
    /// Fully transparent black (0x00000000)
    pub const TRANSPARENT: Argb8 = Argb8 { a: 0, r: 0, g: 0, b: 0 };
    /// Opaque black (0xff000000)
    pub const BLACK: Argb8 = Argb8 { a: 255, r: 0, g: 0, b: 0 };
    /// Opaque white (0xffffffff)
    pub const WHITE: Argb8 = Argb8 { a: 255, r: 255, g: 255, b: 255 };

    /// Create new color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb8 { a, r, g, b }
    }
    /// Create new opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Argb8 { a: 255, r, g, b }
    }
    /// Unpack from `0xAARRGGBB`
    ///
    ///     use metaraster::Argb8;
    ///     let c = Argb8::from_u32(0x7f0000ff);
    ///     assert_eq!(c, Argb8::argb(0x7f, 0, 0, 0xff));
    ///     assert_eq!(c.to_u32(), 0x7f0000ff);
    ///
    pub const fn from_u32(v: u32) -> Self {
        Argb8 {
            a: (v >> 24) as u8,
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }
    /// Pack into `0xAARRGGBB`
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Argb8 { a, ..self }
    }
    /// Alpha as a fraction in [0,1]
    pub fn alpha_fraction(self) -> f64 {
        f64::from(self.a) / 255.0
    }
    /// Interpolate every channel, alpha included, from `from` to `to`
    ///
    /// `amount` of 0 gives `from`, 255 gives `to`.
    pub fn lerp(amount: u8, from: Argb8, to: Argb8) -> Self {
        Argb8 {
            a: lerp_u8(from.a, to.a, amount),
            r: lerp_u8(from.r, to.r, amount),
            g: lerp_u8(from.g, to.g, amount),
            b: lerp_u8(from.b, to.b, amount),
        }
    }
    /// Opaque color from hue, saturation and value
    ///
    /// Hue runs over the full color circle in 0..=255; it is split into six
    /// sectors of 256 steps each.
    ///
    ///     use metaraster::Argb8;
    ///     assert_eq!(Argb8::hsv(0, 255, 255), Argb8::rgb(255, 0, 0));
    ///     assert_eq!(Argb8::hsv(0, 0, 255), Argb8::WHITE);
    ///
    pub fn hsv(h: u8, s: u8, v: u8) -> Self {
        let h = u16::from(h) * 6;
        let phase = h >> 8;
        let part = h as u8;
        let (s, v) = (u16::from(s), u16::from(v));

        // Channel values when rising / falling across the sector.
        let scale = |x: u16| (x * v / 255) as u8;
        let lo = scale(255 - s);
        let up = scale(255 - s * (255 - u16::from(part)) / 255);
        let down = scale(255 - s * u16::from(part) / 255);
        let v = v as u8;
        match phase {
            0 => Argb8::rgb(v, up, lo),
            1 => Argb8::rgb(down, v, lo),
            2 => Argb8::rgb(lo, v, up),
            3 => Argb8::rgb(lo, down, v),
            4 => Argb8::rgb(up, lo, v),
            _ => Argb8::rgb(v, lo, down),
        }
    }
    /// Sum of the red, green and blue channels
    pub fn channel_sum(self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

impl From<u32> for Argb8 {
    fn from(v: u32) -> Self {
        Argb8::from_u32(v)
    }
}
impl From<Argb8> for u32 {
    fn from(c: Argb8) -> u32 {
        c.to_u32()
    }
}
