//! Packed ARGB colors.
//!
//! A packed color holds four 8-bit channels in one `u32`, alpha in the
//! most significant byte: `0xAARRGGBB`.

use rgb::{RGBA, RGB8, RGBA8};

/// Opaque red.
pub const RED: u32 = 0xFFFF0000;
/// Opaque green.
pub const GREEN: u32 = 0xFF00FF00;
/// Opaque blue.
pub const BLUE: u32 = 0xFF0000FF;
/// Fully transparent black, the “no color” value.
pub const TRANSPARENT: u32 = 0;

/// Pack the four channels into a color.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

#[inline]
pub const fn alpha(c: u32) -> u8 { (c >> 24) as u8 }

#[inline]
pub const fn red(c: u32) -> u8 { (c >> 16) as u8 }

#[inline]
pub const fn green(c: u32) -> u8 { (c >> 8) as u8 }

#[inline]
pub const fn blue(c: u32) -> u8 { c as u8 }

/// Return `c` with its alpha channel replaced by `a`.
#[inline]
pub const fn with_alpha(c: u32, a: u8) -> u32 {
    (c & 0x00FF_FFFF) | (a as u32) << 24
}

/// The channels of `c` as floats in \[0, 255\].
pub(crate) fn to_rgba(c: u32) -> RGBA<f64> {
    RGBA { r: red(c) as f64, g: green(c) as f64, b: blue(c) as f64,
           a: alpha(c) as f64 }
}

/// Pixel types that can be converted to and from packed ARGB.
///
/// # Example
///
/// ```
/// use rgb::RGBA8;
/// use heatmap_gradient::argb::ArgbColor;
/// let c = RGBA8::new(255, 128, 0, 64);
/// assert_eq!(c.to_argb(), 0x40FF8000);
/// assert_eq!(RGBA8::from_argb(0x40FF8000), c);
/// ```
pub trait ArgbColor: Sized {
    /// Pack the color.
    fn to_argb(&self) -> u32;

    /// Unpack a color.  Types without an alpha channel drop it.
    fn from_argb(c: u32) -> Self;
}

impl ArgbColor for u32 {
    #[inline]
    fn to_argb(&self) -> u32 { *self }

    #[inline]
    fn from_argb(c: u32) -> Self { c }
}

impl ArgbColor for RGB8 {
    /// RGB pixels are opaque.
    #[inline]
    fn to_argb(&self) -> u32 { argb(255, self.r, self.g, self.b) }

    #[inline]
    fn from_argb(c: u32) -> Self { RGB8 { r: red(c), g: green(c), b: blue(c) } }
}

impl ArgbColor for RGBA8 {
    #[inline]
    fn to_argb(&self) -> u32 { argb(self.a, self.r, self.g, self.b) }

    #[inline]
    fn from_argb(c: u32) -> Self {
        RGBA8 { r: red(c), g: green(c), b: blue(c), a: alpha(c) }
    }
}
