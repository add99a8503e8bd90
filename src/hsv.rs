//! Hue-space interpolation.

use rgb::RGBA;
use crate::argb::{self, to_rgba};

/// A color in the HSV color space with an alpha component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue in degrees, in the range 0. to 360. (excluded).
    pub h: f64,
    /// The saturation, in the range 0. to 1.
    pub s: f64,
    /// The value, in the range 0. to 1.
    pub v: f64,
    /// Alpha component, in the range 0. to 255.
    pub a: f64,
}

impl Hsv {
    /// Convert RGBA components (in \[0, 255\]) to HSV.  Grays have
    /// hue and saturation 0.
    pub fn from_rgb(c: RGBA<f64>) -> Hsv {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;
        let v = max / 255.;
        if delta == 0. { return Hsv { h: 0., s: 0., v, a: c.a } }
        let s = delta / max;
        let h = {
            if c.r == max { (c.g - c.b) / delta }
            else if c.g == max { 2. + (c.b - c.r) / delta }
            else { 4. + (c.r - c.g) / delta } };
        let h = 60. * h;
        Hsv { h: if h < 0. { h + 360. } else { h }, s, v, a: c.a }
    }

    /// Convert to RGBA components rounded to integers in \[0, 255\].
    /// The hue is taken modulo 360; saturation and value are clamped
    /// to \[0, 1\].
    pub fn to_rgb(&self) -> RGBA<f64> {
        let s = self.s.clamp(0., 1.);
        let v = self.v.clamp(0., 1.);
        let vb = (255. * v).round();
        if s == 0. { return RGBA { r: vb, g: vb, b: vb, a: self.a } }
        // `rem_euclid` rounds tiny negative hues up to exactly 360.
        let hx = self.h.rem_euclid(360.) / 60.;
        let hx = if hx >= 6. { 0. } else { hx };
        let w = hx.floor();
        let f = hx - w;
        let p = (255. * (1. - s) * v).round();
        let q = (255. * (1. - s * f) * v).round();
        let t = (255. * (1. - s * (1. - f)) * v).round();
        let (r, g, b) = {
            if w == 0.      { (vb, t, p) }
            else if w == 1. { (q, vb, p) }
            else if w == 2. { (p, vb, t) }
            else if w == 3. { (p, q, vb) }
            else if w == 4. { (t, p, vb) }
            else            { (vb, p, q) } };
        RGBA { r, g, b, a: self.a }
    }
}

/// Interpolate between two packed ARGB colors.
///
/// The alpha channel is interpolated linearly (and truncated), the
/// color along the shortest arc of the hue wheel, so that e.g. red to
/// green goes through yellow instead of a muddy brown.  `ratio` is not
/// clamped: values outside \[0, 1\] extrapolate.
///
/// # Example
///
/// ```
/// use heatmap_gradient::{interpolate, argb::{RED, GREEN}};
/// assert_eq!(interpolate(RED, GREEN, 0.), RED);
/// assert_eq!(interpolate(RED, GREEN, 0.5), 0xFFFFFF00); // yellow
/// ```
pub fn interpolate(color1: u32, color2: u32, ratio: f64) -> u32 {
    let a1 = argb::alpha(color1) as f64;
    let a2 = argb::alpha(color2) as f64;
    // Saturating cast, extrapolated alphas stay in 0 ..= 255.
    let a = (a1 + (a2 - a1) * ratio) as u8;
    let mut hsv1 = Hsv::from_rgb(to_rgba(color1));
    let mut hsv2 = Hsv::from_rgb(to_rgba(color2));
    if hsv1.h - hsv2.h > 180. { hsv2.h += 360. }
    else if hsv2.h - hsv1.h > 180. { hsv1.h += 360. }
    let hsv = Hsv { h: (hsv2.h - hsv1.h) * ratio + hsv1.h,
                    s: (hsv2.s - hsv1.s) * ratio + hsv1.s,
                    v: (hsv2.v - hsv1.v) * ratio + hsv1.v,
                    a: 0. };
    let RGBA { r, g, b, .. } = hsv.to_rgb();
    argb::argb(a, r as u8, g as u8, b as u8)
}
