//! Precomputed colormaps.

use std::ops::Index;
use log::trace;
use crate::argb::{self, ArgbColor};
use crate::gradient::GradientSpec;
use crate::intervals::build_intervals;

/// A lookup table of packed ARGB colors.  Entry `i` is the color of
/// the intensity `i / len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colormap {
    colors: Vec<u32>, // Invariant: non-empty
}

/// Sample the gradient `spec` into a colormap of `spec.size()` entries.
///
/// `opacity` scales the alpha channel of every entry.  It is clamped to
/// \[0, 1\]; NaN makes the colormap fully transparent.
pub fn generate(spec: &GradientSpec, opacity: f64) -> Colormap {
    let intervals = build_intervals(spec);
    let opacity = opacity.clamp(0., 1.);
    trace!("generating {} colors from {} ranges, opacity {}",
           spec.size(), intervals.len(), opacity);
    let mut next = intervals.iter().peekable();
    // `build_intervals` always has an entry starting at 0.
    let (mut start, mut range) = intervals[0];
    let colors = (0 .. spec.size()).map(|i| {
        while let Some(&&(s, r)) = next.peek() {
            if s > i { break }
            (start, range) = (s, r);
            next.next();
        }
        range.color((i - start) as f64)
    });
    let mut colors: Vec<u32> = colors.collect();
    if opacity != 1. {
        for c in colors.iter_mut() {
            let a = (argb::alpha(*c) as f64 * opacity) as u8;
            *c = argb::with_alpha(*c, a);
        }
    }
    Colormap { colors }
}

impl Colormap {
    /// Returns the number of entries.
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always `false`: a colormap has at least one entry.
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn as_slice(&self) -> &[u32] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> { self.colors.iter() }

    pub fn into_vec(self) -> Vec<u32> { self.colors }

    /// Returns the entries converted to another pixel type.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use heatmap_gradient::DEFAULT_GRADIENT;
    /// let pixels: Vec<RGBA8> = DEFAULT_GRADIENT.generate(1.).to_colors();
    /// assert_eq!(pixels[999], RGBA8::new(255, 0, 0, 255));
    /// ```
    pub fn to_colors<C: ArgbColor>(&self) -> Vec<C> {
        self.colors.iter().map(|&c| C::from_argb(c)).collect()
    }

    /// Returns the color for `v` ∈ \[0, 1\], i.e. the entry
    /// `floor(v * (len() - 1))`.  `v` is clamped to \[0, 1\].
    pub fn lookup(&self, v: f64) -> u32 {
        let last = self.colors.len() - 1;
        let i = (v.clamp(0., 1.) * last as f64) as usize;
        self.colors[i.min(last)]
    }

    /// Returns the color of a heat `intensity` when the hottest point
    /// has intensity `max`.  A zero intensity is transparent and
    /// intensities above `max` get the last color.
    ///
    /// This is a convenience for callers coloring raw heat values; the
    /// colormap itself only needs [`lookup`](Self::lookup).
    pub fn colorize(&self, intensity: f64, max: f64) -> u32 {
        if intensity == 0. { return argb::TRANSPARENT }
        let scaling = (self.colors.len() - 1) as f64 / max;
        let i = (intensity * scaling) as usize;
        match self.colors.get(i) {
            Some(&c) => c,
            None => self.colors[self.colors.len() - 1],
        }
    }
}

impl Index<usize> for Colormap {
    type Output = u32;

    #[inline]
    fn index(&self, i: usize) -> &u32 { &self.colors[i] }
}

impl<'a> IntoIterator for &'a Colormap {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::argb::*;
    use crate::hsv::Hsv;
    use crate::{interpolate, DEFAULT_GRADIENT};

    fn spec(colors: &[u32], points: &[f64], size: usize) -> GradientSpec {
        GradientSpec::with_size(colors.to_vec(), points.to_vec(), size)
            .expect("valid gradient")
    }

    fn hue(c: u32) -> f64 {
        Hsv::from_rgb(rgb::RGBA { r: red(c) as f64, g: green(c) as f64,
                                  b: blue(c) as f64, a: 255. }).h
    }

    #[test]
    fn length() {
        for size in [1, 2, 7, 10, 256, 1000] {
            let m = spec(&[RED, GREEN, BLUE], &[0.1, 0.5, 0.9], size)
                .generate(1.);
            assert_eq!(m.len(), size);
        }
        assert_eq!(DEFAULT_GRADIENT.generate(0.7).len(), 1000);
    }

    #[test]
    fn red_green_blue() {
        let m = spec(&[RED, GREEN, BLUE], &[0., 0.5, 1.], 10).generate(1.);
        assert_eq!(m[0], RED);
        let h = hue(m[4]);
        assert!(0. < h && h < 120., "hue {} not between red and green", h);
        assert_eq!(m[5], GREEN);
        // Index 9 is 4/5 of the way from green to blue.
        assert_eq!(m[9], interpolate(GREEN, BLUE, 0.8));
        assert!((hue(m[9]) - 216.).abs() < 0.5, "hue {}", hue(m[9]));
    }

    #[test]
    fn red_green_blue_last_entry() {
        // With a flat tail after blue, the last entries are blue.
        let m = spec(&[RED, GREEN, BLUE], &[0., 0.45, 0.9], 10).generate(1.);
        assert_eq!(m[0], RED);
        assert!(0. < hue(m[2]) && hue(m[2]) < 120.);
        assert_eq!(m[4], GREEN);
        assert_eq!(m[9], BLUE);
    }

    #[test]
    fn leading_fade() {
        let m = spec(&[0xFF66E100, RED], &[0.2, 1.], 100).generate(1.);
        assert_eq!(m[0], 0x0066E100);
        assert_eq!(m[10] & 0x00FFFFFF, 0x66E100);
        assert_eq!(alpha(m[10]), 127);
        assert_eq!(m[20], 0xFF66E100);
    }

    #[test]
    fn trailing_flat() {
        let m = spec(&[RED, 0x80123456], &[0., 0.63], 50).generate(1.);
        let start = (50. * 0.63) as usize;
        for (i, &c) in m.iter().enumerate().skip(start) {
            assert_eq!(c, 0x80123456, "entry {}", i);
        }
        assert_ne!(m[start - 1], 0x80123456);
    }

    #[test]
    fn opacity_scales_alpha() {
        let g = spec(&[0x00FF0000, GREEN, 0x80123456], &[0., 0.3, 0.8], 64);
        let opaque = g.generate(1.);
        for o in [0., 0.25, 0.5, 0.99] {
            let m = g.generate(o);
            for (&c, &c1) in m.iter().zip(&opaque) {
                assert_eq!(c & 0x00FFFFFF, c1 & 0x00FFFFFF);
                assert_eq!(alpha(c), (alpha(c1) as f64 * o) as u8);
            }
        }
    }

    #[test]
    fn opacity_is_clamped() {
        let g = spec(&[RED, BLUE], &[0.2, 0.7], 32);
        assert_eq!(g.generate(1.5), g.generate(1.));
        assert_eq!(g.generate(-1.), g.generate(0.));
        assert!(g.generate(f64::NAN).iter().all(|&c| alpha(c) == 0));
    }

    #[test]
    fn generation_is_repeatable() {
        let g = DEFAULT_GRADIENT.clone();
        assert_eq!(g.generate(0.6), g.generate(0.6));
    }

    #[test]
    fn colliding_starts() {
        // Both 0.31 and 0.35 floor to 3: the flat blue tail replaces
        // the green → blue range from index 3 on.
        let m = spec(&[RED, GREEN, BLUE], &[0.01, 0.31, 0.35], 10)
            .generate(1.);
        assert_eq!(m[0], RED);
        for i in 3 .. 10 { assert_eq!(m[i], BLUE, "entry {}", i) }
    }

    #[test]
    fn single_entry() {
        let m = spec(&[RED, BLUE], &[0., 1.], 1).generate(1.);
        assert_eq!(m.as_slice(), &[RED]);
        assert_eq!(m.lookup(0.7), RED);
        assert_eq!(m.colorize(3., 1.), RED);
    }

    #[test]
    fn lookup() {
        let m = spec(&[RED, GREEN, BLUE], &[0., 0.5, 1.], 11).generate(1.);
        assert_eq!(m.lookup(0.), m[0]);
        assert_eq!(m.lookup(0.5), m[5]);
        assert_eq!(m.lookup(1.), m[10]);
        assert_eq!(m.lookup(-2.), m[0]);
        assert_eq!(m.lookup(7.), m[10]);
    }

    #[test]
    fn colorize() {
        let m = DEFAULT_GRADIENT.generate(1.);
        assert_eq!(m.colorize(0., 10.), TRANSPARENT);
        assert_eq!(m.colorize(5., 10.), m[499]);
        assert_eq!(m.colorize(10., 10.), m[999]);
        assert_eq!(m.colorize(25., 10.), m[999]);
    }
}
