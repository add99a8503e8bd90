//! Heatmap gradients.
//!
//! - [`GradientSpec`]: colors at increasing breakpoints in \[0, 1\]
//! - [`Colormap`]: a gradient sampled into a lookup table of packed
//!   ARGB colors, see [`generate`]
//! - [`interpolate`]: interpolation of two colors in HSV space
//!
//! The usual heatmap gradient is [`struct@DEFAULT_GRADIENT`].
//!
//! # Example
//!
//! ```
//! use heatmap_gradient::{GradientSpec, argb};
//! let spec = GradientSpec::new(
//!     vec![argb::argb(255, 102, 225, 0), argb::argb(255, 255, 0, 0)],
//!     vec![0.2, 1.])?;
//! let map = spec.generate(0.7);
//! assert_eq!(map.len(), 1000);
//! // Hottest point.
//! let c = map.lookup(1.);
//! assert_eq!(argb::alpha(c), 178);
//! # Ok::<(), heatmap_gradient::GradientError>(())
//! ```

pub mod argb;
mod hsv;
mod intervals;
mod gradient;
mod colormap;

pub use hsv::{Hsv, interpolate};
pub use intervals::{ColorRange, build_intervals};
pub use gradient::{GradientSpec, GradientError, DEFAULT_GRADIENT,
                   DEFAULT_COLOR_MAP_SIZE};
pub use colormap::{Colormap, generate};


#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GradientSpec>();
        assert_send_sync::<Colormap>();

        let expected = DEFAULT_GRADIENT.generate(0.5);
        let maps: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0 .. 4)
                .map(|_| s.spawn(|| DEFAULT_GRADIENT.generate(0.5)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for m in maps { assert_eq!(m, expected) }
    }

    #[test]
    fn default_gradient_shape() {
        let m = GradientSpec::default().generate(1.);
        // Faded in below 0.2, opaque above.
        assert_eq!(argb::alpha(m[0]), 0);
        assert!(argb::alpha(m[100]) > 0 && argb::alpha(m[100]) < 255);
        assert!(m.iter().skip(200).all(|&c| argb::alpha(c) == 255));
        assert_eq!(m[200], argb::argb(255, 102, 225, 0));
    }
}
