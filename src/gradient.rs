//! Gradients given by color stops.

use lazy_static::lazy_static;
use crate::argb::{self, ArgbColor};
use crate::colormap::{self, Colormap};

/// Number of entries of a colormap when none is specified.
pub const DEFAULT_COLOR_MAP_SIZE: usize = 1000;

/// Reasons a gradient cannot be built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientError {
    #[error("{colors} colors but {breakpoints} breakpoints")]
    LengthMismatch { colors: usize, breakpoints: usize },

    #[error("a gradient needs at least one color")]
    Empty,

    #[error("breakpoints must be strictly increasing, but breakpoint {index} \
             ({current}) is not greater than the previous one ({previous})")]
    NotIncreasing { index: usize, previous: f64, current: f64 },

    #[error("breakpoint {index} ({value}) is not in [0, 1]")]
    OutOfRange { index: usize, value: f64 },

    #[error("the colormap size must be positive")]
    ZeroSize,
}

/// A gradient: colors (packed ARGB) at increasing breakpoints in
/// \[0, 1\], to be sampled into a colormap of `size` entries.
///
/// A `GradientSpec` is immutable; it can generate colormaps with
/// different opacities any number of times.
///
/// # Example
///
/// ```
/// use heatmap_gradient::{GradientSpec, argb::{RED, GREEN, BLUE}};
/// let spec = GradientSpec::with_size(vec![RED, GREEN, BLUE],
///                                    vec![0., 0.5, 1.], 10)?;
/// let map = spec.generate(1.);
/// assert_eq!(map.len(), 10);
/// assert_eq!(map[0], RED);
/// assert_eq!(map[5], GREEN);
/// # Ok::<(), heatmap_gradient::GradientError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(try_from = "RawGradient"))]
pub struct GradientSpec {
    colors: Vec<u32>,
    breakpoints: Vec<f64>,
    size: usize,
}

lazy_static! {
    /// The usual heatmap gradient: green at 0.2 to red at 1, faded in
    /// from transparent below 0.2.
    pub static ref DEFAULT_GRADIENT: GradientSpec = GradientSpec {
        colors: vec![argb::argb(255, 102, 225, 0), argb::argb(255, 255, 0, 0)],
        breakpoints: vec![0.2, 1.],
        size: DEFAULT_COLOR_MAP_SIZE,
    };
}

impl GradientSpec {
    /// Create a gradient generating colormaps of
    /// [`DEFAULT_COLOR_MAP_SIZE`] entries.
    pub fn new(colors: Vec<u32>, breakpoints: Vec<f64>)
               -> Result<Self, GradientError> {
        Self::with_size(colors, breakpoints, DEFAULT_COLOR_MAP_SIZE)
    }

    /// Create a gradient generating colormaps of `size` entries.
    ///
    /// Fails if `colors` and `breakpoints` have different lengths, are
    /// empty, if the breakpoints are not strictly increasing or not
    /// all in \[0, 1\], or if `size` is zero.
    pub fn with_size(colors: Vec<u32>, breakpoints: Vec<f64>, size: usize)
                     -> Result<Self, GradientError> {
        if colors.len() != breakpoints.len() {
            return Err(GradientError::LengthMismatch {
                colors: colors.len(), breakpoints: breakpoints.len() })
        }
        if colors.is_empty() { return Err(GradientError::Empty) }
        for (i, w) in breakpoints.windows(2).enumerate() {
            // Written so that NaN is rejected as well.
            if !(w[1] > w[0]) {
                return Err(GradientError::NotIncreasing {
                    index: i + 1, previous: w[0], current: w[1] })
            }
        }
        if let Some((index, &value)) = breakpoints.iter().enumerate()
            .find(|&(_, &x)| !(0. ..= 1.).contains(&x)) {
            return Err(GradientError::OutOfRange { index, value })
        }
        if size == 0 { return Err(GradientError::ZeroSize) }
        Ok(GradientSpec { colors, breakpoints, size })
    }

    /// Create a gradient from stops given as pixels, e.g. [`rgb::RGB8`].
    pub fn from_colors<C: ArgbColor>(colors: &[C], breakpoints: &[f64],
                                     size: usize)
                                     -> Result<Self, GradientError> {
        Self::with_size(colors.iter().map(|c| c.to_argb()).collect(),
                        breakpoints.to_vec(), size)
    }

    /// The colors of the stops, packed ARGB.
    pub fn colors(&self) -> &[u32] { &self.colors }

    /// The breakpoints of the stops.
    pub fn breakpoints(&self) -> &[f64] { &self.breakpoints }

    /// The number of entries of the generated colormaps.
    pub fn size(&self) -> usize { self.size }

    /// Generate the colormap.  See [`generate`](crate::generate).
    pub fn generate(&self, opacity: f64) -> Colormap {
        colormap::generate(self, opacity)
    }
}

impl Default for GradientSpec {
    fn default() -> Self { DEFAULT_GRADIENT.clone() }
}

/// Unvalidated form of [`GradientSpec`] read by serde.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGradient {
    colors: Vec<u32>,
    breakpoints: Vec<f64>,
    #[serde(default = "default_size")]
    size: usize,
}

#[cfg(feature = "serde")]
fn default_size() -> usize { DEFAULT_COLOR_MAP_SIZE }

#[cfg(feature = "serde")]
impl TryFrom<RawGradient> for GradientSpec {
    type Error = GradientError;

    fn try_from(raw: RawGradient) -> Result<Self, Self::Error> {
        GradientSpec::with_size(raw.colors, raw.breakpoints, raw.size)
    }
}
