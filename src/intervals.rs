//! Splitting a gradient into index ranges of its colormap.

use log::debug;
use crate::argb;
use crate::gradient::GradientSpec;

/// A range of colormap indices going from one color to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRange {
    pub start_color: u32,
    pub end_color: u32,
    /// Number of indices covered by the range (not necessarily an
    /// integer).  Ratios within the range are computed relative to it.
    pub span: f64,
}

impl ColorRange {
    /// Returns the color `offset` indices after the start of the range.
    /// An empty range yields its start color.
    pub fn color(&self, offset: f64) -> u32 {
        if self.span == 0. { return self.start_color }
        crate::interpolate(self.start_color, self.end_color, offset / self.span)
    }
}

/// Push `range` starting at `start`, replacing the last entry if it
/// starts at the same index.  Entries are produced in nondecreasing
/// start order, so a collision can only be with the last one.
fn push(intervals: &mut Vec<(usize, ColorRange)>, start: usize,
        range: ColorRange) {
    match intervals.last_mut() {
        Some((s, r)) if *s == start => {
            debug!("color range {:?} at index {} replaced by {:?}",
                   r, start, range);
            *r = range;
        }
        _ => intervals.push((start, range)),
    }
}

/// Return the ranges of `spec`'s colormap sorted by start index.
///
/// Below the first breakpoint the first color fades in from
/// transparent; above the last one the last color is held.  When two
/// ranges start at the same (floored) index, the later one wins.
/// The first entry always starts at index 0.
pub fn build_intervals(spec: &GradientSpec) -> Vec<(usize, ColorRange)> {
    let colors = spec.colors();
    let points = spec.breakpoints();
    let size = spec.size() as f64;
    let last = colors.len() - 1;
    let mut intervals = Vec::with_capacity(colors.len() + 1);
    if points[0] != 0. {
        push(&mut intervals, 0,
             ColorRange { start_color: argb::with_alpha(colors[0], 0),
                          end_color: colors[0],
                          span: size * points[0] });
    }
    for i in 1 ..= last {
        push(&mut intervals, (size * points[i - 1]) as usize,
             ColorRange { start_color: colors[i - 1],
                          end_color: colors[i],
                          span: size * (points[i] - points[i - 1]) });
    }
    if points[last] != 1. {
        push(&mut intervals, (size * points[last]) as usize,
             ColorRange { start_color: colors[last],
                          end_color: colors[last],
                          span: size * (1. - points[last]) });
    }
    intervals
}
