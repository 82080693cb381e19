//! Mathematical types and functions.

use crate::util::Interval;
use cgmath::Point2;

/// A 2D point
pub type Point2d = Point2<f64>;

/// Returns `count` evenly spaced values from `start` to `stop` inclusive.
///
/// The first value is exactly `start` and, when `count > 1`, the last is exactly `stop`.
pub fn linspace(start: f64, stop: f64, count: usize) -> impl Iterator<Item = f64> {
    let span = Interval::new(start, stop);
    let last = count.saturating_sub(1);
    (0..count).map(move |i| match i {
        0 => start,
        i if i == last => stop,
        i => span.lerp(i as f64 / last as f64),
    })
}
