//! Curves of the required separation against one varied parameter.

use crate::distance::separation_with;
use crate::math::{linspace, Point2d};
use crate::{Error, Parameter, ParameterSet, Result, SweepRanges};
use itertools::Itertools;

/// An evenly spaced, non-empty sequence of values for one parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRange {
    values: Vec<f64>,
}

impl SweepRange {
    /// Creates a range of `count` evenly spaced values from `start` to `stop` inclusive.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::Range("a range needs at least one point".into()));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(Error::Range(format!(
                "bounds must be finite, got {} to {}",
                start, stop
            )));
        }
        if count > 1 && start == stop {
            return Err(Error::Range(format!(
                "{} points cannot span the single value {}",
                count, start
            )));
        }
        Ok(Self {
            values: linspace(start, stop, count).collect_vec(),
        })
    }

    /// Creates a range for `parameter`, checking that every point lies in its domain.
    pub fn for_parameter(
        parameter: Parameter,
        start: f64,
        stop: f64,
        count: usize,
    ) -> Result<Self> {
        let range = Self::linspace(start, stop, count)?;
        range.check_domain(parameter)?;
        Ok(range)
    }

    /// Checks that every point of the range is a valid value of `parameter`.
    pub fn check_domain(&self, parameter: Parameter) -> Result<()> {
        match self.values.iter().find(|x| parameter.check(**x).is_err()) {
            Some(x) => Err(Error::Range(format!("{} is not a valid {}", x, parameter))),
            None => Ok(()),
        }
    }

    /// The points of the range, in sweep order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The number of points in the range.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; ranges are never empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The required separation sampled across the range of one parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    parameter: Parameter,
    points: Vec<Point2d>,
}

impl Curve {
    /// The parameter varied along the x axis.
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// The (parameter value, distance) points, in sweep order.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// The number of points on the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the distance values.
    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

/// Sweeps `parameter` across `range`, holding the rest of `params` fixed.
///
/// Fails with the first rejected point; no partial curve is returned.
pub fn sweep(params: &ParameterSet, parameter: Parameter, range: &SweepRange) -> Result<Curve> {
    let points = range
        .values()
        .iter()
        .map(|&x| separation_with(params, parameter, x).map(|y| Point2d::new(x, y)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Curve { parameter, points })
}

/// Sweeps the leader's initial velocity.
pub fn sweep_v1_velocity(params: &ParameterSet, range: &SweepRange) -> Result<Curve> {
    sweep(params, Parameter::V1Velocity, range)
}

/// Sweeps the follower's initial velocity.
pub fn sweep_v2_velocity(params: &ParameterSet, range: &SweepRange) -> Result<Curve> {
    sweep(params, Parameter::V2Velocity, range)
}

/// Sweeps the leader's deceleration.
pub fn sweep_v1_decel(params: &ParameterSet, range: &SweepRange) -> Result<Curve> {
    sweep(params, Parameter::V1Decel, range)
}

/// Sweeps the follower's deceleration.
pub fn sweep_v2_decel(params: &ParameterSet, range: &SweepRange) -> Result<Curve> {
    sweep(params, Parameter::V2Decel, range)
}

/// Sweeps the follower's reaction delay.
pub fn sweep_delay(params: &ParameterSet, range: &SweepRange) -> Result<Curve> {
    sweep(params, Parameter::Delay, range)
}

/// One curve per parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Curves {
    pub v1_velocity: Curve,
    pub v2_velocity: Curve,
    pub v1_decel: Curve,
    pub v2_decel: Curve,
    pub delay: Curve,
}

impl Curves {
    /// Gets the curve which varies `parameter`.
    pub fn get(&self, parameter: Parameter) -> &Curve {
        match parameter {
            Parameter::V1Velocity => &self.v1_velocity,
            Parameter::V2Velocity => &self.v2_velocity,
            Parameter::V1Decel => &self.v1_decel,
            Parameter::V2Decel => &self.v2_decel,
            Parameter::Delay => &self.delay,
        }
    }

    /// Iterates over the curves in [Parameter::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        Parameter::ALL.into_iter().map(move |p| self.get(p))
    }
}

/// Runs all five sweeps.
pub fn sweep_all(params: &ParameterSet, ranges: &SweepRanges) -> Result<Curves> {
    Ok(Curves {
        v1_velocity: sweep_v1_velocity(params, ranges.velocity())?,
        v2_velocity: sweep_v2_velocity(params, ranges.velocity())?,
        v1_decel: sweep_v1_decel(params, ranges.decel())?,
        v2_decel: sweep_v2_decel(params, ranges.decel())?,
        delay: sweep_delay(params, ranges.delay())?,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::distance::distance;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn rejects_malformed_ranges() {
        assert!(matches!(SweepRange::linspace(0.0, 1.0, 0), Err(Error::Range(_))));
        assert!(SweepRange::linspace(f64::NAN, 1.0, 5).is_err());
        assert!(SweepRange::linspace(0.0, f64::INFINITY, 5).is_err());
        assert!(SweepRange::linspace(2.0, 2.0, 5).is_err());
        assert!(SweepRange::linspace(2.0, 2.0, 1).is_ok());
    }

    #[test]
    fn rejects_ranges_outside_domain() {
        assert!(SweepRange::for_parameter(Parameter::V1Decel, -1.0, 1.0, 11).is_err());
        assert!(SweepRange::for_parameter(Parameter::Delay, -0.5, 1.0, 11).is_err());
        assert!(SweepRange::for_parameter(Parameter::V2Velocity, 0.0, 35.0, 11).is_ok());
    }

    #[test]
    fn first_point_matches_scalar_distance() {
        let params = ParameterSet::default();
        let range = SweepRange::linspace(20.0, 35.0, 91).unwrap();
        let curve = sweep_v1_velocity(&params, &range).unwrap();
        let expected = distance(20.0, 29.0, -9.0, -9.0, 0.5).unwrap();
        assert_eq!(curve.points()[0], Point2d::new(20.0, expected));
        assert_eq!(curve.parameter(), Parameter::V1Velocity);
    }

    #[test]
    fn delay_curve_is_linear() {
        let params = ParameterSet::default();
        let range = SweepRange::linspace(0.0, 1.0, 101).unwrap();
        let curve = sweep_delay(&params, &range).unwrap();
        assert_eq!(curve.len(), 101);
        assert_approx_eq!(curve.points()[0].y, 0.0);
        for p in curve.points() {
            assert_approx_eq!(p.y, 29.0 * p.x);
        }
    }

    #[test]
    fn decel_curves_are_monotonic() {
        let params = ParameterSet::default();
        let range = SweepRange::linspace(-6.0, -11.0, 51).unwrap();

        let v2 = sweep_v2_decel(&params, &range).unwrap();
        let ys = v2.distances().collect_vec();
        assert!(ys.windows(2).all(|w| w[1] < w[0]));

        let v1 = sweep_v1_decel(&params, &range).unwrap();
        let ys = v1.distances().collect_vec();
        assert!(ys.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn invalid_fixed_parameter_fails_whole_sweep() {
        let params = ParameterSet::default().with(Parameter::V1Decel, 0.0);
        let range = SweepRange::linspace(20.0, 35.0, 91).unwrap();
        assert!(matches!(
            sweep_v2_velocity(&params, &range),
            Err(Error::Domain {
                parameter: Parameter::V1Decel,
                ..
            })
        ));
    }

    #[test]
    fn invalid_point_fails_whole_sweep() {
        let params = ParameterSet::default();
        let range = SweepRange::linspace(-1.0, 1.0, 3).unwrap();
        assert!(sweep_v1_decel(&params, &range).is_err());
    }

    #[test]
    fn sweep_all_uses_every_range() {
        let curves = sweep_all(&ParameterSet::default(), &SweepRanges::default()).unwrap();
        assert_eq!(curves.v1_velocity.len(), 91);
        assert_eq!(curves.v2_velocity.len(), 91);
        assert_eq!(curves.v1_decel.len(), 51);
        assert_eq!(curves.v2_decel.len(), 51);
        assert_eq!(curves.delay.len(), 101);
        for (curve, parameter) in curves.iter().zip(Parameter::ALL) {
            assert_eq!(curve.parameter(), parameter);
        }
    }
}
