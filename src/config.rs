//! Sweep ranges and parameter limits.

use crate::util::Interval;
use crate::{Error, Parameter, ParameterSet, Result, SweepRange};

/// The range of initial velocities swept, in m/s.
const VELOCITY_RANGE: (f64, f64, usize) = (20.0, 35.0, 91); // approx. 45-78 mph

/// The range of decelerations swept, in m/s<sup>2</sup>.
const DECEL_RANGE: (f64, f64, usize) = (-6.0, -11.0, 51);

/// The range of reaction delays swept, in s.
const DELAY_RANGE: (f64, f64, usize) = (0.0, 1.0, 101);

/// The sweep ranges used to build each curve.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRanges {
    /// Shared by both velocity curves.
    velocity: SweepRange,
    /// Shared by both deceleration curves.
    decel: SweepRange,
    delay: SweepRange,
}

impl SweepRanges {
    /// Creates a set of sweep ranges, checking each against its parameters' domains.
    pub fn new(velocity: SweepRange, decel: SweepRange, delay: SweepRange) -> Result<Self> {
        velocity.check_domain(Parameter::V1Velocity)?;
        decel.check_domain(Parameter::V1Decel)?;
        delay.check_domain(Parameter::Delay)?;
        Ok(Self {
            velocity,
            decel,
            delay,
        })
    }

    /// Gets the range swept for both velocities.
    pub fn velocity(&self) -> &SweepRange {
        &self.velocity
    }

    /// Gets the range swept for both decelerations.
    pub fn decel(&self) -> &SweepRange {
        &self.decel
    }

    /// Gets the range swept for the reaction delay.
    pub fn delay(&self) -> &SweepRange {
        &self.delay
    }

    /// Gets the range swept for `parameter`.
    pub fn get(&self, parameter: Parameter) -> &SweepRange {
        match parameter {
            Parameter::V1Velocity | Parameter::V2Velocity => &self.velocity,
            Parameter::V1Decel | Parameter::V2Decel => &self.decel,
            Parameter::Delay => &self.delay,
        }
    }
}

impl Default for SweepRanges {
    fn default() -> Self {
        let range = |(start, stop, count): (f64, f64, usize)| {
            SweepRange::linspace(start, stop, count).expect("Invalid default sweep range")
        };
        Self {
            velocity: range(VELOCITY_RANGE),
            decel: range(DECEL_RANGE),
            delay: range(DELAY_RANGE),
        }
    }
}

/// The inclusive interval each parameter may be set within.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterLimits {
    pub v1_velocity: Interval<f64>,
    pub v2_velocity: Interval<f64>,
    pub v1_decel: Interval<f64>,
    pub v2_decel: Interval<f64>,
    pub delay: Interval<f64>,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        let velocity = Interval::new(20.0, 35.0);
        let decel = Interval::new(-11.0, -6.0);
        Self {
            v1_velocity: velocity,
            v2_velocity: velocity,
            v1_decel: decel,
            v2_decel: decel,
            delay: Interval::new(0.0, 1.0),
        }
    }
}

impl ParameterLimits {
    /// Gets the limits of `parameter`.
    pub fn get(&self, parameter: Parameter) -> Interval<f64> {
        match parameter {
            Parameter::V1Velocity => self.v1_velocity,
            Parameter::V2Velocity => self.v2_velocity,
            Parameter::V1Decel => self.v1_decel,
            Parameter::V2Decel => self.v2_decel,
            Parameter::Delay => self.delay,
        }
    }

    /// Checks that every interval is proper and lies within its parameter's domain.
    ///
    /// Since deceleration limits must be strictly negative, a deceleration
    /// clamped into its limits can never be zero.
    pub fn validate(&self) -> Result<()> {
        for parameter in Parameter::ALL {
            let limits = self.get(parameter);
            if !limits.is_proper() {
                return Err(Error::Limits {
                    parameter,
                    reason: format!("{:?} is not a finite, ordered interval", limits),
                });
            }
            for end in limits.as_array() {
                if let Err(err) = parameter.check(end) {
                    return Err(Error::Limits {
                        parameter,
                        reason: err.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks that every field of `params` is reachable within these limits.
    pub fn check_reachable(&self, params: &ParameterSet) -> Result<()> {
        for parameter in Parameter::ALL {
            let limits = self.get(parameter);
            let value = params.get(parameter);
            if !limits.contains(value) {
                return Err(Error::Limits {
                    parameter,
                    reason: format!("{} lies outside {:?}", value, limits),
                });
            }
        }
        Ok(())
    }
}
