use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The initial velocity of both vehicles in m/s.
const DEFAULT_VELOCITY: f64 = 29.0; // m/s

/// The braking deceleration of both vehicles in m/s<sup>2</sup>.
const DEFAULT_DECEL: f64 = -9.0; // m/s^2

/// The follower's reaction delay in s.
const DEFAULT_DELAY: f64 = 0.5; // s

/// Selects one of the five fields of a [ParameterSet].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter {
    /// The leader's initial velocity.
    V1Velocity,
    /// The follower's initial velocity.
    V2Velocity,
    /// The leader's deceleration.
    V1Decel,
    /// The follower's deceleration.
    V2Decel,
    /// The follower's reaction delay.
    Delay,
}

impl Parameter {
    /// Every parameter, in display order.
    pub const ALL: [Parameter; 5] = [
        Parameter::V1Velocity,
        Parameter::V2Velocity,
        Parameter::V1Decel,
        Parameter::V2Decel,
        Parameter::Delay,
    ];

    /// The machine-readable name of the parameter.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::V1Velocity => "v1_velocity",
            Parameter::V2Velocity => "v2_velocity",
            Parameter::V1Decel => "v1_decel",
            Parameter::V2Decel => "v2_decel",
            Parameter::Delay => "delay",
        }
    }

    /// A label for the parameter's axis when plotted against distance.
    pub fn axis_label(self) -> &'static str {
        match self {
            Parameter::V1Velocity => "v1 initial velocity (m/s)",
            Parameter::V2Velocity => "v2 initial velocity (m/s)",
            Parameter::V1Decel => "v1 deceleration (m/s^2)",
            Parameter::V2Decel => "v2 deceleration (m/s^2)",
            Parameter::Delay => "delay before v2 decelerates (s)",
        }
    }

    /// Returns true if the parameter is a deceleration.
    pub fn is_decel(self) -> bool {
        matches!(self, Parameter::V1Decel | Parameter::V2Decel)
    }

    /// Checks that `value` lies in the domain of this parameter.
    pub fn check(self, value: f64) -> Result<f64> {
        let reason = if !value.is_finite() {
            Some("must be finite")
        } else {
            match self {
                Parameter::V1Velocity | Parameter::V2Velocity if value < 0.0 => {
                    Some("velocity must not be negative")
                }
                p if p.is_decel() && value == 0.0 => Some("deceleration must not be zero"),
                p if p.is_decel() && value > 0.0 => Some("deceleration must be negative"),
                // dividing by a subnormal overflows
                p if p.is_decel() && value.is_subnormal() => {
                    Some("deceleration is too close to zero")
                }
                Parameter::Delay if value < 0.0 => Some("delay must not be negative"),
                _ => None,
            }
        };
        match reason {
            Some(reason) => Err(Error::Domain {
                parameter: self,
                value,
                reason,
            }),
            None => Ok(value),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1_velocity" | "v1vel" => Ok(Parameter::V1Velocity),
            "v2_velocity" | "v2vel" => Ok(Parameter::V2Velocity),
            "v1_decel" | "v1dec" => Ok(Parameter::V1Decel),
            "v2_decel" | "v2dec" => Ok(Parameter::V2Decel),
            "delay" => Ok(Parameter::Delay),
            _ => Err(format!("unknown parameter `{}`", s)),
        }
    }
}

/// The inputs of the distance model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// The leader's initial velocity in m/s.
    pub v1_velocity: f64,
    /// The follower's initial velocity in m/s.
    pub v2_velocity: f64,
    /// The leader's deceleration in m/s<sup>2</sup>; negative.
    pub v1_decel: f64,
    /// The follower's deceleration in m/s<sup>2</sup>; negative.
    pub v2_decel: f64,
    /// The follower's reaction delay in s.
    pub delay: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            v1_velocity: DEFAULT_VELOCITY,
            v2_velocity: DEFAULT_VELOCITY,
            v1_decel: DEFAULT_DECEL,
            v2_decel: DEFAULT_DECEL,
            delay: DEFAULT_DELAY,
        }
    }
}

impl ParameterSet {
    /// Gets the value of a single field.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::V1Velocity => self.v1_velocity,
            Parameter::V2Velocity => self.v2_velocity,
            Parameter::V1Decel => self.v1_decel,
            Parameter::V2Decel => self.v2_decel,
            Parameter::Delay => self.delay,
        }
    }

    /// Returns a copy of this set with one field replaced.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        let field = match parameter {
            Parameter::V1Velocity => &mut self.v1_velocity,
            Parameter::V2Velocity => &mut self.v2_velocity,
            Parameter::V1Decel => &mut self.v1_decel,
            Parameter::V2Decel => &mut self.v2_decel,
            Parameter::Delay => &mut self.delay,
        };
        *field = value;
        self
    }

    /// Checks every field against its domain, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        for parameter in Parameter::ALL {
            parameter.check(self.get(parameter))?;
        }
        Ok(())
    }
}
