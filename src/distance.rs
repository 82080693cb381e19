//! The closed-form following distance model.
//!
//! Both vehicles brake at constant deceleration. The leader starts braking at
//! time zero; the follower keeps its speed for the reaction delay and then
//! brakes. The result is the follower's distance-to-stop minus the leader's,
//! which is the initial gap the follower needs to avoid passing the point
//! where the leader stops. Zero or negative means no gap is required.

use crate::{Error, Parameter, ParameterSet, Result};

/// Calculates the distance a vehicle covers while braking to a stop.
///
/// # Arguments
/// * `vel` - The initial velocity (m/s), non-negative.
/// * `decel` - The deceleration (m/s<sup>2</sup>), strictly negative.
pub fn stopping_distance(vel: f64, decel: f64) -> f64 {
    // t = -v/a and d = vt + at^2/2, which reduces to -v^2/2a
    -0.5 * (vel.powi(2) / decel)
}

/// Calculates the distance a vehicle covers before it starts braking.
pub fn reaction_distance(vel: f64, delay: f64) -> f64 {
    vel * delay
}

/// Calculates the minimum initial separation between the leader and the follower.
pub fn required_separation(params: &ParameterSet) -> Result<f64> {
    params.validate()?;
    let follower = reaction_distance(params.v2_velocity, params.delay)
        + stopping_distance(params.v2_velocity, params.v2_decel);
    let leader = stopping_distance(params.v1_velocity, params.v1_decel);
    let separation = follower - leader;
    if !separation.is_finite() {
        return Err(Error::Unbounded(*params));
    }
    Ok(separation)
}

/// Calculates the minimum initial separation from positional arguments.
///
/// # Arguments
/// * `v1_vel` - The leader's initial velocity (m/s).
/// * `v2_vel` - The follower's initial velocity (m/s).
/// * `v1_dec` - The leader's deceleration (m/s<sup>2</sup>).
/// * `v2_dec` - The follower's deceleration (m/s<sup>2</sup>).
/// * `delay` - The follower's reaction delay (s).
pub fn distance(v1_vel: f64, v2_vel: f64, v1_dec: f64, v2_dec: f64, delay: f64) -> Result<f64> {
    required_separation(&ParameterSet {
        v1_velocity: v1_vel,
        v2_velocity: v2_vel,
        v1_decel: v1_dec,
        v2_decel: v2_dec,
        delay,
    })
}

/// Calculates the minimum initial separation with one parameter replaced.
pub(crate) fn separation_with(
    params: &ParameterSet,
    parameter: Parameter,
    value: f64,
) -> Result<f64> {
    required_separation(&params.with(parameter, value))
}
