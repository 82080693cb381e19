//! Computes the minimum safe following distance between two braking vehicles,
//! and how it responds to each of its five parameters.

pub use cgmath;
pub use config::{ParameterLimits, SweepRanges};
pub use distance::{distance, reaction_distance, required_separation, stopping_distance};
pub use error::{Error, Result};
pub use explorer::{Event, Explorer};
pub use params::{Parameter, ParameterSet};
pub use sweep::{
    sweep, sweep_all, sweep_delay, sweep_v1_decel, sweep_v1_velocity, sweep_v2_decel,
    sweep_v2_velocity, Curve, Curves, SweepRange,
};
pub use util::Interval;

mod config;
mod distance;
mod error;
mod explorer;
pub mod math;
mod params;
mod sweep;
mod util;
