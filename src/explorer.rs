use crate::distance::required_separation;
use crate::sweep::{sweep_all, Curves};
use crate::{Parameter, ParameterLimits, ParameterSet, Result, SweepRanges};

/// A request to change the explored parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Sets one parameter to a new value.
    ParameterChanged { parameter: Parameter, value: f64 },
    /// Restores the default parameters.
    ResetRequested,
}

/// Owns the current parameters and the separation curves derived from them.
#[derive(Clone, Debug)]
pub struct Explorer {
    /// The current parameters.
    params: ParameterSet,
    /// The parameters restored on reset.
    defaults: ParameterSet,
    /// The range swept for each curve.
    ranges: SweepRanges,
    /// The interval each parameter is clamped to.
    limits: ParameterLimits,
    /// The required separation at the current parameters in m.
    distance: f64,
    /// The curves at the current parameters.
    curves: Curves,
}

impl Explorer {
    /// Creates an explorer starting from the default parameters.
    pub fn new(ranges: SweepRanges, limits: ParameterLimits) -> Result<Self> {
        Self::with_defaults(ParameterSet::default(), ranges, limits)
    }

    /// Creates an explorer which starts from, and resets to, `defaults`.
    ///
    /// `defaults` must lie within `limits`.
    pub fn with_defaults(
        defaults: ParameterSet,
        ranges: SweepRanges,
        limits: ParameterLimits,
    ) -> Result<Self> {
        limits.validate()?;
        limits.check_reachable(&defaults)?;
        let distance = required_separation(&defaults)?;
        let curves = sweep_all(&defaults, &ranges)?;
        Ok(Self {
            params: defaults,
            defaults,
            ranges,
            limits,
            distance,
            curves,
        })
    }

    /// Applies an event, recomputing the distance and every curve.
    ///
    /// On failure the explorer is left exactly as it was.
    pub fn handle(&mut self, event: Event) -> Result<f64> {
        let params = match event {
            Event::ParameterChanged { parameter, value } => {
                let value = parameter.check(value).map_err(|err| {
                    log::warn!("Rejected {:?}: {}", event, err);
                    err
                })?;
                let limits = self.limits.get(parameter);
                let clamped = limits.clamp(value);
                if clamped != value {
                    log::debug!("Clamped {} from {} to {}", parameter, value, clamped);
                }
                self.params.with(parameter, clamped)
            }
            Event::ResetRequested => self.defaults,
        };
        self.recompute(params)
    }

    /// Replaces the parameters once the distance and all curves have been computed.
    fn recompute(&mut self, params: ParameterSet) -> Result<f64> {
        let result = required_separation(&params)
            .and_then(|distance| Ok((distance, sweep_all(&params, &self.ranges)?)));
        let (distance, curves) = result.map_err(|err| {
            log::warn!("Recomputation failed for {:?}: {}", params, err);
            err
        })?;
        log::debug!("Recomputed {:?}: separation {:.3} m", params, distance);
        self.params = params;
        self.distance = distance;
        self.curves = curves;
        Ok(distance)
    }

    /// Gets the current parameters.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Gets the required separation at the current parameters in m.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets every curve at the current parameters.
    pub fn curves(&self) -> &Curves {
        &self.curves
    }

    /// Gets the sweep ranges.
    pub fn ranges(&self) -> &SweepRanges {
        &self.ranges
    }

    /// Gets the parameter limits.
    pub fn limits(&self) -> &ParameterLimits {
        &self.limits
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(SweepRanges::default(), ParameterLimits::default())
            .expect("Invalid default configuration")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::Interval;
    use crate::Error;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn starts_at_defaults() {
        let explorer = Explorer::default();
        assert_eq!(*explorer.params(), ParameterSet::default());
        assert_approx_eq!(explorer.distance(), 14.5);
        assert_eq!(explorer.curves().delay.len(), 101);
    }

    #[test]
    fn change_recomputes_everything() {
        let mut explorer = Explorer::default();
        let before = explorer.curves().clone();
        let distance = explorer
            .handle(Event::ParameterChanged {
                parameter: Parameter::Delay,
                value: 1.0,
            })
            .unwrap();
        assert_approx_eq!(distance, 29.0);
        assert_eq!(explorer.params().delay, 1.0);
        // every curve but the delay curve depends on the delay
        for parameter in [
            Parameter::V1Velocity,
            Parameter::V2Velocity,
            Parameter::V1Decel,
            Parameter::V2Decel,
        ] {
            assert_ne!(explorer.curves().get(parameter), before.get(parameter));
        }
        assert_eq!(explorer.curves().delay, before.delay);
    }

    #[test]
    fn clamps_to_limits() {
        let mut explorer = Explorer::default();
        explorer
            .handle(Event::ParameterChanged {
                parameter: Parameter::V2Decel,
                value: -3.0,
            })
            .unwrap();
        assert_eq!(explorer.params().v2_decel, -6.0);
    }

    #[test]
    fn rejected_event_leaves_state_untouched() {
        let mut explorer = Explorer::default();
        let params = *explorer.params();
        let curves = explorer.curves().clone();

        let result = explorer.handle(Event::ParameterChanged {
            parameter: Parameter::V1Velocity,
            value: f64::NAN,
        });
        assert!(matches!(result, Err(Error::Domain { .. })));
        assert_eq!(*explorer.params(), params);
        assert_eq!(*explorer.curves(), curves);
        assert_approx_eq!(explorer.distance(), 14.5);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut explorer = Explorer::default();
        for (parameter, value) in [(Parameter::V1Velocity, 33.0), (Parameter::V1Decel, -7.0)] {
            explorer
                .handle(Event::ParameterChanged { parameter, value })
                .unwrap();
        }
        assert_ne!(*explorer.params(), ParameterSet::default());

        let distance = explorer.handle(Event::ResetRequested).unwrap();
        assert_eq!(*explorer.params(), ParameterSet::default());
        assert_approx_eq!(distance, 14.5);
        assert_eq!(*explorer.curves(), Explorer::default().curves().clone());
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut limits = ParameterLimits::default();
        limits.v1_decel = Interval::new(-11.0, 0.0);
        assert!(Explorer::new(SweepRanges::default(), limits).is_err());

        let defaults = ParameterSet::default().with(Parameter::Delay, -1.0);
        assert!(
            Explorer::with_defaults(defaults, SweepRanges::default(), ParameterLimits::default())
                .is_err()
        );
    }

    #[test]
    fn rejects_defaults_outside_limits() {
        let defaults = ParameterSet::default().with(Parameter::V1Velocity, 100.0);
        let result =
            Explorer::with_defaults(defaults, SweepRanges::default(), ParameterLimits::default());
        assert!(matches!(
            result,
            Err(Error::Limits {
                parameter: Parameter::V1Velocity,
                ..
            })
        ));
    }
}
