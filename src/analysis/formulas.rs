use super::error::{AnalysisError, AnalysisResult};

/// Degree of saturation of a movement.
///
/// A non-positive capacity has no meaningful ratio, so it is carried as
/// `Undefined` instead of an arbitrary large number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Saturation {
    Defined(f64),
    Undefined,
}

impl Saturation {
    pub fn ratio(self) -> Option<f64> {
        match self {
            Saturation::Defined(ratio) => Some(ratio),
            Saturation::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Saturation::Defined(_))
    }
}

/// Gap-acceptance capacity (veh/h) of a movement facing `conflicting_volume` veh/h.
pub fn base_capacity(
    follow_up_time: f64,
    critical_gap: f64,
    conflicting_volume: f64,
) -> AnalysisResult<f64> {
    if follow_up_time <= 0.0 {
        return Err(AnalysisError::NonPositiveFollowUpTime(follow_up_time));
    }

    let exponent = -(conflicting_volume / 3600.0) * (critical_gap - follow_up_time / 2.0);
    Ok(3600.0 / follow_up_time * exponent.exp())
}

/// Ratio of demand volume to capacity.
pub fn load_coefficient(volume: f64, capacity: f64) -> Saturation {
    if capacity > 0.0 {
        Saturation::Defined(volume / capacity)
    } else {
        Saturation::Undefined
    }
}

/// Probability that the movement's queue is empty, clipped to `[0, 1]`.
pub fn unblocked_probability(volume: f64, capacity: f64) -> f64 {
    match load_coefficient(volume, capacity) {
        Saturation::Defined(ratio) => (1.0 - ratio).clamp(0.0, 1.0),
        Saturation::Undefined => 0.0,
    }
}

/// Mean control delay in seconds over an analysis period of `period` seconds.
pub fn mean_delay(volume: f64, capacity: f64, period: f64) -> AnalysisResult<f64> {
    if capacity <= 0.0 {
        return Err(AnalysisError::NonPositiveCapacity(capacity));
    }

    let a = volume / capacity;
    let overflow = (a - 1.0)
        + ((a - 1.0).powi(2) + (3600.0 * 8.0 * a.min(1.0)) / (capacity * period)).sqrt();

    Ok(3600.0 / capacity + period / 4.0 * overflow)
}

/// 95th-percentile queue length.
pub fn queue_length(volume: f64, capacity: f64) -> AnalysisResult<f64> {
    if capacity <= 0.0 {
        return Err(AnalysisError::NonPositiveCapacity(capacity));
    }

    let a = volume / capacity;
    Ok(1.5 * capacity * (a - 1.0 + ((1.0 - a).powi(2) + 3.0 * (8.0 * a / capacity)).sqrt()))
}
