use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LevelOfService {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl LevelOfService {
    pub fn as_str(self) -> &'static str {
        match self {
            LevelOfService::A => "A",
            LevelOfService::B => "B",
            LevelOfService::C => "C",
            LevelOfService::D => "D",
            LevelOfService::E => "E",
            LevelOfService::F => "F",
        }
    }
}

impl fmt::Display for LevelOfService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper delay bounds (seconds, exclusive), checked in this order.
pub const LOS_THRESHOLDS: [(f64, LevelOfService); 4] = [
    (10.0, LevelOfService::A),
    (20.0, LevelOfService::B),
    (30.0, LevelOfService::C),
    (55.0, LevelOfService::D),
];

/// Grades a movement group by its mean delay.
///
/// The first grade whose bound strictly exceeds `delay` wins. Past the last
/// bound the group is `E` while demand stays below capacity and `F` otherwise.
pub fn classify(volume: f64, capacity: f64, delay: f64) -> LevelOfService {
    for (bound, grade) in LOS_THRESHOLDS {
        if delay < bound {
            return grade;
        }
    }

    if volume < capacity {
        LevelOfService::E
    } else {
        LevelOfService::F
    }
}
