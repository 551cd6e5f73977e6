use super::error::{AnalysisError, AnalysisResult};

/// Flow numbers that have tabulated gap-acceptance parameters.
pub const FLOW_NUMBERS: [u8; 8] = [1, 4, 5, 6, 7, 10, 11, 12];

/// Priority-sign classes that have a follow-up table.
pub const PRIORITY_SIGNS: [u8; 2] = [4, 6];

// (flow number, follow-up time in seconds)
const FOLLOW_UP_SIGN_4: [(u8, f64); 8] = [
    (1, 2.6),
    (7, 2.6),
    (6, 3.1),
    (12, 3.1),
    (5, 3.3),
    (11, 3.3),
    (4, 3.5),
    (10, 3.5),
];

const FOLLOW_UP_SIGN_6: [(u8, f64); 8] = [
    (1, 2.6),
    (7, 2.6),
    (6, 3.7),
    (12, 3.7),
    (5, 3.9),
    (11, 3.9),
    (4, 4.1),
    (10, 4.1),
];

/// Looks up the follow-up time (seconds) of a flow under the given priority sign.
pub fn follow_up_time(flow: u8, sign: u8) -> AnalysisResult<f64> {
    let table: &[(u8, f64)] = match sign {
        4 => &FOLLOW_UP_SIGN_4,
        6 => &FOLLOW_UP_SIGN_6,
        other => return Err(AnalysisError::UnknownPrioritySign(other)),
    };

    table
        .iter()
        .find(|(f, _)| *f == flow)
        .map(|(_, tf)| *tf)
        .ok_or(AnalysisError::UnknownFollowUpFlow { flow, sign })
}

/// Critical gap (seconds) of a flow as a linear function of free-flow speed.
pub fn critical_gap(flow: u8, free_flow_speed: f64) -> AnalysisResult<f64> {
    let (intercept, slope) = match flow {
        1 | 7 => (3.4, 0.021),
        6 | 12 => (2.8, 0.038),
        5 | 11 => (4.4, 0.036),
        4 | 10 => (5.2, 0.022),
        other => return Err(AnalysisError::UnknownCriticalGapFlow(other)),
    };

    Ok(intercept + slope * 0.85 * free_flow_speed)
}
