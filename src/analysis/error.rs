use thiserror::Error;

/// Domain errors raised by the capacity pipeline.
///
/// Every variant is fatal to a run; there is no partial-results mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("unsupported priority sign {0}, expected 4 or 6")]
    UnknownPrioritySign(u8),

    #[error("flow number {flow} has no follow-up time for priority sign {sign}")]
    UnknownFollowUpFlow { flow: u8, sign: u8 },

    #[error("flow number {0} has no critical gap formula")]
    UnknownCriticalGapFlow(u8),

    #[error("capacity must be greater than 0, got {0}")]
    NonPositiveCapacity(f64),

    #[error("follow-up time must be greater than 0, got {0}")]
    NonPositiveFollowUpTime(f64),

    #[error("capacity of movement group {0} is undefined")]
    UndefinedGroupCapacity(&'static str),
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
