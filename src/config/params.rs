use serde::{Deserialize, Serialize};
use anyhow::{Result, anyhow};
use super::Validate;
use crate::analysis::tables::PRIORITY_SIGNS;

pub const DEFAULT_FREE_FLOW_SPEED: f64 = 50.0;
pub const DEFAULT_ANALYSIS_PERIOD: f64 = 3600.0;
pub const DEFAULT_PRIORITY_SIGN: u8 = 4;
pub const DEFAULT_DESIGN_CAPACITY: f64 = 1800.0;

/// Fixed modelling constants of the analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisParams {
    /// Free-flow speed fed into the critical gap formulas.
    pub free_flow_speed: f64,
    /// Length of the analysis period in seconds.
    pub analysis_period: f64,
    /// Priority-sign class selecting the follow-up table (4 or 6).
    pub priority_sign: u8,
    /// Capacity (veh/h) of the uncontrolled major-road movements 2, 3 and 8.
    pub design_capacity: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            free_flow_speed: DEFAULT_FREE_FLOW_SPEED,
            analysis_period: DEFAULT_ANALYSIS_PERIOD,
            priority_sign: DEFAULT_PRIORITY_SIGN,
            design_capacity: DEFAULT_DESIGN_CAPACITY,
        }
    }
}

impl Validate for AnalysisParams {
    fn validate(&self) -> Result<()> {
        if self.free_flow_speed <= 0.0 {
            return Err(anyhow!("Free-flow speed must be positive"));
        }

        if self.analysis_period <= 0.0 {
            return Err(anyhow!("Analysis period must be positive"));
        }

        if !PRIORITY_SIGNS.contains(&self.priority_sign) {
            return Err(anyhow!("Priority sign {} is not supported (expected 4 or 6)", self.priority_sign));
        }

        if self.design_capacity <= 0.0 {
            return Err(anyhow!("Design capacity must be positive"));
        }

        Ok(())
    }
}
