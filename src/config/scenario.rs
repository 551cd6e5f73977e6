use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use std::path::Path;
use super::Validate;

/// Hourly volumes (veh/h) of the six movements at a T-intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntersectionVolumes {
    pub i2: u32,
    pub i3: u32,
    pub i4: u32,
    pub i6: u32,
    pub i7: u32,
    pub i8: u32,
}

/// A named set of volumes loaded from a TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub volumes: IntersectionVolumes,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;

        let scenario = Self::from_toml(&content)
            .with_context(|| format!("Invalid scenario file {}", path.display()))?;

        Ok(scenario)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(anyhow::anyhow!("Scenario name must not be blank"));
            }
        }

        Ok(())
    }
}
