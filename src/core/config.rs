//! Simulation configuration
//!
//! Defaults reproduce the standard tissue rules. A TOML file may override
//! any subset of the fields; missing keys keep their default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, TissueError};
use crate::core::types::AntibodyStrength;
use crate::tissue::cell::CellType;

/// Configuration for tissue creation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Strength assigned to all six membranes of a new cytotoxic cell
    pub cytotoxic_antibody_strength: AntibodyStrength,

    /// Strength assigned to all six membranes of a new helper cell
    pub helper_antibody_strength: AntibodyStrength,

    /// Create a cell when a membrane strength is set on an empty coordinate
    ///
    /// Off by default: setting a strength on a missing cell fails with
    /// `NotFound`. When enabled, a cell of `auto_create_cell_type` is
    /// created first and then receives the requested strength.
    pub auto_create_on_strength_set: bool,

    /// Type of cell created by `auto_create_on_strength_set`
    pub auto_create_cell_type: CellType,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cytotoxic_antibody_strength: 100,
            helper_antibody_strength: 0,
            auto_create_on_strength_set: false,
            auto_create_cell_type: CellType::Cytotoxic,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)
            .map_err(|e| TissueError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TissueError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.cytotoxic_antibody_strength < self.helper_antibody_strength {
            return Err(TissueError::Config(format!(
                "cytotoxic_antibody_strength ({}) should be >= helper_antibody_strength ({})",
                self.cytotoxic_antibody_strength, self.helper_antibody_strength
            )));
        }
        Ok(())
    }

    /// Default membrane strength for a freshly created cell of `cell_type`
    pub fn default_strength(&self, cell_type: CellType) -> AntibodyStrength {
        match cell_type {
            CellType::Cytotoxic => self.cytotoxic_antibody_strength,
            CellType::Helper => self.helper_antibody_strength,
        }
    }
}
