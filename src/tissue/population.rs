//! Population tracking driven by tissue events
//!
//! Keeps running counts per cell type and seeds the membranes of newly
//! created cells with their type's default strength. The counts always
//! sum to the number of live cells in the observed tissue.

use crate::core::config::SimulationConfig;
use crate::core::types::AntibodyStrength;
use crate::tissue::cell::{Cell, CellType};
use crate::tissue::tissue::{CellOrigin, TissueObserver};

#[derive(Debug, Clone)]
pub struct PopulationTracker {
    cytotoxic_count: usize,
    helper_count: usize,
    cytotoxic_strength: AntibodyStrength,
    helper_strength: AntibodyStrength,
}

impl PopulationTracker {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            cytotoxic_count: 0,
            helper_count: 0,
            cytotoxic_strength: config.cytotoxic_antibody_strength,
            helper_strength: config.helper_antibody_strength,
        }
    }

    pub fn cytotoxic_count(&self) -> usize {
        self.cytotoxic_count
    }

    pub fn helper_count(&self) -> usize {
        self.helper_count
    }

    pub fn total(&self) -> usize {
        self.cytotoxic_count + self.helper_count
    }

    fn default_strength(&self, cell_type: CellType) -> AntibodyStrength {
        match cell_type {
            CellType::Cytotoxic => self.cytotoxic_strength,
            CellType::Helper => self.helper_strength,
        }
    }

    fn count_mut(&mut self, cell_type: CellType) -> &mut usize {
        match cell_type {
            CellType::Cytotoxic => &mut self.cytotoxic_count,
            CellType::Helper => &mut self.helper_count,
        }
    }
}

impl Default for PopulationTracker {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl TissueObserver for PopulationTracker {
    fn on_cell_created(&mut self, cell: &mut Cell, origin: CellOrigin) {
        if origin == CellOrigin::New {
            cell.membranes_are(self.default_strength(cell.cell_type()));
        }
        *self.count_mut(cell.cell_type()) += 1;
    }

    fn on_cell_deleted(&mut self, cell: &Cell) {
        let count = self.count_mut(cell.cell_type());
        *count = count.saturating_sub(1);
    }
}
