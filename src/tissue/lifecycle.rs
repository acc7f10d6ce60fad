//! Cell lifecycle operations: creation, membrane edits, cloning, removal
//!
//! Batch operations act on a snapshot of coordinates taken before the
//! first mutation, so cells created or removed along the way never
//! disturb the set being processed.

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, TissueError};
use crate::core::types::{AntibodyStrength, Coordinate, Side};
use crate::tissue::cell::{Cell, CellType};
use crate::tissue::population::PopulationTracker;
use crate::tissue::tissue::{CellOrigin, Tissue, TissueObserver};

impl Tissue<PopulationTracker> {
    /// Empty tissue tracked by a fresh population counter
    pub fn new(name: impl Into<String>, config: &SimulationConfig) -> Self {
        Self::with_observer(name, PopulationTracker::new(config))
    }

    pub fn population(&self) -> &PopulationTracker {
        self.observer()
    }
}

/// Outcome of cloning every cell in a tissue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloneReport {
    pub cloned: usize,
    pub skipped: usize,
}

impl<O: TissueObserver> Tissue<O> {
    /// Create a healthy cell; membranes take the observer's type defaults
    pub fn cell_new(&mut self, location: Coordinate, cell_type: CellType) -> Result<&Cell> {
        let cell = self.cell_is(Cell::new(location, cell_type), CellOrigin::New)?;
        tracing::debug!("Created {:?} cell at {}", cell_type, location);
        Ok(cell)
    }

    /// Set one membrane's strength on an existing cell
    pub fn antibody_strength_is(
        &mut self,
        location: Coordinate,
        side: Side,
        strength: AntibodyStrength,
    ) -> Result<()> {
        let cell = self
            .cell_at_mut(location)
            .ok_or(TissueError::NotFound(location))?;
        cell.antibody_strength_is(side, strength);
        tracing::debug!("Membrane {} of {} set to {}", side, location, strength);
        Ok(())
    }

    /// Copy the cell at `location` into the adjacent coordinate toward `side`
    pub fn clone_new(&mut self, location: Coordinate, side: Side) -> Result<&Cell> {
        let source = self
            .cell_at(location)
            .ok_or(TissueError::NotFound(location))?;
        let target = location
            .neighbor(side)
            .ok_or(TissueError::OffGrid(location, side))?;
        let clone = source.clone_at(target);

        let cell = self.cell_is(clone, CellOrigin::Clone)?;
        tracing::debug!("Cloned {} into {}", location, target);
        Ok(cell)
    }

    /// Clone every current cell toward `side`, skipping any that fail
    pub fn clone_cells_new(&mut self, side: Side) -> CloneReport {
        let mut report = CloneReport::default();
        for location in self.locations() {
            match self.clone_new(location, side) {
                Ok(_) => report.cloned += 1,
                Err(e) => {
                    tracing::debug!("Skipped clone of {}: {}", location, e);
                    report.skipped += 1;
                }
            }
        }
        report
    }

    /// Remove every infected cell, returning how many were removed
    pub fn infected_cells_del(&mut self) -> usize {
        let mut removed = 0;
        for location in self.infected_locations() {
            if self.cell_del(location).is_some() {
                removed += 1;
            }
        }
        tracing::debug!("Removed {} infected cells from {}", removed, self.name());
        removed
    }
}
