//! Cells: located entities with a type, a health state and six membranes

use serde::{Deserialize, Serialize};

use crate::core::types::{AntibodyStrength, Coordinate, Side};
use crate::tissue::membrane::{Membrane, MembraneSet};

/// Kind of immune cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Cytotoxic,
    Helper,
}

/// Health state; infection is permanent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Health {
    #[default]
    Healthy,
    Infected,
}

/// A single cell in a tissue
///
/// Location and type are fixed at creation. Health only ever moves from
/// healthy to infected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    location: Coordinate,
    cell_type: CellType,
    health: Health,
    membranes: MembraneSet,
}

impl Cell {
    /// A healthy cell; membrane strengths are assigned when the tissue admits it
    pub fn new(location: Coordinate, cell_type: CellType) -> Self {
        Self {
            location,
            cell_type,
            health: Health::Healthy,
            membranes: MembraneSet::default(),
        }
    }

    /// Copy of this cell placed at `location`, with health and membranes intact
    pub fn clone_at(&self, location: Coordinate) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn is_infected(&self) -> bool {
        self.health == Health::Infected
    }

    pub fn infect(&mut self) {
        self.health = Health::Infected;
    }

    pub fn membrane(&self, side: Side) -> &Membrane {
        self.membranes.get(side)
    }

    pub fn membranes(&self) -> &MembraneSet {
        &self.membranes
    }

    pub fn antibody_strength_is(&mut self, side: Side, strength: AntibodyStrength) {
        self.membranes.set_strength(side, strength);
    }

    /// Reset all six membranes to one strength
    pub fn membranes_are(&mut self, strength: AntibodyStrength) {
        self.membranes = MembraneSet::uniform(strength);
    }
}
