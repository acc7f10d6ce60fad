//! Cell membranes: one defensive face per side

use crate::core::types::{AntibodyStrength, Side};

/// One face of a cell and its antibody strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membrane {
    pub side: Side,
    pub antibody_strength: AntibodyStrength,
}

impl Membrane {
    pub fn new(side: Side, antibody_strength: AntibodyStrength) -> Self {
        Self {
            side,
            antibody_strength,
        }
    }

    /// Returns true if an attack of `strength` gets through this membrane
    #[inline]
    pub fn is_breached_by(&self, strength: AntibodyStrength) -> bool {
        strength > self.antibody_strength
    }

    /// Signed margin of an attack over this membrane (negative when repelled)
    #[inline]
    pub fn strength_difference(&self, strength: AntibodyStrength) -> i64 {
        i64::from(strength) - i64::from(self.antibody_strength)
    }
}

/// The six membranes of a cell, always complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembraneSet {
    membranes: [Membrane; 6],
}

impl MembraneSet {
    /// All six membranes at the same strength
    pub fn uniform(strength: AntibodyStrength) -> Self {
        Self {
            membranes: Side::ALL.map(|side| Membrane::new(side, strength)),
        }
    }

    pub fn get(&self, side: Side) -> &Membrane {
        &self.membranes[side.index()]
    }

    pub fn set_strength(&mut self, side: Side, strength: AntibodyStrength) {
        self.membranes[side.index()].antibody_strength = strength;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Membrane> {
        self.membranes.iter()
    }
}

impl Default for MembraneSet {
    fn default() -> Self {
        Self::uniform(0)
    }
}
