//! Statistics reported after each infection event

use serde::Serialize;
use std::fmt;

use crate::core::types::Coordinate;
use crate::infection::engine::InfectionRound;
use crate::tissue::population::PopulationTracker;
use crate::tissue::tissue::{Tissue, TissueObserver};

/// One stats line: tissue-wide totals plus the counters of the last event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfectionStats {
    /// Infected cells in the tissue, including earlier events
    pub infected: usize,
    pub attempts: u64,
    pub strength_difference: i64,
    pub cytotoxic: usize,
    pub helper: usize,
    /// Bounding-box volume; up to 2^96 cells across the full `i32` grid
    pub volume: u128,
    pub path: u32,
}

impl InfectionStats {
    pub fn collect(tissue: &Tissue<PopulationTracker>, round: &InfectionRound) -> Self {
        let population = tissue.population();
        Self {
            infected: tissue.infected_count(),
            attempts: round.attempts,
            strength_difference: round.strength_difference,
            cytotoxic: population.cytotoxic_count(),
            helper: population.helper_count(),
            volume: infection_volume(tissue),
            path: round.path,
        }
    }
}

/// Seven integers separated by single spaces
impl fmt::Display for InfectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.infected,
            self.attempts,
            self.strength_difference,
            self.cytotoxic,
            self.helper,
            self.volume,
            self.path
        )
    }
}

/// Axis-aligned box enclosing a set of coordinates (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    pub fn around(point: Coordinate) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing every point, or None for no points
    pub fn enclosing(points: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::around(first), |mut bounds, p| {
            bounds.include(p);
            bounds
        }))
    }

    pub fn include(&mut self, p: Coordinate) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Number of grid cells inside the box
    pub fn volume(&self) -> u128 {
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u128;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }
}

/// Volume of the bounding box of all infected cells; 0 when none are infected
pub fn infection_volume<O: TissueObserver>(tissue: &Tissue<O>) -> u128 {
    BoundingBox::enclosing(tissue.infected().map(|cell| cell.location()))
        .map_or(0, |bounds| bounds.volume())
}
