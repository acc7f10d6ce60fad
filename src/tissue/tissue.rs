//! Tissue - the authoritative set of cells, keyed by coordinate
//!
//! The tissue owns every cell and notifies a single observer (which may
//! itself fan out) when cells are created or deleted. Creation notifies
//! after the cell is stored; deletion notifies while the cell is still
//! readable, before it is removed.

use ahash::AHashMap;

use crate::core::error::{Result, TissueError};
use crate::core::types::Coordinate;
use crate::tissue::cell::Cell;
use crate::tissue::population::PopulationTracker;

/// How a cell came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOrigin {
    /// Created from scratch; membranes still need their type defaults
    New,
    /// Copied from another cell; membranes are already set
    Clone,
}

/// Receives tissue lifecycle notifications, synchronously
pub trait TissueObserver {
    fn on_cell_created(&mut self, cell: &mut Cell, origin: CellOrigin);
    fn on_cell_deleted(&mut self, cell: &Cell);
}

impl TissueObserver for () {
    fn on_cell_created(&mut self, _cell: &mut Cell, _origin: CellOrigin) {}
    fn on_cell_deleted(&mut self, _cell: &Cell) {}
}

/// Notifies `A` first, then `B`
impl<A: TissueObserver, B: TissueObserver> TissueObserver for (A, B) {
    fn on_cell_created(&mut self, cell: &mut Cell, origin: CellOrigin) {
        self.0.on_cell_created(cell, origin);
        self.1.on_cell_created(cell, origin);
    }

    fn on_cell_deleted(&mut self, cell: &Cell) {
        self.0.on_cell_deleted(cell);
        self.1.on_cell_deleted(cell);
    }
}

/// A named collection of cells with at most one cell per coordinate
pub struct Tissue<O: TissueObserver = PopulationTracker> {
    name: String,
    cells: AHashMap<Coordinate, Cell>,
    observer: O,
}

impl<O: TissueObserver> Tissue<O> {
    pub fn with_observer(name: impl Into<String>, observer: O) -> Self {
        Self {
            name: name.into(),
            cells: AHashMap::new(),
            observer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Insert a cell, failing if its coordinate is taken
    pub fn cell_is(&mut self, cell: Cell, origin: CellOrigin) -> Result<&Cell> {
        let location = cell.location();
        if self.cells.contains_key(&location) {
            return Err(TissueError::LocationOccupied(location));
        }

        let stored = self.cells.entry(location).or_insert(cell);
        self.observer.on_cell_created(stored, origin);
        Ok(stored)
    }

    /// Remove and return the cell at `location`, if any
    pub fn cell_del(&mut self, location: Coordinate) -> Option<Cell> {
        let cell = self.cells.get(&location)?;
        self.observer.on_cell_deleted(cell);
        self.cells.remove(&location)
    }

    pub fn cell_at(&self, location: Coordinate) -> Option<&Cell> {
        self.cells.get(&location)
    }

    pub(crate) fn cell_at_mut(&mut self, location: Coordinate) -> Option<&mut Cell> {
        self.cells.get_mut(&location)
    }

    /// Number of live cells
    pub fn cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all live cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn infected(&self) -> impl Iterator<Item = &Cell> {
        self.iter().filter(|cell| cell.is_infected())
    }

    pub fn infected_count(&self) -> usize {
        self.infected().count()
    }

    /// Snapshot of every occupied coordinate
    pub fn locations(&self) -> Vec<Coordinate> {
        self.cells.keys().copied().collect()
    }

    /// Snapshot of every infected cell's coordinate
    pub fn infected_locations(&self) -> Vec<Coordinate> {
        self.infected().map(Cell::location).collect()
    }
}
