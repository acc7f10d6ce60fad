//! Tissue data model: membranes, cells, the tissue container and its
//! population tracker

pub mod cell;
pub mod lifecycle;
pub mod membrane;
pub mod population;
#[allow(clippy::module_inception)]
pub mod tissue;

pub use cell::{Cell, CellType, Health};
pub use lifecycle::CloneReport;
pub use membrane::{Membrane, MembraneSet};
pub use population::PopulationTracker;
pub use tissue::{CellOrigin, Tissue, TissueObserver};
