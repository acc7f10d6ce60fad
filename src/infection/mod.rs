//! Infection propagation and the statistics derived from it

pub mod engine;
pub mod stats;

pub use engine::{spread_infection, InfectionRound};
pub use stats::{infection_volume, BoundingBox, InfectionStats};
