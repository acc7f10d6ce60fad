//! Tissue Sim - infection propagation through a 3D grid of immune cells

pub mod command;
pub mod core;
pub mod infection;
pub mod tissue;
