//! Script command pipeline
//!
//! Text line -> parser -> Command -> Simulation -> optional stats line

pub mod executor;
pub mod parser;
pub mod script;

pub use executor::Simulation;
pub use parser::{parse_line, Command};
pub use script::{OutputFormat, RunSummary, ScriptRunner};
