//! Integration tests for script execution
//!
//! Runs complete scripts through the parser, the simulation and the
//! runner, checking the exact stats output.

use tissue_sim::command::{OutputFormat, RunSummary, ScriptRunner, Simulation};
use tissue_sim::core::config::SimulationConfig;
use tissue_sim::core::types::{Coordinate, Side};

fn run_script(sim: &mut Simulation, script: &str) -> (Vec<String>, RunSummary) {
    let mut out = Vec::new();
    let summary = ScriptRunner::new(sim, OutputFormat::Text)
        .run(script.as_bytes(), &mut out)
        .unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (lines, summary)
}

#[test]
fn test_basic_infection_script() {
    let script = "\
# One cytotoxic cell with a weakened top
Tissue tissueNew Tissue1
Tissue Tissue1 cytotoxicCellNew 0 0 0
Cell Tissue1 0 0 0 membrane up antibodyStrengthIs 20
Tissue Tissue1 infectionStartLocationIs 0 0 0 up 15
Tissue Tissue1 infectionStartLocationIs 0 0 0 up 25
";
    let mut sim = Simulation::default();
    let (lines, summary) = run_script(&mut sim, script);

    assert_eq!(lines, vec!["0 1 -5 1 0 0 0", "1 1 5 1 0 1 0"]);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.commands, 5);
}

#[test]
fn test_column_and_delete_script() {
    let mut script = String::from("Tissue tissueNew Tissue1\n");
    for z in 0..10 {
        script.push_str(&format!("Tissue Tissue1 helperCellNew 0 0 {}\n", z));
    }
    script.push_str("Tissue Tissue1 infectionStartLocationIs 0 0 0 down 20\n");
    script.push_str("Tissue Tissue1 infectedCellsDel\n");
    script.push_str("Tissue Tissue1 infectionStartLocationIs 0 0 0 down 20\n");

    let mut sim = Simulation::default();
    let (lines, _) = run_script(&mut sim, &script);

    assert_eq!(lines, vec!["10 10 200 0 10 10 9", "0 0 0 0 0 0 0"]);
    assert_eq!(sim.tissue("Tissue1").unwrap().cells(), 0);
}

#[test]
fn test_clone_script() {
    let script = "\
Tissue tissueNew T
Tissue T cytotoxicCellNew 0 0 0
Cell T 0 0 0 membrane down antibodyStrengthIs 5
Cell T 0 0 0 cloneNew north
Cell T 0 0 0 cloneNew north
Tissue T cloneCellsNew up
Tissue T infectionStartLocationIs 0 1 1 down 50
";
    let mut sim = Simulation::default();
    let (lines, summary) = run_script(&mut sim, script);

    // Second cloneNew lands on the first clone and is skipped
    assert_eq!(summary.failed, 1);

    let tissue = sim.tissue("T").unwrap();
    assert_eq!(tissue.cells(), 4);
    let lifted = tissue.cell_at(Coordinate::new(0, 1, 1)).unwrap();
    assert_eq!(lifted.membrane(Side::Down).antibody_strength, 5);

    // The weakened down face lets the infection into (0,1,1); its south
    // and down neighbors repel it at full cytotoxic strength
    assert_eq!(lines, vec!["1 3 -55 4 0 1 0"]);
}

#[test]
fn test_multiple_tissues_script() {
    let script = "\
Tissue tissueNew Lung
Tissue tissueNew Skin
Tissue tissueNew Lung
Tissue Lung helperCellNew 0 0 0
Tissue Skin cytotoxicCellNew 0 0 0
Tissue Skin cytotoxicCellNew 1 0 0
Tissue Lung infectionStartLocationIs 0 0 0 east 1
Tissue Skin infectionStartLocationIs 0 0 0 east 1
";
    let mut sim = Simulation::default();
    let (lines, summary) = run_script(&mut sim, script);

    assert_eq!(summary.failed, 1);
    assert_eq!(sim.tissue_count(), 2);
    assert_eq!(lines, vec!["1 1 1 0 1 1 0", "0 1 -99 2 0 0 0"]);
}

#[test]
fn test_auto_create_config_script() {
    let config = SimulationConfig::from_toml(
        "auto_create_on_strength_set = true\nauto_create_cell_type = \"cytotoxic\"\n",
    )
    .unwrap();
    let script = "\
Tissue tissueNew T
Cell T 3 3 3 membrane west antibodyStrengthIs 1
Tissue T infectionStartLocationIs 3 3 3 west 2
";
    let mut sim = Simulation::new(config);
    let (lines, summary) = run_script(&mut sim, script);

    assert_eq!(summary.failed, 0);
    assert_eq!(lines, vec!["1 1 1 1 0 1 0"]);
}

#[test]
fn test_strict_strength_set_skips_line() {
    let script = "\
Tissue tissueNew T
Cell T 3 3 3 membrane west antibodyStrengthIs 1
Tissue T infectionStartLocationIs 3 3 3 west 2
";
    let mut sim = Simulation::default();
    let (lines, summary) = run_script(&mut sim, script);

    assert_eq!(summary.failed, 1);
    assert_eq!(lines, vec!["0 0 0 0 0 0 0"]);
}

#[test]
fn test_grid_edge_script_keeps_running() {
    let script = "\
Tissue tissueNew T
Tissue T helperCellNew 2147483647 0 0
Tissue T helperCellNew -2147483648 -2147483648 -2147483648
Cell T 2147483647 0 0 cloneNew east
Tissue T cloneCellsNew down
Tissue T infectionStartLocationIs 2147483647 0 0 up 1
Tissue T infectionStartLocationIs -2147483648 -2147483648 -2147483648 down 1
";
    let mut sim = Simulation::default();
    let (lines, summary) = run_script(&mut sim, script);

    // Only the east clone line fails; cloneCellsNew skips the off-grid cell
    assert_eq!(summary.failed, 1);
    assert_eq!(sim.tissue("T").unwrap().cells(), 3);

    // Full x range, and y and z from i32::MIN up to 0
    let volume = (1u128 << 32) * ((1u128 << 31) + 1).pow(2);
    assert_eq!(
        lines,
        vec!["2 2 2 0 3 2 1".to_string(), format!("3 1 1 0 3 {} 0", volume)]
    );
}
