//! Command execution against a set of named tissues

use ahash::AHashMap;

use crate::command::parser::Command;
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, TissueError};
use crate::core::types::{AntibodyStrength, Coordinate, Side};
use crate::infection::stats::InfectionStats;
use crate::tissue::cell::CellType;
use crate::tissue::tissue::Tissue;

/// Owns every tissue in one run and applies commands to them
pub struct Simulation {
    config: SimulationConfig,
    tissues: AHashMap<String, Tissue>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            tissues: AHashMap::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tissue(&self, name: &str) -> Option<&Tissue> {
        self.tissues.get(name)
    }

    fn tissue_mut(&mut self, name: &str) -> Result<&mut Tissue> {
        self.tissues
            .get_mut(name)
            .ok_or_else(|| TissueError::TissueNotFound(name.to_string()))
    }

    pub fn tissue_count(&self) -> usize {
        self.tissues.len()
    }

    pub fn tissue_new(&mut self, name: &str) -> Result<()> {
        if self.tissues.contains_key(name) {
            return Err(TissueError::TissueExists(name.to_string()));
        }
        self.tissues
            .insert(name.to_string(), Tissue::new(name, &self.config));
        tracing::debug!("Created tissue {}", name);
        Ok(())
    }

    pub fn cell_new(&mut self, tissue: &str, location: Coordinate, cell_type: CellType) -> Result<()> {
        self.tissue_mut(tissue)?.cell_new(location, cell_type)?;
        Ok(())
    }

    /// Set a membrane strength, creating the cell first when configured to
    pub fn antibody_strength_is(
        &mut self,
        tissue: &str,
        location: Coordinate,
        side: Side,
        strength: AntibodyStrength,
    ) -> Result<()> {
        let auto_create = self
            .config
            .auto_create_on_strength_set
            .then_some(self.config.auto_create_cell_type);
        let tissue = self.tissue_mut(tissue)?;

        if let Some(cell_type) = auto_create {
            if tissue.cell_at(location).is_none() {
                tissue.cell_new(location, cell_type)?;
            }
        }
        tissue.antibody_strength_is(location, side, strength)
    }

    pub fn infection_start(
        &mut self,
        tissue: &str,
        location: Coordinate,
        side: Side,
        strength: AntibodyStrength,
    ) -> Result<InfectionStats> {
        Ok(self.tissue_mut(tissue)?.infection_start(location, side, strength))
    }

    pub fn infected_cells_del(&mut self, tissue: &str) -> Result<usize> {
        Ok(self.tissue_mut(tissue)?.infected_cells_del())
    }

    pub fn clone_new(&mut self, tissue: &str, location: Coordinate, side: Side) -> Result<()> {
        self.tissue_mut(tissue)?.clone_new(location, side)?;
        Ok(())
    }

    pub fn clone_cells_new(&mut self, tissue: &str, side: Side) -> Result<()> {
        let report = self.tissue_mut(tissue)?.clone_cells_new(side);
        tracing::debug!(
            "Cloned {} cells toward {} in {} ({} skipped)",
            report.cloned,
            side,
            tissue,
            report.skipped
        );
        Ok(())
    }

    /// Apply one command; infection commands return their stats line
    pub fn execute(&mut self, command: Command) -> Result<Option<InfectionStats>> {
        match command {
            Command::TissueNew { tissue } => self.tissue_new(&tissue)?,
            Command::CellNew {
                tissue,
                cell_type,
                location,
            } => self.cell_new(&tissue, location, cell_type)?,
            Command::AntibodyStrengthIs {
                tissue,
                location,
                side,
                strength,
            } => self.antibody_strength_is(&tissue, location, side, strength)?,
            Command::InfectionStart {
                tissue,
                location,
                side,
                strength,
            } => return self.infection_start(&tissue, location, side, strength).map(Some),
            Command::InfectedCellsDel { tissue } => {
                self.infected_cells_del(&tissue)?;
            }
            Command::CloneNew {
                tissue,
                location,
                side,
            } => self.clone_new(&tissue, location, side)?,
            Command::CloneCellsNew { tissue, side } => self.clone_cells_new(&tissue, side)?,
        }
        Ok(None)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tissue_new_twice() {
        let mut sim = Simulation::default();
        sim.tissue_new("T").unwrap();
        assert!(matches!(sim.tissue_new("T"), Err(TissueError::TissueExists(_))));
        assert_eq!(sim.tissue_count(), 1);
    }

    #[test]
    fn test_unknown_tissue() {
        let mut sim = Simulation::default();
        let result = sim.cell_new("Nowhere", Coordinate::default(), CellType::Helper);
        assert!(matches!(result, Err(TissueError::TissueNotFound(name)) if name == "Nowhere"));
    }

    #[test]
    fn test_tissues_are_independent() {
        let mut sim = Simulation::default();
        sim.tissue_new("A").unwrap();
        sim.tissue_new("B").unwrap();
        sim.cell_new("A", Coordinate::default(), CellType::Helper).unwrap();
        sim.cell_new("B", Coordinate::default(), CellType::Helper).unwrap();

        let stats = sim
            .infection_start("A", Coordinate::default(), Side::Up, 1)
            .unwrap();
        assert_eq!(stats.infected, 1);
        assert_eq!(sim.tissue("B").unwrap().infected_count(), 0);
    }

    #[test]
    fn test_strength_on_missing_cell_fails_by_default() {
        let mut sim = Simulation::default();
        sim.tissue_new("T").unwrap();
        let result = sim.antibody_strength_is("T", Coordinate::default(), Side::Up, 5);
        assert!(matches!(result, Err(TissueError::NotFound(_))));
        assert_eq!(sim.tissue("T").unwrap().cells(), 0);
    }

    #[test]
    fn test_strength_on_missing_cell_auto_creates() {
        let config = SimulationConfig {
            auto_create_on_strength_set: true,
            auto_create_cell_type: CellType::Helper,
            ..Default::default()
        };
        let mut sim = Simulation::new(config);
        sim.tissue_new("T").unwrap();
        sim.antibody_strength_is("T", Coordinate::default(), Side::Up, 5)
            .unwrap();

        let tissue = sim.tissue("T").unwrap();
        let cell = tissue.cell_at(Coordinate::default()).unwrap();
        assert_eq!(cell.cell_type(), CellType::Helper);
        assert_eq!(cell.membrane(Side::Up).antibody_strength, 5);
        assert_eq!(cell.membrane(Side::Down).antibody_strength, 0);
        assert_eq!(tissue.population().helper_count(), 1);
    }

    #[test]
    fn test_execute_returns_stats_only_for_infection() {
        let mut sim = Simulation::default();
        let created = sim
            .execute(Command::TissueNew {
                tissue: "T".into(),
            })
            .unwrap();
        assert!(created.is_none());

        sim.execute(Command::CellNew {
            tissue: "T".into(),
            cell_type: CellType::Cytotoxic,
            location: Coordinate::default(),
        })
        .unwrap();

        let stats = sim
            .execute(Command::InfectionStart {
                tissue: "T".into(),
                location: Coordinate::default(),
                side: Side::North,
                strength: 101,
            })
            .unwrap()
            .unwrap();
        assert_eq!(stats.to_string(), "1 1 1 1 0 1 0");
    }
}
