//! Infection propagation (breadth-first flood fill)
//!
//! An infection enters the origin cell through one membrane. Every
//! infected cell then attacks its healthy neighbors, one round at a time,
//! through the membrane facing the attacker. Attack strength is constant
//! for the whole event; a membrane is breached only when the attack is
//! strictly stronger than it.

use crate::core::types::{AntibodyStrength, Coordinate, Side};
use crate::infection::stats::InfectionStats;
use crate::tissue::membrane::Membrane;
use crate::tissue::population::PopulationTracker;
use crate::tissue::tissue::{Tissue, TissueObserver};

/// Counters accumulated over one infection event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfectionRound {
    /// Membrane comparisons made, successful or not
    pub attempts: u64,
    /// Sum of (attack - membrane) over all attempts
    pub strength_difference: i64,
    /// Rounds after the origin round that infected at least one cell
    pub path: u32,
    /// Cells infected by this event
    pub newly_infected: usize,
}

impl InfectionRound {
    /// Count one attack on `membrane`, returning whether it got through
    fn attempt(&mut self, membrane: &Membrane, strength: AntibodyStrength) -> bool {
        self.attempts += 1;
        self.strength_difference += membrane.strength_difference(strength);
        membrane.is_breached_by(strength)
    }
}

/// Run one infection event starting at `origin`, entering through `entry`
///
/// Infection persists on the tissue; cells infected by earlier events are
/// never attacked again.
pub fn spread_infection<O: TissueObserver>(
    tissue: &mut Tissue<O>,
    origin: Coordinate,
    entry: Side,
    strength: AntibodyStrength,
) -> InfectionRound {
    let mut round = InfectionRound::default();

    let Some(cell) = tissue.cell_at_mut(origin) else {
        return round;
    };
    let membrane = *cell.membrane(entry);
    if !round.attempt(&membrane, strength) {
        return round;
    }
    if !cell.is_infected() {
        cell.infect();
        round.newly_infected += 1;
    }

    let mut frontier = vec![origin];
    let mut next = Vec::new();

    loop {
        for location in frontier.drain(..) {
            for (side, target) in location.neighbors() {
                let Some(neighbor) = tissue.cell_at_mut(target) else {
                    continue;
                };
                if neighbor.is_infected() {
                    continue;
                }

                // Disease enters through the face pointing back at the attacker
                let membrane = *neighbor.membrane(side.opposite());
                if round.attempt(&membrane, strength) {
                    neighbor.infect();
                    round.newly_infected += 1;
                    next.push(target);
                }
            }
        }

        if next.is_empty() {
            break;
        }
        std::mem::swap(&mut frontier, &mut next);
        round.path += 1;
    }

    tracing::debug!(
        "Infection at {} ({} from {}): {} attempts, {} newly infected, path {}",
        origin,
        strength,
        entry,
        round.attempts,
        round.newly_infected,
        round.path
    );

    round
}

impl Tissue<PopulationTracker> {
    /// Run an infection event and collect the resulting statistics
    pub fn infection_start(
        &mut self,
        origin: Coordinate,
        entry: Side,
        strength: AntibodyStrength,
    ) -> InfectionStats {
        let round = spread_infection(self, origin, entry, strength);
        InfectionStats::collect(self, &round)
    }
}
