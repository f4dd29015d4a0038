//! Per-turn decision engine: threat and cover math, danger-aware pathing,
//! role strategies, and the orchestrator that keeps one turn's decisions
//! mutually consistent. This file wires the focused submodules together.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use xxhash_rust::xxh3::Xxh3;

use crate::snapshot::MatchSetup;
use crate::state::{Agent, Arena, Grid};
use crate::types::*;

mod damage;
mod influence;
mod messages;
mod pathing;
mod roles;
mod strategy;
mod targeting;
mod turn;

#[cfg(test)]
mod test_support;

pub(crate) const BOMB_DAMAGE: f64 = 30.0;
pub(crate) const BOMB_USAGE_PENALTY: f64 = -0.7;
// Off-center hits may be dodged; worth a third less per cell of offset.
pub(crate) const THROW_GLANCING_HIT_PENALTY: f64 = 0.35;
pub(crate) const THROW_FRIENDLY_FIRE_PENALTY: f64 = -2.0;
pub(crate) const THROW_RANGE: u32 = 4;
pub(crate) const STAY_AWAY_DISTANCE: u32 = 2;
pub(crate) const MAX_TIER: u8 = 29;

/// True when `pos` sits inside the 3x3 splash footprint centered on `center`.
pub(crate) fn splash_hits(center: Pos, pos: Pos) -> bool {
    chebyshev(center, pos) <= 1
}

/// The turn orchestrator. Owns the arena, the decision log, and the one
/// pseudorandom source used for flavor variety.
pub struct Engine {
    turn: u64,
    rng: ChaCha8Rng,
    arena: Arena,
    log: Vec<LogEvent>,
    hasher: Xxh3,
}

impl Engine {
    pub fn new(seed: u64, setup: &MatchSetup) -> Result<Self, SetupError> {
        let mut covers = Vec::with_capacity(setup.covers.len());
        for &raw in &setup.covers {
            let cover = Cover::from_raw(raw).ok_or(SetupError::CoverOutOfRange { value: raw })?;
            covers.push(cover);
        }
        let grid = Grid::new(setup.width, setup.height, covers)?;

        let mut arena = Arena::new(grid, setup.my_id);
        for spec in &setup.agents {
            arena.agents.insert(spec.id, Agent::from_spec(spec));
        }

        let mut hasher = Xxh3::new();
        {
            use std::hash::Hasher;
            hasher.write_u64(seed);
        }

        Ok(Self { turn: 0, rng: ChaCha8Rng::seed_from_u64(seed), arena, log: Vec::new(), hasher })
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Running digest of every command emitted so far. Two engines fed the
    /// same seed and snapshots end up with the same hash.
    pub fn decision_hash(&self) -> u64 {
        use std::hash::Hasher;
        self.hasher.clone().finish()
    }
}
