//! Shared fixtures for the engine submodule test suites.
//! This module exists to avoid repeating arena and roster setup across tests.

use super::*;
use crate::state::AgentStats;

pub(super) fn open_arena(width: usize, height: usize) -> Arena {
    Arena::new(Grid::open(width, height), PlayerId(0))
}

pub(super) fn rifle_stats() -> AgentStats {
    AgentStats { shoot_cooldown: 1, optimal_range: 4, soaking_power: 16, max_splash_bombs: 0 }
}

pub(super) fn sniper_stats() -> AgentStats {
    AgentStats { shoot_cooldown: 5, optimal_range: 6, soaking_power: 32, max_splash_bombs: 0 }
}

pub(super) fn scout_stats() -> AgentStats {
    AgentStats { shoot_cooldown: 2, optimal_range: 2, soaking_power: 8, max_splash_bombs: 2 }
}

pub(super) fn add_agent(
    arena: &mut Arena,
    id: u32,
    player: u32,
    pos: Pos,
    stats: AgentStats,
) -> AgentId {
    let agent_id = AgentId(id);
    let agent = Agent {
        id: agent_id,
        player: PlayerId(player),
        stats,
        pos,
        cooldown: 0,
        splash_bombs: stats.max_splash_bombs,
        wetness: 0.0,
        spawn_pos: Some(pos),
        desired_pos: None,
        role: None,
        phrase_cursor: None,
    };
    arena.agents.insert(agent_id, agent);
    agent_id
}
