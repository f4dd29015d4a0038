//! Territorial influence heuristic.
//! Each cell is credited to whichever side has the nearer living agent;
//! badly soaked agents count as twice as far away.

use super::*;

pub(crate) fn compute_influence(arena: &Arena) -> i32 {
    let mut influence = 0;
    for cell in arena.grid.cells() {
        let mine = nearest_effective_distance(arena.my_agents(), cell);
        let theirs = nearest_effective_distance(arena.enemy_agents(), cell);
        if mine < theirs {
            influence += 1;
        }
        if mine > theirs {
            influence -= 1;
        }
    }
    influence
}

fn nearest_effective_distance<'a>(agents: impl Iterator<Item = &'a Agent>, cell: Pos) -> u64 {
    let mut nearest = u64::MAX;
    for agent in agents {
        let mut distance = u64::from(manhattan(agent.pos, cell));
        if agent.wetness >= 50.0 {
            distance *= 2;
        }
        nearest = nearest.min(distance);
    }
    nearest
}
