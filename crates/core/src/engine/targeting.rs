//! Target selection: who to shoot and where to throw.
//! Both searches degrade to `None` when there is nothing worth attacking.

use super::*;
use crate::engine::damage::damage;
use crate::state::MAX_WETNESS;

/// Shots-to-kill stand-in when the shot cannot deal damage at all.
const SHOTS_TO_KILL_UNBOUNDED: f64 = 1_000_000.0;

/// Flat protection bonus assumed for every target: enemies tend to hunker or
/// reposition, so raw damage numbers are discounted before ranking.
pub(crate) const ASSUMED_TARGET_PROTECTION: f64 = 0.25;

/// The enemy worth shooting most: highest value per shot still needed to
/// eliminate it. `None` only when no enemy is alive.
pub(crate) fn best_enemy_target(arena: &Arena, shooter: &Agent) -> Option<AgentId> {
    let mut best: Option<(f64, AgentId)> = None;
    for enemy in arena.enemy_agents() {
        let score = kill_priority(arena, shooter, enemy);
        // Ties go to the later roster entry, keeping the pick stable.
        if best.is_none_or(|(best_score, _)| score >= best_score) {
            best = Some((score, enemy.id));
        }
    }
    best.map(|(_, id)| id)
}

fn kill_priority(arena: &Arena, shooter: &Agent, enemy: &Agent) -> f64 {
    if enemy.wetness >= MAX_WETNESS {
        return 0.0;
    }
    let per_shot = damage(arena, shooter, enemy.pos, ASSUMED_TARGET_PROTECTION, false);
    let shots_to_kill = if per_shot > 0.0 {
        ((MAX_WETNESS - enemy.wetness) / per_shot).ceil()
    } else {
        SHOTS_TO_KILL_UNBOUNDED
    };
    enemy.value() / shots_to_kill
}

/// Exhaustively score every cell within throw range. The weight starts at a
/// fixed usage penalty, then every agent inside the 3x3 footprint adds splash
/// damage discounted for off-center hits, negated hard for friendlies, and
/// scaled by target value. `None` when nothing scores positive.
pub(crate) fn best_throw_cell(arena: &Arena, thrower: &Agent) -> Option<(f64, Pos)> {
    let mut best: Option<(f64, Pos)> = None;
    for cell in arena.grid.cells() {
        if manhattan(cell, thrower.pos) > THROW_RANGE {
            continue;
        }
        let weight = throw_weight(arena, thrower, cell);
        if best.is_none_or(|(best_weight, _)| weight > best_weight) {
            best = Some((weight, cell));
        }
    }
    best.filter(|&(weight, _)| weight > 0.0)
}

fn throw_weight(arena: &Arena, thrower: &Agent, cell: Pos) -> f64 {
    let mut weight = BOMB_DAMAGE * BOMB_USAGE_PENALTY;
    for affected in arena.agents.values() {
        if !splash_hits(cell, affected.pos) {
            continue;
        }
        let mut coeff =
            1.0 - THROW_GLANCING_HIT_PENALTY * f64::from(manhattan(affected.pos, cell));
        if affected.player == thrower.player {
            coeff *= THROW_FRIENDLY_FIRE_PENALTY;
        }
        weight += coeff * BOMB_DAMAGE * affected.value();
    }
    weight
}
