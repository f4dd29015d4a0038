//! The line infantry: pushes the front toward the enemy backfield and
//! hunkers once badly soaked but safe.

use super::*;
use crate::engine::pathing::next_step;

pub(super) struct Heavy;

const PHRASES: &[&str] = &[
    "Nobody moves me!",
    "I am the wall!",
    "Front line is mine!",
    "Push, push, push!",
    "You call that soaking?",
    "Still standing!",
    "Come closer, little ones!",
    "This ground is taken!",
];

impl Strategy for Heavy {
    fn name(&self) -> &'static str {
        "Heavy"
    }

    fn phrases(&self) -> &'static [&'static str] {
        PHRASES
    }

    fn plan_move(&self, arena: &mut Arena, agent: &Agent) -> Option<Pos> {
        if scout_has_the_lead(arena, agent) {
            return None;
        }
        let safe = predicted_incoming(arena, agent.pos, ASSUMED_TARGET_PROTECTION) == 0.0;
        let advance = agent.pos.x.abs_diff(agent.spawn().x);
        if safe
            && (agent.wetness > 75.0
                || (arena.influence > 0 && advance >= arena.grid.width() as u32 / 2))
        {
            return None;
        }

        let backmost = arena
            .enemy_agents()
            .max_by_key(|enemy| (enemy.pos.x.abs_diff(agent.spawn().x), enemy.id))?;
        // One column past the backmost enemy, toward the far side.
        let shift = if agent.spawn().x == 0 { 1 } else { -1 };
        let push_target = Pos { y: backmost.pos.y, x: backmost.pos.x + shift };
        if push_target == agent.pos {
            return None;
        }
        if let Some(roster) = arena.agents.get_mut(&agent.id) {
            roster.desired_pos = Some(push_target);
        }

        let radius = stay_away_radius(arena, agent);
        let step = next_step(arena, agent, agent.pos, push_target, radius)?;
        // Already landing full hits: refuse a step that soaks up more fire.
        if has_full_damage_target(arena, agent)
            && predicted_incoming(arena, agent.pos, ASSUMED_TARGET_PROTECTION)
                < predicted_incoming(arena, step, ASSUMED_TARGET_PROTECTION)
        {
            return None;
        }
        Some(step)
    }

    fn plan_attack(&self, arena: &Arena, agent: &Agent) -> CombatAction {
        if agent.wetness >= 75.0
            && predicted_incoming(arena, agent.pos, ASSUMED_TARGET_PROTECTION) == 0.0
        {
            return CombatAction::HunkerDown;
        }
        combat_decision(arena, agent)
    }
}

/// While a teammate Scout has slipped deep into enemy ground, the slower
/// roles stop advancing so the bombs chase the Scout, not the line.
pub(super) fn scout_has_the_lead(arena: &Arena, agent: &Agent) -> bool {
    let has_scout = arena.my_agents().any(|ally| ally.role == Some(Role::Scout));
    has_scout && agent.pos.x.abs_diff(agent.spawn().x) > arena.grid.width() as u32 / 3
}
