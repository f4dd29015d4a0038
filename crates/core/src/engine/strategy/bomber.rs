//! Bomb-priority play: while bombs remain and enemy carriers are close,
//! movement serves the throw and nothing else.

use super::*;
use crate::engine::pathing::next_step;

pub(super) struct Bomber;

const PHRASES: &[&str] = &[
    "Incoming!",
    "Fire in the hole!",
    "Special delivery!",
    "Heads up!",
    "This one's got your name on it!",
    "Cover your ears!",
    "Bombs away!",
];

impl Strategy for Bomber {
    fn name(&self) -> &'static str {
        "Bomber"
    }

    fn phrases(&self) -> &'static [&'static str] {
        PHRASES
    }

    fn plan_move(&self, arena: &mut Arena, agent: &Agent) -> Option<Pos> {
        let closest = arena
            .enemy_agents()
            .min_by_key(|enemy| (manhattan(enemy.pos, agent.pos), enemy.id))?;
        if manhattan(closest.pos, agent.pos) <= THROW_RANGE {
            return None;
        }
        // Trade bombs for bombs: walk at whoever still carries the most.
        let carrier = arena
            .enemy_agents()
            .max_by_key(|enemy| (enemy.splash_bombs, enemy.id))
            .expect("a living enemy was just observed");
        let goal = carrier.pos;
        let radius = stay_away_radius(arena, agent);
        next_step(arena, agent, agent.pos, goal, radius)
    }
}
