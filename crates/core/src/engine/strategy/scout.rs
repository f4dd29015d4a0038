//! The runner: too light to trade fire, so it spends its bombs up close,
//! baits enemy bombs away from the line, and finally raids the far edge.

use super::*;
use crate::engine::pathing::next_step;

pub(super) struct Scout;

const PHRASES: &[&str] = &[
    "Can't catch me!",
    "Too slow!",
    "See you on the other side!",
    "Just passing through!",
    "Catch me if you can!",
    "Your backyard now!",
    "Zoom zoom!",
    "Was I ever here?",
];

impl Strategy for Scout {
    fn name(&self) -> &'static str {
        "Scout"
    }

    fn phrases(&self) -> &'static [&'static str] {
        PHRASES
    }

    fn plan_move(&self, arena: &mut Arena, agent: &Agent) -> Option<Pos> {
        let enemy_bombs_left = arena.enemy_agents().map(|enemy| enemy.splash_bombs).max()?;

        let goal = if agent.splash_bombs > 0 {
            let strongest = arena
                .enemy_agents()
                .max_by(|a, b| {
                    a.value().partial_cmp(&b.value()).unwrap_or(std::cmp::Ordering::Equal)
                })
                .expect("a living enemy was just observed");
            if manhattan(strongest.pos, agent.pos) <= 2 {
                return None;
            }
            strongest.pos
        } else if enemy_bombs_left > 0 {
            // Bait duty: stay loud and visible so the bombs chase the Scout.
            if let Some(roster) = arena.agents.get_mut(&agent.id) {
                roster.phrase_cursor = Some(0);
            }
            let middle = arena.grid.middle();
            arena
                .enemy_agents()
                .min_by_key(|enemy| (manhattan(enemy.pos, middle), enemy.id))
                .expect("a living enemy was just observed")
                .pos
        } else {
            let far_x = if agent.spawn().x == 0 { arena.grid.width() - 1 } else { 0 };
            Pos { y: agent.pos.y, x: far_x }
        };

        next_step(arena, agent, agent.pos, goal, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::*;

    #[test]
    fn with_bombs_closes_on_the_strongest_enemy() {
        let mut arena = open_arena(12, 5);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 2, x: 0 }, scout_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 8 }, scout_stats());
        let strong = add_agent(&mut arena, 3, 1, Pos { y: 4, x: 8 }, sniper_stats());

        let agent = arena.agents[&id].clone();
        let step = Scout.plan_move(&mut arena, &agent).expect("the scout closes in");
        let before = manhattan(agent.pos, arena.agents[&strong].pos);
        let after = manhattan(step, arena.agents[&strong].pos);
        assert!(after < before, "the step must approach the sniper, not the fellow scout");
    }

    #[test]
    fn with_bombs_holds_at_close_range() {
        let mut arena = open_arena(12, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 1, x: 4 }, scout_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 1, x: 6 }, sniper_stats());

        let agent = arena.agents[&id].clone();
        assert_eq!(Scout.plan_move(&mut arena, &agent), None, "distance 2 is close enough");
    }

    #[test]
    fn spent_scout_baits_enemy_bombs_and_pins_its_phrase() {
        let mut arena = open_arena(13, 5);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 2, x: 0 }, scout_stats());
        arena.agents.get_mut(&id).unwrap().splash_bombs = 0;
        arena.agents.get_mut(&id).unwrap().phrase_cursor = Some(4);
        let central = add_agent(&mut arena, 2, 1, Pos { y: 2, x: 7 }, scout_stats());
        add_agent(&mut arena, 3, 1, Pos { y: 0, x: 12 }, scout_stats());

        let agent = arena.agents[&id].clone();
        let step = Scout.plan_move(&mut arena, &agent).expect("bait duty still moves");
        assert!(manhattan(step, arena.agents[&central].pos) < manhattan(agent.pos, arena.agents[&central].pos));
        assert_eq!(arena.agents[&id].phrase_cursor, Some(0), "bait duty pins the first phrase");
    }

    #[test]
    fn all_bombs_spent_everywhere_sends_the_scout_raiding() {
        let mut arena = open_arena(10, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 1, x: 0 }, scout_stats());
        {
            let scout = arena.agents.get_mut(&id).unwrap();
            scout.splash_bombs = 0;
            scout.pos = Pos { y: 1, x: 2 };
        }
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 5 }, rifle_stats());

        let agent = arena.agents[&id].clone();
        let step = Scout.plan_move(&mut arena, &agent).expect("the raid heads for the far edge");
        // Spawned at x=0, so the run goes right along the current row.
        assert_eq!(step, Pos { y: 1, x: 3 });
    }

    #[test]
    fn no_living_enemies_means_no_movement() {
        let mut arena = open_arena(8, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 1, x: 2 }, scout_stats());
        let agent = arena.agents[&id].clone();
        assert_eq!(Scout.plan_move(&mut arena, &agent), None);
    }
}
