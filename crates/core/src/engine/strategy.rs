//! Role strategies and the shared combat decision they all fall back to.
//! Each strategy only plans; the orchestrator applies the plan and keeps
//! the intra-turn simulation honest.

use super::*;
use crate::engine::damage::{damage, predicted_incoming};
use crate::engine::targeting::{ASSUMED_TARGET_PROTECTION, best_enemy_target, best_throw_cell};

mod bomber;
mod heavy;
mod scout;
mod sniper;

/// One movement/attack policy per role. `plan_move` may record the agent's
/// intended destination on the roster so teammates planned later this turn
/// route around it; the returned position is the single orthogonal step to
/// take now.
pub(crate) trait Strategy {
    fn name(&self) -> &'static str;
    fn phrases(&self) -> &'static [&'static str];
    fn plan_move(&self, arena: &mut Arena, agent: &Agent) -> Option<Pos>;
    fn plan_attack(&self, arena: &Arena, agent: &Agent) -> CombatAction {
        combat_decision(arena, agent)
    }
}

pub(crate) fn strategy_for(role: Role) -> &'static dyn Strategy {
    match role {
        Role::Heavy => &heavy::Heavy,
        Role::Sniper => &sniper::Sniper,
        Role::Scout => &scout::Scout,
    }
}

/// Role dispatch with one override: an agent still holding bombs while an
/// enemy bomb carrier is in the danger envelope plays bomb-priority instead
/// of its role, whatever that role is.
pub(crate) fn select_strategy(arena: &Arena, agent: &Agent) -> &'static dyn Strategy {
    if agent.splash_bombs > 0 && bomb_threat_nearby(arena, agent) {
        return &bomber::Bomber;
    }
    strategy_for(agent.role.unwrap_or(Role::Heavy))
}

/// An enemy with bombs left, close enough to reach us after one advance.
pub(crate) fn bomb_threat_nearby(arena: &Arena, agent: &Agent) -> bool {
    arena
        .enemy_agents()
        .any(|enemy| enemy.splash_bombs > 0 && manhattan(enemy.pos, agent.pos) <= THROW_RANGE + 4)
}

/// Spread-out radius for the planner: only worth paying while a bomb can
/// actually land on a cluster we are part of.
pub(crate) fn stay_away_radius(arena: &Arena, agent: &Agent) -> u32 {
    if bomb_threat_nearby(arena, agent) { STAY_AWAY_DISTANCE } else { 0 }
}

/// True when some enemy would take this agent's full soaking power,
/// cover included. Used to decide whether advancing is worth new exposure.
pub(crate) fn has_full_damage_target(arena: &Arena, agent: &Agent) -> bool {
    arena
        .enemy_agents()
        .any(|enemy| damage(arena, agent, enemy.pos, 0.0, false) == f64::from(agent.stats.soaking_power))
}

/// The combat half shared by every role: shoot the best target if the shot
/// is live and outscores the best throw, else throw if the throw scores
/// positive, else hunker down.
pub(crate) fn combat_decision(arena: &Arena, agent: &Agent) -> CombatAction {
    let throw_choice = if agent.splash_bombs > 0 { best_throw_cell(arena, agent) } else { None };
    let throw_score = throw_choice.map_or(-1.0, |(score, _)| score);

    let shoot_choice = best_enemy_target(arena, agent);
    let shoot_score = match shoot_choice {
        Some(target) if agent.cooldown == 0 => {
            let target_pos = arena.agents[&target].pos;
            damage(arena, agent, target_pos, ASSUMED_TARGET_PROTECTION, false)
        }
        _ => -1.0,
    };

    if shoot_score > throw_score && shoot_score > 0.0 {
        let target = shoot_choice.expect("positive shoot score implies a target");
        return CombatAction::Shoot(target);
    }
    if throw_score > 0.0 {
        let (_, cell) = throw_choice.expect("positive throw score implies a cell");
        return CombatAction::Throw(cell);
    }
    CombatAction::HunkerDown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::*;

    #[test]
    fn shoots_the_reachable_enemy_when_the_shot_is_live() {
        let mut arena = open_arena(12, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 0, x: 0 }, rifle_stats());
        let enemy = add_agent(&mut arena, 2, 1, Pos { y: 0, x: 3 }, rifle_stats());

        let agent = arena.agents[&id].clone();
        assert_eq!(combat_decision(&arena, &agent), CombatAction::Shoot(enemy));
    }

    #[test]
    fn cooldown_suppresses_shooting_entirely() {
        let mut arena = open_arena(12, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 0, x: 0 }, rifle_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 3 }, rifle_stats());
        arena.agents.get_mut(&id).unwrap().cooldown = 1;

        let agent = arena.agents[&id].clone();
        assert_eq!(combat_decision(&arena, &agent), CombatAction::HunkerDown);
    }

    #[test]
    fn big_throw_outscores_a_weak_long_shot() {
        let mut arena = open_arena(12, 5);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 2, x: 0 }, scout_stats());
        // A pair in splash formation at the edge of throw range; the scout's
        // own gun barely tickles at this distance.
        add_agent(&mut arena, 2, 1, Pos { y: 1, x: 4 }, rifle_stats());
        add_agent(&mut arena, 3, 1, Pos { y: 3, x: 4 }, rifle_stats());

        let agent = arena.agents[&id].clone();
        assert!(matches!(combat_decision(&arena, &agent), CombatAction::Throw(_)));
    }

    #[test]
    fn hunkers_when_no_attack_scores_positive() {
        let mut arena = open_arena(30, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 0, x: 0 }, rifle_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 25 }, rifle_stats());

        let agent = arena.agents[&id].clone();
        assert_eq!(combat_decision(&arena, &agent), CombatAction::HunkerDown);
    }

    #[test]
    fn bomb_carrier_near_an_enemy_carrier_switches_to_bomb_priority() {
        let mut arena = open_arena(14, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 0, x: 2 }, scout_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 8 }, scout_stats());
        arena.agents.get_mut(&id).unwrap().role = Some(Role::Scout);

        let agent = arena.agents[&id].clone();
        assert_eq!(select_strategy(&arena, &agent).name(), "Bomber");
    }

    #[test]
    fn spent_bombs_fall_back_to_the_role_strategy() {
        let mut arena = open_arena(14, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 0, x: 2 }, scout_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 8 }, scout_stats());
        {
            let agent = arena.agents.get_mut(&id).unwrap();
            agent.role = Some(Role::Scout);
            agent.splash_bombs = 0;
        }

        let agent = arena.agents[&id].clone();
        assert_eq!(select_strategy(&arena, &agent).name(), "Scout");
    }

    #[test]
    fn distant_enemy_carriers_do_not_trigger_the_override() {
        let mut arena = open_arena(30, 3);
        let id = add_agent(&mut arena, 1, 0, Pos { y: 0, x: 0 }, scout_stats());
        add_agent(&mut arena, 2, 1, Pos { y: 0, x: 20 }, scout_stats());
        arena.agents.get_mut(&id).unwrap().role = Some(Role::Scout);

        let agent = arena.agents[&id].clone();
        assert!(!bomb_threat_nearby(&arena, &agent));
        assert_eq!(select_strategy(&arena, &agent).name(), "Scout");
    }
}
