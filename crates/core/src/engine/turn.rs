//! Turn lifecycle: fold the referee snapshot into the arena, then plan one
//! command per controlled agent while simulating each decision forward so
//! later agents see the consequences of earlier ones.

use std::collections::BTreeSet;
use std::hash::Hasher;

use super::*;
use crate::engine::damage::damage;
use crate::engine::influence::compute_influence;
use crate::engine::messages::flavor_message;
use crate::engine::strategy::select_strategy;
use crate::engine::targeting::ASSUMED_TARGET_PROTECTION;
use crate::snapshot::TurnSnapshot;

impl Engine {
    /// Folds one authoritative snapshot into the arena. Unknown ids are
    /// skipped; roster agents missing from the snapshot are dead and dropped.
    pub fn begin_turn(&mut self, snapshot: &TurnSnapshot) {
        self.turn += 1;
        self.arena.thrown_bombs.clear();

        let mut seen = BTreeSet::new();
        for update in &snapshot.agents {
            let Some(agent) = self.arena.agents.get_mut(&update.id) else {
                continue;
            };
            seen.insert(update.id);
            agent.pos = Pos { y: update.y, x: update.x };
            agent.cooldown = update.cooldown;
            agent.splash_bombs = update.splash_bombs;
            agent.wetness = f64::from(update.wetness);
            agent.desired_pos = None;
            if agent.spawn_pos.is_none() {
                agent.spawn_pos = Some(agent.pos);
            }
        }

        let dropped: Vec<AgentId> =
            self.arena.agents.keys().copied().filter(|id| !seen.contains(id)).collect();
        for id in dropped {
            self.arena.agents.remove(&id);
            self.log.push(LogEvent::AgentDropped { agent: id });
        }

        self.arena.influence = compute_influence(&self.arena);
        self.assign_roles();
    }

    /// Plans one command per controlled agent, in id order. Movement and
    /// attacks are simulated into the arena as they are decided, and every
    /// command is folded into the running decision hash.
    pub fn plan_turn(&mut self) -> Vec<AgentCommand> {
        let mut commands = Vec::new();
        for id in self.arena.my_agent_ids() {
            let agent = self.arena.agents[&id].clone();
            let strategy = select_strategy(&self.arena, &agent);

            let movement = strategy.plan_move(&mut self.arena, &agent);
            if let Some(step) = movement {
                debug_assert_eq!(manhattan(step, agent.pos), 1, "plan_move must step once");
                self.arena.agents.get_mut(&id).expect("planning agent should exist").pos = step;
            }

            // Re-read after the move so the attack fires from the new cell.
            let agent = self.arena.agents[&id].clone();
            let combat = strategy.plan_attack(&self.arena, &agent);
            match combat {
                CombatAction::Shoot(victim) => self.simulate_shot(&agent, victim),
                CombatAction::Throw(cell) => self.simulate_throw(cell),
                CombatAction::HunkerDown => {}
            }

            let roster = self.arena.agents.get_mut(&id).expect("planning agent should exist");
            let message = flavor_message(&mut self.rng, strategy.name(), strategy.phrases(), roster);

            let command = AgentCommand { agent: id, movement, combat, message };
            self.absorb_command(&command);
            commands.push(command);
        }
        commands
    }

    fn simulate_shot(&mut self, shooter: &Agent, victim_id: AgentId) {
        let Some(victim_pos) = self.arena.agents.get(&victim_id).map(|victim| victim.pos) else {
            return;
        };
        let dealt = damage(&self.arena, shooter, victim_pos, ASSUMED_TARGET_PROTECTION, false);
        if let Some(victim) = self.arena.agents.get_mut(&victim_id) {
            victim.wetness += dealt;
        }
    }

    fn simulate_throw(&mut self, cell: Pos) {
        self.arena.thrown_bombs.push(cell);
        self.log.push(LogEvent::BombZoneMarked { cell });
        for affected in self.arena.agents.values_mut() {
            if splash_hits(cell, affected.pos) {
                affected.wetness += BOMB_DAMAGE;
            }
        }
    }

    fn absorb_command(&mut self, command: &AgentCommand) {
        self.hasher.write_u64(self.turn);
        self.hasher.write_u32(command.agent.0);
        match command.movement {
            Some(step) => {
                self.hasher.write_u8(1);
                self.hasher.write_i32(step.y);
                self.hasher.write_i32(step.x);
            }
            None => self.hasher.write_u8(0),
        }
        match command.combat {
            CombatAction::Shoot(target) => {
                self.hasher.write_u8(1);
                self.hasher.write_u32(target.0);
            }
            CombatAction::Throw(cell) => {
                self.hasher.write_u8(2);
                self.hasher.write_i32(cell.y);
                self.hasher.write_i32(cell.x);
            }
            CombatAction::HunkerDown => self.hasher.write_u8(3),
        }
        self.hasher.write(command.message.as_bytes());
    }
}
