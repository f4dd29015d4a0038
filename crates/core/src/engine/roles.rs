//! Stat-driven role assignment. Roles are re-derived every turn from the
//! fixed stat cascade; only actual transitions reach the decision log.

use super::*;
use crate::state::AgentStats;

/// The cascade is ordered: a later rule overrides an earlier one, so an
/// agent with soaking power 32 and range 2 lands on Heavy even though no
/// single rule names that loadout alone. Unmatched stats keep the prior
/// role, or default to Heavy for a fresh agent.
pub(crate) fn role_for_stats(stats: &AgentStats, prior: Option<Role>) -> Role {
    let mut role = prior.unwrap_or(Role::Heavy);
    if stats.soaking_power == 16 {
        role = Role::Heavy;
    }
    if stats.optimal_range == 6 {
        role = Role::Sniper;
    }
    if stats.soaking_power == 32 && stats.optimal_range == 2 {
        role = Role::Heavy;
    }
    if stats.soaking_power == 8 {
        role = Role::Scout;
    }
    role
}

impl Engine {
    pub(crate) fn assign_roles(&mut self) {
        for id in self.arena.my_agent_ids() {
            let agent = self.arena.agents.get_mut(&id).expect("roster id should exist");
            let role = role_for_stats(&agent.stats, agent.role);
            if agent.assign_role(role) {
                self.log.push(LogEvent::RoleAssigned { agent: id, role });
            }
        }
    }
}
