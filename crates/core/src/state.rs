use std::collections::BTreeMap;

use crate::snapshot::AgentSpec;
use crate::types::*;

/// Wetness threshold at which an agent is eliminated.
pub const MAX_WETNESS: f64 = 100.0;

/// Static per-cell cover classification. Immutable for the whole match.
#[derive(Clone, Debug)]
pub struct Grid {
    internal_width: usize,
    internal_height: usize,
    covers: Vec<Cover>,
}

impl Grid {
    pub fn new(width: usize, height: usize, covers: Vec<Cover>) -> Result<Self, SetupError> {
        if width == 0 || height == 0 {
            return Err(SetupError::EmptyGrid);
        }
        if covers.len() != width * height {
            return Err(SetupError::CoverCountMismatch {
                expected: width * height,
                actual: covers.len(),
            });
        }
        Ok(Self { internal_width: width, internal_height: height, covers })
    }

    /// A grid of the given size with no cover anywhere.
    pub fn open(width: usize, height: usize) -> Self {
        Self { internal_width: width, internal_height: height, covers: vec![Cover::Open; width * height] }
    }

    pub fn width(&self) -> i32 {
        self.internal_width as i32
    }

    pub fn height(&self) -> i32 {
        self.internal_height as i32
    }

    pub fn within(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.internal_width
            && (pos.y as usize) < self.internal_height
    }

    /// Cover level of an in-bounds cell. Callers must check `within` first;
    /// out-of-bounds access is a caller bug, not a clampable condition.
    pub fn cover_at(&self, pos: Pos) -> Cover {
        assert!(self.within(pos), "cover_at out of bounds: {pos:?}");
        self.covers[(pos.y as usize) * self.internal_width + pos.x as usize]
    }

    pub fn set_cover(&mut self, pos: Pos, cover: Cover) {
        assert!(self.within(pos), "set_cover out of bounds: {pos:?}");
        let idx = (pos.y as usize) * self.internal_width + pos.x as usize;
        self.covers[idx] = cover;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.internal_width as i32;
        let height = self.internal_height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    pub fn middle(&self) -> Pos {
        Pos { y: self.height() / 2, x: self.width() / 2 }
    }
}

/// Base stats, fixed at spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentStats {
    pub shoot_cooldown: u32,
    pub optimal_range: u32,
    pub soaking_power: u32,
    pub max_splash_bombs: u32,
}

#[derive(Clone, Debug)]
pub struct Agent {
    pub id: AgentId,
    pub player: PlayerId,
    pub stats: AgentStats,
    pub pos: Pos,
    pub cooldown: u32,
    pub splash_bombs: u32,
    /// Cumulative damage, 0..100. Only ever grows within a turn's simulated
    /// exchanges; ground truth overwrites it at the next snapshot.
    pub wetness: f64,
    /// First observed position; unknown until the first turn snapshot.
    pub spawn_pos: Option<Pos>,
    /// Where this agent intends to end up, visible to teammates planned later
    /// in the same turn. Cleared on every snapshot.
    pub desired_pos: Option<Pos>,
    pub role: Option<Role>,
    pub phrase_cursor: Option<usize>,
}

impl Agent {
    pub fn from_spec(spec: &AgentSpec) -> Self {
        Self {
            id: spec.id,
            player: spec.player,
            stats: AgentStats {
                shoot_cooldown: spec.shoot_cooldown,
                optimal_range: spec.optimal_range,
                soaking_power: spec.soaking_power,
                max_splash_bombs: spec.splash_bombs,
            },
            pos: Pos { y: -1, x: -1 },
            cooldown: 0,
            splash_bombs: spec.splash_bombs,
            wetness: 0.0,
            spawn_pos: None,
            desired_pos: None,
            role: None,
            phrase_cursor: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.wetness < MAX_WETNESS
    }

    pub fn spawn(&self) -> Pos {
        self.spawn_pos.unwrap_or(self.pos)
    }

    /// Throughput proxy used to rank targets: damage per cooldown slot,
    /// scaled by the cube root of reach.
    pub fn value(&self) -> f64 {
        f64::from(self.stats.soaking_power) / f64::from(self.stats.shoot_cooldown + 1)
            * f64::from(self.stats.optimal_range).cbrt()
    }

    /// The one sanctioned way to change an agent's role. Resets the flavor
    /// phrase cursor on an actual transition and reports whether one happened.
    pub fn assign_role(&mut self, role: Role) -> bool {
        if self.role == Some(role) {
            return false;
        }
        self.role = Some(role);
        self.phrase_cursor = None;
        true
    }
}

/// Full world state for one turn: the static grid plus the live roster and
/// the intra-turn scratch the strategies share.
pub struct Arena {
    pub my_id: PlayerId,
    pub grid: Grid,
    pub agents: BTreeMap<AgentId, Agent>,
    /// Territorial control heuristic, positive when we hold more cells.
    pub influence: i32,
    /// Bomb targets already resolved this turn; their splash zones are
    /// certain danger for agents planned afterwards.
    pub thrown_bombs: Vec<Pos>,
}

impl Arena {
    pub fn new(grid: Grid, my_id: PlayerId) -> Self {
        Self { my_id, grid, agents: BTreeMap::new(), influence: 0, thrown_bombs: Vec::new() }
    }

    pub fn my_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values().filter(move |agent| agent.player == self.my_id)
    }

    pub fn enemy_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values().filter(move |agent| agent.player != self.my_id)
    }

    pub fn my_agent_ids(&self) -> Vec<AgentId> {
        self.my_agents().map(|agent| agent.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::AgentSpec;

    fn spec(id: u32, soak: u32, range: u32, cooldown: u32) -> AgentSpec {
        AgentSpec {
            id: AgentId(id),
            player: PlayerId(0),
            shoot_cooldown: cooldown,
            optimal_range: range,
            soaking_power: soak,
            splash_bombs: 1,
        }
    }

    #[test]
    fn grid_rejects_degenerate_setups() {
        assert_eq!(Grid::new(0, 4, Vec::new()).unwrap_err(), SetupError::EmptyGrid);
        let err = Grid::new(3, 2, vec![Cover::Open; 5]).unwrap_err();
        assert_eq!(err, SetupError::CoverCountMismatch { expected: 6, actual: 5 });
    }

    #[test]
    fn within_rejects_negative_and_past_edge_positions() {
        let grid = Grid::open(4, 3);
        assert!(grid.within(Pos { y: 0, x: 0 }));
        assert!(grid.within(Pos { y: 2, x: 3 }));
        assert!(!grid.within(Pos { y: -1, x: 0 }));
        assert!(!grid.within(Pos { y: 0, x: 4 }));
        assert!(!grid.within(Pos { y: 3, x: 0 }));
    }

    #[test]
    fn agent_value_rewards_throughput_and_reach() {
        let sniper = Agent::from_spec(&spec(1, 32, 6, 5));
        let scout = Agent::from_spec(&spec(2, 8, 2, 2));
        assert!(sniper.value() > scout.value());
    }

    #[test]
    fn role_transition_resets_phrase_cursor_only_on_change() {
        let mut agent = Agent::from_spec(&spec(1, 16, 4, 1));
        agent.phrase_cursor = Some(3);
        assert!(agent.assign_role(Role::Heavy));
        assert_eq!(agent.phrase_cursor, None);

        agent.phrase_cursor = Some(2);
        assert!(!agent.assign_role(Role::Heavy));
        assert_eq!(agent.phrase_cursor, Some(2), "re-assigning the same role must not reset");

        assert!(agent.assign_role(Role::Scout));
        assert_eq!(agent.phrase_cursor, None);
    }
}
