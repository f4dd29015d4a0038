//! Danger-tiered movement planning.
//! Rebuilds an ephemeral tier grid per call and returns only the next
//! orthogonal step; the full path is recomputed fresh every turn.

use std::collections::{BTreeMap, BTreeSet};

use super::*;

/// Cost multiplier that makes accumulated danger dominate path length while
/// still breaking danger ties by fewer steps.
const DANGER_WEIGHT: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    cost: u32,
    y: i32,
    x: i32,
}

/// Ephemeral per-call danger rating, one tier in [0, 29] per cell.
/// Tier 29 cells are treated as impassable by the step search.
pub(crate) struct TierGrid {
    width: usize,
    tiers: Vec<u8>,
}

impl TierGrid {
    fn zeroed(width: i32, height: i32) -> Self {
        Self { width: width as usize, tiers: vec![0; (width * height) as usize] }
    }

    pub(crate) fn tier_at(&self, pos: Pos) -> u8 {
        self.tiers[(pos.y as usize) * self.width + pos.x as usize]
    }

    fn set(&mut self, pos: Pos, tier: u8) {
        self.tiers[(pos.y as usize) * self.width + pos.x as usize] = tier;
    }

    fn raise(&mut self, pos: Pos, penalty: u32) {
        let idx = (pos.y as usize) * self.width + pos.x as usize;
        let raised = u32::from(self.tiers[idx]) + penalty;
        self.tiers[idx] = raised.min(u32::from(MAX_TIER)) as u8;
    }
}

/// Builds the danger tiers for one planning call: cover cells are walls,
/// clustered teammates repel with a linearly decaying penalty, and this
/// turn's bomb splash zones are certain danger.
pub(crate) fn build_tier_grid(
    arena: &Arena,
    planner: &Agent,
    start: Pos,
    stay_away: u32,
) -> TierGrid {
    let mut grid = TierGrid::zeroed(arena.grid.width(), arena.grid.height());

    for cell in arena.grid.cells() {
        if arena.grid.cover_at(cell).is_cover() {
            grid.set(cell, MAX_TIER);
        }
    }

    let radius = stay_away as i32;
    for ally in arena.agents.values() {
        if ally.id == planner.id || ally.player != planner.player {
            continue;
        }
        // A teammate standing (or intending to stand) right next to the
        // start must not be walked into.
        if manhattan(ally.pos, start) <= 1 {
            grid.set(ally.pos, MAX_TIER);
        }
        if let Some(desired) = ally.desired_pos
            && arena.grid.within(desired)
            && manhattan(desired, start) <= 1
        {
            grid.set(desired, MAX_TIER);
        }
        if stay_away == 0 {
            continue;
        }
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let cell = Pos { y: ally.pos.y + dy, x: ally.pos.x + dx };
                if !arena.grid.within(cell) {
                    continue;
                }
                grid.raise(cell, 2 * stay_away + 1 - manhattan(cell, ally.pos));
            }
        }
    }

    for &bomb in &arena.thrown_bombs {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let cell = Pos { y: bomb.y + dy, x: bomb.x + dx };
                if arena.grid.within(cell) {
                    grid.set(cell, MAX_TIER);
                }
            }
        }
    }

    grid
}

/// One danger-aware step from `start` toward `dest`: a tier-weighted
/// shortest-path search over the whole grid, returning the first step of the
/// best path. When `dest` is unreachable (or out of bounds entirely), the
/// step heads for the reachable cell closest to it. `None` means stay put.
pub(crate) fn next_step(
    arena: &Arena,
    planner: &Agent,
    start: Pos,
    dest: Pos,
    stay_away: u32,
) -> Option<Pos> {
    if !arena.grid.within(start) || start == dest {
        return None;
    }
    let tiers = build_tier_grid(arena, planner, start, stay_away);

    let mut open_set = BTreeSet::new();
    let mut open_entries: BTreeMap<Pos, OpenNode> = BTreeMap::new();
    let mut g_score: BTreeMap<Pos, u32> = BTreeMap::new();
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();

    let start_node = OpenNode { cost: 0, y: start.y, x: start.x };
    open_set.insert(start_node);
    open_entries.insert(start, start_node);
    g_score.insert(start, 0);

    while let Some(node) = open_set.pop_first() {
        let current = Pos { y: node.y, x: node.x };
        open_entries.remove(&current);
        if current == dest {
            break;
        }
        let current_g = node.cost;

        for neighbor in neighbors(current) {
            if !arena.grid.within(neighbor) || tiers.tier_at(neighbor) == MAX_TIER {
                continue;
            }
            let step_cost = 1 + DANGER_WEIGHT * u32::from(tiers.tier_at(neighbor));
            let tentative = current_g.saturating_add(step_cost);
            if tentative >= g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                continue;
            }
            if let Some(existing) = open_entries.remove(&neighbor) {
                open_set.remove(&existing);
            }
            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative);
            let next_node = OpenNode { cost: tentative, y: neighbor.y, x: neighbor.x };
            open_set.insert(next_node);
            open_entries.insert(neighbor, next_node);
        }
    }

    let target = if came_from.contains_key(&dest) {
        dest
    } else {
        // Unreachable goal: settle for the discovered cell nearest to it.
        came_from
            .keys()
            .min_by_key(|cell| (manhattan(**cell, dest), cell.y, cell.x))
            .copied()?
    };

    first_step_back(&came_from, start, target)
}

fn first_step_back(came_from: &BTreeMap<Pos, Pos>, start: Pos, target: Pos) -> Option<Pos> {
    let mut current = target;
    loop {
        let prev = *came_from.get(&current)?;
        if prev == start {
            return Some(current);
        }
        current = prev;
    }
}
