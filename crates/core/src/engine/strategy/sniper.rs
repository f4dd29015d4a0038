//! The overwatch role: long reach, slow trigger. Finds a shielded cell near
//! the board center on its own half and settles in.

use super::*;
use crate::engine::pathing::next_step;
use crate::engine::strategy::heavy::scout_has_the_lead;

pub(super) struct Sniper;

const PHRASES: &[&str] = &[
    "Steady... steady...",
    "One shot is all I need.",
    "Wind's just right.",
    "Got you in my sights.",
    "Patience pays.",
    "From here I see everything.",
    "Another one dried off.",
    "Don't mind me.",
];

impl Strategy for Sniper {
    fn name(&self) -> &'static str {
        "Sniper"
    }

    fn phrases(&self) -> &'static [&'static str] {
        PHRASES
    }

    fn plan_move(&self, arena: &mut Arena, agent: &Agent) -> Option<Pos> {
        if scout_has_the_lead(arena, agent) {
            return None;
        }
        let perch = best_cover_cell(arena, agent)?;
        if perch == agent.pos {
            return None;
        }
        if let Some(roster) = arena.agents.get_mut(&agent.id) {
            roster.desired_pos = Some(perch);
        }
        next_step(arena, agent, agent.pos, perch, 0)
    }
}

/// The open cell tucked behind a cover block, on the home side of that
/// cover, within the agent's half of the board, nearest the board center.
/// Earlier row-major candidates win distance ties.
fn best_cover_cell(arena: &Arena, agent: &Agent) -> Option<Pos> {
    let home_shift = if agent.spawn().x == 0 { -1 } else { 1 };
    let half = arena.grid.width() / 2;
    let middle = arena.grid.middle();

    let mut best: Option<(u32, Pos)> = None;
    for cell in arena.grid.cells() {
        if !arena.grid.cover_at(cell).is_cover() {
            continue;
        }
        let candidate = Pos { y: cell.y, x: cell.x + home_shift };
        if !arena.grid.within(candidate) || arena.grid.cover_at(candidate).is_cover() {
            continue;
        }
        let on_own_half =
            if agent.spawn().x == 0 { candidate.x <= half } else { candidate.x >= half };
        if !on_own_half {
            continue;
        }
        let distance = manhattan(candidate, middle);
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}
