//! Distance/cover damage math and incoming-damage prediction.
//! This module owns the cover geometry rules; it never mutates the arena.

use super::*;

/// Whether the cover cell at `cover_pos` (the neighbor of `target` in
/// direction `dir`) shields the target from `shooter`. The shooter must sit
/// strictly on the far side of the cover, and standing right next to the
/// cover negates it.
pub(crate) fn cover_blocks(target: Pos, shooter: Pos, cover_pos: Pos, dir: Pos) -> bool {
    let far_side = Pos { y: target.y + 2 * dir.y, x: target.x + 2 * dir.x };
    if manhattan(shooter, target) <= manhattan(shooter, far_side) {
        return false;
    }
    if manhattan(shooter, cover_pos) == 1 {
        return false;
    }
    true
}

/// Expected damage of one shot from `shooter` at `target_pos`: full soaking
/// power inside optimal range, half up to twice that, zero beyond. The best
/// single qualifying neighbor cover applies; protection does not stack. The
/// bracket is clamped at zero so stacked protection can never heal.
pub(crate) fn damage(
    arena: &Arena,
    shooter: &Agent,
    target_pos: Pos,
    extra_protection: f64,
    ignore_cover: bool,
) -> f64 {
    let distance = manhattan(shooter.pos, target_pos);
    let base = if distance <= shooter.stats.optimal_range {
        f64::from(shooter.stats.soaking_power)
    } else if distance <= shooter.stats.optimal_range * 2 {
        f64::from(shooter.stats.soaking_power) / 2.0
    } else {
        return 0.0;
    };

    let mut protection = 0.0f64;
    if !ignore_cover {
        for dir in [Pos { y: 0, x: -1 }, Pos { y: 0, x: 1 }, Pos { y: 1, x: 0 }, Pos { y: -1, x: 0 }]
        {
            let cover_pos = Pos { y: target_pos.y + dir.y, x: target_pos.x + dir.x };
            if !arena.grid.within(cover_pos) {
                continue;
            }
            let cover = arena.grid.cover_at(cover_pos);
            if cover.is_cover() && cover_blocks(target_pos, shooter.pos, cover_pos, dir) {
                protection = protection.max(cover.protection());
            }
        }
    }

    (base * (1.0 - protection - extra_protection)).max(0.0)
}

/// Total damage this position would soak if every living enemy fired at it.
/// Drives self-risk and retreat decisions.
pub(crate) fn predicted_incoming(arena: &Arena, pos: Pos, extra_protection: f64) -> f64 {
    arena
        .enemy_agents()
        .map(|enemy| damage(arena, enemy, pos, extra_protection, false))
        .sum()
}
