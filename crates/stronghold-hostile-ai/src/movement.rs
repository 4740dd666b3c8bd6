//! Movement planning — one grid step toward the objective.
//!
//! The seeking half of the hostile state machine: a signum step toward the
//! town hall with archetype-specific random deviation, clamped to the
//! playable bounds and checked against wall proximity.

use glam::IVec2;
use rand::Rng;

use stronghold_core::constants::{PLAY_MAX, PLAY_MIN};
use stronghold_core::enums::HostileKind;
use stronghold_core::types::{within_attack_range, GridPos};

use crate::profiles::get_profile;

/// Input to the movement planner for a single hostile.
pub struct MoveContext<'a> {
    pub kind: HostileKind,
    pub position: GridPos,
    /// The global objective (town hall anchor).
    pub objective: GridPos,
    /// Positions of all standing walls.
    pub walls: &'a [GridPos],
}

/// Plan the next position for a seeking hostile. `None` means hold this
/// action: a Raider boxed in by walls waits for the next one.
pub fn plan_step<R: Rng>(ctx: &MoveContext<'_>, rng: &mut R) -> Option<GridPos> {
    let mut step = (ctx.objective - ctx.position).signum();
    let deviation_chance = get_profile(ctx.kind).deviation_chance;

    match ctx.kind {
        // Raiders are mostly direct, with an occasional single-axis zigzag.
        HostileKind::Raider => {
            if rng.gen_range(1..=10) <= deviation_chance {
                if rng.gen_range(1..=10) <= 5 {
                    step.x += rng.gen_range(-1..=1);
                } else {
                    step.y += rng.gen_range(-1..=1);
                }
            }
        }
        // Bombermen wander on both axes.
        HostileKind::Bomberman => {
            if rng.gen_range(1..=10) <= deviation_chance {
                step.x += rng.gen_range(-1..=1);
                step.y += rng.gen_range(-1..=1);
            }
        }
    }

    // Never stall in place: force a horizontal nudge.
    if step == IVec2::ZERO {
        step.x = rng.gen_range(-1..=1);
        if step.x == 0 {
            step.x = 1;
        }
    }

    let candidate = (ctx.position + step).clamp(PLAY_MIN, PLAY_MAX);
    if !blocked_by_wall(candidate, ctx.walls) {
        return Some(candidate);
    }

    match ctx.kind {
        // Raiders route around: each axis alone, hold if both are blocked.
        HostileKind::Raider => {
            let horizontal = (ctx.position + IVec2::new(step.x, 0)).clamp(PLAY_MIN, PLAY_MAX);
            let vertical = (ctx.position + IVec2::new(0, step.y)).clamp(PLAY_MIN, PLAY_MAX);
            if !blocked_by_wall(horizontal, ctx.walls) {
                Some(horizontal)
            } else if !blocked_by_wall(vertical, ctx.walls) {
                Some(vertical)
            } else {
                None
            }
        }
        // Bombermen walk up to the wall; it becomes their target next action.
        HostileKind::Bomberman => Some(candidate),
    }
}

fn blocked_by_wall(candidate: GridPos, walls: &[GridPos]) -> bool {
    walls.iter().any(|&w| within_attack_range(candidate, w))
}
