//! Target selection — which structure a hostile locks onto.
//!
//! Candidates are scanned in a fixed order and the nearest wins; comparisons
//! are strict `<`, so ties keep the earlier-scanned candidate. A candidate
//! only qualifies inside the adjacency threshold.

use stronghold_core::constants::ATTACK_RANGE_SQ;
use stronghold_core::enums::HostileKind;
use stronghold_core::types::{distance_sq, GridPos};

/// A structure offered to the targeting scan. `T` is the caller's handle
/// type (an entity id in the simulation, anything copyable in tests).
#[derive(Debug, Clone, Copy)]
pub struct Candidate<T> {
    pub id: T,
    /// Structure anchor (top-left corner).
    pub position: GridPos,
}

/// Pick the structure a hostile at `origin` should lock onto, if any.
///
/// `sites` holds the resource buildings in scan order (gold mines, then
/// elixir collectors); the town hall is always scanned last. Raiders never
/// consider walls; for Bombermen any wall within the threshold preempts every
/// other target kind.
pub fn select_target<T: Copy>(
    kind: HostileKind,
    origin: GridPos,
    walls: &[Candidate<T>],
    sites: &[Candidate<T>],
    town_hall: Candidate<T>,
) -> Option<T> {
    match kind {
        HostileKind::Raider => nearest_site_in_range(origin, sites, town_hall),
        HostileKind::Bomberman => {
            if let Some(wall) = nearest_wall_in_range(origin, walls) {
                return Some(wall);
            }
            nearest_site_in_range(origin, sites, town_hall)
        }
    }
}

fn nearest_wall_in_range<T: Copy>(origin: GridPos, walls: &[Candidate<T>]) -> Option<T> {
    let mut best = None;
    let mut best_dist = i32::MAX;
    for c in walls {
        let d = distance_sq(origin, c.position);
        if d < best_dist {
            best_dist = d;
            best = Some(c.id);
        }
    }
    best.filter(|_| best_dist < ATTACK_RANGE_SQ)
}

fn nearest_site_in_range<T: Copy>(
    origin: GridPos,
    sites: &[Candidate<T>],
    town_hall: Candidate<T>,
) -> Option<T> {
    let mut best = None;
    let mut best_dist = i32::MAX;
    for c in sites {
        let d = distance_sq(origin, c.position);
        if d < best_dist {
            best_dist = d;
            best = Some(c.id);
        }
    }
    let d_hall = distance_sq(origin, town_hall.position);
    if d_hall < best_dist {
        best_dist = d_hall;
        best = Some(town_hall.id);
    }
    best.filter(|_| best_dist < ATTACK_RANGE_SQ)
}
