//! Grid movement, collision resolution, greedy seeking, and line of sight.
//!
//! Collision is resolved against obstacle *target* positions, not their
//! current tiles: a cell claimed earlier in the same turn stays claimed, so
//! two actors can never swap through each other inside one turn window.

use slotmap::SlotMap;

use crate::state::Actor;
use crate::terrain::TerrainGrid;
use crate::types::{ActorId, Facing, Pos, WorldEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveResult {
    Moved,
    BlockedByTerrain,
    BlockedByActor(ActorId),
    /// Zero delta: rejected with no side effects, not even a bump.
    NoOp,
}

impl MoveResult {
    pub(crate) fn moved(self) -> bool {
        self == MoveResult::Moved
    }
}

/// One single-tile move attempt. On success commits `target_pos`, records
/// facing for horizontal steps, and emits `Stepped`; on a blocked move emits
/// `Bumped` (presentation wiggle) and leaves logical state untouched.
pub(crate) fn attempt_move(
    actors: &mut SlotMap<ActorId, Actor>,
    terrain: &TerrainGrid,
    mover: ActorId,
    dx: i32,
    dy: i32,
    obstacles: &[ActorId],
    events: &mut Vec<WorldEvent>,
) -> MoveResult {
    if dx == 0 && dy == 0 {
        return MoveResult::NoOp;
    }

    // Settle any in-flight interpolation so the decision is made from a
    // stable grid position.
    if !actors[mover].settled() {
        actors[mover].settle();
    }

    let origin = actors[mover].target_pos;
    let candidate = origin.offset(dx, dy);
    let size = actors[mover].footprint;

    for ox in 0..size {
        for oy in 0..size {
            if terrain.is_blocked(candidate.offset(ox, oy)) {
                events.push(WorldEvent::Bumped { actor: mover, dx, dy });
                return MoveResult::BlockedByTerrain;
            }
        }
    }

    for &other_id in obstacles {
        if other_id == mover {
            continue;
        }
        let other = &actors[other_id];
        if !other.alive() {
            continue;
        }
        // Target-rooted AABB overlap, all footprint tiles participating.
        let o = other.target_pos;
        let ow = other.footprint;
        if candidate.x < o.x + ow
            && candidate.x + size > o.x
            && candidate.y < o.y + ow
            && candidate.y + size > o.y
        {
            events.push(WorldEvent::Bumped { actor: mover, dx, dy });
            return MoveResult::BlockedByActor(other_id);
        }
    }

    let actor = &mut actors[mover];
    actor.target_pos = candidate;
    if dx != 0 {
        actor.facing = if dx > 0 { Facing::East } else { Facing::West };
    }
    events.push(WorldEvent::Stepped { actor: mover, from: origin, to: candidate });
    MoveResult::Moved
}

/// Greedy seek: step along the axis with the larger remaining delta, falling
/// back to the other axis when blocked, up to `speed` sub-steps. Stops early
/// on arrival or once both axes fail. Ties prefer the vertical axis.
///
/// Returns every obstructing actor hit along the way, in order, so the turn
/// engine can dispatch encounters.
pub(crate) fn move_towards(
    actors: &mut SlotMap<ActorId, Actor>,
    terrain: &TerrainGrid,
    mover: ActorId,
    target: ActorId,
    obstacles: &[ActorId],
    speed: u32,
    events: &mut Vec<WorldEvent>,
) -> Vec<ActorId> {
    let mut obstructors = Vec::new();

    for _ in 0..speed {
        let here = actors[mover].target_pos;
        let goal = actors[target].target_pos;
        if here == goal {
            break;
        }

        let dx = goal.x - here.x;
        let dy = goal.y - here.y;
        let step_x = (dx.signum(), 0);
        let step_y = (0, dy.signum());
        let tries = if dx.abs() > dy.abs() { [step_x, step_y] } else { [step_y, step_x] };

        let mut moved_this_step = false;
        for (sx, sy) in tries {
            if sx == 0 && sy == 0 {
                continue;
            }
            match attempt_move(actors, terrain, mover, sx, sy, obstacles, events) {
                MoveResult::Moved => {
                    moved_this_step = true;
                    break;
                }
                MoveResult::BlockedByActor(id) => obstructors.push(id),
                MoveResult::BlockedByTerrain | MoveResult::NoOp => {}
            }
        }
        if !moved_this_step {
            break;
        }
    }

    obstructors
}

/// Entity-aware sight line between two actors. Walks the grid one cell at a
/// time; any terrain-blocked cell or live blocker on an intermediate cell
/// kills the line. The endpoints themselves never obstruct.
pub(crate) fn line_of_sight(
    actors: &SlotMap<ActorId, Actor>,
    terrain: &TerrainGrid,
    from: ActorId,
    to: ActorId,
    blockers: &[ActorId],
) -> bool {
    let start = actors[from].pos;
    let end = actors[to].pos;
    if start == end {
        return true;
    }

    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = if dx > dy { dx } else { -dy } / 2;

    let mut cur = start;
    loop {
        if cur != start {
            if terrain.is_blocked(cur) {
                return false;
            }
            for &blocker in blockers {
                if blocker == from || blocker == to {
                    continue;
                }
                let actor = &actors[blocker];
                if actor.alive() && actor.pos == cur {
                    return false;
                }
            }
        }

        if cur == end {
            break;
        }

        let e2 = err;
        if e2 > -dx {
            err -= dy;
            cur.x += sx;
        }
        if e2 < dy {
            err += dx;
            cur.y += sy;
        }
    }

    true
}
