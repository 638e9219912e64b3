//! Fog-of-war field recomputed by ray casting from the player's tile. Kept
//! separate from movement so sight rules stay deterministic and isolated.

use crate::terrain::TerrainGrid;
use crate::types::{Pos, Visibility};

#[derive(Clone)]
pub struct VisibilityField {
    width: usize,
    height: usize,
    tiles: Vec<Visibility>,
    /// Scratch overlay of closed doors and similar movable blockers,
    /// rebuilt each pass; never baked into terrain.
    dynamic: Vec<bool>,
}

impl VisibilityField {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Visibility::Unseen; width * height],
            dynamic: vec![false; width * height],
        }
    }

    pub fn state_at(&self, pos: Pos) -> Visibility {
        if !self.in_bounds(pos) {
            return Visibility::Unseen;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            tracing::warn!(x = pos.x, y = pos.y, "visibility query out of bounds");
            return false;
        }
        self.tiles[self.index(pos)] == Visibility::Visible
    }

    /// One full pass: demote last pass's `Visible` tiles to `Explored`, then
    /// cast a ray at every offset inside the view disc. Rays stop at static
    /// terrain or a dynamic obstacle, after lighting the blocking tile.
    pub fn recompute(
        &mut self,
        light: Pos,
        terrain: &TerrainGrid,
        dynamic_obstacles: &[Pos],
        radius: i32,
    ) {
        self.dynamic.fill(false);
        for &pos in dynamic_obstacles {
            if self.in_bounds(pos) {
                let idx = self.index(pos);
                self.dynamic[idx] = true;
            }
        }

        for tile in &mut self.tiles {
            if *tile == Visibility::Visible {
                *tile = Visibility::Explored;
            }
        }

        for ox in -radius..=radius {
            for oy in -radius..=radius {
                if ox * ox + oy * oy <= radius * radius {
                    self.cast_ray(light, light.offset(ox, oy), terrain);
                }
            }
        }
    }

    /// Integer line traversal from `from` to `to`, marking every visited
    /// in-range tile visible. The light source tile itself is lit without an
    /// obstruction test; a blocking tile further along is lit, then the ray
    /// stops.
    fn cast_ray(&mut self, from: Pos, to: Pos, terrain: &TerrainGrid) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx - dy;

        let mut cur = from;
        loop {
            if !self.in_bounds(cur) {
                break;
            }
            let idx = self.index(cur);
            self.tiles[idx] = Visibility::Visible;

            let blocked = (cur != from && terrain.is_blocked(cur)) || self.dynamic[idx];
            if blocked || cur == to {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                cur.x += sx;
            }
            if e2 < dx {
                err += dx;
                cur.y += sy;
            }
        }
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_terrain(width: usize, height: usize) -> TerrainGrid {
        TerrainGrid::new(width, height, vec![false; width * height])
    }

    fn wall_column(width: usize, height: usize, x: usize) -> TerrainGrid {
        let mut blocked = vec![false; width * height];
        for y in 0..height {
            blocked[y * width + x] = true;
        }
        TerrainGrid::new(width, height, blocked)
    }

    #[test]
    fn light_source_tile_is_always_visible() {
        let terrain = open_terrain(20, 20);
        let mut fog = VisibilityField::new(20, 20);
        fog.recompute(Pos { x: 10, y: 10 }, &terrain, &[], 8);
        assert!(fog.is_visible(Pos { x: 10, y: 10 }));
    }

    #[test]
    fn visibility_is_disc_bounded_not_square() {
        let terrain = open_terrain(30, 30);
        let mut fog = VisibilityField::new(30, 30);
        let light = Pos { x: 15, y: 15 };
        fog.recompute(light, &terrain, &[], 8);

        assert!(fog.is_visible(Pos { x: 23, y: 15 }));
        // The square corner at offset (8, 8) lies outside the radius-8 disc.
        assert!(!fog.is_visible(Pos { x: 23, y: 23 }));
    }

    #[test]
    fn wall_is_lit_but_tiles_behind_it_are_not() {
        let terrain = wall_column(20, 20, 8);
        let mut fog = VisibilityField::new(20, 20);
        fog.recompute(Pos { x: 5, y: 10 }, &terrain, &[], 8);

        assert!(fog.is_visible(Pos { x: 8, y: 10 }), "blocking tile itself is lit");
        assert!(!fog.is_visible(Pos { x: 9, y: 10 }), "tile directly behind wall stays dark");
        assert!(!fog.is_visible(Pos { x: 12, y: 10 }));
    }

    #[test]
    fn closed_door_blocks_for_the_current_pass_only() {
        let terrain = open_terrain(20, 20);
        let mut fog = VisibilityField::new(20, 20);
        let light = Pos { x: 5, y: 10 };
        let door = Pos { x: 8, y: 10 };

        fog.recompute(light, &terrain, &[door], 8);
        assert!(fog.is_visible(door));
        assert!(!fog.is_visible(Pos { x: 10, y: 10 }));

        // Door gone (opened): same pass parameters now light the far side.
        fog.recompute(light, &terrain, &[], 8);
        assert!(fog.is_visible(Pos { x: 10, y: 10 }));
    }

    #[test]
    fn visible_demotes_to_explored_and_never_to_unseen() {
        let terrain = open_terrain(40, 20);
        let mut fog = VisibilityField::new(40, 20);
        let near = Pos { x: 5, y: 10 };
        fog.recompute(near, &terrain, &[], 8);
        assert_eq!(fog.state_at(Pos { x: 6, y: 10 }), Visibility::Visible);

        // Move the light far away; the old neighborhood must stay explored.
        fog.recompute(Pos { x: 35, y: 10 }, &terrain, &[], 8);
        assert_eq!(fog.state_at(Pos { x: 6, y: 10 }), Visibility::Explored);
        assert_eq!(fog.state_at(near), Visibility::Explored);
    }

    #[test]
    fn out_of_range_queries_are_never_visible() {
        let fog = VisibilityField::new(10, 10);
        assert!(!fog.is_visible(Pos { x: -1, y: 0 }));
        assert!(!fog.is_visible(Pos { x: 0, y: 10 }));
        assert_eq!(fog.state_at(Pos { x: 99, y: -7 }), Visibility::Unseen);
    }
}
