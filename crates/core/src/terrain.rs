//! Static occupancy grid for one loaded level. Immutable after load; doors
//! and other movable blockers are actors, not terrain.

use crate::types::Pos;

#[derive(Clone)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl TerrainGrid {
    /// `blocked` is row-major, `true` = impassable. Length must be
    /// `width * height`; the level loader validates that before building.
    pub fn new(width: usize, height: usize, blocked: Vec<bool>) -> Self {
        debug_assert_eq!(blocked.len(), width * height);
        Self { width, height, blocked }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Out-of-range space is reported solid so nothing ever walks or sees
    /// off the map.
    pub fn is_blocked(&self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            tracing::warn!(
                x = pos.x,
                y = pos.y,
                width = self.width,
                height = self.height,
                "terrain query out of bounds"
            );
            return true;
        }
        self.blocked[(pos.y as usize) * self.width + (pos.x as usize)]
    }
}
