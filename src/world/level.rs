//! Segment World and Tile Levels
//!
//! A flat list of edges answering nearest-hit ray queries, plus a loader that
//! turns an ASCII tile map into edges.
//!
//! ## Tile Legend
//!
//! ```text
//!   #   solid block
//!   /   45° slope rising to the right   ◢
//!   \   45° slope rising to the left    ◣
//!   P   spawn point (empty tile)
//!   .   empty (space also works)
//! ```
//!
//! Row 0 is the top of the map; y grows upward in world space.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::vec2::Vec2;
use crate::physics::mask::CollisionMask;
use crate::physics::raycast::{GeometryQuery, Ray, RayHit};
use super::segment::Segment;

/// Errors from building a level.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    /// No rows, or only empty rows.
    #[error("level map is empty")]
    Empty,

    /// Character outside the tile legend.
    #[error("unknown tile {ch:?} at row {row}, column {column}")]
    UnknownTile {
        /// Row index (0 = top)
        row: usize,
        /// Column index
        column: usize,
        /// Offending character
        ch: char,
    },

    /// Tile size must be positive and finite.
    #[error("invalid tile size: {0}")]
    InvalidTileSize(f32),
}

/// Geometry made of line segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentWorld {
    segments: Vec<Segment>,
}

impl SegmentWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one edge.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Add the four edges of an axis-aligned box.
    pub fn push_box(&mut self, min: Vec2, max: Vec2, layer: CollisionMask) {
        let bottom_right = Vec2::new(max.x, min.y);
        let top_left = Vec2::new(min.x, max.y);
        self.push(Segment::new(min, bottom_right, layer));
        self.push(Segment::new(bottom_right, max, layer));
        self.push(Segment::new(max, top_left, layer));
        self.push(Segment::new(top_left, min, layer));
    }

    /// All edges in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl GeometryQuery for SegmentWorld {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self.segments
            .iter()
            .filter(|segment| segment.layer.intersects(ray.mask))
            .filter_map(|segment| segment.intersect(ray))
            // Strict comparison keeps the earliest-added edge on ties
            .fold(None, |best: Option<RayHit>, hit| match best {
                Some(b) if b.distance <= hit.distance => Some(b),
                _ => Some(hit),
            })
    }
}

/// Tile kinds in the ASCII legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Solid,
    SlopeUpRight,
    SlopeUpLeft,
}

/// Tile sides, used to skip edges shared by two solid faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Bottom,
    Right,
    Top,
    Left,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Bottom => Side::Top,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Left => Side::Right,
        }
    }
}

impl Tile {
    fn parse(ch: char) -> Option<(Self, bool)> {
        match ch {
            '#' => Some((Tile::Solid, false)),
            '/' => Some((Tile::SlopeUpRight, false)),
            '\\' => Some((Tile::SlopeUpLeft, false)),
            '.' | ' ' => Some((Tile::Empty, false)),
            'P' => Some((Tile::Empty, true)),
            _ => None,
        }
    }

    /// Check if this tile covers the whole of `side`.
    fn is_full(self, side: Side) -> bool {
        match self {
            Tile::Empty => false,
            Tile::Solid => true,
            Tile::SlopeUpRight => matches!(side, Side::Bottom | Side::Right),
            Tile::SlopeUpLeft => matches!(side, Side::Bottom | Side::Left),
        }
    }
}

/// A loaded tile map.
#[derive(Debug, Clone)]
pub struct Level {
    /// Collision edges
    pub world: SegmentWorld,
    /// Center of the `P` tile, if any (last one wins)
    pub spawn: Option<Vec2>,
    /// Map width in tiles
    pub columns: usize,
    /// Map height in tiles
    pub rows: usize,
    /// World units per tile
    pub tile_size: f32,
}

impl Level {
    /// Build a level from ASCII rows (row 0 = top).
    ///
    /// Rows may have different lengths; missing tiles are empty.
    pub fn from_ascii<S: AsRef<str>>(
        rows: &[S],
        tile_size: f32,
        layer: CollisionMask,
    ) -> Result<Self, LevelError> {
        if !(tile_size > 0.0 && tile_size.is_finite()) {
            return Err(LevelError::InvalidTileSize(tile_size));
        }

        let mut grid: Vec<Vec<Tile>> = Vec::with_capacity(rows.len());
        let mut spawn_cell = None;

        for (row, line) in rows.iter().enumerate() {
            let mut tiles = Vec::new();
            for (column, ch) in line.as_ref().chars().enumerate() {
                let (tile, is_spawn) =
                    Tile::parse(ch).ok_or(LevelError::UnknownTile { row, column, ch })?;
                if is_spawn {
                    spawn_cell = Some((row, column));
                }
                tiles.push(tile);
            }
            grid.push(tiles);
        }

        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
        let row_count = grid.len();
        if columns == 0 {
            return Err(LevelError::Empty);
        }

        let tile_at = |row: isize, column: isize| -> Tile {
            if row < 0 || column < 0 {
                return Tile::Empty;
            }
            grid.get(row as usize)
                .and_then(|r| r.get(column as usize))
                .copied()
                .unwrap_or(Tile::Empty)
        };

        let mut world = SegmentWorld::new();

        for row in 0..row_count {
            for column in 0..columns {
                let tile = tile_at(row as isize, column as isize);
                if tile == Tile::Empty {
                    continue;
                }

                // World-space corners of this cell
                let x0 = column as f32 * tile_size;
                let x1 = x0 + tile_size;
                let y0 = (row_count - 1 - row) as f32 * tile_size;
                let y1 = y0 + tile_size;

                let (r, c) = (row as isize, column as isize);
                let sides = [
                    (Side::Bottom, tile_at(r + 1, c), Vec2::new(x0, y0), Vec2::new(x1, y0)),
                    (Side::Right, tile_at(r, c + 1), Vec2::new(x1, y0), Vec2::new(x1, y1)),
                    (Side::Top, tile_at(r - 1, c), Vec2::new(x1, y1), Vec2::new(x0, y1)),
                    (Side::Left, tile_at(r, c - 1), Vec2::new(x0, y1), Vec2::new(x0, y0)),
                ];

                for (side, neighbour, start, end) in sides {
                    if tile.is_full(side) && !neighbour.is_full(side.opposite()) {
                        world.push(Segment::new(start, end, layer));
                    }
                }

                match tile {
                    Tile::SlopeUpRight => {
                        world.push(Segment::new(Vec2::new(x0, y0), Vec2::new(x1, y1), layer));
                    }
                    Tile::SlopeUpLeft => {
                        world.push(Segment::new(Vec2::new(x0, y1), Vec2::new(x1, y0), layer));
                    }
                    Tile::Solid | Tile::Empty => {}
                }
            }
        }

        let spawn = spawn_cell.map(|(row, column)| {
            Vec2::new(
                (column as f32 + 0.5) * tile_size,
                ((row_count - 1 - row) as f32 + 0.5) * tile_size,
            )
        });

        debug!(
            rows = row_count,
            columns,
            segments = world.len(),
            "level loaded"
        );

        Ok(Self {
            world,
            spawn,
            columns,
            rows: row_count,
            tile_size,
        })
    }
}
