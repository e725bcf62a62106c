//! Brick grid module - the destructible brick set
//!
//! Bricks are laid out row-major once per session and only ever removed.
//! Storage is a flat slot array indexed by creation order, so removal is O(1)
//! and iteration keeps creation order without re-sorting.

use crate::geometry::Rect;
use crate::types::{BrickTier, BRICK_HEIGHT, BRICK_SEP, BRICK_Y_OFFSET};

/// Stable brick identifier: the brick's creation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickId(pub u32);

impl BrickId {
    #[inline(always)]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

/// A live brick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub id: BrickId,
    pub rect: Rect,
    pub tier: BrickTier,
}

/// Width of each brick for the given column count.
///
/// `floor((canvas_width - (columns + 1) * BRICK_SEP) / columns)`
pub fn brick_width(columns: u32, canvas_width: f32) -> f32 {
    if columns == 0 {
        return 0.0;
    }
    ((canvas_width - (columns as f32 + 1.0) * BRICK_SEP) / columns as f32).floor()
}

/// Owner of every brick in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    /// `None` once the brick at that creation index is destroyed
    slots: Vec<Option<Brick>>,
    remaining: usize,
    rows: u32,
    columns: u32,
    brick_width: f32,
}

impl BrickGrid {
    /// Lay out a full grid of `rows x columns` bricks.
    pub fn initialize(rows: u32, columns: u32, canvas_width: f32) -> Self {
        let width = brick_width(columns, canvas_width);
        let capacity = (rows as usize) * (columns as usize);
        let mut slots = Vec::with_capacity(capacity);

        for row in 0..rows {
            for col in 0..columns {
                let index = slots.len();
                let left = col as f32 * (width + BRICK_SEP);
                let top = BRICK_Y_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_SEP);
                slots.push(Some(Brick {
                    id: BrickId(index as u32),
                    rect: Rect::from_origin(left, top, width, BRICK_HEIGHT),
                    tier: BrickTier::from_creation_index(index),
                }));
            }
        }

        Self {
            remaining: slots.len(),
            slots,
            rows,
            columns,
            brick_width: width,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn brick_width(&self) -> f32 {
        self.brick_width
    }

    /// Number of bricks the grid started with.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live bricks.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Win condition: every brick destroyed.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.slots.get(id.slot()).and_then(|s| s.as_ref())
    }

    /// Destroy a brick. Dead or unknown ids are ignored.
    pub fn remove(&mut self, id: BrickId) -> Option<Brick> {
        let removed = self.slots.get_mut(id.slot()).and_then(Option::take);
        if removed.is_some() {
            self.remaining -= 1;
        }
        removed
    }

    /// Live bricks in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Brick> + '_ {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Live bricks whose box overlaps `rect`.
    pub fn overlapping<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = &'a Brick> + 'a {
        self.iter().filter(move |b| b.rect.overlaps(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BRICK_COLUMNS, BRICK_ROWS, CANVAS_WIDTH};

    fn default_grid() -> BrickGrid {
        BrickGrid::initialize(BRICK_ROWS, BRICK_COLUMNS, CANVAS_WIDTH)
    }

    #[test]
    fn test_default_grid_is_full() {
        let grid = default_grid();
        assert_eq!(grid.capacity(), 100);
        assert_eq!(grid.remaining(), 100);
        assert!(!grid.is_empty());
        assert_eq!(grid.iter().count(), 100);
    }

    #[test]
    fn test_brick_width_uses_floor_division() {
        // (420 - 11 * 4) / 10 = 37.6
        assert_eq!(brick_width(10, 420.0), 37.0);
        assert_eq!(default_grid().brick_width(), 37.0);
        assert!(default_grid().iter().all(|b| b.rect.width() == 37.0));
        assert_eq!(brick_width(0, 420.0), 0.0);
    }

    #[test]
    fn test_layout_offsets() {
        let grid = default_grid();

        let first = grid.get(BrickId(0)).unwrap();
        assert_eq!(first.rect, Rect::new(0.0, 70.0, 37.0, 78.0));

        // Row 0, column 1.
        let second = grid.get(BrickId(1)).unwrap();
        assert_eq!(second.rect.left, 41.0);
        assert_eq!(second.rect.top, 70.0);

        // Row 1, column 0.
        let below = grid.get(BrickId(10)).unwrap();
        assert_eq!(below.rect.left, 0.0);
        assert_eq!(below.rect.top, 82.0);

        // Last brick: row 9, column 9.
        let last = grid.get(BrickId(99)).unwrap();
        assert_eq!(last.rect.left, 9.0 * 41.0);
        assert_eq!(last.rect.top, 70.0 + 9.0 * 12.0);
        assert!(last.rect.right <= CANVAS_WIDTH);
    }

    #[test]
    fn test_tiers_follow_creation_order() {
        let grid = default_grid();
        for brick in grid.iter() {
            let expected = BrickTier::ALL[brick.id.0 as usize / 20];
            assert_eq!(brick.tier, expected, "brick {}", brick.id.0);
        }
        assert_eq!(grid.get(BrickId(19)).unwrap().tier, BrickTier::Red);
        assert_eq!(grid.get(BrickId(20)).unwrap().tier, BrickTier::Orange);
        assert_eq!(grid.get(BrickId(80)).unwrap().tier, BrickTier::Cyan);
    }

    #[test]
    fn test_large_grid_tiers_stay_in_palette() {
        let grid = BrickGrid::initialize(20, 10, CANVAS_WIDTH);
        assert_eq!(grid.capacity(), 200);
        assert_eq!(grid.get(BrickId(199)).unwrap().tier, BrickTier::Cyan);
    }

    #[test]
    fn test_remove() {
        let mut grid = default_grid();

        let removed = grid.remove(BrickId(42)).unwrap();
        assert_eq!(removed.id, BrickId(42));
        assert_eq!(grid.remaining(), 99);
        assert!(grid.get(BrickId(42)).is_none());
        assert_eq!(grid.iter().count(), 99);

        // Removing twice or removing an unknown id changes nothing.
        assert!(grid.remove(BrickId(42)).is_none());
        assert!(grid.remove(BrickId(1000)).is_none());
        assert_eq!(grid.remaining(), 99);
    }

    #[test]
    fn test_removing_everything_empties_grid() {
        let mut grid = BrickGrid::initialize(2, 3, CANVAS_WIDTH);
        for id in 0..6 {
            assert!(grid.remove(BrickId(id)).is_some());
        }
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_zero_sized_grid_is_empty() {
        assert!(BrickGrid::initialize(0, 10, CANVAS_WIDTH).is_empty());
        assert!(BrickGrid::initialize(10, 0, CANVAS_WIDTH).is_empty());
    }

    #[test]
    fn test_overlapping() {
        let grid = default_grid();
        // Straddles the gap between bricks 0 and 1 on the first row.
        let probe = Rect::new(30.0, 72.0, 45.0, 76.0);
        let hits: Vec<BrickId> = grid.overlapping(&probe).map(|b| b.id).collect();
        assert_eq!(hits, vec![BrickId(0), BrickId(1)]);

        let miss = Rect::new(0.0, 0.0, 420.0, 60.0);
        assert_eq!(grid.overlapping(&miss).count(), 0);
    }
}
