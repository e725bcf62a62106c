//! Collision module - ball against paddle and bricks
//!
//! Every entity the ball can touch carries an [`EntityTag`], so resolution
//! dispatches on what was hit rather than on how many things overlap.
//! Walls are handled by [`Ball::step`](crate::ball::Ball::step).

use crate::ball::Ball;
use crate::bricks::{BrickGrid, BrickId};
use crate::paddle::Paddle;

/// Identity of a collidable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Ball,
    Paddle,
    Brick(BrickId),
}

/// What the ball hit this tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collision {
    /// The paddle overlaps the ball
    pub paddle: bool,
    /// Bricks to destroy; always empty when `paddle` is set
    pub bricks: Vec<BrickId>,
}

impl Collision {
    pub fn brick(&self) -> bool {
        !self.bricks.is_empty()
    }

    pub fn any(&self) -> bool {
        self.paddle || self.brick()
    }
}

/// Tags of every entity whose bounding box overlaps the ball's.
///
/// The ball itself is never reported.
pub fn overlapping(ball: &Ball, paddle: &Paddle, grid: &BrickGrid) -> Vec<EntityTag> {
    let bbox = ball.bounds();
    let mut tags = Vec::new();
    if paddle.bounds().overlaps(&bbox) {
        tags.push(EntityTag::Paddle);
    }
    tags.extend(grid.overlapping(&bbox).map(|b| EntityTag::Brick(b.id)));
    tags
}

/// Decide what the ball hit, without mutating anything.
///
/// A paddle contact wins over brick contacts in the same tick. Otherwise every
/// brick the ball touches is reported, so straddling two bricks destroys both.
pub fn resolve(ball: &Ball, paddle: &Paddle, grid: &BrickGrid) -> Collision {
    let tags = overlapping(ball, paddle, grid);

    if tags.contains(&EntityTag::Paddle) {
        return Collision {
            paddle: true,
            bricks: Vec::new(),
        };
    }

    let bricks = tags
        .into_iter()
        .filter_map(|tag| match tag {
            EntityTag::Brick(id) => Some(id),
            EntityTag::Ball | EntityTag::Paddle => None,
        })
        .collect();

    Collision {
        paddle: false,
        bricks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BRICK_COLUMNS, BRICK_ROWS, CANVAS_HEIGHT, CANVAS_WIDTH};
    use proptest::prelude::*;

    fn world() -> (Paddle, BrickGrid) {
        (
            Paddle::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT),
            BrickGrid::initialize(BRICK_ROWS, BRICK_COLUMNS, CANVAS_WIDTH),
        )
    }

    #[test]
    fn test_ball_in_open_space_hits_nothing() {
        let (paddle, grid) = world();
        let ball = Ball::new(210.0, 300.0, 3.0, 8.0);
        assert!(overlapping(&ball, &paddle, &grid).is_empty());
        assert_eq!(resolve(&ball, &paddle, &grid), Collision::default());
    }

    #[test]
    fn test_paddle_hit() {
        let (paddle, grid) = world();
        // Bottom edge at 562, paddle top at 560.
        let ball = Ball::new(210.0, 552.0, 3.0, 8.0);
        let hit = resolve(&ball, &paddle, &grid);
        assert!(hit.paddle);
        assert!(!hit.brick());
        assert!(hit.any());
    }

    #[test]
    fn test_single_brick_hit() {
        let (paddle, grid) = world();
        // Under brick 90 (row 9, column 0): bottom of that row is at 186.
        let ball = Ball::new(18.0, 195.0, 3.0, -8.0);
        let hit = resolve(&ball, &paddle, &grid);
        assert!(!hit.paddle);
        assert_eq!(hit.bricks, vec![BrickId(90)]);
    }

    #[test]
    fn test_straddling_ball_hits_every_touched_brick() {
        let (paddle, grid) = world();
        // Centered on the gap between columns 0 and 1, just under row 9.
        let ball = Ball::new(39.0, 195.0, 3.0, -8.0);
        let hit = resolve(&ball, &paddle, &grid);
        assert_eq!(hit.bricks, vec![BrickId(90), BrickId(91)]);
    }

    #[test]
    fn test_paddle_takes_precedence() {
        let (_, grid) = world();
        // A paddle moved into the brick field: both overlap the ball.
        let paddle = Paddle {
            left: 0.0,
            top: 190.0,
            width: 60.0,
            height: 10.0,
        };
        let ball = Ball::new(18.0, 195.0, 3.0, -8.0);
        let tags = overlapping(&ball, &paddle, &grid);
        assert!(tags.contains(&EntityTag::Paddle));
        assert!(tags.contains(&EntityTag::Brick(BrickId(90))));

        let hit = resolve(&ball, &paddle, &grid);
        assert!(hit.paddle);
        assert!(hit.bricks.is_empty());
    }

    #[test]
    fn test_dead_bricks_are_not_hit() {
        let (paddle, mut grid) = world();
        grid.remove(BrickId(90));
        let ball = Ball::new(18.0, 195.0, 3.0, -8.0);
        assert!(!resolve(&ball, &paddle, &grid).any());
    }

    proptest! {
        #[test]
        fn prop_resolve_is_pure(x in 0.0f32..420.0, y in 0.0f32..620.0, paddle_left in 0.0f32..360.0) {
            let (mut paddle, grid) = world();
            paddle.left = paddle_left;
            let ball = Ball::new(x, y, 2.0, 8.0);

            let first = resolve(&ball, &paddle, &grid);
            let second = resolve(&ball, &paddle, &grid);
            prop_assert_eq!(&first, &second);
            prop_assert!(!(first.paddle && first.brick()));
        }
    }
}
