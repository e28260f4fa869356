//! Fixed pool of scrolling, animated obstacles
//!
//! Obstacles share one sheet but animate and move independently. When one
//! leaves the left edge it is recycled past the right edge at a random gap.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::anim::{AnimatedSprite, FrameCycle};
use super::collision::Rect;
use crate::consts::*;

/// One nebula
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: usize,
    pub sprite: AnimatedSprite,
}

impl Obstacle {
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }

    /// Fully past the left edge of the window
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.sprite.pos.x < -self.sprite.frame_rect.width
    }
}

/// Fixed-capacity obstacle arena, indexed by slot
#[derive(Debug, Clone)]
pub struct ObstaclePool {
    pub obstacles: [Obstacle; OBSTACLE_COUNT],
    rng: Pcg32,
    /// Total recycles so far
    pub recycled: u64,
}

impl ObstaclePool {
    /// Line up the pool just past the right edge, `OBSTACLE_SPACING` apart
    pub fn new(cell: Vec2, rng: Pcg32) -> Self {
        let obstacles = std::array::from_fn(|id| Obstacle {
            id,
            sprite: AnimatedSprite::new(
                cell,
                Vec2::new(
                    WINDOW_WIDTH + OBSTACLE_SPACING * id as f32,
                    WINDOW_HEIGHT - cell.y,
                ),
                FRAME_INTERVAL,
                FrameCycle::Sheet {
                    columns: OBSTACLE_COLUMNS,
                    short_row_after: OBSTACLE_SHORT_ROW_AFTER,
                    short_columns: OBSTACLE_SHORT_ROW_COLUMNS,
                },
            ),
        });
        Self {
            obstacles,
            rng,
            recycled: 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn bounds(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().map(Obstacle::bounds)
    }

    /// Animate, scroll and recycle every obstacle
    pub fn update(&mut self, speed_multiplier: f32, dt: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.sprite.advance(dt, false);
            obstacle.sprite.pos.x += speed_multiplier * OBSTACLE_VELOCITY * dt;

            if obstacle.off_screen() {
                let gap = self.rng.random_range(RECYCLE_OFFSET_MIN..RECYCLE_OFFSET_MAX);
                obstacle.sprite.pos.x = WINDOW_WIDTH + gap as f32;
                self.recycled += 1;
                log::debug!(
                    "Recycled obstacle {} to x={}",
                    obstacle.id,
                    obstacle.sprite.pos.x
                );
            }
        }
    }
}
