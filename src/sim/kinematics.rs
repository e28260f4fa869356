//! Player vertical motion: gravity, jumping and ground contact

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimatedSprite, FrameCycle};
use crate::consts::*;

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub sprite: AnimatedSprite,
    /// Vertical velocity (pixels/s, +Y is down)
    pub velocity: f32,
    /// Set by the last kinematics step
    pub airborne: bool,
    /// Y coordinate of the sprite's top when standing
    pub ground_y: f32,
}

impl Player {
    /// Player standing centered on the ground, given one sheet cell
    pub fn new(cell: Vec2) -> Self {
        let ground_y = WINDOW_HEIGHT - cell.y;
        let pos = Vec2::new(WINDOW_WIDTH / 2.0 - cell.x / 2.0, ground_y);
        Self {
            sprite: AnimatedSprite::new(
                cell,
                pos,
                FRAME_INTERVAL,
                FrameCycle::Strip {
                    frames: PLAYER_COLUMNS,
                },
            ),
            velocity: 0.0,
            airborne: false,
            ground_y,
        }
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.sprite.pos.y >= self.ground_y
    }

    /// Advance one frame of vertical motion.
    ///
    /// Returns true when a jump was started this frame.
    pub fn step(&mut self, jump: bool, dt: f32) -> bool {
        if self.on_ground() {
            // Landing may overshoot by a frame's worth of fall
            self.sprite.pos.y = self.ground_y;
            self.velocity = 0.0;
            self.airborne = false;
        } else {
            self.velocity += GRAVITY * dt;
            self.airborne = true;
        }

        let jumped = jump && !self.airborne;
        if jumped {
            self.velocity = JUMP_VELOCITY;
        }

        self.sprite.pos.y += self.velocity * dt;
        jumped
    }
}
