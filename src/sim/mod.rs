//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - One tick per rendered frame, driven by the host's delta time
//! - Seeded RNG only
//! - Fixed obstacle arena, stable iteration order

pub mod anim;
pub mod collision;
pub mod kinematics;
pub mod obstacles;
pub mod parallax;
pub mod state;
pub mod tick;

pub use anim::{AnimatedSprite, FrameCycle};
pub use collision::{Rect, first_hit};
pub use kinematics::Player;
pub use obstacles::{Obstacle, ObstaclePool};
pub use parallax::{Parallax, ScrollLayer};
pub use state::{GamePhase, GameState, Session};
pub use tick::{TickEvents, TickInput, tick};
