//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one [`GameState`], owned by the
//! orchestrator and passed by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::kinematics::Player;
use super::obstacles::ObstaclePool;
use super::parallax::Parallax;
use crate::assets::TextureSizes;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Static scene, waiting for the start input
    Idle,
    /// Active gameplay
    Playing,
    /// Hit an obstacle; terminal
    GameOver,
}

/// Score and difficulty bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    /// Distance score, grows per frame while playing
    pub score: f32,
    /// Scales parallax scroll rates
    pub scroll_multiplier: f32,
    /// Scales obstacle speed
    pub obstacle_speed_multiplier: f32,
    /// Set on the frame a collision is detected, kept afterwards
    pub collided: bool,
    /// Frames simulated while playing
    pub frames_played: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0.0,
            scroll_multiplier: 1.0,
            obstacle_speed_multiplier: 1.0,
            collided: false,
            frames_played: 0,
        }
    }
}

impl Session {
    /// One frame's worth of score and difficulty growth
    pub fn accrue(&mut self) {
        self.score += SCORE_STEP;
        self.scroll_multiplier += DIFFICULTY_STEP;
        self.obstacle_speed_multiplier += DIFFICULTY_STEP;
        self.frames_played += 1;
    }

    /// Score text as shown on the HUD
    pub fn score_label(&self) -> String {
        format!("Score: {:.1} m", self.score)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub session: Session,
    pub player: Player,
    pub obstacles: ObstaclePool,
    pub parallax: Parallax,
    /// Texture sizes the entities were laid out from
    pub sizes: TextureSizes,
}

impl GameState {
    /// Create a new game state with the given seed and texture sizes
    pub fn new(seed: u64, sizes: TextureSizes) -> Self {
        let player_cell = Vec2::new(
            sizes.player.width / PLAYER_COLUMNS as f32,
            sizes.player.height,
        );
        let obstacle_cell = Vec2::new(
            sizes.obstacle.width / OBSTACLE_COLUMNS as f32,
            sizes.obstacle.height / OBSTACLE_ROWS as f32,
        );

        Self {
            seed,
            session: Session::default(),
            player: Player::new(player_cell),
            obstacles: ObstaclePool::new(obstacle_cell, Pcg32::seed_from_u64(seed)),
            parallax: Parallax::new(&sizes),
            sizes,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(1, TextureSizes::default());
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.player.sprite.cell(), Vec2::new(128.0, 128.0));
        assert_eq!(state.obstacles.obstacles[0].sprite.cell(), Vec2::new(100.0, 100.0));
        assert_eq!(state.session.score, 0.0);
        assert_eq!(state.session.scroll_multiplier, 1.0);
    }

    #[test]
    fn test_accrue() {
        let mut s = Session::default();
        s.accrue();
        s.accrue();
        assert!((s.score - 0.02).abs() < 1e-6);
        assert!((s.scroll_multiplier - 1.002).abs() < 1e-6);
        assert!((s.obstacle_speed_multiplier - 1.002).abs() < 1e-6);
        assert_eq!(s.frames_played, 2);
    }

    #[test]
    fn test_score_label() {
        let s = Session {
            score: 12.34,
            ..Default::default()
        };
        assert_eq!(s.score_label(), "Score: 12.3 m");
    }
}
