//! Dapper Dasher - A side-scrolling runner
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (animation, kinematics, obstacles, parallax, collisions)
//! - `renderer`: Draw command recording, sprite batching and the WebGPU pipeline
//! - `assets`: Texture identities, paths and decoded sizes
//! - `game`: Per-frame orchestration of simulation and drawing
//! - `autopilot`: Scripted headless runs

pub mod assets;
pub mod autopilot;
pub mod game;
pub mod renderer;
pub mod sim;

pub use assets::{AssetError, TextureId, TextureSizes};
pub use game::{FrameInput, Game};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    pub const WINDOW_TITLE: &str = "Dapper Dasher";
    /// Frame pacing target (the host gates the loop)
    pub const TARGET_FPS: u32 = 60;
    /// Largest delta accepted per frame (absorbs tab switches / stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Gravity (pixels/s², toward +Y)
    pub const GRAVITY: f32 = 1000.0;
    /// Jump impulse (pixels/s, upward)
    pub const JUMP_VELOCITY: f32 = -750.0;

    /// Seconds each animation frame is held
    pub const FRAME_INTERVAL: f32 = 1.0 / 12.0;

    /// Player sheet: a single strip of running frames
    pub const PLAYER_COLUMNS: u32 = 6;

    /// Obstacle sheet layout (8x8 nebula; the last row is shorter)
    pub const OBSTACLE_COLUMNS: u32 = 8;
    pub const OBSTACLE_ROWS: u32 = 8;
    pub const OBSTACLE_SHORT_ROW_AFTER: u32 = 6;
    pub const OBSTACLE_SHORT_ROW_COLUMNS: u32 = 5;

    /// Obstacle pool
    pub const OBSTACLE_COUNT: usize = 2;
    pub const OBSTACLE_SPACING: f32 = 300.0;
    pub const OBSTACLE_VELOCITY: f32 = -200.0;
    /// Recycle offset past the right edge, in whole pixels (half-open)
    pub const RECYCLE_OFFSET_MIN: i32 = 150;
    pub const RECYCLE_OFFSET_MAX: i32 = 400;

    /// Parallax layers (far, back, foreground)
    pub const BACKGROUND_SCALE: f32 = 6.0;
    pub const FAR_SCROLL_RATE: f32 = 20.0;
    pub const BACK_SCROLL_RATE: f32 = 40.0;
    pub const FOREGROUND_SCROLL_RATE: f32 = 80.0;

    /// Obstacle hitbox inset on every edge
    pub const HITBOX_PADDING: f32 = 40.0;

    /// Per-frame score and difficulty growth while playing
    pub const SCORE_STEP: f32 = 0.01;
    pub const DIFFICULTY_STEP: f32 = 0.001;

    /// HUD text layout
    pub const HUD_FONT_SIZE: f32 = 100.0;
    pub const PROMPT_FONT_SIZE: f32 = 80.0;
    pub const HUD_X: f32 = WINDOW_WIDTH / 2.0 - 300.0;
    pub const HUD_Y: f32 = WINDOW_HEIGHT / 2.0 - 250.0;
    pub const FINAL_SCORE_Y: f32 = WINDOW_HEIGHT / 2.0 - 100.0;
    pub const PROMPT_X: f32 = 200.0;
}
