//! Headless runs driven by a simple scripted jumper
//!
//! Used by the native binary (there is no native window) and by tests that
//! need a long, realistic session.

use serde::Serialize;

use crate::assets::TextureSizes;
use crate::consts::*;
use crate::game::{FrameInput, Game};
use crate::renderer::DrawList;
use crate::sim::{GamePhase, GameState};

/// Fixed delta used for headless runs
pub const HEADLESS_DT: f32 = 1.0 / TARGET_FPS as f32;

/// Gap (at 1x speed) between an obstacle's hitbox and the runner that
/// triggers a jump
const JUMP_LEAD: f32 = 50.0;

/// Jump when grounded and a hitbox is about to reach the runner
pub fn should_jump(state: &GameState) -> bool {
    if state.player.airborne {
        return false;
    }
    let runner = state.player.sprite.bounds();
    let lead = JUMP_LEAD * state.session.obstacle_speed_multiplier;
    state.obstacles.bounds().any(|o| {
        let gap = o.inset(HITBOX_PADDING).x - runner.right();
        gap > 0.0 && gap <= lead
    })
}

#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frame_count: u64,
    pub frames_played: u64,
    pub final_score: f32,
    pub phase: GamePhase,
    pub jumps: u32,
    pub recycles: u64,
    pub game_over: bool,
}

/// Start a seeded session and play it until game over or `max_frames`
pub fn run_headless(seed: u64, max_frames: u64, jumping: bool) -> RunSummary {
    let mut game = Game::new(seed, TextureSizes::default());
    let mut frame = DrawList::new();
    let mut jumps = 0;

    let start = FrameInput {
        start: true,
        ..Default::default()
    };
    game.frame(HEADLESS_DT, &start, &mut frame);

    while game.frame_count < max_frames && game.phase() == GamePhase::Playing {
        let input = FrameInput {
            jump: jumping && should_jump(&game.state),
            ..Default::default()
        };
        frame.reset();
        if game.frame(HEADLESS_DT, &input, &mut frame).jumped {
            jumps += 1;
        }
    }

    let summary = RunSummary {
        seed,
        frame_count: game.frame_count,
        frames_played: game.state.session.frames_played,
        final_score: game.state.session.score,
        phase: game.phase(),
        jumps,
        recycles: game.state.obstacles.recycled,
        game_over: game.phase() == GamePhase::GameOver,
    };
    log::info!(
        "Headless run: seed {} frames {} score {:.1} jumps {}",
        summary.seed,
        summary.frame_count,
        summary.final_score,
        summary.jumps
    );
    summary
}
