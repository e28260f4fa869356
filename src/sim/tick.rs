//! Per-frame simulation tick
//!
//! Advances the game by one rendered frame of `dt` seconds.

use super::collision::first_hit;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input events for a single frame (one-shot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key pressed this frame
    pub jump: bool,
    /// Start key pressed this frame
    pub start: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub jumped: bool,
    /// Slot of the obstacle that ended the run
    pub hit: Option<usize>,
    pub started: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickEvents {
    let mut events = TickEvents::default();

    if state.session.phase == GamePhase::Playing {
        events.jumped = state.player.step(input.jump, dt);

        // No running animation mid-air
        let airborne = state.player.airborne;
        state.player.sprite.advance(dt, airborne);

        state
            .obstacles
            .update(state.session.obstacle_speed_multiplier, dt);
        state.parallax.scroll(state.session.scroll_multiplier, dt);

        let player_rect = state.player.sprite.bounds();
        events.hit = first_hit(&player_rect, state.obstacles.bounds(), HITBOX_PADDING);

        // The collision frame itself still counts as played
        state.session.accrue();

        if let Some(slot) = events.hit {
            state.session.collided = true;
            state.session.phase = GamePhase::GameOver;
            log::info!(
                "Hit obstacle {} after {} frames, final score {:.1}",
                slot,
                state.session.frames_played,
                state.session.score
            );
        }

        log::trace!(
            "y={:.1} v={:.1} score={:.2}",
            state.player.sprite.pos.y,
            state.player.velocity,
            state.session.score
        );
    }

    if input.start && state.session.phase == GamePhase::Idle {
        state.session.phase = GamePhase::Playing;
        events.started = true;
        log::info!("Run started (seed {})", state.seed);
    }

    events
}
