//! Per-frame orchestration
//!
//! One [`Game::frame`] call is one trip around the main loop: simulate with
//! the host's delta and input, then describe the frame to a draw target.

use crate::assets::TextureSizes;
use crate::consts::MAX_FRAME_DT;
use crate::renderer::{DrawTarget, compose};
use crate::sim::{GamePhase, GameState, TickEvents, TickInput, tick};

/// Input gathered by the host since the last frame
pub type FrameInput = TickInput;

/// Fold a key press into this frame's input.
///
/// Jump and start are one-shot presses, so auto-repeat events from a held
/// key are ignored. Returns true when the key is bound.
pub fn key_input(key: &str, repeat: bool, input: &mut FrameInput) -> bool {
    let bound = matches!(key, " " | "Enter");
    if repeat {
        return bound;
    }
    match key {
        " " => input.jump = true,
        "Enter" => input.start = true,
        _ => {}
    }
    bound
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    /// Frames run since startup, in any phase
    pub frame_count: u64,
    last_phase: GamePhase,
}

impl Game {
    pub fn new(seed: u64, sizes: TextureSizes) -> Self {
        let state = GameState::new(seed, sizes);
        let last_phase = state.phase();
        Self {
            state,
            frame_count: 0,
            last_phase,
        }
    }

    /// Simulate one frame and draw it
    pub fn frame(
        &mut self,
        dt: f32,
        input: &FrameInput,
        target: &mut impl DrawTarget,
    ) -> TickEvents {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let events = tick(&mut self.state, input, dt);
        compose(&self.state, target);

        self.frame_count += 1;
        let phase = self.state.phase();
        if phase != self.last_phase {
            log::info!(
                "Phase {:?} -> {:?} at frame {}",
                self.last_phase,
                phase,
                self.frame_count
            );
            self.last_phase = phase;
        }

        events
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::{DrawCommand, DrawList, colors};
    use crate::renderer::scene::{GAME_OVER_TEXT, START_PROMPT};

    const DT: f32 = 1.0 / 60.0;

    fn start() -> FrameInput {
        FrameInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_key_input_maps_bound_keys() {
        let mut input = FrameInput::default();
        assert!(key_input(" ", false, &mut input));
        assert!(input.jump);
        assert!(!input.start);

        let mut input = FrameInput::default();
        assert!(key_input("Enter", false, &mut input));
        assert!(input.start);

        let mut input = FrameInput::default();
        assert!(!key_input("a", false, &mut input));
        assert_eq!(input, FrameInput::default());
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut input = FrameInput::default();
        assert!(key_input(" ", true, &mut input));
        assert!(key_input("Enter", true, &mut input));
        assert_eq!(input, FrameInput::default());
    }

    #[test]
    fn test_held_jump_key_does_not_rejump_on_landing() {
        let mut game = Game::new(5, TextureSizes::default());
        let mut list = DrawList::new();
        game.frame(DT, &start(), &mut list);

        // First press, then the browser's auto-repeat for the rest of the hold
        let mut jumps = 0;
        for i in 0..150 {
            let mut input = FrameInput::default();
            key_input(" ", i > 0, &mut input);
            list.reset();
            if game.frame(DT, &input, &mut list).jumped {
                jumps += 1;
            }
        }
        assert_eq!(jumps, 1);
        assert!(!game.state.player.airborne);
    }

    #[test]
    fn test_start_moves_to_playing() {
        let mut game = Game::new(5, TextureSizes::default());
        let mut list = DrawList::new();

        game.frame(DT, &FrameInput::default(), &mut list);
        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(list.texts().any(|t| t == START_PROMPT));

        list.reset();
        let events = game.frame(DT, &start(), &mut list);
        assert!(events.started);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(list.texts().any(|t| t.starts_with("Score:")));
    }

    #[test]
    fn test_score_tracks_frames_played() {
        let mut game = Game::new(5, TextureSizes::default());
        let mut list = DrawList::new();
        game.frame(DT, &start(), &mut list);

        // The first obstacle needs about three seconds to reach the runner
        let frames = 150;
        for _ in 0..frames {
            list.reset();
            game.frame(DT, &FrameInput::default(), &mut list);
        }
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!((game.state.session.score - SCORE_STEP * frames as f32).abs() < 1e-3);
        assert_eq!(game.state.session.frames_played, frames);
    }

    #[test]
    fn test_overlap_ends_run_and_freezes() {
        let mut game = Game::new(5, TextureSizes::default());
        let mut list = DrawList::new();
        game.frame(DT, &start(), &mut list);
        for _ in 0..10 {
            game.frame(DT, &FrameInput::default(), &mut list);
        }

        let player = game.state.player.sprite.pos;
        game.state.obstacles.obstacles[0].sprite.pos = player;
        list.reset();
        let events = game.frame(DT, &FrameInput::default(), &mut list);
        assert_eq!(events.hit, Some(0));
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(list.texts().any(|t| t == GAME_OVER_TEXT));

        let frozen = game.state.session.clone();
        for _ in 0..100 {
            list.reset();
            game.frame(DT, &start(), &mut list);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.state.session.score, frozen.score);
        assert_eq!(game.state.session.scroll_multiplier, frozen.scroll_multiplier);
        assert_eq!(
            game.state.session.obstacle_speed_multiplier,
            frozen.obstacle_speed_multiplier
        );
        // Still drawing the static scene with the red runner
        assert!(list.textures().any(|c| matches!(
            c,
            DrawCommand::Texture { tint, .. } if *tint == colors::RED
        )));
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut game = Game::new(5, TextureSizes::default());
        let mut list = DrawList::new();
        game.frame(DT, &start(), &mut list);
        game.frame(5.0, &FrameInput::default(), &mut list);
        let x = game.state.obstacles.obstacles[0].sprite.pos.x;
        assert!((x - (WINDOW_WIDTH + OBSTACLE_VELOCITY * MAX_FRAME_DT)).abs() < 1e-3);
    }

    #[test]
    fn test_jumping_clears_an_obstacle() {
        let mut game = Game::new(5, TextureSizes::default());
        let mut list = DrawList::new();
        game.frame(DT, &start(), &mut list);

        // Jump when the nearest obstacle is about to reach the runner
        let runner_x = game.state.player.sprite.pos.x;
        let mut passed = false;
        for _ in 0..600 {
            let near = game
                .state
                .obstacles
                .iter()
                .any(|o| o.sprite.pos.x > runner_x && o.sprite.pos.x - runner_x < 140.0);
            let input = FrameInput {
                jump: near,
                ..Default::default()
            };
            list.reset();
            game.frame(DT, &input, &mut list);
            if game.state.obstacles.obstacles[0].sprite.pos.x < runner_x - 200.0 {
                passed = true;
                break;
            }
        }
        assert!(passed);
        assert_eq!(game.phase(), GamePhase::Playing);
    }
}
