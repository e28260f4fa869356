//! Frame composition: turns the game state into draw calls

use glam::Vec2;

use super::draw::{DrawTarget, colors};
use crate::assets::TextureId;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};

pub const START_PROMPT: &str = "Press ENTER to start...";
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Emit one full frame for the current state
pub fn compose(state: &GameState, target: &mut impl DrawTarget) {
    target.clear(colors::CLEAR);

    draw_background(state, target);

    let hud = Vec2::new(HUD_X, HUD_Y);
    match state.phase() {
        GamePhase::Playing => {
            target.draw_text(
                &state.session.score_label(),
                hud,
                HUD_FONT_SIZE,
                colors::WHITE,
            );
            draw_actors(state, target);
        }
        GamePhase::Idle => {
            draw_actors(state, target);
            target.draw_text(
                START_PROMPT,
                Vec2::new(PROMPT_X, HUD_Y),
                PROMPT_FONT_SIZE,
                colors::WHITE,
            );
        }
        GamePhase::GameOver => {
            draw_actors(state, target);
            target.draw_text(GAME_OVER_TEXT, hud, HUD_FONT_SIZE, colors::WHITE);
            target.draw_text(
                &state.session.score_label(),
                Vec2::new(HUD_X, FINAL_SCORE_Y),
                HUD_FONT_SIZE,
                colors::WHITE,
            );
        }
    }
}

/// Each layer twice, side by side, far to near
fn draw_background(state: &GameState, target: &mut impl DrawTarget) {
    for layer in &state.parallax.layers {
        let size = state.sizes.get(layer.texture);
        let src = Rect::new(0.0, 0.0, size.width, size.height);
        for x in layer.copies() {
            target.draw_texture(layer.texture, src, Vec2::new(x, 0.0), layer.scale, colors::WHITE);
        }
    }
}

fn draw_actors(state: &GameState, target: &mut impl DrawTarget) {
    let player = &state.player.sprite;
    let tint = if state.session.collided {
        colors::RED
    } else {
        colors::WHITE
    };
    target.draw_texture(
        TextureId::Player,
        player.frame_rect,
        player.pos,
        1.0,
        tint,
    );

    for obstacle in state.obstacles.iter() {
        target.draw_texture(
            TextureId::Obstacle,
            obstacle.sprite.frame_rect,
            obstacle.sprite.pos,
            1.0,
            colors::WHITE,
        );
    }
}
