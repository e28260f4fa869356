//! Draw commands issued by the game each frame
//!
//! The game never talks to the GPU directly; it describes a frame through
//! [`DrawTarget`]. [`DrawList`] records those calls so the GPU renderer, the
//! DOM overlay and tests can all consume the same frame.

use glam::Vec2;

use crate::assets::TextureId;
use crate::sim::Rect;

/// RGBA, 0-1
pub type Color = [f32; 4];

/// Colors used by the game
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    /// Player tint after a hit
    pub const RED: Color = [0.9, 0.16, 0.22, 1.0];
    pub const CLEAR: Color = WHITE;
}

/// Something a frame can be drawn into
pub trait DrawTarget {
    fn clear(&mut self, color: Color);

    /// Draw the `src` region of a texture with its top-left at `dest`
    fn draw_texture(&mut self, texture: TextureId, src: Rect, dest: Vec2, scale: f32, tint: Color);

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Texture {
        texture: TextureId,
        src: Rect,
        dest: Vec2,
        scale: f32,
        tint: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Ordered recording of a frame's draw calls
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Color of the most recent clear, if any
    pub fn clear_color(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            _ => None,
        })
    }

    pub fn textures(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Texture { .. }))
    }
}

impl DrawTarget for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_texture(&mut self, texture: TextureId, src: Rect, dest: Vec2, scale: f32, tint: Color) {
        self.commands.push(DrawCommand::Texture {
            texture,
            src,
            dest,
            scale,
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
