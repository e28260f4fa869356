//! Sprite batching: draw commands to textured quads
//!
//! Runs of consecutive commands on the same texture share one batch, so the
//! painter's order of the frame is preserved while keeping bind-group
//! switches to a minimum.

use glam::Vec2;

use super::draw::{Color, DrawCommand, DrawList};
use super::vertex::SpriteVertex;
use crate::assets::{TextureId, TextureSizes};
use crate::sim::Rect;

/// Vertices to draw with one texture bound
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteBatch {
    pub texture: TextureId,
    pub vertices: Vec<SpriteVertex>,
}

/// Generate the two triangles of one textured quad (pixel space, Y down)
pub fn quad(src: Rect, dest: Vec2, scale: f32, tex_size: Vec2, tint: Color) -> [SpriteVertex; 6] {
    let size = src.size() * scale;
    let (x0, y0) = (dest.x, dest.y);
    let (x1, y1) = (dest.x + size.x, dest.y + size.y);

    let u0 = src.x / tex_size.x;
    let v0 = src.y / tex_size.y;
    let u1 = src.right() / tex_size.x;
    let v1 = src.bottom() / tex_size.y;

    [
        SpriteVertex::new(x0, y0, u0, v0, tint),
        SpriteVertex::new(x0, y1, u0, v1, tint),
        SpriteVertex::new(x1, y0, u1, v0, tint),
        SpriteVertex::new(x1, y0, u1, v0, tint),
        SpriteVertex::new(x0, y1, u0, v1, tint),
        SpriteVertex::new(x1, y1, u1, v1, tint),
    ]
}

/// Convert a frame's texture commands into ordered batches
///
/// Text and clear commands are skipped; the host handles those.
pub fn build_batches(list: &DrawList, sizes: &TextureSizes) -> Vec<SpriteBatch> {
    let mut batches: Vec<SpriteBatch> = Vec::new();

    for command in &list.commands {
        let DrawCommand::Texture {
            texture,
            src,
            dest,
            scale,
            tint,
        } = command
        else {
            continue;
        };

        let size = sizes.get(*texture);
        let verts = quad(*src, *dest, *scale, Vec2::new(size.width, size.height), *tint);

        match batches.last_mut() {
            Some(batch) if batch.texture == *texture => batch.vertices.extend_from_slice(&verts),
            _ => batches.push(SpriteBatch {
                texture: *texture,
                vertices: verts.to_vec(),
            }),
        }
    }

    batches
}
