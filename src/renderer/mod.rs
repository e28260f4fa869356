//! Rendering module
//!
//! The game describes each frame as draw calls; the WebGPU pipeline turns
//! texture calls into batched sprite quads.

pub mod draw;
pub mod pipeline;
pub mod scene;
pub mod sprites;
pub mod texture;
pub mod vertex;

pub use draw::{Color, DrawCommand, DrawList, DrawTarget, colors};
pub use pipeline::SpriteRenderState;
pub use scene::compose;
pub use sprites::{SpriteBatch, build_batches};
