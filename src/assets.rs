//! Texture identities, asset paths and decoded sizes
//!
//! The simulation never touches pixels; it only needs each texture's
//! dimensions to derive sprite cells and layer widths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every bitmap the game loads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    Player,
    Obstacle,
    FarBuildings,
    BackBuildings,
    Foreground,
}

impl TextureId {
    pub const ALL: [TextureId; 5] = [
        TextureId::Player,
        TextureId::Obstacle,
        TextureId::FarBuildings,
        TextureId::BackBuildings,
        TextureId::Foreground,
    ];

    /// Path relative to the served/working directory
    pub fn path(&self) -> &'static str {
        match self {
            TextureId::Player => "textures/scarfy.png",
            TextureId::Obstacle => "textures/12_nebula_spritesheet.png",
            TextureId::FarBuildings => "textures/far-buildings.png",
            TextureId::BackBuildings => "textures/back-buildings.png",
            TextureId::Foreground => "textures/foreground.png",
        }
    }

    /// Dense index for fixed-size per-texture tables
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            TextureId::Player => 0,
            TextureId::Obstacle => 1,
            TextureId::FarBuildings => 2,
            TextureId::BackBuildings => 3,
            TextureId::Foreground => 4,
        }
    }
}

/// Pixel dimensions of a texture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureSize {
    pub width: f32,
    pub height: f32,
}

impl TextureSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Sizes of all loaded textures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureSizes {
    pub player: TextureSize,
    pub obstacle: TextureSize,
    pub far_buildings: TextureSize,
    pub back_buildings: TextureSize,
    pub foreground: TextureSize,
}

impl Default for TextureSizes {
    /// Dimensions of the shipped art
    fn default() -> Self {
        Self {
            player: TextureSize::new(768.0, 128.0),
            obstacle: TextureSize::new(800.0, 800.0),
            far_buildings: TextureSize::new(256.0, 192.0),
            back_buildings: TextureSize::new(256.0, 192.0),
            foreground: TextureSize::new(352.0, 192.0),
        }
    }
}

impl TextureSizes {
    pub fn get(&self, id: TextureId) -> TextureSize {
        match id {
            TextureId::Player => self.player,
            TextureId::Obstacle => self.obstacle,
            TextureId::FarBuildings => self.far_buildings,
            TextureId::BackBuildings => self.back_buildings,
            TextureId::Foreground => self.foreground,
        }
    }

    pub fn set(&mut self, id: TextureId, size: TextureSize) {
        match id {
            TextureId::Player => self.player = size,
            TextureId::Obstacle => self.obstacle = size,
            TextureId::FarBuildings => self.far_buildings = size,
            TextureId::BackBuildings => self.back_buildings = size,
            TextureId::Foreground => self.foreground = size,
        }
    }
}

/// A decoded RGBA8 bitmap ready for upload
pub struct DecodedTexture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedTexture {
    pub fn size(&self) -> TextureSize {
        TextureSize::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug)]
pub enum AssetError {
    /// The host could not deliver the file
    Fetch { id: TextureId, reason: String },
    /// The bytes were not a decodable image
    Decode { id: TextureId, source: image::ImageError },
    /// Decoded, but unusable as a sprite source
    Empty { id: TextureId },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { id, reason } => {
                write!(f, "failed to fetch {}: {reason}", id.path())
            }
            Self::Decode { id, source } => {
                write!(f, "failed to decode {}: {source}", id.path())
            }
            Self::Empty { id } => write!(f, "texture {} has zero size", id.path()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Decode PNG bytes into an RGBA8 bitmap
pub fn decode_texture(id: TextureId, bytes: &[u8]) -> Result<DecodedTexture, AssetError> {
    let image = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Decode { id, source })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Empty { id });
    }
    log::info!("Decoded {} ({}x{})", id.path(), width, height);
    Ok(DecodedTexture {
        id,
        width,
        height,
        rgba: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, id) in TextureId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_sizes_get_set() {
        let mut sizes = TextureSizes::default();
        sizes.set(TextureId::Foreground, TextureSize::new(10.0, 20.0));
        assert_eq!(sizes.get(TextureId::Foreground), TextureSize::new(10.0, 20.0));
        assert_eq!(sizes.get(TextureId::Player), TextureSize::new(768.0, 128.0));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_texture(TextureId::Player, b"not a png").err();
        assert!(matches!(err, Some(AssetError::Decode { id: TextureId::Player, .. })));
        let msg = err.map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("textures/scarfy.png"));
    }

    #[test]
    fn test_decode_png() {
        let mut bytes = Vec::new();
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]));
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode test png");

        let decoded = decode_texture(TextureId::Obstacle, &bytes).expect("decode");
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.rgba.len(), 4 * 2 * 4);
        assert_eq!(decoded.size(), TextureSize::new(4.0, 2.0));
    }
}
