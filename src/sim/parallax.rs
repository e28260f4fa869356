//! Parallax background: three strips scrolling at different rates
//!
//! Each strip is drawn twice, side by side, and snapped back to 0 once the
//! first copy has fully left the screen.

use serde::{Deserialize, Serialize};

use crate::assets::{TextureId, TextureSizes};
use crate::consts::*;

/// One horizontally looping background strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollLayer {
    pub texture: TextureId,
    /// Current left edge (always in `(-width, 0]`)
    pub offset_x: f32,
    /// Base scroll rate (pixels/s)
    pub speed: f32,
    /// Scaled on-screen width of one copy
    pub width: f32,
    pub scale: f32,
}

impl ScrollLayer {
    pub fn new(texture: TextureId, texture_width: f32, speed: f32, scale: f32) -> Self {
        Self {
            texture,
            offset_x: 0.0,
            speed,
            width: texture_width * scale,
            scale,
        }
    }

    pub fn scroll(&mut self, multiplier: f32, dt: f32) {
        self.offset_x -= self.speed * multiplier * dt;
        if self.offset_x <= -self.width {
            self.offset_x = 0.0;
        }
    }

    /// X positions of the two copies
    pub fn copies(&self) -> [f32; 2] {
        [self.offset_x, self.offset_x + self.width]
    }
}

/// Far, back and foreground layers, in draw order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parallax {
    pub layers: [ScrollLayer; 3],
}

impl Parallax {
    pub fn new(sizes: &TextureSizes) -> Self {
        Self {
            layers: [
                ScrollLayer::new(
                    TextureId::FarBuildings,
                    sizes.far_buildings.width,
                    FAR_SCROLL_RATE,
                    BACKGROUND_SCALE,
                ),
                ScrollLayer::new(
                    TextureId::BackBuildings,
                    sizes.back_buildings.width,
                    BACK_SCROLL_RATE,
                    BACKGROUND_SCALE,
                ),
                ScrollLayer::new(
                    TextureId::Foreground,
                    sizes.foreground.width,
                    FOREGROUND_SCROLL_RATE,
                    BACKGROUND_SCALE,
                ),
            ],
        }
    }

    pub fn scroll(&mut self, multiplier: f32, dt: f32) {
        for layer in &mut self.layers {
            layer.scroll(multiplier, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layers_ordered_far_to_near() {
        let p = Parallax::new(&TextureSizes::default());
        assert!(p.layers[0].speed < p.layers[1].speed);
        assert!(p.layers[1].speed < p.layers[2].speed);
        assert_eq!(p.layers[0].width, 256.0 * 6.0);
        assert_eq!(p.layers[2].width, 352.0 * 6.0);
    }

    #[test]
    fn test_scroll_and_copies() {
        let mut layer = ScrollLayer::new(TextureId::Foreground, 100.0, 80.0, 6.0);
        layer.scroll(1.0, 0.5);
        assert_eq!(layer.offset_x, -40.0);
        assert_eq!(layer.copies(), [-40.0, 560.0]);
        layer.scroll(2.0, 0.5);
        assert_eq!(layer.offset_x, -120.0);
    }

    #[test]
    fn test_wraps_to_exactly_zero() {
        let mut layer = ScrollLayer::new(TextureId::FarBuildings, 10.0, 20.0, 6.0);
        layer.offset_x = -59.0;
        layer.scroll(1.0, 0.05);
        assert_eq!(layer.offset_x, 0.0);

        // Landing exactly on the threshold also wraps
        layer.offset_x = -50.0;
        layer.scroll(1.0, 0.5);
        assert_eq!(layer.offset_x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_in_range(
            multiplier in 1.0f32..5.0,
            dts in prop::collection::vec(0.0f32..0.1, 1..500),
        ) {
            let mut p = Parallax::new(&TextureSizes::default());
            for dt in dts {
                p.scroll(multiplier, dt);
                for layer in &p.layers {
                    prop_assert!(layer.offset_x <= 0.0);
                    prop_assert!(layer.offset_x > -layer.width);
                }
            }
        }
    }
}
