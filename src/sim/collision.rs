//! Axis-aligned rectangle collision
//!
//! Obstacles are round nebulas drawn inside square cells, so their hitbox is
//! the cell inset on every edge. The player keeps its full cell.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, Y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink every edge by `pad`
    pub fn inset(&self, pad: f32) -> Rect {
        Rect::new(
            self.x + pad,
            self.y + pad,
            self.width - 2.0 * pad,
            self.height - 2.0 * pad,
        )
    }

    /// Strict overlap test: touching edges do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Index of the first obstacle whose padded hitbox overlaps the player
///
/// Every obstacle is tested; the result only records the first hit.
pub fn first_hit(
    player: &Rect,
    obstacles: impl IntoIterator<Item = Rect>,
    pad: f32,
) -> Option<usize> {
    let mut hit = None;
    for (i, obstacle) in obstacles.into_iter().enumerate() {
        if hit.is_none() && obstacle.inset(pad).overlaps(player) {
            hit = Some(i);
        }
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        // Shared edge is not a hit
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Containment is
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(100.0, 200.0, 100.0, 100.0).inset(40.0);
        assert_eq!(r, Rect::new(140.0, 240.0, 20.0, 20.0));
    }

    #[test]
    fn test_padding_forgives_corner_graze() {
        let player = Rect::new(576.0, 592.0, 128.0, 128.0);
        // Obstacle cell overlaps the player by 30px horizontally
        let obstacle = Rect::new(576.0 + 128.0 - 30.0, 620.0, 100.0, 100.0);
        assert!(obstacle.overlaps(&player));
        assert!(!obstacle.inset(40.0).overlaps(&player));
        assert_eq!(first_hit(&player, [obstacle], 40.0), None);
    }

    #[test]
    fn test_first_hit_reports_earliest() {
        let player = Rect::new(0.0, 0.0, 100.0, 100.0);
        let miss = Rect::new(500.0, 0.0, 100.0, 100.0);
        let hit = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(first_hit(&player, [miss, hit, hit], 40.0), Some(1));
        assert_eq!(first_hit(&player, [miss, miss], 40.0), None);
    }
}
