//! Sprite-sheet animation driven by elapsed time
//!
//! Player and obstacles share one frame advancer. What differs is how the
//! sheet is walked, which is captured by [`FrameCycle`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// How a sprite walks its sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameCycle {
    /// One row of `frames` columns, wrapping back to column 0
    Strip { frames: u32 },
    /// Multi-row sheet: every row has `columns` frames, except rows after
    /// `short_row_after`, which loop back to the first row after
    /// `short_columns` frames.
    Sheet {
        columns: u32,
        short_row_after: u32,
        short_columns: u32,
    },
}

impl FrameCycle {
    /// Number of frames in the given row
    pub fn frames_in_row(&self, row: u32) -> u32 {
        match *self {
            FrameCycle::Strip { frames } => frames,
            FrameCycle::Sheet {
                columns,
                short_row_after,
                short_columns,
            } => {
                if row > short_row_after {
                    short_columns
                } else {
                    columns
                }
            }
        }
    }

    /// Row to continue on once `row` has run out of frames
    pub fn next_row(&self, row: u32) -> u32 {
        match *self {
            FrameCycle::Strip { .. } => 0,
            FrameCycle::Sheet {
                short_row_after, ..
            } => {
                if row > short_row_after {
                    0
                } else {
                    row + 1
                }
            }
        }
    }
}

/// One drawable, animated entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimatedSprite {
    /// Sub-rectangle of the texture currently displayed
    pub frame_rect: Rect,
    /// World-space top-left
    pub pos: Vec2,
    /// Column within the active row
    pub frame: u32,
    /// Row within the sheet (always 0 for strips)
    pub row: u32,
    /// Seconds each frame is held
    pub frame_interval: f32,
    /// Time since the last advance
    pub elapsed: f32,
    pub cycle: FrameCycle,
}

impl AnimatedSprite {
    pub fn new(cell: Vec2, pos: Vec2, frame_interval: f32, cycle: FrameCycle) -> Self {
        Self {
            frame_rect: Rect::new(0.0, 0.0, cell.x, cell.y),
            pos,
            frame: 0,
            row: 0,
            frame_interval,
            elapsed: 0.0,
            cycle,
        }
    }

    /// Size of one sheet cell
    #[inline]
    pub fn cell(&self) -> Vec2 {
        self.frame_rect.size()
    }

    /// Screen rectangle covered by the sprite
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            self.frame_rect.width,
            self.frame_rect.height,
        )
    }

    /// Accumulate `dt` and step the sheet once the hold time is reached.
    ///
    /// A frozen sprite still accumulates but never steps. Returns true when
    /// a step happened.
    pub fn advance(&mut self, dt: f32, frozen: bool) -> bool {
        self.elapsed += dt;
        if frozen || self.elapsed < self.frame_interval {
            return false;
        }

        // The rect shows the frame we are leaving the hold on
        self.frame_rect.x = self.frame as f32 * self.frame_rect.width;
        if let FrameCycle::Sheet { .. } = self.cycle {
            self.frame_rect.y = self.row as f32 * self.frame_rect.height;
        }
        self.frame += 1;

        if self.frame >= self.cycle.frames_in_row(self.row) {
            self.frame = 0;
            self.row = self.cycle.next_row(self.row);
        }

        self.elapsed = 0.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn strip() -> AnimatedSprite {
        AnimatedSprite::new(
            Vec2::new(128.0, 128.0),
            Vec2::ZERO,
            1.0 / 12.0,
            FrameCycle::Strip { frames: 6 },
        )
    }

    fn sheet() -> AnimatedSprite {
        AnimatedSprite::new(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            1.0 / 12.0,
            FrameCycle::Sheet {
                columns: 8,
                short_row_after: 6,
                short_columns: 5,
            },
        )
    }

    /// Force exactly one step
    fn step(sprite: &mut AnimatedSprite) {
        let interval = sprite.frame_interval;
        assert!(sprite.advance(interval, false));
    }

    #[test]
    fn test_holds_until_interval() {
        let mut s = strip();
        // 1/12 s = 5 frames at 60 Hz; the fifth may land a hair under due to rounding
        for _ in 0..4 {
            assert!(!s.advance(DT, false));
        }
        assert_eq!(s.frame, 0);
        assert!(s.advance(DT * 1.5, false));
        assert_eq!(s.frame, 1);
        assert_eq!(s.elapsed, 0.0);
    }

    #[test]
    fn test_frozen_accumulates_without_advancing() {
        let mut s = strip();
        for _ in 0..30 {
            assert!(!s.advance(DT, true));
        }
        assert_eq!(s.frame, 0);
        assert!((s.elapsed - 30.0 * DT).abs() < 1e-4);

        // Unfreezing advances immediately on the banked time
        assert!(s.advance(0.0, false));
        assert_eq!(s.frame, 1);
        assert_eq!(s.elapsed, 0.0);
    }

    #[test]
    fn test_strip_wraps_after_last_column() {
        let mut s = strip();
        for expected in 1..6 {
            step(&mut s);
            assert_eq!(s.frame, expected);
        }
        step(&mut s);
        assert_eq!(s.frame, 0);
        // Rect trails the index: it shows the column just left
        assert_eq!(s.frame_rect.x, 5.0 * 128.0);
        assert_eq!(s.row, 0);
    }

    #[test]
    fn test_sheet_moves_to_next_row() {
        let mut s = sheet();
        for _ in 0..8 {
            step(&mut s);
        }
        assert_eq!(s.frame, 0);
        assert_eq!(s.row, 1);
        step(&mut s);
        assert_eq!(s.frame_rect.y, 100.0);
        assert_eq!(s.frame_rect.x, 0.0);
    }

    #[test]
    fn test_sheet_short_last_row_resets() {
        let mut s = sheet();
        // Seven full rows of eight
        for _ in 0..7 * 8 {
            step(&mut s);
        }
        assert_eq!(s.row, 7);
        assert_eq!(s.frame, 0);

        for expected in 1..5 {
            step(&mut s);
            assert_eq!(s.frame, expected);
            assert_eq!(s.row, 7);
        }
        step(&mut s);
        assert_eq!(s.frame, 0);
        assert_eq!(s.row, 0);
        assert_eq!(s.frame_rect.y, 700.0);
    }

    #[test]
    fn test_frames_in_row() {
        let cycle = sheet().cycle;
        assert_eq!(cycle.frames_in_row(0), 8);
        assert_eq!(cycle.frames_in_row(6), 8);
        assert_eq!(cycle.frames_in_row(7), 5);
        assert_eq!(strip().cycle.frames_in_row(0), 6);
    }

    #[test]
    fn test_next_row() {
        let cycle = sheet().cycle;
        assert_eq!(cycle.next_row(0), 1);
        assert_eq!(cycle.next_row(6), 7);
        assert_eq!(cycle.next_row(7), 0);
        assert_eq!(strip().cycle.next_row(0), 0);
    }

    #[test]
    fn test_sheet_full_cycle_returns_to_start() {
        let mut s = sheet();
        // Seven full rows plus the short last row
        for _ in 0..(7 * 8 + 5) {
            step(&mut s);
        }
        assert_eq!((s.frame, s.row), (0, 0));
    }

    proptest! {
        #[test]
        fn prop_accumulator_monotonic_until_step(
            deltas in prop::collection::vec(0.0f32..0.05, 1..200)
        ) {
            let mut s = strip();
            for dt in deltas {
                let before = s.elapsed;
                let frame_before = s.frame;
                if s.advance(dt, false) {
                    prop_assert_eq!(s.elapsed, 0.0);
                    prop_assert_eq!(s.frame, (frame_before + 1) % 6);
                } else {
                    prop_assert!(s.elapsed >= before);
                    prop_assert_eq!(s.frame, frame_before);
                }
            }
        }

        #[test]
        fn prop_indices_stay_in_sheet(steps in 0usize..500) {
            let mut s = sheet();
            for _ in 0..steps {
                s.advance(1.0, false);
                prop_assert!(s.row <= 7);
                prop_assert!(s.frame < s.cycle.frames_in_row(s.row));
            }
        }
    }
}
