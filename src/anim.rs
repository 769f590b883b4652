//! Player sprite walk/idle animation.

use crate::input::InputSnapshot;
use macroquad::math::{Rect, Vec2};

/// Ticks between frame advances while walking.
pub const WALK_FRAME_TICKS: u32 = 8;
/// Ticks between frame advances while standing.
pub const IDLE_FRAME_TICKS: u32 = 45;
/// Idle frames advance on this phase of the idle cadence, one tick after the
/// walking cadence would.
pub const IDLE_FRAME_PHASE: u32 = 1;

const LAST_WALK_FRAME: u8 = 3;
const LAST_IDLE_FRAME: u8 = 1;

/// Facing of the player sprite. Each direction is one row of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Row 0.
    #[default]
    Down,
    /// Row 1.
    Up,
    /// Row 2.
    Left,
    /// Row 3.
    Right,
}

impl Direction {
    /// Spritesheet row for this facing.
    #[inline]
    pub const fn row(self) -> u32 {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// The cell of the spritesheet to show this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    /// Column, `0..=3`.
    pub frame_index: u8,
    /// Row selector.
    pub direction: Direction,
}

impl SpriteFrame {
    /// Pixel rectangle of this frame in a sheet of `frame_size` cells.
    pub fn source_rect(self, frame_size: Vec2) -> Rect {
        Rect::new(
            frame_size.x * self.frame_index as f32,
            frame_size.y * self.direction.row() as f32,
            frame_size.x,
            frame_size.y,
        )
    }
}

/// Walk/idle cycle of the player sprite.
///
/// Walking cycles through frames 0..=3, idling only through 0..=1. The
/// frame counter keeps running in both states, so the two cadences share a
/// clock and the idle phase is offset by one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationState {
    moving: bool,
    direction: Direction,
    frame_counter: u32,
    frame_index: u8,
}

impl AnimationState {
    /// Standing, facing down, frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick from this tick's input sample.
    pub fn step(&mut self, input: &InputSnapshot) {
        match input.facing() {
            Some(direction) => {
                self.moving = true;
                self.direction = direction;
                if self.frame_counter % WALK_FRAME_TICKS == 0 {
                    self.frame_index += 1;
                }
            }
            None => {
                self.moving = false;
                if self.frame_counter % IDLE_FRAME_TICKS == IDLE_FRAME_PHASE {
                    self.frame_index += 1;
                }
            }
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);

        if self.frame_index > LAST_WALK_FRAME {
            self.frame_index = 0;
        }
        if !self.moving && self.frame_index > LAST_IDLE_FRAME {
            self.frame_index = 0;
        }
    }

    /// Whether any direction was held on the last tick.
    pub fn moving(&self) -> bool {
        self.moving
    }

    /// Current facing; kept while idle.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ticks seen so far (wrapping).
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Current column.
    pub fn frame_index(&self) -> u8 {
        self.frame_index
    }

    /// Frame to draw.
    pub fn sprite_frame(&self) -> SpriteFrame {
        SpriteFrame {
            frame_index: self.frame_index,
            direction: self.direction,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_counter(frame_counter: u32) -> Self {
        Self {
            frame_counter,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn held(up: bool, down: bool, left: bool, right: bool) -> InputSnapshot {
        InputSnapshot {
            up,
            down,
            left,
            right,
            toggle_audio: false,
        }
    }

    #[test]
    fn rows_follow_sheet_layout() {
        assert_eq!(Direction::Down.row(), 0);
        assert_eq!(Direction::Up.row(), 1);
        assert_eq!(Direction::Left.row(), 2);
        assert_eq!(Direction::Right.row(), 3);
    }

    #[test]
    fn holding_down_sixteen_ticks_advances_twice() {
        let mut anim = AnimationState::new();
        let down = held(false, true, false, false);
        let mut advances = 0;
        let mut last = anim.frame_index();

        for _ in 0..16 {
            anim.step(&down);
            if anim.frame_index() != last {
                advances += 1;
                last = anim.frame_index();
            }
            assert_eq!(anim.direction(), Direction::Down);
            assert!(anim.moving());
        }

        assert_eq!(advances, 2);
        assert_eq!(anim.frame_index(), 2);
        assert_eq!(anim.frame_counter(), 16);
    }

    #[test]
    fn walking_wraps_after_frame_three() {
        let mut anim = AnimationState::new();
        let right = held(false, false, false, true);
        let mut seen = Vec::new();
        for _ in 0..(WALK_FRAME_TICKS * 4) {
            anim.step(&right);
            seen.push(anim.frame_index());
        }
        assert!(seen.iter().all(|&f| f <= 3));
        assert!(seen.contains(&3));
        // the fourth advance wraps back to the first frame
        assert_eq!(*seen.last().unwrap(), 0);
    }

    #[test]
    fn idle_only_shows_first_two_frames() {
        let mut anim = AnimationState::new();
        let none = InputSnapshot::default();
        let mut seen = [false; 4];
        for _ in 0..(IDLE_FRAME_TICKS * 10) {
            anim.step(&none);
            seen[anim.frame_index() as usize] = true;
            assert!(!anim.moving());
        }
        assert!(seen[0] && seen[1]);
        assert!(!seen[2] && !seen[3]);
    }

    #[test]
    fn idle_advances_on_phase_one() {
        let none = InputSnapshot::default();

        let mut at_zero = AnimationState::with_counter(IDLE_FRAME_TICKS);
        at_zero.step(&none);
        assert_eq!(at_zero.frame_index(), 0);

        let mut at_one = AnimationState::with_counter(IDLE_FRAME_TICKS + 1);
        at_one.step(&none);
        assert_eq!(at_one.frame_index(), 1);
    }

    #[test]
    fn stopping_on_a_walk_frame_resets_to_zero() {
        let mut anim = AnimationState::new();
        let left = held(false, false, true, false);
        for _ in 0..(WALK_FRAME_TICKS * 2 + 1) {
            anim.step(&left);
        }
        assert!(anim.frame_index() > 1);

        anim.step(&InputSnapshot::default());
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.direction(), Direction::Left);
    }

    #[test]
    fn later_flags_win_the_facing() {
        let mut anim = AnimationState::new();
        anim.step(&held(true, true, false, false));
        assert_eq!(anim.direction(), Direction::Down);
        anim.step(&held(true, false, true, false));
        assert_eq!(anim.direction(), Direction::Left);
        anim.step(&held(true, true, true, true));
        assert_eq!(anim.direction(), Direction::Right);
        anim.step(&held(true, false, false, false));
        assert_eq!(anim.direction(), Direction::Up);
    }

    #[test]
    fn counter_wraps_instead_of_overflowing() {
        let mut anim = AnimationState::with_counter(u32::MAX);
        anim.step(&InputSnapshot::default());
        assert_eq!(anim.frame_counter(), 0);
    }

    #[test]
    fn source_rect_uses_frame_and_row() {
        let frame = SpriteFrame {
            frame_index: 2,
            direction: Direction::Left,
        };
        assert_eq!(
            frame.source_rect(vec2(48.0, 48.0)),
            Rect::new(96.0, 96.0, 48.0, 48.0)
        );
    }
}
