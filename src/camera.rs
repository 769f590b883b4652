//! Follow camera.

use macroquad::math::{vec2, Rect, Vec2};

/// Point the camera tracks for a player drawn at `position` with `size`.
///
/// This is the top-left corner minus half the sprite, not the sprite's
/// center. The player sprite is anchored at its bottom-right corner, so the
/// two offsets cancel on screen.
#[inline]
pub fn focus(position: Vec2, size: Vec2) -> Vec2 {
    vec2(position.x - size.x / 2.0, position.y - size.y / 2.0)
}

/// 2D camera: world `target` shown at screen-space `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World point placed at `offset`.
    pub target: Vec2,
    /// Screen anchor, the screen center.
    pub offset: Vec2,
    /// Scale, fixed at 1.0.
    pub zoom: f32,
}

impl Camera {
    /// Camera anchored at the center of a `screen`-sized window.
    pub fn new(screen: Vec2, target: Vec2) -> Self {
        Self {
            target,
            offset: screen / 2.0,
            zoom: 1.0,
        }
    }

    /// Re-aim at the player.
    pub fn track(&mut self, position: Vec2, size: Vec2) {
        self.target = focus(position, size);
    }

    /// World rectangle visible through a `screen`-sized window.
    pub fn visible_rect(&self, screen: Vec2) -> Rect {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        let top_left = self.target - self.offset / zoom;
        let size = screen / zoom;
        Rect::new(top_left.x, top_left.y, size.x, size.y)
    }
}
