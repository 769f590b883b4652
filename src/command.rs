use crate::tileset::ImageId;
use macroquad::math::{Rect, Vec2};

/// One draw call the core asks the rendering backend to issue, in world
/// coordinates (inside the camera transform).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Draw `source` of `image` stretched into `dest`, rotated by
    /// `rotation` degrees around `origin` (relative to `dest`'s top-left,
    /// which is also shifted back by `origin`).
    Region {
        /// Source image.
        image: ImageId,
        /// Sub-rectangle of the image, in pixels.
        source: Rect,
        /// Destination rectangle.
        dest: Rect,
        /// Anchor inside `dest`.
        origin: Vec2,
        /// Degrees.
        rotation: f32,
    },
    /// Draw a whole image unscaled with its top-left at `position`.
    Texture {
        /// Source image.
        image: ImageId,
        /// Top-left corner.
        position: Vec2,
    },
}

impl DrawCommand {
    /// Image referenced by the command.
    pub fn image(&self) -> ImageId {
        match self {
            DrawCommand::Region { image, .. } | DrawCommand::Texture { image, .. } => *image,
        }
    }
}
