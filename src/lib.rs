#![warn(missing_docs)]

//! Tiny tile-world walker on Macroquad: text tile maps, an animated player
//! sprite, a follow camera and pausable background music.

pub mod anim;
pub mod audio;
pub mod backend;
mod bootstrap;
pub mod camera;
mod command;
pub mod config;
mod error;
pub mod game;
pub mod input;
mod loader {
    pub mod text_loader;
}
mod map;
mod pacer;
mod render {
    pub mod plan;
}
mod tileset;

pub use anim::{AnimationState, Direction, SpriteFrame};
pub use audio::{AudioToggleState, MusicStream, SilentMusic};
pub use bootstrap::AssetPlan;
pub use camera::{focus, Camera};
pub use command::DrawCommand;
pub use config::GameConfig;
pub use error::{ConfigError, MapError};
pub use game::{run_tick, Decoration, GameState, PlayerSheet, PlayerTransform, Renderer};
pub use input::{InputSnapshot, InputSource, KeyBindings};
pub use loader::text_loader::{decode_map_text, load_map_file};
pub use map::TileMap;
pub use pacer::FramePacer;
pub use render::plan::{plan_frame, plan_tiles};
pub use tileset::{ImageCatalog, ImageId, Tileset, TilesetRegistry};
