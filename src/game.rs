//! Game state aggregate and the per-tick update/render cycle.

use crate::anim::AnimationState;
use crate::audio::{AudioToggleState, MusicStream};
use crate::camera::Camera;
use crate::command::DrawCommand;
use crate::input::{InputSnapshot, InputSource, KeyBindings};
use crate::map::TileMap;
use crate::render::plan::plan_frame;
use crate::tileset::{ImageId, TilesetRegistry};
use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};
use tracing::{info, warn};

/// Where the player is drawn and how fast it walks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTransform {
    /// Top-left of the destination rectangle.
    pub position: Vec2,
    /// Destination size.
    pub size: Vec2,
    /// Pixels per tick along each held axis.
    pub speed: f32,
}

impl PlayerTransform {
    /// Destination rectangle in world space.
    #[inline]
    pub fn dest_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Move `speed` along every held direction. Axes are independent, so a
    /// diagonal covers `speed * sqrt(2)` per tick.
    pub fn integrate(&mut self, input: &InputSnapshot) {
        if input.up {
            self.position.y -= self.speed;
        }
        if input.down {
            self.position.y += self.speed;
        }
        if input.left {
            self.position.x -= self.speed;
        }
        if input.right {
            self.position.x += self.speed;
        }
    }
}

/// Player spritesheet: four frames per row, one row per facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSheet {
    /// Sheet image.
    pub image: ImageId,
    /// Size of one frame cell in pixels.
    pub frame_size: Vec2,
}

/// A whole image drawn at a fixed world position, above tiles and below
/// the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    /// Image to draw.
    pub image: ImageId,
    /// Top-left corner.
    pub position: Vec2,
}

/// Backend that turns draw commands into pixels.
pub trait Renderer {
    /// Clear the screen and enter the camera transform.
    fn begin_frame(&mut self, clear: Color, camera: &Camera);
    /// Issue one command.
    fn draw(&mut self, command: &DrawCommand);
    /// Leave the camera transform.
    fn end_frame(&mut self);
}

/// All mutable game state, owned by the loop and updated once per tick.
#[derive(Debug, Clone)]
pub struct GameState {
    /// World grid.
    pub map: TileMap,
    /// Tilesets referenced by the map.
    pub tilesets: TilesetRegistry,
    /// Player placement.
    pub player: PlayerTransform,
    /// Player sprite source.
    pub player_sheet: PlayerSheet,
    /// Walk/idle cycle.
    pub animation: AnimationState,
    /// Follow camera.
    pub camera: Camera,
    /// Desired music state.
    pub audio: AudioToggleState,
    /// Static images.
    pub decorations: Vec<Decoration>,
    /// Clear color.
    pub background: Color,
    /// Key mapping.
    pub bindings: KeyBindings,
    /// Cleared when the platform asks to quit.
    pub running: bool,
}

impl GameState {
    /// Fresh state with the camera aimed at the player's spawn point.
    pub fn new(
        map: TileMap,
        tilesets: TilesetRegistry,
        player: PlayerTransform,
        player_sheet: PlayerSheet,
        screen: Vec2,
    ) -> Self {
        let unknown = tilesets.unknown_keys(map.tileset_keys().iter().map(String::as_str));
        if !unknown.is_empty() {
            warn!(
                keys = ?unknown,
                default = tilesets.default_key(),
                "map uses unregistered tileset keys, drawing them with the default tileset"
            );
        }
        info!(
            width = map.width(),
            height = map.height(),
            tiles = map.non_empty_count(),
            "world ready"
        );

        Self {
            camera: Camera::new(screen, player.position),
            map,
            tilesets,
            player,
            player_sheet,
            animation: AnimationState::new(),
            audio: AudioToggleState::default(),
            decorations: Vec::new(),
            background: Color::from_rgba(147, 211, 196, 255),
            bindings: KeyBindings::default(),
            running: true,
        }
    }

    /// Replace the static images.
    pub fn with_decorations(mut self, decorations: Vec<Decoration>) -> Self {
        self.decorations = decorations;
        self
    }

    /// Replace the clear color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Simulation half of a tick: animation, movement, camera, audio toggle.
    pub fn tick(&mut self, input: &InputSnapshot) {
        self.animation.step(input);
        self.player.integrate(input);
        self.camera.track(self.player.position, self.player.size);
        if input.toggle_audio {
            self.audio.toggle();
        }
    }

    /// Draw commands for the current state.
    pub fn frame(&self) -> Vec<DrawCommand> {
        plan_frame(self)
    }
}

/// One full tick: sample input, update, push audio state, render.
pub fn run_tick(
    state: &mut GameState,
    input: &impl InputSource,
    music: &mut dyn MusicStream,
    renderer: &mut impl Renderer,
) {
    let snapshot = InputSnapshot::sample(input, &state.bindings);
    state.running = !input.quit_requested();

    state.tick(&snapshot);
    state.audio.apply(music);

    renderer.begin_frame(state.background, &state.camera);
    for cmd in state.frame() {
        renderer.draw(&cmd);
    }
    renderer.end_frame();
}
