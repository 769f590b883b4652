//! Macroquad input, texture loading and drawing.

use crate::camera::Camera;
use crate::command::DrawCommand;
use crate::game::Renderer;
use crate::input::InputSource;
use crate::tileset::ImageCatalog;
use anyhow::Context;
use macroquad::prelude::*;

/// Keyboard and window-close state straight from macroquad.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadInput;

impl MacroquadInput {
    /// Take over the window close button so the loop can shut down
    /// cleanly instead of macroquad exiting the process.
    pub fn install() -> Self {
        prevent_quit();
        Self
    }
}

impl InputSource for MacroquadInput {
    fn is_down(&self, key: KeyCode) -> bool {
        is_key_down(key)
    }

    fn is_pressed(&self, key: KeyCode) -> bool {
        is_key_pressed(key)
    }

    fn quit_requested(&self) -> bool {
        is_quit_requested()
    }
}

/// Load every catalog image, in order, with nearest filtering.
pub async fn load_textures(catalog: &ImageCatalog) -> anyhow::Result<Vec<Texture2D>> {
    let mut textures = Vec::with_capacity(catalog.len());
    for path in catalog.paths() {
        let tex: Texture2D = load_texture(path)
            .await
            .with_context(|| format!("Loading texture {}", path))?;
        tex.set_filter(FilterMode::Nearest);
        textures.push(tex);
    }
    Ok(textures)
}

/// Pixel sizes of loaded textures, indexed like the catalog.
pub fn texture_sizes(textures: &[Texture2D]) -> Vec<(u32, u32)> {
    textures
        .iter()
        .map(|t| (t.width() as u32, t.height() as u32))
        .collect()
}

/// Draws commands with macroquad inside a [`Camera2D`] built from the
/// game's [`Camera`].
pub struct MacroquadRenderer {
    textures: Vec<Texture2D>,
    screen: Vec2,
}

impl MacroquadRenderer {
    /// Renderer over textures loaded by [`load_textures`].
    pub fn new(textures: Vec<Texture2D>, screen: Vec2) -> Self {
        Self { textures, screen }
    }
}

fn to_camera2d(camera: &Camera, screen: Vec2) -> Camera2D {
    let view = camera.visible_rect(screen);
    // positive zoom keeps y pointing down when drawing to the screen
    Camera2D {
        target: view.center(),
        zoom: vec2(2.0 / view.w, 2.0 / view.h),
        ..Default::default()
    }
}

impl Renderer for MacroquadRenderer {
    fn begin_frame(&mut self, clear: Color, camera: &Camera) {
        clear_background(clear);
        set_camera(&to_camera2d(camera, self.screen));
    }

    fn draw(&mut self, command: &DrawCommand) {
        let Some(tex) = self.textures.get(command.image().0) else {
            return;
        };
        match *command {
            DrawCommand::Region {
                source,
                dest,
                origin,
                rotation,
                ..
            } => {
                draw_texture_ex(
                    tex,
                    dest.x - origin.x,
                    dest.y - origin.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(dest.size()),
                        source: Some(source),
                        rotation: rotation.to_radians(),
                        pivot: Some(vec2(dest.x, dest.y)),
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Texture { position, .. } => {
                draw_texture(tex, position.x, position.y, WHITE);
            }
        }
    }

    fn end_frame(&mut self) {
        set_default_camera();
    }
}
