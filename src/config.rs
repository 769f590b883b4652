//! JSON configuration.
//!
//! Read from `tilewalk.json` next to the working directory, or from the
//! path in `TILEWALK_CONFIG`. Every field has a default, so a missing file
//! or a partial one is fine.

use crate::error::ConfigError;
use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Env var overriding the config location.
pub const CONFIG_ENV_VAR: &str = "TILEWALK_CONFIG";
/// Config location when the env var is unset.
pub const DEFAULT_CONFIG_PATH: &str = "tilewalk.json";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Window and pacing.
    pub window: WindowConfig,
    /// Map file and cell size.
    pub map: MapConfig,
    /// Tileset images by map key.
    pub tilesets: TilesetsConfig,
    /// Player sprite and movement.
    pub player: PlayerConfig,
    /// Background music file; `null` disables music.
    pub music: MusicConfig,
    /// Extra images drawn over the tiles.
    pub decorations: Vec<DecorationConfig>,
}

/// Window and pacing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    /// Title bar text.
    #[serde(default = "default_title")]
    pub title: String,
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Fixed simulation and render rate.
    #[serde(default = "default_tps")]
    pub ticks_per_second: u32,
    /// RGBA clear color.
    #[serde(default = "default_background")]
    pub background: [u8; 4],
}

fn default_title() -> String {
    "Funny Game Stuff".into()
}
fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    480
}
fn default_tps() -> u32 {
    60
}
fn default_background() -> [u8; 4] {
    [147, 211, 196, 255]
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            ticks_per_second: default_tps(),
            background: default_background(),
        }
    }
}

impl WindowConfig {
    /// Window size as a vector.
    pub fn screen_size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    /// Clear color.
    pub fn background_color(&self) -> Color {
        let [r, g, b, a] = self.background;
        Color::from_rgba(r, g, b, a)
    }
}

/// Map file and cell size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Text map path.
    pub path: PathBuf,
    /// Side of a tile cell, shared by all tilesets.
    pub tile_size: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/map.txt"),
            tile_size: 16,
        }
    }
}

/// Tileset images by map key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TilesetsConfig {
    /// Used for keys not listed in `images`.
    pub default_key: String,
    /// Key → image path.
    pub images: BTreeMap<String, String>,
}

impl Default for TilesetsConfig {
    fn default() -> Self {
        let mut images = BTreeMap::new();
        images.insert("g".to_string(), "assets/Tilesets/Grass.png".to_string());
        images.insert("f".to_string(), "assets/Tilesets/Tilled Dirt.png".to_string());
        Self {
            default_key: "g".into(),
            images,
        }
    }
}

/// Player sprite and movement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spritesheet path.
    pub sheet: String,
    /// Frame cell size in the sheet.
    pub frame_size: [f32; 2],
    /// Spawn, top-left of the destination rectangle.
    pub spawn: [f32; 2],
    /// Drawn size.
    pub size: [f32; 2],
    /// Pixels per tick.
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sheet: "assets/Characters/BasicCharakterSpritesheet.png".into(),
            frame_size: [48.0, 48.0],
            spawn: [200.0, 200.0],
            size: [100.0, 100.0],
            speed: 3.0,
        }
    }
}

/// Background music.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    /// Streamed file, looped.
    pub path: Option<PathBuf>,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from("assets/Sound/Farm.mp3")),
        }
    }
}

/// A static image at a world position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecorationConfig {
    /// Image path.
    pub image: String,
    /// World x.
    #[serde(default)]
    pub x: f32,
    /// World y.
    #[serde(default)]
    pub y: f32,
}

/// Config path from the environment, or the default.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

impl GameConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match Self::read(path)? {
            Some(cfg) => {
                info!(path = %path.display(), "config loaded");
                Ok(cfg)
            }
            None => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Like [`GameConfig::load`] but silent, and `None` when the file is
    /// missing.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let txt = match std::fs::read_to_string(path) {
            Ok(txt) => txt,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&txt, path).map(Some)
    }

    /// Parse and validate JSON text; `path` is only used in errors.
    pub fn from_json(txt: &str, path: &Path) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(txt).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tilesets.images.contains_key(&self.tilesets.default_key) {
            return Err(ConfigError::UnknownDefaultTileset(
                self.tilesets.default_key.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_the_farm_scene() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.window.width, 1000);
        assert_eq!(cfg.window.height, 480);
        assert_eq!(cfg.window.ticks_per_second, 60);
        assert_eq!(cfg.player.speed, 3.0);
        assert_eq!(cfg.player.frame_size, [48.0, 48.0]);
        assert_eq!(cfg.tilesets.default_key, "g");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let json = r#"{
            "window": { "title": "Test" },
            "player": { "speed": 5.5 },
            "unknownField": 1
        }"#;
        let cfg = GameConfig::from_json(json, Path::new("inline.json")).expect("parse");
        assert_eq!(cfg.window.title, "Test");
        assert_eq!(cfg.window.width, 1000);
        assert_eq!(cfg.player.speed, 5.5);
        assert_eq!(cfg.player.size, [100.0, 100.0]);
        assert_eq!(cfg.map.tile_size, 16);
    }

    #[test]
    fn null_music_disables_it() {
        let cfg = GameConfig::from_json(r#"{"music": {"path": null}}"#, Path::new("x")).unwrap();
        assert_eq!(cfg.music.path, None);
    }

    #[test]
    fn decorations_parse_with_default_position() {
        let json = r#"{"decorations": [{"image": "assets/Tilesets/Grass.png", "x": 100, "y": 50}, {"image": "a.png"}]}"#;
        let cfg = GameConfig::from_json(json, Path::new("x")).unwrap();
        assert_eq!(cfg.decorations.len(), 2);
        assert_eq!(cfg.decorations[0].x, 100.0);
        assert_eq!(cfg.decorations[1].y, 0.0);
    }

    #[test]
    fn default_key_must_be_registered() {
        let json = r#"{"tilesets": {"default_key": "x", "images": {"g": "grass.png"}}}"#;
        let err = GameConfig::from_json(json, Path::new("x")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDefaultTileset(k) if k == "x"));
    }

    #[test]
    fn malformed_json_is_typed_error() {
        let err = GameConfig::from_json("{ nope", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = GameConfig::load(&dir.path().join("absent.json")).expect("defaults");
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"map": {"path": "levels/one.txt", "tile_size": 32}}"#).unwrap();
        let cfg = GameConfig::load(&path).expect("load");
        assert_eq!(cfg.map.path, PathBuf::from("levels/one.txt"));
        assert_eq!(cfg.map.tile_size, 32);
    }

    #[test]
    fn read_distinguishes_missing_from_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(GameConfig::read(&dir.path().join("absent.json")).expect("read"), None);

        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"window": {"title": "Farm"}}"#).unwrap();
        let cfg = GameConfig::read(&path).expect("read").expect("present");
        assert_eq!(cfg.window.title, "Farm");
        assert_eq!(cfg.window.width, 1000);
    }

    #[test]
    fn read_still_reports_bad_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(GameConfig::read(&path), Err(ConfigError::Json { .. })));
    }
}
