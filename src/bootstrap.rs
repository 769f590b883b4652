use crate::config::GameConfig;
use crate::game::{Decoration, GameState, PlayerSheet, PlayerTransform};
use crate::map::TileMap;
use crate::tileset::{ImageCatalog, ImageId, Tileset, TilesetRegistry};
use macroquad::math::vec2;
use tracing::info;

/// Every image the game needs, registered once so the backend can load them
/// in catalog order before the world is built.
#[derive(Debug, Clone)]
pub struct AssetPlan {
    /// Paths in load order.
    pub catalog: ImageCatalog,
    tilesets: Vec<(String, ImageId)>,
    player: ImageId,
    decorations: Vec<Decoration>,
}

impl AssetPlan {
    /// Register tileset, player and decoration images from `cfg`.
    pub fn from_config(cfg: &GameConfig) -> Self {
        let mut catalog = ImageCatalog::new();
        let tilesets = cfg
            .tilesets
            .images
            .iter()
            .map(|(key, path)| (key.clone(), catalog.register(path)))
            .collect();
        let player = catalog.register(&cfg.player.sheet);
        let decorations = cfg
            .decorations
            .iter()
            .map(|d| Decoration {
                image: catalog.register(&d.image),
                position: vec2(d.x, d.y),
            })
            .collect();

        Self {
            catalog,
            tilesets,
            player,
            decorations,
        }
    }

    /// Build the registry once image sizes are known. `sizes[i]` is the
    /// `(width, height)` of `ImageId(i)`; missing entries count as empty.
    pub fn tileset_registry(&self, cfg: &GameConfig, sizes: &[(u32, u32)]) -> TilesetRegistry {
        let tile_size = cfg.map.tile_size;
        let make = |image: ImageId| {
            let (pixel_width, pixel_height) = sizes.get(image.0).copied().unwrap_or((0, 0));
            Tileset {
                image,
                pixel_width,
                pixel_height,
                tile_size,
            }
        };

        let default_image = self
            .tilesets
            .iter()
            .find(|(k, _)| *k == cfg.tilesets.default_key)
            .map(|(_, id)| *id)
            .unwrap_or(ImageId(0));

        let mut reg = TilesetRegistry::new(cfg.tilesets.default_key.clone(), make(default_image));
        for (key, image) in &self.tilesets {
            reg.register(key.clone(), make(*image));
        }
        info!(
            count = self.tilesets.len(),
            default = %cfg.tilesets.default_key,
            tile_size,
            "tilesets registered"
        );
        reg
    }

    /// Assemble the initial game state.
    pub fn build_state(&self, cfg: &GameConfig, map: TileMap, sizes: &[(u32, u32)]) -> GameState {
        let tilesets = self.tileset_registry(cfg, sizes);
        let p = &cfg.player;
        let player = PlayerTransform {
            position: vec2(p.spawn[0], p.spawn[1]),
            size: vec2(p.size[0], p.size[1]),
            speed: p.speed,
        };
        let sheet = PlayerSheet {
            image: self.player,
            frame_size: vec2(p.frame_size[0], p.frame_size[1]),
        };

        GameState::new(map, tilesets, player, sheet, cfg.window.screen_size())
            .with_decorations(self.decorations.clone())
            .with_background(cfg.window.background_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecorationConfig;

    #[test]
    fn registers_each_image_once() {
        let mut cfg = GameConfig::default();
        cfg.decorations.push(DecorationConfig {
            image: "assets/Tilesets/Grass.png".into(),
            x: 100.0,
            y: 50.0,
        });
        let plan = AssetPlan::from_config(&cfg);
        // dirt, grass, player sheet; the decoration reuses grass
        assert_eq!(plan.catalog.len(), 3);
        assert_eq!(
            plan.decorations[0].image,
            plan.tilesets.iter().find(|(k, _)| k == "g").unwrap().1
        );
    }

    #[test]
    fn builds_state_from_config_and_sizes() {
        let cfg = GameConfig::default();
        let plan = AssetPlan::from_config(&cfg);
        let sizes = vec![(32, 32), (176, 112), (192, 192)];
        let map = TileMap::from_text("2 1 12 3 g f").unwrap();

        let gs = plan.build_state(&cfg, map, &sizes);
        assert_eq!(gs.player.position, vec2(200.0, 200.0));
        assert_eq!(gs.player.speed, 3.0);
        assert_eq!(gs.camera.offset, vec2(500.0, 240.0));
        assert_eq!(gs.tilesets.tile_size(), 16);

        let grass = gs.tilesets.resolve("g");
        assert_eq!(plan.catalog.path(grass.image), Some("assets/Tilesets/Grass.png"));
        assert_eq!(grass.columns(), 11);
        assert_eq!(gs.tilesets.resolve("f").columns(), 2);
        assert_eq!(gs.tilesets.resolve("?").image, grass.image);
    }
}
