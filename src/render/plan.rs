use crate::command::DrawCommand;
use crate::game::GameState;
use crate::map::TileMap;
use crate::tileset::TilesetRegistry;
use macroquad::math::{Rect, Vec2};

/// Draw commands for every non-empty cell of `map`, row-major.
///
/// Cells with id 0 are transparent and produce nothing. The iterator is lazy
/// and borrows both inputs.
pub fn plan_tiles<'a>(
    map: &'a TileMap,
    tilesets: &'a TilesetRegistry,
) -> impl Iterator<Item = DrawCommand> + 'a {
    let cell = tilesets.tile_size() as f32;
    map.occupied_cells().map(move |(idx, id, key)| {
        let ts = tilesets.resolve(key);
        let (col, row) = map.cell_position(idx);
        let (sc, sr) = ts.cell_of(id);
        let size = ts.tile_size as f32;

        DrawCommand::Region {
            image: ts.image,
            source: Rect::new(sc as f32 * size, sr as f32 * size, size, size),
            dest: Rect::new(col as f32 * cell, row as f32 * cell, cell, cell),
            origin: Vec2::ZERO,
            rotation: 0.0,
        }
    })
}

/// Everything drawn inside the camera for one frame: tiles, then
/// decorations, then the player sprite on top.
pub fn plan_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(state.map.non_empty_count() + state.decorations.len() + 1);
    out.extend(plan_tiles(&state.map, &state.tilesets));
    out.extend(state.decorations.iter().map(|d| DrawCommand::Texture {
        image: d.image,
        position: d.position,
    }));
    out.push(player_command(state));
    out
}

fn player_command(state: &GameState) -> DrawCommand {
    let dest = state.player.dest_rect();
    DrawCommand::Region {
        image: state.player_sheet.image,
        source: state.animation.sprite_frame().source_rect(state.player_sheet.frame_size),
        dest,
        // anchored at the bottom-right corner
        origin: dest.size(),
        rotation: 0.0,
    }
}
