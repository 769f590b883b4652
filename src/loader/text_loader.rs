// src/loader/text_loader.rs
use crate::error::MapError;
use crate::map::TileMap;
use std::path::Path;
use tracing::debug;

/// Read a map file from disk and decode it.
pub fn load_map_file(path: &Path) -> Result<TileMap, MapError> {
    let txt = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = decode_map_text(&txt)?;
    debug!(
        path = %path.display(),
        width = map.width(),
        height = map.height(),
        "decoded map file"
    );
    Ok(map)
}

/// Decode `<width> <height> <ids...> <keys...>`.
///
/// Line breaks are just separators, so the whole file is one flat token
/// stream. Tile ids that are not integers become `0` (an empty cell) rather
/// than an error.
pub fn decode_map_text(text: &str) -> Result<TileMap, MapError> {
    let flat = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    let tokens: Vec<&str> = flat.split_whitespace().collect();

    let width = parse_dimension(tokens.first().copied(), "width")?;
    let height = parse_dimension(tokens.get(1).copied(), "height")?;
    let cells = width
        .checked_mul(height)
        .ok_or(MapError::DimensionOverflow { width, height })?;

    let body = &tokens[2..];

    // A body one token longer than two full grids comes from a trailing
    // delimiter in the source format: read one extra id, then drop it again.
    let padded = cells.checked_mul(2).and_then(|n| n.checked_add(1));
    let id_region = if Some(body.len()) == padded {
        cells + 1
    } else {
        cells.min(body.len())
    };

    let mut tile_indices: Vec<u32> = body[..id_region].iter().map(|t| parse_tile_id(t)).collect();
    let tileset_keys: Vec<String> = body[id_region..].iter().map(|t| t.to_string()).collect();

    if id_region > cells {
        tile_indices.truncate(cells);
    }

    TileMap::from_parts(width, height, tile_indices, tileset_keys)
}

fn parse_dimension(token: Option<&str>, field: &'static str) -> Result<usize, MapError> {
    let token = token.ok_or(MapError::MissingDimension { field })?;
    token.parse::<usize>().map_err(|_| MapError::InvalidDimension {
        field,
        token: token.to_owned(),
    })
}

/// Lenient on purpose: legacy maps contain junk tokens in the id region and
/// those cells have always rendered as empty.
#[inline]
fn parse_tile_id(token: &str) -> u32 {
    match token.parse::<u32>() {
        Ok(id) => id,
        Err(_) => 0,
    }
}
