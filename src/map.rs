use crate::error::MapError;
use crate::loader::text_loader::{decode_map_text, load_map_file};
use std::path::Path;

/// A rectangular grid of tile ids plus, per cell, the key of the tileset
/// that supplies it.
///
/// Both sequences are row-major and always `width * height` long; the
/// loader refuses to build a map that breaks this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tile_indices: Vec<u32>,
    tileset_keys: Vec<String>,
}

impl TileMap {
    /// Parse a map from its text form.
    pub fn from_text(text: &str) -> Result<Self, MapError> {
        decode_map_text(text)
    }

    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        load_map_file(path.as_ref())
    }

    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        tile_indices: Vec<u32>,
        tileset_keys: Vec<String>,
    ) -> Result<Self, MapError> {
        let expected = width
            .checked_mul(height)
            .ok_or(MapError::DimensionOverflow { width, height })?;
        if tile_indices.len() != expected || tileset_keys.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                tiles: tile_indices.len(),
                keys: tileset_keys.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tile_indices,
            tileset_keys,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// 1-based tile ids, 0 meaning empty.
    #[inline]
    pub fn tile_indices(&self) -> &[u32] {
        &self.tile_indices
    }

    /// Tileset key per cell.
    #[inline]
    pub fn tileset_keys(&self) -> &[String] {
        &self.tileset_keys
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.tile_indices.len()
    }

    /// Cells with a non-zero tile id.
    pub fn non_empty_count(&self) -> usize {
        self.tile_indices.iter().filter(|&&id| id != 0).count()
    }

    /// `(column, row)` for a row-major cell index.
    #[inline]
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Iterate `(index, tile id, tileset key)` over every non-empty cell.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, u32, &str)> + '_ {
        self.tile_indices
            .iter()
            .zip(&self.tileset_keys)
            .enumerate()
            .filter(|(_, (id, _))| **id != 0)
            .map(|(i, (id, key))| (i, *id, key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_rejects_misaligned_sequences() {
        let err = TileMap::from_parts(2, 1, vec![1, 2], vec!["g".into()]).unwrap_err();
        assert!(matches!(
            err,
            MapError::SizeMismatch {
                expected: 2,
                tiles: 2,
                keys: 1
            }
        ));
    }

    #[test]
    fn occupied_cells_skips_empty_ids() {
        let map = TileMap::from_parts(
            3,
            1,
            vec![4, 0, 7],
            vec!["g".into(), "g".into(), "f".into()],
        )
        .unwrap();

        let cells: Vec<_> = map.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 4, "g"), (2, 7, "f")]);
        assert_eq!(map.non_empty_count(), 2);
        assert_eq!(map.cell_position(2), (2, 0));
    }
}
