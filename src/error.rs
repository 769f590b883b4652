use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced while loading a text tile map.
///
/// Everything except [`MapError::Io`] is a format error: the token stream
/// could not be turned into the declared `width × height` grid.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("failed to read map file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The stream ended before the width/height header was complete.
    #[error("map is missing its {field} token")]
    MissingDimension {
        /// `"width"` or `"height"`.
        field: &'static str,
    },
    /// A header token is not an unsigned integer.
    #[error("map {field} must be an unsigned integer, got {token:?}")]
    InvalidDimension {
        /// `"width"` or `"height"`.
        field: &'static str,
        /// Offending token.
        token: String,
    },
    /// `width * height` does not fit in memory addressing.
    #[error("map dimensions {width}x{height} overflow")]
    DimensionOverflow {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// Tile ids or tileset keys do not cover the grid exactly.
    #[error(
        "map declares {expected} cells but has {tiles} tile ids and {keys} tileset keys"
    )]
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Tile ids after reconciliation.
        tiles: usize,
        /// Tileset keys after reconciliation.
        keys: usize,
    },
}

impl MapError {
    /// True for every variant caused by the map's contents rather than I/O.
    pub fn is_format(&self) -> bool {
        !matches!(self, MapError::Io { .. })
    }
}

/// Errors produced while reading the JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid JSON for [`crate::GameConfig`].
    #[error("failed to parse config {path}: {source}")]
    Json {
        /// Config path.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// `tilesets.default_key` does not name any registered tileset.
    #[error("default tileset key {0:?} is not among the configured tilesets")]
    UnknownDefaultTileset(String),
}
