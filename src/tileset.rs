use std::collections::HashMap;

/// Opaque handle to an image resource, resolved by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Image paths in registration order. Backends load one texture per entry
/// and index them with [`ImageId`].
#[derive(Debug, Default, Clone)]
pub struct ImageCatalog {
    paths: Vec<String>,
}

impl ImageCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path, reusing the id when the path is already known.
    pub fn register(&mut self, path: &str) -> ImageId {
        if let Some(i) = self.paths.iter().position(|p| p == path) {
            return ImageId(i);
        }
        self.paths.push(path.to_owned());
        ImageId(self.paths.len() - 1)
    }

    /// Path behind an id.
    pub fn path(&self, id: ImageId) -> Option<&str> {
        self.paths.get(id.0).map(String::as_str)
    }

    /// All registered paths, indexed by `ImageId.0`.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// An image atlas cut into square cells, tile ids running row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tileset {
    /// Backing image.
    pub image: ImageId,
    /// Image width in pixels.
    pub pixel_width: u32,
    /// Image height in pixels.
    pub pixel_height: u32,
    /// Side of one square cell in pixels.
    pub tile_size: u32,
}

impl Tileset {
    /// Cells per row. Never zero, so a sliver image still maps every id to
    /// its first column.
    #[inline]
    pub fn columns(&self) -> u32 {
        if self.tile_size == 0 {
            return 1;
        }
        (self.pixel_width / self.tile_size).max(1)
    }

    /// `(column, row)` of a 1-based tile id inside the atlas.
    #[inline]
    pub fn cell_of(&self, tile_id: u32) -> (u32, u32) {
        let local = tile_id.saturating_sub(1);
        let cols = self.columns();
        (local % cols, local / cols)
    }
}

/// Tilesets addressed by the short keys used in map files.
///
/// Lookups never fail: an unknown key resolves to the default tileset.
#[derive(Debug, Clone)]
pub struct TilesetRegistry {
    sets: HashMap<String, Tileset>,
    default_key: String,
    default_set: Tileset,
}

impl TilesetRegistry {
    /// Create a registry whose fallback is `default_set` under `default_key`.
    pub fn new(default_key: impl Into<String>, default_set: Tileset) -> Self {
        let default_key = default_key.into();
        let mut sets = HashMap::new();
        sets.insert(default_key.clone(), default_set);
        Self {
            sets,
            default_key,
            default_set,
        }
    }

    /// Register (or replace) a tileset.
    pub fn register(&mut self, key: impl Into<String>, set: Tileset) {
        let key = key.into();
        if key == self.default_key {
            self.default_set = set;
        }
        self.sets.insert(key, set);
    }

    /// Key of the fallback tileset.
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Whether `key` has its own registration.
    pub fn contains(&self, key: &str) -> bool {
        self.sets.contains_key(key)
    }

    /// Tileset for `key`, or the default one.
    #[inline]
    pub fn resolve(&self, key: &str) -> &Tileset {
        self.sets.get(key).unwrap_or(&self.default_set)
    }

    /// Shared cell size (the default tileset's).
    pub fn tile_size(&self) -> u32 {
        self.default_set.tile_size
    }

    /// Distinct keys in `keys` that have no registration, sorted.
    pub fn unknown_keys<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Vec<String> {
        let mut missing: Vec<String> = keys
            .into_iter()
            .filter(|k| !self.contains(k))
            .map(str::to_owned)
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
