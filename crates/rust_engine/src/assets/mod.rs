//! Asset management system
//!
//! Assets are declared by key during preload and resolved against the
//! engine's asset root. A missing or undecodable file is an error; the
//! engine treats it as fatal for the session.

pub mod image_loader;

pub use image_loader::{ImageInfo, SpriteSheet};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A loaded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    /// Single static image
    Image(ImageInfo),
    /// Image sliced into animation or variant frames
    SpriteSheet(SpriteSheet),
}

/// Asset management system
#[derive(Debug)]
pub struct AssetManager {
    root: PathBuf,
    assets: HashMap<String, Asset>,
}

impl AssetManager {
    /// Create an asset manager resolving paths against `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            assets: HashMap::new(),
        }
    }

    /// Directory relative paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a static image under `key`
    pub fn load_image(&mut self, key: &str, path: impl AsRef<Path>) -> Result<ImageInfo, AssetError> {
        let info = ImageInfo::from_file(self.resolve(path.as_ref()))?;
        self.assets.insert(key.to_string(), Asset::Image(info));
        Ok(info)
    }

    /// Load a sprite sheet under `key`, sliced into frames of the given size
    pub fn load_spritesheet(
        &mut self,
        key: &str,
        path: impl AsRef<Path>,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<SpriteSheet, AssetError> {
        let info = ImageInfo::from_file(self.resolve(path.as_ref()))?;
        let sheet = SpriteSheet::new(info, frame_width, frame_height)?;
        log::debug!("Sprite sheet '{}' has {} frame(s)", key, sheet.frame_count());
        self.assets.insert(key.to_string(), Asset::SpriteSheet(sheet));
        Ok(sheet)
    }

    /// Look up any asset by key
    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.assets.get(key)
    }

    /// Look up a static image by key
    pub fn image(&self, key: &str) -> Result<ImageInfo, AssetError> {
        match self.assets.get(key) {
            Some(Asset::Image(info)) => Ok(*info),
            Some(Asset::SpriteSheet(_)) => Err(AssetError::InvalidData(format!(
                "'{key}' is a sprite sheet, not an image"
            ))),
            None => Err(AssetError::Missing(key.to_string())),
        }
    }

    /// Look up a sprite sheet by key
    pub fn spritesheet(&self, key: &str) -> Result<SpriteSheet, AssetError> {
        match self.assets.get(key) {
            Some(Asset::SpriteSheet(sheet)) => Ok(*sheet),
            Some(Asset::Image(_)) => Err(AssetError::InvalidData(format!(
                "'{key}' is an image, not a sprite sheet"
            ))),
            None => Err(AssetError::Missing(key.to_string())),
        }
    }

    /// Number of loaded assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Asset system errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset file not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Sprite sheet cannot be sliced as requested
    #[error("Invalid sprite sheet: {0}")]
    InvalidSpriteSheet(String),

    /// No asset registered under this key
    #[error("No asset loaded for key: {0}")]
    Missing(String),
}
