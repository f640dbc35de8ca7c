//! Image probing for image and sprite sheet assets
//!
//! The engine never rasterizes; it only needs to know that an image exists,
//! decodes as a supported format, and how large it is.

use std::path::Path;
use image;
use crate::assets::AssetError;

/// Dimensions of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageInfo {
    /// Read an image header from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Probing image at: {:?}", path_ref);

        let (width, height) = image::image_dimensions(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;

        if width == 0 || height == 0 {
            return Err(AssetError::InvalidData(format!(
                "{} has an empty image", path_ref.display()
            )));
        }

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self { width, height })
    }
}

/// Sprite sheet split into equally sized frames, read row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Dimensions of the whole sheet
    pub image: ImageInfo,
    /// Width of one frame in pixels
    pub frame_width: u32,
    /// Height of one frame in pixels
    pub frame_height: u32,
}

impl SpriteSheet {
    /// Slice an image into frames of the given size
    pub fn new(image: ImageInfo, frame_width: u32, frame_height: u32) -> Result<Self, AssetError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(AssetError::InvalidSpriteSheet(format!(
                "frame size must be non-zero, got {frame_width}x{frame_height}"
            )));
        }
        if frame_width > image.width || frame_height > image.height {
            return Err(AssetError::InvalidSpriteSheet(format!(
                "frame {}x{} larger than sheet {}x{}",
                frame_width, frame_height, image.width, image.height
            )));
        }
        Ok(Self { image, frame_width, frame_height })
    }

    /// Number of whole frames on the sheet
    pub fn frame_count(&self) -> u32 {
        (self.image.width / self.frame_width) * (self.image.height / self.frame_height)
    }
}
