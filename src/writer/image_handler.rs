//! Image handling for GR generation.
//!
//! The only image on a GR is the company logo. Images are decoded once with
//! the `image` crate to learn their pixel dimensions and are then registered
//! by asset name with an [`ImageManager`], which surfaces look up when drawing.
//!
//! # Supported Formats
//!
//! - **PNG**
//! - **JPEG**
//! - `data:` URIs carrying either of the above as base64

use base64::Engine as _;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Image format of the encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
}

/// Color model of the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Grayscale (1 component per pixel)
    DeviceGray,
    /// RGB color (3 components per pixel)
    DeviceRGB,
}

/// A decoded image ready to be placed.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color space
    pub color_space: ColorSpace,
    /// Whether the source carries an alpha channel
    pub has_alpha: bool,
    /// Image format
    pub format: ImageFormat,
    /// Original encoded bytes
    pub data: Vec<u8>,
}

impl ImageData {
    /// Load a PNG image from raw PNG data.
    pub fn from_png(data: &[u8]) -> Result<Self, ImageError> {
        Self::decode(data, ImageFormat::Png)
    }

    /// Load a JPEG image from raw JPEG data.
    pub fn from_jpeg(data: &[u8]) -> Result<Self, ImageError> {
        Self::decode(data, ImageFormat::Jpeg)
    }

    fn decode(data: &[u8], format: ImageFormat) -> Result<Self, ImageError> {
        use image::GenericImageView;

        let codec = match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        };
        let img = image::load_from_memory_with_format(data, codec)
            .map_err(|e| ImageError::DecodeError(e.to_string()))?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidData("Image has no pixels".to_string()));
        }

        let color = img.color();
        let color_space = match color {
            image::ColorType::L8
            | image::ColorType::L16
            | image::ColorType::La8
            | image::ColorType::La16 => ColorSpace::DeviceGray,
            _ => ColorSpace::DeviceRGB,
        };

        log::debug!("Decoded {:?} image {}x{} ({:?})", format, width, height, color);

        Ok(Self {
            width,
            height,
            color_space,
            has_alpha: color.has_alpha(),
            format,
            data: data.to_vec(),
        })
    }

    /// Load an image from raw bytes, auto-detecting format.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ImageError> {
        // Check for JPEG magic bytes
        if data.len() >= 2 && data[0] == 0xFF && data[1] == 0xD8 {
            return Self::from_jpeg(data);
        }

        // Check for PNG magic bytes
        if data.len() >= 8 && &data[0..8] == b"\x89PNG\r\n\x1a\n" {
            return Self::from_png(data);
        }

        Err(ImageError::UnsupportedFormat)
    }

    /// Load an image from a `data:image/...;base64,` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self, ImageError> {
        let payload = uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, payload)| payload)
            .ok_or_else(|| ImageError::InvalidData("Not a base64 data URI".to_string()))?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ImageError::InvalidData(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Load an image from a file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ImageError> {
        let data = std::fs::read(path.as_ref()).map_err(|e| ImageError::IoError(e.to_string()))?;
        Self::from_bytes(&data)
    }

    /// Load an image from a `data:` URI or, failing that prefix, a file path.
    pub fn from_source(source: &str) -> Result<Self, ImageError> {
        if source.starts_with("data:") {
            Self::from_data_uri(source)
        } else {
            Self::from_file(source)
        }
    }

    /// Get the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Calculate dimensions to fit within a bounding box while maintaining aspect ratio.
    pub fn fit_to_box(&self, max_width: f32, max_height: f32) -> (f32, f32) {
        let aspect = self.aspect_ratio();
        let box_aspect = max_width / max_height;

        if aspect > box_aspect {
            // Image is wider than box, constrain by width
            (max_width, max_width / aspect)
        } else {
            // Image is taller than box, constrain by height
            (max_height * aspect, max_height)
        }
    }
}

/// Image loading error.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Unsupported image format
    #[error("Unsupported image format")]
    UnsupportedFormat,

    /// Failed to decode image
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// No image registered under the name
    #[error("Image asset not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Invalid image data
    #[error("Invalid image data: {0}")]
    InvalidData(String),
}

/// Named image registry.
///
/// Registration order is preserved so resource ids stay stable between runs.
#[derive(Debug, Default, Clone)]
pub struct ImageManager {
    images: IndexMap<String, ImageData>,
}

impl ImageManager {
    /// Create a new image manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image, replacing any previous image with the same name.
    ///
    /// Returns the image resource ID (e.g., "Im1").
    pub fn register(&mut self, name: impl Into<String>, image: ImageData) -> String {
        let (index, _) = self.images.insert_full(name.into(), image);
        format!("Im{}", index + 1)
    }

    /// Get an image by name.
    pub fn get(&self, name: &str) -> Option<&ImageData> {
        self.images.get(name)
    }

    /// Get an image by name, failing if it is not registered.
    pub fn require(&self, name: &str) -> Result<&ImageData, ImageError> {
        self.get(name)
            .ok_or_else(|| ImageError::NotFound(name.to_string()))
    }
}
