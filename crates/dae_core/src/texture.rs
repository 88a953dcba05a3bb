//! Textures, sampler states and image decoding.
//!
//! A texture references an image by id together with the sampler state used
//! to read it. Images are decoded on demand through an [`ImageDecoder`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during image decoding.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Texture dimensionality, from the sampler element name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TextureType {
    Texture1D,
    Texture2D,
    Texture3D,
    Cube,
}

impl TextureType {
    /// Map a `<sampler*>` element name.
    pub fn from_sampler(name: &str) -> Option<Self> {
        match name {
            "sampler1D" => Some(TextureType::Texture1D),
            "sampler2D" => Some(TextureType::Texture2D),
            "sampler3D" => Some(TextureType::Texture3D),
            "samplerCUBE" => Some(TextureType::Cube),
            _ => None,
        }
    }
}

/// Coordinate wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SamplerWrapping {
    #[default]
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

impl SamplerWrapping {
    /// Map a `<wrap_*>` value. Empty and `NONE` select the default.
    pub fn from_collada(value: &str) -> Option<Self> {
        match value {
            "" | "NONE" | "WRAP" => Some(SamplerWrapping::Repeat),
            "MIRROR" => Some(SamplerWrapping::MirroredRepeat),
            "CLAMP" => Some(SamplerWrapping::ClampToEdge),
            "BORDER" => Some(SamplerWrapping::ClampToBorder),
            _ => None,
        }
    }
}

/// Minification/magnification filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SamplerFilter {
    #[default]
    Nearest,
    Linear,
}

impl SamplerFilter {
    /// Map a `<minfilter>`/`<magfilter>` value. Empty and `NONE` select the default.
    pub fn from_collada(value: &str) -> Option<Self> {
        match value {
            "" | "NONE" | "NEAREST" => Some(SamplerFilter::Nearest),
            "LINEAR" => Some(SamplerFilter::Linear),
            _ => None,
        }
    }
}

/// Mipmap selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SamplerMipmap {
    /// Base level only
    #[default]
    Base,
    Nearest,
    Linear,
}

impl SamplerMipmap {
    /// Map a `<mipfilter>` value. Empty and `NONE` select the default.
    pub fn from_collada(value: &str) -> Option<Self> {
        match value {
            "" | "NONE" => Some(SamplerMipmap::Base),
            "NEAREST" => Some(SamplerMipmap::Nearest),
            "LINEAR" => Some(SamplerMipmap::Linear),
            _ => None,
        }
    }
}

/// A texture: sampler state plus the image it samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextureData {
    pub kind: TextureType,
    pub min_filter: SamplerFilter,
    pub mag_filter: SamplerFilter,
    pub mipmap: SamplerMipmap,

    /// Wrapping along s, t and p
    pub wrapping: [SamplerWrapping; 3],

    /// Image id
    pub image: usize,
}

/// Location of an image file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    pub name: String,

    /// Path resolved against the document directory
    pub path: PathBuf,
}

/// Decoded image pixels.
#[derive(Clone, Debug)]
pub struct ImageData {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Pixel data as RGBA8, row-major
    pub pixels: Vec<u8>,

    /// File the pixels were read from
    pub path: PathBuf,
}

impl ImageData {
    /// Get total size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.pixels.len()
    }

    /// RGBA value at integer coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let p = self.pixels.get(idx..idx + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// Image file decoding.
pub trait ImageDecoder {
    /// Whether files at `path` can be decoded.
    fn supports(&self, path: &Path) -> bool;

    /// Decode the file at `path`.
    fn decode(&self, path: &Path) -> Result<ImageData, ImageError>;
}

/// Decoder for Truevision TGA files.
#[derive(Clone, Copy, Debug, Default)]
pub struct TgaDecoder;

impl ImageDecoder for TgaDecoder {
    fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("tga"))
            .unwrap_or(false)
    }

    fn decode(&self, path: &Path) -> Result<ImageData, ImageError> {
        let img = image::open(path)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("Decoded image: {} ({}x{})", path.display(), width, height);

        Ok(ImageData {
            width,
            height,
            pixels: rgba.into_raw(),
            path: path.to_path_buf(),
        })
    }
}
