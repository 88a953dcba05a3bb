//! Import error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

use crate::texture::ImageError;

/// Errors that can occur while opening a document or importing an entity.
///
/// Entity names are the `id` of the failing element as listed in its library.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot open file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot load XML: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("unsupported namespace \"{0}\"")]
    UnsupportedNamespace(String),

    #[error("unsupported version \"{0}\"")]
    UnsupportedVersion(String),

    #[error("mesh {mesh}: {count} vertices per face not supported")]
    UnsupportedTopology { mesh: String, count: u32 },

    #[error("mesh {mesh}: \"{semantic}\" input semantic not supported")]
    UnsupportedSemantic { mesh: String, semantic: String },

    #[error("{entity}: {reason}")]
    MalformedSource { entity: String, reason: String },

    #[error("material {material}: \"{profile}\" effect profile not supported")]
    UnsupportedProfile { material: String, profile: String },

    #[error("material {material}: \"{shader}\" shader not supported")]
    UnsupportedShader { material: String, shader: String },

    #[error("material {material}: {channel} texture \"{texture}\" not found")]
    TextureNotFound {
        material: String,
        channel: &'static str,
        texture: String,
    },

    #[error("texture {texture}: \"{sampler}\" sampler type not supported")]
    UnsupportedSamplerType { texture: String, sampler: String },

    #[error("texture {texture}: unknown {state} \"{value}\"")]
    UnknownSamplerState {
        texture: String,
        state: &'static str,
        value: String,
    },

    #[error("texture {texture}: image \"{image}\" not found")]
    ImageNotFound { texture: String, image: String },

    #[error("image {image}: \"{path}\" has unsupported format")]
    UnsupportedImageFormat { image: String, path: PathBuf },

    #[error("image {image}: {source}")]
    Image {
        image: String,
        #[source]
        source: ImageError,
    },

    #[error("object {object}: {kind} \"{name}\" not found")]
    ReferenceNotFound {
        object: String,
        kind: &'static str,
        name: String,
    },

    #[error("object {object}: \"{instance}\" instance type not supported")]
    UnsupportedInstance { object: String, instance: String },

    #[error("{kind} {id} out of range ({count} available)")]
    IndexOutOfRange {
        kind: &'static str,
        id: usize,
        count: usize,
    },
}

impl ImportError {
    /// Whether this error prevents the document from being opened at all.
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            ImportError::Io { .. }
                | ImportError::Xml(_)
                | ImportError::UnsupportedNamespace(_)
                | ImportError::UnsupportedVersion(_)
        )
    }

    pub(crate) fn malformed(entity: impl Into<String>, reason: impl ToString) -> Self {
        ImportError::MalformedSource {
            entity: entity.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
