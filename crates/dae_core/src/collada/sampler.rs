//! Texture import from effect `<newparam>` samplers and image resolution.

use std::path::{Path, PathBuf};

use super::error::{ImportError, ImportResult};
use super::query::{collada, DocumentQuery, ElementPath};
use super::registry::Registries;
use crate::texture::{
    ImageSource, SamplerFilter, SamplerMipmap, SamplerWrapping, TextureData, TextureType,
};

fn newparams() -> ElementPath {
    collada()
        .child("library_effects")
        .child("effect")
        .child("profile_COMMON")
        .child("newparam")
}

/// Import texture `name`, a sampler parameter sid.
pub(crate) fn build_texture(
    query: &impl DocumentQuery,
    registries: &Registries,
    name: &str,
) -> ImportResult<TextureData> {
    let sampler = newparams()
        .with_attribute("sid", name)
        .child_with_prefix("sampler")
        .nth(1);

    let sampler_type = query.evaluate(&sampler.clone().name());
    let kind = TextureType::from_sampler(&sampler_type).ok_or_else(|| {
        ImportError::UnsupportedSamplerType {
            texture: name.to_string(),
            sampler: sampler_type.clone(),
        }
    })?;

    // sampler source -> surface parameter -> image id
    let surface = query.evaluate(&sampler.clone().child("source").text());
    let image_name = query.evaluate(
        &newparams()
            .with_attribute("sid", &surface)
            .child("surface")
            .child("init_from")
            .text(),
    );
    let image = registries
        .images
        .id_for_name(&image_name)
        .ok_or_else(|| ImportError::ImageNotFound {
            texture: name.to_string(),
            image: image_name.clone(),
        })?;

    let state = |element: &str| query.evaluate(&sampler.clone().child(element).text());
    let unknown = |state: &'static str, value: String| ImportError::UnknownSamplerState {
        texture: name.to_string(),
        state,
        value,
    };
    let wrapping = |element: &str| {
        let value = state(element);
        SamplerWrapping::from_collada(&value).ok_or_else(|| unknown("wrapping", value))
    };
    let filter = |element: &str| {
        let value = state(element);
        SamplerFilter::from_collada(&value).ok_or_else(|| unknown("filter", value))
    };

    let mip_value = state("mipfilter");
    let mipmap = SamplerMipmap::from_collada(&mip_value).ok_or_else(|| unknown("mipmap", mip_value))?;

    let texture = TextureData {
        kind,
        min_filter: filter("minfilter")?,
        mag_filter: filter("magfilter")?,
        mipmap,
        wrapping: [wrapping("wrap_s")?, wrapping("wrap_t")?, wrapping("wrap_p")?],
        image,
    };

    log::debug!("Built texture {}: {:?}", name, texture);
    Ok(texture)
}

/// Locate image `id` (0-based, document order) called `name`.
///
/// Relative paths are resolved against `base_dir`.
pub(crate) fn image_source(
    query: &impl DocumentQuery,
    id: usize,
    name: &str,
    base_dir: Option<&Path>,
) -> ImportResult<ImageSource> {
    let init_from = query.evaluate(
        &collada()
            .child("library_images")
            .child("image")
            .nth(id + 1)
            .child("init_from")
            .text(),
    );
    if init_from.is_empty() {
        return Err(ImportError::malformed(format!("image {}", name), "missing init_from"));
    }

    let file = init_from.strip_prefix("file://").unwrap_or(&init_from);
    Ok(ImageSource {
        name: name.to_string(),
        path: resolve_path(file, base_dir),
    })
}

fn resolve_path(file: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(file);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
