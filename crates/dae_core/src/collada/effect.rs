//! Material import through `<instance_effect>` and `profile_COMMON` phong techniques.

use glam::Vec3;

use super::error::{ImportError, ImportResult};
use super::parse::{parse_scalar, parse_vector};
use super::query::{collada, strip_url, DocumentQuery, ElementPath};
use super::registry::Registries;
use crate::material::{MaterialChannel, PhongMaterial};

const COMMON_PROFILE: &str = "profile_COMMON";
const PHONG_SHADER: &str = "phong";

/// Import material `id` (0-based, document order) called `name`.
pub(crate) fn build_material(
    query: &impl DocumentQuery,
    registries: &Registries,
    id: usize,
    name: &str,
) -> ImportResult<PhongMaterial> {
    let effect_url = query.evaluate(
        &collada()
            .child("library_materials")
            .child("material")
            .nth(id + 1)
            .child("instance_effect")
            .attribute("url"),
    );
    let effect = collada()
        .child("library_effects")
        .child("effect")
        .with_attribute("id", strip_url(&effect_url));

    let profiles = query.evaluate_list(&effect.clone().child_with_prefix("profile_").name());
    if !profiles.iter().any(|p| p == COMMON_PROFILE) {
        return Err(ImportError::UnsupportedProfile {
            material: name.to_string(),
            profile: profiles.into_iter().next().unwrap_or_default(),
        });
    }

    let technique = effect.child(COMMON_PROFILE).child("technique");
    let shader = query
        .evaluate_list(&technique.clone().child_any().name())
        .into_iter()
        .find(|n| n != "asset" && n != "extra")
        .unwrap_or_default();
    if shader != PHONG_SHADER {
        return Err(ImportError::UnsupportedShader {
            material: name.to_string(),
            shader,
        });
    }

    let phong = technique.child(PHONG_SHADER);
    let shininess_text = query.evaluate(&phong.clone().child("shininess").child("float").text());
    let shininess: f32 = parse_scalar(&shininess_text).map_err(|e| {
        ImportError::malformed(format!("material {}", name), format!("shininess: {}", e))
    })?;

    let channel = |channel: &'static str| read_channel(query, registries, &phong, name, channel);
    let material = PhongMaterial {
        shininess,
        ambient: channel("ambient")?,
        diffuse: channel("diffuse")?,
        specular: channel("specular")?,
    };

    log::debug!("Built material {}: {:?}", name, material);
    Ok(material)
}

/// Read a color channel, preferring a texture reference over a constant color.
fn read_channel(
    query: &impl DocumentQuery,
    registries: &Registries,
    phong: &ElementPath,
    material: &str,
    channel: &'static str,
) -> ImportResult<MaterialChannel> {
    let element = phong.clone().child(channel);

    let texture = query.evaluate(&element.clone().child("texture").attribute("texture"));
    if !texture.is_empty() {
        return registries
            .textures
            .id_for_name(&texture)
            .map(MaterialChannel::Texture)
            .ok_or_else(|| ImportError::TextureNotFound {
                material: material.to_string(),
                channel,
                texture,
            });
    }

    let color = query.evaluate(&element.child("color").text());
    if color.is_empty() {
        log::debug!("Material {}: no {} color, using black", material, channel);
        return Ok(MaterialChannel::Color(Vec3::ZERO));
    }
    parse_vector(&color)
        .map(MaterialChannel::Color)
        .map_err(|e| ImportError::malformed(format!("material {}", material), format!("{}: {}", channel, e)))
}
