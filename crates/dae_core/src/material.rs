//! Phong materials.

use dae_math::Vec3;
use serde::Serialize;

/// Source of a material color channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum MaterialChannel {
    /// Constant RGB color
    Color(Vec3),

    /// Texture id
    Texture(usize),
}

impl MaterialChannel {
    pub fn color(&self) -> Option<Vec3> {
        match *self {
            MaterialChannel::Color(c) => Some(c),
            MaterialChannel::Texture(_) => None,
        }
    }

    pub fn texture(&self) -> Option<usize> {
        match *self {
            MaterialChannel::Texture(id) => Some(id),
            MaterialChannel::Color(_) => None,
        }
    }
}

impl Default for MaterialChannel {
    fn default() -> Self {
        MaterialChannel::Color(Vec3::ZERO)
    }
}

/// Phong shading parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhongMaterial {
    /// Specular exponent
    pub shininess: f32,

    pub ambient: MaterialChannel,
    pub diffuse: MaterialChannel,
    pub specular: MaterialChannel,
}

impl PhongMaterial {
    /// Check if any channel uses a texture.
    pub fn has_textures(&self) -> bool {
        self.channels().iter().any(|c| c.texture().is_some())
    }

    /// Ambient, diffuse and specular channels in that order.
    pub fn channels(&self) -> [MaterialChannel; 3] {
        [self.ambient, self.diffuse, self.specular]
    }
}
