//! Mesh geometry produced by the importer.
//!
//! Every attribute array is indexed by the same combined index, so a mesh is
//! ready to be uploaded as a single indexed vertex buffer.

use dae_math::{Aabb, Vec2, Vec3};
use serde::Serialize;

/// Primitive type of an imported mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MeshPrimitive {
    /// Every 3 indices form a triangle
    Triangles,
}

/// An indexed triangle mesh with per-vertex attributes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mesh {
    pub primitive: MeshPrimitive,

    /// Triangle indices into the attribute arrays
    pub indices: Vec<u32>,

    /// Vertex positions (one Vec3 per unique vertex)
    pub positions: Vec<Vec3>,

    /// Normal layers, each with one entry per unique vertex
    pub normals: Vec<Vec<Vec3>>,

    /// Texture coordinate layers, each with one entry per unique vertex
    pub texcoords: Vec<Vec<Vec2>>,
}

impl Mesh {
    /// Get number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get number of unique vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    /// Axis-aligned bounding box of the positions.
    pub fn bounds(&self) -> Aabb {
        Aabb::enclosing(&self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh {
            primitive: MeshPrimitive::Triangles,
            indices: vec![0, 1, 2, 0, 2, 3],
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            normals: Vec::new(),
            texcoords: Vec::new(),
        }
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.primitive, MeshPrimitive::Triangles);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert!(!mesh.has_normals());
        assert!(!mesh.has_texcoords());
    }

    #[test]
    fn test_bounds() {
        let bounds = quad().bounds();
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(bounds.centroid(), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_layers() {
        let mut mesh = quad();
        mesh.normals.push(vec![Vec3::Z; 4]);
        mesh.texcoords.push(vec![Vec2::ZERO; 4]);
        assert!(mesh.has_normals());
        assert!(mesh.has_texcoords());
    }
}
