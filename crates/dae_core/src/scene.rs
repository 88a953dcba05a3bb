//! Scene graph produced by the importer.
//!
//! Objects live in one flat, document-wide list and refer to each other and
//! to library entities (cameras, lights, meshes, materials) by index.

use dae_math::{Mat4, Vec3};
use serde::Serialize;

/// A visual scene: a name and its root objects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub name: String,

    /// Indices of the root objects
    pub children: Vec<usize>,
}

/// What a scene object instantiates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ObjectKind {
    /// Transform-only grouping node
    Empty,

    /// Camera id
    Camera(usize),

    /// Light id
    Light(usize),

    /// Mesh id and the material bound to it, if any
    Mesh {
        mesh: usize,
        material: Option<usize>,
    },
}

/// A node of a scene hierarchy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Object {
    pub name: String,

    /// Local transform relative to the parent object
    pub transform: Mat4,

    pub kind: ObjectKind,

    /// Indices of the child objects
    pub children: Vec<usize>,
}

impl Object {
    /// Translation part of the local transform.
    pub fn translation(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    pub fn is_empty(&self) -> bool {
        self.kind == ObjectKind::Empty
    }

    /// Mesh id, if this object instantiates a mesh.
    pub fn mesh(&self) -> Option<usize> {
        match self.kind {
            ObjectKind::Mesh { mesh, .. } => Some(mesh),
            _ => None,
        }
    }
}
