//! DAE Core - COLLADA scene import for DAE.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Object`, `Mesh`, `PhongMaterial`, `TextureData`
//! - **COLLADA support**: COLLADA 1.4.1 document opening and on-demand import
//!
//! # Example
//!
//! ```ignore
//! use dae_core::collada::open_dae;
//!
//! let document = open_dae("scene.dae")?;
//! println!("Loaded {} scenes, {} meshes",
//!     document.scene_count(),
//!     document.mesh_count());
//!
//! let mesh = document.mesh(0)?;
//! println!("{} triangles", mesh.triangle_count());
//! ```

pub mod collada;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use collada::{open_dae, open_dae_from_string, ColladaDocument, ImportError, ImportResult};
pub use material::{MaterialChannel, PhongMaterial};
pub use mesh::{Mesh, MeshPrimitive};
pub use scene::{Object, ObjectKind, Scene};
pub use texture::{ImageData, ImageDecoder, ImageSource, TextureData, TextureType, TgaDecoder};
