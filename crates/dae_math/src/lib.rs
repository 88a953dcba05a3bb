// Re-export glam for convenience
pub use glam::*;

// Bounding volumes
mod aabb;
pub use aabb::Aabb;

// Node transform operations
mod transform;
pub use transform::{compose_transform_ops, TransformOp};
