// Node transform operations
//
// COLLADA nodes carry an ordered list of <translate>, <rotate>, <scale> and
// <matrix> elements. They are composed in document order, each one applied on
// the right of the accumulated matrix.

use glam::{Mat4, Vec3};

/// A single transform element of a scene node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Translation (`<translate>`)
    Translate(Vec3),

    /// Rotation around an arbitrary axis, angle in degrees (`<rotate>`)
    Rotate { axis: Vec3, degrees: f32 },

    /// Non-uniform scale (`<scale>`)
    Scale(Vec3),

    /// Full 4x4 matrix (`<matrix>`)
    Matrix(Mat4),
}

impl TransformOp {
    /// Convert this operation to a transformation matrix.
    pub fn to_matrix(&self) -> Mat4 {
        match *self {
            TransformOp::Translate(t) => Mat4::from_translation(t),
            TransformOp::Rotate { axis, degrees } => {
                // A degenerate axis carries no rotation
                let axis = axis.normalize_or_zero();
                if axis == Vec3::ZERO {
                    Mat4::IDENTITY
                } else {
                    Mat4::from_axis_angle(axis, degrees.to_radians())
                }
            }
            TransformOp::Scale(s) => Mat4::from_scale(s),
            TransformOp::Matrix(m) => m,
        }
    }
}

/// Combine a list of operations into a single matrix, `T = T * op` in order.
pub fn compose_transform_ops(ops: &[TransformOp]) -> Mat4 {
    ops.iter()
        .fold(Mat4::IDENTITY, |result, op| result * op.to_matrix())
}
