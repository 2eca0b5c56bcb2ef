//! Pose representation and transform decomposition
//!
//! A [`Pose`] is the split form of an affine transform: scale, rotation and
//! position kept as separate components, the way renderable objects store them.
//! [`Pose::decompose`] extracts those components from a 4x4 matrix such as the
//! `transformation_matrix` reported by a hit-test.

use cgmath::{InnerSpace, Matrix, Matrix3, Matrix4, One, Quaternion, SquareMatrix, Vector3, Zero};

/// Scale, rotation and translation of a renderable object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub position: Vector3<f32>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Unit scale, no rotation, at the origin
    pub fn identity() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Quaternion::one(),
            position: Vector3::zero(),
        }
    }

    /// Creates a pose from its three components
    pub fn new(scale: Vector3<f32>, rotation: Quaternion<f32>, position: Vector3<f32>) -> Self {
        Self {
            scale,
            rotation,
            position,
        }
    }

    /// Identity pose moved to `position`
    pub fn from_position(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Builder pattern: replace the rotation
    pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: replace the scale
    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// Splits an affine transform into scale, rotation and position
    ///
    /// Scale is the length of each basis column. A negative determinant
    /// (mirrored transform) is folded into the X scale so the remaining
    /// rotation is proper. Zero-length axes keep a zero scale and an
    /// identity rotation.
    pub fn decompose(matrix: &Matrix4<f32>) -> Self {
        let position = matrix.w.truncate();

        let mut sx = matrix.x.truncate().magnitude();
        let sy = matrix.y.truncate().magnitude();
        let sz = matrix.z.truncate().magnitude();

        if matrix.determinant() < 0.0 {
            sx = -sx;
        }

        if sx == 0.0 || sy == 0.0 || sz == 0.0 {
            return Self {
                scale: Vector3::new(sx, sy, sz),
                rotation: Quaternion::one(),
                position,
            };
        }

        let basis = Matrix3::from_cols(
            matrix.x.truncate() / sx,
            matrix.y.truncate() / sy,
            matrix.z.truncate() / sz,
        );
        let rotation = Quaternion::from(basis).normalize();

        Self {
            scale: Vector3::new(sx, sy, sz),
            rotation,
            position,
        }
    }

    /// Recomposes the pose as `T * R * S`
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from(self.rotation);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    /// Same pose expressed as the transposed (row-major) matrix
    pub fn to_row_major(&self) -> Matrix4<f32> {
        self.to_matrix().transpose()
    }
}

impl From<Matrix4<f32>> for Pose {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self::decompose(&matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Rotation3};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn close_vec(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        close(a.x, b.x) && close(a.y, b.y) && close(a.z, b.z)
    }

    // q and -q describe the same rotation
    fn same_rotation(a: Quaternion<f32>, b: Quaternion<f32>) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn test_identity_decomposes_to_identity() {
        let pose = Pose::decompose(&Matrix4::identity());
        assert_eq!(pose, Pose::identity());
    }

    #[test]
    fn test_translation_only() {
        let pose = Pose::decompose(&Matrix4::from_translation(Vector3::new(1.0, -2.0, 0.5)));
        assert!(close_vec(pose.position, Vector3::new(1.0, -2.0, 0.5)));
        assert!(close_vec(pose.scale, Vector3::new(1.0, 1.0, 1.0)));
        assert!(same_rotation(pose.rotation, Quaternion::one()));
    }

    #[test]
    fn test_trs_recovers_components() {
        let rotation = Quaternion::from_angle_y(Deg(35.0));
        let original = Pose::new(
            Vector3::new(0.5, 2.0, 1.5),
            rotation,
            Vector3::new(3.0, 0.25, -4.0),
        );

        let pose = Pose::decompose(&original.to_matrix());

        assert!(close_vec(pose.scale, original.scale));
        assert!(close_vec(pose.position, original.position));
        assert!(same_rotation(pose.rotation, rotation));
    }

    #[test]
    fn test_mirrored_transform_folds_sign_into_x() {
        let matrix = Matrix4::from_nonuniform_scale(-2.0, 1.0, 1.0);
        let pose = Pose::decompose(&matrix);

        assert!(close(pose.scale.x, -2.0));
        assert!(close(pose.scale.y, 1.0));
        assert!(same_rotation(pose.rotation, Quaternion::one()));
    }

    #[test]
    fn test_degenerate_axis_keeps_identity_rotation() {
        let matrix = Matrix4::from_nonuniform_scale(1.0, 0.0, 1.0);
        let pose = Pose::decompose(&matrix);
        assert_eq!(pose.rotation, Quaternion::one());
        assert!(close(pose.scale.y, 0.0));
    }
}
