//! Hit-test results as delivered by the XR runtime
//!
//! Each frame the runtime reports zero or more candidate intersections of the
//! viewer ray with detected real-world surfaces, ordered by its own priority.

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::gfx::pose::Pose;
use crate::placement::traits::PoseSource;

/// One candidate intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestResult {
    /// World transform of the hit, as reported by the runtime
    pub transformation_matrix: Matrix4<f32>,
}

impl HitTestResult {
    pub fn new(transformation_matrix: Matrix4<f32>) -> Self {
        Self {
            transformation_matrix,
        }
    }

    /// Hit on a surface at `position` with no rotation
    pub fn at(position: Vector3<f32>) -> Self {
        Self::new(Matrix4::from_translation(position))
    }

    pub fn from_pose(pose: &Pose) -> Self {
        Self::new(pose.to_matrix())
    }

    /// Decomposed pose of the hit
    pub fn pose(&self) -> Pose {
        Pose::decompose(&self.transformation_matrix)
    }
}

impl Default for HitTestResult {
    fn default() -> Self {
        Self::new(Matrix4::identity())
    }
}

impl PoseSource for HitTestResult {
    fn current_pose(&self) -> Option<Pose> {
        Some(self.pose())
    }
}

/// A frame's candidate list: the first candidate wins
impl PoseSource for [HitTestResult] {
    fn current_pose(&self) -> Option<Pose> {
        self.first().map(HitTestResult::pose)
    }
}

impl PoseSource for Option<HitTestResult> {
    fn current_pose(&self) -> Option<Pose> {
        self.as_ref().map(HitTestResult::pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate_wins() {
        let frame = [
            HitTestResult::at(Vector3::new(1.0, 0.0, 0.0)),
            HitTestResult::at(Vector3::new(2.0, 0.0, 0.0)),
        ];
        let pose = frame[..].current_pose().unwrap();
        assert_eq!(pose.position, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_frame_has_no_pose() {
        let frame: [HitTestResult; 0] = [];
        assert!(frame[..].current_pose().is_none());
        assert!(None::<HitTestResult>.current_pose().is_none());
    }

    #[test]
    fn test_pose_round_trip_position() {
        let pose = Pose::from_position(Vector3::new(0.0, -1.0, 3.0));
        let hit = HitTestResult::from_pose(&pose);
        assert_eq!(hit.pose().position, pose.position);
    }
}
