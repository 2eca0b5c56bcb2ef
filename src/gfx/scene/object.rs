use cgmath::Matrix4;

use crate::gfx::pose::Pose;
use crate::gfx::resources::material::MaterialId;

/// Stable reference to an object inside a [`Scene`](super::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub(crate) usize);

impl ObjectHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Geometry an object was built from
///
/// Shapes are descriptors only; cloning an object copies the descriptor, which
/// stands in for sharing the underlying geometry buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Ground { width: f32, height: f32 },
    Box { width: f32, height: f32, depth: f32 },
    Torus { diameter: f32, thickness: f32 },
}

impl Shape {
    /// Axis-aligned cube with edge length `size`
    pub fn cube(size: f32) -> Self {
        Shape::Box {
            width: size,
            height: size,
            depth: size,
        }
    }

    /// Half extents of the shape's local bounding box
    pub fn half_extents(&self) -> [f32; 3] {
        match *self {
            Shape::Ground { width, height } => [width * 0.5, 0.0, height * 0.5],
            Shape::Box {
                width,
                height,
                depth,
            } => [width * 0.5, height * 0.5, depth * 0.5],
            Shape::Torus {
                diameter,
                thickness,
            } => {
                let r = (diameter + thickness) * 0.5;
                [r, thickness * 0.5, r]
            }
        }
    }
}

/// A renderable object: geometry, pose, visibility flag and material reference
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    pub shape: Shape,
    pub pose: Pose,
    pub visible: bool,
    material_id: Option<MaterialId>,
}

impl Object {
    /// Create a new visible object at the identity pose
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            pose: Pose::identity(),
            visible: true,
            material_id: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Sets the material reference by ID
    pub fn set_material(&mut self, material_id: &str) {
        self.material_id = Some(material_id.to_string());
    }

    pub fn clear_material(&mut self) {
        self.material_id = None;
    }

    pub fn get_material_id(&self) -> Option<&MaterialId> {
        self.material_id.as_ref()
    }

    /// Current transform recomposed from the pose
    pub fn transform(&self) -> Matrix4<f32> {
        self.pose.to_matrix()
    }

    /// Builder pattern: start hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Builder pattern: start at `pose`
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Builder pattern: assign a material
    pub fn with_material(mut self, material_id: &str) -> Self {
        self.set_material(material_id);
        self
    }
}
