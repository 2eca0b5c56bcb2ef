use crate::error::{ArError, Result};
use crate::gfx::{
    pose::Pose,
    resources::material::{Material, MaterialId, MaterialManager},
};
use crate::placement::traits::SceneTarget;

use super::object::{Object, ObjectHandle, Shape};

/// Headless scene containing objects and materials
///
/// Holds exactly the state a renderer would read each frame: per-object
/// visibility, pose and material reference. Objects are never removed, so
/// handles stay valid for the lifetime of the scene.
#[derive(Default)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
}

impl Scene {
    /// Creates an empty scene with only the default material
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Adds an object and returns its handle
    pub fn add_object(&mut self, object: Object) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len());
        log::debug!("Added object '{}' as {:?}", object.name, handle);
        self.objects.push(object);
        handle
    }

    /// Convenience for adding a visible object of `shape` named `name`
    pub fn add_shape(&mut self, name: &str, shape: Shape) -> ObjectHandle {
        self.add_object(Object::new(name, shape))
    }

    /// Adds a material and returns its ID
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.material_manager.add_material(material)
    }

    /// Gets immutable reference to an object by handle
    pub fn get_object(&self, handle: ObjectHandle) -> Option<&Object> {
        self.objects.get(handle.0)
    }

    /// Gets mutable reference to an object by handle
    pub fn get_object_mut(&mut self, handle: ObjectHandle) -> Option<&mut Object> {
        self.objects.get_mut(handle.0)
    }

    /// Like [`Scene::get_object`] but failing on a foreign handle
    pub fn object(&self, handle: ObjectHandle) -> Result<&Object> {
        self.get_object(handle)
            .ok_or(ArError::UnknownObject(handle))
    }

    pub fn object_mut(&mut self, handle: ObjectHandle) -> Result<&mut Object> {
        self.get_object_mut(handle)
            .ok_or(ArError::UnknownObject(handle))
    }

    /// Finds the first object called `name`
    pub fn find_by_name(&self, name: &str) -> Option<ObjectHandle> {
        self.objects
            .iter()
            .position(|obj| obj.name == name)
            .map(ObjectHandle)
    }

    /// Handles of every object with its visibility flag set
    pub fn visible_objects(&self) -> Vec<ObjectHandle> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| obj.visible)
            .map(|(i, _)| ObjectHandle(i))
            .collect()
    }

    /// Gets material for rendering an object
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.get_material_id())
    }

    /// Gets all object names for display
    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns `desired_name`, or `desired_name (n)` for the first free `n`
    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            visible_count: self.objects.iter().filter(|obj| obj.visible).count(),
            material_count: self.material_manager.len(),
        }
    }
}

impl SceneTarget for Scene {
    fn set_visible(&mut self, handle: ObjectHandle, visible: bool) -> Result<()> {
        self.object_mut(handle)?.set_visible(visible);
        Ok(())
    }

    fn apply_pose(&mut self, handle: ObjectHandle, pose: &Pose) -> Result<()> {
        self.object_mut(handle)?.set_pose(*pose);
        Ok(())
    }

    fn set_material(&mut self, handle: ObjectHandle, material: &MaterialId) -> Result<()> {
        if !self.material_manager.contains(material) {
            return Err(ArError::UnknownMaterial(material.clone()));
        }
        self.object_mut(handle)?.set_material(material);
        Ok(())
    }

    fn clone_object(&mut self, handle: ObjectHandle, name: &str) -> Result<ObjectHandle> {
        let name = self.ensure_unique_name(name);
        let mut copy = self.object(handle)?.clone();
        copy.set_name(name);
        Ok(self.add_object(copy))
    }
}

/// Scene statistics for debugging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub visible_count: usize,
    pub material_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::material::{GREEN, RED};
    use cgmath::Vector3;

    #[test]
    fn test_add_and_lookup() {
        let mut scene = Scene::new();
        let handle = scene.add_shape("box", Shape::cube(0.2));

        assert_eq!(scene.get_object_count(), 1);
        assert_eq!(scene.object(handle).unwrap().name, "box");
        assert_eq!(scene.find_by_name("box"), Some(handle));
        assert_eq!(scene.find_by_name("missing"), None);
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let mut scene = Scene::new();
        let err = scene.set_visible(ObjectHandle(7), true).unwrap_err();
        assert_eq!(err, ArError::UnknownObject(ObjectHandle(7)));
    }

    #[test]
    fn test_clone_copies_pose_material_and_visibility() {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::emissive("mat1", RED));
        let pose = Pose::from_position(Vector3::new(1.0, 0.0, 2.0));
        let template = scene.add_object(
            Object::new("box", Shape::cube(0.2))
                .hidden()
                .with_pose(pose)
                .with_material(&mat),
        );

        let copy = scene.clone_object(template, "clone").unwrap();

        assert_ne!(copy, template);
        let cloned = scene.object(copy).unwrap();
        assert_eq!(cloned.name, "clone");
        assert_eq!(cloned.pose, pose);
        assert!(!cloned.visible);
        assert_eq!(cloned.get_material_id(), Some(&mat));
    }

    #[test]
    fn test_clone_has_independent_transform() {
        let mut scene = Scene::new();
        let template = scene.add_shape("box", Shape::cube(0.2));
        let copy = scene.clone_object(template, "clone").unwrap();

        let moved = Pose::from_position(Vector3::new(5.0, 5.0, 5.0));
        scene.apply_pose(copy, &moved).unwrap();

        assert_eq!(scene.object(template).unwrap().pose, Pose::identity());
        assert_eq!(scene.object(copy).unwrap().pose, moved);
    }

    #[test]
    fn test_clone_names_are_unique() {
        let mut scene = Scene::new();
        let template = scene.add_shape("box", Shape::cube(0.2));
        let a = scene.clone_object(template, "clone").unwrap();
        let b = scene.clone_object(template, "clone").unwrap();

        assert_eq!(scene.object(a).unwrap().name, "clone");
        assert_eq!(scene.object(b).unwrap().name, "clone (1)");
    }

    #[test]
    fn test_set_material_requires_known_material() {
        let mut scene = Scene::new();
        let handle = scene.add_shape("box", Shape::cube(0.2));
        let green = scene.add_material(Material::emissive("mat2", GREEN));

        scene.set_material(handle, &green).unwrap();
        assert_eq!(scene.get_material_for_object(scene.object(handle).unwrap()).emissive, GREEN);

        let err = scene.set_material(handle, &"mat9".to_string()).unwrap_err();
        assert_eq!(err, ArError::UnknownMaterial("mat9".to_string()));
    }

    #[test]
    fn test_statistics_count_visible() {
        let mut scene = Scene::new();
        scene.add_shape("a", Shape::cube(1.0));
        scene.add_object(Object::new("b", Shape::cube(1.0)).hidden());

        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, 2);
        assert_eq!(stats.visible_count, 1);
        assert_eq!(stats.material_count, 1);
        assert_eq!(scene.visible_objects(), vec![ObjectHandle(0)]);
    }
}
