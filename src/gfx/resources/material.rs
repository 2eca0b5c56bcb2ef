//! Material library for placed objects
//!
//! Materials are stored centrally in [`MaterialManager`] and objects reference
//! them by ID, so reassigning an object's material is a reference swap and every
//! object pointing at the same ID shares one definition.

use std::collections::HashMap;

use crate::error::{ArError, Result};

/// Material ID for referencing materials
pub type MaterialId = String;

/// Linear RGB colour
pub type Color3 = [f32; 3];

pub const RED: Color3 = [1.0, 0.0, 0.0];
pub const GREEN: Color3 = [0.0, 1.0, 0.0];
pub const BLACK: Color3 = [0.0, 0.0, 0.0];
pub const WHITE: Color3 = [1.0, 1.0, 1.0];

/// Unlit-style material definition
///
/// Only the colour channels the placement demo drives are modelled: an
/// emissive colour that reads as the object's colour in AR passthrough, and a
/// specular colour that is normally black so highlights don't wash it out.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub diffuse: Color3,
    pub emissive: Color3,
    pub specular: Color3,
    pub alpha: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            diffuse: [0.8, 0.8, 0.8],
            emissive: BLACK,
            specular: WHITE,
            alpha: 1.0,
        }
    }
}

impl Material {
    /// Creates a material with the given emissive colour and black specular
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `emissive` - Emissive RGB colour
    pub fn emissive(name: &str, emissive: Color3) -> Self {
        Self {
            name: name.to_string(),
            emissive,
            specular: BLACK,
            ..Default::default()
        }
    }

    /// Builder pattern: Set diffuse colour
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse = [r, g, b];
        self
    }

    /// Builder pattern: Set emissive colour
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emissive = [r, g, b];
        self
    }

    /// Builder pattern: Set specular colour
    pub fn with_specular(mut self, r: f32, g: f32, b: f32) -> Self {
        self.specular = [r, g, b];
        self
    }

    /// Builder pattern: Set alpha transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

/// Manages all materials of a scene
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material_id: MaterialId,
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialManager {
    /// Creates a new material manager with a default material
    pub fn new() -> Self {
        let default_material = Material::default();
        let default_material_id = default_material.name.clone();

        let mut materials = HashMap::new();
        materials.insert(default_material_id.clone(), default_material);

        Self {
            materials,
            default_material_id,
        }
    }

    /// Adds a material, replacing any existing material with the same name
    ///
    /// # Returns
    /// The ID the material is stored under
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = material.name.clone();
        if self.materials.insert(id.clone(), material).is_some() {
            log::debug!("Replaced material '{}'", id);
        }
        id
    }

    /// Gets a material by ID
    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Gets a mutable material by ID
    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Gets a material by ID, failing if it was never added
    pub fn require(&self, id: &str) -> Result<&Material> {
        self.get_material(id)
            .ok_or_else(|| ArError::UnknownMaterial(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.materials.contains_key(id)
    }

    /// Gets the default material
    pub fn get_default_material(&self) -> &Material {
        &self.materials[&self.default_material_id]
    }

    pub fn default_material_id(&self) -> &MaterialId {
        &self.default_material_id
    }

    /// Gets material for an object with fallback to default
    pub fn get_material_for_object(&self, material_id: Option<&MaterialId>) -> &Material {
        material_id
            .and_then(|id| self.get_material(id))
            .unwrap_or_else(|| self.get_default_material())
    }

    /// Lists all material IDs in name order
    pub fn list_materials(&self) -> Vec<&MaterialId> {
        let mut ids: Vec<_> = self.materials.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
