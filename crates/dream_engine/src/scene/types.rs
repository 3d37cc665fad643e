//! Scene description data model
//!
//! These types are the wire contract handed to the renderer. Field names follow
//! the renderer's camelCase JSON; optional fields are omitted when absent.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::materials::MaterialProperties;

/// Geometric primitive of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Unit sphere
    Sphere,
    /// Unit cube
    Box,
    /// Upright cylinder
    Cylinder,
    /// Upright cone
    Cone,
    /// Ring
    Torus,
}

impl PrimitiveType {
    /// Every primitive the renderer understands
    pub const ALL: [Self; 5] = [Self::Sphere, Self::Box, Self::Cylinder, Self::Cone, Self::Torus];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Torus => "torus",
        }
    }
}

/// Which faces of a mesh the renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Outside faces only
    Front,
    /// Inside faces only (enclosing shells such as cave walls)
    Back,
    /// Both
    Double,
}

/// Renderer hints attached to a scene object
///
/// Material channels are flattened in beside the effect flags, so the JSON
/// form is a single flat object such as
/// `{"emissive": "#ff5e00", "emissiveIntensity": 0.8, "hasTrail": true}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectProperties {
    /// Surface material channels
    #[serde(flatten)]
    pub material: MaterialProperties,
    /// Leaves a fading trail while animated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_trail: Option<bool>,
    /// Emits a small particle cloud
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_particles: Option<bool>,
    /// Face culling override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Refraction ratio for glass-like bodies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refraction_ratio: Option<f32>,
    /// Reflectivity for glass-like bodies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflectivity: Option<f32>,
}

impl ObjectProperties {
    /// Properties carrying only a material
    pub fn from_material(material: MaterialProperties) -> Self {
        Self {
            material,
            ..Default::default()
        }
    }

    /// True when no hint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Mark as trailing
    pub fn with_trail(mut self) -> Self {
        self.has_trail = Some(true);
        self
    }

    /// Mark as particle-emitting
    pub fn with_particles(mut self) -> Self {
        self.has_particles = Some(true);
        self
    }

    /// Set face culling
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Set glass refraction/reflectivity
    pub fn with_refraction(mut self, ratio: f32, reflectivity: Option<f32>) -> Self {
        self.refraction_ratio = Some(ratio);
        self.reflectivity = reflectivity;
        self
    }
}

impl From<MaterialProperties> for ObjectProperties {
    fn from(material: MaterialProperties) -> Self {
        Self::from_material(material)
    }
}

/// One placed primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Geometry
    #[serde(rename = "type")]
    pub primitive: PrimitiveType,
    /// World position
    pub position: Vec3,
    /// Euler angles in radians; identity when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    /// Per-axis scale; unit when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
    /// Hex RGB color; white when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Renderer hints
    #[serde(default, skip_serializing_if = "ObjectProperties::is_empty")]
    pub properties: ObjectProperties,
}

impl SceneObject {
    /// Create an object at `position` with no rotation, scale, color or hints
    pub fn new(primitive: PrimitiveType, position: Vec3) -> Self {
        Self {
            primitive,
            position,
            rotation: None,
            scale: None,
            color: None,
            properties: ObjectProperties::default(),
        }
    }

    /// Set rotation
    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set scale
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set color
    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replace all hints
    pub fn with_properties(mut self, properties: ObjectProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Replace the material channels, keeping effect flags
    pub fn with_material(mut self, material: MaterialProperties) -> Self {
        self.properties.material = material;
        self
    }

    /// Magnify about the world origin: position and scale both grow by `factor`
    pub fn magnified(mut self, factor: f32) -> Self {
        self.position *= factor;
        self.scale = Some(self.scale.unwrap_or_else(|| Vec3::new(1.0, 1.0, 1.0)) * factor);
        self
    }
}

/// Ambient light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    /// Hex color
    pub color: String,
    /// Nominally 0.0-1.0
    pub intensity: f32,
}

/// Directional light; `position` is a direction source, not an emitter location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Hex color
    pub color: String,
    /// May exceed 1.0
    pub intensity: f32,
    /// Direction source
    pub position: Vec3,
}

/// Scene lighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    /// Always present
    pub ambient: AmbientLight,
    /// Optional key light
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directional: Option<DirectionalLight>,
}

impl Lighting {
    /// Ambient-only lighting
    pub fn ambient(color: impl Into<String>, intensity: f32) -> Self {
        Self {
            ambient: AmbientLight {
                color: color.into(),
                intensity,
            },
            directional: None,
        }
    }

    /// Add a directional light
    pub fn with_directional(mut self, color: impl Into<String>, intensity: f32, position: Vec3) -> Self {
        self.directional = Some(DirectionalLight {
            color: color.into(),
            intensity,
            position,
        });
        self
    }
}

/// Initial viewpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Target point
    pub look_at: Vec3,
}

impl Camera {
    /// Camera at `position` looking at `look_at`
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }
}

/// Fog falloff used by the renderer when no density is given
pub const DEFAULT_FOG_FAR: f32 = 50.0;

/// Atmosphere hints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sky_color: Option<String>,
    /// Fog color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fog_color: Option<String>,
    /// Small positive density, roughly 0.005-0.04
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fog_density: Option<f32>,
}

impl Environment {
    /// Sky and fog in one go
    pub fn new(sky_color: impl Into<String>, fog_color: impl Into<String>, fog_density: f32) -> Self {
        Self {
            sky_color: Some(sky_color.into()),
            fog_color: Some(fog_color.into()),
            fog_density: Some(fog_density),
        }
    }

    /// Distance at which fog becomes opaque; inversely proportional to density
    pub fn fog_far_distance(&self) -> f32 {
        match self.fog_density {
            Some(density) if density > 0.0 => 100.0 / density,
            _ => DEFAULT_FOG_FAR,
        }
    }
}

/// Complete scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Placed objects in creation order
    pub objects: Vec<SceneObject>,
    /// Lighting
    pub lighting: Lighting,
    /// Camera
    pub camera: Camera,
    /// Atmosphere
    #[serde(default)]
    pub environment: Environment,
}

impl SceneConfig {
    /// Number of objects matching `predicate`
    pub fn count_where(&self, predicate: impl Fn(&SceneObject) -> bool) -> usize {
        self.objects.iter().filter(|object| predicate(object)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{uniform, vec3};
    use crate::materials::MaterialBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn test_object_wire_format() {
        let object = SceneObject::new(PrimitiveType::Sphere, vec3(1.0, 2.0, 3.0))
            .scaled(uniform(0.5))
            .colored("#ff5e00")
            .with_properties(
                ObjectProperties::from_material(
                    MaterialBuilder::new().emissive("#ff5e00", 0.8).build(),
                )
                .with_trail(),
            );

        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["type"], "sphere");
        assert_eq!(json["position"], serde_json::json!([1.0, 2.0, 3.0]));
        assert!(json.get("rotation").is_none());
        assert_eq!(json["properties"]["emissive"], "#ff5e00");
        assert_eq!(json["properties"]["hasTrail"], true);
        assert!(json["properties"].get("metalness").is_none());
    }

    #[test]
    fn test_object_without_hints_omits_properties() {
        let object = SceneObject::new(PrimitiveType::Box, Vec3::zeros());
        let json = serde_json::to_value(&object).unwrap();
        assert!(json.get("properties").is_none());
    }

    #[test]
    fn test_unknown_primitive_is_rejected() {
        let result: Result<SceneObject, _> =
            serde_json::from_str(r#"{"type": "pyramid", "position": [0, 0, 0]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_camera_uses_look_at_key() {
        let camera = Camera::new(vec3(0.0, 5.0, 15.0), vec3(0.0, 0.0, -5.0));
        let json = serde_json::to_value(&camera).unwrap();
        assert_eq!(json["lookAt"], serde_json::json!([0.0, 0.0, -5.0]));
    }

    #[test]
    fn test_fog_far_distance() {
        assert_relative_eq!(Environment::new("#000", "#111", 0.02).fog_far_distance(), 5000.0);
        assert_relative_eq!(Environment::default().fog_far_distance(), DEFAULT_FOG_FAR);
    }

    #[test]
    fn test_magnified_scales_position_and_size() {
        let object = SceneObject::new(PrimitiveType::Cone, vec3(1.0, -2.0, 0.5)).magnified(3.0);
        assert_eq!(object.position, vec3(3.0, -6.0, 1.5));
        assert_eq!(object.scale, Some(uniform(3.0)));
    }
}
