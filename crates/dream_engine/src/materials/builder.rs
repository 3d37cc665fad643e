//! Material property bundle and its builder
//!
//! A bundle is a flat set of optional renderer channels. Absent channels are
//! left to the renderer's defaults, so presets only spell out what they change.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Surface and animation hints for one object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProperties {
    /// Emissive hex color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<String>,
    /// Emissive strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive_intensity: Option<f32>,
    /// 0.0 = dielectric, 1.0 = metallic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f32>,
    /// 0.0 = mirror smooth, 1.0 = completely rough
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,
    /// 0.0 = invisible, 1.0 = opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Alpha blending on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    /// Environment reflection strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_map_intensity: Option<f32>,
    /// Clearcoat layer strength (glass-like materials)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearcoat: Option<f32>,
    /// Clearcoat roughness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearcoat_roughness: Option<f32>,
    /// Emissive pulsing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulsate: Option<bool>,
    /// Pulses per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulsate_speed: Option<f32>,
    /// Vertical bobbing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float: Option<bool>,
    /// Bobbing height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_amplitude: Option<f32>,
    /// Bobbing rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_speed: Option<f32>,
    /// Continuous spin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<bool>,
    /// Radians per frame around each axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_speed: Option<Vec3>,
}

impl MaterialProperties {
    /// Whether the bundle defines an emissive channel
    pub fn is_emissive(&self) -> bool {
        self.emissive.is_some()
    }

    /// Retarget the emissive channel to `color`; no-op for non-emissive bundles
    pub fn tinted(mut self, color: &str) -> Self {
        if self.emissive.is_some() {
            self.emissive = Some(color.to_string());
        }
        self
    }
}

/// Builder for material bundles
///
/// # Examples
/// ```
/// use dream_engine::materials::MaterialBuilder;
///
/// let lantern = MaterialBuilder::new()
///     .emissive("#ff5e00", 0.8)
///     .roughness(0.4)
///     .float(0.2, 0.6)
///     .build();
/// assert_eq!(lantern.emissive.as_deref(), Some("#ff5e00"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaterialBuilder {
    props: MaterialProperties,
}

impl MaterialBuilder {
    /// Start from an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing bundle (typically a preset) and override channels
    pub fn from_material(props: MaterialProperties) -> Self {
        Self { props }
    }

    /// Set metalness
    pub fn metalness(mut self, metalness: f32) -> Self {
        self.props.metalness = Some(metalness.clamp(0.0, 1.0));
        self
    }

    /// Set roughness
    pub fn roughness(mut self, roughness: f32) -> Self {
        self.props.roughness = Some(roughness.clamp(0.0, 1.0));
        self
    }

    /// Set emissive color and strength
    pub fn emissive(mut self, color: impl Into<String>, intensity: f32) -> Self {
        self.props.emissive = Some(color.into());
        self.props.emissive_intensity = Some(intensity.max(0.0));
        self
    }

    /// Set emissive color, keeping any strength already set
    pub fn emissive_color(mut self, color: impl Into<String>) -> Self {
        self.props.emissive = Some(color.into());
        self
    }

    /// Set emissive strength only
    pub fn emissive_intensity(mut self, intensity: f32) -> Self {
        self.props.emissive_intensity = Some(intensity.max(0.0));
        self
    }

    /// Alpha-blended with the given opacity
    pub fn transparent(mut self, opacity: f32) -> Self {
        self.props.transparent = Some(true);
        self.props.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set opacity only
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set environment map strength
    pub fn env_map_intensity(mut self, intensity: f32) -> Self {
        self.props.env_map_intensity = Some(intensity.max(0.0));
        self
    }

    /// Add a clearcoat layer
    pub fn clearcoat(mut self, strength: f32, roughness: f32) -> Self {
        self.props.clearcoat = Some(strength.clamp(0.0, 1.0));
        self.props.clearcoat_roughness = Some(roughness.clamp(0.0, 1.0));
        self
    }

    /// Pulse the emissive channel
    pub fn pulsate(mut self, speed: f32) -> Self {
        self.props.pulsate = Some(true);
        self.props.pulsate_speed = Some(speed);
        self
    }

    /// Bob up and down
    pub fn float(mut self, amplitude: f32, speed: f32) -> Self {
        self.props.float = Some(true);
        self.props.float_amplitude = Some(amplitude);
        self.props.float_speed = Some(speed);
        self
    }

    /// Spin continuously
    pub fn rotate(mut self, speed: Vec3) -> Self {
        self.props.rotate = Some(true);
        self.props.rotate_speed = Some(speed);
        self
    }

    /// Finish
    pub fn build(self) -> MaterialProperties {
        self.props
    }
}
