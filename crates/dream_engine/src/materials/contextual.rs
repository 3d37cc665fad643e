//! Contextual material resolution
//!
//! Picks a preset from the scene's theme, the object's compositional role and
//! its primitive, then scales one channel by the role's intensity. Combinations
//! the table does not cover get the `organic` preset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{MaterialLibrary, MaterialPreset, MaterialProperties};
use crate::scene::{PrimitiveType, ThemeCategory};

/// Intensity used for roles outside [`ObjectRole`]
pub const DEFAULT_ROLE_INTENSITY: f32 = 0.5;

/// Compositional role of an object within its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectRole {
    /// Far filler
    Background,
    /// Supporting mass
    Midground,
    /// Close, prominent
    Foreground,
    /// The subject
    Focal,
    /// Small accents
    Detail,
}

impl ObjectRole {
    /// Channel multiplier for this role
    pub fn intensity(self) -> f32 {
        match self {
            Self::Focal => 1.0,
            Self::Foreground => 0.8,
            Self::Midground => 0.6,
            Self::Background => 0.4,
            Self::Detail => 0.3,
        }
    }

    /// Role name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Midground => "midground",
            Self::Foreground => "foreground",
            Self::Focal => "focal",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for ObjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(Self::Background),
            "midground" => Ok(Self::Midground),
            "foreground" => Ok(Self::Foreground),
            "focal" => Ok(Self::Focal),
            "detail" => Ok(Self::Detail),
            other => Err(format!("Unknown object role: '{}'", other)),
        }
    }
}

/// Which channel a rule scales by the role intensity
#[derive(Debug, Clone, Copy)]
enum Scaling {
    /// Preset used as-is
    Fixed,
    /// `emissiveIntensity = intensity * factor`
    Emissive(f32),
    /// `opacity = intensity`
    Opacity,
    /// `envMapIntensity = intensity`
    EnvMap,
}

/// One row of the decision table; `role: None` matches any role
struct ContextRule {
    theme: ThemeCategory,
    primitive: PrimitiveType,
    role: Option<ObjectRole>,
    preset: MaterialPreset,
    scaling: Scaling,
}

const fn rule(
    theme: ThemeCategory,
    primitive: PrimitiveType,
    role: Option<ObjectRole>,
    preset: MaterialPreset,
    scaling: Scaling,
) -> ContextRule {
    ContextRule { theme, primitive, role, preset, scaling }
}

// First match wins
const CONTEXT_RULES: &[ContextRule] = &[
    rule(ThemeCategory::Cosmic, PrimitiveType::Sphere, Some(ObjectRole::Focal), MaterialPreset::CosmicPlanet, Scaling::Emissive(1.0)),
    rule(ThemeCategory::Cosmic, PrimitiveType::Sphere, Some(ObjectRole::Background), MaterialPreset::CosmicStar, Scaling::Emissive(0.3)),
    rule(ThemeCategory::Cosmic, PrimitiveType::Torus, None, MaterialPreset::CosmicRing, Scaling::Opacity),
    rule(ThemeCategory::Garden, PrimitiveType::Sphere, Some(ObjectRole::Foreground), MaterialPreset::GardenFlower, Scaling::Emissive(1.0)),
    rule(ThemeCategory::Garden, PrimitiveType::Cylinder, None, MaterialPreset::GardenBark, Scaling::Fixed),
    rule(ThemeCategory::Garden, PrimitiveType::Box, Some(ObjectRole::Background), MaterialPreset::GardenGround, Scaling::Fixed),
    rule(ThemeCategory::Underwater, PrimitiveType::Cone, None, MaterialPreset::UnderwaterCoral, Scaling::Emissive(1.0)),
    rule(ThemeCategory::Underwater, PrimitiveType::Sphere, Some(ObjectRole::Foreground), MaterialPreset::UnderwaterFish, Scaling::EnvMap),
    rule(ThemeCategory::Underwater, PrimitiveType::Cylinder, None, MaterialPreset::UnderwaterKelp, Scaling::Fixed),
];

impl MaterialLibrary {
    /// Material for an object given its scene theme, role and primitive
    ///
    /// Narrative sub-themes resolve through their base theme.
    pub fn resolve_contextual(
        theme: ThemeCategory,
        role: ObjectRole,
        primitive: PrimitiveType,
    ) -> MaterialProperties {
        resolve(theme, Some(role), primitive)
    }

    /// Same as [`MaterialLibrary::resolve_contextual`] for a free-form role name
    ///
    /// Unrecognized roles only match role-agnostic rules and scale by
    /// [`DEFAULT_ROLE_INTENSITY`].
    pub fn resolve_contextual_named(
        theme: ThemeCategory,
        role: &str,
        primitive: PrimitiveType,
    ) -> MaterialProperties {
        resolve(theme, role.parse().ok(), primitive)
    }
}

fn resolve(theme: ThemeCategory, role: Option<ObjectRole>, primitive: PrimitiveType) -> MaterialProperties {
    let theme = theme.base();
    let intensity = role.map_or(DEFAULT_ROLE_INTENSITY, ObjectRole::intensity);

    let matched = CONTEXT_RULES.iter().find(|rule| {
        rule.theme == theme
            && rule.primitive == primitive
            && rule.role.map_or(true, |wanted| Some(wanted) == role)
    });

    let Some(rule) = matched else {
        return MaterialLibrary::get_material(MaterialPreset::Organic);
    };

    let mut material = MaterialLibrary::get_material(rule.preset);
    match rule.scaling {
        Scaling::Fixed => {}
        Scaling::Emissive(factor) => material.emissive_intensity = Some(intensity * factor),
        Scaling::Opacity => material.opacity = Some(intensity),
        Scaling::EnvMap => material.env_map_intensity = Some(intensity),
    }
    material
}
