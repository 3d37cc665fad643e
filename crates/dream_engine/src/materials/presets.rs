//! Named material presets
//!
//! The preset set is closed: generators refer to presets through
//! [`MaterialPreset`], and the only stringly-typed entry point,
//! [`MaterialLibrary::get_material_by_name`], rejects anything outside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{MaterialBuilder, MaterialError, MaterialProperties, MaterialResult};
use crate::foundation::math::Vec3;

/// Every named material bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    /// Pulsing yellow point of light
    CosmicStar,
    /// Slowly spinning rough body
    CosmicPlanet,
    /// Drifting translucent violet cloud
    CosmicNebula,
    /// Clearcoated translucent crystal
    CosmicCrystal,
    /// Metallic translucent spinning ring
    CosmicRing,
    /// Softly glowing bobbing bloom
    GardenFlower,
    /// Translucent swaying foliage
    GardenLeaf,
    /// Rough bark
    GardenBark,
    /// Fully rough soil
    GardenGround,
    /// Rough stone
    GardenStone,
    /// Faintly glowing swaying coral
    UnderwaterCoral,
    /// Glossy swimming fish
    UnderwaterFish,
    /// Translucent strongly swaying kelp
    UnderwaterKelp,
    /// Nearly invisible water volume
    UnderwaterWater,
    /// Rough sand
    UnderwaterSand,
    /// Clear glass
    Glass,
    /// Polished metal
    Metal,
    /// Generic matte fallback
    Organic,
    /// Pulsing white glow
    Luminous,
    /// Drifting translucent lavender
    Ethereal,
}

impl MaterialPreset {
    /// All presets, grouped by theme
    pub const ALL: [Self; 20] = [
        Self::CosmicStar,
        Self::CosmicPlanet,
        Self::CosmicNebula,
        Self::CosmicCrystal,
        Self::CosmicRing,
        Self::GardenFlower,
        Self::GardenLeaf,
        Self::GardenBark,
        Self::GardenGround,
        Self::GardenStone,
        Self::UnderwaterCoral,
        Self::UnderwaterFish,
        Self::UnderwaterKelp,
        Self::UnderwaterWater,
        Self::UnderwaterSand,
        Self::Glass,
        Self::Metal,
        Self::Organic,
        Self::Luminous,
        Self::Ethereal,
    ];

    /// Preset name as used in configuration and logs
    pub fn name(self) -> &'static str {
        match self {
            Self::CosmicStar => "cosmic_star",
            Self::CosmicPlanet => "cosmic_planet",
            Self::CosmicNebula => "cosmic_nebula",
            Self::CosmicCrystal => "cosmic_crystal",
            Self::CosmicRing => "cosmic_ring",
            Self::GardenFlower => "garden_flower",
            Self::GardenLeaf => "garden_leaf",
            Self::GardenBark => "garden_bark",
            Self::GardenGround => "garden_ground",
            Self::GardenStone => "garden_stone",
            Self::UnderwaterCoral => "underwater_coral",
            Self::UnderwaterFish => "underwater_fish",
            Self::UnderwaterKelp => "underwater_kelp",
            Self::UnderwaterWater => "underwater_water",
            Self::UnderwaterSand => "underwater_sand",
            Self::Glass => "glass",
            Self::Metal => "metal",
            Self::Organic => "organic",
            Self::Luminous => "luminous",
            Self::Ethereal => "ethereal",
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialPreset {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| MaterialError::UnknownPreset(s.to_string()))
    }
}

/// Preset material lookup
pub struct MaterialLibrary;

impl MaterialLibrary {
    /// Material bundle for a preset
    pub fn get_material(preset: MaterialPreset) -> MaterialProperties {
        match preset {
            MaterialPreset::CosmicStar => MaterialBuilder::new()
                .metalness(0.1)
                .roughness(0.1)
                .emissive("#ffff88", 0.8)
                .pulsate(2.0)
                .env_map_intensity(0.5)
                .build(),
            MaterialPreset::CosmicPlanet => MaterialBuilder::new()
                .metalness(0.2)
                .roughness(0.8)
                .env_map_intensity(0.7)
                .rotate(Vec3::new(0.0, 0.002, 0.0))
                .build(),
            MaterialPreset::CosmicNebula => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.2)
                .transparent(0.6)
                .emissive("#9b59b6", 0.4)
                .float(0.5, 0.8)
                .build(),
            MaterialPreset::CosmicCrystal => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.1)
                .transparent(0.8)
                .clearcoat(1.0, 0.1)
                .emissive("#4a90e2", 0.3)
                .env_map_intensity(1.0)
                .build(),
            MaterialPreset::CosmicRing => MaterialBuilder::new()
                .metalness(0.8)
                .roughness(0.3)
                .transparent(0.7)
                .emissive("#7a288a", 0.2)
                .rotate(Vec3::new(0.0, 0.01, 0.0))
                .build(),

            MaterialPreset::GardenFlower => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.6)
                .emissive("#ff69b4", 0.1)
                .float(0.1, 1.5)
                .build(),
            MaterialPreset::GardenLeaf => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.8)
                .transparent(0.9)
                .float(0.05, 0.5)
                .build(),
            MaterialPreset::GardenBark => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.9)
                .env_map_intensity(0.2)
                .build(),
            MaterialPreset::GardenGround => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(1.0)
                .env_map_intensity(0.1)
                .build(),
            MaterialPreset::GardenStone => MaterialBuilder::new()
                .metalness(0.1)
                .roughness(0.9)
                .env_map_intensity(0.3)
                .build(),

            MaterialPreset::UnderwaterCoral => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.7)
                .emissive("#ff7f50", 0.2)
                .float(0.02, 0.3)
                .build(),
            MaterialPreset::UnderwaterFish => MaterialBuilder::new()
                .metalness(0.4)
                .roughness(0.2)
                .env_map_intensity(0.8)
                .float(0.3, 2.0)
                .build(),
            MaterialPreset::UnderwaterKelp => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.8)
                .transparent(0.9)
                .float(0.8, 0.4)
                .build(),
            MaterialPreset::UnderwaterWater => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.1)
                .transparent(0.3)
                .env_map_intensity(1.0)
                .float(0.1, 1.0)
                .build(),
            MaterialPreset::UnderwaterSand => MaterialBuilder::new()
                .metalness(0.1)
                .roughness(0.9)
                .env_map_intensity(0.2)
                .build(),

            MaterialPreset::Glass => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.1)
                .transparent(0.2)
                .clearcoat(1.0, 0.1)
                .env_map_intensity(1.0)
                .build(),
            MaterialPreset::Metal => MaterialBuilder::new()
                .metalness(1.0)
                .roughness(0.2)
                .env_map_intensity(1.0)
                .build(),
            MaterialPreset::Organic => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.8)
                .env_map_intensity(0.3)
                .build(),
            MaterialPreset::Luminous => MaterialBuilder::new()
                .metalness(0.1)
                .roughness(0.3)
                .emissive("#ffffff", 0.5)
                .pulsate(1.0)
                .build(),
            MaterialPreset::Ethereal => MaterialBuilder::new()
                .metalness(0.0)
                .roughness(0.2)
                .transparent(0.4)
                .emissive("#e6e6fa", 0.3)
                .float(0.2, 0.8)
                .build(),
        }
    }

    /// Material bundle by preset name
    ///
    /// Names outside the preset set are a configuration defect and are
    /// reported as [`MaterialError::UnknownPreset`].
    pub fn get_material_by_name(name: &str) -> MaterialResult<MaterialProperties> {
        let preset: MaterialPreset = name.parse()?;
        Ok(Self::get_material(preset))
    }

    /// Preset with its emissive channel retargeted to `color`
    ///
    /// Presets without an emissive channel come back unchanged.
    pub fn get_material_with_color(preset: MaterialPreset, color: &str) -> MaterialProperties {
        Self::get_material(preset).tinted(color)
    }

    /// List all available preset names
    pub fn list_presets() -> Vec<&'static str> {
        MaterialPreset::ALL.iter().map(|preset| preset.name()).collect()
    }
}
