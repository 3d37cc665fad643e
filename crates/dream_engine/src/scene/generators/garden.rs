//! Garden scene: ground, flowers, trees and a decorative patch
//!
//! Two cues in the text change the scene:
//! - lanterns replace the mushroom patch with the same number of floating lanterns
//! - a dreamer who is tiny sees the whole garden magnified, from near the ground

use rand::Rng;

use super::{cycle, mentions_any, mentions_word};
use crate::foundation::math::{uniform, vec3, Vec3};
use crate::foundation::random::Sampler;
use crate::materials::{MaterialBuilder, MaterialLibrary, MaterialPreset, ObjectRole};
use crate::scene::{
    Camera, Environment, Lighting, ObjectProperties, PrimitiveType, SceneConfig, SceneObject,
    ThemeCategory,
};

/// Flowers (stem + bloom each)
pub const FLOWER_COUNT: usize = 6;
/// Trees (trunk + foliage each)
pub const TREE_COUNT: usize = 3;
/// Mushrooms or lanterns (two objects each)
pub const DECORATION_COUNT: usize = 4;
/// World magnification when the dreamer is tiny
pub const TINY_VIEWER_SCALE: f32 = 3.0;

const FLOWER_PALETTE: [&str; FLOWER_COUNT] =
    ["#ff6b9d", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd", "#ff3838"];
const LANTERN_PALETTE: [&str; 4] = ["#ff9c41", "#ffc641", "#ff7c41", "#ffe141"];

const LANTERN_CUES: &[&str] = &["lantern"];
const TINY_VIEWER_WORDS: &[&str] = &["tiny", "shrunk", "shrank", "miniature"];
const TINY_VIEWER_PHRASES: &[&str] =
    &["ant-sized", "size of an ant", "i was small", "i am small", "i felt small"];

/// Variant toggles read from the description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GardenVariant {
    /// Lanterns instead of mushrooms
    pub lanterns: bool,
    /// Magnified world, low camera
    pub tiny_viewer: bool,
}

impl GardenVariant {
    /// Detect variant cues
    pub fn detect(description: &str) -> Self {
        let text = description.to_lowercase();
        Self {
            lanterns: mentions_any(&text, LANTERN_CUES),
            tiny_viewer: mentions_word(&text, TINY_VIEWER_WORDS)
                || mentions_any(&text, TINY_VIEWER_PHRASES),
        }
    }
}

/// Generate a garden scene
pub fn generate<R: Rng + ?Sized>(description: &str, rng: &mut R) -> SceneConfig {
    let variant = GardenVariant::detect(description);
    log::debug!("Garden scene variant: {:?}", variant);

    let mut sampler = Sampler::new(rng);
    let mut objects = Vec::with_capacity(1 + 2 * (FLOWER_COUNT + TREE_COUNT + DECORATION_COUNT));

    objects.push(
        SceneObject::new(PrimitiveType::Box, vec3(0.0, -2.0, 0.0))
            .scaled(vec3(20.0, 0.2, 20.0))
            .colored("#2d5016")
            .with_material(MaterialLibrary::resolve_contextual(
                ThemeCategory::Garden,
                ObjectRole::Background,
                PrimitiveType::Box,
            )),
    );

    let bloom = MaterialLibrary::resolve_contextual(ThemeCategory::Garden, ObjectRole::Foreground, PrimitiveType::Sphere);
    for i in 0..FLOWER_COUNT {
        let base = sampler.scatter(15.0, 0.0, 15.0);
        let color = cycle(&FLOWER_PALETTE, i);
        objects.push(
            SceneObject::new(PrimitiveType::Cylinder, base + vec3(0.0, -0.5, 0.0))
                .scaled(vec3(0.1, 1.5, 0.1))
                .colored("#4a7c59")
                .with_material(MaterialLibrary::get_material(MaterialPreset::GardenLeaf)),
        );
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, base + vec3(0.0, 0.7, 0.0))
                .scaled(uniform(0.8))
                .colored(color)
                .with_material(bloom.clone().tinted(color)),
        );
    }

    let bark = MaterialLibrary::resolve_contextual(ThemeCategory::Garden, ObjectRole::Midground, PrimitiveType::Cylinder);
    for _ in 0..TREE_COUNT {
        let base = sampler.scatter(12.0, 0.0, 12.0);
        objects.push(
            SceneObject::new(PrimitiveType::Cylinder, base + vec3(0.0, 1.0, 0.0))
                .scaled(vec3(0.3, 3.0, 0.3))
                .colored("#8b4513")
                .with_material(bark.clone()),
        );
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, base + vec3(0.0, 3.5, 0.0))
                .scaled(uniform(2.0))
                .colored("#228b22")
                .with_material(MaterialLibrary::get_material(MaterialPreset::GardenLeaf)),
        );
    }

    for i in 0..DECORATION_COUNT {
        if variant.lanterns {
            push_lantern(&mut objects, &mut sampler, i);
        } else {
            push_mushroom(&mut objects, &mut sampler);
        }
    }

    let mut camera = Camera::new(vec3(0.0, 8.0, 12.0), Vec3::zeros());
    let mut ambient_intensity = 0.6;
    if variant.tiny_viewer {
        objects = objects
            .into_iter()
            .map(|object| object.magnified(TINY_VIEWER_SCALE))
            .collect();
        camera = Camera::new(vec3(0.0, -4.5, 16.0), vec3(0.0, -1.0, 0.0));
        ambient_intensity = 0.45;
    }

    SceneConfig {
        objects,
        lighting: Lighting::ambient("#87ceeb", ambient_intensity)
            .with_directional("#ffd700", 1.2, vec3(5.0, 10.0, 5.0)),
        camera,
        environment: Environment::new("#87ceeb", "#98fb98", 0.005),
    }
}

fn push_mushroom<R: Rng + ?Sized>(objects: &mut Vec<SceneObject>, sampler: &mut Sampler<'_, R>) {
    let base = sampler.scatter(10.0, 0.0, 10.0);
    objects.push(
        SceneObject::new(PrimitiveType::Cylinder, base + vec3(0.0, -1.3, 0.0))
            .scaled(vec3(0.1, 0.4, 0.1))
            .colored("#f5f5dc")
            .with_material(MaterialLibrary::get_material(MaterialPreset::Organic)),
    );
    objects.push(
        SceneObject::new(PrimitiveType::Sphere, base + vec3(0.0, -0.7, 0.0))
            .scaled(vec3(0.5, 0.3, 0.5))
            .colored("#dc143c")
            .with_material(MaterialBuilder::new().roughness(0.4).build()),
    );
}

fn push_lantern<R: Rng + ?Sized>(objects: &mut Vec<SceneObject>, sampler: &mut Sampler<'_, R>, i: usize) {
    let height = sampler.range(1.5, 4.0);
    let base = sampler.scatter(10.0, height, 10.0);
    let glow = MaterialBuilder::from_material(MaterialLibrary::get_material(MaterialPreset::Luminous))
        .emissive("#ff5e00", 0.8)
        .float(0.2, 0.6)
        .build();

    objects.push(
        SceneObject::new(PrimitiveType::Sphere, base)
            .scaled(vec3(0.5, 0.7, 0.5))
            .colored(cycle(&LANTERN_PALETTE, i))
            .with_properties(ObjectProperties::from_material(glow).with_trail()),
    );
    objects.push(
        SceneObject::new(PrimitiveType::Cone, base + vec3(0.0, 0.55, 0.0))
            .scaled(vec3(0.35, 0.25, 0.35))
            .colored("#3d2817")
            .with_material(MaterialLibrary::get_material(MaterialPreset::GardenBark)),
    );
}
