//! Underwater scene: seafloor, coral, kelp, fish, bubbles and rocks
//!
//! A "basketball" in the text swaps the school of fish for a drift of floating
//! basketballs, thins the coral and adds bubbles.

use rand::Rng;

use super::{cycle, mentions_any};
use crate::foundation::math::{uniform, vec3, Vec3};
use crate::foundation::random::Sampler;
use crate::materials::{MaterialBuilder, MaterialLibrary, MaterialPreset, ObjectRole};
use crate::scene::{Camera, Environment, Lighting, PrimitiveType, SceneConfig, SceneObject, ThemeCategory};

/// Coral cones
pub const CORAL_COUNT: usize = 5;
/// Kelp stalks
pub const KELP_COUNT: usize = 4;
/// Fish in the school
pub const FISH_COUNT: usize = 8;
/// Rising bubbles
pub const BUBBLE_COUNT: usize = 12;
/// Rocks on the seafloor
pub const ROCK_COUNT: usize = 6;

/// Coral cones when basketballs take over
pub const BASKETBALL_CORAL_COUNT: usize = 3;
/// Floating basketballs replacing the fish
pub const BASKETBALL_COUNT: usize = 25;
/// Bubbles when basketballs take over
pub const BASKETBALL_BUBBLE_COUNT: usize = 20;

const BASKETBALL_COLOR: &str = "#ee6730";
const BASKETBALL_CUES: &[&str] = &["basketball"];

const CORAL_PALETTE: [&str; CORAL_COUNT] = ["#ff7f50", "#ff6347", "#ffa500", "#ff1493", "#da70d6"];
const FISH_PALETTE: [&str; FISH_COUNT] = [
    "#ff6b35", "#f7931e", "#40e0d0", "#ff69b4", "#9370db", "#00ced1", "#32cd32", "#ff4500",
];

/// Generate an underwater scene
pub fn generate<R: Rng + ?Sized>(description: &str, rng: &mut R) -> SceneConfig {
    let basketballs = mentions_any(&description.to_lowercase(), BASKETBALL_CUES);
    let (coral_count, bubble_count) = if basketballs {
        log::debug!("Underwater scene: basketballs replace the fish");
        (BASKETBALL_CORAL_COUNT, BASKETBALL_BUBBLE_COUNT)
    } else {
        (CORAL_COUNT, BUBBLE_COUNT)
    };

    let mut sampler = Sampler::new(rng);
    let mut objects = Vec::new();

    objects.push(
        SceneObject::new(PrimitiveType::Box, vec3(0.0, -3.0, 0.0))
            .scaled(vec3(25.0, 0.5, 25.0))
            .colored("#8b7355")
            .with_material(MaterialLibrary::get_material(MaterialPreset::UnderwaterSand)),
    );

    let coral = MaterialLibrary::resolve_contextual(ThemeCategory::Underwater, ObjectRole::Midground, PrimitiveType::Cone);
    for i in 0..coral_count {
        let color = cycle(&CORAL_PALETTE, i);
        objects.push(
            SceneObject::new(PrimitiveType::Cone, sampler.scatter(20.0, -1.5, 20.0))
                .scaled(vec3(1.0, 2.0, 1.0))
                .colored(color)
                .with_material(coral.clone().tinted(color)),
        );
    }

    let kelp = MaterialLibrary::resolve_contextual(ThemeCategory::Underwater, ObjectRole::Midground, PrimitiveType::Cylinder);
    for _ in 0..KELP_COUNT {
        objects.push(
            SceneObject::new(PrimitiveType::Cylinder, sampler.scatter(15.0, 1.0, 15.0))
                .scaled(vec3(0.2, 6.0, 0.2))
                .colored("#556b2f")
                .with_material(kelp.clone()),
        );
    }

    if basketballs {
        let leather = MaterialBuilder::new().roughness(0.7).float(0.3, 1.0).build();
        for _ in 0..BASKETBALL_COUNT {
            let height = sampler.range(-1.0, 6.0);
            let position = sampler.scatter(18.0, height, 18.0);
            objects.push(
                SceneObject::new(PrimitiveType::Sphere, position)
                    .rotated(sampler.euler())
                    .scaled(uniform(0.5))
                    .colored(BASKETBALL_COLOR)
                    .with_material(leather.clone()),
            );
        }
    } else {
        let fish = MaterialLibrary::resolve_contextual(ThemeCategory::Underwater, ObjectRole::Foreground, PrimitiveType::Sphere);
        for i in 0..FISH_COUNT {
            let height = sampler.range(-1.0, 5.0);
            objects.push(
                SceneObject::new(PrimitiveType::Sphere, sampler.scatter(18.0, height, 18.0))
                    .scaled(vec3(1.2, 0.6, 0.4))
                    .colored(cycle(&FISH_PALETTE, i))
                    .with_material(fish.clone()),
            );
        }
    }

    for _ in 0..bubble_count {
        let height = sampler.range(0.0, 8.0);
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, sampler.scatter(20.0, height, 20.0))
                .scaled(uniform(0.2))
                .colored("#ffffff")
                .with_material(MaterialLibrary::get_material(MaterialPreset::UnderwaterWater)),
        );
    }

    let stone = MaterialBuilder::new().roughness(0.9).build();
    for _ in 0..ROCK_COUNT {
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, sampler.scatter(18.0, -2.2, 18.0))
                .scaled(vec3(1.5, 1.0, 1.5))
                .colored("#696969")
                .with_material(stone.clone()),
        );
    }

    SceneConfig {
        objects,
        lighting: Lighting::ambient("#4682b4", 0.7).with_directional("#87ceeb", 0.9, vec3(2.0, 8.0, 3.0)),
        camera: Camera::new(vec3(0.0, 3.0, 15.0), Vec3::zeros()),
        environment: Environment::new("#4682b4", "#5f9ea0", 0.02),
    }
}
