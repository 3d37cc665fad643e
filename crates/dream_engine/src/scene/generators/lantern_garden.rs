//! Lantern garden: a dusk grove lit by floating lanterns above a stone path

use rand::Rng;

use super::cycle;
use crate::foundation::math::{uniform, vec3};
use crate::foundation::random::Sampler;
use crate::materials::{MaterialBuilder, MaterialLibrary, MaterialPreset};
use crate::scene::{Camera, Environment, Lighting, ObjectProperties, PrimitiveType, SceneConfig, SceneObject};

/// Trees (trunk + foliage each)
pub const TREE_COUNT: usize = 7;
/// Floating lanterns
pub const LANTERN_COUNT: usize = 12;
/// Stepping stones along the path
pub const PATH_STONE_COUNT: usize = 20;
/// Ground flowers
pub const FLOWER_COUNT: usize = 15;

const LANTERN_PALETTE: [&str; 4] = ["#ff9c41", "#ffc641", "#ff7c41", "#ffe141"];
const FLOWER_PALETTE: [&str; 5] = ["#ff4081", "#e040fb", "#7c4dff", "#ff5252", "#ffeb3b"];
const LANTERN_GLOW: &str = "#ff5e00";

/// Generate a lantern garden scene
pub fn generate<R: Rng + ?Sized>(_description: &str, rng: &mut R) -> SceneConfig {
    let mut sampler = Sampler::new(rng);
    let mut objects = Vec::with_capacity(1 + 2 * TREE_COUNT + LANTERN_COUNT + PATH_STONE_COUNT + FLOWER_COUNT);

    objects.push(
        SceneObject::new(PrimitiveType::Box, vec3(0.0, -2.0, 0.0))
            .scaled(vec3(25.0, 0.2, 25.0))
            .colored("#243010")
            .with_material(MaterialLibrary::get_material(MaterialPreset::GardenGround)),
    );

    for _ in 0..TREE_COUNT {
        let base = sampler.scatter(20.0, 0.0, 20.0);
        objects.push(
            SceneObject::new(PrimitiveType::Cylinder, base + vec3(0.0, 1.0, 0.0))
                .scaled(vec3(0.4, 5.0, 0.4))
                .colored("#3d2817")
                .with_material(MaterialLibrary::get_material(MaterialPreset::GardenBark)),
        );
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, base + vec3(0.0, 4.5, 0.0))
                .scaled(vec3(2.5, 3.0, 2.5))
                .colored("#114322")
                .with_material(MaterialLibrary::get_material(MaterialPreset::GardenLeaf)),
        );
    }

    let glow = MaterialBuilder::new()
        .roughness(0.4)
        .emissive(LANTERN_GLOW, 0.8)
        .float(0.3, 0.5)
        .build();
    for i in 0..LANTERN_COUNT {
        let height = sampler.range(2.0, 7.0);
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, sampler.scatter(18.0, height, 18.0))
                .scaled(vec3(0.7, 1.0, 0.7))
                .colored(cycle(&LANTERN_PALETTE, i))
                .with_properties(ObjectProperties::from_material(glow.clone()).with_trail().with_particles()),
        );
    }

    let paving = MaterialBuilder::new().roughness(1.0).build();
    for step in 0..PATH_STONE_COUNT {
        let offset = step as f32 - (PATH_STONE_COUNT / 2) as f32;
        objects.push(
            SceneObject::new(PrimitiveType::Box, vec3(offset, -1.9, offset * 0.5))
                .scaled(vec3(1.0, 0.05, 1.0))
                .colored("#85714e")
                .with_material(paving.clone()),
        );
    }

    let petals = MaterialBuilder::new().roughness(0.3).build();
    for i in 0..FLOWER_COUNT {
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, sampler.scatter(20.0, -1.2, 20.0))
                .scaled(uniform(0.3))
                .colored(cycle(&FLOWER_PALETTE, i))
                .with_material(petals.clone()),
        );
    }

    SceneConfig {
        objects,
        lighting: Lighting::ambient("#3b2f4a", 0.4).with_directional("#fffbe8", 0.8, vec3(5.0, 8.0, 5.0)),
        camera: Camera::new(vec3(0.0, 6.0, 15.0), vec3(0.0, 3.0, 0.0)),
        environment: Environment::new("#12131e", "#2e284a", 0.02),
    }
}
