//! Jellyfish cave: an enclosed grotto of stalactites with drifting jellyfish

use rand::Rng;

use super::cycle;
use crate::foundation::math::{vec3, Vec3, PI, TAU};
use crate::foundation::random::Sampler;
use crate::materials::MaterialBuilder;
use crate::scene::{
    Camera, Environment, Lighting, ObjectProperties, PrimitiveType, SceneConfig, SceneObject, Side,
};

/// Hanging stalactites
pub const STALACTITE_COUNT: usize = 15;
/// Standing stalagmites
pub const STALAGMITE_COUNT: usize = 12;
/// Jellyfish bells
pub const JELLYFISH_COUNT: usize = 15;
/// Tentacles under every bell
pub const TENTACLES_PER_JELLYFISH: usize = 4;
/// Loose floor rocks
pub const ROCK_COUNT: usize = 8;

const ROCK_WALL: &str = "#19293b";
const BELL_PALETTE: [&str; 5] = ["#4cc9f0", "#4895ef", "#4361ee", "#3f37c9", "#f72585"];

/// Generate a jellyfish cave scene
pub fn generate<R: Rng + ?Sized>(_description: &str, rng: &mut R) -> SceneConfig {
    let mut sampler = Sampler::new(rng);
    let mut objects = Vec::new();

    objects.push(
        SceneObject::new(PrimitiveType::Cylinder, Vec3::zeros())
            .scaled(vec3(25.0, 20.0, 25.0))
            .colored("#162037")
            .with_properties(
                ObjectProperties::from_material(MaterialBuilder::new().roughness(1.0).build())
                    .with_side(Side::Back),
            ),
    );

    let stone = MaterialBuilder::new().roughness(0.9).build();
    for y in [-9.5, 10.0] {
        objects.push(
            SceneObject::new(PrimitiveType::Box, vec3(0.0, y, 0.0))
                .scaled(vec3(40.0, 1.0, 40.0))
                .colored("#0a1625")
                .with_material(stone.clone()),
        );
    }

    for _ in 0..STALACTITE_COUNT {
        let height = sampler.range(2.0, 5.0);
        let base = sampler.scatter(20.0, 8.5 - height / 2.0, 20.0);
        objects.push(
            SceneObject::new(PrimitiveType::Cone, base)
                .rotated(vec3(PI, 0.0, 0.0))
                .scaled(vec3(0.5, height, 0.5))
                .colored(ROCK_WALL)
                .with_material(stone.clone()),
        );
    }
    for _ in 0..STALAGMITE_COUNT {
        let height = sampler.range(1.5, 4.5);
        let base = sampler.scatter(20.0, -9.0 + height / 2.0, 20.0);
        objects.push(
            SceneObject::new(PrimitiveType::Cone, base)
                .scaled(vec3(0.6, height, 0.6))
                .colored(ROCK_WALL)
                .with_material(stone.clone()),
        );
    }

    for i in 0..JELLYFISH_COUNT {
        push_jellyfish(&mut objects, &mut sampler, i);
    }

    let boulder = MaterialBuilder::new().roughness(1.0).build();
    for _ in 0..ROCK_COUNT {
        let size = sampler.range(0.5, 2.0);
        let position = sampler.scatter(20.0, -8.0, 20.0);
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, position)
                .rotated(sampler.euler())
                .scaled(vec3(size, size * 0.6, size))
                .colored("#243b47")
                .with_material(boulder.clone()),
        );
    }

    SceneConfig {
        objects,
        lighting: Lighting::ambient("#0a3a64", 0.3).with_directional("#4cc9f0", 0.5, vec3(0.0, 5.0, 5.0)),
        camera: Camera::new(vec3(0.0, 0.0, 15.0), Vec3::zeros()),
        environment: Environment::new("#0a1625", "#0a2540", 0.04),
    }
}

fn push_jellyfish<R: Rng + ?Sized>(objects: &mut Vec<SceneObject>, sampler: &mut Sampler<'_, R>, i: usize) {
    let height = sampler.range(-4.0, 10.0);
    let center = sampler.scatter(18.0, height, 18.0);
    let size = sampler.range(0.4, 1.0);
    let color = cycle(&BELL_PALETTE, i);

    let bell = MaterialBuilder::new()
        .roughness(0.2)
        .emissive("#4cc9f0", 1.0)
        .transparent(0.8)
        .pulsate(1.5)
        .float(0.5, 0.8)
        .build();
    objects.push(
        SceneObject::new(PrimitiveType::Sphere, center)
            .scaled(vec3(size, size * 0.7, size))
            .colored(color)
            .with_properties(ObjectProperties::from_material(bell).with_trail().with_particles()),
    );

    let strand = MaterialBuilder::new()
        .emissive(color, 0.6)
        .transparent(0.6)
        .float(0.2, 1.2)
        .build();
    for j in 0..TENTACLES_PER_JELLYFISH {
        let angle = j as f32 / TENTACLES_PER_JELLYFISH as f32 * TAU;
        let offset = size * 0.4;
        let length = size * sampler.range(0.8, 1.3);
        let anchor = center + vec3(angle.cos() * offset, -size * 0.35 - length / 2.0, angle.sin() * offset);
        objects.push(
            SceneObject::new(PrimitiveType::Cylinder, anchor)
                .scaled(vec3(size * 0.05, length, size * 0.05))
                .colored(cycle(&BELL_PALETTE[..3], i))
                .with_material(strand.clone()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_object_counts_are_fixed() {
        for seed in 0..4 {
            let scene = generate("", &mut StdRng::seed_from_u64(seed));
            assert_eq!(
                scene.objects.len(),
                3 + STALACTITE_COUNT
                    + STALAGMITE_COUNT
                    + JELLYFISH_COUNT * (1 + TENTACLES_PER_JELLYFISH)
                    + ROCK_COUNT
            );
            assert_eq!(scene.count_where(|o| o.primitive == PrimitiveType::Cone), STALACTITE_COUNT + STALAGMITE_COUNT);
        }
    }

    #[test]
    fn test_cave_shell_renders_inside() {
        let scene = generate("", &mut StdRng::seed_from_u64(1));
        assert_eq!(scene.objects[0].properties.side, Some(Side::Back));
    }

    #[test]
    fn test_stalactites_hang_from_ceiling() {
        let scene = generate("", &mut StdRng::seed_from_u64(2));
        for cone in &scene.objects[3..3 + STALACTITE_COUNT] {
            let height = cone.scale.unwrap().y;
            assert!((cone.position.y + height / 2.0 - 8.5).abs() < 1e-4);
            assert_eq!(cone.rotation, Some(vec3(PI, 0.0, 0.0)));
            assert_eq!(cone.properties.material.roughness, Some(0.9));
        }
    }

    #[test]
    fn test_bells_glow_with_trails() {
        let scene = generate("", &mut StdRng::seed_from_u64(3));
        let bells = scene.count_where(|o| {
            o.properties.has_trail == Some(true) && o.properties.material.emissive.as_deref() == Some("#4cc9f0")
        });
        assert_eq!(bells, JELLYFISH_COUNT);
    }

    #[test]
    fn test_deep_fog() {
        let scene = generate("", &mut StdRng::seed_from_u64(4));
        assert_eq!(scene.environment.fog_density, Some(0.04));
    }
}
