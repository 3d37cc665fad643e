//! Glass planet: a refractive world with crossed halo rings in open space

use rand::Rng;

use super::cycle;
use crate::foundation::math::{uniform, vec3, Vec3, PI, TAU};
use crate::foundation::random::Sampler;
use crate::materials::{MaterialBuilder, MaterialLibrary, MaterialPreset};
use crate::scene::{Camera, Environment, Lighting, ObjectProperties, PrimitiveType, SceneConfig, SceneObject};

/// Smaller glass worlds on the outer orbit
pub const OUTER_PLANET_COUNT: usize = 5;
/// Halo rings around the central planet
pub const HALO_RING_COUNT: usize = 3;
/// Rings of light, one at each outer planet's orbit slot
pub const OUTER_RING_COUNT: usize = 5;
/// Background stars
pub const STAR_COUNT: usize = 20;

const CENTER: Vec3 = Vec3::new(0.0, 0.0, -5.0);
/// Outer orbit radius, around the world origin
const OUTER_ORBIT: f32 = 12.0;

const PLANET_PALETTE: [&str; OUTER_PLANET_COUNT] = ["#88c6db", "#c0fdff", "#a0ced9", "#97d8ec", "#acd8aa"];
const HALO_PALETTE: [&str; HALO_RING_COUNT] = ["#ffcc00", "#ff5e5b", "#d65bd1"];
const OUTER_RING_PALETTE: [&str; OUTER_RING_COUNT] = ["#84dfff", "#91f5ad", "#fdffab", "#ffd3ba", "#fca3cc"];

/// Generate a glass planet scene
pub fn generate<R: Rng + ?Sized>(_description: &str, rng: &mut R) -> SceneConfig {
    let mut sampler = Sampler::new(rng);
    let mut objects = Vec::with_capacity(1 + OUTER_PLANET_COUNT + HALO_RING_COUNT + OUTER_RING_COUNT + STAR_COUNT);

    let core = MaterialBuilder::from_material(MaterialLibrary::get_material(MaterialPreset::Glass))
        .transparent(0.6)
        .emissive("#a7c5eb", 0.2)
        .rotate(vec3(0.0, 0.05, 0.0))
        .build();
    objects.push(
        SceneObject::new(PrimitiveType::Sphere, CENTER)
            .scaled(uniform(4.0))
            .colored("#a7c5eb")
            .with_properties(
                ObjectProperties::from_material(core)
                    .with_refraction(0.98, Some(1.0))
                    .with_particles(),
            ),
    );

    for i in 0..OUTER_PLANET_COUNT {
        let height = sampler.centered(6.0);
        let size = sampler.range(0.8, 2.3);
        let shell = MaterialBuilder::from_material(MaterialLibrary::get_material(MaterialPreset::Glass))
            .transparent(0.7)
            .build();
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, orbit_slot(i, height))
            .scaled(uniform(size))
            .colored(cycle(&PLANET_PALETTE, i))
            .with_properties(ObjectProperties::from_material(shell).with_refraction(0.95, None).with_particles()),
        );
    }

    for i in 0..HALO_RING_COUNT {
        let color = cycle(&HALO_PALETTE, i);
        let radius = 5.0 + i as f32 * 1.2;
        let halo = MaterialBuilder::new()
            .metalness(0.6)
            .emissive(color, 0.8)
            .transparent(0.4)
            .rotate(vec3(0.0, 0.0, 0.1 + i as f32 * 0.05))
            .build();
        objects.push(
            SceneObject::new(PrimitiveType::Torus, CENTER)
                .rotated(vec3(PI / 3.0 * i as f32, PI / 4.0, 0.0))
                .scaled(vec3(radius, radius, 0.1))
                .colored(color)
                .with_properties(ObjectProperties::from_material(halo).with_trail()),
        );
    }

    for i in 0..OUTER_RING_COUNT {
        let color = cycle(&OUTER_RING_PALETTE, i);
        let position = orbit_slot(i, sampler.centered(6.0));
        let size = sampler.range(1.0, 2.5);
        let band = MaterialBuilder::new().emissive(color, 0.6).transparent(0.5).build();
        objects.push(
            SceneObject::new(PrimitiveType::Torus, position)
                .rotated(sampler.euler())
                .scaled(vec3(size, size, 0.05))
                .colored(color)
                .with_material(band),
        );
    }

    let starlight = MaterialBuilder::new().emissive("#ffffff", 1.0).build();
    for _ in 0..STAR_COUNT {
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, sampler.scatter_box(vec3(40.0, 30.0, 40.0)))
                .scaled(uniform(0.1))
                .colored("#ffffff")
                .with_material(starlight.clone()),
        );
    }

    SceneConfig {
        objects,
        lighting: Lighting::ambient("#050c24", 0.2).with_directional("#ffffff", 0.6, vec3(10.0, 10.0, 10.0)),
        camera: Camera::new(vec3(0.0, 0.0, 20.0), Vec3::zeros()),
        environment: Environment::new("#000000", "#050a1c", 0.01),
    }
}

/// Point on the outer orbit for planet `i`, at `height`
fn orbit_slot(i: usize, height: f32) -> Vec3 {
    let angle = i as f32 / OUTER_PLANET_COUNT as f32 * TAU;
    vec3(angle.cos() * OUTER_ORBIT, height, angle.sin() * OUTER_ORBIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_object_counts() {
        let scene = generate("", &mut StdRng::seed_from_u64(1));
        assert_eq!(
            scene.objects.len(),
            1 + OUTER_PLANET_COUNT + HALO_RING_COUNT + OUTER_RING_COUNT + STAR_COUNT
        );
        assert_eq!(scene.count_where(|o| o.primitive == PrimitiveType::Torus), HALO_RING_COUNT + OUTER_RING_COUNT);
    }

    #[test]
    fn test_central_planet_refracts() {
        let scene = generate("", &mut StdRng::seed_from_u64(2));
        let core = &scene.objects[0];
        assert_eq!(core.properties.refraction_ratio, Some(0.98));
        assert_eq!(core.properties.reflectivity, Some(1.0));
        assert_eq!(core.properties.material.opacity, Some(0.6));
    }

    #[test]
    fn test_outer_planets_share_one_orbit() {
        let scene = generate("", &mut StdRng::seed_from_u64(3));
        for planet in &scene.objects[1..=OUTER_PLANET_COUNT] {
            assert_relative_eq!(planet.position.x.hypot(planet.position.z), OUTER_ORBIT, epsilon = 1e-4);
            assert!(planet.position.y.abs() <= 3.0);
        }
    }

    #[test]
    fn test_outer_rings_circle_their_planets() {
        let scene = generate("", &mut StdRng::seed_from_u64(5));
        let start = 1 + OUTER_PLANET_COUNT + HALO_RING_COUNT;
        let planets = &scene.objects[1..=OUTER_PLANET_COUNT];
        let rings = &scene.objects[start..start + OUTER_RING_COUNT];
        for (ring, planet) in rings.iter().zip(planets) {
            assert_eq!(ring.primitive, PrimitiveType::Torus);
            assert_relative_eq!(ring.position.x.hypot(ring.position.z), OUTER_ORBIT, epsilon = 1e-4);
            assert_relative_eq!(ring.position.x, planet.position.x, epsilon = 1e-5);
            assert_relative_eq!(ring.position.z, planet.position.z, epsilon = 1e-5);
            assert!(ring.position.y.abs() <= 3.0);
        }
    }

    #[test]
    fn test_halos_widen_outward() {
        let scene = generate("", &mut StdRng::seed_from_u64(4));
        let halos = &scene.objects[1 + OUTER_PLANET_COUNT..1 + OUTER_PLANET_COUNT + HALO_RING_COUNT];
        assert!(halos.windows(2).all(|pair| pair[0].scale.unwrap().x < pair[1].scale.unwrap().x));
        assert!(halos.iter().all(|halo| halo.position == CENTER));
    }
}
