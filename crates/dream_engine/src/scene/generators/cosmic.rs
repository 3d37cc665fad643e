//! Cosmic scene: a central body, scattered stars, orbiting planets and a ring

use rand::Rng;

use super::{cycle, mentions_any};
use crate::foundation::math::{uniform, vec3, PI, TAU};
use crate::foundation::random::Sampler;
use crate::materials::{MaterialBuilder, MaterialLibrary, ObjectRole};
use crate::scene::{Camera, Environment, Lighting, PrimitiveType, SceneConfig, SceneObject, ThemeCategory};

/// Background stars
pub const STAR_COUNT: usize = 8;
/// Planets on the orbit ring
pub const ORBITER_COUNT: usize = 3;

const ORBITER_PALETTE: [&str; ORBITER_COUNT] = ["#ff6b6b", "#4ecdc4", "#45b7d1"];
const AURORA_CUES: &[&str] = &["aurora", "northern lights"];

/// Generate a cosmic scene
pub fn generate<R: Rng + ?Sized>(description: &str, rng: &mut R) -> SceneConfig {
    let text = description.to_lowercase();
    let aurora = mentions_any(&text, AURORA_CUES);
    let mut sampler = Sampler::new(rng);
    let mut objects = Vec::with_capacity(2 + STAR_COUNT + ORBITER_COUNT);

    let central = MaterialBuilder::from_material(MaterialLibrary::resolve_contextual(
        ThemeCategory::Cosmic,
        ObjectRole::Focal,
        PrimitiveType::Sphere,
    ))
    .emissive_color("#1a4480")
    .metalness(0.8)
    .build();
    objects.push(
        SceneObject::new(PrimitiveType::Sphere, vec3(0.0, 0.0, -5.0))
            .scaled(uniform(3.0))
            .colored("#4a90e2")
            .with_material(central),
    );

    let star = MaterialLibrary::resolve_contextual(ThemeCategory::Cosmic, ObjectRole::Background, PrimitiveType::Sphere);
    for _ in 0..STAR_COUNT {
        let position = sampler.scatter_box(vec3(20.0, 15.0, 20.0));
        objects.push(
            SceneObject::new(PrimitiveType::Sphere, position)
                .scaled(uniform(0.1))
                .colored("#ffffff")
                .with_material(star.clone()),
        );
    }

    for i in 0..ORBITER_COUNT {
        let angle = i as f32 / ORBITER_COUNT as f32 * TAU;
        let radius = 8.0 + i as f32 * 2.0;
        objects.push(
            SceneObject::new(
                PrimitiveType::Sphere,
                vec3(angle.cos() * radius, angle.sin() * 2.0, angle.sin() * radius),
            )
            .scaled(uniform(0.8))
            .colored(cycle(&ORBITER_PALETTE, i))
            .with_material(MaterialBuilder::new().metalness(0.9).build()),
        );
    }

    let ring = MaterialLibrary::resolve_contextual(ThemeCategory::Cosmic, ObjectRole::Midground, PrimitiveType::Torus);
    objects.push(
        SceneObject::new(PrimitiveType::Torus, vec3(0.0, 0.0, -5.0))
            .rotated(vec3(PI / 4.0, 0.0, PI / 6.0))
            .scaled(uniform(5.0))
            .colored("#9b59b6")
            .with_material(ring),
    );

    let (lighting, environment) = if aurora {
        log::debug!("Cosmic scene: aurora sky");
        (
            Lighting::ambient("#1f3b4d", 0.45).with_directional("#7fffd4", 0.8, vec3(5.0, 10.0, 10.0)),
            Environment::new("#0a2a2f", "#1b4d3e", 0.01),
        )
    } else {
        (
            Lighting::ambient("#1a1a2e", 0.3).with_directional("#4a90e2", 0.8, vec3(5.0, 10.0, 10.0)),
            Environment::new("#0f0f23", "#1a1a2e", 0.01),
        )
    };

    SceneConfig {
        objects,
        lighting,
        camera: Camera::new(vec3(0.0, 5.0, 15.0), vec3(0.0, 0.0, -5.0)),
        environment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_object_counts() {
        let scene = generate("golden stars", &mut StdRng::seed_from_u64(1));
        assert_eq!(scene.objects.len(), 1 + STAR_COUNT + ORBITER_COUNT + 1);
        assert_eq!(scene.count_where(|o| o.primitive == PrimitiveType::Torus), 1);
        assert_eq!(scene.count_where(|o| o.color.as_deref() == Some("#ffffff")), STAR_COUNT);
    }

    #[test]
    fn test_orbiters_are_placed_on_their_orbits() {
        let scene = generate("", &mut StdRng::seed_from_u64(2));
        let orbiters = &scene.objects[1 + STAR_COUNT..1 + STAR_COUNT + ORBITER_COUNT];

        assert_eq!(orbiters[0].position, vec3(8.0, 0.0, 0.0));
        assert_eq!(orbiters[1].color.as_deref(), Some("#4ecdc4"));
        let radius = orbiters[2].position.x.hypot(orbiters[2].position.z);
        assert_relative_eq!(radius, 12.0, epsilon = 1e-4);
    }

    #[test]
    fn test_stars_stay_in_bounds() {
        let scene = generate("", &mut StdRng::seed_from_u64(3));
        for star in &scene.objects[1..=STAR_COUNT] {
            assert!(star.position.x.abs() <= 10.0);
            assert!(star.position.y.abs() <= 7.5);
            assert!(star.position.z.abs() <= 10.0);
            assert!(star.properties.material.emissive.is_some());
        }
    }

    #[test]
    fn test_base_lighting_and_sky() {
        let scene = generate("stars", &mut StdRng::seed_from_u64(4));
        assert_eq!(scene.lighting.ambient.color, "#1a1a2e");
        assert_eq!(scene.environment.sky_color.as_deref(), Some("#0f0f23"));
    }

    #[test]
    fn test_aurora_changes_sky_not_structure() {
        let base = generate("stars", &mut StdRng::seed_from_u64(5));
        let aurora = generate("an aurora over the stars", &mut StdRng::seed_from_u64(5));

        assert_eq!(aurora.objects, base.objects);
        assert_eq!(aurora.environment.sky_color.as_deref(), Some("#0a2a2f"));
        assert!(aurora.lighting.ambient.intensity > base.lighting.ambient.intensity);
    }
}
