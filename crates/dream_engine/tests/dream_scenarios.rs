//! End-to-end dream scenarios
//!
//! Classify real-looking dream text, generate the scene and check the
//! structure a renderer relies on.

use dream_engine::prelude::*;
use dream_engine::scene::generators::{cosmic, underwater};
use dream_engine::scene::ThemeScores;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn count_color(scene: &SceneConfig, color: &str) -> usize {
    scene.count_where(|o| o.color.as_deref() == Some(color))
}

#[test]
fn test_purple_sky_dream() {
    let text = "I was floating in a purple sky with golden stars";
    let (theme, scores) = ThemeClassifier::classify_with_scores(text);
    assert_eq!(theme, ThemeCategory::Cosmic);
    assert!(scores.cosmic >= 1);
    assert_eq!(scores.garden, 0);
    assert_eq!(scores.underwater, 0);

    let scene = SceneLibrary::generate_with_rng(theme, text, &mut StdRng::seed_from_u64(42));
    assert_eq!(scene.objects.len(), 1 + cosmic::STAR_COUNT + cosmic::ORBITER_COUNT + 1);
    assert_eq!(scene.objects.len(), 13);
    assert_eq!(scene.lighting.ambient.color, "#1a1a2e");
    assert_eq!(scene.environment.sky_color.as_deref(), Some("#0f0f23"));
}

#[test]
fn test_basketball_ocean_dream() {
    let text = "I was swimming in the ocean past bright coral when basketballs started raining down";
    let theme = ThemeClassifier::classify(text);
    assert_eq!(theme, ThemeCategory::Underwater);

    let scene = SceneLibrary::generate_with_rng(theme, text, &mut StdRng::seed_from_u64(7));
    assert_eq!(count_color(&scene, "#ee6730"), underwater::BASKETBALL_COUNT);
    assert_eq!(scene.count_where(|o| o.primitive == PrimitiveType::Cone), underwater::BASKETBALL_CORAL_COUNT);
    assert_eq!(scene.count_where(|o| o.primitive == PrimitiveType::Cylinder), underwater::KELP_COUNT);
    assert_eq!(count_color(&scene, "#ffffff"), underwater::BASKETBALL_BUBBLE_COUNT);
    assert!(underwater::BASKETBALL_BUBBLE_COUNT > underwater::BUBBLE_COUNT);
    assert_eq!(count_color(&scene, "#696969"), underwater::ROCK_COUNT);
}

#[test]
fn test_narrative_overrides() {
    assert_eq!(
        ThemeClassifier::classify("paper lanterns drifting between the trees of a quiet garden"),
        ThemeCategory::LanternGarden
    );
    assert_eq!(
        ThemeClassifier::classify("a cave where jellyfish pulsed with blue light"),
        ThemeCategory::JellyfishCave
    );
    assert_eq!(
        ThemeClassifier::classify("a glass planet spinning alone in space"),
        ThemeCategory::GlassPlanet
    );
}

#[test]
fn test_structure_is_stable_across_calls() {
    let dreams = [
        "stars and a comet",
        "a garden of roses",
        "a coral reef",
        "lanterns in the garden",
        "jellyfish in a cave",
        "a glass planet in space",
    ];
    for text in dreams {
        let (theme_a, a) = SceneLibrary::classify_and_generate(text);
        let (theme_b, b) = SceneLibrary::classify_and_generate(text);
        assert_eq!(theme_a, theme_b);
        assert_eq!(a.objects.len(), b.objects.len(), "object count changed for {:?}", text);
        for primitive in PrimitiveType::ALL {
            assert_eq!(
                a.count_where(|o| o.primitive == primitive),
                b.count_where(|o| o.primitive == primitive),
                "{} count changed for {:?}",
                primitive.as_str(),
                text
            );
        }
        assert_eq!(a.lighting, b.lighting);
        assert_eq!(a.environment, b.environment);
        assert_eq!(a.camera, b.camera);
    }
}

#[test]
fn test_scene_json_uses_closed_primitive_names() {
    let mut rng = StdRng::seed_from_u64(3);
    for theme in ThemeCategory::ALL {
        let scene = SceneLibrary::generate_with_rng(theme, "", &mut rng);
        let json = serde_json::to_value(&scene).unwrap();
        for object in json["objects"].as_array().unwrap() {
            let name = object["type"].as_str().unwrap();
            assert!(PrimitiveType::ALL.iter().any(|p| p.as_str() == name), "unexpected type {}", name);
            assert_eq!(object["position"].as_array().unwrap().len(), 3);
        }
        assert!(json["lighting"]["ambient"]["color"].is_string());
        assert!(json["camera"]["lookAt"].is_array());

        let back: SceneConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.objects.len(), scene.objects.len());
    }
}

#[test]
fn test_glass_preset() {
    let glass = MaterialLibrary::get_material(MaterialPreset::Glass);
    assert_eq!(glass.transparent, Some(true));
    assert_eq!(glass.metalness, Some(0.0));
    assert!(MaterialLibrary::get_material_by_name("glass").is_ok());
    assert!(MaterialLibrary::get_material_by_name("obsidian").is_err());
}

#[test]
fn test_every_text_classifies() {
    for text in ["", "   ", "🌙✨", "a sandwich", "STARS AND FLOWERS AND FISH"] {
        let (theme, scores): (ThemeCategory, ThemeScores) = ThemeClassifier::classify_with_scores(text);
        assert!(ThemeCategory::ALL.contains(&theme));
        if text.trim().is_empty() {
            assert_eq!(theme, ThemeCategory::DEFAULT);
            assert_eq!(scores, ThemeScores::default());
        }
    }
}
