//! Enhancement against in-memory text generators

use std::sync::Mutex;

use dream_engine::enhance::{enhance, try_enhance, EnhancementError};
use dream_engine::prelude::*;
use dream_engine::services::{CollaboratorError, CollaboratorResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Records prompts and answers with a canned reply
struct RecordingGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    fn ok(reply: &str) -> Self {
        Self { reply: Some(reply.to_string()), prompts: Mutex::new(Vec::new()) }
    }

    fn unavailable() -> Self {
        Self { reply: None, prompts: Mutex::new(Vec::new()) }
    }
}

impl TextGenerator for RecordingGenerator {
    async fn generate_text(&self, prompt: &str) -> CollaboratorResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| CollaboratorError::MissingApiKey("GROQ_API_KEY".to_string()))
    }
}

fn garden() -> SceneConfig {
    SceneLibrary::generate_with_rng(ThemeCategory::Garden, "roses", &mut StdRng::seed_from_u64(5))
}

#[tokio::test]
async fn test_rejecting_generator_leaves_scene_untouched() {
    let base = garden();
    let generator = RecordingGenerator::unavailable();
    let scene = enhance(base.clone(), ThemeCategory::Garden, "roses", &generator).await;
    assert_eq!(scene, base);
    assert_eq!(generator.prompts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_two_objects_are_appended_in_order() {
    let base = garden();
    let generator = RecordingGenerator::ok(
        r##"Sure! I added a fountain and a stone.

[{"type": "cylinder", "position": [0, -1, 0], "scale": [1.5, 0.6, 1.5], "color": "#b0c4de", "properties": {"metalness": 0.3}},
 {"type": "sphere", "position": [3, -1.7, 2], "scale": [0.6, 0.4, 0.6], "color": "#808080", "properties": {"roughness": 0.9}}]

Let me know if you want more."##,
    );

    let scene = enhance(base.clone(), ThemeCategory::Garden, "roses by a fountain", &generator).await;
    let n = base.objects.len();
    assert_eq!(scene.objects.len(), n + 2);
    assert_eq!(&scene.objects[..n], &base.objects[..]);
    assert_eq!(scene.objects[n].primitive, PrimitiveType::Cylinder);
    assert_eq!(scene.objects[n].properties.material.metalness, Some(0.3));
    assert_eq!(scene.objects[n + 1].properties.material.roughness, Some(0.9));
    assert_eq!(scene.camera, base.camera);

    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("roses by a fountain"));
    assert!(prompts[0].contains("fountain centerpiece"));
}

#[tokio::test]
async fn test_failure_causes_are_distinguished() {
    let base = garden();

    let err = try_enhance(&base, ThemeCategory::Garden, "roses", &RecordingGenerator::ok("Nothing to add."))
        .await
        .unwrap_err();
    assert!(matches!(err, EnhancementError::MissingFragment));

    let err = try_enhance(&base, ThemeCategory::Garden, "roses", &RecordingGenerator::ok("[]"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnhancementError::EmptyFragment));

    let err = try_enhance(
        &base,
        ThemeCategory::Garden,
        "roses",
        &RecordingGenerator::ok(r#"[{"type": "hexagon", "position": [0, 0, 0]}]"#),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EnhancementError::MalformedFragment(_)));
}
