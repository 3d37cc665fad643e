//! Best-effort scene enhancement
//!
//! A text generator is asked for two or three extra objects that fit the
//! theme. The reply is free text; the first JSON array of scene objects found
//! in it is appended to the base scene. Every failure along the way leaves the
//! base scene untouched, so callers only ever see a [`SceneConfig`].

mod fragment;
mod prompt;

pub use fragment::extract_objects;
pub use prompt::{catalog, enhancement_prompt, CatalogEntry};

use crate::scene::{SceneConfig, SceneObject, ThemeCategory};
use crate::services::{CollaboratorError, TextGenerator};

/// Why an enhancement attempt produced nothing
#[derive(thiserror::Error, Debug)]
pub enum EnhancementError {
    /// The generator call failed
    #[error("text generator failed: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// No bracketed span in the reply
    #[error("reply contains no JSON array")]
    MissingFragment,

    /// The array parsed but held no objects
    #[error("reply array is empty")]
    EmptyFragment,

    /// Bracketed spans were found but none was a list of scene objects
    #[error("reply array is not a list of scene objects: {0}")]
    MalformedFragment(#[from] serde_json::Error),
}

/// Result type for enhancement attempts
pub type EnhancementResult<T> = Result<T, EnhancementError>;

/// Ask `generator` for extra objects for `base`
///
/// Returns only the new objects; the caller decides how to merge them.
pub async fn try_enhance<G: TextGenerator + ?Sized>(
    base: &SceneConfig,
    theme: ThemeCategory,
    description: &str,
    generator: &G,
) -> EnhancementResult<Vec<SceneObject>> {
    let prompt = enhancement_prompt(theme, description);
    log::debug!("Enhancement prompt for {} scene ({} base objects)", theme, base.objects.len());

    let reply = generator.generate_text(&prompt).await?;
    extract_objects(&reply)
}

/// Append generated objects to `base`, or return `base` unchanged on any failure
pub async fn enhance<G: TextGenerator + ?Sized>(
    mut base: SceneConfig,
    theme: ThemeCategory,
    description: &str,
    generator: &G,
) -> SceneConfig {
    match try_enhance(&base, theme, description, generator).await {
        Ok(extra) => {
            log::info!("Enhanced {} scene with {} extra objects", theme, extra.len());
            base.objects.extend(extra);
        }
        Err(e) => log::warn!("Scene enhancement skipped, keeping base scene: {}", e),
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PrimitiveType, SceneLibrary};
    use crate::services::fakes::ScriptedGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::Ordering;

    fn base_scene() -> SceneConfig {
        SceneLibrary::generate_with_rng(ThemeCategory::Cosmic, "stars", &mut StdRng::seed_from_u64(11))
    }

    #[tokio::test]
    async fn test_rejecting_generator_returns_base() {
        let base = base_scene();
        let generator = ScriptedGenerator::failing();
        let scene = enhance(base.clone(), ThemeCategory::Cosmic, "stars", &generator).await;
        assert_eq!(scene, base);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prose_wrapped_array_is_appended() {
        let base = base_scene();
        let generator = ScriptedGenerator::replying(
            r##"Here are a couple of additions for your dream:
[
  {"type": "torus", "position": [2, 3, -4], "scale": [1, 1, 0.2], "color": "#c39bd3", "properties": {"emissive": "#c39bd3"}},
  {"type": "sphere", "position": [-6, 1, -2], "scale": [0.4, 0.4, 0.4], "color": "#f7dc6f", "properties": {}}
]
Enjoy the view!"##,
        );

        let scene = enhance(base.clone(), ThemeCategory::Cosmic, "stars", &generator).await;
        assert_eq!(scene.objects.len(), base.objects.len() + 2);
        assert_eq!(scene.objects[..base.objects.len()], base.objects[..]);
        assert_eq!(scene.objects[base.objects.len()].primitive, PrimitiveType::Torus);
        assert_eq!(scene.objects.last().and_then(|o| o.color.as_deref()), Some("#f7dc6f"));
        assert_eq!(scene.lighting, base.lighting);
    }

    #[tokio::test]
    async fn test_unusable_replies_return_base() {
        let base = base_scene();
        for reply in [
            "I cannot help with that.",
            "[]",
            r#"[{"type": "pyramid", "position": [0, 0, 0]}]"#,
            r#"[{"type": "sphere", "position": [0, 0, 0]"#,
        ] {
            let generator = ScriptedGenerator::replying(reply);
            let scene = enhance(base.clone(), ThemeCategory::Cosmic, "stars", &generator).await;
            assert_eq!(scene, base, "reply {:?} changed the scene", reply);
        }
    }

    #[tokio::test]
    async fn test_try_enhance_reports_cause() {
        let base = base_scene();
        let err = try_enhance(&base, ThemeCategory::Garden, "roses", &ScriptedGenerator::replying("no"))
            .await
            .unwrap_err();
        assert!(matches!(err, EnhancementError::MissingFragment));

        let err = try_enhance(&base, ThemeCategory::Garden, "roses", &ScriptedGenerator::failing())
            .await
            .unwrap_err();
        assert!(matches!(err, EnhancementError::Collaborator(_)));
    }
}
