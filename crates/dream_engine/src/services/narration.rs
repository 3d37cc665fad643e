//! Poetic narration of a dream

use super::TextGenerator;

/// Used whenever no narration can be generated
pub const FALLBACK_NARRATION: &str = "Somewhere between sleeping and waking, the world loosens its shape and \
you drift through a place made of half-remembered light. Colors wander, forms hover and dissolve, and every \
fragment of the dream folds quietly into the next.";

/// Turns a dream description into a short spoken narration
///
/// Never fails: an absent generator, a failed call or an empty reply all
/// produce [`FALLBACK_NARRATION`].
pub struct NarrationService<G> {
    generator: Option<G>,
}

impl<G: TextGenerator> NarrationService<G> {
    /// Wrap an optional generator
    pub fn new(generator: Option<G>) -> Self {
        Self { generator }
    }

    /// Whether a generator is attached
    pub fn is_live(&self) -> bool {
        self.generator.is_some()
    }

    /// Two or three atmospheric sentences about `description`
    pub async fn generate_poetic_summary(&self, description: &str) -> String {
        let Some(generator) = &self.generator else {
            return FALLBACK_NARRATION.to_string();
        };

        match generator.generate_text(&narration_prompt(description)).await {
            Ok(reply) if !reply.trim().is_empty() => reply.trim().to_string(),
            Ok(_) => {
                log::warn!("Narration reply was empty, using fallback narration");
                FALLBACK_NARRATION.to_string()
            }
            Err(e) => {
                log::warn!("Narration failed, using fallback narration: {}", e);
                FALLBACK_NARRATION.to_string()
            }
        }
    }
}

fn narration_prompt(description: &str) -> String {
    format!(
        "You are the narrator of a dream. Retell the dream below as two or three short, \
         atmospheric sentences that keep its mood and imagery.\n\n\
         Dream: \"{}\"\n\n\
         Answer with the narration only.",
        description
    )
}
