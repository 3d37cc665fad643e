//! Keyword-based theme classification
//!
//! Scoring is plain substring containment on the lower-cased text, so partial
//! words count ("starfish" scores for "star"). Keyword conjunctions for the
//! narrative scenes are checked first and bypass scoring entirely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dream genre driving which generator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeCategory {
    /// Stars, planets, rings
    #[serde(rename = "cosmic")]
    Cosmic,
    /// Flowers, trees, mushrooms
    #[serde(rename = "garden")]
    Garden,
    /// Seafloor, coral, fish
    #[serde(rename = "underwater")]
    Underwater,
    /// Night garden full of floating lanterns
    #[serde(rename = "lantern")]
    LanternGarden,
    /// Cave of glowing jellyfish
    #[serde(rename = "jellyfish")]
    JellyfishCave,
    /// Glass planets ringed with light
    #[serde(rename = "glass")]
    GlassPlanet,
}

impl ThemeCategory {
    /// Every category, base themes first
    pub const ALL: [Self; 6] = [
        Self::Cosmic,
        Self::Garden,
        Self::Underwater,
        Self::LanternGarden,
        Self::JellyfishCave,
        Self::GlassPlanet,
    ];

    /// Returned when nothing in the text matches
    pub const DEFAULT: Self = Self::Cosmic;

    /// Stable name exposed to callers and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cosmic => "cosmic",
            Self::Garden => "garden",
            Self::Underwater => "underwater",
            Self::LanternGarden => "lantern",
            Self::JellyfishCave => "jellyfish",
            Self::GlassPlanet => "glass",
        }
    }

    /// Base theme a narrative scene belongs to
    pub fn base(self) -> Self {
        match self {
            Self::Cosmic | Self::GlassPlanet => Self::Cosmic,
            Self::Garden | Self::LanternGarden => Self::Garden,
            Self::Underwater | Self::JellyfishCave => Self::Underwater,
        }
    }

    /// Whether this is one of the narrative sub-variants
    pub fn is_narrative(self) -> bool {
        self.base() != self
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| format!("Unknown theme: '{}'", s))
    }
}

const COSMIC_KEYWORDS: &[&str] = &[
    "star", "space", "galaxy", "nebula", "planet", "cosmic", "universe", "constellation",
    "meteor", "comet", "void", "celestial", "aurora", "moon", "orbit", "astral", "light",
];

const GARDEN_KEYWORDS: &[&str] = &[
    "flower", "tree", "garden", "forest", "leaf", "petal", "bloom", "grass", "vine",
    "stem", "branch", "meadow", "rose", "lily", "sunflower", "tulip", "lantern", "nature",
];

const UNDERWATER_KEYWORDS: &[&str] = &[
    "ocean", "sea", "water", "fish", "coral", "wave", "underwater", "deep", "current",
    "bubble", "kelp", "reef", "whale", "dolphin", "seaweed", "jellyfish", "pulsing",
    "bioluminescent", "glow",
];

/// Keyword hit counts per base theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeScores {
    /// Cosmic keyword hits
    pub cosmic: usize,
    /// Garden keyword hits
    pub garden: usize,
    /// Underwater keyword hits
    pub underwater: usize,
}

impl ThemeScores {
    /// Score lower-cased text
    fn of(text: &str) -> Self {
        Self {
            cosmic: count_hits(text, COSMIC_KEYWORDS),
            garden: count_hits(text, GARDEN_KEYWORDS),
            underwater: count_hits(text, UNDERWATER_KEYWORDS),
        }
    }

    /// Winning base theme
    ///
    /// Ties resolve cosmic, then garden, then underwater. The order is
    /// inherited for compatibility and carries no meaning of its own.
    pub fn winner(&self) -> ThemeCategory {
        if self.cosmic >= self.garden && self.cosmic >= self.underwater {
            ThemeCategory::Cosmic
        } else if self.garden >= self.underwater {
            ThemeCategory::Garden
        } else {
            ThemeCategory::Underwater
        }
    }
}

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|keyword| text.contains(*keyword)).count()
}

fn narrative_override(text: &str) -> Option<ThemeCategory> {
    let has = |word: &str| text.contains(word);

    if has("lantern") && (has("garden") || has("tree")) {
        return Some(ThemeCategory::LanternGarden);
    }
    if has("jellyfish") && (has("underwater") || has("cave")) {
        return Some(ThemeCategory::JellyfishCave);
    }
    if has("glass") && has("planet") && has("space") {
        return Some(ThemeCategory::GlassPlanet);
    }
    None
}

/// Maps dream text to a theme
pub struct ThemeClassifier;

impl ThemeClassifier {
    /// Classify a dream description; never fails
    pub fn classify(text: &str) -> ThemeCategory {
        Self::classify_with_scores(text).0
    }

    /// Classify and also return the keyword scores
    ///
    /// Scores are computed even when a narrative override decides the theme.
    pub fn classify_with_scores(text: &str) -> (ThemeCategory, ThemeScores) {
        let text = text.to_lowercase();
        let scores = ThemeScores::of(&text);
        let theme = narrative_override(&text).unwrap_or_else(|| scores.winner());
        (theme, scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_returns_default() {
        assert_eq!(ThemeClassifier::classify(""), ThemeCategory::DEFAULT);
        assert_eq!(ThemeClassifier::classify("I had a sandwich"), ThemeCategory::Cosmic);
    }

    #[test]
    fn test_purple_sky_is_cosmic_on_one_keyword() {
        let (theme, scores) =
            ThemeClassifier::classify_with_scores("I was floating in a purple sky with golden stars");
        assert_eq!(theme, ThemeCategory::Cosmic);
        assert!(scores.cosmic >= 1);
        assert_eq!(scores.garden, 0);
        assert_eq!(scores.underwater, 0);
    }

    #[test]
    fn test_substring_matches_count() {
        let (_, scores) = ThemeClassifier::classify_with_scores("a STARFISH");
        assert_eq!(scores.cosmic, 1);
        assert_eq!(scores.underwater, 1);
    }

    #[test]
    fn test_ties_prefer_cosmic_then_garden() {
        // one hit each
        assert_eq!(ThemeClassifier::classify("moon over the rose"), ThemeCategory::Cosmic);
        assert_eq!(ThemeClassifier::classify("a rose by the whale"), ThemeCategory::Garden);
    }

    #[test]
    fn test_highest_score_wins() {
        assert_eq!(
            ThemeClassifier::classify("swimming in the ocean past coral and kelp under a moon"),
            ThemeCategory::Underwater
        );
        assert_eq!(
            ThemeClassifier::classify("a meadow of tulips and sunflowers"),
            ThemeCategory::Garden
        );
    }

    #[test]
    fn test_lantern_conjunction_overrides_scores() {
        let text = "Lanterns drifted over a tree while stars, planets, comets and the moon filled space";
        let (theme, scores) = ThemeClassifier::classify_with_scores(text);
        assert!(scores.cosmic > scores.garden);
        assert_eq!(theme, ThemeCategory::LanternGarden);
        assert_eq!(ThemeClassifier::classify("a lantern in the garden"), ThemeCategory::LanternGarden);
    }

    #[test]
    fn test_jellyfish_and_glass_conjunctions() {
        assert_eq!(
            ThemeClassifier::classify("glowing jellyfish in a dark cave"),
            ThemeCategory::JellyfishCave
        );
        assert_eq!(
            ThemeClassifier::classify("a glass planet drifting through space"),
            ThemeCategory::GlassPlanet
        );
        // glass + planet without space falls through to scoring
        assert_eq!(ThemeClassifier::classify("a glass planet"), ThemeCategory::Cosmic);
    }

    #[test]
    fn test_every_result_is_a_known_category() {
        let inputs = ["", "????", "deep sea garden of stars", "LANTERN TREE", "Jellyfish underwater"];
        for input in inputs {
            assert!(ThemeCategory::ALL.contains(&ThemeClassifier::classify(input)));
        }
    }

    #[test]
    fn test_names_and_bases() {
        for theme in ThemeCategory::ALL {
            assert_eq!(theme.as_str().parse::<ThemeCategory>(), Ok(theme));
            assert!(!theme.base().is_narrative());
        }
        assert_eq!(ThemeCategory::LanternGarden.base(), ThemeCategory::Garden);
        assert_eq!(
            serde_json::to_string(&ThemeCategory::JellyfishCave).unwrap(),
            "\"jellyfish\""
        );
    }
}
