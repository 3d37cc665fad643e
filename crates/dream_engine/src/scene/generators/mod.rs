//! Per-theme scene generators
//!
//! Every generator has the same shape:
//! `generate(description, rng) -> SceneConfig`. Object counts per category are
//! fixed for a theme (and its active variant); only placement is random.

pub mod cosmic;
pub mod garden;
pub mod underwater;
pub mod lantern_garden;
pub mod jellyfish_cave;
pub mod glass_planet;

/// True if the lower-cased `text` contains any of `cues`
pub(crate) fn mentions_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}

/// True if the lower-cased `text` contains any of `words` as a whole word
pub(crate) fn mentions_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.contains(&token))
}

/// Palette entry for loop position `i`, wrapping around
pub(crate) fn cycle<'p>(palette: &[&'p str], i: usize) -> &'p str {
    palette[i % palette.len()]
}
