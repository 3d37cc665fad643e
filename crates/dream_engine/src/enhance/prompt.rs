//! Theme-specific enhancement prompts

use std::fmt::Write as _;

use crate::scene::ThemeCategory;

/// One idea the generator may add to a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// What the object depicts
    pub idea: &'static str,
    /// Suggested primitive(s)
    pub shape: &'static str,
}

const fn entry(idea: &'static str, shape: &'static str) -> CatalogEntry {
    CatalogEntry { idea, shape }
}

const COSMIC_CATALOG: &[CatalogEntry] = &[
    entry("nebula wisps", "torus"),
    entry("asteroid belt", "small spheres"),
    entry("cosmic rings", "torus"),
    entry("glowing orbs", "emissive sphere"),
    entry("space crystals", "cone or cylinder"),
];

const GARDEN_CATALOG: &[CatalogEntry] = &[
    entry("butterfly paths", "small drifting spheres"),
    entry("garden stones", "sphere"),
    entry("fountain centerpiece", "cylinder"),
    entry("scattered petals", "small spheres"),
    entry("hanging fruit", "sphere"),
];

const UNDERWATER_CATALOG: &[CatalogEntry] = &[
    entry("treasure chest", "box"),
    entry("sea anemone", "cone"),
    entry("school of small fish", "small spheres"),
    entry("water currents", "cylinder"),
    entry("sea shells", "cone"),
];

/// Extra-object ideas for a theme; narrative themes use their base theme's list
pub fn catalog(theme: ThemeCategory) -> &'static [CatalogEntry] {
    match theme.base() {
        ThemeCategory::Garden => GARDEN_CATALOG,
        ThemeCategory::Underwater => UNDERWATER_CATALOG,
        _ => COSMIC_CATALOG,
    }
}

fn scene_summary(theme: ThemeCategory) -> &'static str {
    match theme {
        ThemeCategory::Cosmic => "a central planet, scattered stars, orbiting bodies and a ring",
        ThemeCategory::Garden => "flowers, trees and mushrooms on a grassy ground",
        ThemeCategory::Underwater => "coral, kelp, fish, bubbles and rocks on a sandy seafloor",
        ThemeCategory::LanternGarden => "a dusk grove with floating lanterns, a stone path and flowers",
        ThemeCategory::JellyfishCave => "a dark cave with stalactites, stalagmites and glowing jellyfish",
        ThemeCategory::GlassPlanet => "a glass planet with halo rings, smaller glass worlds and stars",
    }
}

/// Prompt asking for two or three additional objects as a JSON array
pub fn enhancement_prompt(theme: ThemeCategory, description: &str) -> String {
    let mut prompt = format!(
        "You are decorating a 3D {} dream scene that already contains {}.\n\
         Dream: \"{}\"\n\n\
         Ideas that fit this scene:\n",
        theme.base(),
        scene_summary(theme),
        description
    );
    for item in catalog(theme) {
        let _ = writeln!(prompt, "- {} ({})", item.idea, item.shape);
    }
    prompt.push_str(
        "\nAdd 2 or 3 new objects inspired by the dream. Reply with only a JSON array shaped like:\n\
         [\n  {\n    \"type\": \"sphere|box|cylinder|cone|torus\",\n    \"position\": [x, y, z],\n    \
         \"scale\": [x, y, z],\n    \"color\": \"#rrggbb\",\n    \"properties\": {}\n  }\n]\n",
    );
    prompt
}
