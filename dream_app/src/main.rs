//! `dream`: turn a dream description into a scene description
//!
//! Reads the description from the arguments (or stdin) and prints JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dream_engine::foundation::logging;
use dream_engine::prelude::*;
use dream_engine::services::{FishAudioClient, GroqClient};

fn cli() -> Command {
    Command::new("dream")
        .about("Generates a 3D scene, narration and narration audio from a dream description")
        .arg(
            Arg::new("description")
                .value_name("TEXT")
                .num_args(1..)
                .help("Dream description; read from stdin when omitted"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Settings file (.toml or .ron)"),
        )
        .arg(
            Arg::new("scene-only")
                .short('s')
                .long("scene-only")
                .help("Print only the scene, skipping narration and audio")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("THEME")
                .help("Skip classification and use this theme (implies --scene-only)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(clap::value_parser!(u64))
                .help("Seed object placement (implies --scene-only, no enhancement)"),
        )
        .arg(
            Arg::new("no-enhance")
                .long("no-enhance")
                .help("Do not ask the text generator for extra objects")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("voice")
                .long("voice")
                .value_name("ID")
                .help("Narration voice id"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter when RUST_LOG is unset (overrides the settings file)"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-presets")
                .long("list-presets")
                .help("List material presets and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-voices")
                .long("list-voices")
                .help("List narration voices and exit")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => DreamConfig::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => DreamConfig::default(),
    };

    let level = matches
        .get_one::<String>("log-level")
        .map_or(config.engine.log_level.as_str(), String::as_str);
    logging::init(level);

    if matches.get_flag("list-presets") {
        for name in MaterialLibrary::list_presets() {
            println!("{}", name);
        }
        return Ok(());
    }

    if matches.get_flag("list-voices") {
        let pipeline = build_pipeline(&config, &matches);
        return print_json(&pipeline.voices().await, &matches);
    }

    let description = read_description(&matches)?;

    // forced theme or fixed seed never reach the collaborators
    if let Some(scene) = local_scene(&matches, &description)? {
        return print_json(&scene, &matches);
    }

    let pipeline = build_pipeline(&config, &matches);
    if matches.get_flag("scene-only") {
        let (_, scene) = pipeline.generate_scene_config(&description).await?;
        return print_json(&scene, &matches);
    }

    let response = pipeline.process(&description).await?;
    print_json(&response, &matches)
}

fn build_pipeline(config: &DreamConfig, matches: &ArgMatches) -> DreamPipeline<GroqClient, FishAudioClient> {
    let pipeline = DreamPipeline::from_config(config)
        .with_enhancement(config.enhancement.enabled && !matches.get_flag("no-enhance"));
    match matches.get_one::<String>("voice") {
        Some(voice) => pipeline.with_voice(voice.clone()),
        None => pipeline,
    }
}

/// Scene built without the pipeline, for `--theme` and `--seed`
fn local_scene(matches: &ArgMatches, description: &str) -> Result<Option<SceneConfig>> {
    let seed = matches.get_one::<u64>("seed").copied();
    let scene = match (forced_theme(matches)?, seed) {
        (Some(theme), Some(seed)) => {
            SceneLibrary::generate_with_rng(theme, description, &mut StdRng::seed_from_u64(seed))
        }
        (Some(theme), None) => SceneLibrary::generate(theme, description),
        (None, Some(seed)) => {
            SceneLibrary::classify_and_generate_with_rng(description, &mut StdRng::seed_from_u64(seed)).1
        }
        (None, None) => return Ok(None),
    };
    Ok(Some(scene))
}

fn read_description(matches: &ArgMatches) -> Result<String> {
    if let Some(words) = matches.get_many::<String>("description") {
        return Ok(words.cloned().collect::<Vec<_>>().join(" "));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read dream description from stdin")?;
    if text.trim().is_empty() {
        anyhow::bail!("No dream description given");
    }
    Ok(text)
}

fn forced_theme(matches: &ArgMatches) -> Result<Option<ThemeCategory>> {
    matches
        .get_one::<String>("theme")
        .map(|name| name.parse::<ThemeCategory>().map_err(anyhow::Error::msg))
        .transpose()
}

fn print_json<T: serde::Serialize>(value: &T, matches: &ArgMatches) -> Result<()> {
    let json = if matches.get_flag("compact") {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_description_words_are_joined() {
        let matches = cli().get_matches_from(["dream", "purple", "sky", "--compact"]);
        assert_eq!(read_description(&matches).unwrap(), "purple sky");
        assert!(matches.get_flag("compact"));
    }

    #[test]
    fn test_forced_theme() {
        let matches = cli().get_matches_from(["dream", "--theme", "jellyfish", "x"]);
        assert_eq!(forced_theme(&matches).unwrap(), Some(ThemeCategory::JellyfishCave));

        let matches = cli().get_matches_from(["dream", "--theme", "volcano", "x"]);
        assert!(forced_theme(&matches).is_err());
    }

    #[test]
    fn test_seeded_scene_is_built_locally() {
        let text = "I was floating in a purple sky with golden stars";
        let matches = cli().get_matches_from(["dream", "--seed", "7", text]);
        let first = local_scene(&matches, text).unwrap().unwrap();
        let second = local_scene(&matches, text).unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.objects.len(), 13);
    }

    #[test]
    fn test_forced_theme_is_built_locally() {
        let matches = cli().get_matches_from(["dream", "--theme", "glass", "x"]);
        assert!(local_scene(&matches, "x").unwrap().is_some());
    }

    #[test]
    fn test_plain_run_needs_the_pipeline() {
        let matches = cli().get_matches_from(["dream", "purple", "sky"]);
        assert!(local_scene(&matches, "purple sky").unwrap().is_none());
    }
}
