//! # Dream Engine
//!
//! Turns a free-text dream description into a renderable 3D scene.
//!
//! ## Features
//!
//! - **Theme Classification**: keyword scoring with narrative overrides
//! - **Procedural Scenes**: one generator per theme, placement from an injected RNG
//! - **Material Presets**: named bundles plus (theme, role, primitive) resolution
//! - **Best-Effort Enhancement**: extra objects from a text generator, never fatal
//! - **Narration**: poetic summary and speech audio with fallbacks
//!
//! ## Quick Start
//!
//! ```rust
//! use dream_engine::prelude::*;
//!
//! let (theme, scene) = SceneLibrary::classify_and_generate("I was floating in a purple sky with golden stars");
//! assert_eq!(theme, ThemeCategory::Cosmic);
//! assert_eq!(scene.objects.len(), 13);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss, clippy::must_use_candidate)]

pub mod config;
pub mod enhance;
pub mod foundation;
pub mod materials;
pub mod pipeline;
pub mod scene;
pub mod services;

mod error;

pub use error::{DreamError, DreamResult};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, DreamConfig},
        enhance::enhance,
        foundation::math::Vec3,
        materials::{MaterialBuilder, MaterialLibrary, MaterialPreset, MaterialProperties, ObjectRole},
        pipeline::{DreamPipeline, DreamProcessResponse},
        scene::{PrimitiveType, SceneConfig, SceneLibrary, SceneObject, ThemeCategory, ThemeClassifier},
        services::{SpeechSynthesizer, TextGenerator},
        DreamError, DreamResult,
    };
}
