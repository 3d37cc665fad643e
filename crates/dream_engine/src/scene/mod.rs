//! Scene classification and procedural generation
//!
//! Text goes in, a [`SceneConfig`] comes out:
//! 1. [`ThemeClassifier`] picks a [`ThemeCategory`] from keywords
//! 2. [`SceneLibrary`] dispatches to that theme's generator
//! 3. The generator places objects with a borrowed random source and pulls
//!    their materials from [`crate::materials::MaterialLibrary`]

pub mod types;
pub mod classifier;
pub mod generators;
pub mod library;

pub use types::{
    AmbientLight, Camera, DirectionalLight, Environment, Lighting, ObjectProperties,
    PrimitiveType, SceneConfig, SceneObject, Side,
};
pub use classifier::{ThemeCategory, ThemeClassifier, ThemeScores};
pub use library::SceneLibrary;
