//! Material presets and contextual resolution
//!
//! Every generated object gets its surface hints from here, either by naming a
//! preset directly or by asking for the preset that fits a (theme, role,
//! primitive) combination.

pub mod builder;
pub mod presets;
pub mod contextual;

pub use builder::{MaterialBuilder, MaterialProperties};
pub use presets::{MaterialLibrary, MaterialPreset};
pub use contextual::ObjectRole;

use thiserror::Error;

/// Material lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// Name outside the closed preset set
    #[error("Unknown material preset: '{0}'")]
    UnknownPreset(String),
}

/// Result type for material lookups
pub type MaterialResult<T> = Result<T, MaterialError>;
