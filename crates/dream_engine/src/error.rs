//! Crate-level error type

use crate::config::ConfigError;
use crate::materials::MaterialError;
use crate::services::CollaboratorError;

/// Errors surfaced by the engine
///
/// Enhancement, narration and speech failures never appear here; they are
/// absorbed with fallbacks where they happen.
#[derive(thiserror::Error, Debug)]
pub enum DreamError {
    /// Unknown material preset
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// Unreadable or invalid settings
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Collaborator could not be set up
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// Blank dream description
    #[error("Dream description is required")]
    EmptyDescription,
}

/// Result type for engine operations
pub type DreamResult<T> = Result<T, DreamError>;
