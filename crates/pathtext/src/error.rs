//! Error types for pathtext
//!
//! The morphing core itself never fails: bad geometry degrades (clamped
//! samples, default normals) instead of erroring. Everything here lives at
//! the backend boundaries where real fonts and real pixel buffers exist.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathTextError>;

/// Main error type for pathtext
#[derive(Debug, Error)]
pub enum PathTextError {
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font parsing and outline extraction errors
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Invalid font data")]
    InvalidData,

    #[error("Font has no horizontal metrics")]
    MissingMetrics,

    #[error("Outline extraction failed for glyph {0}")]
    OutlineExtraction(u32),
}

/// Rasterization surface errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Path building failed")]
    PathBuildingFailed,
}
