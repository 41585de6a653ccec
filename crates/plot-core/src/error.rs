// File: crates/plot-core/src/error.rs
// Summary: Error type shared by the view, axis and plot modules.

use thiserror::Error;

use crate::scene::PrimitiveId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("degenerate view rectangle: width {width}, height {height} (both must be finite and > 0)")]
    DegenerateView { width: f64, height: f64 },

    #[error("unknown marker type `{0}`")]
    UnknownMarker(String),

    #[error("unknown dash pattern `{0}`")]
    UnknownDash(String),

    #[error("primitive {0:?} is not in the scene")]
    UnknownPrimitive(PrimitiveId),

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, PlotError>;
