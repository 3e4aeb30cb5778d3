use std::path::PathBuf;

/// Errors raised while preparing or drawing frames.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(
        "no usable font: primary {} ({primary_error}), fallback {} ({fallback_error})",
        .primary.display(),
        .fallback.display()
    )]
    FontUnavailable {
        primary: PathBuf,
        primary_error: String,
        fallback: PathBuf,
        fallback_error: String,
    },

    #[error("hexagon edge must be at least {min} pixels, got {edge}")]
    InvalidEdge { edge: u32, min: u32 },

    #[error("a {width}x{height} board at edge {edge} exceeds the largest frame size")]
    FrameTooLarge { width: u32, height: u32, edge: u32 },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
