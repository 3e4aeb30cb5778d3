use std::path::PathBuf;

use hexplot_core::DumpError;
use hexplot_render::RenderError;

/// Errors raised while writing a frame sequence.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("frame {index}: failed to write {path}: {source}")]
    Write {
        index: usize,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("frame {index}: {source}")]
    Render {
        index: usize,
        #[source]
        source: RenderError,
    },

    #[error("inconsistent sequence: {0}")]
    Dimensions(#[from] DumpError),

    #[error("failed to create {path}: {source}")]
    GifCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("frame {index}: failed to encode GIF {path}: {source}")]
    Gif {
        index: usize,
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, SequenceError>;
