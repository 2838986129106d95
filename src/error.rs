use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to load texture {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture loader task failed: {0}")]
    Join(String),

    #[error("textures must be loaded before rendering")]
    TexturesNotLoaded,

    #[error("texture pool is empty")]
    EmptyTexturePool,

    #[error("invalid level config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = LevelError> = std::result::Result<T, E>;
