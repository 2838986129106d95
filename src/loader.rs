use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use image::DynamicImage;
use log::debug;

use crate::error::{LevelError, Result};
use crate::texture::TexturePool;

/// Decodes one image on the runtime's blocking pool.
pub async fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref().to_path_buf();
    let task_path = path.clone();

    let decoded = tokio::task::spawn_blocking(move || image::open(&task_path))
        .await
        .map_err(|e| LevelError::Join(e.to_string()))?;

    let image = decoded.map_err(|source| LevelError::Load {
        path: path.clone(),
        source,
    })?;

    debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());

    Ok(image)
}

impl TexturePool {
    /// Loads every source concurrently. Any failure fails the whole pool.
    pub async fn load<I, P>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<PathBuf> = sources.into_iter().map(|p| p.as_ref().to_path_buf()).collect();

        let images = try_join_all(paths.iter().map(load_image)).await?;

        Self::from_images(images)
    }
}
