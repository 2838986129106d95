use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{LevelError, Result};

/// Room textures a level is tiled with. Never empty.
#[derive(Debug, Clone)]
pub struct TexturePool {
    textures: Vec<RgbaImage>,
}

impl TexturePool {
    pub fn new(textures: Vec<RgbaImage>) -> Result<Self> {
        if textures.is_empty() {
            return Err(LevelError::EmptyTexturePool);
        }

        Ok(Self { textures })
    }

    pub fn from_images(images: Vec<DynamicImage>) -> Result<Self> {
        Self::new(images.into_iter().map(|image| image.to_rgba8()).collect())
    }

    /// Independent uniform draw on every call.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &RgbaImage {
        // `new` refuses empty pools
        self.textures
            .choose(rng)
            .unwrap_or_else(|| &self.textures[0])
    }

    /// Copy of the pool with every texture resized to `size` square.
    pub fn scaled(&self, size: u32) -> Self {
        let textures = self
            .textures
            .iter()
            .map(|texture| {
                if texture.dimensions() == (size, size) {
                    texture.clone()
                } else {
                    imageops::resize(texture, size, size, FilterType::Triangle)
                }
            })
            .collect();

        Self { textures }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RgbaImage> {
        self.textures.iter()
    }

    pub fn contains(&self, texture: &RgbaImage) -> bool {
        self.textures.iter().any(|t| t == texture)
    }
}
