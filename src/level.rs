use image::RgbaImage;
use log::{debug, info};
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::config::LevelConfig;
use crate::error::{LevelError, Result};
use crate::maze::{DirectionPicker, Maze};
use crate::render::LevelRenderer;
use crate::texture::TexturePool;

pub const DEFAULT_ITERATIONS: usize = 10;

/// Carves mazes and renders them with the loaded textures.
///
/// Rendering is refused until a texture pool has been loaded.
pub struct LevelGenerator {
    config: LevelConfig,
    maze: Maze,
    textures: Option<TexturePool>,
    rng: Box<dyn RngCore>,
}

impl LevelGenerator {
    pub fn new(config: LevelConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        Self::with_rng(config, Box::new(XorShiftRng::seed_from_u64(seed)))
    }

    pub fn with_rng(config: LevelConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            maze: Maze::seeded(&config),
            config,
            textures: None,
            rng,
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Replaces the current maze with a fresh one carved by `iterations`
    /// random steps.
    pub fn create_maze(&mut self, iterations: usize) -> &Maze {
        let mut maze = Maze::seeded(&self.config);
        maze.carve(iterations, &mut self.rng);

        self.install(maze)
    }

    /// As [`LevelGenerator::create_maze`], with directions taken from `picker`.
    pub fn create_maze_with<P>(&mut self, iterations: usize, picker: &mut P) -> &Maze
    where
        P: DirectionPicker + ?Sized,
    {
        let mut maze = Maze::seeded(&self.config);
        maze.carve(iterations, picker);

        self.install(maze)
    }

    fn install(&mut self, maze: Maze) -> &Maze {
        debug!("maze:\n{}", maze);

        self.maze = maze;
        &self.maze
    }

    pub fn set_textures(&mut self, textures: TexturePool) {
        info!("{} textures ready", textures.len());

        self.textures = Some(textures);
    }

    #[cfg(feature = "fs")]
    pub async fn load_textures<I, P>(&mut self, sources: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<std::path::Path>,
    {
        let textures = TexturePool::load(sources).await?;

        self.set_textures(textures);

        Ok(())
    }

    pub fn textures_loaded(&self) -> bool {
        self.textures.is_some()
    }

    pub fn random_texture(&mut self) -> Result<&RgbaImage> {
        let textures = self.textures.as_ref().ok_or(LevelError::TexturesNotLoaded)?;

        Ok(textures.random(&mut self.rng))
    }

    pub fn render(&mut self) -> Result<RgbaImage> {
        let textures = self.textures.as_ref().ok_or(LevelError::TexturesNotLoaded)?;
        let renderer = LevelRenderer::new(self.config);

        Ok(renderer.render(&self.maze, textures, &mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use image::Rgba;

    struct Last;

    impl DirectionPicker for Last {
        fn pick(&mut self, choices: &[Direction]) -> Option<Direction> {
            choices.last().copied()
        }
    }

    fn pool() -> TexturePool {
        TexturePool::new(vec![
            RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])),
            RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255])),
        ])
        .unwrap()
    }

    #[test]
    fn render_requires_textures() {
        let mut generator = LevelGenerator::new(LevelConfig::default(), Some(1));
        generator.create_maze(DEFAULT_ITERATIONS);

        assert!(!generator.textures_loaded());
        assert!(matches!(generator.render(), Err(LevelError::TexturesNotLoaded)));
        assert!(matches!(generator.random_texture(), Err(LevelError::TexturesNotLoaded)));

        generator.set_textures(pool());

        assert!(generator.textures_loaded());
        assert_eq!(generator.render().unwrap().dimensions(), (640, 640));
    }

    #[test]
    fn same_seed_same_level() {
        let render = |seed| {
            let mut generator = LevelGenerator::new(LevelConfig::new(4, 16, 4, 4), Some(seed));
            generator.set_textures(pool());
            generator.create_maze(25);
            (generator.maze().clone(), generator.render().unwrap())
        };

        assert_eq!(render(99), render(99));
    }

    #[test]
    fn create_maze_starts_over() {
        let mut generator = LevelGenerator::new(LevelConfig::new(3, 16, 4, 4), Some(3));
        generator.create_maze_with(1, &mut Last);

        assert_eq!(generator.maze().cursor(), (2, 1));

        generator.create_maze(0);

        assert_eq!(generator.maze(), &Maze::seeded(generator.config()));
    }

    #[test]
    fn random_texture_comes_from_the_pool() {
        let mut generator = LevelGenerator::new(LevelConfig::default(), Some(4));
        let textures = pool();
        generator.set_textures(textures.clone());

        for _ in 0..20 {
            let texture = generator.random_texture().unwrap().clone();
            assert!(textures.contains(&texture));
        }
    }
}
