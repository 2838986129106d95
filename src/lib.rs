pub mod config;
pub mod error;
pub mod grid;
pub mod level;
#[cfg(feature = "fs")]
pub mod loader;
pub mod maze;
pub mod pixels;
pub mod render;
pub mod room;
pub mod texture;

#[cfg(feature = "wasm")]
pub mod web;

pub use config::LevelConfig;
pub use error::{LevelError, Result};
pub use grid::{Direction, Grid, Position};
pub use level::{LevelGenerator, DEFAULT_ITERATIONS};
pub use maze::{DirectionPicker, Maze};
pub use pixels::PixelManipulator;
pub use render::{Cutout, LevelRenderer};
pub use room::{Anchor, Room};
pub use texture::TexturePool;
