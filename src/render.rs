use image::imageops;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use log::debug;
use rand::Rng;

use crate::config::LevelConfig;
use crate::grid::Direction;
use crate::maze::Maze;
use crate::texture::TexturePool;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rectangle cleared for a corridor, relative to the room's anchor. It is
/// centered on the wall the corridor passes through, so half of it lies in
/// the neighboring room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutout {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Cutout {
    pub fn for_corridor(direction: Direction, config: &LevelConfig) -> Self {
        let room = config.room_size as i32;
        let width = config.corridor_width;
        let length = config.corridor_length;

        let across = room / 2 - width as i32 / 2;
        let half_length = length as i32 / 2;

        match direction {
            Direction::Up => Self { x: across, y: -half_length, width, height: length },
            Direction::Down => Self { x: across, y: room - half_length, width, height: length },
            Direction::Left => Self { x: -half_length, y: across, width: length, height: width },
            Direction::Right => Self { x: room - half_length, y: across, width: length, height: width },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Draws a carved maze as a single image: one texture per room, then one
/// transparent corridor opening per room.
#[derive(Debug, Clone)]
pub struct LevelRenderer {
    config: LevelConfig,
}

impl LevelRenderer {
    pub fn new(config: LevelConfig) -> Self {
        Self { config }
    }

    pub fn render<R: Rng + ?Sized>(&self, maze: &Maze, textures: &TexturePool, rng: &mut R) -> RgbaImage {
        let size = self.config.level_size();
        let mut canvas = RgbaImage::new(size, size);

        // Every room must be tiled before any corridor is cut through it.
        self.tile(&mut canvas, maze, textures, rng);
        self.cut_corridors(&mut canvas, maze);

        debug!("rendered {}x{} level", size, size);

        canvas
    }

    fn tile<R: Rng + ?Sized>(&self, canvas: &mut RgbaImage, maze: &Maze, textures: &TexturePool, rng: &mut R) {
        let scaled = textures.scaled(self.config.room_size);

        for (_, _, room) in maze.grid() {
            let texture = scaled.random(rng);

            imageops::replace(canvas, texture, room.anchor.x as i64, room.anchor.y as i64);
        }
    }

    fn cut_corridors(&self, canvas: &mut RgbaImage, maze: &Maze) {
        for (_, _, room) in maze.grid() {
            let direction = match room.pointer {
                Some(direction) => direction,
                None => continue,
            };

            let cutout = Cutout::for_corridor(direction, &self.config)
                .translate(room.anchor.x as i32, room.anchor.y as i32);

            if cutout.is_empty() {
                continue;
            }

            draw_filled_rect_mut(
                canvas,
                Rect::at(cutout.x, cutout.y).of_size(cutout.width, cutout.height),
                TRANSPARENT,
            );
        }
    }
}
