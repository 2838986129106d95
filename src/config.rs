use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LevelError, Result};

/// Dimensions of a generated level. Rooms are square; corridors are
/// `corridor_width` across and `corridor_length` along the direction of
/// travel, centered on the wall they cut through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Rooms per side
    pub grid_size: usize,
    /// Room edge in pixels
    pub room_size: u32,
    pub corridor_width: u32,
    pub corridor_length: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            room_size: 128,
            corridor_width: 42,
            corridor_length: 24,
        }
    }
}

impl LevelConfig {
    pub fn new(grid_size: usize, room_size: u32, corridor_width: u32, corridor_length: u32) -> Self {
        Self {
            grid_size,
            room_size,
            corridor_width,
            corridor_length,
        }
    }

    /// Square 32px corridors used by the first level layouts.
    pub fn legacy() -> Self {
        Self {
            corridor_width: 32,
            corridor_length: 32,
            ..Default::default()
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;

        Ok(config)
    }

    /// Edge of the rendered level in pixels.
    pub fn level_size(&self) -> u32 {
        self.room_size * self.grid_size as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(LevelError::InvalidConfig("grid size must be at least 1".into()));
        }

        if self.room_size == 0 {
            return Err(LevelError::InvalidConfig("room size must be at least 1".into()));
        }

        // Pixel positions are signed 32-bit once corridors are placed.
        let limit = i32::MAX as u32;
        let level_size = u32::try_from(self.grid_size)
            .ok()
            .and_then(|grid_size| self.room_size.checked_mul(grid_size))
            .filter(|size| *size <= limit);

        if level_size.is_none() {
            return Err(LevelError::InvalidConfig(format!(
                "{} rooms of {}px exceed {}px per side",
                self.grid_size, self.room_size, limit
            )));
        }

        if self.corridor_width > limit || self.corridor_length > limit {
            return Err(LevelError::InvalidConfig(format!("corridors cannot exceed {}px", limit)));
        }

        Ok(())
    }
}
