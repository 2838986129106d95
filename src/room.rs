use crate::grid::{Direction, Position};

/// Top-left pixel corner of a room within the rendered level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub x: u32,
    pub y: u32,
}

impl Anchor {
    pub fn for_position((row, column): Position, room_size: u32) -> Self {
        Self {
            x: column as u32 * room_size,
            y: row as u32 * room_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Direction of the single corridor leaving this room, `None` for the
    /// end of the path.
    pub pointer: Option<Direction>,
    pub anchor: Anchor,
}

impl Room {
    pub fn new(pointer: Option<Direction>, anchor: Anchor) -> Self {
        Self { pointer, anchor }
    }

    pub fn is_terminus(&self) -> bool {
        self.pointer.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_column_then_row() {
        assert_eq!(Anchor::for_position((2, 3), 128), Anchor { x: 384, y: 256 });
        assert_eq!(Anchor::for_position((0, 0), 64), Anchor::default());
    }
}
