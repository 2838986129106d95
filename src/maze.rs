use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::LevelConfig;
use crate::grid::{Direction, Grid, Position};
use crate::room::{Anchor, Room};

/// Source of carving decisions. Every [`Rng`] picks uniformly; tests can
/// supply a fixed sequence instead.
pub trait DirectionPicker {
    fn pick(&mut self, choices: &[Direction]) -> Option<Direction>;
}

impl<R> DirectionPicker for R
where
    R: Rng + ?Sized,
{
    fn pick(&mut self, choices: &[Direction]) -> Option<Direction> {
        choices.choose(self).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<Room>,
    cursor: Position,
}

impl Maze {
    /// Lays every room out along a snake path: right across each row, down
    /// the last column, ending at the bottom-right origin which points
    /// nowhere. The cursor starts on the origin.
    pub fn seeded(config: &LevelConfig) -> Self {
        let size = config.grid_size;
        let last = size.saturating_sub(1);

        let grid = Grid::new(size, size, &mut |row, column| {
            let pointer = if column != last {
                Some(Direction::Right)
            } else if row != last {
                Some(Direction::Down)
            } else {
                None
            };

            Room::new(pointer, Anchor::for_position((row, column), config.room_size))
        });

        Self {
            grid,
            cursor: (last, last),
        }
    }

    /// Random walk of `iterations` steps from the cursor. Each step points
    /// the room it leaves at the room it enters and marks the entered room as
    /// the new terminus. Revisited rooms are overwritten.
    pub fn carve<P>(&mut self, iterations: usize, picker: &mut P)
    where
        P: DirectionPicker + ?Sized,
    {
        for step in 0..iterations {
            let choices = self.grid.open_directions(self.cursor);

            let direction = match picker.pick(&choices) {
                Some(direction) => direction,
                None => {
                    trace!("step {}: no way out of {:?}", step, self.cursor);
                    continue;
                }
            };

            let next = match direction.step(self.cursor, self.grid.rows(), self.grid.columns()) {
                Some(next) => next,
                None => {
                    trace!("step {}: {} leaves the grid at {:?}", step, direction, self.cursor);
                    continue;
                }
            };

            trace!("step {}: {:?} -> {:?} ({})", step, self.cursor, next, direction);

            self.set_pointer(self.cursor, Some(direction));
            self.cursor = next;
            self.set_pointer(self.cursor, None);
        }

        debug!("carved {} steps, terminus at {:?}", iterations, self.cursor);
    }

    fn set_pointer(&mut self, position: Position, pointer: Option<Direction>) {
        if let Some(room) = self.grid.get_mut(position) {
            room.pointer = pointer;
        }
    }

    pub fn grid(&self) -> &Grid<Room> {
        &self.grid
    }

    /// Where the carving walk came to rest.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn size(&self) -> usize {
        self.grid.rows()
    }

    pub fn room(&self, position: Position) -> Option<&Room> {
        self.grid.get(position)
    }

    pub fn pointer(&self, position: Position) -> Option<Direction> {
        self.grid.get(position).and_then(|room| room.pointer)
    }

    /// Positions of every room without an outgoing corridor.
    pub fn termini(&self) -> Vec<Position> {
        self.grid
            .iter()
            .filter(|(_, _, room)| room.is_terminus())
            .map(|(row, column, _)| (row, column))
            .collect()
    }

    pub fn pointer_counts(&self) -> HashMap<Option<Direction>, usize> {
        let mut counts = HashMap::new();

        for (_, _, room) in &self.grid {
            *counts.entry(room.pointer).or_insert(0) += 1;
        }

        counts
    }

    /// Follows corridors from `start` until a terminus or a room already
    /// seen. Returns the positions visited, `start` included.
    pub fn follow(&self, start: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let mut position = start;

        while self.grid.contains(position) && !path.contains(&position) {
            path.push(position);

            let next = self
                .pointer(position)
                .and_then(|direction| direction.step(position, self.grid.rows(), self.grid.columns()));

            match next {
                Some(next) => position = next,
                None => break,
            }
        }

        path
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                let symbol = self.pointer((row, column)).map(|d| d.arrow()).unwrap_or('•');

                write!(f, "{}", symbol)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::collections::VecDeque;

    use Direction::*;

    struct Scripted(VecDeque<Direction>);

    impl DirectionPicker for Scripted {
        fn pick(&mut self, choices: &[Direction]) -> Option<Direction> {
            let direction = self.0.pop_front().expect("script ran out");

            assert!(choices.contains(&direction), "{} not in {:?}", direction, choices);

            Some(direction)
        }
    }

    fn scripted(directions: &[Direction]) -> Scripted {
        Scripted(directions.iter().copied().collect())
    }

    fn maze(size: usize) -> Maze {
        Maze::seeded(&LevelConfig::new(size, 128, 42, 24))
    }

    fn rows(maze: &Maze) -> Vec<Vec<Option<Direction>>> {
        (0..maze.size())
            .map(|row| (0..maze.size()).map(|column| maze.pointer((row, column))).collect())
            .collect()
    }

    #[test]
    fn seeded_grid_is_a_snake() {
        let mut maze = maze(3);
        maze.carve(0, &mut scripted(&[]));

        assert_eq!(
            rows(&maze),
            vec![
                vec![Some(Right), Some(Right), Some(Down)],
                vec![Some(Right), Some(Right), Some(Down)],
                vec![Some(Right), Some(Right), None],
            ]
        );
        assert_eq!(maze.cursor(), (2, 2));
    }

    #[test]
    fn single_step_left_moves_the_terminus() {
        let mut maze = maze(3);
        maze.carve(1, &mut scripted(&[Left]));

        assert_eq!(maze.pointer((2, 2)), Some(Left));
        assert_eq!(maze.pointer((2, 1)), None);
        assert_eq!(maze.cursor(), (2, 1));
        assert_eq!(maze.termini(), vec![(2, 1)]);
    }

    #[test]
    fn revisiting_overwrites_earlier_pointer() {
        let mut maze = maze(3);
        maze.carve(4, &mut scripted(&[Up, Left, Down, Right]));

        // (2, 2) was left upwards first, then entered again from the left
        assert_eq!(maze.cursor(), (2, 2));
        assert_eq!(maze.pointer((2, 2)), None);
        assert_eq!(maze.pointer((1, 2)), Some(Left));
        assert_eq!(maze.pointer((1, 1)), Some(Down));
        assert_eq!(maze.pointer((2, 1)), Some(Right));
        assert_eq!(maze.termini(), vec![(2, 2)]);
    }

    #[test]
    fn rooms_off_the_walk_keep_the_snake() {
        let mut maze = maze(4);
        maze.carve(2, &mut scripted(&[Up, Up]));

        assert_eq!(maze.pointer((0, 0)), Some(Right));
        assert_eq!(maze.pointer((0, 3)), Some(Down));
        assert_eq!(maze.pointer((3, 0)), Some(Right));
        assert_eq!(maze.pointer((3, 3)), Some(Up));
        assert_eq!(maze.pointer((2, 3)), Some(Up));
        assert_eq!(maze.pointer((1, 3)), None);
    }

    #[test]
    fn random_walks_keep_one_terminus_and_stay_inside() {
        let mut rng = XorShiftRng::seed_from_u64(7);

        for size in 1..8 {
            for iterations in [0, 1, 5, 10, 100] {
                let mut maze = maze(size);
                maze.carve(iterations, &mut rng);

                let (row, column) = maze.cursor();
                assert!(row < size && column < size);
                assert_eq!(maze.termini(), vec![maze.cursor()]);
                assert_eq!(maze.pointer_counts()[&None::<Direction>], 1);
            }
        }
    }

    #[test]
    fn anchors_survive_carving() {
        let mut maze = maze(5);
        maze.carve(50, &mut XorShiftRng::seed_from_u64(3));

        for (row, column, room) in maze.grid() {
            assert_eq!(room.anchor, Anchor { x: column as u32 * 128, y: row as u32 * 128 });
        }
    }

    #[test]
    fn no_pointer_leads_out_of_the_grid() {
        let mut maze = maze(6);
        maze.carve(200, &mut XorShiftRng::seed_from_u64(11));

        for (row, column, room) in maze.grid() {
            if let Some(direction) = room.pointer {
                assert!(direction.step((row, column), 6, 6).is_some());
            }
        }
    }

    #[test]
    fn snake_leads_from_the_top_left_to_the_origin() {
        let maze = maze(3);
        let path = maze.follow((0, 0));

        assert_eq!(path.len(), 9);
        assert_eq!(path.last(), Some(&(2, 2)));
    }

    #[test]
    fn one_by_one_grid_does_not_move() {
        let mut maze = maze(1);
        maze.carve(10, &mut XorShiftRng::seed_from_u64(1));

        assert_eq!(maze.cursor(), (0, 0));
        assert_eq!(maze.pointer((0, 0)), None);
    }

    #[test]
    fn display_draws_arrows() {
        let mut maze = maze(2);
        maze.carve(1, &mut scripted(&[Up]));

        assert_eq!(maze.to_string(), "→•\n→↑\n");
    }
}
