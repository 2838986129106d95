use std::fmt;

/// `(row, column)`
pub type Position = (usize, usize);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn invert(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Moves one cell from `position`, or `None` if that would leave a grid
    /// of `rows` by `columns`.
    pub fn step(&self, (row, column): Position, rows: usize, columns: usize) -> Option<Position> {
        match self {
            Direction::Up => {
                if row == 0 {
                    None
                } else {
                    Some((row - 1, column))
                }
            }
            Direction::Down => {
                if row + 1 >= rows {
                    None
                } else {
                    Some((row + 1, column))
                }
            }
            Direction::Left => {
                if column == 0 {
                    None
                } else {
                    Some((row, column - 1))
                }
            }
            Direction::Right => {
                if column + 1 >= columns {
                    None
                } else {
                    Some((row, column + 1))
                }
            }
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    columns: usize,
}

pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    pos: usize,
}

impl<T> Grid<T> {
    pub fn new<F: FnMut(usize, usize) -> T>(rows: usize, columns: usize, initializer: &mut F) -> Self {
        let mut data = Vec::with_capacity(rows * columns);

        for row in 0..rows {
            for column in 0..columns {
                data.push(initializer(row, column));
            }
        }

        Self {
            data,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, (row, column): Position) -> bool {
        row < self.rows && column < self.columns
    }

    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter { grid: self, pos: 0 }
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        if !self.contains(position) {
            return None;
        }

        self.data.get(self.index(position))
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        if !self.contains(position) {
            return None;
        }

        let index = self.index(position);

        self.data.get_mut(index)
    }

    /// Directions that stay inside the grid from `position`, in
    /// [`Direction::ALL`] order.
    pub fn open_directions(&self, position: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| direction.step(position, self.rows, self.columns).is_some())
            .collect()
    }

    fn index(&self, (row, column): Position) -> usize {
        column + (row * self.columns)
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.grid.data.len() {
            None
        } else {
            let row = self.pos / self.grid.columns;
            let column = self.pos % self.grid.columns;
            let value = &self.grid.data[self.pos];

            self.pos += 1;

            Some((row, column, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_row_major() {
        let grid = Grid::new(2, 3, &mut |row, column| row * 10 + column);
        let order: Vec<_> = grid.iter().map(|(r, c, v)| (r, c, *v)).collect();

        assert_eq!(
            order,
            vec![(0, 0, 0), (0, 1, 1), (0, 2, 2), (1, 0, 10), (1, 1, 11), (1, 2, 12)]
        );
    }

    #[test]
    fn get_rejects_positions_outside_the_grid() {
        let grid = Grid::new(2, 2, &mut |_, _| ());

        assert!(grid.get((1, 1)).is_some());
        assert!(grid.get((0, 2)).is_none());
        assert!(grid.get((2, 0)).is_none());
    }

    #[test]
    fn open_directions_exclude_edges() {
        let grid = Grid::new(3, 3, &mut |_, _| ());

        assert_eq!(grid.open_directions((0, 0)), vec![Direction::Down, Direction::Right]);
        assert_eq!(grid.open_directions((2, 2)), vec![Direction::Up, Direction::Left]);
        assert_eq!(grid.open_directions((1, 1)), Direction::ALL.to_vec());
    }

    #[test]
    fn single_cell_grid_has_no_open_directions() {
        let grid = Grid::new(1, 1, &mut |_, _| ());

        assert!(grid.open_directions((0, 0)).is_empty());
    }

    #[test]
    fn step_and_invert_return_home() {
        for direction in Direction::ALL {
            let there = direction.step((1, 1), 3, 3).unwrap();

            assert_eq!(direction.invert().step(there, 3, 3), Some((1, 1)));
        }
    }
}
