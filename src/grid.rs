use crate::direction::Direction;

/// Square board addressed by row-major cell index. Edges wrap around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    /// `(row, column)` of a cell
    pub fn row_col(&self, cell: usize) -> (usize, usize) {
        (cell / self.size, cell % self.size)
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The cell one step away in `direction`. Leaving an edge re-enters on
    /// the opposite edge in the same row or column.
    pub fn neighbor(&self, cell: usize, direction: Direction) -> usize {
        let n = self.size;
        let (row, col) = self.row_col(cell);
        let (row, col) = match direction {
            Direction::Up => ((row + n - 1) % n, col),
            Direction::Down => ((row + 1) % n, col),
            Direction::Left => (row, (col + n - 1) % n),
            Direction::Right => (row, (col + 1) % n),
        };
        self.index(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: Grid = Grid::new(20);

    #[test]
    fn interior_moves_are_single_steps() {
        assert_eq!(G.neighbor(45, Direction::Right), 46);
        assert_eq!(G.neighbor(45, Direction::Left), 44);
        assert_eq!(G.neighbor(45, Direction::Down), 65);
        assert_eq!(G.neighbor(45, Direction::Up), 25);
    }

    #[test]
    fn right_edge_wraps_to_start_of_same_row() {
        assert_eq!(G.neighbor(19, Direction::Right), 0);
        assert_eq!(G.neighbor(59, Direction::Right), 40);
        assert_eq!(G.neighbor(399, Direction::Right), 380);
    }

    #[test]
    fn left_edge_wraps_to_end_of_same_row() {
        assert_eq!(G.neighbor(0, Direction::Left), 19);
        assert_eq!(G.neighbor(40, Direction::Left), 59);
    }

    #[test]
    fn vertical_edges_wrap_in_same_column() {
        for col in 0..20 {
            assert_eq!(G.neighbor(col, Direction::Up), 380 + col);
            assert_eq!(G.neighbor(380 + col, Direction::Down), col);
        }
    }

    #[test]
    fn every_step_can_be_undone() {
        for cell in 0..G.cell_count() {
            for d in Direction::ALL {
                let next = G.neighbor(cell, d);
                assert!(G.contains(next));
                assert_eq!(G.neighbor(next, d.opposite()), cell);
            }
        }
    }
}
