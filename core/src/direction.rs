/// Orthogonal moves between grid cells.
///
/// "North" increases the row index. Row 0 is the first line of a maze file,
/// so on screen North points down the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The order in which every search considers a cell's neighbours.
///
/// Queue-based searches consume it front to back. Stack-based searches must
/// push it back to front so that pops come out North first.
pub const EXPLORATION_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// `(row delta, col delta)` for one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
        }
    }
}
