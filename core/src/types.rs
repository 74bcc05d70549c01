/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Row-major index of a square, `0..SQUARE_COUNT`.
pub type SquareIndex = u8;

/// Number of squares along one side of the board.
pub const BOARD_SIDE: Coord = 3;

/// Total number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

pub trait ToCoords {
    fn to_coords(self) -> Coord2;
}

impl ToCoords for SquareIndex {
    fn to_coords(self) -> Coord2 {
        (self / BOARD_SIDE, self % BOARD_SIDE)
    }
}

pub trait ToSquareIndex {
    fn to_square_index(self) -> SquareIndex;
}

impl ToSquareIndex for Coord2 {
    fn to_square_index(self) -> SquareIndex {
        self.0 * BOARD_SIDE + self.1
    }
}

pub const fn is_valid_index(index: SquareIndex) -> bool {
    (index as usize) < SQUARE_COUNT
}

/// Iterates over every square index in row-major order.
pub fn iter_indices() -> impl Iterator<Item = SquareIndex> {
    0..SQUARE_COUNT as SquareIndex
}
