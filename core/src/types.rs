/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for cell counts and flat cell indices.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Flat row-major position of a cell, in `[0, width * height)`.
pub type CellIndex = CellCount;

/// Whole seconds on the round countdown.
pub type Seconds = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Boards are stored as `(row, column)`, so `y` comes first.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts a flat index into coordinates for a grid `width` cells wide.
pub const fn index_to_coords(index: CellIndex, width: Coord) -> Coord2 {
    let width = width as CellIndex;
    ((index % width) as Coord, (index / width) as Coord)
}

/// Converts coordinates into a flat index for a grid `width` cells wide.
pub const fn coords_to_index((x, y): Coord2, width: Coord) -> CellIndex {
    (y as CellIndex) * (width as CellIndex) + (x as CellIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_is_row_major() {
        assert_eq!(index_to_coords(0, 5), (0, 0));
        assert_eq!(index_to_coords(4, 5), (4, 0));
        assert_eq!(index_to_coords(5, 5), (0, 1));
        assert_eq!(index_to_coords(24, 5), (4, 4));
        assert_eq!(coords_to_index((3, 2), 5), 13);
        assert_eq!((3, 2).to_nd_index(), [2, 3]);
    }
}
