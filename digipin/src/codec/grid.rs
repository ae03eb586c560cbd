//! Symbol grid and its inverse lookup table.
//!
//! Both tables are built in `const` context, so the inverse can never drift
//! from the forward grid and nothing is initialised at runtime.

use super::types::GRID_SIZE;

/// Size of the ASCII inverse table.
const ASCII_RANGE: usize = 128;

/// Position of one cell in the 4×4 grid.
///
/// Row 0 is the northern-most band of the enclosing box, column 0 the
/// western-most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index (0-3), 0 at north
    pub row: u8,
    /// Column index (0-3), 0 at west
    pub col: u8,
}

impl Cell {
    /// Creates a cell position.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// The 4×4 symbol table used at every subdivision level.
#[derive(Debug)]
pub struct Grid {
    symbols: [[u8; GRID_SIZE]; GRID_SIZE],
    inverse: [Option<Cell>; ASCII_RANGE],
}

/// The DIGIPIN symbol grid.
///
/// ```text
/// F C 9 8
/// J 3 2 7
/// K 4 5 6
/// L M P T
/// ```
pub static GRID: Grid = Grid::new([*b"FC98", *b"J327", *b"K456", *b"LMPT"]);

impl Grid {
    /// Builds a grid and its inverse.
    ///
    /// Panics at compile time if a symbol is non-ASCII or repeated.
    const fn new(symbols: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut inverse = [None; ASCII_RANGE];
        let mut row = 0;
        while row < GRID_SIZE {
            let mut col = 0;
            while col < GRID_SIZE {
                let symbol = symbols[row][col] as usize;
                assert!(symbol < ASCII_RANGE, "grid symbols must be ASCII");
                assert!(inverse[symbol].is_none(), "grid symbols must be unique");
                inverse[symbol] = Some(Cell::new(row as u8, col as u8));
                col += 1;
            }
            row += 1;
        }
        Self { symbols, inverse }
    }

    /// Returns the symbol at a cell position.
    #[inline]
    pub fn symbol(&self, cell: Cell) -> char {
        self.symbols[cell.row as usize][cell.col as usize] as char
    }

    /// Looks up the cell position of a symbol.
    ///
    /// Returns `None` for anything outside the 16-symbol alphabet, including
    /// lower-case forms of valid symbols.
    #[inline]
    pub fn position(&self, symbol: char) -> Option<Cell> {
        if symbol.is_ascii() {
            self.inverse[symbol as usize]
        } else {
            None
        }
    }

    /// Iterates over all 16 symbols in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols
            .iter()
            .flat_map(|row| row.iter().map(|&b| b as char))
    }

    /// Iterates over all 16 cell positions in row-major order.
    pub fn cells() -> impl Iterator<Item = Cell> {
        let size = GRID_SIZE as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}
