//! Codec type definitions

use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

use super::grid::{Cell, GRID};

/// Coverage region bounds in degrees.
pub const MIN_LAT: f64 = 2.5;
pub const MAX_LAT: f64 = 38.5;
pub const MIN_LON: f64 = 63.5;
pub const MAX_LON: f64 = 99.5;

/// Number of symbols in a code, one per subdivision level.
pub const CODE_LENGTH: usize = 10;

/// Subdivisions per axis at each level.
pub const GRID_SIZE: usize = 4;

/// Decorative group separator in formatted codes.
pub const SEPARATOR: char = '-';

/// The fixed rectangle within which coordinates are encodable.
pub const COVERAGE: BoundingBox = BoundingBox {
    min_lat: MIN_LAT,
    max_lat: MAX_LAT,
    min_lon: MIN_LON,
    max_lon: MAX_LON,
};

const STEPS: f64 = GRID_SIZE as f64;
const MAX_INDEX: i64 = GRID_SIZE as i64 - 1;

/// Coordinate axis, used to report which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Axis-aligned rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Returns true if the point lies inside the box, edges included.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Latitude extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Centroid {
        Centroid {
            latitude: (self.min_lat + self.max_lat) / 2.0,
            longitude: (self.min_lon + self.max_lon) / 2.0,
        }
    }

    /// Finds the grid cell of this box that holds the point.
    ///
    /// Rows count down from the north edge. Indices are clamped into 0..=3,
    /// which resolves points lying exactly on the upper edge.
    pub(super) fn locate(&self, lat: f64, lon: f64) -> Cell {
        let lat_step = self.lat_span() / STEPS;
        let lon_step = self.lon_span() / STEPS;

        let col = ((lon - self.min_lon) / lon_step).floor() as i64;
        let row = MAX_INDEX - ((lat - self.min_lat) / lat_step).floor() as i64;

        Cell::new(
            row.clamp(0, MAX_INDEX) as u8,
            col.clamp(0, MAX_INDEX) as u8,
        )
    }

    /// Narrows to a cell using encode arithmetic (anchored on the south and
    /// west edges).
    ///
    /// Kept separate from [`Self::subdivide`]: the two describe the same cell
    /// but round differently, and codes must match other implementations bit
    /// for bit.
    pub(super) fn descend(&self, cell: Cell) -> BoundingBox {
        let lat_step = self.lat_span() / STEPS;
        let lon_step = self.lon_span() / STEPS;
        let min_lon = self.min_lon + lon_step * f64::from(cell.col);

        BoundingBox {
            min_lat: self.min_lat + lat_step * f64::from(MAX_INDEX as u8 - cell.row),
            max_lat: self.min_lat + lat_step * f64::from(GRID_SIZE as u8 - cell.row),
            min_lon,
            max_lon: min_lon + lon_step,
        }
    }

    /// Narrows to a cell using decode arithmetic (latitude anchored on the
    /// north edge).
    pub(super) fn subdivide(&self, cell: Cell) -> BoundingBox {
        let lat_step = self.lat_span() / STEPS;
        let lon_step = self.lon_span() / STEPS;

        BoundingBox {
            min_lat: self.max_lat - lat_step * f64::from(cell.row + 1),
            max_lat: self.max_lat - lat_step * f64::from(cell.row),
            min_lon: self.min_lon + lon_step * f64::from(cell.col),
            max_lon: self.min_lon + lon_step * f64::from(cell.col + 1),
        }
    }
}

/// Center of a decoded cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
}

impl Centroid {
    /// Latitude with exactly six fractional digits.
    pub fn latitude_string(&self) -> String {
        format!("{:.6}", self.latitude)
    }

    /// Longitude with exactly six fractional digits.
    pub fn longitude_string(&self) -> String {
        format!("{:.6}", self.longitude)
    }
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A validated 10-symbol DIGIPIN.
///
/// Displays as `XXX-XXX-XXXX`. Parsing accepts the code with or without
/// hyphens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    cells: [Cell; CODE_LENGTH],
}

impl Code {
    pub(super) fn from_cells(cells: [Cell; CODE_LENGTH]) -> Self {
        Self { cells }
    }

    /// Grid positions, one per level, coarsest first.
    pub fn cells(&self) -> &[Cell; CODE_LENGTH] {
        &self.cells
    }

    /// Iterates over the symbols, coarsest first.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|&cell| GRID.symbol(cell))
    }

    /// The canonical 10-symbol form without separators.
    pub fn as_compact(&self) -> String {
        self.symbols().collect()
    }

    /// Bounding box after applying the first `level` symbols.
    ///
    /// Level 0 is the coverage region; levels above 10 are treated as 10.
    pub fn bounds_at_level(&self, level: usize) -> BoundingBox {
        self.cells
            .iter()
            .take(level)
            .fold(COVERAGE, |bounds, &cell| bounds.subdivide(cell))
    }

    /// The final cell identified by this code.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds_at_level(CODE_LENGTH)
    }

    /// Center of the final cell.
    pub fn centroid(&self) -> Centroid {
        self.bounds().center()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols().enumerate() {
            if i == 3 || i == 6 {
                f.write_char(SEPARATOR)?;
            }
            f.write_char(symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_cells(&GRID, s).map(Code::from_cells)
    }
}

/// A coordinate outside the coverage region.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{axis} {value} is outside the coverage region ({min} to {max})")]
pub struct RangeError {
    /// Axis that violated the bounds
    pub axis: Axis,
    /// Offending value
    pub value: f64,
    /// Lower bound for the axis
    pub min: f64,
    /// Upper bound for the axis
    pub max: f64,
}

/// A malformed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Symbol count after removing hyphens is not 10
    #[error("invalid code: expected 10 symbols, found {0}")]
    InvalidLength(usize),

    /// Symbol outside the 16-symbol alphabet
    #[error("invalid code: symbol '{symbol}' at index {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Any codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CodecError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_spans_are_equal() {
        assert_eq!(COVERAGE.lat_span(), 36.0);
        assert_eq!(COVERAGE.lon_span(), 36.0);
    }

    #[test]
    fn test_contains_includes_edges() {
        assert!(COVERAGE.contains(MIN_LAT, MIN_LON));
        assert!(COVERAGE.contains(MAX_LAT, MAX_LON));
        assert!(!COVERAGE.contains(MAX_LAT + 0.0001, MIN_LON));
        assert!(!COVERAGE.contains(f64::NAN, MIN_LON));
    }

    #[test]
    fn test_locate_inverts_rows() {
        // South-west corner lands in the bottom-left cell
        assert_eq!(COVERAGE.locate(3.0, 64.0), Cell::new(3, 0));
        // North-east corner region lands in the top-right cell
        assert_eq!(COVERAGE.locate(38.0, 99.0), Cell::new(0, 3));
    }

    #[test]
    fn test_locate_clamps_upper_edge() {
        assert_eq!(COVERAGE.locate(MAX_LAT, MAX_LON), Cell::new(0, 3));
    }

    #[test]
    fn test_descend_and_subdivide_agree() {
        for row in 0..4 {
            for col in 0..4 {
                let cell = Cell::new(row, col);
                let a = COVERAGE.descend(cell);
                let b = COVERAGE.subdivide(cell);
                assert!((a.min_lat - b.min_lat).abs() < 1e-12, "{:?}", cell);
                assert!((a.max_lat - b.max_lat).abs() < 1e-12, "{:?}", cell);
                assert!((a.min_lon - b.min_lon).abs() < 1e-12, "{:?}", cell);
                assert!((a.max_lon - b.max_lon).abs() < 1e-12, "{:?}", cell);
            }
        }
    }

    #[test]
    fn test_subdivide_top_left_is_north_west() {
        let cell = COVERAGE.subdivide(Cell::new(0, 0));
        assert_eq!(cell.max_lat, MAX_LAT);
        assert_eq!(cell.min_lat, 29.5);
        assert_eq!(cell.min_lon, MIN_LON);
        assert_eq!(cell.max_lon, 72.5);
    }

    #[test]
    fn test_centroid_formatting() {
        let centroid = Centroid {
            latitude: 20.5,
            longitude: 81.0000004,
        };
        assert_eq!(centroid.latitude_string(), "20.500000");
        assert_eq!(centroid.longitude_string(), "81.000000");
        assert_eq!(centroid.to_string(), "20.500000, 81.000000");
    }

    #[test]
    fn test_range_error_display() {
        let err = RangeError {
            axis: Axis::Latitude,
            value: 40.0,
            min: MIN_LAT,
            max: MAX_LAT,
        };
        assert_eq!(
            err.to_string(),
            "latitude 40 is outside the coverage region (2.5 to 38.5)"
        );
    }

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            FormatError::InvalidLength(3).to_string(),
            "invalid code: expected 10 symbols, found 3"
        );
        assert_eq!(
            FormatError::InvalidSymbol {
                symbol: 'A',
                position: 0
            }
            .to_string(),
            "invalid code: symbol 'A' at index 0 is not in the alphabet"
        );
    }

    #[test]
    fn test_codec_error_wraps_both_kinds() {
        let err: CodecError = FormatError::InvalidLength(0).into();
        assert!(matches!(err, CodecError::Format(_)));
        assert_eq!(err.to_string(), "invalid code: expected 10 symbols, found 0");
    }
}
