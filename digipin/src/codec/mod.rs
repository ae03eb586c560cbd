//! DIGIPIN encoding and decoding
//!
//! Converts between geographic coordinates and 10-symbol grid codes. The
//! coverage region is split into a 4×4 grid ten times over; each level
//! contributes one symbol. Rows are counted from the north edge of the
//! current box, columns from the west edge.
//!
//! # Example
//!
//! ```
//! use digipin::codec::{decode, encode};
//!
//! let code = encode(20.5, 81.5)?;
//! assert_eq!(code.to_string(), "2LL-LLL-LLLL");
//!
//! let centroid = decode("2LL-LLL-LLLL")?;
//! assert_eq!(centroid.latitude_string(), "20.500017");
//! # Ok::<(), digipin::codec::CodecError>(())
//! ```

mod grid;
mod types;

pub use grid::{Cell, Grid, GRID};
pub use types::{
    Axis, BoundingBox, Centroid, Code, CodecError, FormatError, RangeError, CODE_LENGTH,
    COVERAGE, GRID_SIZE, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, SEPARATOR,
};

/// Encodes a coordinate into a DIGIPIN.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (2.5 to 38.5)
/// * `lon` - Longitude in degrees (63.5 to 99.5)
///
/// # Errors
///
/// Returns [`RangeError`] if either coordinate lies outside the coverage
/// region. Latitude is checked first; NaN is always out of range.
pub fn encode(lat: f64, lon: f64) -> Result<Code, RangeError> {
    check_range(Axis::Latitude, lat, MIN_LAT, MAX_LAT)?;
    check_range(Axis::Longitude, lon, MIN_LON, MAX_LON)?;

    let mut bounds = COVERAGE;
    let mut cells = [Cell::new(0, 0); CODE_LENGTH];
    for cell in cells.iter_mut() {
        *cell = bounds.locate(lat, lon);
        bounds = bounds.descend(*cell);
    }

    Ok(Code::from_cells(cells))
}

/// Decodes a DIGIPIN to the center of its cell.
///
/// Hyphens are ignored wherever they appear.
///
/// # Errors
///
/// Returns [`FormatError`] if the code does not hold exactly 10 symbols or
/// contains a symbol outside the alphabet.
pub fn decode(code: &str) -> Result<Centroid, FormatError> {
    decode_bounds(code).map(|bounds| bounds.center())
}

/// Decodes a DIGIPIN to the bounding box of its cell.
pub fn decode_bounds(code: &str) -> Result<BoundingBox, FormatError> {
    let cells = parse_cells(&GRID, code)?;
    Ok(cells
        .iter()
        .fold(COVERAGE, |bounds, &cell| bounds.subdivide(cell)))
}

fn check_range(axis: Axis, value: f64, min: f64, max: f64) -> Result<(), RangeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RangeError {
            axis,
            value,
            min,
            max,
        })
    }
}

/// Validates a code and resolves each symbol to its grid position.
///
/// Length is checked before any symbol, so a short code with bad symbols
/// reports the length.
fn parse_cells(grid: &Grid, code: &str) -> Result<[Cell; CODE_LENGTH], FormatError> {
    let symbols = || code.chars().filter(|&c| c != SEPARATOR);

    let len = symbols().count();
    if len != CODE_LENGTH {
        return Err(FormatError::InvalidLength(len));
    }

    let mut cells = [Cell::new(0, 0); CODE_LENGTH];
    for (position, symbol) in symbols().enumerate() {
        cells[position] = grid
            .position(symbol)
            .ok_or(FormatError::InvalidSymbol { symbol, position })?;
    }

    Ok(cells)
}
