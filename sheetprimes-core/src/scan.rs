//! Column scan over the first worksheet

use std::path::Path;

use calamine::Data;

use crate::error::ScanError;
use crate::numeric;
use crate::reader;

/// Zero-based index of the only column the scanner inspects (column "B").
pub const COLUMN_B: u32 = 1;

/// Scan column B of the first worksheet and collect, in row order, every
/// text cell whose content is a digit-only string naming a prime number.
///
/// Rows without a column-B cell are skipped, as are non-text cells of any
/// kind. Collected values keep their original spelling.
pub fn find_primes<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ScanError> {
    let range = reader::first_sheet_range(path.as_ref())?;
    let mut found = Vec::new();

    let Some((end_row, _)) = range.end() else {
        // empty sheet
        return Ok(found);
    };
    let start_row = range.start().map_or(0, |(row, _)| row);

    for row in start_row..=end_row {
        if let Some(value) = prime_text(range.get_value((row, COLUMN_B))) {
            found.push(value.to_owned());
        }
    }

    Ok(found)
}

/// Apply the cell gate: only text cells qualify, and only when their
/// content passes the digit and primality checks.
fn prime_text(cell: Option<&Data>) -> Option<&str> {
    match cell {
        Some(Data::String(value)) if numeric::is_prime_literal(value) => Some(value),
        _ => None,
    }
}
