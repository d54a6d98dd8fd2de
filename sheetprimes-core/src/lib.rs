//! Scan the first worksheet of a spreadsheet for primes in column B.
//!
//! Only text-typed cells are considered: a cell qualifies when its content
//! is a pure digit string naming a prime number, and qualifying values are
//! reported with their original spelling (`"013"` stays `"013"`).

pub mod error;
pub mod numeric;
pub mod reader;
pub mod scan;

pub use error::ScanError;
pub use scan::{COLUMN_B, find_primes};
