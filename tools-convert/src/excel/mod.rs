//! Spreadsheet input
//!
//! Only the first sheet of a workbook is read. Its first row holds the column
//! labels; every following row of the used range is a data row, blank ones
//! included.

mod cell;
mod reader;

pub use cell::cell_to_string;
pub use reader::{Sheet, read_first_sheet};
