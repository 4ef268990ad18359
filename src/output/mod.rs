//! Flat text output: one row per step, a time stamp followed by one column
//! per value, every field printed with six decimals and a trailing space.

mod series;
mod table;
mod trajectory;

use std::fmt::Write;

pub use series::Series;
pub use table::Table;
pub use trajectory::TrajectoryWriter;

/// Format one output row, including the terminating newline
///
/// ```rust
/// use almd::output::format_row;
///
/// assert_eq!(format_row(0.5, [1.0, -2.25]), "0.500000 1.000000 -2.250000 \n");
/// ```
pub fn format_row(time: f64, values: impl IntoIterator<Item = f64>) -> String {
    let mut row = String::new();
    // Writing into a String cannot fail
    let _ = write!(row, "{:.6} ", time);
    for value in values {
        let _ = write!(row, "{:.6} ", value);
    }
    row.push('\n');
    row
}
