//! Variable declaration forms.

use std::io::Write;

use super::TourError;
use crate::zero::zero_value;

/// Declares variables in several forms and prints each.
///
/// # Errors
///
/// Returns [`TourError::Io`] if writing fails.
pub fn run<W: Write>(output: &mut W) -> Result<(), TourError> {
    let a = "initial";
    writeln!(output, "{a}")?;

    let (b, c): (i32, i32) = (1, 2);
    writeln!(output, "{b} {c}")?;

    let d = true;
    writeln!(output, "{d}")?;

    // No initialiser: the zero value stands in.
    let e: i32 = zero_value();
    writeln!(output, "{e}")?;

    let f: &str = "apple";
    writeln!(output, "{f}")?;

    Ok(())
}
