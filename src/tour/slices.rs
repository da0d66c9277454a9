//! Slice walkthrough.

use std::io::Write;

use super::TourError;
use crate::slice;
use crate::slice::Slice;

/// Allocates, appends to, views, copies, and compares a [`Slice`], one line
/// per step, ending with a jagged two-level slice.
///
/// # Errors
///
/// Returns [`TourError::Io`] if writing fails, or [`TourError::Slice`] if a
/// slice operation is misused.
pub fn run<W: Write>(output: &mut W) -> Result<(), TourError> {
    let s: Slice<String> = Slice::nil();
    writeln!(output, "uninit: {s} {} {}", s.is_nil(), s.len() == 0)?;

    let s: Slice<String> = Slice::make(3, None)?;
    writeln!(output, "emp: {s} len: {} cap: {}", s.len(), s.cap())?;

    s.set(0, "a".to_string())?;
    s.set(1, "b".to_string())?;
    s.set(2, "c".to_string())?;
    writeln!(output, "set: {s}")?;
    writeln!(output, "get: {}", s.get(2)?)?;

    writeln!(output, "len: {}", s.len())?;

    // The returned view is the current one.
    let s = s.append(["d".to_string()]);
    let s = s.append(["e".to_string(), "f".to_string()]);
    writeln!(output, "apd: {s}")?;

    let c: Slice<String> = Slice::make(s.len(), None)?;
    Slice::copy(&c, &s);
    writeln!(output, "cpy: {c}")?;

    let l = s.subrange(2, 5)?;
    writeln!(output, "sl1: {l}")?;

    let l = s.slice(..5)?;
    writeln!(output, "sl2: {l}")?;

    let l = s.slice(2..)?;
    writeln!(output, "sl3: {l}")?;

    let t = slice!["g".to_string(), "h".to_string(), "i".to_string()];
    writeln!(output, "dcl: {t}")?;

    let t2 = slice!["g".to_string(), "h".to_string(), "i".to_string()];
    if Slice::equal(&t, &t2) {
        writeln!(output, "t == t2")?;
    }

    let two_d: Slice<Slice<usize>> = Slice::make(3, None)?;
    for i in 0..3 {
        let inner_length = i + 1;
        let row = Slice::make(inner_length, None)?;
        for j in 0..inner_length {
            row.set(j, i + j)?;
        }
        two_d.set(i, row)?;
    }
    writeln!(output, "2d:  {two_d}")?;

    Ok(())
}
