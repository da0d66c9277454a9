//! Map walkthrough.

use std::io::Write;

use super::TourError;
use crate::map::Map;

/// Builds, mutates, queries, and compares a [`Map`], one line per step.
///
/// # Errors
///
/// Returns [`TourError::Io`] if writing fails.
pub fn run<W: Write>(output: &mut W) -> Result<(), TourError> {
    let mut m: Map<String, i32> = Map::new();
    m.set("k1".to_string(), 7);
    m.set("k2".to_string(), 13);
    writeln!(output, "map: {m}")?;

    let v1 = m.value_or_zero("k1");
    writeln!(output, "v1: {v1}")?;

    // Missing key: zero value.
    let v3 = m.value_or_zero("k3");
    writeln!(output, "v3: {v3}")?;

    writeln!(output, "len: {}", m.len())?;

    m.delete("k2");
    writeln!(output, "map: {m}")?;

    m.clear();
    writeln!(output, "map: {m}")?;

    let present = m.get("k2").is_present();
    writeln!(output, "prs: {present}")?;

    let n = Map::from([("foo".to_string(), 1), ("bar".to_string(), 2)]);
    writeln!(output, "map: {n}")?;

    let n2 = Map::from([("foo".to_string(), 1), ("bar".to_string(), 2)]);
    if Map::equal(&n, &n2) {
        writeln!(output, "n == n2")?;
    }

    Ok(())
}
