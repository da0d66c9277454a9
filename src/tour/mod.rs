//! Console walkthroughs of the crate's containers.
//!
//! Each section is a linear script: it performs one operation per step and
//! writes one line describing the result.
//!
//! - [`variables`]: declaration forms and zero values
//! - [`maps`]: building, querying, and comparing a [`Map`](crate::map::Map)
//! - [`slices`]: allocating, appending, viewing, and comparing a
//!   [`Slice`](crate::slice::Slice)
//!
//! # Examples
//!
//! ```rust
//! use slicemap::tour::{self, Section, TourConfig};
//!
//! let config = TourConfig {
//!     sections: vec![Section::Variables],
//!     section_headers: false,
//! };
//! let mut output = Vec::new();
//! tour::run(&config, &mut output).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "initial\n1 2\ntrue\n0\napple\n"
//! );
//! ```

mod config;
mod error;
pub mod maps;
pub mod slices;
pub mod variables;

pub use config::TourConfig;
pub use error::{ConfigError, TourError};

use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// One runnable tour section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Variable declarations.
    Variables,
    /// The map walkthrough.
    Maps,
    /// The slice walkthrough.
    Slices,
}

impl Section {
    /// Every section, in default order.
    pub const ALL: [Self; 3] = [Self::Variables, Self::Maps, Self::Slices];

    /// The name used in configuration and headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Variables => "variables",
            Self::Maps => "maps",
            Self::Slices => "slices",
        }
    }

    /// Runs this section, writing its lines to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError`] if writing fails or a slice operation is misused.
    pub fn run<W: Write>(self, output: &mut W) -> Result<(), TourError> {
        match self {
            Self::Variables => variables::run(output),
            Self::Maps => maps::run(output),
            Self::Slices => slices::run(output),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(name))
            .ok_or(())
    }
}

/// Runs every configured section in order.
///
/// # Errors
///
/// Stops at the first section that fails and returns its [`TourError`].
pub fn run<W: Write>(config: &TourConfig, output: &mut W) -> Result<(), TourError> {
    for &section in &config.sections {
        tracing::info!(%section, "running tour section");
        if config.section_headers {
            writeln!(output, "== {section} ==")?;
        }
        section.run(output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("variables", Ok(Section::Variables))]
    #[case("Maps", Ok(Section::Maps))]
    #[case("SLICES", Ok(Section::Slices))]
    #[case("arrays", Err(()))]
    fn test_section_from_str(#[case] name: &str, #[case] expected: Result<Section, ()>) {
        assert_eq!(name.parse::<Section>(), expected);
    }

    #[rstest]
    fn test_run_with_headers() {
        let config = TourConfig {
            sections: vec![Section::Variables, Section::Variables],
            section_headers: true,
        };
        let mut output = Vec::new();
        run(&config, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("== variables ==").count(), 2);
        assert!(text.starts_with("== variables ==\ninitial\n"));
    }
}
