//! Tour configuration.
//!
//! Configuration is read once at startup from environment variables, after
//! loading a `.env` file if one is present.
//!
//! | Variable                   | Default                  |
//! |----------------------------|--------------------------|
//! | `SLICEMAP_SECTIONS`        | `variables,maps,slices`  |
//! | `SLICEMAP_SECTION_HEADERS` | `false`                  |

use std::env;

use super::Section;
use super::error::ConfigError;

const SECTIONS_KEY: &str = "SLICEMAP_SECTIONS";
const SECTION_HEADERS_KEY: &str = "SLICEMAP_SECTION_HEADERS";

/// Which sections run, and how they are framed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    /// Sections to run, in order.
    pub sections: Vec<Section>,
    /// Print a `== name ==` header before each section.
    pub section_headers: bool,
}

impl TourConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Same as [`TourConfig::from_env`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::tour::{Section, TourConfig};
    ///
    /// let config = TourConfig::from_lookup(|key| {
    ///     (key == "SLICEMAP_SECTIONS").then(|| "slices, maps".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.sections, vec![Section::Slices, Section::Maps]);
    /// assert!(!config.section_headers);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sections = match lookup(SECTIONS_KEY) {
            Some(value) => parse_sections(&value)?,
            None => Section::ALL.to_vec(),
        };
        let section_headers = match lookup(SECTION_HEADERS_KEY) {
            Some(value) => parse_flag(SECTION_HEADERS_KEY, &value)?,
            None => false,
        };
        Ok(Self {
            sections,
            section_headers,
        })
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            section_headers: false,
        }
    }
}

fn parse_sections(value: &str) -> Result<Vec<Section>, ConfigError> {
    let sections = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<Section>().map_err(|()| ConfigError::InvalidValue {
                key: SECTIONS_KEY.to_string(),
                message: format!("unknown section '{name}'"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if sections.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: SECTIONS_KEY.to_string(),
            message: "no sections listed".to_string(),
        });
    }
    Ok(sections)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true or false, got '{other}'"),
        }),
    }
}
