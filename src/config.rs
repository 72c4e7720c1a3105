//! Layered loading of [`DisplayOptions`].
//!
//! Sources are merged in order: the built-in defaults for the dimension, an
//! optional TOML file, then environment variables prefixed with `STATICA_`.
//! Nested keys use a double underscore, e.g. `STATICA_MANUAL_RANGES__X__MIN`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use log::debug;
use thiserror::Error;

use crate::entry::Dimension;
use crate::presentation::DisplayOptions;

/// Prefix of environment variables that override display options.
pub const ENV_PREFIX: &str = "STATICA_";

/// Failure to assemble display options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file is missing.
    #[error("configuration file {} does not exist", .0.display())]
    MissingFile(PathBuf),
    /// A source held a value of the wrong type or an unknown shape.
    #[error("invalid display options: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// The figment used by [`load`], exposed for callers that add providers.
#[must_use]
pub fn figment(path: Option<&Path>, dimension: Dimension) -> Figment {
    let mut layered = Figment::from(Serialized::defaults(DisplayOptions::for_dimension(
        dimension,
    )));
    if let Some(file) = path {
        layered = layered.merge(Toml::file(file));
    }
    layered.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load display options for `dimension`.
///
/// # Errors
/// Returns [`ConfigError::MissingFile`] when `path` is given but absent and
/// [`ConfigError::Invalid`] when any source fails to deserialize.
pub fn load(path: Option<&Path>, dimension: Dimension) -> Result<DisplayOptions, ConfigError> {
    if let Some(file) = path {
        if !file.exists() {
            return Err(ConfigError::MissingFile(file.to_path_buf()));
        }
        debug!("loading display options from {}", file.display());
    }
    figment(path, dimension)
        .extract()
        .map_err(|err| ConfigError::Invalid(Box::new(err)))
}
