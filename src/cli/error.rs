// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all tart-geometry-related errors. This should be the *only*
//! error enum that is publicly visible from the binary.

use thiserror::Error;

use crate::{baseline::BaselineError, config::ConfigError};

/// The *only* publicly visible error from the `tart-geometry` binary.
#[derive(Error, Debug)]
pub enum TartGeometryError {
    /// An error related to array configuration files.
    #[error("{0}\n\nArray configurations are toml or json files with the fields latitude_deg, longitude_deg, height_m, frequency_hz, bandwidth_hz, antenna_positions and (optionally) baselines.")]
    Config(String),

    /// An error related to baseline identifiers.
    #[error("{0}\n\nBaseline identifiers can represent antennas 0 to 2047.")]
    Baseline(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<ConfigError> for TartGeometryError {
    fn from(e: ConfigError) -> Self {
        let s = e.to_string();
        match e {
            ConfigError::UnknownFileType(_)
            | ConfigError::Decode(_, _)
            | ConfigError::NoAntennas
            | ConfigError::BadFrequency(_)
            | ConfigError::BadBandwidth(_)
            | ConfigError::BaselineOutOfRange { .. } => Self::Config(s),
            ConfigError::IO(_, _) => Self::Generic(s),
        }
    }
}

impl From<BaselineError> for TartGeometryError {
    fn from(e: BaselineError) -> Self {
        Self::Baseline(e.to_string())
    }
}

impl From<std::io::Error> for TartGeometryError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<log::SetLoggerError> for TartGeometryError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Generic(format!("Couldn't set up logging: {e}"))
    }
}
