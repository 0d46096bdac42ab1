// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Array configuration: the reference location, the antenna positions, the
//! observing frequency and the baseline order of visibility samples.

mod error;

pub use error::ConfigError;

use std::{fs::File, io::Read, path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    angle::Angle,
    antenna::Antenna,
    coord::{Location, XyzGeocentric, ENU},
};

lazy_static::lazy_static! {
    pub static ref CONFIG_FILE_TYPES_COMMA_SEPARATED: String = ConfigFileType::iter().join(", ");
}

#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// The on-disk representation of an [`ArrayConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArrayConfigFile {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub height_m: f64,
    pub frequency_hz: f64,
    #[serde(default)]
    pub bandwidth_hz: f64,
    /// `[e, n, u]` offsets \[metres\].
    pub antenna_positions: Vec<ENU>,
    /// 0-based antenna pairs. Every `i < j` pair if not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baselines: Option<Vec<(usize, usize)>>,
}

/// An interferometer. This owns the reference location and the antenna
/// table; everything downstream borrows from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayConfig {
    pub location: Location,
    antenna_positions: Vec<ENU>,
    /// Observing (centre) frequency \[Hz\]
    pub frequency_hz: f64,
    /// \[Hz\]
    pub bandwidth_hz: f64,
    /// The antenna pair of each element of a visibility sample.
    baselines: Vec<(usize, usize)>,
}

impl ArrayConfig {
    /// Create a new configuration. If `baselines` is `None`, every antenna
    /// pair `(i, j)` with `i < j` is used, ordered by `i` and then `j`.
    pub fn new(
        location: Location,
        antenna_positions: Vec<ENU>,
        frequency_hz: f64,
        bandwidth_hz: f64,
        baselines: Option<Vec<(usize, usize)>>,
    ) -> Result<ArrayConfig, ConfigError> {
        if antenna_positions.is_empty() {
            return Err(ConfigError::NoAntennas);
        }
        if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
            return Err(ConfigError::BadFrequency(frequency_hz));
        }
        if !bandwidth_hz.is_finite() || bandwidth_hz < 0.0 {
            return Err(ConfigError::BadBandwidth(bandwidth_hz));
        }

        let num_antennas = antenna_positions.len();
        let baselines = match baselines {
            Some(bls) => {
                for &(i, j) in &bls {
                    if i >= num_antennas || j >= num_antennas {
                        return Err(ConfigError::BaselineOutOfRange { i, j, num_antennas });
                    }
                }
                bls
            }
            None => (0..num_antennas)
                .tuple_combinations::<(usize, usize)>()
                .collect(),
        };

        Ok(ArrayConfig {
            location,
            antenna_positions,
            frequency_hz,
            bandwidth_hz,
            baselines,
        })
    }

    /// Read a configuration from a toml or json file. The type is determined
    /// by the file extension.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<ArrayConfig, ConfigError> {
        let file = file.as_ref();
        debug!("Attempting to parse array configuration {}", file.display());

        let file_type = file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ConfigFileType::from_str(&e).ok())
            .ok_or_else(|| ConfigError::UnknownFileType(file.to_path_buf()))?;

        let mut contents = String::new();
        let io_err = |err| ConfigError::IO(file.to_path_buf(), err);
        File::open(file)
            .and_then(|mut fh| fh.read_to_string(&mut contents))
            .map_err(io_err)?;

        let raw = ArrayConfigFile::from_str_with_type(&contents, file_type)
            .map_err(|err| ConfigError::Decode(file.to_path_buf(), err))?;
        ArrayConfig::try_from(raw)
    }

    pub fn num_antennas(&self) -> usize {
        self.antenna_positions.len()
    }

    /// `[e, n, u]` offsets from [`ArrayConfig::location`] \[metres\].
    pub fn antenna_positions(&self) -> &[ENU] {
        &self.antenna_positions
    }

    pub fn num_baselines(&self) -> usize {
        self.baselines.len()
    }

    pub fn baselines(&self) -> &[(usize, usize)] {
        &self.baselines
    }

    pub fn antenna(&self, i: usize) -> Option<Antenna> {
        self.antenna_positions.get(i).copied().map(Antenna::new)
    }

    /// ECEF coordinates of the array reference point.
    pub fn ecef(&self) -> XyzGeocentric {
        self.location.ecef()
    }

    /// The on-disk representation of this configuration.
    pub fn to_file_repr(&self) -> ArrayConfigFile {
        ArrayConfigFile {
            latitude_deg: self.location.latitude.to_degrees(),
            longitude_deg: self.location.longitude.to_degrees(),
            height_m: self.location.height_metres,
            frequency_hz: self.frequency_hz,
            bandwidth_hz: self.bandwidth_hz,
            antenna_positions: self.antenna_positions.clone(),
            baselines: Some(self.baselines.clone()),
        }
    }
}

impl TryFrom<ArrayConfigFile> for ArrayConfig {
    type Error = ConfigError;

    fn try_from(raw: ArrayConfigFile) -> Result<ArrayConfig, ConfigError> {
        let location = Location::new(
            Angle::from_degrees(raw.latitude_deg),
            Angle::from_degrees(raw.longitude_deg),
            raw.height_m,
        );
        ArrayConfig::new(
            location,
            raw.antenna_positions,
            raw.frequency_hz,
            raw.bandwidth_hz,
            raw.baselines,
        )
    }
}

impl ArrayConfigFile {
    fn from_str_with_type(s: &str, file_type: ConfigFileType) -> Result<ArrayConfigFile, String> {
        match file_type {
            ConfigFileType::Toml => {
                debug!("Parsing toml file...");
                toml::from_str(s).map_err(|e| e.to_string())
            }
            ConfigFileType::Json => {
                debug!("Parsing json file...");
                serde_json::from_str(s).map_err(|e| e.to_string())
            }
        }
    }
}
