// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with array configurations.

use std::path::PathBuf;

use thiserror::Error;

use super::CONFIG_FILE_TYPES_COMMA_SEPARATED;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Array configuration '{}' doesn't have a recognised file extension! Valid extensions are: {}", .0.display(), *CONFIG_FILE_TYPES_COMMA_SEPARATED)]
    UnknownFileType(PathBuf),

    #[error("Couldn't decode array configuration '{}':\n{1}", .0.display())]
    Decode(PathBuf, String),

    #[error("The array configuration has no antennas")]
    NoAntennas,

    #[error("The observing frequency must be positive and finite; got {0} Hz")]
    BadFrequency(f64),

    #[error("The bandwidth must be non-negative and finite; got {0} Hz")]
    BadBandwidth(f64),

    #[error("Baseline ({i}, {j}) refers to an antenna that doesn't exist; there are only {num_antennas} antennas")]
    BaselineOutOfRange {
        i: usize,
        j: usize,
        num_antennas: usize,
    },

    #[error("Couldn't read '{}': {1}", .0.display())]
    IO(PathBuf, #[source] std::io::Error),
}
