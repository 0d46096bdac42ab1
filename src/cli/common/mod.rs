// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arguments shared between `tart-geometry` subcommands.

mod printers;

pub(super) use printers::InfoPrinter;

use std::path::{Path, PathBuf};

use clap::Parser;
use hifitime::Epoch;

use super::TartGeometryError;
use crate::{
    config::{ArrayConfig, CONFIG_FILE_TYPES_COMMA_SEPARATED},
    coord::Location,
    time::parse_utc,
};

lazy_static::lazy_static! {
    pub(super) static ref CONFIG_HELP: String =
        format!("The array configuration file. Supported formats: {}", *CONFIG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref OPTIONAL_CONFIG_HELP: String =
        format!("The array configuration file; only its location is used. Supported formats: {}. Default (Dunedin): {}",
                *CONFIG_FILE_TYPES_COMMA_SEPARATED, Location::dunedin());
}

/// The instant of an observation.
#[derive(Parser, Debug, Clone)]
pub(super) struct TimeArgs {
    /// The UTC time, e.g. "2019-08-12T03:24:51" or "2019-08-12 03:24:51".
    #[clap(short, long, parse(try_from_str = parse_utc), help_heading = "OBSERVATION")]
    pub(super) time: Epoch,
}

/// An optional array configuration, only needed for its location.
#[derive(Parser, Debug, Clone)]
pub(super) struct LocationArgs {
    #[clap(short, long, help = OPTIONAL_CONFIG_HELP.as_str(), help_heading = "ARRAY")]
    pub(super) config: Option<PathBuf>,
}

impl LocationArgs {
    pub(super) fn parse(&self) -> Result<Location, TartGeometryError> {
        let location = match &self.config {
            Some(c) => read_config(c)?.location,
            None => Location::dunedin(),
        };
        Ok(location)
    }
}

/// Read an array configuration and report it.
pub(super) fn read_config(file: &Path) -> Result<ArrayConfig, TartGeometryError> {
    let config = ArrayConfig::from_file(file)?;

    let mut printer = InfoPrinter::new("Array configuration".into());
    printer.push_line(format!("File: {}", file.display()).into());
    printer.push_block(vec![
        format!("Location: {}", config.location).into(),
        format!("{} antennas, {} baselines", config.num_antennas(), config.num_baselines()).into(),
    ]);
    printer.push_line(format!("Frequency: {} MHz", config.frequency_hz / 1e6).into());
    printer.display();

    Ok(config)
}
