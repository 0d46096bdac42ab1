// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;

use super::common::{read_config, CONFIG_HELP};
use crate::{angle::Angle, antenna::Antenna, TartGeometryError};

/// Print the geometric delay [seconds] of each antenna, one per line, prefixed
/// by the antenna index.
#[derive(Parser, Debug)]
pub struct DelayArgs {
    #[clap(short, long, help = CONFIG_HELP.as_str(), help_heading = "ARRAY")]
    config: PathBuf,

    /// Elevation above the horizon [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "DIRECTION")]
    el: Angle,

    /// Azimuth, from North toward East [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "DIRECTION")]
    az: Angle,
}

impl DelayArgs {
    pub(super) fn run(self) -> Result<(), TartGeometryError> {
        let config = read_config(&self.config)?;

        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for (i, &enu) in config.antenna_positions().iter().enumerate() {
            let delay = Antenna::new(enu).geo_delay_horizontal(self.el, self.az);
            writeln!(&mut out, "{i}\t{delay:e}")?;
        }
        out.flush()?;

        Ok(())
    }
}
