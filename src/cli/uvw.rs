// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use log::debug;

use super::common::{read_config, TimeArgs, CONFIG_HELP};
use crate::{
    angle::Angle, antenna::get_uvw, baseline::encode_baseline, constants::VEL_C, TartGeometryError,
};

/// Print UVWs. Each line is tab-separated: the two (0-based) antenna indices,
/// the (1-based) encoded baseline identifier, then u, v and w.
#[derive(Parser, Debug)]
pub struct UvwArgs {
    #[clap(short, long, help = CONFIG_HELP.as_str(), help_heading = "ARRAY")]
    config: PathBuf,

    #[clap(flatten)]
    time: TimeArgs,

    /// The right ascension of the phase centre [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "PHASE CENTRE")]
    ra: Angle,

    /// The declination of the phase centre [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "PHASE CENTRE")]
    dec: Angle,

    /// Print u, v and w in light-seconds rather than metres.
    #[clap(long)]
    light_seconds: bool,
}

impl UvwArgs {
    pub(super) fn run(self) -> Result<(), TartGeometryError> {
        let config = read_config(&self.config)?;
        let epoch = self.time.time;
        debug!(
            "Hour angle of the phase centre: {}",
            config.location.hour_angle(epoch, self.ra)
        );
        let scale = if self.light_seconds { 1.0 / VEL_C } else { 1.0 };

        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for &(i, j) in config.baselines() {
            let a0 = config.antenna_positions()[i].into();
            let a1 = config.antenna_positions()[j].into();
            let uvw = get_uvw(&config.location, &a0, &a1, epoch, self.ra, self.dec) * scale;
            let id = encode_baseline(i + 1, j + 1)?;
            writeln!(
                &mut out,
                "{i}\t{j}\t{id}\t{:e}\t{:e}\t{:e}",
                uvw.u, uvw.v, uvw.w
            )?;
        }
        out.flush()?;

        Ok(())
    }
}
