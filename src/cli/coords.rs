// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between horizontal and equatorial coordinates.

use clap::Parser;

use super::common::{LocationArgs, TimeArgs};
use crate::{angle::Angle, TartGeometryError};

/// Print the right ascension and declination [degrees], tab-separated, of a
/// horizontal direction.
#[derive(Parser, Debug)]
pub struct RadecArgs {
    #[clap(flatten)]
    location: LocationArgs,

    #[clap(flatten)]
    time: TimeArgs,

    /// Elevation above the horizon [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "DIRECTION")]
    el: Angle,

    /// Azimuth, from North toward East [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "DIRECTION")]
    az: Angle,
}

impl RadecArgs {
    pub(super) fn run(self) -> Result<(), TartGeometryError> {
        let location = self.location.parse()?;
        let (ra, dec) = location.horizontal_to_equatorial(self.time.time, self.el, self.az);
        println!("{:.9}\t{:.9}", ra.to_degrees(), dec.to_degrees());
        Ok(())
    }
}

/// Print the elevation and azimuth [degrees], tab-separated, of an (RA, Dec).
#[derive(Parser, Debug)]
pub struct AzelArgs {
    #[clap(flatten)]
    location: LocationArgs,

    #[clap(flatten)]
    time: TimeArgs,

    /// Right ascension [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "DIRECTION")]
    ra: Angle,

    /// Declination [degrees, or d:m:s].
    #[clap(long, allow_hyphen_values = true, help_heading = "DIRECTION")]
    dec: Angle,
}

impl AzelArgs {
    pub(super) fn run(self) -> Result<(), TartGeometryError> {
        let location = self.location.parse()?;
        let (el, az) = location.equatorial_to_horizontal(self.time.time, self.ra, self.dec);
        println!("{:.9}\t{:.9}", el.to_degrees(), az.to_degrees());
        Ok(())
    }
}
