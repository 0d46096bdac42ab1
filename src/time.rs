// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions around time.
//!
//! UT1 is taken to be UTC throughout; the difference (< 0.9 s) moves sources
//! by at most a few arcseconds, which is far below what the array can resolve.

use std::str::FromStr;

use hifitime::Epoch;
use thiserror::Error;

use crate::{
    angle::Angle,
    constants::{J2000_JD, MJD_TO_JD},
};

/// The Julian date of an [`Epoch`] in the UTC time scale.
pub fn julian_date(epoch: Epoch) -> f64 {
    epoch.to_mjd_utc_days() + MJD_TO_JD
}

/// Greenwich (mean) sidereal time at the supplied [`Epoch`], wrapped to [0,
/// 2π).
///
/// This is the IAU 1982 GMST polynomial in the form given by Meeus,
/// Astronomical Algorithms (2nd ed.), equation 12.4.
pub fn gst(epoch: Epoch) -> Angle {
    let d = julian_date(epoch) - J2000_JD;
    let t = d / 36525.0;
    let gmst_deg =
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    Angle::from_degrees(gmst_deg.rem_euclid(360.0)).wrap()
}

#[derive(Error, Debug)]
#[error("Could not parse '{input}' as a UTC time: {err}")]
pub struct TimeParseError {
    input: String,
    err: hifitime::Errors,
}

/// Parse a time string (e.g. "2021-03-04T05:06:07 UTC"). Strings without a
/// time scale are treated as UTC, and the date and time may be separated by a
/// space.
pub fn parse_utc(s: &str) -> Result<Epoch, TimeParseError> {
    let trimmed = match s.trim().split_once(' ') {
        Some((date, rest)) if date.len() == 10 && rest.starts_with(|c: char| c.is_ascii_digit()) => {
            format!("{date}T{rest}")
        }
        _ => s.trim().to_string(),
    };
    let has_scale = trimmed
        .rsplit_once(' ')
        .map(|(_, scale)| !scale.is_empty() && scale.chars().all(|c| c.is_ascii_uppercase()))
        .unwrap_or(false);
    let with_scale = if has_scale {
        trimmed
    } else {
        format!("{trimmed} UTC")
    };
    Epoch::from_str(&with_scale).map_err(|err| TimeParseError {
        input: s.to_string(),
        err,
    })
}
