// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-baseline geometry as needed by interchange-file writers (e.g. the
//! random-group parameters of uvfits).

use hifitime::Epoch;

use crate::{
    antenna::{get_uvw, Antenna},
    baseline::{encode_baseline, BaselineError},
    constants::VEL_C,
    time::julian_date,
    visibility::Visibility,
};

/// The geometry of one baseline of a visibility sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineRecord {
    /// \[seconds\]
    pub uu: f64,
    /// \[seconds\]
    pub vv: f64,
    /// \[seconds\]
    pub ww: f64,
    /// The encoded (1-based) antenna pair.
    pub baseline: u32,
    /// Fraction of a day since [`reference_julian_day`].
    pub date: f64,
}

/// The Julian day that record dates are relative to; `floor(JD + 0.5)`.
pub fn reference_julian_day(epoch: Epoch) -> f64 {
    (julian_date(epoch) + 0.5).floor()
}

/// One record per baseline of `sample`, in the configured baseline order. UVWs
/// are toward the sample's current phase centre.
pub fn baseline_records(sample: &Visibility) -> Result<Vec<BaselineRecord>, BaselineError> {
    let config = sample.config();
    let phase_centre = sample.phase_centre();
    let date = julian_date(sample.timestamp) - reference_julian_day(sample.timestamp);

    config
        .baselines()
        .iter()
        .map(|&(i, j)| {
            let a0 = Antenna::new(config.antenna_positions()[i]);
            let a1 = Antenna::new(config.antenna_positions()[j]);
            let uvw = get_uvw(
                &config.location,
                &a0,
                &a1,
                sample.timestamp,
                phase_centre.ra,
                phase_centre.dec,
            ) / VEL_C;
            Ok(BaselineRecord {
                uu: uvw.u,
                vv: uvw.v,
                ww: uvw.w,
                baseline: encode_baseline(i + 1, j + 1)?,
                date,
            })
        })
        .collect()
}
