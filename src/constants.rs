// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Speed of light in a vacuum \[metres / second\].
pub const VEL_C: f64 = 299_792_458.0;

/// GPS L1 carrier frequency \[Hz\]. TART observes this band.
pub const L1_FREQ_HZ: f64 = 1.57542e9;

/// The TART reference frequency \[Hz\]. The radio sampling rate is a multiple
/// of this.
pub const TART_REF_FREQ_HZ: f64 = 16.368e6;

/// Dunedin (TART array site) latitude \[degrees\].
pub const DUNEDIN_LAT_DEG: f64 = -45.851_825;

/// Dunedin (TART array site) longitude \[degrees\].
pub const DUNEDIN_LONG_DEG: f64 = 170.545_451;

/// Dunedin (TART array site) height above the WGS84 ellipsoid \[metres\].
pub const DUNEDIN_HEIGHT_M: f64 = 46.5;

/// WGS84 semi-major axis \[metres\].
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// Julian date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Offset between Julian dates and modified Julian dates \[days\].
pub const MJD_TO_JD: f64 = 2_400_000.5;

/// The largest antenna index that can be encoded into a baseline identifier.
pub const MAX_BASELINE_ANTENNA: usize = 2047;

/// Baseline identifiers above this value use the extended (2048 antenna)
/// encoding.
pub const BASELINE_EXTENDED_OFFSET: u32 = 65_536;
