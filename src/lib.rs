// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Geometry and visibility rotation for the TART radio telescope.

Angles, sidereal time and the horizontal <-> equatorial transforms for an
array location; geometric delays and UVWs of antenna pairs; re-phasing
visibility samples to a new phase centre; and the baseline identifiers used by
interchange formats.
 */

pub mod angle;
pub mod antenna;
pub mod baseline;
mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod records;
pub mod simulate;
pub mod time;
pub mod visibility;

// Re-exports.
pub use angle::{Angle, AngleParseError};
pub use antenna::{geo_delay_horizontal, get_uvw, Antenna};
pub use baseline::{decode_baseline, encode_baseline, BaselineError};
pub use cli::{TartGeometry, TartGeometryError};
pub use config::{ArrayConfig, ConfigError};
pub use coord::{Location, SkyLoc, ENU, UVW};
pub use visibility::{rotate_all, Visibility, VisibilityError};
