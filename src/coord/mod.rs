// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinate types and the transforms between them.

mod enu;
mod location;
mod skyloc;
mod uvw;
mod xyz;

pub use enu::ENU;
pub use location::Location;
pub use skyloc::SkyLoc;
pub use uvw::UVW;
pub use xyz::{XyzGeocentric, XyzLocal};
