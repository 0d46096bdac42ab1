// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::visibility::VisibilityError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulateError {
    #[error("Got {antennas} antennas but {models} antenna models; there must be one model per antenna")]
    ModelCountMismatch { antennas: usize, models: usize },

    #[error(transparent)]
    Visibility(#[from] VisibilityError),
}
