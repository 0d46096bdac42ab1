// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisibilityError {
    #[error("The array configuration has {expected} baselines, but the visibility sample has {got} values")]
    ConfigMismatch { expected: usize, got: usize },

    #[error("Baseline ({i}, {j}) refers to an antenna outside the array's {num_antennas} antennas")]
    BaselineOutOfRange {
        i: usize,
        j: usize,
        num_antennas: usize,
    },
}
