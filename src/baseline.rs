// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Baseline identifiers.
//!
//! Two antenna indices are packed into one integer. Pairs where both indices
//! fit in a byte use the legacy `256 * a1 + a2` form; larger pairs use `2048 *
//! a1 + a2 + 65536`, which is how up to 2048 antennas are represented.

use thiserror::Error;

use crate::constants::{BASELINE_EXTENDED_OFFSET, MAX_BASELINE_ANTENNA};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaselineError {
    #[error("Antenna index {0} cannot be encoded in a baseline identifier (max {max})", max = MAX_BASELINE_ANTENNA)]
    AntennaOutOfRange(usize),

    #[error("{0} is not a valid baseline identifier")]
    InvalidIdentifier(u32),
}

/// Encode an antenna pair as a baseline identifier. The pair is canonicalised
/// so that the smaller index comes first; `encode_baseline(a, b)` and
/// `encode_baseline(b, a)` are the same.
pub fn encode_baseline(a1: usize, a2: usize) -> Result<u32, BaselineError> {
    for a in [a1, a2] {
        if a > MAX_BASELINE_ANTENNA {
            return Err(BaselineError::AntennaOutOfRange(a));
        }
    }
    let (a1, a2) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
    // Both are at most 2047, so the casts and arithmetic cannot overflow.
    let (a1, a2) = (a1 as u32, a2 as u32);
    if a2 > 255 {
        Ok(a1 * 2048 + a2 + BASELINE_EXTENDED_OFFSET)
    } else {
        Ok(a1 * 256 + a2)
    }
}

/// Decode a baseline identifier into its (smaller, larger) antenna indices.
/// Identifiers that [`encode_baseline`] can never produce are rejected.
pub fn decode_baseline(id: u32) -> Result<(usize, usize), BaselineError> {
    let (a1, a2) = if id > BASELINE_EXTENDED_OFFSET {
        let packed = id - BASELINE_EXTENDED_OFFSET;
        let a2 = packed % 2048;
        let a1 = (packed - a2) / 2048;
        if a2 <= 255 {
            return Err(BaselineError::InvalidIdentifier(id));
        }
        (a1 as usize, a2 as usize)
    } else {
        let a2 = id % 256;
        (((id - a2) / 256) as usize, a2 as usize)
    };

    if a1 > a2 || a1 > MAX_BASELINE_ANTENNA {
        return Err(BaselineError::InvalidIdentifier(id));
    }
    Ok((a1, a2))
}
