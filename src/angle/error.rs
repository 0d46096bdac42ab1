// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors from parsing an angle literal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AngleParseError {
    #[error("Cannot parse an empty string as an angle")]
    Empty,

    #[error("The angle '{0}' is not a finite number")]
    NonFinite(String),

    #[error("The angle '{0}' has a sign somewhere other than at its start")]
    MisplacedSign(String),

    #[error("Could not parse the component '{component}' of the angle '{input}'")]
    BadComponent { input: String, component: String },

    #[error("The angle '{0}' has more than three (degrees, minutes, seconds) components")]
    TooManyComponents(String),

    #[error("Only the last component of the angle '{0}' may be fractional")]
    FractionalComponent(String),

    #[error("The {unit} of the angle '{input}' must be in [0, 60), but got {value}")]
    ComponentOutOfRange {
        input: String,
        unit: &'static str,
        value: f64,
    },
}
