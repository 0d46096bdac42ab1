// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A typed angle.
//!
//! Angles are always held in radians; the degree and hour accessors convert on
//! read. Nothing here wraps implicitly, so angles outside [0, 360) or an
//! elevation below the horizon are carried through untouched.

mod error;

pub use error::AngleParseError;

use std::{
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use crate::constants::TAU;

/// An angle. Internally this is in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { rad: 0.0 };

    pub fn from_radians(rad: f64) -> Angle {
        Angle { rad }
    }

    pub fn from_degrees(deg: f64) -> Angle {
        Angle {
            rad: deg.to_radians(),
        }
    }

    /// Make an angle from hours (e.g. a right ascension or an hour angle).
    /// There are 24 hours in a full circle.
    pub fn from_hours(hours: f64) -> Angle {
        Angle::from_degrees(hours * 15.0)
    }

    /// Make an angle from degrees, arcminutes and arcseconds. The sign of the
    /// angle is taken from `deg`, so `-0.0` degrees gives a negative angle;
    /// `min` and `sec` are magnitudes.
    pub fn from_dms_parts(deg: f64, min: f64, sec: f64) -> Angle {
        let magnitude = deg.abs() + min.abs() / 60.0 + sec.abs() / 3600.0;
        if deg.is_sign_negative() {
            Angle::from_degrees(-magnitude)
        } else {
            Angle::from_degrees(magnitude)
        }
    }

    /// Parse an angle literal in degrees. Accepted forms are a plain number
    /// ("-45.85"), colon-separated sexagesimal ("-45:51:06.6") and unit-marked
    /// sexagesimal ("-45d51m06.6s", "45°51'06.6\""). A sign is only allowed
    /// at the very start.
    pub fn from_dms(s: &str) -> Result<Angle, AngleParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AngleParseError::Empty);
        }

        // Try to parse a naked number.
        if let Ok(deg) = trimmed.parse::<f64>() {
            if !deg.is_finite() {
                return Err(AngleParseError::NonFinite(s.to_string()));
            }
            return Ok(Angle::from_degrees(deg));
        }

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(b) => (true, b),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if body.contains(['-', '+']) {
            return Err(AngleParseError::MisplacedSign(s.to_string()));
        }

        let components: Vec<&str> = body
            .split(|c: char| {
                matches!(
                    c,
                    ':' | 'd' | 'D' | '°' | 'm' | 'M' | '\'' | 's' | 'S' | '"'
                ) || c.is_whitespace()
            })
            .filter(|c| !c.is_empty())
            .collect();
        if components.is_empty() {
            return Err(AngleParseError::Empty);
        }
        if components.len() > 3 {
            return Err(AngleParseError::TooManyComponents(s.to_string()));
        }

        let mut values = [0.0_f64; 3];
        for (value, component) in values.iter_mut().zip(components.iter()) {
            *value = component
                .parse()
                .map_err(|_| AngleParseError::BadComponent {
                    input: s.to_string(),
                    component: component.to_string(),
                })?;
            if !value.is_finite() {
                return Err(AngleParseError::NonFinite(s.to_string()));
            }
        }

        let num_components = components.len();
        if values[..num_components - 1].iter().any(|v| v.fract() != 0.0) {
            return Err(AngleParseError::FractionalComponent(s.to_string()));
        }
        for (value, unit) in values[1..num_components]
            .iter()
            .zip(["arcminutes", "arcseconds"])
        {
            if !(0.0..60.0).contains(value) {
                return Err(AngleParseError::ComponentOutOfRange {
                    input: s.to_string(),
                    unit,
                    value: *value,
                });
            }
        }

        let [deg, min, sec] = values;
        Ok(Angle::from_dms_parts(
            if negative { -deg } else { deg },
            min,
            sec,
        ))
    }

    pub fn to_radians(self) -> f64 {
        self.rad
    }

    pub fn to_degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    pub fn to_hours(self) -> f64 {
        self.to_degrees() / 15.0
    }

    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Get the equivalent angle in [0, 2π).
    pub fn wrap(self) -> Angle {
        let rad = self.rad.rem_euclid(TAU);
        // rem_euclid can return exactly TAU for tiny negative inputs.
        Angle {
            rad: if rad >= TAU { 0.0 } else { rad },
        }
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle {
            rad: self.rad + rhs.rad,
        }
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle {
            rad: self.rad - rhs.rad,
        }
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle { rad: -self.rad }
    }
}

impl FromStr for Angle {
    type Err = AngleParseError;

    fn from_str(s: &str) -> Result<Angle, AngleParseError> {
        Angle::from_dms(s)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.4}°", self.to_degrees())
    }
}

#[cfg(test)]
use approx::AbsDiffEq;

#[cfg(test)]
impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.rad, &other.rad, epsilon)
    }
}
