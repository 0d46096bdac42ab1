// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Visibility samples, and re-phasing them to a new phase centre.

mod error;
#[cfg(test)]
mod tests;

pub use error::VisibilityError;

use std::sync::Arc;

use hifitime::Epoch;
use itertools::Itertools;
use log::{debug, trace};
use num_complex::Complex;
use rayon::prelude::*;

use crate::{
    angle::Angle,
    antenna::antenna_ws,
    config::ArrayConfig,
    constants::{TAU, VEL_C},
    coord::SkyLoc,
};

/// One complex value per configured baseline, all captured at the same
/// instant while phase-tracking (`phase_el`, `phase_az`).
///
/// The order of `vis` is the order of [`ArrayConfig::baselines`].
#[derive(Debug, Clone)]
pub struct Visibility {
    pub timestamp: Epoch,
    pub phase_el: Angle,
    pub phase_az: Angle,
    pub vis: Vec<Complex<f64>>,
    config: Arc<ArrayConfig>,
}

impl Visibility {
    pub fn new(
        config: Arc<ArrayConfig>,
        timestamp: Epoch,
        phase_el: Angle,
        phase_az: Angle,
        vis: Vec<Complex<f64>>,
    ) -> Result<Visibility, VisibilityError> {
        let v = Visibility {
            timestamp,
            phase_el,
            phase_az,
            vis,
            config,
        };
        v.check_config()?;
        Ok(v)
    }

    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The shared handle on the configuration, e.g. for building more samples.
    pub fn config_arc(&self) -> Arc<ArrayConfig> {
        Arc::clone(&self.config)
    }

    /// The (RA, Dec) being tracked at the time of this sample.
    pub fn phase_centre(&self) -> SkyLoc {
        SkyLoc::from_horizontal(
            &self.config.location,
            self.timestamp,
            self.phase_el,
            self.phase_az,
        )
    }

    fn check_config(&self) -> Result<(), VisibilityError> {
        let expected = self.config.num_baselines();
        if self.vis.len() != expected {
            return Err(VisibilityError::ConfigMismatch {
                expected,
                got: self.vis.len(),
            });
        }
        let num_antennas = self.config.num_antennas();
        if let Some(&(i, j)) = self
            .config
            .baselines()
            .iter()
            .find(|&&(i, j)| i.max(j) >= num_antennas)
        {
            return Err(VisibilityError::BaselineOutOfRange { i, j, num_antennas });
        }
        Ok(())
    }

    /// Re-phase every value of this sample as though `target` had been
    /// tracked instead, then point `phase_el`/`phase_az` at it. Amplitudes are
    /// unchanged. If the sample doesn't match its configuration, nothing is
    /// modified.
    ///
    /// Targets below the horizon are rotated like any other.
    pub fn rotate(&mut self, target: SkyLoc) -> Result<(), VisibilityError> {
        self.check_config()?;

        let from = self.phase_centre();
        if from == target {
            debug!("Visibility at {} is already phased to {target}", self.timestamp);
            return Ok(());
        }
        debug!(
            "Rotating visibility at {} from {from} to {target}",
            self.timestamp
        );

        let location = &self.config.location;
        let antennas = self.config.antenna_positions();
        let ws_from = antenna_ws(location, antennas, self.timestamp, from.ra, from.dec);
        let ws_to = antenna_ws(location, antennas, self.timestamp, target.ra, target.dec);

        // Δφ = 2π f/c (w_new - w_old), applied as exp(-iΔφ).
        let arg = -TAU * self.config.frequency_hz / VEL_C;
        self.vis
            .iter_mut()
            .zip_eq(self.config.baselines())
            .for_each(|(v, &(i, j))| {
                let w_diff = (ws_to[i] - ws_to[j]) - (ws_from[i] - ws_from[j]);
                *v *= Complex::cis(arg * w_diff);
            });
        trace!("Rotated {} baselines", self.vis.len());

        let (el, az) = target.to_horizontal(location, self.timestamp);
        self.phase_el = el;
        self.phase_az = az;
        Ok(())
    }

    /// A rotated copy of this sample; `self` is untouched.
    pub fn rotated(&self, target: SkyLoc) -> Result<Visibility, VisibilityError> {
        let mut v = self.clone();
        v.rotate(target)?;
        Ok(v)
    }
}

/// Rotate many samples to the same target in parallel. Each sample is rotated
/// completely or not at all; on error, other samples may already have been
/// rotated.
pub fn rotate_all(samples: &mut [Visibility], target: SkyLoc) -> Result<(), VisibilityError> {
    debug!("Rotating {} visibility samples to {target}", samples.len());
    samples.par_iter_mut().try_for_each(|v| v.rotate(target))
}
