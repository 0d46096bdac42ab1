// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Simulated antenna signals and point-source visibilities.
//!
//! Nothing here models noise or the receiver chain; these are the geometric
//! parts only, useful for exercising the delay and rotation code.

mod error;

pub use error::SimulateError;

use std::sync::Arc;

use hifitime::Epoch;
use itertools::Itertools;
use log::debug;
use ndarray::prelude::*;
use num_complex::Complex;

use crate::{
    angle::Angle,
    antenna::{antenna_ws, Antenna},
    config::ArrayConfig,
    constants::{TAU, VEL_C},
    coord::Location,
    visibility::Visibility,
};

/// A point source fixed in horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSource {
    pub amplitude: f64,
    pub elevation: Angle,
    pub azimuth: Angle,
}

impl SimulationSource {
    pub fn new(amplitude: f64, elevation: Angle, azimuth: Angle) -> SimulationSource {
        SimulationSource {
            amplitude,
            elevation,
            azimuth,
        }
    }
}

/// The (voltage) gain pattern of an antenna.
pub trait AntennaModel: Sync {
    fn gain(&self, elevation: Angle, azimuth: Angle) -> f64;
}

/// Unit gain in every direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsotropicAntenna;

impl AntennaModel for IsotropicAntenna {
    fn gain(&self, _elevation: Angle, _azimuth: Angle) -> f64 {
        1.0
    }
}

/// The real-valued signal received by each antenna at each time in `timebase`
/// \[seconds\]. The returned array has shape `(antennas.len(),
/// timebase.len())`.
///
/// Each antenna receives, from each source, `amplitude * gain * cos(2π f (t -
/// delay))` where `delay` is the antenna's geometric delay toward the source.
pub fn antennas_signal(
    location: &Location,
    antennas: &[Antenna],
    models: &[&dyn AntennaModel],
    sources: &[SimulationSource],
    timebase: &[f64],
    carrier_hz: f64,
) -> Result<Array2<f64>, SimulateError> {
    if antennas.len() != models.len() {
        return Err(SimulateError::ModelCountMismatch {
            antennas: antennas.len(),
            models: models.len(),
        });
    }
    debug!(
        "Simulating {} antennas at {location}, {} sources over {} samples",
        antennas.len(),
        sources.len(),
        timebase.len()
    );

    let mut signal = Array2::<f64>::zeros((antennas.len(), timebase.len()));
    signal
        .outer_iter_mut()
        .zip_eq(antennas.iter().zip_eq(models.iter()))
        .for_each(|(mut signal, (antenna, model))| {
            for source in sources {
                let delay = antenna.geo_delay_horizontal(source.elevation, source.azimuth);
                let amp = source.amplitude * model.gain(source.elevation, source.azimuth);
                signal
                    .iter_mut()
                    .zip_eq(timebase.iter())
                    .for_each(|(s, &t)| *s += amp * (TAU * carrier_hz * (t - delay)).cos());
            }
        });
    Ok(signal)
}

/// The visibility sample that `config`'s array would measure from `sources`
/// at `epoch`, phase-tracking (`phase_el`, `phase_az`).
///
/// Rotating the result onto the direction of a lone source gives the source's
/// amplitude with zero phase on every baseline.
pub fn simulate_visibility(
    config: Arc<ArrayConfig>,
    epoch: Epoch,
    phase_el: Angle,
    phase_az: Angle,
    sources: &[SimulationSource],
) -> Result<Visibility, SimulateError> {
    let location = &config.location;
    let antennas = config.antenna_positions();
    let (phase_ra, phase_dec) = location.horizontal_to_equatorial(epoch, phase_el, phase_az);
    let ws_phase = antenna_ws(location, antennas, epoch, phase_ra, phase_dec);
    let arg = TAU * config.frequency_hz / VEL_C;

    let mut vis = vec![Complex::new(0.0, 0.0); config.num_baselines()];
    for source in sources {
        let (ra, dec) = location.horizontal_to_equatorial(epoch, source.elevation, source.azimuth);
        let ws_source = antenna_ws(location, antennas, epoch, ra, dec);
        vis.iter_mut()
            .zip_eq(config.baselines())
            .for_each(|(v, &(i, j))| {
                let w_diff = (ws_source[i] - ws_source[j]) - (ws_phase[i] - ws_phase[j]);
                *v += Complex::from_polar(source.amplitude, arg * w_diff);
            });
    }

    Ok(Visibility::new(config, epoch, phase_el, phase_az, vis)?)
}
