// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::*;
use crate::{
    constants::L1_FREQ_HZ,
    coord::{Location, ENU},
};

fn config() -> Arc<ArrayConfig> {
    Arc::new(
        ArrayConfig::new(
            Location::dunedin(),
            vec![
                ENU::new(0.0, 0.0, 0.0),
                ENU::new(0.0, 1.0, 0.0),
                ENU::new(1.3, -0.2, 0.0),
                ENU::new(-0.7, 2.1, 0.05),
            ],
            L1_FREQ_HZ,
            2.5e6,
            None,
        )
        .unwrap(),
    )
}

fn sample() -> Visibility {
    let config = config();
    let vis = (0..config.num_baselines())
        .map(|k| Complex::from_polar(1.0 + 0.1 * k as f64, 0.3 * k as f64 - 0.5))
        .collect();
    Visibility::new(
        config,
        Epoch::from_gregorian_utc_hms(2019, 8, 12, 3, 24, 51),
        Angle::from_degrees(90.0),
        Angle::ZERO,
        vis,
    )
    .unwrap()
}

#[test]
fn test_new_checks_baseline_count() {
    let result = Visibility::new(
        config(),
        Epoch::from_gregorian_utc_at_midnight(2020, 1, 1),
        Angle::from_degrees(90.0),
        Angle::ZERO,
        vec![Complex::new(1.0, 0.0); 5],
    );
    assert_eq!(
        result.unwrap_err(),
        VisibilityError::ConfigMismatch {
            expected: 6,
            got: 5
        }
    );
}

#[test]
fn test_identity_rotation() {
    let mut v = sample();
    let before = v.clone();
    let target = SkyLoc::from_horizontal(
        &v.config().location,
        v.timestamp,
        v.phase_el,
        v.phase_az,
    );
    v.rotate(target).unwrap();
    assert_eq!(v.phase_el, before.phase_el);
    for (after, before) in v.vis.iter().zip(before.vis.iter()) {
        assert_abs_diff_eq!(after.re, before.re, epsilon = 1e-9);
        assert_abs_diff_eq!(after.im, before.im, epsilon = 1e-9);
    }
}

#[test]
fn test_identity_rotation_off_zenith() {
    let mut v = sample();
    v.phase_el = Angle::from_degrees(35.0);
    v.phase_az = Angle::from_degrees(122.0);
    let before = v.clone();
    v.rotate(v.phase_centre()).unwrap();
    assert_eq!(v.phase_el, before.phase_el);
    assert_eq!(v.phase_az, before.phase_az);
    assert_eq!(v.vis, before.vis);
}

#[test]
fn test_rotation_preserves_amplitude() {
    let v = sample();
    for (el, az) in [(80.0, 10.0), (45.0, 200.0), (5.0, 300.0), (-20.0, 90.0)] {
        let target = SkyLoc::from_horizontal(
            &v.config().location,
            v.timestamp,
            Angle::from_degrees(el),
            Angle::from_degrees(az),
        );
        let rotated = v.rotated(target).unwrap();
        for (after, before) in rotated.vis.iter().zip(v.vis.iter()) {
            assert_relative_eq!(after.norm(), before.norm(), max_relative = 1e-12);
        }
        assert_abs_diff_eq!(rotated.phase_el.to_degrees(), el, epsilon = 1e-8);
        assert_abs_diff_eq!(rotated.phase_az.to_degrees(), az, epsilon = 1e-8);
    }
}

#[test]
fn test_round_trip_rotation() {
    let original = sample();
    let origin = original.phase_centre();
    let mut v = original.clone();

    v.rotate(SkyLoc::from_horizontal(
        &original.config().location,
        original.timestamp,
        Angle::from_degrees(50.0),
        Angle::from_degrees(135.0),
    ))
    .unwrap();
    // The phases have actually moved.
    assert!(v
        .vis
        .iter()
        .zip(original.vis.iter())
        .any(|(a, b)| (a.arg() - b.arg()).abs() > 1e-3));

    v.rotate(origin).unwrap();
    for (after, before) in v.vis.iter().zip(original.vis.iter()) {
        assert_abs_diff_eq!(after.norm(), before.norm(), epsilon = 1e-2);
        assert_relative_eq!(after.arg(), before.arg(), max_relative = 1e-2);
        assert_abs_diff_eq!(after.re, before.re, epsilon = 1e-9);
        assert_abs_diff_eq!(after.im, before.im, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(v.phase_el.to_degrees(), 90.0, epsilon = 1e-8);
}

#[test]
fn test_small_ra_offset_phase() {
    // Nudge the phase centre by 0.05° in RA and check the phase of one
    // baseline against a direct calculation.
    let v = sample();
    let from = v.phase_centre();
    let to = SkyLoc::new(from.ra + Angle::from_degrees(0.05), from.dec);
    let rotated = v.rotated(to).unwrap();

    let config = v.config();
    let (i, j) = config.baselines()[2];
    let a0 = config.antenna(i).unwrap();
    let a1 = config.antenna(j).unwrap();
    let w_from =
        crate::antenna::get_uvw(&config.location, &a0, &a1, v.timestamp, from.ra, from.dec).w;
    let w_to = crate::antenna::get_uvw(&config.location, &a0, &a1, v.timestamp, to.ra, to.dec).w;
    let expected = v.vis[2] * Complex::cis(-TAU * config.frequency_hz / VEL_C * (w_to - w_from));
    assert_abs_diff_eq!(rotated.vis[2].re, expected.re, epsilon = 1e-9);
    assert_abs_diff_eq!(rotated.vis[2].im, expected.im, epsilon = 1e-9);
}

#[test]
fn test_rotate_mismatch_leaves_sample_untouched() {
    let mut v = sample();
    v.vis.pop();
    let before = v.clone();
    let target = SkyLoc::from_horizontal(
        &v.config().location,
        v.timestamp,
        Angle::from_degrees(30.0),
        Angle::from_degrees(30.0),
    );
    let result = v.rotate(target);
    assert_eq!(
        result,
        Err(VisibilityError::ConfigMismatch {
            expected: 6,
            got: 5
        })
    );
    assert_eq!(v.vis, before.vis);
    assert_eq!(v.phase_el, before.phase_el);
    assert_eq!(v.phase_az, before.phase_az);
}

#[test]
fn test_rotate_all_matches_serial() {
    let base = sample();
    let mut samples: Vec<Visibility> = (0..8)
        .map(|k| {
            let mut v = base.clone();
            v.timestamp += hifitime::Duration::from_seconds(k as f64);
            v
        })
        .collect();
    let target = SkyLoc::from_degrees(120.0, -50.0);
    let serial: Vec<Visibility> = samples.iter().map(|v| v.rotated(target).unwrap()).collect();
    rotate_all(&mut samples, target).unwrap();
    for (par, ser) in samples.iter().zip(serial.iter()) {
        assert_eq!(par.vis, ser.vis);
        assert_eq!(par.phase_el, ser.phase_el);
    }
}
