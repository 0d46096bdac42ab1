// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{data_lines, get_cmd_output, tart_geometry, write_dunedin_config};

const TIME: &str = "2019-08-12T03:24:51";

fn radec_of(el: &str, az: &str) -> (String, String) {
    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "radec",
            "--time", TIME,
            "--el", el,
            "--az", az,
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    let lines = data_lines(&stdout);
    assert_eq!(lines.len(), 1, "{stdout}");
    (lines[0][0].clone(), lines[0][1].clone())
}

#[test]
fn test_zenith_dec_is_latitude() {
    let (_, dec) = radec_of("90", "0");
    assert_abs_diff_eq!(dec.parse::<f64>().unwrap(), -45.851825, epsilon = 1e-6);
}

#[test]
fn test_radec_azel_round_trip() {
    let (ra, dec) = radec_of("35.5", "-60");
    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "azel",
            "--time", TIME,
            "--ra", &ra,
            "--dec", &dec,
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    let lines = data_lines(&stdout);
    assert_eq!(lines.len(), 1, "{stdout}");
    let el: f64 = lines[0][0].parse().unwrap();
    let az: f64 = lines[0][1].parse().unwrap();
    assert_abs_diff_eq!(el, 35.5, epsilon = 1e-6);
    assert_abs_diff_eq!(az, 300.0, epsilon = 1e-6);
}

#[test]
fn test_uvw_at_zenith() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let config = write_dunedin_config(&tmp_dir);
    let (ra, dec) = radec_of("90", "0");

    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "uvw",
            "--config", &config.display().to_string(),
            "--time", TIME,
            "--ra", &ra,
            "--dec", &dec,
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    let lines = data_lines(&stdout);
    // All pairs of 3 antennas.
    assert_eq!(lines.len(), 3, "{stdout}");

    let parse = |s: &str| s.parse::<f64>().unwrap();
    // (0, 1): 1 m north.
    assert_eq!(lines[0][..3], ["0", "1", "258"]);
    assert_abs_diff_eq!(parse(&lines[0][3]), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(parse(&lines[0][4]), -1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(parse(&lines[0][5]), 0.0, epsilon = 1e-6);
    // (0, 2): 1 m east.
    assert_eq!(lines[1][..3], ["0", "2", "259"]);
    assert_abs_diff_eq!(parse(&lines[1][3]), -1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(parse(&lines[1][4]), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(parse(&lines[1][5]), 0.0, epsilon = 1e-6);
}

#[test]
fn test_delay() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let config = write_dunedin_config(&tmp_dir);

    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "delay",
            "--config", &config.display().to_string(),
            "--el", "60",
            "--az", "0",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    let lines = data_lines(&stdout);
    assert_eq!(lines.len(), 3, "{stdout}");
    let delay: f64 = lines[1][1].parse().unwrap();
    assert_abs_diff_eq!(delay * 299_792_458.0, -0.5, epsilon = 1e-9);
}

#[test]
fn test_bad_config_extension() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let config = tmp_dir.path().join("array.yaml");
    std::fs::write(&config, "").unwrap();

    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "delay",
            "--config", &config.display().to_string(),
            "--el", "60",
            "--az", "0",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Valid extensions are: toml, json"), "{stderr}");
}

#[test]
fn test_bad_angle() {
    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "radec",
            "--time", TIME,
            "--el", "45:99:00",
            "--az", "0",
        ])
        .ok();
    assert!(cmd.is_err());
}
