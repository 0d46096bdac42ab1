// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod baseline;
mod geometry;
mod no_stderr;

use std::{io::Write, path::PathBuf, process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;
use tempfile::TempDir;

fn tart_geometry() -> Command {
    Command::cargo_bin("tart-geometry").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Lines of stdout that aren't log messages, split on tabs.
fn data_lines(stdout: &str) -> Vec<Vec<String>> {
    stdout
        .lines()
        .filter(|l| l.contains('\t'))
        .map(|l| l.split('\t').map(|s| s.trim().to_string()).collect())
        .collect()
}

/// A two-antenna array at Dunedin, with the second antenna 1 m north of the
/// first, and a third 1 m east.
fn write_dunedin_config(tmp_dir: &TempDir) -> PathBuf {
    let file = tmp_dir.path().join("array.toml");
    let mut f = std::fs::File::create(&file).unwrap();
    f.write_all(
        indoc! {r#"
            latitude_deg = -45.851825
            longitude_deg = 170.545451
            height_m = 46.5
            frequency_hz = 1.57542e9
            bandwidth_hz = 2.5e6
            antenna_positions = [
                [0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0],
            ]
        "#}
        .as_bytes(),
    )
    .unwrap();
    file
}
