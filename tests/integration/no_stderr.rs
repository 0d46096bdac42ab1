// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{get_cmd_output, tart_geometry, write_dunedin_config};

#[test]
fn test_uvw_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let config = write_dunedin_config(&tmp_dir);

    #[rustfmt::skip]
    let cmd = tart_geometry()
        .args([
            "-vv",
            "uvw",
            "--config", &config.display().to_string(),
            "--time", "2019-08-12 03:24:51",
            "--ra", "12:30:00",
            "--dec", "-45:51:06.57",
            "--light-seconds",
        ])
        .ok();
    assert!(cmd.is_ok(), "uvw failed: {:?}", get_cmd_output(cmd));
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
