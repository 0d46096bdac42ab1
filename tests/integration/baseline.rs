// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, tart_geometry};

#[test]
fn test_encode() {
    let cmd = tart_geometry().args(["baseline", "encode", "2", "1"]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout.lines().filter(|l| *l == "258").count(), 1, "{stdout}");
}

#[test]
fn test_decode_extended() {
    let id = (1 * 2048 + 300 + 65536).to_string();
    let cmd = tart_geometry().args(["baseline", "decode", &id]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.lines().any(|l| l == "1\t300"), "{stdout}");
}

#[test]
fn test_encode_out_of_range_fails() {
    let cmd = tart_geometry()
        .args(["baseline", "encode", "1", "2048"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("2048"), "{stderr}");
    assert!(stderr.contains("Baseline identifiers can represent"), "{stderr}");
}

#[test]
fn test_decode_invalid_fails() {
    let cmd = tart_geometry().args(["baseline", "decode", "65536"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("not a valid baseline identifier"), "{stderr}");
}
