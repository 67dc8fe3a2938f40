// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, srclib};

#[test]
fn test_verify_source_library() {
    let cmd = srclib()
        .args(["srclib-verify", "test_files/source_library.xml"])
        .ok();
    assert!(cmd.is_ok(), "srclib-verify failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(
        stdout.contains("2 sources (1 points, 1 gaussians, 0 shells)"),
        "{stdout}"
    );
    assert!(
        stdout.contains("1 power laws, 0 integral power laws, 1 exponential cutoffs"),
        "{stdout}"
    );
}

#[test]
fn test_verify_continues_past_bad_files() {
    let cmd = srclib()
        .args([
            "srclib-verify",
            "test_files/gammacat.yaml",
            "test_files/source_library.xml",
        ])
        .ok();
    assert!(cmd.is_ok(), "srclib-verify failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2 sources"), "{stdout}");
}

#[test]
fn test_verify_needs_a_file() {
    let cmd = srclib().args(["srclib-verify"]).ok();
    assert!(cmd.is_err());
}
