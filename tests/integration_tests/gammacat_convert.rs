// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fs::File, io::Write};

use tempfile::TempDir;

use gamma_srclib::{SourceLibrary, SpatialModelType};

use crate::{get_cmd_output, srclib};

const CATALOG: &str = "test_files/gammacat.yaml";

#[test]
fn test_convert_without_spectral_data_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("lib.xml");

    #[rustfmt::skip]
    let cmd = srclib()
        .args([
            "gammacat-convert",
            "-c", CATALOG,
            "-o", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: "), "{stderr}");
    assert!(stderr.contains("HESS J1745-290"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_convert_skip_no_data() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("lib.xml");

    #[rustfmt::skip]
    let cmd = srclib()
        .args([
            "gammacat-convert",
            "-c", CATALOG,
            "-o", &format!("{}", output.display()),
            "--title", "gamma-cat",
            "--header", "<!-- Made from gamma-cat -->",
            "--skip-no-data",
        ])
        .ok();
    assert!(cmd.is_ok(), "gammacat-convert failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(stdout.contains("HESS J1745-290"), "{stdout}");

    let xml = std::fs::read_to_string(&output).unwrap();
    assert!(xml.starts_with(
        "<?xml version=\"1.0\" ?>\n<!-- Made from gamma-cat -->\n<source_library title=\"gamma-cat\">\n"
    ));
    let library = SourceLibrary::read(&output).unwrap();
    let names: Vec<&str> = library.iter().map(|s| s.source_name.as_str()).collect();
    assert_eq!(names, ["Crab", "Vela X", "RX J1713.7-3946"]);
    assert_eq!(library[1].spatial_model.model_type, SpatialModelType::Gauss);
}

#[test]
fn test_convert_with_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("lib.xml");
    let arg_file = tmp_dir.path().join("args.toml");
    {
        let mut f = File::create(&arg_file).unwrap();
        writeln!(f, "catalog = \"{CATALOG}\"").unwrap();
        writeln!(f, "output = \"{}\"", output.display()).unwrap();
        writeln!(f, "skip_no_data = true").unwrap();
        writeln!(f, "backend = \"serial\"").unwrap();
    }

    let cmd = srclib()
        .args(["gammacat-convert", &format!("{}", arg_file.display())])
        .ok();
    assert!(cmd.is_ok(), "gammacat-convert failed: {}", cmd.err().unwrap());
    assert_eq!(SourceLibrary::read(&output).unwrap().len(), 3);
}

#[test]
fn test_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("lib.xml");

    #[rustfmt::skip]
    let cmd = srclib()
        .args([
            "gammacat-convert",
            "-c", CATALOG,
            "-o", &format!("{}", output.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "gammacat-convert failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!output.exists());
}

#[test]
fn test_bad_backend() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("lib.xml");

    #[rustfmt::skip]
    let cmd = srclib()
        .args([
            "gammacat-convert",
            "-c", CATALOG,
            "-o", &format!("{}", output.display()),
            "--backend", "multiprocessing",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("multiprocessing"), "{stderr}");
}
