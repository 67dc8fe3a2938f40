// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify XML source library files.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::{
    srclib::{SourceCounts, SourceLibrary},
    SrclibError,
};

/// Verify that XML source libraries can be read.
#[derive(Parser, Debug)]
pub(super) struct SrclibVerifyArgs {
    /// Path to the source library(s) to be verified.
    #[clap(name = "SOURCE_LIBRARIES", parse(from_os_str), required = true)]
    source_libraries: Vec<PathBuf>,
}

impl SrclibVerifyArgs {
    /// Run [verify] with these arguments.
    pub(super) fn run(&self) -> Result<(), SrclibError> {
        verify(&self.source_libraries);
        Ok(())
    }
}

/// Read and print stats out for each input source library. If a source library
/// couldn't be read, print the error, and continue trying to read the other
/// source libraries. The number of libraries successfully read is returned.
fn verify<P: AsRef<Path>>(source_libraries: &[P]) -> usize {
    let mut num_read = 0;
    for source_library in source_libraries {
        let source_library = source_library.as_ref();
        info!("{}:", source_library.display());

        let library = match SourceLibrary::read(source_library) {
            Ok(l) => l,
            Err(e) => {
                info!("{}", e);
                info!("");
                continue;
            }
        };
        num_read += 1;
        let SourceCounts {
            num_points,
            num_gaussians,
            num_shells,
            num_power_laws,
            num_power_law2s,
            num_exp_cutoffs,
        } = library.get_counts();
        info!(
            "    {} sources ({num_points} points, {num_gaussians} gaussians, {num_shells} shells)",
            library.len()
        );
        info!(
            "    Spectral models: {num_power_laws} power laws, {num_power_law2s} integral power laws, {num_exp_cutoffs} exponential cutoffs"
        );
        info!("");
    }

    num_read
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::srclib::{
        Parameter, ParameterSet, SourceModel, SpatialModel, SpatialModelType, SpectralModel,
        SpectralModelType,
    };

    #[test]
    fn test_verify_skips_unreadable_libraries() {
        let library = SourceLibrary::new(vec![SourceModel {
            source_name: "a".to_string(),
            source_type: "PointSource".to_string(),
            spatial_model: SpatialModel::new(SpatialModelType::Point, ParameterSet::default()),
            spectral_model: SpectralModel::new(
                SpectralModelType::PowerLaw,
                vec![Parameter::new("Prefactor", 1e-12, "")],
            ),
        }]);
        let mut good = NamedTempFile::new().unwrap();
        good.write_all(library.to_xml(None, None).as_bytes()).unwrap();
        good.flush().unwrap();
        let mut bad = NamedTempFile::new().unwrap();
        bad.write_all(b"<source_library><source/></source_library>")
            .unwrap();
        bad.flush().unwrap();
        let missing = good.path().with_extension("missing");

        assert_eq!(verify(&[good.path(), bad.path(), missing.as_path()]), 1);
    }
}
