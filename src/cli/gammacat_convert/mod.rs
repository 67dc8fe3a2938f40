// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convert a gamma-cat catalog into an XML source library.


use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, InfoPrinter, ARG_FILE_HELP, PARALLEL_BACKEND_HELP};
use crate::{
    constants::{DEFAULT_LIBRARY_HEADER, DEFAULT_LIBRARY_TITLE},
    gammacat::read_catalog_file,
    parallel::{
        set_parallel_backend, ParallelBackend, PoolArgs, PARALLEL_BACKENDS_COMMA_SEPARATED,
    },
    srclib::{SourceCounts, SourceLibrary},
    SrclibError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct GammacatConvertArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the gamma-cat catalog to be converted. Catalogs may be yaml or
    /// json.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) catalog: Option<PathBuf>,

    /// Path to the output XML source library.
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    /// The title attribute of the source library. Default: "sources"
    #[clap(long, help_heading = "OUTPUT FILES")]
    pub(super) title: Option<String>,

    /// Text to put between the XML declaration and the source library, e.g.
    /// an XML comment. Default: a blank line
    #[clap(long, help_heading = "OUTPUT FILES")]
    pub(super) header: Option<String>,

    /// Leave out catalog sources without spectral data, rather than failing.
    #[clap(long)]
    #[serde(default)]
    pub(super) skip_no_data: bool,

    #[clap(long, help = PARALLEL_BACKEND_HELP.as_str())]
    pub(super) backend: Option<String>,

    /// The number of threads to use when converting. The default is one per
    /// CPU.
    #[clap(long)]
    pub(super) num_threads: Option<usize>,
}

/// Everything needed to do a conversion.
#[derive(Debug)]
pub(super) struct GammacatConvertParams {
    pub(super) catalog: PathBuf,
    pub(super) output: PathBuf,
    pub(super) title: String,
    pub(super) header: String,
    pub(super) skip_no_data: bool,
    pub(super) backend: ParallelBackend,
    pub(super) pool_args: PoolArgs,
}

impl GammacatConvertArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<GammacatConvertArgs, SrclibError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let GammacatConvertArgs {
                args_file: _,
                catalog,
                output,
                title,
                header,
                skip_no_data,
                backend,
                num_threads,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(GammacatConvertArgs {
                args_file: None,
                catalog: cli_args.catalog.or(catalog),
                output: cli_args.output.or(output),
                title: cli_args.title.or(title),
                header: cli_args.header.or(header),
                skip_no_data: cli_args.skip_no_data || skip_no_data,
                backend: cli_args.backend.or(backend),
                num_threads: cli_args.num_threads.or(num_threads),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<GammacatConvertParams, SrclibError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            catalog,
            output,
            title,
            header,
            skip_no_data,
            backend,
            num_threads,
        } = self;

        let catalog = catalog.ok_or(GammacatConvertArgsError::NoCatalog)?;
        let output = output.ok_or(GammacatConvertArgsError::NoOutput)?;
        let backend = match backend {
            None => ParallelBackend::Rayon,
            Some(b) => ParallelBackend::from_str(&b.to_lowercase())
                .map_err(|_| GammacatConvertArgsError::InvalidBackend(b))?,
        };
        if num_threads == Some(0) {
            return Err(GammacatConvertArgsError::ZeroThreads.into());
        }

        let mut printer = InfoPrinter::new("gamma-cat conversion".into());
        printer.push_block(vec![
            format!("Catalog: {}", catalog.display()).into(),
            format!("Output: {}", output.display()).into(),
        ]);
        let mut backend_line = format!("Parallel backend: {backend}");
        if let (ParallelBackend::Rayon, Some(n)) = (backend, num_threads) {
            backend_line.push_str(&format!(" ({n} threads)"));
        }
        printer.push_line(backend_line.into());
        if skip_no_data {
            printer.push_line("Skipping sources without spectral data".into());
        }
        printer.display();
        display_warnings();

        Ok(GammacatConvertParams {
            catalog,
            output,
            title: title.unwrap_or_else(|| DEFAULT_LIBRARY_TITLE.to_string()),
            header: header.unwrap_or_else(|| DEFAULT_LIBRARY_HEADER.to_string()),
            skip_no_data,
            backend,
            pool_args: PoolArgs { num_threads },
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SrclibError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

impl GammacatConvertParams {
    pub(super) fn run(&self) -> Result<SourceCounts, SrclibError> {
        set_parallel_backend(self.backend);

        let catalog = read_catalog_file(&self.catalog)?;
        info!("Read {} catalog sources", catalog.len());
        let library = SourceLibrary::from_gammacat(&catalog, self.skip_no_data, &self.pool_args)?;
        display_warnings();

        let counts = library.get_counts();
        let SourceCounts {
            num_points,
            num_gaussians,
            num_shells,
            num_power_laws,
            num_power_law2s,
            num_exp_cutoffs,
        } = counts;
        info!(
            "Converted {} sources ({num_points} points, {num_gaussians} gaussians, {num_shells} shells)",
            library.len()
        );
        info!("Spectral models: {num_power_laws} power laws, {num_power_law2s} integral power laws, {num_exp_cutoffs} exponential cutoffs");

        library.write(&self.output, Some(&self.title), Some(&self.header))?;
        Ok(counts)
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum GammacatConvertArgsError {
    #[error("No catalog was specified")]
    NoCatalog,

    #[error("No output source library was specified")]
    NoOutput,

    #[error("Unrecognised parallel backend '{0}'. Supported backends: {}", *PARALLEL_BACKENDS_COMMA_SEPARATED)]
    InvalidBackend(String),

    #[error("The number of threads can't be zero")]
    ZeroThreads,
}
