// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all srclib-related errors. This should be the *only* error
//! enum that is publicly visible from the CLI.

use thiserror::Error;

use super::gammacat_convert::GammacatConvertArgsError;
use crate::{
    gammacat::ReadCatalogError,
    parallel::ParallelError,
    srclib::{ConvertCatalogError, ReadSourceLibraryError, WriteSourceLibraryError},
};

const GAMMACAT_URL: &str = "https://gamma-cat.readthedocs.io";
const MODELS_URL: &str = "http://cta.irap.omp.eu/ctools/user_manual/getting_started/models.html";

/// The *only* publicly visible error from the CLI. Each error message should
/// include a URL, unless it's "generic".
#[derive(Error, Debug)]
pub enum SrclibError {
    /// An error related to gammacat-convert arguments.
    #[error("{0}")]
    GammacatConvert(String),

    /// An error related to reading a gamma-cat catalog.
    #[error("{0}\n\nSee for more info: {GAMMACAT_URL}")]
    Catalog(String),

    /// An error related to source models.
    #[error("{0}\n\nSee for more info: {MODELS_URL}")]
    Model(String),

    /// An error related to reading or writing XML source libraries.
    #[error("{0}\n\nSee for more info: {MODELS_URL}")]
    SourceLibrary(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are toml or json files with the same keys as the long command-line arguments.")]
    ArgFile(String),

    /// An error related to running work in parallel.
    #[error("{0}")]
    Parallel(String),

    /// A generic error that can't be clarified further with documentation, e.g.
    /// IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<GammacatConvertArgsError> for SrclibError {
    fn from(e: GammacatConvertArgsError) -> Self {
        Self::GammacatConvert(e.to_string())
    }
}

impl From<ReadCatalogError> for SrclibError {
    fn from(e: ReadCatalogError) -> Self {
        let s = e.to_string();
        match e {
            ReadCatalogError::InvalidGlat { .. }
            | ReadCatalogError::FailedToDeserialise { .. }
            | ReadCatalogError::Yaml(_)
            | ReadCatalogError::Json(_) => Self::Catalog(s),
            ReadCatalogError::IO(e) => Self::from(e),
        }
    }
}

impl From<ConvertCatalogError> for SrclibError {
    fn from(e: ConvertCatalogError) -> Self {
        match e {
            ConvertCatalogError::Model(e) => Self::Model(e.to_string()),
            ConvertCatalogError::Parallel(e) => Self::from(e),
        }
    }
}

impl From<ReadSourceLibraryError> for SrclibError {
    fn from(e: ReadSourceLibraryError) -> Self {
        let s = e.to_string();
        match e {
            ReadSourceLibraryError::Xml(_) => Self::SourceLibrary(s),
            ReadSourceLibraryError::Model(_) => Self::Model(s),
            ReadSourceLibraryError::IO(e) => Self::from(e),
        }
    }
}

impl From<WriteSourceLibraryError> for SrclibError {
    fn from(e: WriteSourceLibraryError) -> Self {
        match e {
            WriteSourceLibraryError::IO(e) => Self::from(e),
        }
    }
}

impl From<ParallelError> for SrclibError {
    fn from(e: ParallelError) -> Self {
        Self::Parallel(e.to_string())
    }
}

impl From<std::io::Error> for SrclibError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
