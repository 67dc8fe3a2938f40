// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors associated with converting catalog sources or XML elements into
/// source models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A discriminator (XML type attribute, catalog model family or
    /// morphology) didn't match any known model.
    #[error("Unknown {kind} model: {name}")]
    UnknownModel { kind: &'static str, name: String },

    /// The catalog has no spectral model for this source.
    #[error("No spectral model data available for source {0}")]
    NoDataAvailable(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),
}

impl ModelError {
    /// Is this an "unknown model" error?
    pub fn is_unknown_model(&self) -> bool {
        matches!(self, Self::UnknownModel { .. })
    }

    /// Is this a "no data available" error?
    pub fn is_no_data_available(&self) -> bool {
        matches!(self, Self::NoDataAvailable(_))
    }
}

/// Errors from malformed input, i.e. something expected wasn't there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Parameter {name} not found for pset: {pset}")]
    ParameterNotFound { name: String, pset: String },

    #[error("{context}: missing expected field '{field}'")]
    MissingField {
        field: &'static str,
        context: String,
    },
}

/// Errors from values that can't be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidValueError {
    /// Error when converting a string to a float.
    #[error("Parameter {name}: Error converting string '{string}' to a float")]
    ParseFloat { name: String, string: String },

    #[error("Parameter {name}: Can't take the reciprocal of zero")]
    ZeroReciprocal { name: String },
}

/// Errors associated with reading in a source library.
#[derive(Error, Debug)]
pub enum ReadSourceLibraryError {
    #[error("Couldn't interpret the XML source library: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with writing out a source library.
#[derive(Error, Debug)]
pub enum WriteSourceLibraryError {
    /// An IO error.
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with converting a whole catalog into a source library.
#[derive(Error, Debug)]
pub enum ConvertCatalogError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Parallel(#[from] crate::parallel::ParallelError),
}
