// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion between gamma-ray source catalogs and XML source-model libraries
//! (the format read by ctools and the Fermi science tools).

mod cli;
pub mod constants;
pub mod gammacat;
pub mod parallel;
pub mod srclib;

// Re-exports.
pub use cli::{Srclib, SrclibError};
pub use gammacat::{CatalogSource, GammaCatSource};
pub use srclib::{
    Parameter, ParameterSet, SourceLibrary, SourceModel, SpatialModel, SpatialModelType,
    SpectralModel, SpectralModelType,
};
