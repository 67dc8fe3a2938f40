// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for XML source-model libraries. See for more info:
//! <http://cta.irap.omp.eu/ctools/user_manual/getting_started/models.html>
//! <https://fermi.gsfc.nasa.gov/ssc/data/analysis/scitools/source_models.html>

pub(crate) mod read;
pub(crate) mod types;
pub(crate) mod xml;
mod write;

mod error;

pub use error::*;
pub use types::*;
pub use xml::{XmlModel, XmlParameter, XmlSource, XmlSourceLibrary};
