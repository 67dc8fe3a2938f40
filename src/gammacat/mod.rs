// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! gamma-cat catalog sources. See for more info:
//! <https://gamma-cat.readthedocs.io>
//!
//! Only the handful of fields needed to make source models are represented.

mod error;
mod read;

pub use error::ReadCatalogError;
pub use read::{catalog_from_json, catalog_from_yaml, read_catalog_file};

use serde::{Deserialize, Serialize};

/// A value with a unit. The unit is only a label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,

    #[serde(default)]
    pub unit: String,
}

impl Quantity {
    pub fn new<U: Into<String>>(value: f64, unit: U) -> Quantity {
        Quantity {
            value,
            unit: unit.into(),
        }
    }
}

/// A spectral-model parameter, as gamma-cat writes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogParameter {
    pub name: String,

    pub val: f64,

    #[serde(default)]
    pub unit: String,
}

/// A gamma-cat spectral model: its family name (e.g. "PowerLaw") and
/// parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSpectralModel {
    pub name: String,

    pub parameters: Vec<CatalogParameter>,
}

/// The per-source catalog fields used to make source models.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSourceData {
    pub common_name: String,

    /// "point", "gauss" or "shell". Other morphologies exist in the catalog but
    /// can't be converted.
    pub morph_type: String,

    /// Galactic longitude.
    pub glon: Quantity,

    /// Galactic latitude.
    pub glat: Quantity,

    /// The size of an extended source; the Gaussian sigma or the shell radius.
    #[serde(default)]
    pub morph_sigma: Option<Quantity>,

    /// The second Gaussian sigma of an elongated source.
    #[serde(default)]
    pub morph_sigma2: Option<Quantity>,

    /// The position angle of an elongated source.
    #[serde(default)]
    pub morph_pa: Option<Quantity>,
}

/// Anything that can supply catalog data for one source.
pub trait CatalogSource {
    fn data(&self) -> &CatalogSourceData;

    /// The source's spectral model. `None` means that the catalog has no
    /// spectral data for this source.
    fn spectral_model(&self) -> Option<&CatalogSpectralModel>;
}

/// A single gamma-cat source record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GammaCatSource {
    #[serde(default)]
    pub source_id: Option<u32>,

    #[serde(flatten)]
    pub data: CatalogSourceData,

    #[serde(default)]
    pub spectral_model: Option<CatalogSpectralModel>,
}

impl CatalogSource for GammaCatSource {
    fn data(&self) -> &CatalogSourceData {
        &self.data
    }

    fn spectral_model(&self) -> Option<&CatalogSpectralModel> {
        self.spectral_model.as_ref()
    }
}
