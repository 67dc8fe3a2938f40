// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Source models: a spectral model and a spatial model with a name.


use log::trace;

use super::{Model, SpatialModel, SpectralModel};
use crate::{
    gammacat::CatalogSource,
    srclib::{ModelError, XmlSource},
};

/// A single source in a [`SourceLibrary`](super::SourceLibrary).
#[derive(Clone, Debug, PartialEq)]
pub struct SourceModel {
    pub source_name: String,

    /// "PointSource" or "ExtendedSource". Catalog sources derive this from
    /// their spatial model; XML sources keep whatever they were given.
    pub source_type: String,

    pub spatial_model: SpatialModel,

    pub spectral_model: SpectralModel,
}

impl SourceModel {
    /// Make a [`SourceModel`] from a catalog source.
    pub fn from_gammacat<S: CatalogSource + ?Sized>(source: &S) -> Result<SourceModel, ModelError> {
        let source_name = source.data().common_name.clone();
        trace!("Converting catalog source {source_name}");
        let spectral_model = SpectralModel::from_gammacat(source)?;
        let spatial_model = SpatialModel::from_gammacat(source)?;
        Ok(SourceModel {
            source_name,
            source_type: spatial_model.xml_source_type().to_string(),
            spatial_model,
            spectral_model,
        })
    }

    /// Make a [`SourceModel`] from a `<source>` element. A `<radialModel>` is
    /// preferred over a `<spatialModel>`.
    pub fn from_xml(source: &XmlSource) -> Result<SourceModel, ModelError> {
        trace!("Reading source {}", source.name);
        let spectral_model = SpectralModel::from_xml(&source.spectrum)?;
        let spatial = match (&source.radial_model, &source.spatial_model) {
            (Some(m), _) | (None, Some(m)) => m,
            (None, None) => {
                return Err(ModelError::UnknownModel {
                    kind: "spatial / radial",
                    name: format!("{source:?}"),
                })
            }
        };
        let spatial_model = SpatialModel::from_xml(spatial)?;
        Ok(SourceModel {
            source_name: source.name.clone(),
            source_type: source.source_type.clone(),
            spatial_model,
            spectral_model,
        })
    }

    /// Render this [`SourceModel`] as a `<source>` element, with a trailing
    /// newline.
    pub fn to_xml(&self) -> String {
        format!(
            "<source name=\"{}\" type=\"{}\">\n    {}\n    {}\n</source>\n",
            self.source_name,
            self.source_type,
            self.spectral_model.to_xml(),
            self.spatial_model.to_xml()
        )
    }
}
