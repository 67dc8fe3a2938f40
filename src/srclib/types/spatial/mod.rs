// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Spatial models.


use log::{debug, trace};

use super::{Model, Parameter, ParameterSet};
use crate::{
    constants::SHELL_WIDTH_UNIT,
    gammacat::{CatalogSource, Quantity},
    srclib::{LookupError, ModelError, XmlModel},
};

/// Spatial model types supported here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum SpatialModelType {
    Point,
    Gauss,
    Shell,
}

/// XML type strings that select a spatial model when reading XML. This
/// includes the type strings used by older versions of the format.
pub const SPATIAL_XML_TYPES: &[(&str, SpatialModelType)] = &[
    ("Point", SpatialModelType::Point),
    ("Gauss", SpatialModelType::Gauss),
    ("Gaussian", SpatialModelType::Gauss),
    ("Shell", SpatialModelType::Shell),
    ("RadialShell", SpatialModelType::Shell),
];

/// gamma-cat morphology types and the model types they become.
pub const GAMMACAT_MORPH_TYPES: &[(&str, SpatialModelType)] = &[
    ("point", SpatialModelType::Point),
    ("gauss", SpatialModelType::Gauss),
    ("shell", SpatialModelType::Shell),
];

impl SpatialModelType {
    /// The XML type string written out for this model.
    pub fn xml_type(self) -> &'static str {
        match self {
            SpatialModelType::Point => "Point",
            SpatialModelType::Gauss => "Gauss",
            SpatialModelType::Shell => "Shell",
        }
    }

    /// All XML type strings associated with this model, primary first.
    pub fn xml_types(self) -> Vec<&'static str> {
        SPATIAL_XML_TYPES
            .iter()
            .filter(|(_, t)| *t == self)
            .map(|(s, _)| *s)
            .collect()
    }

    /// The `type` attribute of a `<source>` with this spatial model.
    pub fn xml_source_type(self) -> &'static str {
        match self {
            SpatialModelType::Point => "PointSource",
            SpatialModelType::Gauss | SpatialModelType::Shell => "ExtendedSource",
        }
    }

    /// Find the model for an XML type string, including older type strings.
    pub fn from_xml_type(s: &str) -> Option<SpatialModelType> {
        SPATIAL_XML_TYPES
            .iter()
            .find(|(xml_type, _)| *xml_type == s)
            .map(|(_, t)| *t)
    }

    /// Find the model for a gamma-cat morphology type.
    pub fn from_morph_type(s: &str) -> Option<SpatialModelType> {
        GAMMACAT_MORPH_TYPES
            .iter()
            .find(|(morph_type, _)| *morph_type == s)
            .map(|(_, t)| *t)
    }
}

/// A spatial model and its parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialModel {
    pub model_type: SpatialModelType,
    pub parameters: ParameterSet,
}

impl SpatialModel {
    pub fn new<P: Into<ParameterSet>>(model_type: SpatialModelType, parameters: P) -> Self {
        Self {
            model_type,
            parameters: parameters.into(),
        }
    }

    /// The `type` attribute of a `<source>` with this spatial model.
    pub fn xml_source_type(&self) -> &'static str {
        self.model_type.xml_source_type()
    }

    /// Make a [`SpatialModel`] from a `<spatialModel>` or `<radialModel>`
    /// element.
    ///
    /// Only the model type is read; the parameters of the element are not, so
    /// the returned model has none.
    pub fn from_xml(data: &XmlModel) -> Result<SpatialModel, ModelError> {
        trace!("Reading spatial model of type {}", data.model_type);
        match SpatialModelType::from_xml_type(&data.model_type) {
            Some(model_type) => Ok(SpatialModel::new(model_type, ParameterSet::default())),
            None => Err(ModelError::UnknownModel {
                kind: "spatial",
                name: data.model_type.clone(),
            }),
        }
    }

    /// Make a [`SpatialModel`] from a catalog source's morphology.
    pub fn from_gammacat<S: CatalogSource + ?Sized>(source: &S) -> Result<SpatialModel, ModelError> {
        let d = source.data();
        let model_type = SpatialModelType::from_morph_type(&d.morph_type).ok_or_else(|| {
            ModelError::UnknownModel {
                kind: "spatial",
                name: format!("{} (source {})", d.morph_type, d.common_name),
            }
        })?;

        let mut parameters = vec![
            from_quantity("GLON", &d.glon),
            from_quantity("GLAT", &d.glat),
        ];
        match model_type {
            SpatialModelType::Point => (),

            SpatialModelType::Gauss => {
                parameters.push(from_quantity("Sigma", morph_sigma(source)?));
                if d.morph_sigma2.is_some() || d.morph_pa.is_some() {
                    debug!(
                        "{}: ignoring the second sigma and position angle of the Gaussian",
                        d.common_name
                    );
                }
            }

            // The catalog has no shell widths; a width of zero stands in.
            SpatialModelType::Shell => {
                parameters.push(from_quantity("Radius", morph_sigma(source)?));
                parameters.push(Parameter::new("Width", 0.0, SHELL_WIDTH_UNIT));
            }
        }

        Ok(SpatialModel::new(model_type, parameters))
    }
}

fn from_quantity(name: &str, q: &Quantity) -> Parameter {
    Parameter::new(name, q.value, q.unit.as_str())
}

fn morph_sigma<S: CatalogSource + ?Sized>(source: &S) -> Result<&Quantity, LookupError> {
    let d = source.data();
    d.morph_sigma
        .as_ref()
        .ok_or_else(|| LookupError::MissingField {
            field: "morph_sigma",
            context: format!("Catalog source {}", d.common_name),
        })
}

impl Model for SpatialModel {
    const XML_ELEMENT: &'static str = "spatialModel";

    fn xml_type(&self) -> &'static str {
        self.model_type.xml_type()
    }

    fn xml_types(&self) -> Vec<&'static str> {
        self.model_type.xml_types()
    }

    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }
}
