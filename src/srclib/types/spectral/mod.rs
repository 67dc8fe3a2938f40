// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Spectral models.


use log::trace;

use super::{Model, Parameter, ParameterSet};
use crate::{
    gammacat::CatalogSource,
    srclib::{InvalidValueError, LookupError, ModelError, XmlModel},
};

/// Spectral model types supported here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum SpectralModelType {
    PowerLaw,
    PowerLaw2,
    ExpCutoff,
}

/// XML type strings that select a spectral model when reading XML.
///
/// Only the primary type string of each model is listed; unlike spatial
/// models, no older type strings are honoured here.
pub const SPECTRAL_XML_TYPES: &[(&str, SpectralModelType)] = &[
    ("PowerLaw", SpectralModelType::PowerLaw),
    ("PowerLaw2", SpectralModelType::PowerLaw2),
    ("ExpCutoff", SpectralModelType::ExpCutoff),
];

/// gamma-cat spectral model names and the model types they become.
pub const GAMMACAT_SPECTRAL_NAMES: &[(&str, SpectralModelType)] = &[
    ("PowerLaw", SpectralModelType::PowerLaw),
    ("PowerLaw2", SpectralModelType::PowerLaw2),
    ("ExponentialCutoffPowerLaw", SpectralModelType::ExpCutoff),
];

impl SpectralModelType {
    /// The XML type string written out for this model.
    pub fn xml_type(self) -> &'static str {
        match self {
            SpectralModelType::PowerLaw => "PowerLaw",
            SpectralModelType::PowerLaw2 => "PowerLaw2",
            SpectralModelType::ExpCutoff => "ExpCutoff",
        }
    }

    /// All XML type strings associated with this model. Currently this is
    /// only ever the primary type string.
    pub fn xml_types(self) -> Vec<&'static str> {
        vec![self.xml_type()]
    }

    /// Find the model for an XML type string. Only primary type strings are
    /// matched.
    pub fn from_xml_type(s: &str) -> Option<SpectralModelType> {
        SPECTRAL_XML_TYPES
            .iter()
            .find(|(xml_type, _)| *xml_type == s)
            .map(|(_, t)| *t)
    }

    /// Find the model for a gamma-cat spectral model name.
    pub fn from_gammacat_name(s: &str) -> Option<SpectralModelType> {
        GAMMACAT_SPECTRAL_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, t)| *t)
    }

    /// Convert gamma-cat spectral parameters into the parameters of this
    /// model. Units are copied verbatim.
    pub fn convert_gammacat_pset(self, pset: &ParameterSet) -> Result<ParameterSet, ModelError> {
        let parameters = match self {
            SpectralModelType::PowerLaw => vec![
                rename(pset, "amplitude", "Prefactor", |v| v)?,
                rename(pset, "index", "Index", |v| -v)?,
                rename(pset, "reference", "Scale", |v| v)?,
            ],

            SpectralModelType::PowerLaw2 => vec![
                rename(pset, "amplitude", "Integral", |v| v)?,
                rename(pset, "index", "Index", |v| -v)?,
                rename(pset, "emin", "LowerLimit", |v| v)?,
                rename(pset, "emax", "UpperLimit", |v| v)?,
            ],

            // The index is not negated for this model in the XML format. The
            // cutoff energy is the reciprocal of lambda_, but its unit is left
            // alone; it must already be an energy unit.
            SpectralModelType::ExpCutoff => {
                if pset.par("lambda_")?.value == 0.0 {
                    return Err(InvalidValueError::ZeroReciprocal {
                        name: "lambda_".to_string(),
                    }
                    .into());
                }
                vec![
                    rename(pset, "amplitude", "Prefactor", |v| v)?,
                    rename(pset, "index", "Index", |v| v)?,
                    rename(pset, "lambda_", "Cutoff", |v| 1.0 / v)?,
                    rename(pset, "reference", "Scale", |v| v)?,
                ]
            }
        };
        Ok(ParameterSet::new(parameters))
    }
}

/// Get a parameter from the set, and make a new one with a different name and
/// a transformed value.
fn rename<F: Fn(f64) -> f64>(
    pset: &ParameterSet,
    from: &str,
    to: &str,
    transform: F,
) -> Result<Parameter, LookupError> {
    let par = pset.par(from)?;
    Ok(Parameter::new(to, transform(par.value), par.unit.as_str()))
}

/// A spectral model and its parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralModel {
    pub model_type: SpectralModelType,
    pub parameters: ParameterSet,
}

impl SpectralModel {
    pub fn new<P: Into<ParameterSet>>(model_type: SpectralModelType, parameters: P) -> Self {
        Self {
            model_type,
            parameters: parameters.into(),
        }
    }

    /// Make a [`SpectralModel`] from a `<spectrum>` element.
    pub fn from_xml(data: &XmlModel) -> Result<SpectralModel, ModelError> {
        trace!("Reading spectral model of type {}", data.model_type);
        if data.parameters.is_empty() {
            return Err(LookupError::MissingField {
                field: "parameter",
                context: format!("spectrum of type {}", data.model_type),
            }
            .into());
        }
        let parameters = ParameterSet::from_xml(&data.parameters)?;

        match SpectralModelType::from_xml_type(&data.model_type) {
            Some(model_type) => Ok(SpectralModel::new(model_type, parameters)),
            None => Err(ModelError::UnknownModel {
                kind: "spectral",
                name: data.model_type.clone(),
            }),
        }
    }

    /// Make a [`SpectralModel`] from a catalog source. If the source has no
    /// spectral model, then [`ModelError::NoDataAvailable`] is returned; this
    /// is distinct from [`ModelError::UnknownModel`], which is returned for
    /// spectral models that can't be represented here.
    pub fn from_gammacat<S: CatalogSource + ?Sized>(source: &S) -> Result<SpectralModel, ModelError> {
        let data = match source.spectral_model() {
            Some(d) => d,
            None => {
                return Err(ModelError::NoDataAvailable(
                    source.data().common_name.clone(),
                ))
            }
        };

        let pset = ParameterSet::from_gammacat(&data.parameters);
        let model_type = SpectralModelType::from_gammacat_name(&data.name).ok_or_else(|| {
            ModelError::UnknownModel {
                kind: "spectral",
                name: data.name.clone(),
            }
        })?;
        trace!(
            "{}: converting gamma-cat {} to {model_type}",
            source.data().common_name,
            data.name
        );
        let parameters = model_type.convert_gammacat_pset(&pset)?;
        Ok(SpectralModel::new(model_type, parameters))
    }
}

impl Model for SpectralModel {
    const XML_ELEMENT: &'static str = "spectrum";

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
