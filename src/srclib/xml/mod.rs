// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The shape of an XML source library, as deserialised by `quick-xml`.
//!
//! Attributes are keyed with a leading `@`; repeated child elements become
//! [`Vec`]s. Nothing here interprets the contents; that's left to the
//! `from_xml` constructors of the model types.

use serde::Deserialize;

use super::ReadSourceLibraryError;

/// A `<source_library>` element.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct XmlSourceLibrary {
    #[serde(rename = "@title", default)]
    pub title: Option<String>,

    #[serde(rename = "source")]
    pub sources: Vec<XmlSource>,
}

/// A `<source>` element.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct XmlSource {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@type")]
    pub source_type: String,

    pub spectrum: XmlModel,

    /// Older versions of the format call the spatial model a "radial model".
    #[serde(rename = "radialModel", default)]
    pub radial_model: Option<XmlModel>,

    #[serde(rename = "spatialModel", default)]
    pub spatial_model: Option<XmlModel>,
}

/// A `<spectrum>`, `<spatialModel>` or `<radialModel>` element.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct XmlModel {
    #[serde(rename = "@type")]
    pub model_type: String,

    #[serde(rename = "parameter", default)]
    pub parameters: Vec<XmlParameter>,
}

/// A `<parameter>` element. The value is kept as text until a [`Parameter`]
/// is made from it.
///
/// [`Parameter`]: super::Parameter
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct XmlParameter {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@value")]
    pub value: String,

    #[serde(rename = "@unit", default)]
    pub unit: Option<String>,
}

/// Deserialise the text of an XML source library.
pub(crate) fn parse_source_library(xml: &str) -> Result<XmlSourceLibrary, ReadSourceLibraryError> {
    let library = quick_xml::de::from_str(xml)?;
    Ok(library)
}
