// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Behaviour shared by spectral and spatial models.

use super::ParameterSet;

/// A spectral or spatial model: a set of parameters tagged with the XML type
/// strings of its variant.
pub trait Model {
    /// The name of the XML element holding this model (e.g. "spectrum").
    const XML_ELEMENT: &'static str;

    /// The XML type string written out for this model.
    fn xml_type(&self) -> &'static str;

    /// All XML type strings associated with this model's variant, including
    /// those of older versions of the format.
    fn xml_types(&self) -> Vec<&'static str>;

    fn parameters(&self) -> &ParameterSet;

    /// Render this model as an XML element, indented for its place inside a
    /// `<source>`.
    fn to_xml(&self) -> String {
        format!(
            "<{element} type=\"{}\">\n{}\n    </{element}>",
            self.xml_type(),
            self.parameters().to_xml(),
            element = Self::XML_ELEMENT,
        )
    }
}
