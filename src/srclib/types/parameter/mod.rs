// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Model parameters and ordered collections of them.

#[cfg(test)]
mod tests;

use crate::{
    gammacat::CatalogParameter,
    srclib::{InvalidValueError, LookupError, XmlParameter},
};

/// A named value with a unit. The unit is only a label; it is never checked or
/// converted.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl Parameter {
    pub fn new<N: Into<String>, U: Into<String>>(name: N, value: f64, unit: U) -> Parameter {
        Parameter {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Make a [`Parameter`] from a textual value. Surrounding whitespace is
    /// ignored, but anything else that isn't a float is an error.
    pub fn parse<N: Into<String>, U: Into<String>>(
        name: N,
        value: &str,
        unit: U,
    ) -> Result<Parameter, InvalidValueError> {
        let name = name.into();
        match value.trim().parse() {
            Ok(value) => Ok(Parameter::new(name, value, unit)),
            Err(_) => Err(InvalidValueError::ParseFloat {
                name,
                string: value.to_string(),
            }),
        }
    }

    /// Make a [`Parameter`] from a gamma-cat style `{name, val, unit}` entry.
    pub fn from_gammacat(par: &CatalogParameter) -> Parameter {
        Parameter::new(par.name.as_str(), par.val, par.unit.as_str())
    }

    /// Make a [`Parameter`] from the attributes of a `<parameter>` element. A
    /// missing unit is treated as an empty one.
    pub fn from_xml(par: &XmlParameter) -> Result<Parameter, InvalidValueError> {
        Parameter::parse(
            par.name.as_str(),
            &par.value,
            par.unit.as_deref().unwrap_or(""),
        )
    }

    /// Render this [`Parameter`] as a `<parameter>` element, indented for its
    /// place inside a `<source>`.
    pub fn to_xml(&self) -> String {
        format!(
            r#"        <parameter name="{}" value="{}" unit="{}"/>"#,
            self.name,
            format_value(self.value),
            self.unit
        )
    }
}

/// Floats are written with their shortest round-trip representation, using
/// exponent notation for very large or small magnitudes (e.g. "1e-12", "-2.3",
/// "1.0"). Exponents have no sign padding or leading zeros ("1e-5" and "1e16",
/// not "1e-05" and "1e+16"), so text comparisons against other tools' output
/// may differ there even though the values are identical.
pub(crate) fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// An ordered collection of [`Parameter`]s. Parameter names should be unique,
/// but this isn't enforced; lookups return the first match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet(Vec<Parameter>);

impl ParameterSet {
    pub fn new(parameters: Vec<Parameter>) -> ParameterSet {
        ParameterSet(parameters)
    }

    pub fn from_gammacat(pars: &[CatalogParameter]) -> ParameterSet {
        pars.iter().map(Parameter::from_gammacat).collect()
    }

    pub fn from_xml(pars: &[XmlParameter]) -> Result<ParameterSet, InvalidValueError> {
        pars.iter().map(Parameter::from_xml).collect()
    }

    /// Get a [`Parameter`] by its name. Sets only ever have a handful of
    /// parameters, so a linear search is fine.
    pub fn par(&self, name: &str) -> Result<&Parameter, LookupError> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LookupError::ParameterNotFound {
                name: name.to_string(),
                pset: format!("{self:?}"),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The names of all parameters, in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }

    /// Render each [`Parameter`] as XML, one per line.
    pub fn to_xml(&self) -> String {
        self.0
            .iter()
            .map(Parameter::to_xml)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<Parameter>> for ParameterSet {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }
}

impl<const N: usize> From<[Parameter; N]> for ParameterSet {
    fn from(value: [Parameter; N]) -> Self {
        Self(Vec::from(value))
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ParameterSet {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> std::vec::IntoIter<Parameter> {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> std::slice::Iter<'a, Parameter> {
        self.0.iter()
    }
}
