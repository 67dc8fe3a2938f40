// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code surrounding the [`Vec`] used to contain all of the source models of a
//! source library.


use std::{
    ops::{Deref, DerefMut},
    path::Path,
};

use log::debug;

use super::*;
use crate::{
    cli::Warn,
    constants::{DEFAULT_LIBRARY_HEADER, DEFAULT_LIBRARY_TITLE},
    gammacat::CatalogSource,
    parallel::{run_parallel, PoolArgs},
    srclib::{
        read::read_source_library_file, write::write_source_library, xml::parse_source_library,
        ConvertCatalogError, ModelError, ReadSourceLibraryError, WriteSourceLibraryError,
    },
};

/// An ordered collection of [`SourceModel`]s. This is what gets read from and
/// written to an XML file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceLibrary {
    pub source_list: Vec<SourceModel>,
}

impl SourceLibrary {
    pub fn new(source_list: Vec<SourceModel>) -> Self {
        Self { source_list }
    }

    /// Read a source library from an XML file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<SourceLibrary, ReadSourceLibraryError> {
        read_source_library_file(path)
    }

    /// Make a [`SourceLibrary`] from the text of an XML source library.
    pub fn from_xml(xml: &str) -> Result<SourceLibrary, ReadSourceLibraryError> {
        let data = parse_source_library(xml)?;
        if let Some(title) = &data.title {
            debug!("Source library title: {title}");
        }
        let source_list = data
            .sources
            .iter()
            .map(SourceModel::from_xml)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SourceLibrary { source_list })
    }

    /// Convert catalog sources into a [`SourceLibrary`], keeping their order.
    /// The sources are converted with the process-wide parallel backend.
    ///
    /// If `skip_no_data` is true, then sources without spectral data are left
    /// out (with a warning) rather than causing an error. Any other problem
    /// with a source is always an error.
    pub fn from_gammacat<S: CatalogSource + Sync>(
        sources: &[S],
        skip_no_data: bool,
        pool_args: &PoolArgs,
    ) -> Result<SourceLibrary, ConvertCatalogError> {
        debug!("Converting {} catalog sources", sources.len());
        let results = run_parallel(
            SourceModel::from_gammacat::<S>,
            sources,
            None,
            pool_args,
            None,
        )?;

        let mut source_list = Vec::with_capacity(results.len());
        let mut skipped = vec![];
        for result in results {
            match result {
                Ok(source) => source_list.push(source),
                Err(ModelError::NoDataAvailable(name)) if skip_no_data => skipped.push(name),
                Err(e) => return Err(e.into()),
            }
        }
        if !skipped.is_empty() {
            format!(
                "Skipped {} catalog sources without spectral data: {}",
                skipped.len(),
                skipped.join(", ")
            )
            .warn();
        }

        Ok(SourceLibrary { source_list })
    }

    /// Render this [`SourceLibrary`] as the text of an XML file. `title` and
    /// `header` default to "sources" and a blank line.
    ///
    /// Nothing is escaped; names and units containing XML special characters
    /// will produce an invalid document.
    pub fn to_xml(&self, title: Option<&str>, header: Option<&str>) -> String {
        let title = title.unwrap_or(DEFAULT_LIBRARY_TITLE);
        let header = header.unwrap_or(DEFAULT_LIBRARY_HEADER);
        let sources = self
            .source_list
            .iter()
            .map(SourceModel::to_xml)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<?xml version=\"1.0\" ?>\n{header}\n<source_library title=\"{title}\">\n\n{sources}\n</source_library>\n"
        )
    }

    /// Write this [`SourceLibrary`] to an XML file.
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        title: Option<&str>,
        header: Option<&str>,
    ) -> Result<(), WriteSourceLibraryError> {
        write_source_library(path, self, title, header)
    }

    /// Get counts of each of the spatial and spectral model types.
    pub fn get_counts(&self) -> SourceCounts {
        let mut counts = SourceCounts::default();
        for source in &self.source_list {
            match source.spatial_model.model_type {
                SpatialModelType::Point => counts.num_points += 1,
                SpatialModelType::Gauss => counts.num_gaussians += 1,
                SpatialModelType::Shell => counts.num_shells += 1,
            }
            match source.spectral_model.model_type {
                SpectralModelType::PowerLaw => counts.num_power_laws += 1,
                SpectralModelType::PowerLaw2 => counts.num_power_law2s += 1,
                SpectralModelType::ExpCutoff => counts.num_exp_cutoffs += 1,
            }
        }
        counts
    }
}

impl From<Vec<SourceModel>> for SourceLibrary {
    fn from(source_list: Vec<SourceModel>) -> Self {
        Self { source_list }
    }
}

impl Deref for SourceLibrary {
    type Target = Vec<SourceModel>;

    fn deref(&self) -> &Self::Target {
        &self.source_list
    }
}

impl DerefMut for SourceLibrary {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.source_list
    }
}

impl FromIterator<SourceModel> for SourceLibrary {
    fn from_iter<I: IntoIterator<Item = SourceModel>>(iter: I) -> Self {
        Self {
            source_list: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SourceLibrary {
    type Item = SourceModel;
    type IntoIter = std::vec::IntoIter<SourceModel>;

    fn into_iter(self) -> std::vec::IntoIter<SourceModel> {
        self.source_list.into_iter()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceCounts {
    pub num_points: usize,
    pub num_gaussians: usize,
    pub num_shells: usize,
    pub num_power_laws: usize,
    pub num_power_law2s: usize,
    pub num_exp_cutoffs: usize,
}
