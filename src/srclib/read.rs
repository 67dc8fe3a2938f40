// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for reading XML source library files.

use std::path::Path;

use log::{debug, trace};

use super::{ReadSourceLibraryError, SourceLibrary};

/// Given the path to an XML source library, return a [`SourceLibrary`]. The
/// whole file is read before parsing.
pub(crate) fn read_source_library_file<P: AsRef<Path>>(
    path: P,
) -> Result<SourceLibrary, ReadSourceLibraryError> {
    fn inner(path: &Path) -> Result<SourceLibrary, ReadSourceLibraryError> {
        debug!("Attempting to read source library {}", path.display());
        let xml = std::fs::read_to_string(path)?;
        let library = SourceLibrary::from_xml(&xml)?;
        trace!("Read {} sources", library.len());
        Ok(library)
    }
    inner(path.as_ref())
}
