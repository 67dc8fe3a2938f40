// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{info, trace};

use super::{SourceLibrary, WriteSourceLibraryError};

pub(crate) fn write_source_library<P: AsRef<Path>>(
    path: P,
    library: &SourceLibrary,
    title: Option<&str>,
    header: Option<&str>,
) -> Result<(), WriteSourceLibraryError> {
    let path = path.as_ref();
    trace!("Attempting to write output source library");
    let mut f = BufWriter::new(File::create(path)?);
    f.write_all(library.to_xml(title, header).as_bytes())?;
    f.flush()?;
    info!(
        "Wrote {} sources to XML source library {}",
        library.len(),
        path.display()
    );

    Ok(())
}
