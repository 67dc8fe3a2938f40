// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read in gamma-cat catalog files.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};

use super::{GammaCatSource, ReadCatalogError};

/// Convert a yaml file to a list of [`GammaCatSource`]s.
pub fn catalog_from_yaml<T: BufRead>(buf: &mut T) -> Result<Vec<GammaCatSource>, ReadCatalogError> {
    let catalog: Vec<GammaCatSource> = serde_yaml::from_reader(buf)?;
    check_catalog(&catalog)?;
    Ok(catalog)
}

/// Convert a json file to a list of [`GammaCatSource`]s.
pub fn catalog_from_json<T: BufRead>(buf: &mut T) -> Result<Vec<GammaCatSource>, ReadCatalogError> {
    let catalog: Vec<GammaCatSource> = serde_json::from_reader(buf)?;
    check_catalog(&catalog)?;
    Ok(catalog)
}

/// Complain if we spot something wrong.
fn check_catalog(catalog: &[GammaCatSource]) -> Result<(), ReadCatalogError> {
    for src in catalog {
        let glat = &src.data.glat;
        if glat.unit == "deg" && !(-90.0..=90.0).contains(&glat.value) {
            return Err(ReadCatalogError::InvalidGlat {
                source_name: src.data.common_name.clone(),
                glat: glat.value,
            });
        }
    }
    Ok(())
}

/// Given the path to a gamma-cat catalog file, return all of its sources. The
/// file extension determines whether it's read as yaml or json; if the
/// extension is neither, both are tried.
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<GammaCatSource>, ReadCatalogError> {
    fn inner(path: &Path) -> Result<Vec<GammaCatSource>, ReadCatalogError> {
        debug!("Attempting to read catalog {}", path.display());

        let ext = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some("yaml" | "yml") => {
                debug!("Read as yaml");
                let mut f = BufReader::new(File::open(path)?);
                return catalog_from_yaml(&mut f);
            }
            Some("json") => {
                debug!("Read as json");
                let mut f = BufReader::new(File::open(path)?);
                return catalog_from_json(&mut f);
            }
            _ => (),
        }

        // We're guessing what the format is here.
        let mut f = BufReader::new(File::open(path)?);
        let json_err = match catalog_from_json(&mut f) {
            Ok(c) => return Ok(c),
            Err(e @ ReadCatalogError::Json(_)) => e.to_string(),
            Err(e) => return Err(e),
        };
        trace!("Failed to read catalog as json");
        // Even a failed attempt to read the file alters the buffer. Open it
        // again.
        let mut f = BufReader::new(File::open(path)?);
        let yaml_err = match catalog_from_yaml(&mut f) {
            Ok(c) => return Ok(c),
            Err(e @ ReadCatalogError::Yaml(_)) => e.to_string(),
            Err(e) => return Err(e),
        };
        trace!("Failed to read catalog as yaml");
        Err(ReadCatalogError::FailedToDeserialise { yaml_err, json_err })
    }
    inner(path.as_ref())
}
