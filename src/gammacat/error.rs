// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors associated with reading in a gamma-cat catalog file.
#[derive(Error, Debug)]
pub enum ReadCatalogError {
    #[error("Catalog source {source_name}: Attempted to use GLAT {glat}°, but this is out of range (-90° <= GLAT <= 90°)")]
    InvalidGlat { source_name: String, glat: f64 },

    #[error("Could not deserialise the catalog as yaml or json.\n\nyaml error: {yaml_err}\n\njson error: {json_err}")]
    FailedToDeserialise { yaml_err: String, json_err: String },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
