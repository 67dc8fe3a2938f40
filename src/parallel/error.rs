// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParallelError {
    #[error("Invalid method: {method}, valid methods are: {valid}")]
    UnknownMethod { method: String, valid: String },

    #[error("Couldn't make a thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
