// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Running a function over many inputs, either serially or on a thread pool.
//!
//! The backend used by default is a process-wide setting; see
//! [`set_parallel_backend`].

mod error;
#[cfg(test)]
mod tests;

pub use error::ParallelError;

use std::str::FromStr;

use crossbeam_utils::atomic::AtomicCell;
use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The backend used when none is given to [`run_parallel`].
static PARALLEL_BACKEND: AtomicCell<ParallelBackend> = AtomicCell::new(ParallelBackend::Rayon);

lazy_static::lazy_static! {
    pub static ref PARALLEL_BACKENDS_COMMA_SEPARATED: String = ParallelBackend::iter().join(", ");

    pub static ref PARALLEL_METHODS_COMMA_SEPARATED: String = ParallelMethod::iter().join(", ");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum ParallelBackend {
    /// Everything runs in order on the current thread.
    #[strum(serialize = "serial")]
    Serial,

    /// Work is spread over a rayon thread pool.
    #[strum(serialize = "rayon")]
    Rayon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum ParallelMethod {
    /// An ordered parallel map over the inputs.
    #[strum(serialize = "starmap")]
    Starmap,

    /// One task is spawned per input; results are gathered in input order.
    #[strum(serialize = "apply_async")]
    ApplyAsync,
}

/// Settings for the thread pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolArgs {
    /// The number of threads in the pool. `None` lets rayon decide.
    pub num_threads: Option<usize>,
}

pub fn set_parallel_backend(backend: ParallelBackend) {
    debug!("Setting the parallel backend to {backend}");
    PARALLEL_BACKEND.store(backend);
}

pub fn get_parallel_backend() -> ParallelBackend {
    PARALLEL_BACKEND.load()
}

/// Call `func` on every input, returning the results in the same order as the
/// inputs.
///
/// `method` is the name of a [`ParallelMethod`], and defaults to "starmap".
/// It's checked even if the work ends up running serially. If `backend` isn't
/// given, the process-wide backend is used. A pool of a single thread runs
/// serially.
pub fn run_parallel<I, R, F>(
    func: F,
    inputs: &[I],
    method: Option<&str>,
    pool_args: &PoolArgs,
    backend: Option<ParallelBackend>,
) -> Result<Vec<R>, ParallelError>
where
    I: Sync,
    R: Send,
    F: Fn(&I) -> R + Sync + Send,
{
    let method = match method {
        None => ParallelMethod::Starmap,
        Some(m) => {
            ParallelMethod::from_str(m).map_err(|_| ParallelError::UnknownMethod {
                method: m.to_string(),
                valid: PARALLEL_METHODS_COMMA_SEPARATED.clone(),
            })?
        }
    };
    let backend = backend.unwrap_or_else(get_parallel_backend);

    if backend == ParallelBackend::Serial || pool_args.num_threads == Some(1) {
        trace!("Running {} inputs serially", inputs.len());
        return Ok(inputs.iter().map(func).collect());
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = pool_args.num_threads {
        builder = builder.num_threads(num_threads);
    }
    let pool = builder.build()?;
    trace!(
        "Running {} inputs with {method} on {} threads",
        inputs.len(),
        pool.current_num_threads()
    );

    let results: Vec<R> = match method {
        ParallelMethod::Starmap => pool.install(|| inputs.par_iter().map(&func).collect()),

        ParallelMethod::ApplyAsync => {
            let mut slots: Vec<Option<R>> = inputs.iter().map(|_| None).collect();
            pool.scope(|s| {
                for (input, slot) in inputs.iter().zip(slots.iter_mut()) {
                    let func = &func;
                    s.spawn(move |_| *slot = Some(func(input)));
                }
            });
            // Every task has finished by the end of the scope.
            slots.into_iter().flatten().collect()
        }
    };
    Ok(results)
}
