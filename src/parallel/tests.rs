// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serial_test::serial;

use super::*;

fn square(x: &i64) -> i64 {
    x * x
}

#[test]
fn test_results_are_ordered() {
    let inputs: Vec<i64> = (0..200).collect();
    let expected: Vec<i64> = inputs.iter().map(square).collect();
    for backend in ParallelBackend::iter() {
        for method in ParallelMethod::iter() {
            let method = method.to_string();
            for num_threads in [None, Some(1), Some(3)] {
                let result = run_parallel(
                    square,
                    &inputs,
                    Some(method.as_str()),
                    &PoolArgs { num_threads },
                    Some(backend),
                );
                assert!(result.is_ok(), "{}", result.unwrap_err());
                assert_eq!(result.unwrap(), expected, "{backend} {method} {num_threads:?}");
            }
        }
    }
}

#[test]
fn test_no_inputs() {
    let result = run_parallel(square, &[], None, &PoolArgs::default(), None);
    assert!(result.is_ok(), "{}", result.unwrap_err());
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_wrong_method() {
    for backend in ParallelBackend::iter() {
        let result = run_parallel(
            square,
            &[1, 2],
            Some("wrong_name"),
            &PoolArgs {
                num_threads: Some(2),
            },
            Some(backend),
        );
        match result {
            Err(ParallelError::UnknownMethod { method, valid }) => {
                assert_eq!(method, "wrong_name");
                assert_eq!(valid, "starmap, apply_async");
            }
            _ => panic!("Expected an unknown method error, got {result:?}"),
        }
    }
}

#[test]
fn test_backend_from_str() {
    assert_eq!(ParallelBackend::from_str("serial"), Ok(ParallelBackend::Serial));
    assert_eq!(ParallelBackend::from_str("rayon"), Ok(ParallelBackend::Rayon));
    assert!(ParallelBackend::from_str("multiprocessing").is_err());
    assert_eq!(*PARALLEL_BACKENDS_COMMA_SEPARATED, "serial, rayon");
}

#[test]
#[serial]
fn test_global_backend() {
    assert_eq!(get_parallel_backend(), ParallelBackend::Rayon);

    set_parallel_backend(ParallelBackend::Serial);
    assert_eq!(get_parallel_backend(), ParallelBackend::Serial);
    // The global backend is used when none is given.
    let result = run_parallel(
        |_: &u8| std::thread::current().id(),
        &[0; 8],
        Some("apply_async"),
        &PoolArgs::default(),
        None,
    );
    let this_thread = std::thread::current().id();
    assert!(result.unwrap().into_iter().all(|id| id == this_thread));

    set_parallel_backend(ParallelBackend::Rayon);
    assert_eq!(get_parallel_backend(), ParallelBackend::Rayon);
}
