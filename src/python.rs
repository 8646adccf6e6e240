//! Python bindings.
//!
//! Each call builds its own generator from `seed`, so seeded calls from
//! Python never interfere with each other.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::pricing;
use crate::sampling;
use crate::types::{GbmParams, PathSample, PricingError, Seed};

fn to_py_err(e: PricingError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Simulate terminal prices.
#[pyfunction]
#[pyo3(signature = (s0, r, sigma, t, n_sim, seed = None))]
fn terminal_sample(s0: f64, r: f64, sigma: f64, t: f64, n_sim: usize, seed: Option<u64>) -> Vec<f64> {
    let params = GbmParams::new(s0, r, sigma, t);
    sampling::terminal_sample(&params, n_sim, &mut Seed::from(seed).rng())
}

/// Simulate full paths; returns n_sim lists of n_steps + 1 prices.
#[pyfunction]
#[pyo3(signature = (s0, r, sigma, t, n_steps, n_sim, seed = None))]
fn path_sample(
    s0: f64,
    r: f64,
    sigma: f64,
    t: f64,
    n_steps: usize,
    n_sim: usize,
    seed: Option<u64>,
) -> PyResult<Vec<Vec<f64>>> {
    let params = GbmParams::new(s0, r, sigma, t);
    let paths = sampling::path_sample(&params, n_steps, n_sim, &mut Seed::from(seed).rng())
        .map_err(to_py_err)?;
    Ok(paths.to_rows())
}

#[pyfunction]
#[pyo3(signature = (s0, k, r, sigma, t, n_sim = 10_000, seed = None))]
fn price_european_call(s0: f64, k: f64, r: f64, sigma: f64, t: f64, n_sim: usize, seed: Option<u64>) -> f64 {
    let params = GbmParams::new(s0, r, sigma, t);
    pricing::price_european_call(&params, k, n_sim, &mut Seed::from(seed).rng())
}

#[pyfunction]
#[pyo3(signature = (s0, k, r, sigma, t, n_sim = 10_000, seed = None))]
fn price_european_put(s0: f64, k: f64, r: f64, sigma: f64, t: f64, n_sim: usize, seed: Option<u64>) -> f64 {
    let params = GbmParams::new(s0, r, sigma, t);
    pricing::price_european_put(&params, k, n_sim, &mut Seed::from(seed).rng())
}

#[pyfunction]
fn price_asian_call(paths: Vec<Vec<f64>>, k: f64, r: f64, t: f64) -> PyResult<f64> {
    let paths = PathSample::from_rows(&paths).map_err(to_py_err)?;
    Ok(pricing::price_asian_call(&paths, k, r, t))
}

#[pyfunction]
fn price_asian_put(paths: Vec<Vec<f64>>, k: f64, r: f64, t: f64) -> PyResult<f64> {
    let paths = PathSample::from_rows(&paths).map_err(to_py_err)?;
    Ok(pricing::price_asian_put(&paths, k, r, t))
}

/// Python module definition
#[pymodule]
fn gbm_mc_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(terminal_sample, m)?)?;
    m.add_function(wrap_pyfunction!(path_sample, m)?)?;
    m.add_function(wrap_pyfunction!(price_european_call, m)?)?;
    m.add_function(wrap_pyfunction!(price_european_put, m)?)?;
    m.add_function(wrap_pyfunction!(price_asian_call, m)?)?;
    m.add_function(wrap_pyfunction!(price_asian_put, m)?)?;
    Ok(())
}
