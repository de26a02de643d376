use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use vowelspace::api::{CenterMethod, VowelSpaceCenter, VowelSpaceError};

/// Port failures are runtime errors; everything else is a bad argument.
pub fn map_err(err: VowelSpaceError) -> PyErr {
    match err {
        VowelSpaceError::ExternalComputation { .. } => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

pub fn parse_method(method: &str) -> PyResult<CenterMethod> {
    method.parse().map_err(map_err)
}

/// `center` given as `(f1c, f2c)`, or computed from the cloud with `method`.
pub fn resolve_center(
    f1: &[f64],
    f2: &[f64],
    center: Option<(f64, f64)>,
    method: &str,
) -> PyResult<VowelSpaceCenter> {
    match center {
        Some((f1c, f2c)) => Ok(VowelSpaceCenter::new(f1c, f2c)),
        None => vowelspace::api::vowel_space_center(f1, f2, parse_method(method)?, true)
            .map_err(map_err),
    }
}
