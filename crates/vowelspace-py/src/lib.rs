//! PyO3 bindings for the `vowelspace` measures.
//!
//! Notes
//! - Bindings take plain `list[float]` columns (F1, F2 in Hz) and return floats
//!   or lists; NumPy conversion is left to the Python wrapper.
//! - No-result outcomes come back as `nan`, matching the scalar API.

use pyo3::prelude::*;

mod common;
mod measures;

#[pymodule]
fn vowelspace_native(_py: Python, m: &PyModule) -> PyResult<()> {
    measures::register(m)?;
    m.add("__version__", vowelspace::VERSION)?;
    Ok(())
}
