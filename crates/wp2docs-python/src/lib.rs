//! Python bindings for wp2docs via PyO3.
//!
//! Exposes `WordpressReader`, whose `load_data()` returns a list of
//! `{"text": ..., "extra_info": {...}}` dicts.

use pyo3::prelude::*;

mod reader;
mod types;

/// The main Python module: `wp2docs._wp2docs`
#[pymodule]
fn _wp2docs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<reader::PyWordpressReader>()?;

    m.add("RemoteRequestError", m.py().get_type::<types::RemoteRequestError>())?;
    m.add("MalformedItemError", m.py().get_type::<types::MalformedItemError>())?;

    Ok(())
}
