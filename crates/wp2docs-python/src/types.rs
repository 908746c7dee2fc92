//! Conversions between wp2docs values and Python objects.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use serde_json::Value;
use wp2docs::{AppError, Document, ItemId};

create_exception!(_wp2docs, RemoteRequestError, PyException);
create_exception!(_wp2docs, MalformedItemError, PyException);

/// Maps a reader failure onto the matching Python exception.
pub fn to_py_err(err: AppError) -> PyErr {
    match err {
        AppError::RemoteRequest(e) => RemoteRequestError::new_err(e.to_string()),
        AppError::MalformedItem(e) => MalformedItemError::new_err(e.to_string()),
        AppError::Validation(e) => PyValueError::new_err(e.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// `{"text": ..., "extra_info": {"id", "title", "url", "updated_at"}}`
pub fn document_to_dict<'py>(py: Python<'py>, doc: &Document) -> PyResult<Bound<'py, PyDict>> {
    let extra_info = PyDict::new(py);
    match &doc.extra_info.id {
        ItemId::Number(n) => extra_info.set_item("id", *n)?,
        ItemId::Text(s) => extra_info.set_item("id", s)?,
        ItemId::Other(Value::Null) => extra_info.set_item("id", py.None())?,
        ItemId::Other(Value::Number(n)) => extra_info.set_item("id", n.as_f64())?,
        ItemId::Other(other) => extra_info.set_item("id", other.to_string())?,
    }
    extra_info.set_item("title", &doc.extra_info.title)?;
    extra_info.set_item("url", &doc.extra_info.url)?;
    extra_info.set_item("updated_at", &doc.extra_info.updated_at)?;

    let dict = PyDict::new(py);
    dict.set_item("text", &doc.text)?;
    dict.set_item("extra_info", extra_info)?;
    Ok(dict)
}

pub fn documents_to_list<'py>(py: Python<'py>, docs: &[Document]) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for doc in docs {
        list.append(document_to_dict(py, doc)?)?;
    }
    Ok(list)
}
