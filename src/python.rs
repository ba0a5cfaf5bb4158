//! Python bindings for tire-kit using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::MaterialParseError;
use crate::format;
use crate::generator;
use crate::model;
use crate::model::Material;
use crate::model::Size;
use crate::model::Tire;

/// Convert MaterialParseError to PyErr
impl From<MaterialParseError> for PyErr {
    fn from(err: MaterialParseError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymethods]
impl Material {
    /// Parse a material name, ignoring case.
    ///
    /// Raises:
    ///     ValueError: If the name is not a known material
    #[staticmethod]
    #[pyo3(name = "parse")]
    fn py_parse(name: &str) -> PyResult<Self> {
        Ok(name.parse()?)
    }

    fn __str__(&self) -> &'static str {
        self.as_str()
    }
}

/// Width and height of a tire
#[pyclass(name = "Size", frozen)]
pub struct PySize {
    inner: Size,
}

#[pymethods]
impl PySize {
    #[getter]
    fn width(&self) -> f64 {
        self.inner.width
    }

    #[getter]
    fn height(&self) -> f64 {
        self.inner.height
    }

    /// Height as a percentage of width
    fn aspect_ratio(&self) -> f64 {
        self.inner.aspect_ratio()
    }

    fn __repr__(&self) -> String {
        format!(
            "Size(width={:.2}, height={:.2})",
            self.inner.width, self.inner.height
        )
    }
}

/// A single tire
#[pyclass(name = "Tire", frozen)]
pub struct PyTire {
    inner: Tire,
}

#[pymethods]
impl PyTire {
    #[getter]
    fn pressure(&self) -> f64 {
        self.inner.pressure
    }

    #[getter]
    fn material(&self) -> Material {
        self.inner.material
    }

    #[getter]
    fn size(&self) -> PySize {
        PySize {
            inner: self.inner.size,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Tire(material={}, pressure={:.2}, size=Size(width={:.2}, height={:.2}))",
            self.inner.material,
            self.inner.pressure,
            self.inner.size.width,
            self.inner.size.height
        )
    }
}

/// Create a tire with random pressure, material and size
#[pyfunction]
fn create_random_tire() -> PyTire {
    PyTire {
        inner: generator::create_random_tire(),
    }
}

/// Render wheel identifiers in input order.
///
/// Args:
///     ids: List of integer wheel identifiers
#[pyfunction]
fn format_wheel_identifier(ids: Vec<i64>) -> String {
    format::format_wheel_identifier(&ids)
}

/// Render wheel identifiers along with the wheel layout their count implies.
///
/// Args:
///     ids: List of integer wheel identifiers
#[pyfunction]
fn format_size_of_wheels(ids: Vec<i64>) -> String {
    format::format_size_of_wheels(&ids)
}

/// Does nothing and returns None
#[pyfunction]
fn func_with_no_return() {
    crate::func_with_no_return();
}

/// Aspect ratio of a wheel as height / width * 100
#[pyfunction]
fn wheel_size_aspect(height: f64, width: f64) -> f64 {
    model::wheel_size_aspect(height, width)
}

/// tire_kit: tire value model and wheel formatting helpers
#[pymodule]
fn tire_kit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Material>()?;
    m.add_class::<PySize>()?;
    m.add_class::<PyTire>()?;
    m.add_function(wrap_pyfunction!(create_random_tire, m)?)?;
    m.add_function(wrap_pyfunction!(format_wheel_identifier, m)?)?;
    m.add_function(wrap_pyfunction!(format_size_of_wheels, m)?)?;
    m.add_function(wrap_pyfunction!(func_with_no_return, m)?)?;
    m.add_function(wrap_pyfunction!(wheel_size_aspect, m)?)?;
    Ok(())
}
