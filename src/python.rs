//! Python bindings for the settings model
//!
//! Enabled with the `python` feature; wheels are built with
//! `extension-module` on top. A scripting host can hold a
//! `Settings` object, edit it, and persist it through the JSON tree form.

use pyo3::prelude::*;

use crate::config::{Settings, SettingsNode};
use crate::validation::add_lookup_row;

/// Python-facing wrapper around [`Settings`]
#[pyclass(name = "Settings")]
#[derive(Clone)]
pub struct PySettings {
    inner: Settings,
}

#[pymethods]
impl PySettings {
    /// Sonic 2 defaults
    #[new]
    fn new() -> Self {
        Self {
            inner: Settings::new(),
        }
    }

    #[getter]
    fn points_per_frame(&self) -> i32 {
        self.inner.points_per_frame()
    }

    #[setter]
    fn set_points_per_frame(&mut self, value: i32) -> PyResult<()> {
        self.inner.set_points_per_frame(value)?;
        Ok(())
    }

    #[getter]
    fn frames_per_second(&self) -> f64 {
        self.inner.frames_per_second()
    }

    #[setter]
    fn set_frames_per_second(&mut self, value: f64) -> PyResult<()> {
        self.inner.set_frames_per_second(value)?;
        Ok(())
    }

    #[getter]
    fn continue_frames(&self) -> i32 {
        self.inner.continue_frames()
    }

    #[setter]
    fn set_continue_frames(&mut self, value: i32) -> PyResult<()> {
        self.inner.set_continue_frames(value)?;
        Ok(())
    }

    /// Validate typed text and add a row; returns the stored (ms, points)
    fn add_row(&mut self, max_time: &str, points: &str) -> PyResult<(i32, i32)> {
        let entry = add_lookup_row(self.inner.lookup_mut(), max_time, points)?;
        Ok((entry.max_time_ms, entry.points))
    }

    fn add_entry(&mut self, max_time_ms: i32, points: i32) -> PyResult<()> {
        self.inner.lookup_mut().add(max_time_ms, points)?;
        Ok(())
    }

    fn remove_row(&mut self, max_time_ms: i32) -> Option<i32> {
        self.inner.lookup_mut().remove(max_time_ms)
    }

    fn clear_rows(&mut self) {
        self.inner.lookup_mut().clear();
    }

    /// Rows as [(max_time_ms, points)], ascending
    fn rows(&self) -> Vec<(i32, i32)> {
        self.inner
            .lookup()
            .entries()
            .map(|e| (e.max_time_ms, e.points))
            .collect()
    }

    fn bonus_for(&self, elapsed_ms: i32) -> i32 {
        self.inner.lookup().bonus_for(elapsed_ms)
    }

    /// Tally time in seconds for a level finished at `level_time_ms`
    fn bonus_tally_seconds(&self, level_time_ms: i32) -> f64 {
        self.inner.bonus_tally(level_time_ms).as_secs_f64()
    }

    fn hash_code(&self) -> i32 {
        self.inner.hash_code()
    }

    fn to_json(&self) -> PyResult<String> {
        Ok(self.inner.to_node().to_json()?)
    }

    /// Apply a saved JSON tree on top of the current values
    fn load_json(&mut self, json: &str) -> PyResult<()> {
        let node = SettingsNode::from_json(json)?;
        self.inner.load(&node);
        Ok(())
    }

    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let node = SettingsNode::from_json(json)?;
        Ok(Self {
            inner: Settings::from_node(&node),
        })
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "Settings(points_per_frame={}, frames_per_second={}, continue_frames={}, rows={})",
            self.inner.points_per_frame(),
            self.inner.frames_per_second(),
            self.inner.continue_frames(),
            self.inner.lookup().len()
        )
    }
}

/// Python module definition
#[pymodule]
fn rtatb_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySettings>()?;
    Ok(())
}
