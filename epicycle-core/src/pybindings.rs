//! Python bindings for epicycle-core
//!
//! Exposes the simulation to a Python render loop (e.g. pygame). The
//! front-end owns the window, input polling and drawing; it calls the
//! command methods on input, `tick()` once per frame and reads back the
//! chain and trace.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::chain::Placement as RustPlacement;
use crate::controller::{
    Command,
    SimulationParams,
    SimulationState,
    INITIAL_HARMONICS,
    PHASE_STEP,
    TARGET_FPS,
};
use crate::error::EpicycleError;
use crate::geometry::Vec2;
use crate::harmonic::{
    sawtooth_with_radius,
    square_with_radius,
    HarmonicTerm as RustHarmonicTerm,
    WaveFamily,
    BASE_RADIUS,
};
use crate::history::HISTORY_CAPACITY;

impl From<EpicycleError> for PyErr {
    fn from(err: EpicycleError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// World-space point exposed to Python.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Point {
    #[pyo3(get)]
    pub x: f64,
    #[pyo3(get)]
    pub y: f64,
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct Placement {
    #[pyo3(get)]
    pub center: Point,
    #[pyo3(get)]
    pub radius: f64,
    #[pyo3(get)]
    pub end: Point,
}

impl From<&RustPlacement> for Placement {
    fn from(p: &RustPlacement) -> Self {
        Self {
            center: p.center.into(),
            radius: p.radius,
            end: p.end.into(),
        }
    }
}

#[pyclass]
#[derive(Clone, Debug)]
pub struct HarmonicTerm {
    #[pyo3(get)]
    pub dx: f64,
    #[pyo3(get)]
    pub dy: f64,
    #[pyo3(get)]
    pub radius: f64,
    #[pyo3(get)]
    pub signed_radius: f64,
}

impl From<RustHarmonicTerm> for HarmonicTerm {
    fn from(t: RustHarmonicTerm) -> Self {
        Self {
            dx: t.dx,
            dy: t.dy,
            radius: t.radius,
            signed_radius: t.signed_radius,
        }
    }
}

/// Python wrapper for the simulation state.
#[pyclass]
pub struct Simulation {
    inner: SimulationState,
}

#[pymethods]
impl Simulation {
    /// Create a simulation, optionally from a JSON parameter object.
    #[new]
    #[pyo3(signature = (params_json=None))]
    fn py_new(params_json: Option<&str>) -> PyResult<Self> {
        let inner = match params_json {
            Some(json) => SimulationState::with_params(SimulationParams::from_json(json)?)?,
            None => SimulationState::new(),
        };
        Ok(Self { inner })
    }

    fn tick(&mut self) {
        self.inner.tick();
    }

    fn increase_harmonics(&mut self) {
        self.inner.increase_harmonics();
    }

    fn decrease_harmonics(&mut self) {
        self.inner.decrease_harmonics();
    }

    /// Select "square" or "sawtooth".
    fn select_family(&mut self, family: &str) -> PyResult<()> {
        self.inner.select_family(family.parse::<WaveFamily>()?);
        Ok(())
    }

    /// Apply a text command ("up", "down", "square", "sawtooth").
    fn apply(&mut self, command: &str) -> PyResult<()> {
        self.inner.apply(command.parse::<Command>()?);
        Ok(())
    }

    #[getter]
    fn harmonic_count(&self) -> usize {
        self.inner.harmonic_count()
    }

    #[getter]
    fn family(&self) -> &'static str {
        self.inner.family().name()
    }

    #[getter]
    fn phase(&self) -> f64 {
        self.inner.phase()
    }

    #[getter]
    fn tip(&self) -> Point {
        self.inner.tip().into()
    }

    #[getter]
    fn placements(&self) -> Vec<Placement> {
        self.inner.chain().placements.iter().map(Placement::from).collect()
    }

    /// Trace samples, newest first.
    #[getter]
    fn trace(&self) -> Vec<f64> {
        self.inner.history().recent(HISTORY_CAPACITY).collect()
    }

    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.snapshot())
            .map_err(|e| EpicycleError::from(e).into())
    }
}

#[pyfunction]
#[pyo3(signature = (index, phase, base_radius=BASE_RADIUS))]
fn square_term(index: usize, phase: f64, base_radius: f64) -> HarmonicTerm {
    square_with_radius(index, phase, base_radius).into()
}

#[pyfunction]
#[pyo3(signature = (index, phase, base_radius=BASE_RADIUS))]
fn sawtooth_term(index: usize, phase: f64, base_radius: f64) -> HarmonicTerm {
    sawtooth_with_radius(index, phase, base_radius).into()
}

#[pymodule]
fn epicycle_core(_py: Python, m: &PyModule) -> PyResult<()> {
    // Shared constants
    m.add("BASE_RADIUS", BASE_RADIUS)?;
    m.add("PHASE_STEP", PHASE_STEP)?;
    m.add("HISTORY_CAPACITY", HISTORY_CAPACITY)?;
    m.add("INITIAL_HARMONICS", INITIAL_HARMONICS)?;
    m.add("TARGET_FPS", TARGET_FPS)?;

    m.add_class::<Point>()?;
    m.add_class::<Placement>()?;
    m.add_class::<HarmonicTerm>()?;
    m.add_class::<Simulation>()?;
    m.add_function(wrap_pyfunction!(square_term, m)?)?;
    m.add_function(wrap_pyfunction!(sawtooth_term, m)?)?;
    Ok(())
}
