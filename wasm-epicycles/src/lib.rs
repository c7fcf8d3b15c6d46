//! Epicycle simulation for browser front-ends
//!
//! WebAssembly bindings to epicycle_core. The page owns the canvas and
//! the buttons; it forwards clicks as commands, calls `tick()` from its
//! animation frame callback and draws from the returned snapshot.

use wasm_bindgen::prelude::*;
use js_sys::Array;
use serde::Serialize;
use epicycle_core::controller::{
    Command,
    SimulationParams,
    SimulationState,
    INITIAL_HARMONICS,
    PHASE_STEP,
    TARGET_FPS,
};
use epicycle_core::geometry::Vec2;
use epicycle_core::harmonic::{
    sawtooth_with_radius,
    square_with_radius,
    HarmonicTerm as RustHarmonicTerm,
    WaveFamily,
    BASE_RADIUS,
};
use epicycle_core::history::HISTORY_CAPACITY;
use epicycle_core::EpicycleError;

fn to_js_error(err: EpicycleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Serialise to a plain JS object. Flattened structs go through serde's map
/// path, which would otherwise come out as an ES `Map`.
fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer)
}

/// Shared constants exposed to JavaScript
#[wasm_bindgen]
pub fn constants() -> JsValue {
    #[derive(Serialize)]
    struct Constants {
        base_radius: f64,
        phase_step: f64,
        history_capacity: usize,
        initial_harmonics: usize,
        target_fps: u32,
    }

    let c = Constants {
        base_radius: BASE_RADIUS,
        phase_step: PHASE_STEP,
        history_capacity: HISTORY_CAPACITY,
        initial_harmonics: INITIAL_HARMONICS,
        target_fps: TARGET_FPS,
    };

    to_js_object(&c).unwrap_or_else(|_| JsValue::NULL)
}

/// World-space point for JavaScript
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// One harmonic arm for JavaScript
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct HarmonicTerm {
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
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

#[wasm_bindgen]
pub fn square_term(index: usize, phase: f64) -> HarmonicTerm {
    square_with_radius(index, phase, BASE_RADIUS).into()
}

#[wasm_bindgen]
pub fn sawtooth_term(index: usize, phase: f64) -> HarmonicTerm {
    sawtooth_with_radius(index, phase, BASE_RADIUS).into()
}

/// Simulation wrapper for WASM
#[wasm_bindgen]
pub struct Simulation {
    inner: SimulationState,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Simulation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Simulation {
        Simulation {
            inner: SimulationState::new(),
        }
    }

    /// Create a simulation from a JSON parameter object.
    #[wasm_bindgen]
    pub fn with_params(params_json: &str) -> Result<Simulation, JsValue> {
        let params = SimulationParams::from_json(params_json).map_err(to_js_error)?;
        let inner = SimulationState::with_params(params).map_err(to_js_error)?;
        Ok(Simulation { inner })
    }

    /// Advance one frame.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.inner.tick();
    }

    #[wasm_bindgen]
    pub fn increase_harmonics(&mut self) {
        self.inner.increase_harmonics();
    }

    #[wasm_bindgen]
    pub fn decrease_harmonics(&mut self) {
        self.inner.decrease_harmonics();
    }

    #[wasm_bindgen]
    pub fn select_family(&mut self, family: &str) -> Result<(), JsValue> {
        let family = family.parse::<WaveFamily>().map_err(to_js_error)?;
        self.inner.select_family(family);
        Ok(())
    }

    /// Apply a text command ("up", "down", "square", "sawtooth").
    #[wasm_bindgen]
    pub fn apply(&mut self, command: &str) -> Result<(), JsValue> {
        let command = command.parse::<Command>().map_err(to_js_error)?;
        self.inner.apply(command);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn harmonic_count(&self) -> usize {
        self.inner.harmonic_count()
    }

    #[wasm_bindgen(getter)]
    pub fn family(&self) -> String {
        self.inner.family().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> f64 {
        self.inner.phase()
    }

    #[wasm_bindgen(getter)]
    pub fn tip(&self) -> Point {
        self.inner.tip().into()
    }

    /// Flat placement buffer: `[cx, cy, radius, ex, ey]` per arm.
    #[wasm_bindgen]
    pub fn placements(&self) -> Vec<f64> {
        let chain = self.inner.chain();
        let mut out = Vec::with_capacity(chain.len() * 5);
        for p in &chain.placements {
            out.extend_from_slice(&[p.center.x, p.center.y, p.radius, p.end.x, p.end.y]);
        }
        out
    }

    /// Trace samples, newest first.
    #[wasm_bindgen]
    pub fn trace(&self) -> Array {
        let out = Array::new();
        for v in self.inner.history().recent(HISTORY_CAPACITY) {
            out.push(&JsValue::from_f64(v));
        }
        out
    }

    /// Full snapshot as a plain JS object.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_object(&self.inner.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
