//! Fourier epicycle core
//!
//! This crate holds the numerical side of the epicycle animator: a chain
//! of rotating arms whose tip traces a Fourier approximation of a square
//! or sawtooth wave.
//!
//! 1. **Harmonics** – closed-form terms for the two supported series.
//! 2. **Chain** – arms placed tip-to-tail for the first N terms at the
//!    current phase.
//! 3. **History** – a bounded trace of past tip ordinates.
//! 4. **Controller** – the per-frame simulation state and the commands a
//!    front-end sends it.
//! 5. **Clock** – frame counting and JSON/NDJSON snapshot streaming for
//!    out-of-process renderers.
//!
//! Windowing, input polling and drawing live in the front-end. Python
//! bindings (pyo3) are compiled in with the `python` feature; the browser
//! bindings live in the `wasm-epicycles` crate.

pub mod error;
pub mod geometry;
pub mod harmonic;
pub mod chain;
pub mod history;
pub mod controller;
pub mod clock;

pub use chain::{EpicycleChain, Placement};
pub use controller::{Command, SimulationParams, SimulationState, Snapshot};
pub use error::EpicycleError;
pub use harmonic::{HarmonicTerm, WaveFamily};
pub use history::{WaveHistory, HISTORY_CAPACITY};

// Conditional bindings.  Only compile the Python API if the feature flag
// has been enabled.

#[cfg(feature = "python")]
pub mod pybindings;
