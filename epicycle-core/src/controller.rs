//! Simulation state and per-frame update
//!
//! [`SimulationState`] owns everything that changes from frame to frame:
//! the running phase, the number of harmonics in the chain, the active
//! wave family, the chain itself and the trace history. A front-end calls
//! the command methods in response to input and [`SimulationState::tick`]
//! once per rendered frame, then reads a [`Snapshot`] to draw.
//!
//! One tick advances the phase by a fixed step regardless of wall-clock
//! time, so the animation speed follows the render loop's frame rate.
//! Switching family or harmonic count never clears the trace; the change
//! shows up as a discontinuity at the switch point.

use std::f64::consts::TAU;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::chain::EpicycleChain;
use crate::error::{EpicycleError, Result};
use crate::geometry::Vec2;
use crate::harmonic::{WaveFamily, BASE_RADIUS};
use crate::history::{WaveHistory, HISTORY_CAPACITY};

/// Phase advance per tick (radians).
pub const PHASE_STEP: f64 = 0.05;
/// Harmonic count at start-up; also the floor for decrements.
pub const INITIAL_HARMONICS: usize = 1;
pub const MIN_HARMONICS: usize = 1;
/// Frame rate the reference front-end paces its loop to.
pub const TARGET_FPS: u32 = 60;

/// Tunable simulation parameters. The defaults reproduce the reference
/// animation; front-ends may load overrides from JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Radius of the fundamental before the series coefficient (world units)
    pub base_radius: f64,
    /// Phase advance per tick (radians)
    pub phase_step: f64,
    pub initial_harmonics: usize,
    pub initial_family: WaveFamily,
    /// Reduce phase modulo 2π after each tick. Every term is 2π-periodic,
    /// so this only affects precision on very long runs.
    pub wrap_phase: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            phase_step: PHASE_STEP,
            initial_harmonics: INITIAL_HARMONICS,
            initial_family: WaveFamily::Square,
            wrap_phase: false,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(EpicycleError::InvalidParams(format!(
                "base_radius must be positive and finite, got {}",
                self.base_radius
            )));
        }
        if !self.phase_step.is_finite() || self.phase_step <= 0.0 {
            return Err(EpicycleError::InvalidParams(format!(
                "phase_step must be positive and finite, got {}",
                self.phase_step
            )));
        }
        if self.initial_harmonics < MIN_HARMONICS {
            return Err(EpicycleError::InvalidParams(format!(
                "initial_harmonics must be at least {}, got {}",
                MIN_HARMONICS, self.initial_harmonics
            )));
        }
        Ok(())
    }

    /// Parse and validate parameters from JSON. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: SimulationParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

/// Inbound commands from an input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    IncreaseHarmonics,
    DecreaseHarmonics,
    SelectFamily(WaveFamily),
}

impl FromStr for Command {
    type Err = EpicycleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "increase" | "+" => Ok(Command::IncreaseHarmonics),
            "down" | "decrease" | "-" => Ok(Command::DecreaseHarmonics),
            other => other
                .parse::<WaveFamily>()
                .map(Command::SelectFamily)
                .map_err(|_| EpicycleError::UnknownCommand(s.to_string())),
        }
    }
}

/// Read-only view handed to a renderer each frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub harmonic_count: usize,
    pub family: WaveFamily,
    pub phase: f64,
    #[serde(flatten)]
    pub chain: EpicycleChain,
    /// Trace samples, newest first.
    pub trace: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct SimulationState {
    phase: f64,
    harmonic_count: usize,
    family: WaveFamily,
    chain: EpicycleChain,
    history: WaveHistory,
    params: SimulationParams,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Start-up state: one harmonic, square family, phase zero.
    pub fn new() -> Self {
        Self::from_valid_params(SimulationParams::default())
    }

    pub fn with_params(params: SimulationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_valid_params(params))
    }

    fn from_valid_params(params: SimulationParams) -> Self {
        // Seed the chain at phase zero so a snapshot taken before the first
        // tick already has one placement per harmonic.
        let chain = EpicycleChain::compute_with_radius(
            params.initial_family,
            params.initial_harmonics,
            0.0,
            params.base_radius,
        );
        Self {
            phase: 0.0,
            harmonic_count: params.initial_harmonics,
            family: params.initial_family,
            chain,
            history: WaveHistory::new(),
            params,
        }
    }

    pub fn increase_harmonics(&mut self) {
        self.harmonic_count += 1;
        debug!("harmonic count -> {}", self.harmonic_count);
    }

    pub fn decrease_harmonics(&mut self) {
        if self.harmonic_count > MIN_HARMONICS {
            self.harmonic_count -= 1;
            debug!("harmonic count -> {}", self.harmonic_count);
        }
    }

    /// Switch wave family. Phase and trace carry over unchanged.
    pub fn select_family(&mut self, family: WaveFamily) {
        if self.family != family {
            debug!("wave family {} -> {}", self.family, family);
        }
        self.family = family;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::IncreaseHarmonics => self.increase_harmonics(),
            Command::DecreaseHarmonics => self.decrease_harmonics(),
            Command::SelectFamily(family) => self.select_family(family),
        }
    }

    /// Per-frame update: rebuild the chain at the current phase, record the
    /// tip ordinate, then advance the phase by one step.
    pub fn tick(&mut self) {
        self.chain = EpicycleChain::compute_with_radius(
            self.family,
            self.harmonic_count,
            self.phase,
            self.params.base_radius,
        );
        self.history.append(self.chain.tip.y);
        trace!(
            "tick phase={:.3} n={} tip=({:.3}, {:.3})",
            self.phase,
            self.harmonic_count,
            self.chain.tip.x,
            self.chain.tip.y
        );

        self.phase += self.params.phase_step;
        if self.params.wrap_phase {
            self.phase = self.phase.rem_euclid(TAU);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            harmonic_count: self.harmonic_count,
            family: self.family,
            phase: self.phase,
            chain: self.chain.clone(),
            trace: self.history.recent(HISTORY_CAPACITY).collect(),
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn harmonic_count(&self) -> usize {
        self.harmonic_count
    }

    pub fn family(&self) -> WaveFamily {
        self.family
    }

    pub fn chain(&self) -> &EpicycleChain {
        &self.chain
    }

    pub fn tip(&self) -> Vec2 {
        self.chain.tip
    }

    pub fn history(&self) -> &WaveHistory {
        &self.history
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }
}
