//! Frame clock and snapshot stream.
//!
//! The frame clock counts render frames and ticks the simulation exactly
//! once per frame. The stream wrapper serialises each frame's snapshot so
//! an out-of-process renderer can consume it as JSON or NDJSON.

use serde::{Deserialize, Serialize};

use crate::controller::{Command, SimulationParams, SimulationState, Snapshot};
use crate::error::Result;

/// Snapshot tagged with the frame that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

pub struct FrameClock {
    frame: u64,
    sim: SimulationState,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::from_state(SimulationState::new())
    }

    pub fn with_params(params: SimulationParams) -> Result<Self> {
        Ok(Self::from_state(SimulationState::with_params(params)?))
    }

    pub fn from_state(sim: SimulationState) -> Self {
        Self { frame: 0, sim }
    }

    /// Apply this frame's commands, tick once, and return the frame's view.
    pub fn advance_frame(&mut self, commands: &[Command]) -> FrameSnapshot {
        for &command in commands {
            self.sim.apply(command);
        }
        self.sim.tick();
        self.frame += 1;
        FrameSnapshot {
            frame: self.frame,
            snapshot: self.sim.snapshot(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> &SimulationState {
        &self.sim
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.sim
    }
}

pub struct SnapshotStream {
    clock: FrameClock,
}

impl Default for SnapshotStream {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStream {
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
        }
    }

    pub fn from_clock(clock: FrameClock) -> Self {
        Self { clock }
    }

    pub fn tick(&mut self, commands: &[Command]) -> FrameSnapshot {
        self.clock.advance_frame(commands)
    }

    pub fn tick_json(&mut self, commands: &[Command]) -> Result<String> {
        let snapshot = self.clock.advance_frame(commands);
        Ok(serde_json::to_string(&snapshot)?)
    }

    pub fn tick_ndjson(&mut self, commands: &[Command]) -> Result<String> {
        let mut json = self.tick_json(commands)?;
        json.push('\n');
        Ok(json)
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
