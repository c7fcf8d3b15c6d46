//! Epicycle chain
//!
//! The chain is rebuilt from scratch every frame: starting at the origin,
//! each harmonic arm is placed at the tip of the previous one. The final
//! position is the chain tip, whose ordinate is the reconstructed wave
//! sample for that phase.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::harmonic::{WaveFamily, BASE_RADIUS};

/// One circle of the chain: where it is anchored, how large it is, and
/// where its rotating arm ends (the anchor of the next circle).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub center: Vec2,
    pub radius: f64,
    pub end: Vec2,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpicycleChain {
    pub placements: Vec<Placement>,
    pub tip: Vec2,
}

impl EpicycleChain {
    /// Build the chain for the first `harmonic_count` terms of `family`.
    ///
    /// # Panics
    ///
    /// Panics if `harmonic_count` is zero. Callers are expected to keep the
    /// count at or above one.
    pub fn compute(family: WaveFamily, harmonic_count: usize, phase: f64) -> Self {
        Self::compute_with_radius(family, harmonic_count, phase, BASE_RADIUS)
    }

    pub fn compute_with_radius(
        family: WaveFamily,
        harmonic_count: usize,
        phase: f64,
        base_radius: f64,
    ) -> Self {
        assert!(harmonic_count >= 1, "epicycle chain needs at least one harmonic");

        let mut pos = Vec2::ORIGIN;
        let mut placements = Vec::with_capacity(harmonic_count);
        for i in 0..harmonic_count {
            let center = pos;
            let term = family.term_with_radius(i, phase, base_radius);
            pos += term.displacement();
            placements.push(Placement {
                center,
                radius: term.radius,
                end: pos,
            });
        }

        Self { placements, tip: pos }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Displacement contributed by each arm, recovered from the placements.
    pub fn displacements(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.placements.iter().map(|p| p.end - p.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_square_arm() {
        let chain = EpicycleChain::compute(WaveFamily::Square, 1, 0.0);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.placements[0].center, Vec2::ORIGIN);
        assert_eq!(chain.placements[0].end, chain.tip);
    }

    #[test]
    #[should_panic(expected = "at least one harmonic")]
    fn zero_harmonics_is_rejected() {
        let _ = EpicycleChain::compute(WaveFamily::Sawtooth, 0, 1.0);
    }
}
