//! Closed-form harmonic series
//!
//! Each wave family maps a harmonic index and the running phase to the
//! displacement of one rotating arm. Chaining the arms of the first N
//! indices approximates the waveform with its first N Fourier terms.
//!
//! * **Square**: odd harmonics only, `n = 2i + 1`, amplitude `4 / (nπ)`.
//! * **Sawtooth**: every harmonic, `n = i + 1`, amplitude `2 / (nπ)` with
//!   the sign flipped on even `n`.
//!
//! Amplitudes are scaled by a base radius (world units).

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EpicycleError;
use crate::geometry::Vec2;

/// Radius of the fundamental before the series coefficient is applied.
pub const BASE_RADIUS: f64 = 50.0;

/// Which harmonic series drives the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveFamily {
    #[default]
    Square,
    Sawtooth,
}

impl WaveFamily {
    pub const ALL: [WaveFamily; 2] = [WaveFamily::Square, WaveFamily::Sawtooth];

    /// Evaluate harmonic `index` at `phase` with the default base radius.
    #[inline]
    pub fn term(self, index: usize, phase: f64) -> HarmonicTerm {
        self.term_with_radius(index, phase, BASE_RADIUS)
    }

    #[inline]
    pub fn term_with_radius(self, index: usize, phase: f64, base_radius: f64) -> HarmonicTerm {
        match self {
            WaveFamily::Square => square_with_radius(index, phase, base_radius),
            WaveFamily::Sawtooth => sawtooth_with_radius(index, phase, base_radius),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveFamily::Square => "square",
            WaveFamily::Sawtooth => "sawtooth",
        }
    }
}

impl fmt::Display for WaveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveFamily {
    type Err = EpicycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(WaveFamily::Square),
            "sawtooth" | "saw" => Ok(WaveFamily::Sawtooth),
            _ => Err(EpicycleError::UnknownFamily(s.to_string())),
        }
    }
}

/// One arm of the chain at a given phase.
///
/// `radius` is always non-negative and is what a renderer should use for
/// the circle. `signed_radius` carries the series sign and is what the
/// displacement was computed from; for the square family the two are equal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarmonicTerm {
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    pub signed_radius: f64,
}

impl HarmonicTerm {
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// Square-wave term `index` at `phase`.
pub fn square(index: usize, phase: f64) -> HarmonicTerm {
    square_with_radius(index, phase, BASE_RADIUS)
}

pub fn square_with_radius(index: usize, phase: f64, base_radius: f64) -> HarmonicTerm {
    let n = (2 * index + 1) as f64;
    let radius = base_radius * (4.0 / (n * PI));
    let d = Vec2::from_polar(radius, n * phase);
    HarmonicTerm {
        dx: d.x,
        dy: d.y,
        radius,
        signed_radius: radius,
    }
}

/// Sawtooth term `index` at `phase`.
pub fn sawtooth(index: usize, phase: f64) -> HarmonicTerm {
    sawtooth_with_radius(index, phase, BASE_RADIUS)
}

pub fn sawtooth_with_radius(index: usize, phase: f64, base_radius: f64) -> HarmonicTerm {
    let k = index + 1;
    let n = k as f64;
    let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
    let signed_radius = base_radius * (2.0 / (n * PI * sign));
    // The sign only flips the arm; the drawn circle uses the magnitude.
    let d = Vec2::from_polar(signed_radius, n * phase);
    HarmonicTerm {
        dx: d.x,
        dy: d.y,
        radius: signed_radius.abs(),
        signed_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_fundamental_at_zero_phase() {
        let t = square(0, 0.0);
        let expected = 50.0 * 4.0 / PI;
        assert!((t.radius - expected).abs() < 1e-12);
        assert!((t.dx - expected).abs() < 1e-12);
        assert!(t.dy.abs() < 1e-12);
    }

    #[test]
    fn sawtooth_second_harmonic_points_backwards() {
        let t = sawtooth(1, 0.0);
        assert!(t.signed_radius < 0.0);
        assert!(t.radius > 0.0);
        assert!(t.dx < 0.0);
        assert!((t.radius - 50.0 / PI).abs() < 1e-12);
    }

    #[test]
    fn family_parses_aliases() {
        assert_eq!("Square".parse::<WaveFamily>().unwrap(), WaveFamily::Square);
        assert_eq!(" saw ".parse::<WaveFamily>().unwrap(), WaveFamily::Sawtooth);
        assert!("triangle".parse::<WaveFamily>().is_err());
        assert_eq!(WaveFamily::Sawtooth.to_string(), "sawtooth");
    }
}
