use std::f64::consts::PI;

use epicycle_core::chain::EpicycleChain;
use epicycle_core::geometry::Vec2;
use epicycle_core::harmonic::WaveFamily;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn chain_length_equals_harmonic_count() {
    for family in WaveFamily::ALL {
        for n in 1..=25 {
            let chain = EpicycleChain::compute(family, n, 0.4);
            assert_eq!(chain.len(), n);
        }
    }
}

#[test]
fn tip_is_sum_of_term_displacements() {
    let mut rng = StdRng::seed_from_u64(42);
    for family in WaveFamily::ALL {
        for _ in 0..20 {
            let n = rng.gen_range(1..40);
            let phase = rng.gen::<f64>() * 50.0;
            let chain = EpicycleChain::compute(family, n, phase);

            let mut sum = Vec2::ORIGIN;
            for i in 0..n {
                sum += family.term(i, phase).displacement();
            }
            assert!((chain.tip.x - sum.x).abs() < 1e-9);
            assert!((chain.tip.y - sum.y).abs() < 1e-9);

            let mut implied = Vec2::ORIGIN;
            for d in chain.displacements() {
                implied += d;
            }
            assert!(implied.distance(chain.tip) < 1e-9);
        }
    }
}

#[test]
fn placements_are_linked_tip_to_tail() {
    let chain = EpicycleChain::compute(WaveFamily::Sawtooth, 12, 2.3);
    assert_eq!(chain.placements[0].center, Vec2::ORIGIN);
    for pair in chain.placements.windows(2) {
        assert_eq!(pair[0].end, pair[1].center);
    }
    assert_eq!(chain.placements.last().map(|p| p.end), Some(chain.tip));
}

#[test]
fn placement_radius_is_unsigned_term_radius() {
    let chain = EpicycleChain::compute(WaveFamily::Sawtooth, 6, 0.0);
    for (i, p) in chain.placements.iter().enumerate() {
        let expected = 50.0 * 2.0 / ((i + 1) as f64 * PI);
        assert!((p.radius - expected).abs() < 1e-12);
    }
}

#[test]
fn square_partial_sums_approach_plateau() {
    // At phase π/2 the square series ordinate converges to the base radius.
    let coarse = EpicycleChain::compute(WaveFamily::Square, 3, PI / 2.0).tip.y;
    let fine = EpicycleChain::compute(WaveFamily::Square, 400, PI / 2.0).tip.y;
    assert!((fine - 50.0).abs() < (coarse - 50.0).abs());
    assert!((fine - 50.0).abs() < 0.1);
}

#[test]
fn compute_is_deterministic() {
    let a = EpicycleChain::compute(WaveFamily::Square, 9, 17.05);
    let b = EpicycleChain::compute(WaveFamily::Square, 9, 17.05);
    assert_eq!(a, b);
}
