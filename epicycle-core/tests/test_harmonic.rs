use std::f64::consts::PI;

use epicycle_core::harmonic::{sawtooth, sawtooth_with_radius, square, WaveFamily, BASE_RADIUS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn square_radius_positive_and_decreasing() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let phase = rng.gen::<f64>() * 1000.0 - 500.0;
        let mut prev = f64::INFINITY;
        for i in 0..40 {
            let t = square(i, phase);
            assert!(t.radius >= 0.0);
            assert!(t.radius < prev, "radius must shrink with index");
            prev = t.radius;
        }
    }
}

#[test]
fn sawtooth_radius_unsigned_sign_alternates() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let phase = rng.gen::<f64>() * 100.0;
        for i in 0..30 {
            let t = sawtooth(i, phase);
            let n = i + 1;
            assert!(t.radius >= 0.0);
            assert!((t.radius - t.signed_radius.abs()).abs() < 1e-12);
            if n % 2 == 0 {
                assert!(t.signed_radius < 0.0, "even n={} should be negative", n);
            } else {
                assert!(t.signed_radius > 0.0, "odd n={} should be positive", n);
            }
        }
    }
}

#[test]
fn displacement_length_matches_radius() {
    for family in WaveFamily::ALL {
        for i in 0..10 {
            let t = family.term(i, 0.37 * i as f64);
            let len = (t.dx * t.dx + t.dy * t.dy).sqrt();
            assert!((len - t.radius).abs() < 1e-9);
        }
    }
}

#[test]
fn fundamental_never_zero() {
    for family in WaveFamily::ALL {
        for k in 0..64 {
            let t = family.term(0, k as f64 * 0.1);
            assert!(t.radius > 0.0);
            assert!(t.displacement().mag() > 0.0);
        }
    }
}

#[test]
fn sawtooth_uses_signed_radius_for_displacement() {
    // n = 2 at phase 0: arm points along -x.
    let t = sawtooth(1, 0.0);
    assert!((t.dx + BASE_RADIUS / PI).abs() < 1e-12);
    assert!(t.dy.abs() < 1e-12);
}

#[test]
fn base_radius_scales_linearly() {
    let a = sawtooth_with_radius(2, 0.9, 10.0);
    let b = sawtooth_with_radius(2, 0.9, 20.0);
    assert!((b.radius - 2.0 * a.radius).abs() < 1e-12);
    assert!((b.dy - 2.0 * a.dy).abs() < 1e-12);
}

#[test]
fn family_dispatch_matches_free_functions() {
    assert_eq!(WaveFamily::Square.term(3, 1.25), square(3, 1.25));
    assert_eq!(WaveFamily::Sawtooth.term(3, 1.25), sawtooth(3, 1.25));
}
