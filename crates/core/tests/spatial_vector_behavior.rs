//! Behavioural tests for motion/force vectors and their pairing.
//!
//! Randomised checks use a seeded `StdRng` so failures reproduce.
//!
//! Run tests with: `cargo test --test spatial_vector_behavior`

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbd_core::{power, ForceVector, MotionVector, SpatialError, Vec6, SPATIAL_DIM};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("rbd_core=debug"))
        .with_test_writer()
        .try_init();
}

fn random_components(rng: &mut StdRng) -> [f64; SPATIAL_DIM] {
    std::array::from_fn(|_| rng.random_range(-100.0..100.0))
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONSTRUCTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_list_and_vector_construction_agree() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..100 {
        let values = random_components(&mut rng);

        let from_list = MotionVector::from_slice(&values);
        let from_vector = MotionVector::from_data(Vec6::from(values));
        let from_array = MotionVector::from(values);

        for i in 0..SPATIAL_DIM {
            assert_eq!(from_list[i], values[i]);
            assert_eq!(from_list.get(i), from_vector.get(i));
            assert_eq!(from_list.get(i), from_array.get(i));
        }
    }
}

#[test]
fn test_wrong_arity_is_rejected_not_padded() {
    init_tracing();

    for len in [0, 1, 5, 7, 12] {
        let values = vec![1.0_f64; len];
        assert_eq!(
            ForceVector::try_from(values.as_slice()),
            Err(SpatialError::WrongArity {
                expected: 6,
                found: len
            }),
            "length {len} should be rejected"
        );
    }

    let short = std::panic::catch_unwind(|| MotionVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    assert!(short.is_err());
}

// ═══════════════════════════════════════════════════════════════════════════════
// ACCESS AND MUTATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_component_write_leaves_others_untouched() {
    let mut m = MotionVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    m[2] = 10.0;

    assert_eq!(m.get(2), Some(&10.0));
    for (i, expected) in [(0, 1.0), (1, 2.0), (3, 4.0), (4, 5.0), (5, 6.0)] {
        assert_eq!(m[i], expected);
    }
}

#[test]
fn test_copies_are_independent() {
    let original = ForceVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let mut copy = original;
    copy.set(0, -1.0).unwrap();

    assert_eq!(original[0], 1.0);
    assert_eq!(copy[0], -1.0);
}

#[test]
fn test_checked_write_out_of_range() {
    init_tracing();

    let mut m = MotionVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let before = m;
    assert_eq!(m.set(6, 0.0), Err(SpatialError::IndexOutOfRange { index: 6 }));
    assert_eq!(m, before);
}

// ═══════════════════════════════════════════════════════════════════════════════
// PAIRING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_power_scenarios() {
    let m = MotionVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let f = ForceVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(power(&m, &f), 91.0);

    let still = MotionVector::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(power(&still, &f), 0.0);

    let spin_x = MotionVector::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let moment_y = ForceVector::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(power(&spin_x, &moment_y), 0.0);
}

#[test]
fn test_power_is_commutative_bit_for_bit() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let m = MotionVector::from(random_components(&mut rng));
        let f = ForceVector::from(random_components(&mut rng));

        let mf = power(&m, &f);
        let fm = power(&f, &m);
        assert_eq!(mf.to_bits(), fm.to_bits());
    }
}

#[test]
fn test_power_matches_manual_sum() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let m = MotionVector::from(random_components(&mut rng));
        let f = ForceVector::from(random_components(&mut rng));

        let manual = m[0] * f[0] + m[1] * f[1] + m[2] * f[2] + m[3] * f[3] + m[4] * f[4]
            + m[5] * f[5];
        assert_relative_eq!(power(&m, &f), manual, epsilon = 1e-9, max_relative = 1e-12);
    }
}

#[test]
fn test_power_single_precision() {
    let m = MotionVector::new(0.5_f32, 0.5, 0.5, 2.0, 2.0, 2.0);
    let f = ForceVector::new(2.0_f32, 2.0, 2.0, 0.5, 0.5, 0.5);
    assert_relative_eq!(power(&m, &f), 6.0_f32);
}

#[test]
fn test_power_is_invariant_under_same_kind_sums() {
    // Power is linear in each argument: (m1 + m2) · f = m1 · f + m2 · f
    let m1 = MotionVector::new(1.0, 0.0, 2.0, 0.0, 3.0, 0.0);
    let m2 = MotionVector::new(0.0, 4.0, 0.0, 5.0, 0.0, 6.0);
    let f = ForceVector::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0);

    assert_eq!(power(&(m1 + m2), &f), power(&m1, &f) + power(&m2, &f));
    assert_eq!(power(&(-m1), &f), -power(&m1, &f));
}

// ═══════════════════════════════════════════════════════════════════════════════
// DISPLAY
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_display_has_six_tokens_in_order() {
    let values = [1.5, -2.0, 3.25, 0.0, 1e-3, 600.0];
    let m = MotionVector::from(values);
    let rendered = m.to_string();

    let tokens: Vec<f64> = rendered
        .split_whitespace()
        .map(|t| t.parse().expect("numeric token"))
        .collect();
    assert_eq!(tokens, values);
}

#[test]
fn test_display_single_precision_tokens() {
    let f = ForceVector::new(0.1_f32, 0.2, 0.3, 0.4, 0.5, 0.6);
    let rendered = f.to_string();

    assert_eq!(rendered.lines().count(), 6);
    assert_eq!(rendered.lines().next(), Some("0.1"));
}
