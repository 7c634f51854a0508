//! Validates weighted combo sampling and palette generation

use pairleroy::algorithm::{create_palette, sample_combo};
use pairleroy::combo::ComboPattern;
use pairleroy::io::configuration::PALETTE_SIZE;
use pairleroy::math::Xorshift32;

#[test]
fn test_zero_weight_types_never_sampled() {
    let mut rng = Xorshift32::new(3);
    for _ in 0..200 {
        let combo = sample_combo(&[0, 100, 0], &[25, 25, 25, 25], &mut rng);
        assert!(matches!(combo.pattern, ComboPattern::Bi { .. }));
    }
}

#[test]
fn test_zero_weight_colors_never_sampled() {
    let mut rng = Xorshift32::new(17);
    for _ in 0..200 {
        let combo = sample_combo(&[100, 0, 0], &[0, 0, 60, 40], &mut rng);
        match combo.pattern {
            ComboPattern::Mono { color } => assert!(color == 2 || color == 3),
            other => panic!("expected mono, found {other:?}"),
        }
    }
}

#[test]
fn test_bi_minor_differs_from_major() {
    let mut rng = Xorshift32::new(23);
    for _ in 0..200 {
        let combo = sample_combo(&[0, 100, 0], &[50, 50, 0, 0], &mut rng);
        if let ComboPattern::Bi { major, minor } = combo.pattern {
            assert_ne!(major, minor);
        }
    }
}

#[test]
fn test_tri_colors_distinct_when_enough_positive_weights() {
    let mut rng = Xorshift32::new(41);
    for _ in 0..200 {
        let combo = sample_combo(&[0, 0, 100], &[40, 30, 20, 10], &mut rng);
        if let ComboPattern::Tri { colors } = combo.pattern {
            let mut sorted = colors.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 3, "repeated color in tri combo");
        } else {
            panic!("expected tri, found {:?}", combo.pattern);
        }
    }
}

#[test]
fn test_palette_has_fixed_size_and_base_rotation() {
    let mut rng = Xorshift32::new(8);
    let palette = create_palette(&[40, 40, 20], &[25, 25, 25, 25], &mut rng);
    assert_eq!(palette.len(), PALETTE_SIZE);
    for combo in &palette {
        assert_eq!(combo.rotation_step, 0);
    }
}

#[test]
fn test_equal_seeds_give_identical_palettes() {
    let mut a = Xorshift32::new(314);
    let mut b = Xorshift32::new(314);
    assert_eq!(
        create_palette(&[40, 40, 20], &[10, 20, 30, 40], &mut a),
        create_palette(&[40, 40, 20], &[10, 20, 30, 40], &mut b)
    );
}
