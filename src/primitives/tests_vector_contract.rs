// =========================================================================
// FALSIFY-VE: Vector primitives contract
//
// Sorting is the foundation of multiset comparison, so these pin down the
// properties `sorted` must never lose.
// =========================================================================

use super::*;

/// FALSIFY-VE-001: sorted output is non-decreasing
#[test]
fn falsify_ve_001_sorted_non_decreasing() {
    let v = Vector::from_slice(&[5, -1, 3, 3, 0, 9, -7]);
    let s = v.sorted();

    for w in s.as_slice().windows(2) {
        assert!(
            w[0] <= w[1],
            "FALSIFIED VE-001: {} > {} in sorted output",
            w[0],
            w[1]
        );
    }
}

/// FALSIFY-VE-002: sorting preserves length
#[test]
fn falsify_ve_002_sorted_preserves_len() {
    let v = Vector::from_slice(&[1.0_f32, 1.0, 0.5, -3.0]);
    let s = v.sorted();

    assert_eq!(
        s.len(),
        v.len(),
        "FALSIFIED VE-002: sorted len={}, expected {}",
        s.len(),
        v.len()
    );
}

/// FALSIFY-VE-003: sorting preserves multiplicity of each value
#[test]
fn falsify_ve_003_sorted_preserves_counts() {
    let v = Vector::from_slice(&[2, 2, 7, 2, 7, 1]);
    let s = v.sorted();

    for value in [1, 2, 7] {
        let before = v.iter().filter(|&&x| x == value).count();
        let after = s.iter().filter(|&&x| x == value).count();
        assert_eq!(
            before, after,
            "FALSIFIED VE-003: count of {value} changed from {before} to {after}"
        );
    }
}

/// FALSIFY-VE-004: sorting is idempotent
#[test]
fn falsify_ve_004_sorted_idempotent() {
    let v = Vector::from_slice(&[4_i64, -2, 8, 0]);
    let once = v.sorted();
    let twice = once.sorted();

    assert_eq!(once, twice, "FALSIFIED VE-004: sort(sort(v)) != sort(v)");
}
