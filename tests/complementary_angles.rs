//! tests/complementary_angles.rs

use lattice_vis::core::lattice::{complementary_angles, normal_vectors, sanitize, Basis};
use lattice_vis::LatticeError;

#[test]
fn orthogonal_basis_is_perpendicular_to_its_complements() {
    // each row is parallel to its normal, so it stands at 90 degrees to the
    // span of the other rows
    let b = Basis::from_integers(&[vec![5, 0, 0], vec![0, 5, 0], vec![0, 0, 5]]).unwrap();
    assert_eq!(
        normal_vectors(&b).unwrap(),
        vec![vec![25.0, 0.0, 0.0], vec![0.0, 25.0, 0.0], vec![0.0, 0.0, 25.0]]
    );
    assert_eq!(complementary_angles(&b).unwrap(), vec![90.0, 90.0, 90.0]);
}

#[test]
fn textbook_basis_before_and_after_reduction() {
    let original = Basis::from_integers(&[vec![1, 1, 1], vec![-1, 0, 2], vec![3, 5, 6]]).unwrap();
    assert_eq!(complementary_angles(&original).unwrap(), vec![6.0, 21.0, 5.0]);

    let reduced = Basis::from_integers(&[vec![0, 1, 0], vec![1, 0, 1], vec![-1, 0, 2]]).unwrap();
    assert_eq!(complementary_angles(&reduced).unwrap(), vec![90.0, 72.0, 72.0]);
}

#[test]
fn zero_row_yields_zero_angles() {
    let b = Basis::from_integers(&[vec![3, 1, 0], vec![0, 0, 0], vec![1, 2, 5]]).unwrap();
    let angles = complementary_angles(&b).unwrap();
    assert_eq!(angles[1], 0.0);
    // the zero row also collapses every other normal
    assert_eq!(angles, vec![0.0, 0.0, 0.0]);
}

#[test]
fn angles_stay_in_range() {
    let b = Basis::from_integers(&[
        vec![7, 2, 9, 1],
        vec![3, 8, 1, 4],
        vec![6, 0, 5, 2],
        vec![1, 9, 3, 8],
    ])
    .unwrap();
    let angles = complementary_angles(&b).unwrap();
    assert_eq!(angles.len(), 4);
    assert!(angles.iter().all(|a| (0.0..=90.0).contains(a)), "{angles:?}");
}

#[test]
fn non_square_is_rejected() {
    let b = Basis::from_integers(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    assert_eq!(
        complementary_angles(&b).unwrap_err(),
        LatticeError::NotSquare { rows: 3, cols: 2 }
    );
}

#[test]
fn non_finite_entries_are_left_for_the_caller() {
    let b = Basis::from_rows(vec![vec![f64::NAN, 1.0], vec![0.0, 1.0]]).unwrap();
    let raw = complementary_angles(&b).unwrap();
    assert!(raw.iter().any(|a| !a.is_finite()));
    assert!(sanitize(&raw).iter().all(|a| a.is_finite()));
}
