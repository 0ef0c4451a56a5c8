//! Property tests for the dense solver.
//!
//! - A·x reproduces b for diagonally dominant (hence non-singular) systems
//! - permuting the rows of [A | b] does not change x
//! - solving the same input twice gives bit-identical results

use gauss_lsolver::{
    algorithms::{GaussianElimination, SolveAlgorithm},
    verify, DenseMatrix,
};
use proptest::prelude::*;

/// Generate a strictly diagonally dominant n×n system with 1 <= n <= 8.
fn arb_system() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..=8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(-10.0f64..10.0, n), n),
                prop::collection::vec(-100.0f64..100.0, n),
            )
        })
        .prop_map(|(mut rows, b)| {
            for (i, row) in rows.iter_mut().enumerate() {
                let off_diagonal: f64 = row.iter().map(|v| v.abs()).sum();
                row[i] = off_diagonal + 1.0;
            }
            (rows, b)
        })
}

/// A system together with a random row permutation.
fn arb_permuted_system() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<usize>)> {
    arb_system().prop_flat_map(|(rows, b)| {
        let n = b.len();
        (
            Just(rows),
            Just(b),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn solution_satisfies_every_equation((rows, b) in arb_system()) {
        let a = DenseMatrix::from_rows(&rows).unwrap();
        let result = GaussianElimination::default().solve(&a, &b).unwrap();
        prop_assert!(verify::is_solution(&a, &result.x, &b, 1e-9).unwrap());
    }

    #[test]
    fn row_permutation_does_not_change_solution((rows, b, order) in arb_permuted_system()) {
        let a = DenseMatrix::from_rows(&rows).unwrap();
        let permuted_rows: Vec<_> = order.iter().map(|&i| rows[i].clone()).collect();
        let permuted_b: Vec<_> = order.iter().map(|&i| b[i]).collect();
        let permuted_a = DenseMatrix::from_rows(&permuted_rows).unwrap();

        let algorithm = GaussianElimination::default();
        let x = algorithm.solve(&a, &b).unwrap().x;
        let y = algorithm.solve(&permuted_a, &permuted_b).unwrap().x;

        for (xi, yi) in x.iter().zip(&y) {
            prop_assert!((xi - yi).abs() <= 1e-9 * xi.abs().max(1.0), "{xi} != {yi}");
        }
        prop_assert!(verify::is_solution(&permuted_a, &y, &permuted_b, 1e-9).unwrap());
    }

    #[test]
    fn repeated_solves_are_identical((rows, b) in arb_system()) {
        let a = DenseMatrix::from_rows(&rows).unwrap();
        let first = gauss_lsolver::solve(a.clone(), b.clone()).unwrap();
        let second = gauss_lsolver::solve(a, b).unwrap();
        prop_assert_eq!(first, second);
    }
}
