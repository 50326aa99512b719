//! Symmetric eigen-decomposition for rank-2 tensors.
//!
//! The permeability models resolve fracture normals from the principal
//! directions of the stress tensor, which requires the eigenvectors of a
//! symmetric 3×3 matrix. A cyclic Jacobi iteration is used: for symmetric
//! 3×3 input it converges in a handful of sweeps and always produces an
//! orthonormal eigenvector basis.

use glam::{DMat3, DVec3};
use petraflow_types::constants::{EPSILON, JACOBI_MAX_SWEEPS};
use serde::{Deserialize, Serialize};

/// Result of a symmetric 3×3 eigen-decomposition: T = V · diag(λ) · Vᵀ.
///
/// Eigenvalues are sorted **ascending**; column i of `eigenvectors` is the
/// unit eigenvector paired with `eigenvalues[i]`. For a stress tensor this
/// means column 2 is the direction of the largest principal stress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SymmetricEigen {
    /// Eigenvalues in ascending order.
    pub eigenvalues: DVec3,
    /// Orthonormal eigenvectors, one per column, ordered to match.
    pub eigenvectors: DMat3,
}

/// Compute the eigen-decomposition of a symmetric 3×3 tensor.
///
/// Only the symmetric part of the input is read; the strict lower triangle
/// is mirrored from the upper one. The iteration is bounded by
/// [`JACOBI_MAX_SWEEPS`] and never fails: per-point evaluation downstream
/// must be infallible, and a symmetric 3×3 converges well within the bound.
pub fn symmetric_eigen(t: &DMat3) -> SymmetricEigen {
    // a[i][j], mirrored so the iteration sees an exactly symmetric matrix.
    let mut a = [
        [t.col(0).x, t.col(1).x, t.col(2).x],
        [t.col(1).x, t.col(1).y, t.col(2).y],
        [t.col(2).x, t.col(2).y, t.col(2).z],
    ];
    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    let norm: f64 = a
        .iter()
        .flatten()
        .map(|x| x * x)
        .sum::<f64>()
        .sqrt()
        .max(EPSILON);
    let tol = EPSILON * norm;

    for _ in 0..JACOBI_MAX_SWEEPS {
        let off = (a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2]).sqrt();
        if off <= tol {
            break;
        }

        for (p, q) in [(0usize, 1usize), (0, 2), (1, 2)] {
            if a[p][q].abs() <= tol {
                continue;
            }

            // Classic Jacobi rotation annihilating a[p][q].
            let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
            let t_pq = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
            let c = 1.0 / (t_pq * t_pq + 1.0).sqrt();
            let s = t_pq * c;

            // A ← Gᵀ A G, columns p and q first, then rows.
            for k in 0..3 {
                let akp = c * a[k][p] - s * a[k][q];
                let akq = s * a[k][p] + c * a[k][q];
                a[k][p] = akp;
                a[k][q] = akq;
            }
            for k in 0..3 {
                let apk = c * a[p][k] - s * a[q][k];
                let aqk = s * a[p][k] + c * a[q][k];
                a[p][k] = apk;
                a[q][k] = aqk;
            }

            // Accumulate V ← V G.
            for k in 0..3 {
                let vkp = c * v[k][p] - s * v[k][q];
                let vkq = s * v[k][p] + c * v[k][q];
                v[k][p] = vkp;
                v[k][q] = vkq;
            }
        }
    }

    // Sort eigenpairs ascending by eigenvalue.
    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| a[i][i].partial_cmp(&a[j][j]).unwrap_or(std::cmp::Ordering::Equal));

    let eigenvalues = DVec3::new(a[order[0]][order[0]], a[order[1]][order[1]], a[order[2]][order[2]]);
    let eigenvectors = DMat3::from_cols(
        DVec3::new(v[0][order[0]], v[1][order[0]], v[2][order[0]]),
        DVec3::new(v[0][order[1]], v[1][order[1]], v[2][order[1]]),
        DVec3::new(v[0][order[2]], v[1][order[2]], v[2][order[2]]),
    );

    SymmetricEigen {
        eigenvalues,
        eigenvectors,
    }
}
