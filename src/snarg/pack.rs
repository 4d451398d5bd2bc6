//! Packing the QAP queries into one matrix, and the random mask.

use eyre::{bail, ensure, Result};
use rand::{CryptoRng, Rng};

use crate::math::ModMatrix;
use crate::params::{NUM_QUERIES, P, PT_DIM};
use crate::qap::QapInstanceEvaluation;

/// Bounded retry for the invertible-mask draw; a uniform d×d matrix over
/// Z_p is singular with probability ≈ 1/p, so 64 attempts never fail in
/// practice.
const MASK_ATTEMPTS: usize = 64;

/// Assembles the R×d query matrix M from ℓ instance evaluations.
///
/// Block layout, with the i-th evaluation occupying column i of each
/// ℓ-wide block:
///
/// ```text
///            cols 0..ℓ    ℓ..2ℓ     2ℓ..3ℓ    3ℓ..4ℓ
/// witness     A-slice     B-slice   C-slice      0
/// 3 Z-rows    Z·e₁ᵀ       Z·e₂ᵀ     Z·e₃ᵀ        0
/// quotient      0           0         0        H-slice
/// ```
///
/// The A/B/C slices skip the first I+1 coordinates of each query; those
/// prefixes stay in the clear inside the verification key.
pub(crate) fn pack_queries(
    evals: &[QapInstanceEvaluation],
    num_inputs: usize,
) -> Result<ModMatrix> {
    ensure!(
        evals.len() == NUM_QUERIES,
        "expected {} query evaluations, got {}",
        NUM_QUERIES,
        evals.len()
    );

    let ell = evals.len();
    let num_vars = evals[0].at.len();
    let h_len = evals[0].ht.len();
    ensure!(
        num_vars > num_inputs,
        "query vectors shorter than the input prefix"
    );

    let witness_rows = num_vars - num_inputs - 1;
    let rows = witness_rows + 3 + h_len;
    let mut m = ModMatrix::new(rows, PT_DIM, P);

    for (i, eval) in evals.iter().enumerate() {
        ensure!(
            eval.at.len() == num_vars && eval.ht.len() == h_len,
            "query evaluations disagree on dimensions"
        );

        for (row, var) in (num_inputs + 1..num_vars).enumerate() {
            m.set(row, i, eval.at[var].value());
            m.set(row, ell + i, eval.bt[var].value());
            m.set(row, 2 * ell + i, eval.ct[var].value());
        }

        m.set(witness_rows, i, eval.zt.value());
        m.set(witness_rows + 1, ell + i, eval.zt.value());
        m.set(witness_rows + 2, 2 * ell + i, eval.zt.value());

        for (j, &h) in eval.ht.iter().enumerate() {
            m.set(witness_rows + 3 + j, 3 * ell + i, h.value());
        }
    }

    Ok(m)
}

/// Samples a uniformly random invertible mask Y over Z_p.
///
/// Returns (Y, Y^{-T}).
pub(crate) fn sample_mask<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<(ModMatrix, ModMatrix)> {
    for _ in 0..MASK_ATTEMPTS {
        let y = ModMatrix::random(PT_DIM, PT_DIM, P, rng);
        if let Some(inv) = y.inverse() {
            return Ok((y, inv.transpose()));
        }
    }
    bail!("no invertible mask after {} draws", MASK_ATTEMPTS)
}
