//! Proof verification.

use tracing::debug;

use crate::lwe;
use crate::math::{Fp, ModVector};
use crate::params::{NUM_QUERIES, P, PT_DIM};

use super::types::{Proof, VerificationKey};

/// Decides whether `proof` attests that `primary` extends to a satisfying
/// assignment.
///
/// Decrypts the response, un-masks it with Y^{-T}, restores the
/// public-input contributions from the stored prefixes, and checks
/// A_i·B_i = H_i·Z_i + C_i at every query point. Every failure mode,
/// including malformed dimensions, is a rejection rather than an error.
pub fn verifier(vk: &VerificationKey, primary: &[Fp], proof: &Proof) -> bool {
    let ell = NUM_QUERIES;

    if vk.z.len() != ell
        || vk.a_prefix.len() != ell
        || vk.b_prefix.len() != ell
        || vk.c_prefix.len() != ell
        || vk.y_inv_t.rows() != PT_DIM
        || vk.y_inv_t.cols() != PT_DIM
    {
        debug!("rejected: malformed verification key");
        return false;
    }

    let prefix_len = primary.len() + 1;
    if vk.a_prefix.iter().any(|p| p.len() != prefix_len)
        || vk.b_prefix.iter().any(|p| p.len() != prefix_len)
        || vk.c_prefix.iter().any(|p| p.len() != prefix_len)
    {
        debug!("rejected: primary input length mismatch");
        return false;
    }

    let decrypted = match lwe::decrypt(&vk.sk, &proof.response) {
        Ok(v) => v,
        Err(err) => {
            debug!("rejected: {}", err);
            return false;
        }
    };

    let masked = ModVector::from_coeffs(decrypted.iter().map(|f| f.value()).collect(), P);
    let unmasked = vk.y_inv_t.mul_vec(&masked);
    let u: Vec<Fp> = unmasked.as_slice().iter().map(|&x| Fp::new(x)).collect();

    for i in 0..ell {
        let mut a = u[i] + vk.a_prefix[i][0];
        let mut b = u[ell + i] + vk.b_prefix[i][0];
        let mut c = u[2 * ell + i] + vk.c_prefix[i][0];
        let h = u[3 * ell + i];

        for (j, &x) in primary.iter().enumerate() {
            a += x * vk.a_prefix[i][j + 1];
            b += x * vk.b_prefix[i][j + 1];
            c += x * vk.c_prefix[i][j + 1];
        }

        if a * b != h * vk.z[i] + c {
            debug!(query = i, "rejected: divisibility check failed");
            return false;
        }
    }

    true
}
