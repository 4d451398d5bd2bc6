//! Proof generation.

use eyre::{ensure, Result};
use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::math::Fp;
use crate::qap::qap_witness_map;

use super::types::{Crs, Proof};

/// Produces a proof that the prover knows `auxiliary` completing
/// `primary` into a satisfying assignment. Randomness from OS entropy.
pub fn prover(crs: &Crs, primary: &[Fp], auxiliary: &[Fp]) -> Result<Proof> {
    prover_with_rng(crs, primary, auxiliary, &mut ChaCha20Rng::from_entropy())
}

/// Proving with a caller-supplied RNG.
///
/// Builds the plaintext proof vector π = (w, d₁, d₂, d₃, h) from the QAP
/// witness map and folds it homomorphically into the encrypted queries.
/// The blinds d₁..d₃ enter the witness map for parity with the underlying
/// construction; this SNARG makes no zero-knowledge claim.
pub fn prover_with_rng<R: Rng + CryptoRng + ?Sized>(
    crs: &Crs,
    primary: &[Fp],
    auxiliary: &[Fp],
    rng: &mut R,
) -> Result<Proof> {
    let cs = &crs.constraint_system;

    let d1 = Fp::random(rng);
    let d2 = Fp::random(rng);
    let d3 = Fp::random(rng);

    let witness = qap_witness_map(cs, primary, auxiliary, d1, d2, d3)?;

    let mut pi: Vec<Fp> = witness.assignment[cs.primary_input_size + 1..].to_vec();
    pi.push(d1);
    pi.push(d2);
    pi.push(d3);
    pi.extend_from_slice(&witness.coefficients_for_h);

    ensure!(
        pi.len() == crs.enc_queries.len(),
        "proof vector has {} coordinates but the CRS has {} rows",
        pi.len(),
        crs.enc_queries.len()
    );

    let mut response = &crs.enc_queries[0] * pi[0];
    for (ct, &coeff) in crs.enc_queries[1..].iter().zip(&pi[1..]) {
        response += ct * coeff;
    }

    debug!(rows = pi.len(), "homomorphic inner product complete");

    Ok(Proof { response })
}
