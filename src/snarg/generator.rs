//! CRS and verification-key generation.

use eyre::Result;
use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::lwe;
use crate::math::Fp;
use crate::params::NUM_QUERIES;
use crate::qap::{qap_instance_at, QapInstanceEvaluation};
use crate::r1cs::ConstraintSystem;

use super::pack::{pack_queries, sample_mask};
use super::types::{Crs, Keypair, VerificationKey};

/// Runs the one-time trusted setup for `cs`, drawing randomness from OS
/// entropy. The CRS is public; the verification key must stay secret.
pub fn generator(cs: &ConstraintSystem) -> Result<Keypair> {
    generator_with_rng(cs, &mut ChaCha20Rng::from_entropy())
}

/// Setup with a caller-supplied RNG.
///
/// Samples ℓ independent evaluation points τ_i, derives the QAP queries
/// at each, packs and masks them, and encrypts every masked row under a
/// fresh LWE key.
pub fn generator_with_rng<R: Rng + CryptoRng + ?Sized>(
    cs: &ConstraintSystem,
    rng: &mut R,
) -> Result<Keypair> {
    info!(
        constraints = cs.num_constraints(),
        variables = cs.num_variables(),
        inputs = cs.primary_input_size,
        "generating SNARG key pair"
    );

    let evals: Vec<QapInstanceEvaluation> = (0..NUM_QUERIES)
        .map(|_| qap_instance_at(cs, Fp::random(rng)))
        .collect::<Result<_>>()?;

    let z: Vec<Fp> = evals.iter().map(|e| e.zt).collect();
    let prefix_len = cs.primary_input_size + 1;
    let a_prefix: Vec<Vec<Fp>> = evals.iter().map(|e| e.at[..prefix_len].to_vec()).collect();
    let b_prefix: Vec<Vec<Fp>> = evals.iter().map(|e| e.bt[..prefix_len].to_vec()).collect();
    let c_prefix: Vec<Vec<Fp>> = evals.iter().map(|e| e.ct[..prefix_len].to_vec()).collect();

    let queries = pack_queries(&evals, cs.primary_input_size)?;
    let (y, y_inv_t) = sample_mask(rng)?;
    let masked = queries.mul(&y);

    let sk = lwe::keygen_with_rng(rng);

    let enc_queries = (0..masked.rows())
        .map(|i| {
            let row: Vec<Fp> = masked.row(i).iter().map(|&v| Fp::new(v)).collect();
            lwe::encrypt_with_rng(&sk, &row, rng)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = enc_queries.len(), "CRS rows encrypted");

    Ok(Keypair {
        crs: Crs {
            enc_queries,
            constraint_system: cs.clone(),
        },
        vk: VerificationKey {
            sk,
            z,
            y_inv_t,
            a_prefix,
            b_prefix,
            c_prefix,
        },
    })
}
