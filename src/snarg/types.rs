//! CRS, verification key, key pair, and proof types.

use serde::{Deserialize, Serialize};

use crate::lwe::{Ciphertext, SecretKey};
use crate::math::{Fp, ModMatrix};
use crate::r1cs::ConstraintSystem;

/// The common reference string: one ciphertext per masked query-matrix
/// row, together with the constraint system it was derived from. Public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    pub enc_queries: Vec<Ciphertext>,
    pub constraint_system: ConstraintSystem,
}

/// The verification key. Secret: exposing the queries lets a prover forge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationKey {
    /// LWE secret key
    pub sk: SecretKey,
    /// Z(τ_i) for each query point
    pub z: Vec<Fp>,
    /// The un-masking matrix Y^{-T} over Z_p
    pub y_inv_t: ModMatrix,
    /// First I+1 coordinates of each A query (constant + public inputs)
    pub a_prefix: Vec<Vec<Fp>>,
    /// Likewise for B
    pub b_prefix: Vec<Vec<Fp>>,
    /// Likewise for C
    pub c_prefix: Vec<Vec<Fp>>,
}

/// The generator's output: CRS plus verification key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keypair {
    pub crs: Crs,
    pub vk: VerificationKey,
}

/// A proof: a single LWE ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    pub response: Ciphertext,
}
