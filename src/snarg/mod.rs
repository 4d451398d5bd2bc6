//! The preprocessing SNARG: generator, prover, and verifier.
//!
//! The generator derives ℓ independent linear-PCP queries from the QAP
//! reduction of a constraint system, packs them into one matrix, masks it
//! with a random invertible Y over the plaintext field, and publishes the
//! LWE encryption of each masked row as the CRS. The secret verification
//! key keeps the LWE key, the un-masking matrix Y^{-T}, the vanishing
//! values Z_i, and the public-input prefixes of each query.
//!
//! A proof is a single ciphertext: the homomorphic inner product of the
//! CRS rows with the prover's QAP witness vector. The verifier decrypts,
//! un-masks, restores the public-input contributions, and accepts iff
//! A_i·B_i = H_i·Z_i + C_i at every query point.

pub mod generator;
pub(crate) mod pack;
pub mod prover;
pub mod types;
pub mod verifier;

/// Number of queries of the underlying linear PCP (soundness amplification).
pub const NUM_QUERIES: usize = crate::params::NUM_QUERIES;

pub use generator::{generator, generator_with_rng};
pub use prover::{prover, prover_with_rng};
pub use types::{Crs, Keypair, Proof, VerificationKey};
pub use verifier::verifier;
