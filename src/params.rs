//! Parameters for the LWE cryptosystem and the SNARG built on it.
//!
//! The LWE parameters target 80 bits of security and decryption error
//! below 2^-40 for QAPs of degree up to 10000 over the plaintext field,
//! following the analysis of [LP10]. The number of linear-PCP queries is
//! chosen so that soundness error (2/p)^ℓ drops below 2^-40 for the same
//! circuit sizes.
//!
//! All parameters are fixed at compile time; the noise budget couples
//! them, so any change must be re-checked against [`validate`].

/// LWE lattice dimension.
pub const N: usize = 1455;

/// Standard deviation of the discrete Gaussian noise distribution.
pub const SIGMA: f64 = 6.0;

/// Number of linear-PCP queries ℓ (~2^-40 soundness for circuits < 10000).
pub const NUM_QUERIES: usize = 15;

/// Plaintext vector dimension d = 4ℓ: one slot per query for each of the
/// A, B, C, and H query blocks.
pub const PT_DIM: usize = 4 * NUM_QUERIES;

/// Plaintext modulus p (prime, p - 1 = 2^16).
pub const P: u64 = 65537;

/// Ciphertext modulus q = 2^58.
pub const Q: u64 = 1 << 58;

/// Largest QAP degree the noise budget is provisioned for.
pub const MAX_QAP_DEGREE: usize = 10_000;

/// Estimated headroom, in bits, between the worst supported noise level
/// and the decryption threshold q/(2p).
///
/// A fresh ciphertext coordinate decrypts to `v + p * e` where the noise
/// `e` is dominated by an inner product of two length-n Gaussian vectors,
/// so its standard deviation is about sqrt(n)·σ². The prover combines up
/// to `num_rows` ciphertexts with uniform Z_p scalars, scaling the
/// deviation by sqrt(num_rows)·p/sqrt(3). Decryption succeeds while the
/// combined noise stays below q/(2p); the returned value is the base-2
/// log of the remaining slack.
pub fn noise_headroom_bits(num_rows: usize) -> f64 {
    let per_ct = (N as f64).sqrt() * SIGMA * SIGMA;
    let scalar_rms = P as f64 / 3f64.sqrt();
    let combined = (num_rows as f64).sqrt() * scalar_rms * per_ct;
    let threshold = Q as f64 / (2.0 * P as f64);
    (threshold / combined).log2()
}

/// Checks the structural relations between the parameters.
///
/// # Errors
///
/// Returns a description of the violated constraint.
pub fn validate() -> Result<(), &'static str> {
    if PT_DIM != 4 * NUM_QUERIES {
        return Err("plaintext dimension must be 4 queries wide");
    }

    if !Q.is_power_of_two() {
        return Err("q must be a power of two");
    }

    // p - 1 = 2^16 gives the radix-2 domains the QAP reduction relies on.
    if (P - 1) != 1 << 16 {
        return Err("p - 1 must be 2^16");
    }

    if Q / (2 * P) == 0 {
        return Err("q must leave room for low-order-bit encoding");
    }

    // A 2^-40 decryption error needs ~13.3 standard deviations of slack
    // (log2 13.3 ≈ 3.7) for the largest supported linear combination.
    if noise_headroom_bits(MAX_QAP_DEGREE) < 3.8 {
        return Err("noise budget exhausted for the supported QAP degree");
    }

    Ok(())
}
