//! Lattice-based preprocessing SNARG for R1CS
//!
//! This crate implements a preprocessing succinct non-interactive argument
//! (ppSNARG) for rank-1 constraint systems whose security rests on the
//! Learning With Errors assumption, instantiating the construction of
//! [BISW17] with the QAP-based linear PCP of [BCGTV13].
//!
//! Key components:
//! - Additively homomorphic secret-key LWE vector encryption ([LP10] style,
//!   low-order-bit message encoding)
//! - QAP linear-PCP queries packed into an encrypted CRS behind a random
//!   invertible mask
//! - Short proofs: one ciphertext, produced by a homomorphic inner product
//!
//! References:
//!
//! [BISW17]: Boneh, Ishai, Sahai, Wu. Lattice-Based SNARGs and Their
//!           Application to More Efficient Obfuscation. Eurocrypt 2017.
//!
//! [BCGTV13]: Ben-Sasson, Chiesa, Genkin, Tromer, Virza. SNARKs for C. Crypto 2013.
//!
//! [LP10]: Lindner, Peikert. Better Key Sizes (and Attacks) for LWE-Based
//!         Encryption. CT-RSA 2011.

pub mod params;
pub mod math;
pub mod lwe;
pub mod r1cs;
pub mod qap;
pub mod snarg;

pub use math::fp::Fp;
pub use r1cs::{ConstraintSystem, generate_r1cs_example_with_field_input};
pub use snarg::{generator, prover, verifier, Crs, Keypair, Proof, VerificationKey};
