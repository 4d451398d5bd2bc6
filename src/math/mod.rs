//! Mathematical primitives for the lattice SNARG.
//!
//! - Arithmetic in the plaintext prime field Z_p
//! - Matrices and vectors over a run-time-selected modulus
//! - Discrete Gaussian and near-uniform samplers for LWE

pub mod fp;
pub mod gaussian;
pub mod matrix;
pub mod modular;
pub mod sampler;

pub use fp::Fp;
pub use gaussian::GaussianSampler;
pub use matrix::{ModMatrix, ModVector};
pub use modular::ModM;
pub use sampler::uniform_mod;
