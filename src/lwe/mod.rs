//! Secret-key lattice-based additively homomorphic vector encryption.
//!
//! Instantiates (a modification of) the LWE-based cryptosystem from
//! [LP10], as described in [Pei16, Section 5.2.3], encoding the message
//! in the low-order bits of the ciphertext.
//!
//! References:
//!
//! [LP10]: Lindner, Peikert. Better Key Sizes (and Attacks) for LWE-Based
//!         Encryption. CT-RSA 2011.
//!
//! [Pei16]: Peikert. A Decade of Lattice Cryptography. ePrint 2015/939.

pub mod enc;
pub mod types;

pub use enc::{decrypt, encrypt, encrypt_with_rng, keygen, keygen_with_rng};
pub use types::{Ciphertext, Plaintext, SecretKey};
