//! Near-uniform sampling over Z_m.

use rand::{CryptoRng, Rng};

/// Samples a near-uniform residue in [0, m).
///
/// Draws 16 bytes more randomness than the modulus needs and reduces,
/// which bounds the statistical distance from uniform by 2^-128. The
/// `CryptoRng` bound keeps this sampler on cryptographic randomness.
pub fn uniform_mod<R: Rng + CryptoRng + ?Sized>(m: u64, rng: &mut R) -> u64 {
    debug_assert!(m > 1);

    let mod_bytes = (64 - m.leading_zeros() as usize).div_ceil(8);
    let mut buf = [0u8; 24];
    let bytes = &mut buf[..mod_bytes + 16];
    rng.fill_bytes(bytes);

    // Horner reduction of the big-endian byte string mod m.
    let mut acc: u64 = 0;
    for &b in bytes.iter() {
        acc = ((((acc as u128) << 8) | b as u128) % m as u128) as u64;
    }
    acc
}
