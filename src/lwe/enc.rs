//! LWE key generation, encryption, and decryption

use eyre::{ensure, Result};
use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::math::{Fp, GaussianSampler, ModM, ModMatrix, ModVector};
use crate::params::{N, P, PT_DIM, Q, SIGMA};

use super::types::{Ciphertext, SecretKey};

/// Generates a secret key from OS entropy.
pub fn keygen() -> SecretKey {
    keygen_with_rng(&mut ChaCha20Rng::from_entropy())
}

/// Generates a secret key from the supplied RNG.
///
/// Samples Â uniformly from Z_q^{n×n}, Ŝ and Ê from the error
/// distribution, and assembles `A = [Â ; ŜᵀÂ + p·Ê]`, `S = [−Ŝ ; I_d]`.
pub fn keygen_with_rng<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> SecretKey {
    let gauss = GaussianSampler::new(SIGMA);

    let a_hat = ModMatrix::random(N, N, Q, rng);

    let mut s_hat = ModMatrix::new(N, PT_DIM, Q);
    for i in 0..N {
        for j in 0..PT_DIM {
            s_hat.set(i, j, gauss.sample_mod(Q, rng));
        }
    }

    let mut e_hat = ModMatrix::new(PT_DIM, N, Q);
    for i in 0..PT_DIM {
        for j in 0..N {
            e_hat.set(i, j, gauss.sample_mod(Q, rng));
        }
    }

    let a_bottom = s_hat.transpose().mul(&a_hat).add(&e_hat.scalar_mul(P));
    let a = ModMatrix::vstack(&a_hat, &a_bottom);
    let s = ModMatrix::vstack(&s_hat.negate(), &ModMatrix::identity(PT_DIM, Q));

    SecretKey { a, s }
}

/// Encrypts a d-dimensional plaintext vector, drawing randomness from OS
/// entropy.
pub fn encrypt(sk: &SecretKey, pt: &[Fp]) -> Result<Ciphertext> {
    encrypt_with_rng(sk, pt, &mut ChaCha20Rng::from_entropy())
}

/// Encrypts with the supplied RNG: `ctxt = A·r + v_pad + p·e` where r and
/// e are fresh error-distribution samples and v_pad zero-pads the
/// plaintext with n leading zeros.
pub fn encrypt_with_rng<R: Rng + CryptoRng + ?Sized>(
    sk: &SecretKey,
    pt: &[Fp],
    rng: &mut R,
) -> Result<Ciphertext> {
    ensure!(
        pt.len() == PT_DIM,
        "plaintext must have {} coordinates, got {}",
        PT_DIM,
        pt.len()
    );

    let gauss = GaussianSampler::new(SIGMA);

    let r = ModVector::from_coeffs(
        (0..N).map(|_| gauss.sample_mod(Q, rng)).collect(),
        Q,
    );
    let mut c = sk.a.mul_vec(&r);

    for (i, &v) in pt.iter().enumerate() {
        c.set(N + i, ModM::add(c.get(N + i), v.value(), Q));
    }

    for i in 0..N + PT_DIM {
        let noise = ModM::mul(P, gauss.sample_mod(Q, rng), Q);
        c.set(i, ModM::add(c.get(i), noise, Q));
    }

    Ok(Ciphertext { c })
}

/// Decrypts a ciphertext back to a d-dimensional plaintext vector.
///
/// Computes `w = Sᵀ·c` over Z_q, recenters each coordinate to
/// (−q/2, q/2], and reduces mod p.
pub fn decrypt(sk: &SecretKey, ct: &Ciphertext) -> Result<Vec<Fp>> {
    ensure!(
        ct.dim() == N + PT_DIM,
        "ciphertext must have {} coordinates, got {}",
        N + PT_DIM,
        ct.dim()
    );

    let w = sk.s.transpose().mul_vec(&ct.c);

    Ok((0..PT_DIM)
        .map(|i| Fp::from_signed(ModM::to_signed(w.get(i), Q)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(424242)
    }

    fn random_plaintext<R: Rng>(rng: &mut R) -> Vec<Fp> {
        (0..PT_DIM).map(|_| Fp::random(rng)).collect()
    }

    #[test]
    fn test_key_structure() {
        let mut rng = test_rng();
        let sk = keygen_with_rng(&mut rng);

        assert_eq!((sk.a.rows(), sk.a.cols()), (N + PT_DIM, N));
        assert_eq!((sk.s.rows(), sk.s.cols()), (N + PT_DIM, PT_DIM));

        // Bottom block of S is the identity.
        for i in 0..PT_DIM {
            for j in 0..PT_DIM {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(sk.s.get(N + i, j), expected);
            }
        }

        // SᵀA = p·Ê, so every entry is a p-multiple of a small residue.
        let sta = sk.s.transpose().mul(&sk.a);
        for i in 0..PT_DIM {
            for j in 0..N {
                let centered = ModM::to_signed(sta.get(i, j), Q);
                assert_eq!(centered.unsigned_abs() % P, 0);
            }
        }
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let mut rng = test_rng();
        let sk = keygen_with_rng(&mut rng);

        let pt = random_plaintext(&mut rng);
        let ct = encrypt_with_rng(&sk, &pt, &mut rng).unwrap();
        assert_eq!(decrypt(&sk, &ct).unwrap(), pt);
    }

    #[test]
    fn test_homomorphic_linear_combination() {
        let mut rng = test_rng();
        let sk = keygen_with_rng(&mut rng);

        let p1 = random_plaintext(&mut rng);
        let p2 = random_plaintext(&mut rng);
        let c1 = encrypt_with_rng(&sk, &p1, &mut rng).unwrap();
        let c2 = encrypt_with_rng(&sk, &p2, &mut rng).unwrap();

        let alpha = Fp::new(7);
        let beta = Fp::new(5);

        let combined = &c1 * alpha + &c2 * beta;
        let out = decrypt(&sk, &combined).unwrap();
        for i in 0..PT_DIM {
            assert_eq!(out[i], alpha * p1[i] + beta * p2[i], "coordinate {}", i);
        }
    }

    #[test]
    fn test_wrong_plaintext_dimension_rejected() {
        let mut rng = test_rng();
        let sk = keygen_with_rng(&mut rng);

        let short = vec![Fp::ONE; PT_DIM - 1];
        assert!(encrypt_with_rng(&sk, &short, &mut rng).is_err());
    }

    #[test]
    fn test_wrong_ciphertext_dimension_rejected() {
        let mut rng = test_rng();
        let sk = keygen_with_rng(&mut rng);

        let ct = Ciphertext {
            c: ModVector::new(N, Q),
        };
        assert!(decrypt(&sk, &ct).is_err());
    }
}
