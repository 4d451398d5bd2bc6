//! LWE ciphertext and key types

use std::ops::{Add, AddAssign, Mul, MulAssign};

use serde::{Deserialize, Serialize};

use crate::math::{Fp, ModMatrix, ModVector};

/// LWE secret key.
///
/// Jointly structured matrices over Z_q: `A = [Â ; ŜᵀÂ + p·Ê]` of size
/// (n+d)×n and `S = [−Ŝ ; I_d]` of size (n+d)×d, so that `SᵀA = p·Ê` and
/// `Sᵀ·c` isolates the plaintext portion of a ciphertext up to p-multiples
/// of noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey {
    /// Public-matrix part A, (n+d)×n
    pub a: ModMatrix,
    /// Secret part S, (n+d)×d
    pub s: ModMatrix,
}

/// LWE ciphertext: a vector `A·r + v_pad + p·e` in Z_q^{n+d}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    /// Ciphertext coordinates over Z_q
    pub c: ModVector,
}

/// Plaintext: a d-dimensional vector over the plaintext field.
pub type Plaintext = Vec<Fp>;

impl Ciphertext {
    /// Number of Z_q coordinates (n + d).
    pub fn dim(&self) -> usize {
        self.c.len()
    }
}

impl Add<&Ciphertext> for &Ciphertext {
    type Output = Ciphertext;

    fn add(self, rhs: &Ciphertext) -> Ciphertext {
        let mut c = self.c.clone();
        c.add_assign(&rhs.c);
        Ciphertext { c }
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;

    fn add(self, rhs: Ciphertext) -> Ciphertext {
        &self + &rhs
    }
}

impl AddAssign<&Ciphertext> for Ciphertext {
    fn add_assign(&mut self, rhs: &Ciphertext) {
        self.c.add_assign(&rhs.c);
    }
}

impl AddAssign<Ciphertext> for Ciphertext {
    fn add_assign(&mut self, rhs: Ciphertext) {
        self.c.add_assign(&rhs.c);
    }
}

impl Mul<u64> for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, scalar: u64) -> Ciphertext {
        let mut c = self.c.clone();
        c.scalar_mul_assign(scalar);
        Ciphertext { c }
    }
}

impl Mul<u64> for Ciphertext {
    type Output = Ciphertext;

    fn mul(self, scalar: u64) -> Ciphertext {
        &self * scalar
    }
}

impl MulAssign<u64> for Ciphertext {
    fn mul_assign(&mut self, scalar: u64) {
        self.c.scalar_mul_assign(scalar);
    }
}

/// Scalar multiplication by a plaintext-field element, lifted into Z_q.
impl Mul<Fp> for &Ciphertext {
    type Output = Ciphertext;

    fn mul(self, scalar: Fp) -> Ciphertext {
        self * scalar.value()
    }
}

impl Mul<Fp> for Ciphertext {
    type Output = Ciphertext;

    fn mul(self, scalar: Fp) -> Ciphertext {
        &self * scalar.value()
    }
}
