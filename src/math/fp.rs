//! Arithmetic in the plaintext field F_p, p = 65537.
//!
//! Elements are canonical residues in [0, p). The field is a Fermat
//! prime, so the multiplicative group has order 2^16 and supports the
//! radix-2 evaluation domains used by the QAP reduction.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::P;

/// An element of F_p.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fp(u64);

impl Fp {
    /// The field modulus.
    pub const MODULUS: u64 = P;

    /// A generator of the multiplicative group F_p*.
    pub const GENERATOR: Fp = Fp(3);

    /// s with p - 1 = 2^s · t, t odd. For p = 65537: s = 16, t = 1.
    pub const TWO_ADICITY: u32 = 16;

    pub const ZERO: Fp = Fp(0);
    pub const ONE: Fp = Fp(1);

    /// Creates an element from an arbitrary integer, reducing mod p.
    pub fn new(value: u64) -> Self {
        Fp(value % P)
    }

    /// Creates an element from a signed integer.
    pub fn from_signed(value: i64) -> Self {
        let m = P as i64;
        Fp(value.rem_euclid(m) as u64)
    }

    /// The canonical representative in [0, p).
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Raises the element to an arbitrary u64 power by square-and-multiply.
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Fp::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// The multiplicative inverse, or `None` for zero.
    ///
    /// Uses Fermat's little theorem; the exponent p - 2 is 17 bits.
    pub fn inverse(self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(P - 2))
        }
    }

    /// A square root by Tonelli–Shanks, or `None` for non-residues.
    ///
    /// With t = 1 the usual pre-processing collapses: the algorithm walks
    /// the 2-Sylow subgroup directly.
    pub fn sqrt(self) -> Option<Self> {
        if self.is_zero() {
            return Some(Fp::ZERO);
        }

        // Euler criterion.
        if self.pow((P - 1) / 2) != Fp::ONE {
            return None;
        }

        // With t = 1: c = g^t, r = self^((t+1)/2), t_val = self^t.
        let mut c = Fp::GENERATOR;
        let mut r = self;
        let mut t_val = self;
        let mut m = Self::TWO_ADICITY;

        // Invariant: r^2 = self · t_val, ord(t_val) | 2^(m-1).
        while t_val != Fp::ONE {
            let mut i = 0u32;
            let mut probe = t_val;
            while probe != Fp::ONE {
                probe *= probe;
                i += 1;
            }

            let b = c.pow(1u64 << (m - i - 1));
            r *= b;
            c = b * b;
            t_val *= c;
            m = i;
        }

        Some(r)
    }

    /// The canonical 2^k-th root of unity for a domain of the given order.
    ///
    /// `order` must be a power of two dividing 2^16.
    pub fn root_of_unity(order: u64) -> Option<Self> {
        if !order.is_power_of_two() || order > (1 << Self::TWO_ADICITY) {
            return None;
        }
        Some(Self::GENERATOR.pow((P - 1) / order))
    }

    /// Samples a uniformly random field element.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Fp(rng.gen_range(0..P))
    }
}

impl Add for Fp {
    type Output = Fp;

    fn add(self, rhs: Fp) -> Fp {
        let sum = self.0 + rhs.0;
        Fp(if sum >= P { sum - P } else { sum })
    }
}

impl Sub for Fp {
    type Output = Fp;

    fn sub(self, rhs: Fp) -> Fp {
        Fp(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + P - rhs.0
        })
    }
}

impl Mul for Fp {
    type Output = Fp;

    fn mul(self, rhs: Fp) -> Fp {
        Fp((self.0 as u128 * rhs.0 as u128 % P as u128) as u64)
    }
}

impl Neg for Fp {
    type Output = Fp;

    fn neg(self) -> Fp {
        Fp(if self.0 == 0 { 0 } else { P - self.0 })
    }
}

impl AddAssign for Fp {
    fn add_assign(&mut self, rhs: Fp) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fp {
    fn sub_assign(&mut self, rhs: Fp) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fp {
    fn mul_assign(&mut self, rhs: Fp) {
        *self = *self * rhs;
    }
}

impl Sum for Fp {
    fn sum<I: Iterator<Item = Fp>>(iter: I) -> Fp {
        iter.fold(Fp::ZERO, |acc, x| acc + x)
    }
}

impl From<u64> for Fp {
    fn from(value: u64) -> Self {
        Fp::new(value)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
