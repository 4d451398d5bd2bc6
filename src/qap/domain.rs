//! Radix-2 evaluation domains over the plaintext field.
//!
//! The multiplicative group of F_65537 has order 2^16, so subgroups of
//! every power-of-two order up to 2^16 exist. Coset evaluation shifts by
//! the field generator g; dividing by the vanishing polynomial on that
//! coset needs g^m != 1, which caps usable domains at order 2^15.

use eyre::{ensure, Result};

use crate::math::Fp;

/// A multiplicative subgroup {1, ω, ω², …} of power-of-two order with
/// FFT-based evaluation and interpolation.
#[derive(Debug, Clone)]
pub struct Radix2Domain {
    size: usize,
    omega: Fp,
    omega_inv: Fp,
    size_inv: Fp,
    shift: Fp,
    shift_inv: Fp,
}

impl Radix2Domain {
    /// The smallest usable domain with at least `min_size` points.
    pub fn new(min_size: usize) -> Result<Self> {
        ensure!(min_size > 0, "domain must be non-empty");
        let size = min_size.next_power_of_two();
        ensure!(
            size <= 1 << (Fp::TWO_ADICITY - 1),
            "domain of size {} exceeds the field's radix-2 capacity",
            size
        );

        let omega = Fp::root_of_unity(size as u64)
            .expect("size is a power of two within the two-adicity");
        let shift = Fp::GENERATOR;

        Ok(Self {
            size,
            omega,
            omega_inv: omega.pow(size as u64 - 1),
            size_inv: Fp::new(size as u64).pow(Fp::MODULUS - 2),
            shift,
            shift_inv: shift.pow(Fp::MODULUS - 2),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The i-th domain element ω^i.
    pub fn element(&self, i: usize) -> Fp {
        self.omega.pow(i as u64)
    }

    /// Evaluates the polynomial with the given coefficients on the domain
    /// in place, zero-padding to the domain size.
    pub fn fft_in_place(&self, values: &mut Vec<Fp>) {
        values.resize(self.size, Fp::ZERO);
        butterfly(values, self.omega);
    }

    /// Interpolates domain evaluations back to coefficients in place.
    pub fn ifft_in_place(&self, values: &mut Vec<Fp>) {
        values.resize(self.size, Fp::ZERO);
        butterfly(values, self.omega_inv);
        for v in values.iter_mut() {
            *v *= self.size_inv;
        }
    }

    /// Evaluates on the coset g·H.
    pub fn coset_fft_in_place(&self, values: &mut Vec<Fp>) {
        values.resize(self.size, Fp::ZERO);
        scale_by_powers(values, self.shift);
        butterfly(values, self.omega);
    }

    /// Interpolates coset evaluations back to coefficients.
    pub fn icoset_fft_in_place(&self, values: &mut Vec<Fp>) {
        self.ifft_in_place(values);
        scale_by_powers(values, self.shift_inv);
    }

    /// The vanishing polynomial Z(t) = t^m − 1.
    pub fn vanishing_at(&self, t: Fp) -> Fp {
        t.pow(self.size as u64) - Fp::ONE
    }

    /// Z evaluated anywhere on the coset g·H: the constant g^m − 1.
    pub fn vanishing_on_coset(&self) -> Fp {
        self.shift.pow(self.size as u64) - Fp::ONE
    }

    /// Evaluates every Lagrange basis polynomial of the domain at t.
    ///
    /// For t outside the domain, L_i(t) = Z(t)·ω^i / (m·(t − ω^i)). For t
    /// on the domain the result degenerates to the indicator vector of t.
    pub fn evaluate_all_lagrange_polynomials(&self, t: Fp) -> Vec<Fp> {
        let z_t = self.vanishing_at(t);

        if z_t.is_zero() {
            let mut u = vec![Fp::ZERO; self.size];
            let mut power = Fp::ONE;
            for coeff in u.iter_mut() {
                if power == t {
                    *coeff = Fp::ONE;
                    break;
                }
                power *= self.omega;
            }
            return u;
        }

        let mut u = Vec::with_capacity(self.size);
        let mut omega_i = Fp::ONE;
        for _ in 0..self.size {
            let denom = (t - omega_i)
                .inverse()
                .expect("t is outside the domain, so t - ω^i is nonzero");
            u.push(z_t * omega_i * self.size_inv * denom);
            omega_i *= self.omega;
        }
        u
    }
}

/// In-place iterative radix-2 FFT with the given principal root.
fn butterfly(values: &mut [Fp], omega: Fp) {
    let n = values.len();
    debug_assert!(n.is_power_of_two());
    let log_n = n.trailing_zeros();
    if log_n == 0 {
        return;
    }

    for i in 0..n {
        let j = ((i as u32).reverse_bits() >> (32 - log_n)) as usize;
        if i < j {
            values.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let w_len = omega.pow((n / len) as u64);
        for start in (0..n).step_by(len) {
            let mut w = Fp::ONE;
            for k in 0..len / 2 {
                let u = values[start + k];
                let v = values[start + k + len / 2] * w;
                values[start + k] = u + v;
                values[start + k + len / 2] = u - v;
                w *= w_len;
            }
        }
        len <<= 1;
    }
}

fn scale_by_powers(values: &mut [Fp], base: Fp) {
    let mut power = Fp::ONE;
    for v in values.iter_mut() {
        *v *= power;
        power *= base;
    }
}
