//! Dense matrices and vectors over Z_m.
//!
//! The modulus is selected at run time and carried inside every value, so
//! matrices over the plaintext and ciphertext moduli coexist without any
//! process-wide arithmetic context. Storage is row-major `Vec<u64>`;
//! products accumulate in u128 before reduction.

use rand::{CryptoRng, Rng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::modular::ModM;
use super::sampler::uniform_mod;

/// A dense matrix over Z_m.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModMatrix {
    rows: usize,
    cols: usize,
    modulus: u64,
    data: Vec<u64>,
}

/// A dense vector over Z_m.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModVector {
    modulus: u64,
    data: Vec<u64>,
}

impl ModMatrix {
    /// The zero matrix of the given dimensions.
    pub fn new(rows: usize, cols: usize, modulus: u64) -> Self {
        Self {
            rows,
            cols,
            modulus,
            data: vec![0; rows * cols],
        }
    }

    /// The n×n identity.
    pub fn identity(n: usize, modulus: u64) -> Self {
        let mut m = Self::new(n, n, modulus);
        for i in 0..n {
            m.data[i * n + i] = 1 % modulus;
        }
        m
    }

    /// A matrix with independently near-uniform entries.
    pub fn random<R: Rng + CryptoRng + ?Sized>(
        rows: usize,
        cols: usize,
        modulus: u64,
        rng: &mut R,
    ) -> Self {
        let data = (0..rows * cols).map(|_| uniform_mod(modulus, rng)).collect();
        Self {
            rows,
            cols,
            modulus,
            data,
        }
    }

    /// Stacks `top` above `bottom`; column counts and moduli must agree.
    pub fn vstack(top: &ModMatrix, bottom: &ModMatrix) -> Self {
        assert_eq!(top.cols, bottom.cols, "vstack: column mismatch");
        assert_eq!(top.modulus, bottom.modulus, "vstack: modulus mismatch");

        let mut data = Vec::with_capacity((top.rows + bottom.rows) * top.cols);
        data.extend_from_slice(&top.data);
        data.extend_from_slice(&bottom.data);
        Self {
            rows: top.rows + bottom.rows,
            cols: top.cols,
            modulus: top.modulus,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: u64) {
        self.data[i * self.cols + j] = value % self.modulus;
    }

    /// The i-th row as a slice.
    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn transpose(&self) -> ModMatrix {
        let mut out = ModMatrix::new(self.cols, self.rows, self.modulus);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Matrix product over Z_m, parallelized across output rows.
    pub fn mul(&self, other: &ModMatrix) -> ModMatrix {
        assert_eq!(self.cols, other.rows, "mul: inner dimension mismatch");
        assert_eq!(self.modulus, other.modulus, "mul: modulus mismatch");

        let m = self.modulus as u128;
        let mut data = vec![0u64; self.rows * other.cols];
        data.par_chunks_mut(other.cols)
            .enumerate()
            .for_each(|(i, out_row)| {
                for k in 0..self.cols {
                    let a = self.data[i * self.cols + k];
                    if a == 0 {
                        continue;
                    }
                    let a = a as u128;
                    let src = &other.data[k * other.cols..(k + 1) * other.cols];
                    for (out, &b) in out_row.iter_mut().zip(src) {
                        let prod = a * b as u128 % m;
                        *out = ((*out as u128 + prod) % m) as u64;
                    }
                }
            });

        ModMatrix {
            rows: self.rows,
            cols: other.cols,
            modulus: self.modulus,
            data,
        }
    }

    /// Matrix-vector product over Z_m.
    pub fn mul_vec(&self, v: &ModVector) -> ModVector {
        assert_eq!(self.cols, v.len(), "mul_vec: dimension mismatch");
        assert_eq!(self.modulus, v.modulus, "mul_vec: modulus mismatch");

        let m = self.modulus as u128;
        let data = (0..self.rows)
            .map(|i| {
                let row = &self.data[i * self.cols..(i + 1) * self.cols];
                let mut acc: u128 = 0;
                for (&a, &b) in row.iter().zip(v.data.iter()) {
                    acc = (acc + a as u128 * b as u128) % m;
                }
                acc as u64
            })
            .collect();

        ModVector {
            modulus: self.modulus,
            data,
        }
    }

    /// Elementwise sum.
    pub fn add(&self, other: &ModMatrix) -> ModMatrix {
        assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        assert_eq!(self.modulus, other.modulus);

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| ModM::add(a, b, self.modulus))
            .collect();
        ModMatrix {
            rows: self.rows,
            cols: self.cols,
            modulus: self.modulus,
            data,
        }
    }

    /// Multiplies every entry by a scalar in Z_m.
    pub fn scalar_mul(&self, scalar: u64) -> ModMatrix {
        let data = self
            .data
            .iter()
            .map(|&a| ModM::mul(a, scalar, self.modulus))
            .collect();
        ModMatrix {
            rows: self.rows,
            cols: self.cols,
            modulus: self.modulus,
            data,
        }
    }

    /// Negates every entry.
    pub fn negate(&self) -> ModMatrix {
        let data = self
            .data
            .iter()
            .map(|&a| ModM::negate(a, self.modulus))
            .collect();
        ModMatrix {
            rows: self.rows,
            cols: self.cols,
            modulus: self.modulus,
            data,
        }
    }

    /// Overwrites every entry with zero.
    pub fn zeroize(&mut self) {
        self.data.iter_mut().for_each(|x| *x = 0);
    }

    /// The inverse over Z_m by Gauss–Jordan elimination, or `None` when
    /// no pivot with an invertible entry exists (singular matrix).
    pub fn inverse(&self) -> Option<ModMatrix> {
        assert_eq!(self.rows, self.cols, "inverse: matrix must be square");
        let n = self.rows;
        let m = self.modulus;

        let mut a = self.data.clone();
        let mut inv = ModMatrix::identity(n, m).data;

        for col in 0..n {
            let mut pivot = None;
            for r in col..n {
                if let Some(piv_inv) = ModM::inv(a[r * n + col], m) {
                    pivot = Some((r, piv_inv));
                    break;
                }
            }
            let (r, piv_inv) = pivot?;

            if r != col {
                for j in 0..n {
                    a.swap(r * n + j, col * n + j);
                    inv.swap(r * n + j, col * n + j);
                }
            }

            for j in 0..n {
                a[col * n + j] = ModM::mul(a[col * n + j], piv_inv, m);
                inv[col * n + j] = ModM::mul(inv[col * n + j], piv_inv, m);
            }

            for r2 in 0..n {
                if r2 == col {
                    continue;
                }
                let factor = a[r2 * n + col];
                if factor == 0 {
                    continue;
                }
                for j in 0..n {
                    let sub_a = ModM::mul(factor, a[col * n + j], m);
                    a[r2 * n + j] = ModM::sub(a[r2 * n + j], sub_a, m);
                    let sub_i = ModM::mul(factor, inv[col * n + j], m);
                    inv[r2 * n + j] = ModM::sub(inv[r2 * n + j], sub_i, m);
                }
            }
        }

        Some(ModMatrix {
            rows: n,
            cols: n,
            modulus: m,
            data: inv,
        })
    }
}

impl ModVector {
    /// The zero vector of the given length.
    pub fn new(len: usize, modulus: u64) -> Self {
        Self {
            modulus,
            data: vec![0; len],
        }
    }

    /// Wraps existing coefficients, reducing each mod m.
    pub fn from_coeffs(coeffs: Vec<u64>, modulus: u64) -> Self {
        let data = coeffs.into_iter().map(|c| c % modulus).collect();
        Self { modulus, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    pub fn get(&self, i: usize) -> u64 {
        self.data[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: u64) {
        self.data[i] = value % self.modulus;
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    /// Coordinatewise sum into `self`.
    pub fn add_assign(&mut self, other: &ModVector) {
        assert_eq!(self.len(), other.len(), "add_assign: length mismatch");
        assert_eq!(self.modulus, other.modulus, "add_assign: modulus mismatch");
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = ModM::add(*a, b, self.modulus);
        }
    }

    /// Coordinatewise scalar multiplication into `self`.
    pub fn scalar_mul_assign(&mut self, scalar: u64) {
        for a in self.data.iter_mut() {
            *a = ModM::mul(*a, scalar, self.modulus);
        }
    }

    /// Overwrites every entry with zero.
    pub fn zeroize(&mut self) {
        self.data.iter_mut().for_each(|x| *x = 0);
    }
}
