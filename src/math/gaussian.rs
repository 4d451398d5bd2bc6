//! Discrete Gaussian sampling
//!
//! Provides a rejection sampler for the discrete Gaussian distribution
//! over Z, used for secret keys, encryption randomness, and error terms.

use rand::Rng;

use super::modular::ModM;

/// Discrete Gaussian sampler over Z using rejection sampling.
///
/// Samples are cut off at 6σ; the mass beyond the tailcut is below 2^-25
/// per draw, far inside the scheme's decryption error target.
#[derive(Debug, Clone)]
pub struct GaussianSampler {
    /// Standard deviation σ
    sigma: f64,
    /// Reject samples beyond this bound
    tailcut: i64,
}

impl GaussianSampler {
    /// Create a new Gaussian sampler with given standard deviation
    pub fn new(sigma: f64) -> Self {
        let tailcut = (sigma * 6.0).ceil() as i64;
        Self { sigma, tailcut }
    }

    /// Get the standard deviation
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Sample a single value from the discrete Gaussian D_σ
    ///
    /// Proposes uniformly on [-tailcut, tailcut] and accepts with
    /// probability exp(-x²/(2σ²)).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let sigma_sq_2 = 2.0 * self.sigma * self.sigma;

        loop {
            let x = rng.gen_range(-self.tailcut..=self.tailcut);

            let x_sq = (x * x) as f64;
            let prob = (-x_sq / sigma_sq_2).exp();

            let u: f64 = rng.gen();
            if u < prob {
                return x;
            }
        }
    }

    /// Sample a single value reduced into [0, m)
    pub fn sample_mod<R: Rng + ?Sized>(&self, m: u64, rng: &mut R) -> u64 {
        ModM::from_signed(self.sample(rng), m)
    }

    /// Sample a vector of Gaussian values
    pub fn sample_vec<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<i64> {
        (0..len).map(|_| self.sample(rng)).collect()
    }
}
