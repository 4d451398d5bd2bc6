//! Quadratic arithmetic programs derived from R1CS.
//!
//! An R1CS with m constraints and I public inputs maps to polynomials
//! A_i, B_i, C_i (one triple per variable) over an evaluation domain of
//! size ≥ m + I + 1; an assignment z satisfies the system iff
//! A(x)·B(x) − C(x) is divisible by the domain's vanishing polynomial,
//! where A = Σ z_i·A_i and so on. The extra I + 1 domain points carry
//! input-consistency terms that bind the A-side to the public inputs.
//!
//! Only the two operations the SNARG consumes are exposed: evaluating a
//! fresh QAP instance at a verifier-chosen point, and computing the
//! witness-side coefficient vectors including the quotient polynomial H.

pub mod domain;

use eyre::{ensure, Result};

use crate::math::Fp;
use crate::r1cs::ConstraintSystem;

pub use domain::Radix2Domain;

/// One QAP instance evaluated at a point τ.
#[derive(Debug, Clone)]
pub struct QapInstanceEvaluation {
    /// A_i(τ) for every variable (index 0 = the constant one).
    pub at: Vec<Fp>,
    /// B_i(τ) likewise.
    pub bt: Vec<Fp>,
    /// C_i(τ) likewise.
    pub ct: Vec<Fp>,
    /// The quotient query (1, τ, τ², …, τ^m).
    pub ht: Vec<Fp>,
    /// Z(τ), the vanishing polynomial at τ.
    pub zt: Fp,
}

/// The witness side of the QAP reduction.
#[derive(Debug, Clone)]
pub struct QapWitness {
    /// The full variable assignment (1, x, w).
    pub assignment: Vec<Fp>,
    /// Coefficients of H' = H + d₂·A + d₁·B + d₁d₂·Z − d₃, length m + 1.
    pub coefficients_for_h: Vec<Fp>,
}

fn qap_domain(cs: &ConstraintSystem) -> Result<Radix2Domain> {
    Radix2Domain::new(cs.num_constraints() + cs.primary_input_size + 1)
}

/// Evaluates the QAP instance polynomials of `cs` at τ.
pub fn qap_instance_at(cs: &ConstraintSystem, tau: Fp) -> Result<QapInstanceEvaluation> {
    let domain = qap_domain(cs)?;
    let u = domain.evaluate_all_lagrange_polynomials(tau);

    let num_vars = cs.num_variables() + 1;
    let mut at = vec![Fp::ZERO; num_vars];
    let mut bt = vec![Fp::ZERO; num_vars];
    let mut ct = vec![Fp::ZERO; num_vars];

    // Input-consistency terms occupy the domain points after the
    // constraints, on the A side only.
    for i in 0..=cs.primary_input_size {
        at[i] += u[cs.num_constraints() + i];
    }

    for (k, constraint) in cs.constraints.iter().enumerate() {
        for &(index, coeff) in &constraint.a.terms {
            at[index] += coeff * u[k];
        }
        for &(index, coeff) in &constraint.b.terms {
            bt[index] += coeff * u[k];
        }
        for &(index, coeff) in &constraint.c.terms {
            ct[index] += coeff * u[k];
        }
    }

    let mut ht = Vec::with_capacity(domain.size() + 1);
    let mut power = Fp::ONE;
    for _ in 0..=domain.size() {
        ht.push(power);
        power *= tau;
    }

    Ok(QapInstanceEvaluation {
        at,
        bt,
        ct,
        ht,
        zt: domain.vanishing_at(tau),
    })
}

/// Computes the QAP witness for a satisfying R1CS assignment.
///
/// The blinds d₁, d₂, d₃ shift A, B, C by multiples of Z; the returned H
/// coefficients absorb the matching corrections so that
/// (A + d₁Z)(B + d₂Z) − (C + d₃Z) = H'·Z still holds.
pub fn qap_witness_map(
    cs: &ConstraintSystem,
    primary: &[Fp],
    auxiliary: &[Fp],
    d1: Fp,
    d2: Fp,
    d3: Fp,
) -> Result<QapWitness> {
    ensure!(
        primary.len() == cs.primary_input_size,
        "primary input must have {} elements, got {}",
        cs.primary_input_size,
        primary.len()
    );
    ensure!(
        auxiliary.len() == cs.auxiliary_input_size,
        "auxiliary input must have {} elements, got {}",
        cs.auxiliary_input_size,
        auxiliary.len()
    );

    let domain = qap_domain(cs)?;
    let m = domain.size();
    let full = cs.full_assignment(primary, auxiliary);

    // Evaluations of A, B, C on the domain: one point per constraint,
    // then the input-consistency points on the A side.
    let mut a_evals = vec![Fp::ZERO; m];
    let mut b_evals = vec![Fp::ZERO; m];
    let mut c_evals = vec![Fp::ZERO; m];

    for i in 0..=cs.primary_input_size {
        a_evals[cs.num_constraints() + i] = full[i];
    }
    for (k, constraint) in cs.constraints.iter().enumerate() {
        a_evals[k] += constraint.a.evaluate(&full);
        b_evals[k] += constraint.b.evaluate(&full);
        c_evals[k] += constraint.c.evaluate(&full);
    }

    let mut a_coeffs = a_evals;
    domain.ifft_in_place(&mut a_coeffs);
    let mut b_coeffs = b_evals;
    domain.ifft_in_place(&mut b_coeffs);
    let mut c_coeffs = c_evals;
    domain.ifft_in_place(&mut c_coeffs);

    // H = (A·B − C)/Z, computed pointwise on a coset where Z is the
    // nonzero constant g^m − 1.
    let mut a_coset = a_coeffs.clone();
    domain.coset_fft_in_place(&mut a_coset);
    let mut b_coset = b_coeffs.clone();
    domain.coset_fft_in_place(&mut b_coset);
    let mut c_coset = c_coeffs.clone();
    domain.coset_fft_in_place(&mut c_coset);

    let z_inv = domain
        .vanishing_on_coset()
        .inverse()
        .expect("coset avoids the vanishing set");
    let mut h = Vec::with_capacity(m + 1);
    for i in 0..m {
        h.push((a_coset[i] * b_coset[i] - c_coset[i]) * z_inv);
    }
    domain.icoset_fft_in_place(&mut h);

    // Blind corrections: H' = H + d₂·A + d₁·B − d₃ + d₁d₂·Z.
    for i in 0..m {
        h[i] += d2 * a_coeffs[i] + d1 * b_coeffs[i];
    }
    h[0] -= d3;
    h[0] -= d1 * d2;
    h.push(d1 * d2);

    Ok(QapWitness {
        assignment: full,
        coefficients_for_h: h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r1cs::generate_r1cs_example_with_field_input;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn eval_poly(coeffs: &[Fp], x: Fp) -> Fp {
        coeffs.iter().rev().fold(Fp::ZERO, |acc, &c| acc * x + c)
    }

    fn inner(a: &[Fp], b: &[Fp]) -> Fp {
        a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
    }

    /// A'(τ)·B'(τ) − C'(τ) = H'(τ)·Z(τ) for a satisfying assignment.
    fn check_divisibility(tau: Fp, d1: Fp, d2: Fp, d3: Fp, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let ex = generate_r1cs_example_with_field_input(20, 4, &mut rng);
        let cs = &ex.constraint_system;

        let inst = qap_instance_at(cs, tau).unwrap();
        let wit =
            qap_witness_map(cs, &ex.primary_input, &ex.auxiliary_input, d1, d2, d3).unwrap();

        let a = inner(&inst.at, &wit.assignment) + d1 * inst.zt;
        let b = inner(&inst.bt, &wit.assignment) + d2 * inst.zt;
        let c = inner(&inst.ct, &wit.assignment) + d3 * inst.zt;
        let h = inner(&inst.ht, &wit.coefficients_for_h);

        assert_eq!(a * b - c, h * inst.zt);
        assert_eq!(h, eval_poly(&wit.coefficients_for_h, tau));
    }

    #[test]
    fn test_divisibility_generic_point() {
        check_divisibility(Fp::new(31337), Fp::new(11), Fp::new(22), Fp::new(33), 1);
    }

    #[test]
    fn test_divisibility_zero_blinds() {
        check_divisibility(Fp::new(4242), Fp::ZERO, Fp::ZERO, Fp::ZERO, 2);
    }

    #[test]
    fn test_divisibility_tau_on_domain() {
        // τ inside the evaluation domain degenerates to Z(τ) = 0.
        let domain = Radix2Domain::new(25).unwrap();
        check_divisibility(domain.element(3), Fp::new(5), Fp::new(6), Fp::new(7), 3);
    }

    #[test]
    fn test_unsatisfied_assignment_breaks_divisibility() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let ex = generate_r1cs_example_with_field_input(20, 4, &mut rng);
        let cs = &ex.constraint_system;

        let mut bad_aux = ex.auxiliary_input.clone();
        bad_aux[0] += Fp::ONE;

        // The witness map itself succeeds; the identity it feeds fails at
        // a random point with probability 1 − deg/p.
        let tau = Fp::new(12345);
        let inst = qap_instance_at(cs, tau).unwrap();
        let wit = qap_witness_map(cs, &ex.primary_input, &bad_aux, Fp::ZERO, Fp::ZERO, Fp::ZERO)
            .unwrap();

        let a = inner(&inst.at, &wit.assignment);
        let b = inner(&inst.bt, &wit.assignment);
        let c = inner(&inst.ct, &wit.assignment);
        let h = inner(&inst.ht, &wit.coefficients_for_h);
        assert_ne!(a * b - c, h * inst.zt);
    }

    #[test]
    fn test_instance_dimensions() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let ex = generate_r1cs_example_with_field_input(10, 3, &mut rng);
        let cs = &ex.constraint_system;

        let inst = qap_instance_at(cs, Fp::new(99)).unwrap();
        assert_eq!(inst.at.len(), cs.num_variables() + 1);
        assert_eq!(inst.bt.len(), cs.num_variables() + 1);
        assert_eq!(inst.ct.len(), cs.num_variables() + 1);
        // 10 constraints + 3 inputs + 1 rounds up to 16 domain points.
        assert_eq!(inst.ht.len(), 17);
    }

    #[test]
    fn test_witness_input_length_checked() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let ex = generate_r1cs_example_with_field_input(10, 3, &mut rng);
        let cs = &ex.constraint_system;

        let short = &ex.primary_input[..2];
        assert!(
            qap_witness_map(cs, short, &ex.auxiliary_input, Fp::ZERO, Fp::ZERO, Fp::ZERO)
                .is_err()
        );
    }
}
