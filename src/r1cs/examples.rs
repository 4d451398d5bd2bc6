//! Random satisfiable R1CS instances for tests and the CLI driver.

use rand::Rng;

use crate::math::Fp;

use super::{Constraint, ConstraintSystem, LinearCombination};

/// A generated example: a constraint system together with a satisfying
/// split assignment.
#[derive(Debug, Clone)]
pub struct R1csExample {
    pub constraint_system: ConstraintSystem,
    pub primary_input: Vec<Fp>,
    pub auxiliary_input: Vec<Fp>,
}

/// Generates a random satisfiable R1CS instance with field-valued inputs.
///
/// Builds a chain over two random seed values: odd-numbered constraints
/// multiply the two most recent values, even-numbered ones add them, and
/// a final constraint squares the running sum of all variables. The first
/// `num_inputs` variables of the resulting assignment are declared
/// primary.
///
/// # Panics
///
/// Panics when `num_inputs > num_constraints + 2` (the chain introduces
/// one variable per constraint plus the two seeds) or when
/// `num_constraints == 0`.
pub fn generate_r1cs_example_with_field_input<R: Rng + ?Sized>(
    num_constraints: usize,
    num_inputs: usize,
    rng: &mut R,
) -> R1csExample {
    assert!(num_constraints >= 1, "need at least one constraint");
    assert!(
        num_inputs <= num_constraints + 2,
        "too many inputs for the chain construction"
    );

    let mut cs = ConstraintSystem {
        primary_input_size: num_inputs,
        auxiliary_input_size: 2 + num_constraints - num_inputs,
        constraints: Vec::new(),
    };

    let mut full_variable_assignment: Vec<Fp> = Vec::with_capacity(2 + num_constraints);
    let mut a = Fp::random(rng);
    let mut b = Fp::random(rng);
    full_variable_assignment.push(a);
    full_variable_assignment.push(b);

    for i in 0..num_constraints - 1 {
        let mut lc_a = LinearCombination::new();
        let mut lc_b = LinearCombination::new();
        let mut lc_c = LinearCombination::new();

        let tmp = if i % 2 == 1 {
            // a * b = c
            lc_a.add_term(i + 1, Fp::ONE);
            lc_b.add_term(i + 2, Fp::ONE);
            lc_c.add_term(i + 3, Fp::ONE);
            a * b
        } else {
            // (a + b) * 1 = c
            lc_a.add_term(i + 1, Fp::ONE);
            lc_a.add_term(i + 2, Fp::ONE);
            lc_b.add_term(0, Fp::ONE);
            lc_c.add_term(i + 3, Fp::ONE);
            a + b
        };
        full_variable_assignment.push(tmp);
        a = b;
        b = tmp;

        cs.add_constraint(Constraint {
            a: lc_a,
            b: lc_b,
            c: lc_c,
        });
    }

    // Final constraint: (Σ z_i) * (Σ z_i) = z_last.
    let mut lc_a = LinearCombination::new();
    let mut lc_b = LinearCombination::new();
    let mut lc_c = LinearCombination::new();
    let mut fin = Fp::ZERO;
    for i in 1..cs.num_variables() {
        lc_a.add_term(i, Fp::ONE);
        lc_b.add_term(i, Fp::ONE);
        fin += full_variable_assignment[i - 1];
    }
    lc_c.add_term(cs.num_variables(), Fp::ONE);
    cs.add_constraint(Constraint {
        a: lc_a,
        b: lc_b,
        c: lc_c,
    });
    full_variable_assignment.push(fin * fin);

    let primary_input = full_variable_assignment[..num_inputs].to_vec();
    let auxiliary_input = full_variable_assignment[num_inputs..].to_vec();

    R1csExample {
        constraint_system: cs,
        primary_input,
        auxiliary_input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_example_is_satisfied() {
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        for (nc, ni) in [(1, 0), (5, 2), (20, 5), (100, 10)] {
            let ex = generate_r1cs_example_with_field_input(nc, ni, &mut rng);
            assert_eq!(ex.constraint_system.num_constraints(), nc);
            assert_eq!(ex.primary_input.len(), ni);
            assert!(
                ex.constraint_system
                    .is_satisfied(&ex.primary_input, &ex.auxiliary_input),
                "example {}x{} not satisfied",
                nc,
                ni
            );
        }
    }

    #[test]
    fn test_variable_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(18);
        let ex = generate_r1cs_example_with_field_input(10, 3, &mut rng);
        assert_eq!(ex.constraint_system.num_variables(), 12);
        assert_eq!(ex.auxiliary_input.len(), 9);
    }

    #[test]
    fn test_perturbed_witness_fails() {
        let mut rng = ChaCha20Rng::seed_from_u64(19);
        let ex = generate_r1cs_example_with_field_input(10, 3, &mut rng);
        let mut bad = ex.auxiliary_input.clone();
        bad[0] += Fp::ONE;
        assert!(!ex.constraint_system.is_satisfied(&ex.primary_input, &bad));
    }
}
