//! Rank-1 constraint systems over the plaintext field.
//!
//! A constraint system is a list of triples (a, b, c) of sparse linear
//! combinations; an assignment z (with z_0 = 1 prepended) satisfies it
//! when ⟨a_k, z⟩ · ⟨b_k, z⟩ = ⟨c_k, z⟩ for every constraint k.

pub mod examples;

use serde::{Deserialize, Serialize};

use crate::math::Fp;

pub use examples::generate_r1cs_example_with_field_input;

/// A sparse linear combination Σ coeff · z_index.
///
/// Variable index 0 denotes the constant one; primary-input variables
/// occupy indices 1..=num_inputs, auxiliary variables the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCombination {
    pub terms: Vec<(usize, Fp)>,
}

impl LinearCombination {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn add_term(&mut self, index: usize, coeff: Fp) {
        self.terms.push((index, coeff));
    }

    /// Evaluates against a full assignment (index 0 holding the one).
    pub fn evaluate(&self, full_assignment: &[Fp]) -> Fp {
        self.terms
            .iter()
            .map(|&(index, coeff)| coeff * full_assignment[index])
            .sum()
    }
}

/// A single rank-1 constraint ⟨a, z⟩ · ⟨b, z⟩ = ⟨c, z⟩.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub a: LinearCombination,
    pub b: LinearCombination,
    pub c: LinearCombination,
}

/// An R1CS instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSystem {
    pub primary_input_size: usize,
    pub auxiliary_input_size: usize,
    pub constraints: Vec<Constraint>,
}

impl ConstraintSystem {
    /// Total variable count, excluding the constant one.
    pub fn num_variables(&self) -> usize {
        self.primary_input_size + self.auxiliary_input_size
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Builds the full assignment (1, primary, auxiliary).
    pub fn full_assignment(&self, primary: &[Fp], auxiliary: &[Fp]) -> Vec<Fp> {
        let mut full = Vec::with_capacity(1 + self.num_variables());
        full.push(Fp::ONE);
        full.extend_from_slice(primary);
        full.extend_from_slice(auxiliary);
        full
    }

    /// Checks satisfaction of every constraint.
    pub fn is_satisfied(&self, primary: &[Fp], auxiliary: &[Fp]) -> bool {
        if primary.len() != self.primary_input_size
            || auxiliary.len() != self.auxiliary_input_size
        {
            return false;
        }

        let full = self.full_assignment(primary, auxiliary);
        self.constraints.iter().all(|cons| {
            cons.a.evaluate(&full) * cons.b.evaluate(&full) == cons.c.evaluate(&full)
        })
    }
}
