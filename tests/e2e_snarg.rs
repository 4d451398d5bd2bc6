//! End-to-end SNARG tests: generator → prover → verifier.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use lattice_snarg::math::{Fp, ModM};
use lattice_snarg::params::{P, Q};
use lattice_snarg::r1cs::generate_r1cs_example_with_field_input;
use lattice_snarg::snarg::{generator_with_rng, prover_with_rng, verifier, Crs, Proof, VerificationKey};

fn run_snarg(num_constraints: usize, num_inputs: usize, seed: u64) -> bool {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let example = generate_r1cs_example_with_field_input(num_constraints, num_inputs, &mut rng);
    assert!(example
        .constraint_system
        .is_satisfied(&example.primary_input, &example.auxiliary_input));

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();
    let proof = prover_with_rng(
        &keypair.crs,
        &example.primary_input,
        &example.auxiliary_input,
        &mut rng,
    )
    .unwrap();
    verifier(&keypair.vk, &example.primary_input, &proof)
}

#[test]
fn test_completeness_100_constraints() {
    assert!(run_snarg(100, 5, 2001));
}

#[test]
fn test_completeness_1000_constraints() {
    assert!(run_snarg(1000, 20, 2002));
}

#[test]
fn test_completeness_small_instances() {
    assert!(run_snarg(1, 0, 2003));
    assert!(run_snarg(7, 2, 2004));
    assert!(run_snarg(16, 16, 2005));
}

#[test]
fn test_wrong_public_input_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(2006);
    let example = generate_r1cs_example_with_field_input(50, 5, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();
    let proof = prover_with_rng(
        &keypair.crs,
        &example.primary_input,
        &example.auxiliary_input,
        &mut rng,
    )
    .unwrap();

    let mut wrong = example.primary_input.clone();
    wrong[0] += Fp::ONE;
    assert!(!verifier(&keypair.vk, &wrong, &proof));
}

#[test]
fn test_unsatisfying_witness_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(2007);
    let example = generate_r1cs_example_with_field_input(50, 5, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();

    let mut bad_aux = example.auxiliary_input.clone();
    bad_aux[0] += Fp::ONE;
    let proof = prover_with_rng(&keypair.crs, &example.primary_input, &bad_aux, &mut rng).unwrap();
    assert!(!verifier(&keypair.vk, &example.primary_input, &proof));
}

/// Soundness probe: flip one ciphertext coordinate by the smallest step
/// the low-order-bit encoding can see. A perturbation by a p-multiple is
/// absorbed into the noise slot by construction, so the probe adds 1.
#[test]
fn test_perturbed_proof_rejected_statistically() {
    let runs = 10;
    let mut rejections = 0;

    for run in 0..runs {
        let mut rng = ChaCha20Rng::seed_from_u64(3000 + run);
        let example = generate_r1cs_example_with_field_input(50, 5, &mut rng);

        let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();
        let proof = prover_with_rng(
            &keypair.crs,
            &example.primary_input,
            &example.auxiliary_input,
            &mut rng,
        )
        .unwrap();
        assert!(verifier(&keypair.vk, &example.primary_input, &proof));

        let mut tampered = proof.clone();
        // Alternate between a lattice-part and a payload-part coordinate.
        let idx = if run % 2 == 0 { 17 } else { tampered.response.dim() - 3 };
        let bumped = ModM::add(tampered.response.c.get(idx), 1, Q);
        tampered.response.c.set(idx, bumped);

        if !verifier(&keypair.vk, &example.primary_input, &tampered) {
            rejections += 1;
        }
    }

    assert!(
        rejections >= 9,
        "only {}/{} perturbed proofs rejected",
        rejections,
        runs
    );
}

/// A perturbation by exactly p lands in the noise slot and must leave
/// the decrypted payload, and therefore the decision, unchanged.
#[test]
fn test_p_multiple_perturbation_is_noise() {
    let mut rng = ChaCha20Rng::seed_from_u64(2008);
    let example = generate_r1cs_example_with_field_input(50, 5, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();
    let proof = prover_with_rng(
        &keypair.crs,
        &example.primary_input,
        &example.auxiliary_input,
        &mut rng,
    )
    .unwrap();

    let mut noisy = proof.clone();
    let bumped = ModM::add(noisy.response.c.get(5), P, Q);
    noisy.response.c.set(5, bumped);
    assert!(verifier(&keypair.vk, &example.primary_input, &noisy));
}

#[test]
fn test_truncated_proof_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(2009);
    let example = generate_r1cs_example_with_field_input(20, 3, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();

    use lattice_snarg::math::ModVector;
    let stub = Proof {
        response: lattice_snarg::lwe::Ciphertext {
            c: ModVector::new(7, Q),
        },
    };
    assert!(!verifier(&keypair.vk, &example.primary_input, &stub));
}

#[test]
fn test_prover_rejects_mismatched_crs() {
    let mut rng = ChaCha20Rng::seed_from_u64(2010);
    let example = generate_r1cs_example_with_field_input(20, 3, &mut rng);
    let other = generate_r1cs_example_with_field_input(40, 3, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();

    // CRS rows sized for one system, constraint system swapped for another.
    let mismatched = Crs {
        enc_queries: keypair.crs.enc_queries.clone(),
        constraint_system: other.constraint_system.clone(),
    };
    assert!(prover_with_rng(
        &mismatched,
        &other.primary_input,
        &other.auxiliary_input,
        &mut rng
    )
    .is_err());
}

#[test]
fn test_serialization_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(2011);
    let example = generate_r1cs_example_with_field_input(20, 3, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng).unwrap();
    let proof = prover_with_rng(
        &keypair.crs,
        &example.primary_input,
        &example.auxiliary_input,
        &mut rng,
    )
    .unwrap();

    let crs_bytes = bincode::serialize(&keypair.crs).unwrap();
    let vk_bytes = bincode::serialize(&keypair.vk).unwrap();
    let proof_bytes = bincode::serialize(&proof).unwrap();

    let crs2: Crs = bincode::deserialize(&crs_bytes).unwrap();
    let vk2: VerificationKey = bincode::deserialize(&vk_bytes).unwrap();
    let proof2: Proof = bincode::deserialize(&proof_bytes).unwrap();

    // Byte-identical on re-serialization.
    assert_eq!(bincode::serialize(&crs2).unwrap(), crs_bytes);
    assert_eq!(bincode::serialize(&vk2).unwrap(), vk_bytes);
    assert_eq!(bincode::serialize(&proof2).unwrap(), proof_bytes);

    // Semantically equivalent under use.
    assert!(verifier(&vk2, &example.primary_input, &proof2));
    let reproof = prover_with_rng(
        &crs2,
        &example.primary_input,
        &example.auxiliary_input,
        &mut rng,
    )
    .unwrap();
    assert!(verifier(&keypair.vk, &example.primary_input, &reproof));
}
