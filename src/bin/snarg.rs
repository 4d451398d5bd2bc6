//! snarg: end-to-end driver for the lattice ppSNARG.
//!
//! Generates a random satisfiable R1CS instance of the requested size,
//! runs the generator, prover, and verifier, and prints the outcome.
//! Exits 0 iff verification accepts.

use clap::Parser;
use eyre::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lattice_snarg::r1cs::generate_r1cs_example_with_field_input;
use lattice_snarg::snarg::{generator_with_rng, prover_with_rng, verifier};

#[derive(Parser)]
#[command(name = "snarg")]
#[command(about = "Run the lattice ppSNARG on a random R1CS instance")]
#[command(version)]
struct Args {
    /// Number of R1CS constraints
    n_constraints: usize,

    /// Number of public inputs
    n_inputs: usize,

    /// Random seed for a deterministic run (optional)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    info!(
        constraints = args.n_constraints,
        inputs = args.n_inputs,
        "generating R1CS example"
    );
    let example =
        generate_r1cs_example_with_field_input(args.n_constraints, args.n_inputs, &mut rng);

    let keypair = generator_with_rng(&example.constraint_system, &mut rng)?;
    info!(crs_rows = keypair.crs.enc_queries.len(), "setup complete");

    let proof = prover_with_rng(
        &keypair.crs,
        &example.primary_input,
        &example.auxiliary_input,
        &mut rng,
    )?;
    info!("proof generated");

    let accepted = verifier(&keypair.vk, &example.primary_input, &proof);
    println!("{}", accepted);

    if !accepted {
        std::process::exit(1);
    }
    Ok(())
}
