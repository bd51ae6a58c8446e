//! Fold a chain at decreasing temperatures
//!
//! Run with: cargo run --release --example fold_spiral
//!
//! Runs the Metropolis sampler on the same 30-monomer chain and interaction
//! matrix at a few temperatures and prints the final conformations.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lattice_fold::{
    build_interaction_matrix, render, Fill, MetropolisParams, MetropolisSampler, Polymer,
    RenderOptions,
};

fn main() -> lattice_fold::Result<()> {
    env_logger::init();

    let length = 30;
    let n_steps = 20_000;
    let seed = 2024;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let interaction =
        build_interaction_matrix(length, Fill::Range(-10.4e-21, -3.47e-21), &mut rng)?;

    for temperature in [1000.0, 300.0, 50.0] {
        let params = MetropolisParams::new(n_steps, temperature);
        let sampler = MetropolisSampler::new(
            Polymer::straight(length)?,
            &interaction,
            params,
            ChaCha8Rng::seed_from_u64(seed),
        )?;
        let results = sampler.run();

        let options = RenderOptions {
            show_indices: true,
            title: format!(
                "T = {} K: E = {:.3e} J, <E> = {:.3e} J, diameter {:.2}",
                temperature,
                results.energies.last().copied().unwrap_or(0.0),
                results.statistics.mean,
                results.polymer.diameter()
            ),
            ..Default::default()
        };
        println!("{}", render(&results.polymer, &options));
        println!();
    }

    Ok(())
}
