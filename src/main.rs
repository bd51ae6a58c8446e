use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lattice_fold::{
    build_interaction_matrix, generate_initial, random_walk, write_rendering, MetropolisSampler,
    RenderOptions, SamplingMode, SimulationConfig,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Override the seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write a text picture of the final polymer to this file
    #[arg(short, long)]
    render: Option<PathBuf>,

    /// Label monomers with their chain index in the picture
    #[arg(long)]
    show_indices: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SimulationConfig::from_file(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let seed = args.seed.unwrap_or(config.seed);
    info!(
        "{} monomers, {} steps, T = {} K, seed {}, mode {:?}",
        config.length, config.n_steps, config.temperature, seed, config.mode
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let initial = generate_initial(config.length, config.origin())?;

    let (polymer, title) = match config.mode {
        SamplingMode::Metropolis => {
            let interaction = build_interaction_matrix(config.length, config.interaction, &mut rng)?;
            let params = config.metropolis_params()?;
            let results = MetropolisSampler::new(initial, &interaction, params, rng)?.run();
            let stats = results.statistics;

            println!("Metropolis Results for Lattice Polymer");
            println!("--------------------------------------");
            println!("Monomers: {}", config.length);
            println!("Steps: {}", results.energies.len());
            println!(
                "Accepted / rejected / invalid: {} / {} / {}",
                results.accepted, results.rejected, results.invalid
            );
            println!("Acceptance ratio: {:.4}", results.acceptance_ratio());
            println!("Final energy: {:.6e}", results.energies.last().copied().unwrap_or(0.0));
            println!("Mean energy: {:.6e} ± {:.6e}", stats.mean, stats.error);
            println!("Lowest energy: {:.6e}", stats.minimum);
            println!("Autocorrelation time: {:.2} steps", stats.autocorrelation_time);
            println!("Diameter: {:.3}", results.polymer.diameter());

            let title = format!(
                "N = {}, T = {} K, E = {:.3e}",
                config.length,
                config.temperature,
                results.energies.last().copied().unwrap_or(0.0)
            );
            (results.polymer, title)
        }
        SamplingMode::RandomWalk => {
            let n_steps = config.n_steps()?;
            let results = random_walk(initial, n_steps, &mut rng)?;

            println!("Random Walk Results for Lattice Polymer");
            println!("---------------------------------------");
            println!("Monomers: {}", config.length);
            println!("Successful moves: {} of {}", results.successful_moves, n_steps);
            println!("Diameter: {:.3}", results.polymer.diameter());

            let title = format!(
                "N = {}, {} pivot moves",
                config.length, results.successful_moves
            );
            (results.polymer, title)
        }
    };

    if let Some(path) = &args.render {
        let options = RenderOptions {
            show_indices: args.show_indices,
            title,
            ..Default::default()
        };
        write_rendering(&polymer, &options, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote snapshot to {}", path.display());
    }

    Ok(())
}
