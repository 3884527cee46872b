use anyhow::Result;
use clap::Parser;
use lifesim_core::mapgen::{DEFAULT_OBSTACLE_CHANCE, derive_map_seed, generate};

#[derive(Parser)]
#[command(author, version, about = "Print a generated obstacle map", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Which map in the run's regeneration sequence to print.
    #[arg(short, long, default_value_t = 0)]
    generation: u32,
    #[arg(long, default_value_t = 20)]
    width: usize,
    #[arg(long, default_value_t = 15)]
    height: usize,
    #[arg(short, long, default_value_t = DEFAULT_OBSTACLE_CHANCE)]
    chance: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let map = generate(
        args.width,
        args.height,
        args.chance,
        derive_map_seed(args.seed, args.generation),
    )?;

    print!("{}", map.to_ascii());
    let total = map.width() * map.height();
    println!(
        "rocks: {}/{} ({:.1}%)",
        map.rock_count(),
        total,
        100.0 * map.rock_count() as f64 / total as f64
    );
    println!("fingerprint: 0x{:016x}", map.fingerprint());
    Ok(())
}
