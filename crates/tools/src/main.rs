use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lifesim_core::road::build_board;
use lifesim_core::{SimEvent, Settings, TaskKind};

#[derive(Parser)]
#[command(author, version, about = "Run the road task scenario headless", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Maximum number of frames to simulate.
    #[arg(short, long, default_value_t = 10_000)]
    frames: u64,
    /// Optional TOML settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,
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
    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => Settings::default(),
    };

    let mut board = build_board(&settings.road, args.seed);
    let mut milestones = 0usize;
    while board.frame() < args.frames && !board.is_finished() {
        for event in board.step() {
            if let SimEvent::TaskCompleted { kind: TaskKind::Milestone, .. } = event {
                milestones += 1;
            }
        }
    }

    println!("Simulation complete.");
    println!("Frames: {}", board.frame());
    println!("Finished: {}", board.is_finished());
    println!(
        "Tasks completed: {}/{} ({} milestones)",
        board.completed_count(),
        board.tasks().count(),
        milestones
    );
    for character in board.characters() {
        println!("  {:<8} progress {:>6.2}", character.name, character.progress);
    }
    println!("Snapshot Hash: 0x{:016x}", board.snapshot_hash());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_flags() {
        let args = Args::parse_from(["simulate"]);
        assert_eq!(args.seed, 42);
    }
}
