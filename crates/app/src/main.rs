mod frame_input;
mod hud_layout;
mod render;
mod sprites;
mod ui_text;
mod window_config;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use frame_input::capture_frame_input;
use hud_layout::{compute_road_layout, setup_layout};
use lifesim_app::app_loop::{AppState, Scene};
use lifesim_app::seed::{SeedChoice, generate_runtime_seed};
use lifesim_app::session_file::{SESSION_FORMAT_VERSION, SessionFile};
use lifesim_app::{format_fingerprint, format_seed};
use lifesim_core::{Settings, World};
use macroquad::prelude::*;
use macroquad::window::Conf;
use sprites::LoadedSheet;
use taffy::TaffyTree;
use tracing::{error, info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneArg {
    Road,
    Grid,
    Player,
}

impl From<SceneArg> for Scene {
    fn from(value: SceneArg) -> Self {
        match value {
            SceneArg::Road => Scene::Road,
            SceneArg::Grid => Scene::Grid,
            SceneArg::Player => Scene::Player,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Agentic life simulation prototypes", long_about = None)]
struct Cli {
    /// Seed for task layout and map generation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Scene shown at startup.
    #[arg(long, value_enum, default_value_t = SceneArg::Road)]
    scene: SceneArg,
    /// TOML settings file; defaults apply when it does not exist.
    #[arg(long, default_value = "lifesim.toml")]
    config: PathBuf,
    /// Skip writing the last-session record on exit.
    #[arg(long)]
    no_session: bool,
}

fn window_conf() -> Conf {
    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config).unwrap_or_default();
    window_config::build_window_conf(&settings.window)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        error!("lifesim exited with an error: {err:#}");
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    let seed = SeedChoice::resolve(cli.seed, generate_runtime_seed());
    info!(seed = %format_seed(seed.value()), source = seed.label(), "starting run");

    let background = render::rgb(settings.window.background);
    let sheet =
        LoadedSheet::load_optional(settings.player.sprite_sheet.as_deref(), &settings.player.sheet)
            .await;
    let mut world = World::new(seed.value(), settings).context("building world")?;
    let mut app = AppState::new(cli.scene.into());

    // Closing the window goes through `tick` so the session is still recorded.
    prevent_quit();

    let mut taffy = TaffyTree::new();
    let nodes = setup_layout(&mut taffy).map_err(|err| anyhow!("layout setup: {err}"))?;

    loop {
        let input = capture_frame_input();
        app.tick(&mut world, &input);
        if app.quit {
            break;
        }

        clear_background(background);
        match app.scene {
            Scene::Road => {
                let layout =
                    compute_road_layout(&mut taffy, &nodes, screen_width(), screen_height())
                        .map_err(|err| anyhow!("road layout: {err}"))?;
                world.road_view.viewport_width = layout.road.width;
                render::draw_road_scene(&world, &app, &layout);
            }
            Scene::Grid => render::draw_grid_scene(&world, &app),
            Scene::Player => render::draw_player_scene(&world, &app, sheet.as_ref()),
        }

        next_frame().await;
    }

    if !cli.no_session {
        write_session(&world, &app);
    }
    Ok(())
}

fn write_session(world: &World, app: &AppState) {
    let Some(path) = SessionFile::get_default_path() else {
        warn!("no data directory available, session not recorded");
        return;
    };
    let updated_at_unix_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as u64);
    let session = SessionFile {
        format_version: SESSION_FORMAT_VERSION,
        run_seed: world.seed(),
        scene: app.scene.label().to_string(),
        road_frame: world.board.frame(),
        tasks_completed: world.board.completed_count(),
        tasks_total: world.board.tasks().count(),
        map_generation: world.map_generation(),
        map_fingerprint_hex: format_fingerprint(world.map.fingerprint()),
        updated_at_unix_ms,
    };
    match session.write_atomic(&path) {
        Ok(()) => info!(path = %path.display(), "session recorded"),
        Err(err) => warn!(%err, path = %path.display(), "failed to record session"),
    }
}
