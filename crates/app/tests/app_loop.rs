use lifesim_app::app_loop::{AppState, FrameInput, Scene};
use lifesim_core::walker::StepOutcome;
use lifesim_core::{GridPos, Settings, Tile, World};
use macroquad::prelude::KeyCode;

fn world() -> World {
    World::new(12345, Settings::default()).expect("default settings build a world")
}

fn press(keys: &[KeyCode]) -> FrameInput {
    FrameInput { keys_pressed: keys.to_vec(), dt: 1.0 / 60.0, ..Default::default() }
}

fn hold(keys: &[KeyCode], dt: f32) -> FrameInput {
    FrameInput { keys_down: keys.to_vec(), dt, ..Default::default() }
}

#[test]
fn number_keys_switch_scenes() {
    let mut world = world();
    let mut app = AppState::new(Scene::Road);

    app.tick(&mut world, &press(&[KeyCode::Key2]));
    assert_eq!(app.scene, Scene::Grid);
    app.tick(&mut world, &press(&[KeyCode::Key3]));
    assert_eq!(app.scene, Scene::Player);
    app.tick(&mut world, &press(&[KeyCode::Key1]));
    assert_eq!(app.scene, Scene::Road);
}

#[test]
fn escape_requests_quit_without_stepping() {
    let mut world = world();
    let mut app = AppState::new(Scene::Road);
    app.tick(&mut world, &press(&[KeyCode::Escape]));
    assert!(app.quit);
    assert_eq!(world.board.frame(), 0);
}

#[test]
fn window_close_request_ends_loop() {
    let mut world = world();
    let mut app = AppState::new(Scene::Grid);
    let close = FrameInput { quit_requested: true, ..press(&[KeyCode::Down]) };
    app.tick(&mut world, &close);
    assert!(app.quit);
    assert_eq!(world.walker.pos, GridPos::ORIGIN);
}

#[test]
fn road_steps_every_frame_until_paused() {
    let mut world = world();
    let mut app = AppState::new(Scene::Road);

    app.tick(&mut world, &press(&[]));
    app.tick(&mut world, &press(&[]));
    assert_eq!(world.board.frame(), 2);

    app.tick(&mut world, &press(&[KeyCode::Space]));
    assert!(app.road_paused);
    app.tick(&mut world, &press(&[]));
    assert_eq!(world.board.frame(), 2);
}

#[test]
fn road_runs_to_completion_and_logs_completions() {
    let mut world = world();
    let mut app = AppState::new(Scene::Road);
    for _ in 0..5_000 {
        app.tick(&mut world, &press(&[]));
        if world.board.is_finished() {
            break;
        }
    }
    assert!(world.board.is_finished());
    assert!(!app.event_log.is_empty());
    assert!(app.event_log.len() <= 8);
}

#[test]
fn road_restart_clears_log_and_progress() {
    let mut world = world();
    let mut app = AppState::new(Scene::Road);
    for _ in 0..400 {
        app.tick(&mut world, &press(&[]));
    }
    app.tick(&mut world, &press(&[KeyCode::R]));
    assert!(app.event_log.is_empty());
    assert_eq!(world.board.completed_count(), 0);
}

#[test]
fn grid_arrow_press_moves_walker_one_tile() {
    let mut world = world();
    world.map.set_tile(GridPos { row: 1, col: 0 }, Tile::Grass);
    let mut app = AppState::new(Scene::Grid);

    app.tick(&mut world, &press(&[KeyCode::Down]));
    assert_eq!(app.last_step, Some(StepOutcome::Moved(GridPos { row: 1, col: 0 })));

    app.tick(&mut world, &press(&[KeyCode::Left]));
    assert_eq!(app.last_step, Some(StepOutcome::OutOfBounds));
    assert_eq!(world.walker.pos, GridPos { row: 1, col: 0 });
}

#[test]
fn grid_regenerate_resets_walker() {
    let mut world = world();
    world.map.set_tile(GridPos { row: 0, col: 1 }, Tile::Grass);
    let mut app = AppState::new(Scene::Grid);
    app.tick(&mut world, &press(&[KeyCode::Right]));
    let before = world.map.fingerprint();

    app.tick(&mut world, &press(&[KeyCode::R]));

    assert_ne!(before, world.map.fingerprint());
    assert_eq!(world.walker.pos, GridPos::ORIGIN);
    assert_eq!(app.last_step, None);
}

#[test]
fn player_scene_moves_with_held_keys() {
    let mut world = world();
    let mut app = AppState::new(Scene::Player);
    let start = world.level.player.pos;

    app.tick(&mut world, &hold(&[KeyCode::Right], 0.5));

    assert!((world.level.player.pos.x - (start.x + 100.0)).abs() < 1e-3);
    assert_eq!(world.level.player.pos.y, start.y);
}

#[test]
fn road_does_not_advance_in_other_scenes() {
    let mut world = world();
    let mut app = AppState::new(Scene::Grid);
    app.tick(&mut world, &press(&[]));
    assert_eq!(world.board.frame(), 0);
}
