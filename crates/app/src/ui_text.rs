//! Text for status bars and side panels.

use lifesim_app::app_loop::{AppState, Scene};
use lifesim_app::format_fingerprint;
use lifesim_core::walker::StepOutcome;
use lifesim_core::{TaskKind, World};

pub fn status_text(app: &AppState, world: &World) -> String {
    match app.scene {
        Scene::Road => {
            let state = if world.board.is_finished() {
                "all done"
            } else if app.road_paused {
                "paused"
            } else {
                "running"
            };
            format!(
                "Road [{state}] frame {}  tasks {}/{}  (Space pause, R restart, 2/3 scenes)",
                world.board.frame(),
                world.board.completed_count(),
                world.board.tasks().count(),
            )
        }
        Scene::Grid => format!(
            "Grid #{}  walker ({}, {})  {}  (arrows step, R regenerate)",
            world.map_generation(),
            world.walker.pos.row,
            world.walker.pos.col,
            step_text(app.last_step),
        ),
        Scene::Player => format!(
            "Player {:?} {:?} frame {}  (arrows/WASD move)",
            world.level.player.facing,
            world.level.player.status,
            world.level.animation_frame(),
        ),
    }
}

pub fn step_text(outcome: Option<StepOutcome>) -> String {
    match outcome {
        None => "ready".to_string(),
        Some(StepOutcome::Moved(_)) => "moved".to_string(),
        Some(StepOutcome::Blocked(pos)) => format!("rock at ({}, {})", pos.row, pos.col),
        Some(StepOutcome::OutOfBounds) => "edge of map".to_string(),
    }
}

pub fn roster_lines(world: &World) -> Vec<String> {
    world
        .board
        .characters()
        .map(|character| {
            let target = character
                .target
                .and_then(|id| world.board.task(id))
                .map(|task| {
                    let marker = match task.kind {
                        TaskKind::Ordinary => "",
                        TaskKind::Milestone => "*",
                    };
                    format!("-> {:.1}{marker}", task.position)
                })
                .unwrap_or_else(|| {
                    let nothing_ahead =
                        world.board.nearest_task_ahead(character.progress).is_none();
                    let label =
                        if character.is_idle() || nothing_ahead { "idle" } else { "ready" };
                    label.to_string()
                });
            format!("{:<6} {:>5.1} {target}", character.name, character.progress)
        })
        .collect()
}

pub fn grid_footer(world: &World) -> String {
    format!(
        "rocks {}  map {}",
        world.map.rock_count(),
        format_fingerprint(world.map.fingerprint())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifesim_core::{GridPos, Settings};

    #[test]
    fn step_text_names_blocking_rock() {
        let text = step_text(Some(StepOutcome::Blocked(GridPos { row: 0, col: 1 })));
        assert_eq!(text, "rock at (0, 1)");
    }

    #[test]
    fn roster_lists_every_character() {
        let world = World::new(5, Settings::default()).expect("world");
        let lines = roster_lines(&world);
        assert_eq!(lines.len(), Settings::default().road.character_speeds.len());
        assert!(lines[0].starts_with("Ada"));
        assert!(lines[0].ends_with("ready"));
    }

    #[test]
    fn roster_marks_characters_with_nothing_ahead_as_idle() {
        let mut world = World::new(5, Settings::default()).expect("world");
        while !world.board.is_finished() {
            world.step_road();
        }
        assert!(roster_lines(&world).iter().all(|line| line.ends_with("idle")));
    }
}
