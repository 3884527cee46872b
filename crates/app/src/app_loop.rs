use std::collections::VecDeque;

use lifesim_core::player::PlayerInput;
use lifesim_core::walker::StepOutcome;
use lifesim_core::{Facing, SimEvent, TaskKind, World};
use macroquad::prelude::KeyCode;
use tracing::{info, warn};

const EVENT_LOG_CAPACITY: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scene {
    #[default]
    Road,
    Grid,
    Player,
}

impl Scene {
    pub fn label(self) -> &'static str {
        match self {
            Scene::Road => "road",
            Scene::Grid => "grid",
            Scene::Player => "player",
        }
    }
}

/// Keys observed during one rendered frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Keys that went down this frame.
    pub keys_pressed: Vec<KeyCode>,
    /// Keys currently held.
    pub keys_down: Vec<KeyCode>,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// The window asked to close this frame.
    pub quit_requested: bool,
}

impl FrameInput {
    fn pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn player_input(&self) -> PlayerInput {
        PlayerInput {
            up: self.down(KeyCode::Up) || self.down(KeyCode::W),
            down: self.down(KeyCode::Down) || self.down(KeyCode::S),
            left: self.down(KeyCode::Left) || self.down(KeyCode::A),
            right: self.down(KeyCode::Right) || self.down(KeyCode::D),
        }
    }

    /// First arrow key pressed this frame, checked up, down, left, right.
    pub fn step_direction(&self) -> Option<Facing> {
        [
            (KeyCode::Up, Facing::Up),
            (KeyCode::Down, Facing::Down),
            (KeyCode::Left, Facing::Left),
            (KeyCode::Right, Facing::Right),
        ]
        .into_iter()
        .find(|(key, _)| self.pressed(*key))
        .map(|(_, facing)| facing)
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub scene: Scene,
    pub road_paused: bool,
    pub quit: bool,
    pub last_step: Option<StepOutcome>,
    /// Most recent road events, newest last.
    pub event_log: VecDeque<String>,
}

impl AppState {
    pub fn new(scene: Scene) -> Self {
        Self { scene, ..Self::default() }
    }

    /// Handle input and advance the active scene by one frame.
    pub fn tick(&mut self, world: &mut World, input: &FrameInput) {
        if input.quit_requested || input.pressed(KeyCode::Escape) {
            self.quit = true;
            return;
        }

        let scene_keys = [
            (KeyCode::Key1, Scene::Road),
            (KeyCode::Key2, Scene::Grid),
            (KeyCode::Key3, Scene::Player),
        ];
        for (key, scene) in scene_keys {
            if input.pressed(key) && self.scene != scene {
                info!(from = self.scene.label(), to = scene.label(), "scene switched");
                self.scene = scene;
            }
        }

        match self.scene {
            Scene::Road => self.tick_road(world, input),
            Scene::Grid => self.tick_grid(world, input),
            Scene::Player => world.update_level(input.player_input(), input.dt),
        }
    }

    fn tick_road(&mut self, world: &mut World, input: &FrameInput) {
        if input.pressed(KeyCode::Space) {
            self.road_paused = !self.road_paused;
        }
        if input.pressed(KeyCode::R) {
            world.restart_road();
            self.event_log.clear();
        }
        if self.road_paused || world.board.is_finished() {
            return;
        }

        for event in world.step_road() {
            if let Some(line) = describe_event(world, &event) {
                if let SimEvent::TaskCompleted { .. } = event {
                    info!(frame = world.board.frame(), "{line}");
                }
                self.push_log(line);
            }
        }
    }

    fn tick_grid(&mut self, world: &mut World, input: &FrameInput) {
        if input.pressed(KeyCode::R) {
            match world.regenerate_map() {
                Ok(()) => self.last_step = None,
                Err(err) => warn!(%err, "map regeneration failed"),
            }
        }
        if let Some(facing) = input.step_direction() {
            self.last_step = Some(world.step_walker(facing));
        }
    }

    fn push_log(&mut self, line: String) {
        if self.event_log.len() == EVENT_LOG_CAPACITY {
            self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn describe_event(world: &World, event: &SimEvent) -> Option<String> {
    let name = |id| world.board.character(id).map_or("?", |c| c.name.as_str());
    match *event {
        SimEvent::TargetChosen { .. } => None,
        SimEvent::TaskCompleted { character, task, kind } => {
            let position = world.board.task(task).map_or(0.0, |t| t.position);
            let label = match kind {
                TaskKind::Ordinary => "task",
                TaskKind::Milestone => "milestone",
            };
            Some(format!("{} finished {label} at {position:.1}", name(character)))
        }
        SimEvent::CharacterIdle { character } => {
            Some(format!("{} has nothing left ahead", name(character)))
        }
    }
}
