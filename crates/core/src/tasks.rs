//! Task board: tasks on a 0..=100 progress line and the characters walking it.
//!
//! Each frame a character without a live target picks the nearest uncompleted
//! task at or ahead of its progress, then walks toward it at a fixed per-frame
//! increment. Reaching the task completes it.

use std::hash::Hasher;

use slotmap::SlotMap;
use tracing::debug;
use xxhash_rust::xxh3::Xxh3;

use crate::types::{CharacterId, SimEvent, TaskId, TaskKind};

pub const PROGRESS_MIN: f32 = 0.0;
pub const PROGRESS_MAX: f32 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub position: f32,
    pub kind: TaskKind,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub progress: f32,
    pub speed: f32,
    pub target: Option<TaskId>,
    idle: bool,
}

impl Character {
    pub fn is_idle(&self) -> bool {
        self.idle
    }
}

#[derive(Clone, Debug, Default)]
pub struct TaskBoard {
    tasks: SlotMap<TaskId, Task>,
    characters: SlotMap<CharacterId, Character>,
    frame: u64,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, position: f32, kind: TaskKind) -> TaskId {
        let position = clamp_progress(position);
        self.tasks.insert_with_key(|id| Task { id, position, kind, completed: false })
    }

    pub fn add_character(&mut self, name: impl Into<String>, speed: f32) -> CharacterId {
        let name = name.into();
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        self.characters.insert_with_key(|id| Character {
            id,
            name,
            progress: PROGRESS_MIN,
            speed,
            target: None,
            idle: false,
        })
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.values().filter(|task| task.completed).count()
    }

    /// The uncompleted task with `position >= progress` closest to `progress`.
    pub fn nearest_task_ahead(&self, progress: f32) -> Option<TaskId> {
        nearest_ahead(&self.tasks, progress)
    }

    /// Leading progress value across all characters, or 0 with no characters.
    pub fn leading_progress(&self) -> f32 {
        self.characters.values().map(|c| c.progress).fold(PROGRESS_MIN, f32::max)
    }

    pub fn is_finished(&self) -> bool {
        if self.tasks.values().all(|task| task.completed) {
            return true;
        }
        self.characters.values().all(|c| nearest_ahead(&self.tasks, c.progress).is_none())
    }

    /// Advance every character by one frame.
    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        self.frame += 1;

        for character in self.characters.values_mut() {
            let target_is_live = character
                .target
                .and_then(|id| self.tasks.get(id))
                .is_some_and(|task| !task.completed);

            if !target_is_live {
                character.target = nearest_ahead(&self.tasks, character.progress);
                match character.target {
                    Some(task_id) => {
                        character.idle = false;
                        let position = self.tasks[task_id].position;
                        debug!(name = %character.name, position, "target chosen");
                        events.push(SimEvent::TargetChosen {
                            character: character.id,
                            task: task_id,
                            position,
                        });
                    }
                    None => {
                        if !character.idle {
                            character.idle = true;
                            events.push(SimEvent::CharacterIdle { character: character.id });
                        }
                        continue;
                    }
                }
            }

            let Some(task_id) = character.target else {
                continue;
            };
            let task = &mut self.tasks[task_id];
            let remaining = task.position - character.progress;
            if remaining <= character.speed {
                character.progress = task.position;
                character.target = None;
                task.completed = true;
                debug!(name = %character.name, position = task.position, "task completed");
                events.push(SimEvent::TaskCompleted {
                    character: character.id,
                    task: task_id,
                    kind: task.kind,
                });
            } else {
                character.progress = clamp_progress(character.progress + character.speed);
            }
        }

        // Characters earlier in the order may still point at a task finished
        // later in this frame.
        for character in self.characters.values_mut() {
            if character.target.is_some_and(|id| self.tasks[id].completed) {
                character.target = None;
            }
        }

        events
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.frame);
        for task in self.tasks.values() {
            hasher.write_u32(task.position.to_bits());
            hasher.write_u8(u8::from(task.completed));
            hasher.write_u8(match task.kind {
                TaskKind::Ordinary => 0,
                TaskKind::Milestone => 1,
            });
        }
        for character in self.characters.values() {
            hasher.write_u32(character.progress.to_bits());
            let target_position = character.target.map(|id| self.tasks[id].position);
            hasher.write_u32(target_position.map_or(u32::MAX, f32::to_bits));
        }
        hasher.finish()
    }
}

fn nearest_ahead(tasks: &SlotMap<TaskId, Task>, progress: f32) -> Option<TaskId> {
    tasks
        .values()
        .filter(|task| !task.completed && task.position >= progress)
        .min_by(|a, b| {
            let da = a.position - progress;
            let db = b.position - progress;
            da.total_cmp(&db).then(a.id.cmp(&b.id))
        })
        .map(|task| task.id)
}

fn clamp_progress(value: f32) -> f32 {
    if !value.is_finite() {
        return PROGRESS_MIN;
    }
    value.clamp(PROGRESS_MIN, PROGRESS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_tasks(positions: &[f32]) -> (TaskBoard, Vec<TaskId>) {
        let mut board = TaskBoard::new();
        let ids = positions.iter().map(|&p| board.add_task(p, TaskKind::Ordinary)).collect();
        (board, ids)
    }

    #[test]
    fn nearest_task_ignores_tasks_behind() {
        let (board, ids) = board_with_tasks(&[10.0, 40.0, 55.0]);
        assert_eq!(board.nearest_task_ahead(30.0), Some(ids[1]));
        assert_eq!(board.nearest_task_ahead(60.0), None);
    }

    #[test]
    fn nearest_task_includes_task_at_current_progress() {
        let (board, ids) = board_with_tasks(&[25.0, 30.0]);
        assert_eq!(board.nearest_task_ahead(25.0), Some(ids[0]));
    }

    #[test]
    fn nearest_task_tie_goes_to_first_inserted() {
        let (board, ids) = board_with_tasks(&[50.0, 50.0]);
        assert_eq!(board.nearest_task_ahead(20.0), Some(ids[0]));
    }

    #[test]
    fn task_positions_are_clamped_to_line() {
        let (board, ids) = board_with_tasks(&[-5.0, 140.0]);
        assert_eq!(board.task(ids[0]).map(|t| t.position), Some(0.0));
        assert_eq!(board.task(ids[1]).map(|t| t.position), Some(100.0));
    }

    #[test]
    fn character_walks_to_target_without_overshoot() {
        let (mut board, ids) = board_with_tasks(&[1.0]);
        let walker = board.add_character("Ada", 0.4);

        board.step();
        board.step();
        let progress = board.character(walker).map(|c| c.progress);
        assert!((progress.unwrap_or_default() - 0.8).abs() < 1e-5);

        let events = board.step();
        assert_eq!(board.character(walker).map(|c| c.progress), Some(1.0));
        assert!(board.task(ids[0]).is_some_and(|t| t.completed));
        assert!(events.iter().any(|e| matches!(e, SimEvent::TaskCompleted { .. })));
    }

    #[test]
    fn character_retargets_when_target_completed_by_other() {
        let (mut board, ids) = board_with_tasks(&[2.0, 6.0]);
        let fast = board.add_character("Fast", 5.0);
        let slow = board.add_character("Slow", 0.5);

        board.step();
        assert_eq!(board.character(slow).and_then(|c| c.target), Some(ids[1]));
        assert_eq!(board.character(fast).and_then(|c| c.target), None);
    }

    #[test]
    fn character_goes_idle_once_when_nothing_ahead() {
        let (mut board, _) = board_with_tasks(&[]);
        board.add_character("Lonely", 1.0);
        let first = board.step();
        let second = board.step();
        assert_eq!(first.len(), 1);
        assert!(matches!(first[0], SimEvent::CharacterIdle { .. }));
        assert!(second.is_empty());
        assert!(board.is_finished());
    }

    #[test]
    fn board_finishes_once_all_tasks_are_completed() {
        let (mut board, _) = board_with_tasks(&[5.0, 15.0, 90.0]);
        board.add_character("Runner", 2.0);
        for _ in 0..200 {
            board.step();
        }
        assert!(board.is_finished());
        assert_eq!(board.completed_count(), 3);
    }

    #[test]
    fn zero_speed_character_only_completes_tasks_at_its_position() {
        let (mut board, ids) = board_with_tasks(&[0.0, 10.0]);
        let stuck = board.add_character("Stuck", 0.0);
        board.step();
        board.step();
        assert!(board.task(ids[0]).is_some_and(|t| t.completed));
        assert_eq!(board.character(stuck).map(|c| c.progress), Some(0.0));
        assert!(!board.task(ids[1]).is_some_and(|t| t.completed));
    }

    #[test]
    fn snapshot_hash_tracks_state() {
        let (mut board, _) = board_with_tasks(&[10.0, 20.0]);
        board.add_character("A", 1.0);
        let before = board.snapshot_hash();
        assert_eq!(before, board.clone().snapshot_hash());
        board.step();
        assert_ne!(before, board.snapshot_hash());
    }
}
