//! The scrolling-road scenario: a seeded task layout plus the camera mapping
//! progress values onto screen space.

use crate::mapgen::derive_map_seed;
use crate::mapgen::seed::UnitStream;
use crate::settings::RoadSettings;
use crate::tasks::{PROGRESS_MAX, TaskBoard};
use crate::types::TaskKind;

const ROSTER: [&str; 6] = ["Ada", "Basil", "Cleo", "Dara", "Emil", "Fern"];
const LANE_DASH_PERIOD: f32 = 48.0;
// Reserved generation index so road layouts never share a stream with grid maps.
const ROAD_STREAM: u32 = u32::MAX;

/// Build a board with `task_count` tasks scattered over the progress line and
/// one character per configured speed.
pub fn build_board(settings: &RoadSettings, seed: u64) -> TaskBoard {
    let mut stream = UnitStream::new(derive_map_seed(seed, ROAD_STREAM));
    let mut positions: Vec<f32> = (0..settings.task_count)
        .map(|_| (stream.next_unit() * f64::from(PROGRESS_MAX)) as f32)
        .collect();
    positions.sort_by(f32::total_cmp);

    let mut board = TaskBoard::new();
    for (index, position) in positions.into_iter().enumerate() {
        let is_milestone =
            settings.milestone_every > 0 && (index + 1) % settings.milestone_every == 0;
        let kind = if is_milestone { TaskKind::Milestone } else { TaskKind::Ordinary };
        board.add_task(position, kind);
    }
    for (index, &speed) in settings.character_speeds.iter().enumerate() {
        let name = match ROSTER.get(index) {
            Some(name) => (*name).to_string(),
            None => format!("Walker {}", index + 1),
        };
        board.add_character(name, speed);
    }
    board
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadView {
    pub viewport_width: f32,
    pub pixels_per_unit: f32,
    pub anchor: f32,
    pub scroll: f32,
}

impl RoadView {
    pub fn new(viewport_width: f32, settings: &RoadSettings) -> Self {
        Self {
            viewport_width,
            pixels_per_unit: settings.pixels_per_unit,
            anchor: settings.anchor.clamp(0.0, 1.0),
            scroll: 0.0,
        }
    }

    /// Scroll so the leading character sits at the anchor. The road start
    /// never moves right of the left edge.
    pub fn follow(&mut self, leading_progress: f32) {
        let target = leading_progress * self.pixels_per_unit - self.anchor * self.viewport_width;
        self.scroll = target.max(0.0);
    }

    pub fn screen_x(&self, progress: f32) -> f32 {
        progress * self.pixels_per_unit - self.scroll
    }

    pub fn is_visible(&self, progress: f32, margin: f32) -> bool {
        let x = self.screen_x(progress);
        x >= -margin && x <= self.viewport_width + margin
    }

    /// Phase of the lane dashes so they slide as the road scrolls.
    pub fn lane_dash_offset(&self) -> f32 {
        -(self.scroll % LANE_DASH_PERIOD)
    }

    pub fn lane_dash_period(&self) -> f32 {
        LANE_DASH_PERIOD
    }
}
