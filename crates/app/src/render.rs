//! Immediate-mode drawing for each scene. Everything is redrawn every frame.

use crate::hud_layout::{PanelRect, RoadLayout};
use crate::sprites::LoadedSheet;
use crate::ui_text::{grid_footer, roster_lines, status_text};
use lifesim_app::app_loop::AppState;
use lifesim_core::settings::Rgb;
use lifesim_core::{GridPos, TaskKind, Tile, World};
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.3, g: 0.3, b: 0.4, a: 1.0 };
const ROAD_COLOR: Color = Color { r: 0.22, g: 0.22, b: 0.25, a: 1.0 };
const LANE_COLOR: Color = Color { r: 0.9, g: 0.85, b: 0.5, a: 1.0 };
const CHARACTER_COLORS: [Color; 6] = [SKYBLUE, PINK, LIME, ORANGE, VIOLET, BEIGE];
const WALKER_COLOR: Color = Color { r: 0.95, g: 0.8, b: 0.2, a: 1.0 };
const PLACEHOLDER_COLOR: Color = GREEN;
const TEXT_SIZE: f32 = 18.0;
const LINE_STEP: f32 = 18.0;
const PAD: f32 = 8.0;

pub fn rgb(color: Rgb) -> Color {
    Color::from_rgba(color[0], color[1], color[2], 255)
}

pub fn draw_road_scene(world: &World, app: &AppState, layout: &RoadLayout) {
    draw_text(&status_text(app, world), layout.status.x, layout.status.y + 20.0, TEXT_SIZE, WHITE);
    for panel in [layout.road, layout.roster, layout.event_log] {
        draw_rectangle_lines(panel.x, panel.y, panel.width, panel.height, 1.0, BORDER_COLOR);
    }
    draw_road(world, layout.road);
    draw_lines(&roster_lines(world), layout.roster, WHITE);
    let log: Vec<String> = app.event_log.iter().cloned().collect();
    draw_lines(&log, layout.event_log, LIGHTGRAY);
}

fn draw_road(world: &World, panel: PanelRect) {
    let view = &world.road_view;
    let road_height = panel.height * 0.35;
    let road_y = panel.y + (panel.height - road_height) / 2.0;
    let center_y = road_y + road_height / 2.0;

    draw_rectangle(panel.x, road_y, panel.width, road_height, ROAD_COLOR);

    let period = view.lane_dash_period();
    let mut dash_x = panel.x + view.lane_dash_offset();
    while dash_x < panel.x + panel.width {
        let start = dash_x.max(panel.x);
        let end = (dash_x + period / 2.0).min(panel.x + panel.width);
        if end > start {
            draw_line(start, center_y, end, center_y, 3.0, LANE_COLOR);
        }
        dash_x += period;
    }

    for task in world.board.tasks() {
        if !view.is_visible(task.position, 0.0) {
            continue;
        }
        let x = panel.x + view.screen_x(task.position);
        let (radius, color) = match (task.kind, task.completed) {
            (_, true) => (5.0, DARKGRAY),
            (TaskKind::Ordinary, false) => (6.0, WHITE),
            (TaskKind::Milestone, false) => (10.0, GOLD),
        };
        draw_circle(x, road_y - 12.0, radius, color);
        draw_line(x, road_y - 12.0, x, road_y, 1.0, color);
    }

    let lane_step = road_height / (world.board.characters().count().max(1) + 1) as f32;
    for (index, character) in world.board.characters().enumerate() {
        if !view.is_visible(character.progress, 0.0) {
            continue;
        }
        let x = panel.x + view.screen_x(character.progress);
        let y = road_y + lane_step * (index + 1) as f32;
        let color = CHARACTER_COLORS[index % CHARACTER_COLORS.len()];
        draw_rectangle(x - 6.0, y - 6.0, 12.0, 12.0, color);
        let label_y = road_y + road_height + 16.0 + index as f32 * 14.0;
        draw_text(&character.name, x - 10.0, label_y, 14.0, color);
    }
}

fn draw_lines(lines: &[String], panel: PanelRect, color: Color) {
    let mut y = panel.y + PAD + TEXT_SIZE * 0.8;
    for line in lines {
        if y > panel.y + panel.height - PAD {
            break;
        }
        draw_text(line, panel.x + PAD, y, TEXT_SIZE, color);
        y += LINE_STEP;
    }
}

pub fn draw_grid_scene(world: &World, app: &AppState) {
    let grid = &world.settings().grid;
    let size = grid.tile_size;
    let grass = rgb(grid.grass_color);
    let rock = rgb(grid.rock_color);

    for (row_index, row) in world.map.rows().enumerate() {
        for (col_index, tile) in row.iter().enumerate() {
            let color = match tile {
                Tile::Grass => grass,
                Tile::Rock => rock,
            };
            draw_rectangle(col_index as f32 * size, row_index as f32 * size, size, size, color);
        }
    }

    let GridPos { row, col } = world.walker.pos;
    let half = size / 2.0;
    draw_circle(col as f32 * size + half, row as f32 * size + half, half * 0.7, WALKER_COLOR);

    let bottom = screen_height();
    draw_rectangle(0.0, bottom - 28.0, screen_width(), 28.0, Color { a: 0.7, ..BLACK });
    let footer = format!("{}  {}", status_text(app, world), grid_footer(world));
    draw_text(&footer, PAD, bottom - 9.0, TEXT_SIZE, WHITE);
}

pub fn draw_player_scene(world: &World, app: &AppState, sheet: Option<&LoadedSheet>) {
    clear_background(BLACK);

    let level = &world.level;
    let player = &level.player;
    let settings = &world.settings().player;
    match (sheet, level.current_frame()) {
        (Some(sheet), Some(frame)) => {
            sheet.draw_frame(frame, player.pos.x, player.pos.y, settings.width, settings.height);
        }
        _ => draw_rectangle(
            player.pos.x - settings.width / 2.0,
            player.pos.y - settings.height / 2.0,
            settings.width,
            settings.height,
            PLACEHOLDER_COLOR,
        ),
    }

    draw_text(&status_text(app, world), PAD, 20.0, TEXT_SIZE, WHITE);
}
