//! Panel layout for the road scene.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    main_row: NodeId,
    road: NodeId,
    side_col: NodeId,
    roster: NodeId,
    event_log: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct RoadLayout {
    pub status: PanelRect,
    pub road: PanelRect,
    pub roster: PanelRect,
    pub event_log: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> taffy::TaffyResult<LayoutNodes> {
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(30.0) },
        margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(10.0) },
        ..Default::default()
    })?;
    let road = taffy.new_leaf(Style { flex_grow: 3.0, ..Default::default() })?;
    let roster = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(10.0) },
        ..Default::default()
    })?;
    let event_log = taffy.new_leaf(Style { flex_grow: 1.2, ..Default::default() })?;
    let side_col = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            flex_grow: 1.0,
            margin: taffy::Rect { left: length(10.0), right: zero(), top: zero(), bottom: zero() },
            ..Default::default()
        },
        &[roster, event_log],
    )?;
    let main_row = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_grow: 1.0,
            ..Default::default()
        },
        &[road, side_col],
    )?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect {
                left: length(10.0),
                right: length(10.0),
                top: length(10.0),
                bottom: length(10.0),
            },
            ..Default::default()
        },
        &[status, main_row],
    )?;
    Ok(LayoutNodes { root, status, main_row, road, side_col, roster, event_log })
}

pub fn compute_road_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> taffy::TaffyResult<RoadLayout> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let l_root = taffy.layout(nodes.root)?;
    let l_main = taffy.layout(nodes.main_row)?;
    let l_side = taffy.layout(nodes.side_col)?;

    Ok(RoadLayout {
        status: panel_rect(taffy.layout(nodes.status)?, &[l_root]),
        road: panel_rect(taffy.layout(nodes.road)?, &[l_root, l_main]),
        roster: panel_rect(taffy.layout(nodes.roster)?, &[l_root, l_main, l_side]),
        event_log: panel_rect(taffy.layout(nodes.event_log)?, &[l_root, l_main, l_side]),
    })
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }
    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
