//! Slicing a single sprite-sheet image into an evenly spaced grid of frames.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Facing;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("sheet must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("image {width}x{height} does not split into {columns}x{rows} whole frames")]
    UnevenGrid { width: u32, height: u32, columns: u32, rows: u32 },
    #[error("display size must be non-zero")]
    EmptyDisplaySize,
    #[error("frame ({row}, {col}) is outside a {columns}x{rows} sheet")]
    FrameOutOfRange { row: u32, col: u32, columns: u32, rows: u32 },
}

/// Source rectangle of one frame inside the sheet image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub image_width: u32,
    pub image_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub display_width: u32,
    pub display_height: u32,
}

impl SheetLayout {
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(SheetError::EmptyGrid { columns: self.columns, rows: self.rows });
        }
        if self.image_width % self.columns != 0
            || self.image_height % self.rows != 0
            || self.image_width == 0
            || self.image_height == 0
        {
            return Err(SheetError::UnevenGrid {
                width: self.image_width,
                height: self.image_height,
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.display_width == 0 || self.display_height == 0 {
            return Err(SheetError::EmptyDisplaySize);
        }
        Ok(())
    }

    pub fn frame_width(&self) -> u32 {
        self.image_width / self.columns.max(1)
    }

    pub fn frame_height(&self) -> u32 {
        self.image_height / self.rows.max(1)
    }

    pub fn frames_in_row(&self) -> usize {
        self.columns as usize
    }

    pub fn frame_rect(&self, row: u32, col: u32) -> Result<FrameRect, SheetError> {
        if row >= self.rows || col >= self.columns {
            return Err(SheetError::FrameOutOfRange {
                row,
                col,
                columns: self.columns,
                rows: self.rows,
            });
        }
        let width = self.frame_width();
        let height = self.frame_height();
        Ok(FrameRect { x: col * width, y: row * height, width, height })
    }

    /// Horizontal and vertical factors that rescale a frame to its display size.
    pub fn display_scale(&self) -> (f32, f32) {
        (
            self.display_width as f32 / self.frame_width().max(1) as f32,
            self.display_height as f32 / self.frame_height().max(1) as f32,
        )
    }
}

/// Assigns one sheet row to each facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionRows {
    pub down: u32,
    pub left: u32,
    pub right: u32,
    pub up: u32,
}

impl Default for DirectionRows {
    fn default() -> Self {
        Self { down: 0, left: 1, right: 2, up: 3 }
    }
}

impl DirectionRows {
    pub fn row_for(&self, facing: Facing) -> u32 {
        match facing {
            Facing::Down => self.down,
            Facing::Left => self.left,
            Facing::Right => self.right,
            Facing::Up => self.up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionalSheet {
    pub layout: SheetLayout,
    pub rows: DirectionRows,
}

impl DirectionalSheet {
    pub fn new(layout: SheetLayout, rows: DirectionRows) -> Result<Self, SheetError> {
        layout.validate()?;
        for facing in Facing::ALL {
            layout.frame_rect(rows.row_for(facing), 0)?;
        }
        Ok(Self { layout, rows })
    }

    pub fn frame_for(&self, facing: Facing, frame: usize) -> FrameRect {
        let col = (frame % self.layout.frames_in_row()) as u32;
        let width = self.layout.frame_width();
        let height = self.layout.frame_height();
        FrameRect { x: col * width, y: self.rows.row_for(facing) * height, width, height }
    }
}
