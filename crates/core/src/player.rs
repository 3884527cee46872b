//! Free-moving player controller with directional animation state.
//!
//! Input resolves to a direction on each axis; the direction is normalized so
//! diagonal movement is no faster than straight movement. Horizontal and
//! vertical displacement are applied separately so collision can hook in
//! between them.

use serde::{Deserialize, Serialize};

use crate::types::{Facing, Vec2};

pub const DEFAULT_PLAYER_SPEED: f32 = 200.0;

/// Held direction keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionStatus {
    #[default]
    Idle,
    Walking,
}

/// Which animation row and cycle the player should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationKey {
    pub facing: Facing,
    pub status: MotionStatus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerController {
    pub pos: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    pub facing: Facing,
    pub status: MotionStatus,
    pub bounds: Option<Bounds>,
}

impl PlayerController {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            direction: Vec2::ZERO,
            speed,
            facing: Facing::Down,
            status: MotionStatus::Idle,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn apply_input(&mut self, input: PlayerInput) {
        self.direction.y = if input.up {
            -1.0
        } else if input.down {
            1.0
        } else {
            0.0
        };
        self.direction.x = if input.right {
            1.0
        } else if input.left {
            -1.0
        } else {
            0.0
        };

        if self.direction.x > 0.0 {
            self.facing = Facing::Right;
        } else if self.direction.x < 0.0 {
            self.facing = Facing::Left;
        } else if self.direction.y < 0.0 {
            self.facing = Facing::Up;
        } else if self.direction.y > 0.0 {
            self.facing = Facing::Down;
        }
        self.status =
            if self.direction.is_zero() { MotionStatus::Idle } else { MotionStatus::Walking };
    }

    pub fn move_by(&mut self, dt: f32) {
        if !self.direction.is_zero() {
            self.direction = self.direction.normalized();
        }

        self.pos.x += self.direction.x * self.speed * dt;
        if let Some(bounds) = self.bounds {
            self.pos.x = self.pos.x.clamp(0.0, bounds.width);
        }

        self.pos.y += self.direction.y * self.speed * dt;
        if let Some(bounds) = self.bounds {
            self.pos.y = self.pos.y.clamp(0.0, bounds.height);
        }
    }

    pub fn update(&mut self, input: PlayerInput, dt: f32) {
        self.apply_input(input);
        self.move_by(dt);
    }

    pub fn animation_key(&self) -> AnimationKey {
        AnimationKey { facing: self.facing, status: self.status }
    }
}
