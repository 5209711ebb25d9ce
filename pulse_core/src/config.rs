use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_size: Vec2,
    pub ball_size: Vec2,
    pub ball_speed: f32,
    pub ball_wall_inset: f32,
    pub ball_trail_length: usize,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    pub paddle_edge_offset: f32,
    pub paddle_wall_inset: f32,
    pub hit_flash_duration: f32,
    pub pulse_duration_ms: f64,
    pub first_serve: Side, // side the opening ball travels toward
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT),
            ball_size: Vec2::splat(Params::BALL_SIZE),
            ball_speed: Params::BALL_SPEED,
            ball_wall_inset: Params::BALL_WALL_INSET,
            ball_trail_length: Params::BALL_TRAIL_LENGTH,
            paddle_size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle_speed: Params::PADDLE_SPEED,
            paddle_edge_offset: Params::PADDLE_EDGE_OFFSET,
            paddle_wall_inset: Params::PADDLE_WALL_INSET,
            hit_flash_duration: Params::HIT_FLASH_DURATION,
            pulse_duration_ms: Params::PULSE_DURATION_MS,
            first_serve: Side::Left,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a field of the given size (the host's canvas)
    pub fn with_field_size(width: f32, height: f32) -> Self {
        Self {
            field_size: Vec2::new(width, height),
            ..Self::default()
        }
    }

    /// Panics if the configuration cannot describe a playable field
    pub fn validate(&self) {
        assert!(
            self.field_size.x > 0.0 && self.field_size.y > 0.0,
            "field size must be positive: {}",
            self.field_size
        );
        assert!(
            self.ball_size.x > 0.0 && self.ball_size.y > 0.0,
            "ball size must be positive: {}",
            self.ball_size
        );
        assert!(
            self.paddle_size.x > 0.0 && self.paddle_size.y > 0.0,
            "paddle size must be positive: {}",
            self.paddle_size
        );
        assert!(
            self.paddle_size.y + 2.0 * self.paddle_wall_inset <= self.field_size.y,
            "field height {} cannot fit a {} paddle between its insets",
            self.field_size.y,
            self.paddle_size.y
        );
        assert!(
            self.paddle_edge_offset * 2.0 < self.field_size.x,
            "paddles would overlap on a field {} wide",
            self.field_size.x
        );
    }

    pub fn field_center(&self) -> Vec2 {
        self.field_size * 0.5
    }

    /// Get X position for the paddle guarding `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_edge_offset,
            Side::Right => self.field_size.x - self.paddle_edge_offset,
        }
    }

    /// Clamp paddle Y so its box stays inside the wall insets
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_size.y / 2.0;
        y.clamp(
            self.paddle_wall_inset + half_height,
            self.field_size.y - self.paddle_wall_inset - half_height,
        )
    }
}
