/// Game tuning parameters for the pulse Pong variant
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 256.0; // units per second
    pub const BALL_WALL_INSET: f32 = 8.0;
    pub const BALL_TRAIL_LENGTH: usize = 6;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 128.0;
    pub const PADDLE_SPEED: f32 = 512.0;
    pub const PADDLE_EDGE_OFFSET: f32 = 32.0; // center distance from the side edge
    pub const PADDLE_WALL_INSET: f32 = 16.0;
    pub const HIT_FLASH_DURATION: f32 = 0.24; // seconds

    // Pulse
    pub const PULSE_DURATION_MS: f64 = 2000.0; // wall clock, not simulated time

    // Computer opponent
    pub const AI_REACTION_LATENCY: f32 = 0.7; // fraction of field width
    pub const AI_REACTION_DELAY: f32 = 0.02;
    pub const AI_MAX_OFFSET: f32 = 50.0;
    pub const AI_OFFSET_CHANGE_FREQUENCY: f32 = 5.0;
    pub const AI_TOLERANCE: f32 = 64.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
