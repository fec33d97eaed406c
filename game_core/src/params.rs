/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 10.0; // units per tick
    pub const BALL_SPEED_Y: f32 = 10.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // Added to |vy| on every paddle hit

    // Opponent
    pub const OPPONENT_SPEED: f32 = 9.0; // units per tick
    pub const OPPONENT_SPEED_FAST: f32 = 50.0;

    // Score
    pub const WIN_SCORE: u32 = 5;
    pub const WIN_MARGIN: u32 = 2; // Win by two

    // Scheduling
    pub const TICK_MS: u64 = 16; // ~60 Hz
}
