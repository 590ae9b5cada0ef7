// Event loop timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const EVENT_POLL_MS: u64 = 50;

// Draw choreography, in logic ticks of TICK_INTERVAL_MS:
// 3000ms of box shaking before the outcome settles, then a 500ms hold
// before the reveal activates.
pub const DRAW_SETTLE_TICKS: u32 = 30;
pub const REVEAL_HOLD_TICKS: u32 = 5;

// Registry editing constants
pub const DEFAULT_PRIZE_PROBABILITY: f64 = 0.1;

// Persistence constants
pub const DATA_DIR_NAME: &str = ".mystery-box";
pub const PRIZES_FILE: &str = "prizes.json";

// Display constants
pub const NO_WIN_LABEL: &str = "未中奖";
