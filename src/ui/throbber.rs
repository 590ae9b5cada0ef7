//! Shared throbber/spinner utilities for the draw animation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for the drawing indicator.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Atmospheric messages shown while the box is shaking.
const DRAWING_MESSAGES: [&str; 8] = [
    "奖箱摇晃着...",
    "命运正在洗牌...",
    "屏住呼吸...",
    "好运酝酿中...",
    "奖品翻滚着...",
    "就快揭晓了...",
    "手气如何呢...",
    "只差一点点...",
];

/// Returns the current time in milliseconds since UNIX epoch.
fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Returns the current spinner character based on system time.
/// The spinner cycles every 100ms, completing a full rotation every second.
pub fn spinner_char() -> char {
    let millis = current_millis();
    SPINNER[((millis / 100) % 10) as usize]
}

/// Returns a drawing message based on a seed value.
/// The message stays stable for the same seed, changing only when the seed changes.
pub fn drawing_message(seed: u32) -> &'static str {
    DRAWING_MESSAGES[(seed.wrapping_mul(7) as usize) % DRAWING_MESSAGES.len()]
}
