pub mod engine;
pub mod session;

pub use engine::{draw_prize, select_prize, DrawOutcome};
pub use session::{DrawPhase, DrawSession};
