//! Draw choreography state machine.
//!
//! A draw rolls its outcome up front, then discloses it after a fixed
//! settling delay and a shorter pre-reveal hold. The delays are pure
//! choreography and never affect the sampled outcome.

use super::engine::DrawOutcome;
use crate::constants::{DRAW_SETTLE_TICKS, REVEAL_HOLD_TICKS};

/// Reveal phases of an active draw.
///
/// `Drawing` covers the box-shaking settle delay, `Revealing` the short hold
/// between the outcome settling and the reveal animation. `Revealed` keeps
/// showing the result until the next draw replaces the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawPhase {
    Drawing { ticks_remaining: u32 },
    Revealing { ticks_remaining: u32 },
    Revealed,
}

/// One draw from trigger to reveal. The outcome is fixed at construction and
/// held hidden until the phases run out.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSession {
    outcome: DrawOutcome,
    pub phase: DrawPhase,
}

impl DrawSession {
    pub fn begin(outcome: DrawOutcome) -> Self {
        Self {
            outcome,
            phase: DrawPhase::Drawing {
                ticks_remaining: DRAW_SETTLE_TICKS,
            },
        }
    }

    /// True while the draw is still pending; new draw requests are ignored
    /// during this window. No cancellation once started.
    pub fn in_progress(&self) -> bool {
        matches!(
            self.phase,
            DrawPhase::Drawing { .. } | DrawPhase::Revealing { .. }
        )
    }

    /// The outcome, only once the reveal has activated.
    pub fn revealed_outcome(&self) -> Option<&DrawOutcome> {
        match self.phase {
            DrawPhase::Revealed => Some(&self.outcome),
            _ => None,
        }
    }

    /// Advances the choreography by one logic tick.
    pub fn tick(&mut self) {
        match &mut self.phase {
            DrawPhase::Drawing { ticks_remaining } => {
                *ticks_remaining -= 1;
                if *ticks_remaining == 0 {
                    self.phase = DrawPhase::Revealing {
                        ticks_remaining: REVEAL_HOLD_TICKS,
                    };
                }
            }
            DrawPhase::Revealing { ticks_remaining } => {
                *ticks_remaining -= 1;
                if *ticks_remaining == 0 {
                    self.phase = DrawPhase::Revealed;
                }
            }
            DrawPhase::Revealed => {}
        }
    }
}
