//! Weighted prize selection.
//!
//! Standard cumulative-distribution inverse sampling: one uniform roll in
//! [0, 1), then a linear walk over the registry accumulating probabilities.
//! O(n) over the handful of configured prizes.

use crate::constants::NO_WIN_LABEL;
use crate::prizes::Prize;
use rand::Rng;

/// Outcome of a single draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    Won(Prize),
    NoWin,
}

impl DrawOutcome {
    /// Display label for the result banner.
    pub fn display_name(&self) -> &str {
        match self {
            DrawOutcome::Won(prize) => &prize.name,
            DrawOutcome::NoWin => NO_WIN_LABEL,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, DrawOutcome::Won(_))
    }
}

/// Selects the prize owning the cumulative interval that contains `roll`.
///
/// Prize k owns the half-open interval `(cumulative_{k-1}, cumulative_k]`,
/// so boundary rolls land on the earlier prize and a zero-probability prize
/// owns nothing. A roll of 0.0 therefore selects the first prize with
/// nonzero probability. When the probabilities sum to less than 1 and `roll`
/// falls in the uncovered remainder, the outcome is `NoWin`.
///
/// Sums over 1 are deliberately not renormalized: the walk reaches 1 before
/// exhausting the list and prizes past the overflow point never win. That
/// matches what existing configurations already do.
pub fn select_prize(prizes: &[Prize], roll: f64) -> DrawOutcome {
    let mut cumulative = 0.0;
    for prize in prizes {
        cumulative += prize.probability;
        if prize.probability > 0.0 && roll <= cumulative {
            return DrawOutcome::Won(prize.clone());
        }
    }
    DrawOutcome::NoWin
}

/// Draws one uniform roll in [0, 1) and selects against it. Pure given the
/// prize snapshot and the roll; never mutates the registry.
pub fn draw_prize(prizes: &[Prize], rng: &mut impl Rng) -> DrawOutcome {
    select_prize(prizes, rng.gen::<f64>())
}
