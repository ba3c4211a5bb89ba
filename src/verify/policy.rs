//! Win verification policies.
//!
//! The product went through two win-confirmation designs and both are
//! kept behind one trait rather than merged:
//! - `LineOnly`: trust-the-player "declare bingo" — a complete line is
//!   enough.
//! - `MarkAndProve`: every marked number must also have been drawn.
//!
//! Line completeness itself is shared by both policies.

use serde::{Deserialize, Serialize};

use crate::card::{lines, Card};
use crate::marks::MarkTracker;

/// Outcome of judging a bingo claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The claim stands; the game is won.
    Accepted,
    /// The claim fails; play continues on the same card.
    Rejected,
}

impl Verdict {
    /// Check for acceptance.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// True iff any of the 12 lines (5 rows, 5 columns, 2 diagonals) has
/// every cell covered.
///
/// The free space counts as always covered because `MarkTracker` never
/// lets it unmark. Returns on the first complete line; which line it is
/// does not affect the result.
#[must_use]
pub fn has_complete_line(marks: &MarkTracker) -> bool {
    lines().any(|line| line.iter().all(|&cell| marks.is_marked(cell)))
}

/// Policy deciding whether a claim constitutes a valid win.
pub trait ClaimPolicy: Send + Sync {
    /// Judge a claim against the card, the player's marks, and the
    /// numbers actually drawn.
    fn judge(&self, card: &Card, marks: &MarkTracker, drawn: &[u8]) -> Verdict;
}

/// Self-reporting policy: a complete line wins, no questions asked.
///
/// This is the "declare bingo" iteration of the game, where the card is
/// auto-covered from the draw history and the claim is taken on trust.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineOnly;

impl ClaimPolicy for LineOnly {
    fn judge(&self, _card: &Card, marks: &MarkTracker, _drawn: &[u8]) -> Verdict {
        if has_complete_line(marks) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

/// Mark-and-prove policy: a complete line is required, and every marked
/// non-free number must have been drawn.
///
/// One undrawn marked number anywhere on the card rejects the claim,
/// whether or not that cell sits on the completed line.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkAndProve;

impl ClaimPolicy for MarkAndProve {
    fn judge(&self, card: &Card, marks: &MarkTracker, drawn: &[u8]) -> Verdict {
        if !has_complete_line(marks) {
            return Verdict::Rejected;
        }

        let all_drawn = marks
            .marked()
            .filter_map(|cell| card.number_at(cell))
            .all(|number| drawn.contains(&number));

        if all_drawn {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}
