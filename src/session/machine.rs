//! The per-player game session state machine.
//!
//! States: `Idle → Active → {Won | (Invalid → Active)}`.
//!
//! All mutation happens in discrete calls on a single thread; the only
//! scheduled work is the invalid-status revert, polled via `tick`. One
//! session is live per player, so the session owns its card, pool,
//! marks, RNG streams, and timer outright.

use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardGenerator};
use crate::core::{Cell, GameRng};
use crate::draw::DrawSequencer;
use crate::marks::MarkTracker;
use crate::verify::{ClaimPolicy, MarkAndProve, Verdict};

use super::timer::RevertTimer;

/// Lifecycle status of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No card in play yet, or abandoned after a win.
    Idle,
    /// A game is in progress.
    Active,
    /// The session's claim was accepted. Terminal until `start()`.
    Won,
    /// A claim was rejected; reverts to `Active` when the timer fires.
    Invalid,
}

/// A single player's game: card, draw pool, marks, and status.
pub struct GameSession {
    generator: CardGenerator,
    sequencer: DrawSequencer,
    marks: MarkTracker,
    card: Option<Card>,
    policy: Box<dyn ClaimPolicy>,
    status: SessionStatus,
    revert: Option<RevertTimer>,
}

impl GameSession {
    /// Create an idle session with the default mark-and-prove policy.
    ///
    /// Card generation and draw sequencing get independent deterministic
    /// streams derived from the one seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, Box::new(MarkAndProve))
    }

    /// Create an idle session with an explicit verification policy.
    #[must_use]
    pub fn with_policy(seed: u64, policy: Box<dyn ClaimPolicy>) -> Self {
        let rng = GameRng::new(seed);
        Self {
            generator: CardGenerator::new(rng.for_context("card")),
            sequencer: DrawSequencer::new(rng.for_context("draw")),
            marks: MarkTracker::new(),
            card: None,
            policy,
            status: SessionStatus::Idle,
            revert: None,
        }
    }

    /// Start a new game, abandoning any prior state.
    ///
    /// Generates a fresh card, restores the full pool, resets marks to
    /// the free space, and cancels a pending revert. Callable from any
    /// state.
    pub fn start(&mut self) {
        self.card = Some(self.generator.generate());
        self.sequencer.reset();
        self.marks.reset();
        self.revert = None;
        self.status = SessionStatus::Active;
        info!("session started: fresh card, full pool");
    }

    /// Draw the next number. `None` when the pool is exhausted or the
    /// session is not active.
    pub fn draw(&mut self) -> Option<u8> {
        if self.status != SessionStatus::Active {
            return None;
        }

        let number = self.sequencer.draw()?;
        debug!(
            "called {}-{} ({} of 75)",
            Card::letter_for(number),
            number,
            self.sequencer.drawn().len()
        );
        Some(number)
    }

    /// Toggle a card cell. No-op unless the session is active.
    pub fn toggle(&mut self, cell: Cell) {
        if self.status == SessionStatus::Active {
            self.marks.toggle(cell);
        }
    }

    /// Claim bingo. `None` unless the session is active.
    ///
    /// Acceptance moves the session to `Won` permanently. Rejection is
    /// non-fatal: the session shows `Invalid` until `INVALID_DISPLAY`
    /// has elapsed, with marks and draw state preserved.
    pub fn claim(&mut self, now: Instant) -> Option<Verdict> {
        if self.status != SessionStatus::Active {
            return None;
        }
        let card = self.card.as_ref()?;

        let verdict = self.policy.judge(card, &self.marks, self.sequencer.drawn());
        match verdict {
            Verdict::Accepted => {
                self.status = SessionStatus::Won;
                self.revert = None;
                info!("claim accepted, session won");
            }
            Verdict::Rejected => {
                self.status = SessionStatus::Invalid;
                self.revert = Some(RevertTimer::starting(now));
                debug!("claim rejected, invalid until revert fires");
            }
        }
        Some(verdict)
    }

    /// Fire the pending revert if it is due. Safe to call at any time.
    pub fn tick(&mut self, now: Instant) {
        if self.status != SessionStatus::Invalid {
            return;
        }
        if self.revert.is_some_and(|timer| timer.is_due(now)) {
            self.status = SessionStatus::Active;
            self.revert = None;
            debug!("invalid window elapsed, session active again");
        }
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The card in play, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// The player's marks.
    #[must_use]
    pub fn marks(&self) -> &MarkTracker {
        &self.marks
    }

    /// The draw sequence.
    #[must_use]
    pub fn draws(&self) -> &DrawSequencer {
        &self.sequencer
    }

    /// Deadline of the pending revert, if one is scheduled.
    #[must_use]
    pub fn revert_deadline(&self) -> Option<Instant> {
        self.revert.map(|timer| timer.deadline())
    }
}
