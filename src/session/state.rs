//! Game session: the selection state machine and the match engine.
//!
//! ## Flow
//!
//! A click enters through [`Session::activate`]. The selection state
//! machine decides whether it selects, deselects, removes a lone card or
//! asks the match engine ([`Session::attempt_match`]) to pair two cards.
//! After every successful removal the topology settles the board, the
//! counters advance, observers are told, and the outcome is re-evaluated.
//!
//! Everything runs to completion inside the call. There is no background
//! work and no timing; a test harness driving the session directly sees
//! exactly what a renderer would.

use im::Vector;
use smallvec::SmallVec;

use super::history::{MatchOutcome, MoveRecord};
use super::observer::SessionObserver;
use super::selection::{Activation, Selection};
use crate::core::{Card, EngineError, EngineResult, SessionConfig};
use crate::rules::{evaluate, legal_moves, MatchRule, Move, Outcome};
use crate::topology::{BoardSnapshot, Removed, Topology};

/// One game in progress.
///
/// Composed of a topology (board shape) and a match rule. Replaced
/// wholesale on a new game; nothing carries over between sessions.
pub struct Session<T: Topology, R: MatchRule<T>> {
    config: SessionConfig,
    topology: T,
    rule: R,
    selection: Selection<T::Position>,
    moves: u32,
    score: i64,
    outcome: Outcome,
    history: Vector<MoveRecord<T::Position>>,
    /// Cards in play at deal time.
    dealt: usize,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<T: Topology, R: MatchRule<T>> Session<T, R> {
    /// Start a session on a freshly dealt board.
    pub fn new(topology: T, rule: R, config: SessionConfig) -> Self {
        let dealt = topology.cards_on_board() + topology.cards_in_reserve();
        let outcome = evaluate(&topology, &rule, &config);
        log::debug!("session: dealt {dealt} card(s), outcome {outcome:?}");

        Self {
            config,
            topology,
            rule,
            selection: Selection::Idle,
            moves: 0,
            score: 0,
            outcome,
            history: Vector::new(),
            dealt,
            observers: Vec::new(),
        }
    }

    // === Accessors ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// The match rule.
    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection<T::Position> {
        self.selection
    }

    /// Successful moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Every move made, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord<T::Position>> {
        &self.history
    }

    /// Cards in play when the session started.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.dealt
    }

    /// Cards still in play: board, stock and waste.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.topology.cards_on_board() + self.topology.cards_in_reserve()
    }

    /// Presentation view of the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.topology.snapshot()
    }

    /// Every move the rules currently allow.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move<T::Position>> {
        legal_moves(&self.topology, &self.rule)
    }

    /// A move worth suggesting, if there is one.
    #[must_use]
    pub fn hint(&self) -> Option<Move<T::Position>> {
        self.legal_moves().into_iter().next()
    }

    // === Observers ===

    /// Register an observer.
    ///
    /// If the session has already ended the observer is told right away.
    pub fn subscribe(&mut self, mut observer: Box<dyn SessionObserver>) {
        if self.outcome.is_terminal() {
            observer.on_session_ended(self.outcome);
        }
        self.observers.push(observer);
    }

    // === Selection State Machine ===

    /// Handle a click on `pos`.
    ///
    /// Clicks on empty, anchor, covered or out-of-range positions, and any
    /// click after the session ended, are ignored.
    pub fn activate(&mut self, pos: T::Position) -> EngineResult<Activation<T::Position>> {
        if self.outcome.is_terminal() || !self.rule.is_eligible(&self.topology, pos) {
            log::trace!("select: ignored {pos}");
            return Ok(Activation::Ignored);
        }

        if self.rule.removable_alone(&self.topology, pos) {
            let record = self.remove_single(pos)?;
            return Ok(Activation::RemovedAlone(record));
        }

        match self.selection {
            Selection::Idle => {
                self.select(pos)?;
                log::trace!("select: {pos}");
                Ok(Activation::Selected(pos))
            }
            Selection::One { position, .. } if position == pos => {
                self.selection = Selection::Idle;
                log::trace!("select: released {pos}");
                Ok(Activation::Deselected(pos))
            }
            Selection::One { position, .. } => match self.attempt_match(position, pos)? {
                MatchOutcome::Matched(record) => Ok(Activation::Matched(record)),
                MatchOutcome::Rejected => {
                    self.select(pos)?;
                    log::trace!("select: {position} does not pair with {pos}, now {pos}");
                    Ok(Activation::Reselected {
                        previous: position,
                        current: pos,
                    })
                }
            },
        }
    }

    /// Drop the current selection, if any.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    fn select(&mut self, pos: T::Position) -> EngineResult<()> {
        let card = self.check_candidate(pos)?;
        self.selection = Selection::One { position: pos, card };
        Ok(())
    }

    // === Match Engine ===

    /// Try to pair the cards at `a` and `b`.
    ///
    /// A pair that does not match is `Ok(MatchOutcome::Rejected)` and
    /// leaves the board alone. Out-of-range, empty, anchor or covered
    /// positions, or `a == b`, are caller errors.
    pub fn attempt_match(
        &mut self,
        a: T::Position,
        b: T::Position,
    ) -> EngineResult<MatchOutcome<T::Position>> {
        self.ensure_live()?;
        self.check_candidate(a)?;
        self.check_candidate(b)?;
        if a == b {
            return Err(self.misuse(EngineError::SamePosition(a.to_string())));
        }

        if !self.rule.matches(&self.topology, a, b) {
            return Ok(MatchOutcome::Rejected);
        }

        let removed = self.topology.remove(&[a, b]);
        let record = self.commit(SmallVec::from_slice(&[a, b]), removed);
        log::debug!("match: {a} + {b}, score {}", self.score);
        Ok(MatchOutcome::Matched(record))
    }

    /// Remove the card at `pos` without a partner.
    pub fn remove_single(&mut self, pos: T::Position) -> EngineResult<MoveRecord<T::Position>> {
        self.ensure_live()?;
        let card = self.check_candidate(pos)?;
        if !self.rule.removable_alone(&self.topology, pos) {
            return Err(self.misuse(EngineError::NotRemovableAlone(pos.to_string())));
        }

        let removed = self.topology.remove(&[pos]);
        let record = self.commit(SmallVec::from_slice(&[pos]), removed);
        log::debug!("match: {card} alone at {pos}, score {}", self.score);
        Ok(record)
    }

    /// Turn the next stock card, recycling the waste when allowed.
    ///
    /// Not a move: score and move count are unchanged. Returns `false` when
    /// nothing could be drawn or the session is over.
    pub fn draw(&mut self) -> bool {
        if self.outcome.is_terminal() || !self.topology.draw() {
            return false;
        }
        self.revalidate_selection();
        self.notify_board_changed();
        self.update_outcome();
        true
    }

    fn ensure_live(&self) -> EngineResult<()> {
        if self.outcome.is_terminal() {
            return Err(self.misuse(EngineError::SessionOver));
        }
        Ok(())
    }

    /// The card at `pos`, provided `pos` may take part in a move.
    fn check_candidate(&self, pos: T::Position) -> EngineResult<Card> {
        if !self.topology.contains(pos) {
            return Err(self.misuse(EngineError::InvalidPosition(pos.to_string())));
        }
        let Some(card) = self.topology.card_at(pos).copied() else {
            return Err(self.misuse(EngineError::EmptyPosition(pos.to_string())));
        };
        if card.is_anchor() {
            return Err(self.misuse(EngineError::AnchorPosition(pos.to_string())));
        }
        if self.topology.is_covered(pos) {
            return Err(self.misuse(EngineError::Covered(pos.to_string())));
        }
        Ok(card)
    }

    fn misuse(&self, err: EngineError) -> EngineError {
        log::warn!("engine misuse: {err}");
        err
    }

    /// Book a removal: counters, history, selection, observers, outcome.
    fn commit(
        &mut self,
        positions: SmallVec<[T::Position; 2]>,
        cards: Removed,
    ) -> MoveRecord<T::Position> {
        self.moves += 1;
        self.score += self.config.points_per_move;

        let record = MoveRecord {
            sequence: self.moves,
            positions,
            cards,
            score_after: self.score,
        };
        self.history.push_back(record.clone());

        self.revalidate_selection();
        self.notify_board_changed();
        self.update_outcome();
        record
    }

    /// Keep the selection only while it still points at the same,
    /// still-eligible card.
    fn revalidate_selection(&mut self) {
        if let Selection::One { position, card } = self.selection {
            let same_card = self.topology.card_at(position) == Some(&card);
            if !same_card || !self.rule.is_eligible(&self.topology, position) {
                log::trace!("select: {position} no longer selectable, cleared");
                self.selection = Selection::Idle;
            }
        }
    }

    fn notify_board_changed(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.topology.snapshot();
        for observer in &mut self.observers {
            observer.on_board_changed(&snapshot);
        }
    }

    fn update_outcome(&mut self) {
        let outcome = evaluate(&self.topology, &self.rule, &self.config);
        if outcome == self.outcome {
            return;
        }
        self.outcome = outcome;
        if outcome.is_terminal() {
            log::debug!(
                "session: {outcome:?} after {} move(s), score {}",
                self.moves,
                self.score
            );
            self.selection = Selection::Idle;
            for observer in &mut self.observers {
                observer.on_session_ended(outcome);
            }
        }
    }
}

/// Clones share the board and history structurally. Observers stay with
/// the original session; a clone starts with none.
impl<T: Topology, R: MatchRule<T> + Clone> Clone for Session<T, R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            topology: self.topology.clone(),
            rule: self.rule.clone(),
            selection: self.selection.clone(),
            moves: self.moves,
            score: self.score,
            outcome: self.outcome,
            history: self.history.clone(),
            dealt: self.dealt,
            observers: Vec::new(),
        }
    }
}

impl<T: Topology, R: MatchRule<T> + std::fmt::Debug> std::fmt::Debug for Session<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("topology", &self.topology)
            .field("rule", &self.rule)
            .field("selection", &self.selection)
            .field("moves", &self.moves)
            .field("score", &self.score)
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
