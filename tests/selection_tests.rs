//! Selection state machine tests across all three games.
//!
//! Toggling, reselection on mismatch, selections invalidated by board
//! maintenance, and observer notifications.

use std::cell::RefCell;
use std::rc::Rc;

use solitaire_match::games::{GardenBuilder, PyramidBuilder, RoyalMarriageBuilder};
use solitaire_match::{
    Activation, BoardSnapshot, Card, Grid, GridPos, MatchRule, Outcome, Rank, Role, Session,
    SessionConfig, SessionObserver, SuitOrRankRule, Suit, Topology,
};

fn c(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn garden(cards: &[(usize, usize, Card)]) -> Session<Grid, SuitOrRankRule> {
    let mut cells = vec![None; 25];
    for &(row, col, card) in cards {
        cells[row * 5 + col] = Some(card);
    }
    Session::new(Grid::new(5, cells, vec![]).unwrap(), SuitOrRankRule, SessionConfig::default())
}

/// Clicking the same selectable card twice leaves everything as it was.
fn assert_toggle<T: Topology, R: MatchRule<T>>(session: &mut Session<T, R>) {
    let pos = session.hint().expect("fresh deal has a move").positions()[0];
    if session.rule().removable_alone(session.topology(), pos) {
        return;
    }
    let before = session.snapshot();

    assert_eq!(session.activate(pos).unwrap(), Activation::Selected(pos));
    assert_eq!(session.activate(pos).unwrap(), Activation::Deselected(pos));
    assert!(session.selection().is_idle());
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.moves(), 0);
}

#[derive(Default)]
struct Counts {
    boards: usize,
    ended: Vec<Outcome>,
}

struct Counter(Rc<RefCell<Counts>>);

impl SessionObserver for Counter {
    fn on_board_changed(&mut self, _board: &BoardSnapshot) {
        self.0.borrow_mut().boards += 1;
    }

    fn on_session_ended(&mut self, outcome: Outcome) {
        self.0.borrow_mut().ended.push(outcome);
    }
}

// =============================================================================
// Toggle
// =============================================================================

#[test]
fn test_deselection_idempotent_everywhere() {
    for seed in [1, 2, 3] {
        assert_toggle(&mut PyramidBuilder::new().build_seeded(seed).unwrap());
        assert_toggle(&mut RoyalMarriageBuilder::new().build_seeded(seed).unwrap());
        assert_toggle(&mut GardenBuilder::new().build_seeded(seed).unwrap());
    }
}

// =============================================================================
// Reselection
// =============================================================================

#[test]
fn test_mismatch_moves_selection() {
    let mut session = garden(&[
        (0, 0, c(Suit::Hearts, Rank::King).with_role(Role::KingProtagonist)),
        (4, 4, c(Suit::Hearts, Rank::Queen).with_role(Role::QueenProtagonist)),
        (2, 1, c(Suit::Clubs, Rank::Two)),
        (2, 2, c(Suit::Spades, Rank::Nine)),
        (2, 3, c(Suit::Spades, Rank::Four)),
    ]);
    let a = GridPos::new(2, 1);
    let b = GridPos::new(2, 2);
    let d = GridPos::new(2, 3);

    session.activate(a).unwrap();
    assert_eq!(
        session.activate(b).unwrap(),
        Activation::Reselected { previous: a, current: b }
    );

    // The abandoned card is not retried; the new one pairs.
    assert!(session.activate(d).unwrap().is_move());
    assert!(session.selection().is_idle());
}

#[test]
fn test_ignored_click_keeps_selection() {
    let mut session = garden(&[
        (0, 0, c(Suit::Hearts, Rank::King).with_role(Role::KingProtagonist)),
        (4, 4, c(Suit::Hearts, Rank::Queen).with_role(Role::QueenProtagonist)),
        (2, 2, c(Suit::Spades, Rank::Nine)),
        (2, 3, c(Suit::Spades, Rank::Four)),
    ]);
    let pos = GridPos::new(2, 2);
    session.activate(pos).unwrap();

    assert_eq!(session.activate(GridPos::new(0, 0)).unwrap(), Activation::Ignored);
    assert_eq!(session.activate(GridPos::new(3, 3)).unwrap(), Activation::Ignored);
    assert_eq!(session.activate(GridPos::new(9, 9)).unwrap(), Activation::Ignored);
    assert_eq!(session.selection().position(), Some(pos));
}

#[test]
fn test_compression_invalidates_selection() {
    let mut session = garden(&[
        (0, 0, c(Suit::Hearts, Rank::King).with_role(Role::KingProtagonist)),
        (0, 1, c(Suit::Clubs, Rank::Four)),
        (0, 2, c(Suit::Clubs, Rank::Six)),
        (0, 3, c(Suit::Diamonds, Rank::Nine)),
        (0, 4, c(Suit::Spades, Rank::Nine)),
        (1, 0, c(Suit::Hearts, Rank::Queen).with_role(Role::QueenProtagonist)),
    ]);
    session.activate(GridPos::new(0, 3)).unwrap();

    session
        .attempt_match(GridPos::new(0, 1), GridPos::new(0, 2))
        .unwrap();

    // The nine slid to (0, 1); the Queen now stands where it was.
    assert!(session.selection().is_idle());
    assert_eq!(
        session.topology().card_at(GridPos::new(0, 1)),
        Some(&c(Suit::Diamonds, Rank::Nine))
    );
}

#[test]
fn test_unrelated_match_keeps_selection() {
    let mut session = PyramidBuilder::new().build_seeded(42).unwrap();
    let moves = session.legal_moves();
    let Some(pair) = moves.iter().find(|m| m.positions().len() == 2) else {
        return;
    };
    let touched = pair.positions();

    // Any other open bottom-row card not part of the pair.
    let keep = session
        .topology()
        .positions()
        .into_iter()
        .find(|&pos| {
            !touched.contains(&pos)
                && session.rule().is_eligible(session.topology(), pos)
                && !session.rule().removable_alone(session.topology(), pos)
        });
    let Some(keep) = keep else {
        return;
    };

    session.activate(keep).unwrap();
    assert!(session.attempt_match(touched[0], touched[1]).unwrap().is_matched());
    assert_eq!(session.selection().position(), Some(keep));
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn test_observer_sees_every_change_and_one_end() {
    let counts = Rc::new(RefCell::new(Counts::default()));
    let mut session = RoyalMarriageBuilder::new().build_seeded(4).unwrap();
    session.subscribe(Box::new(Counter(Rc::clone(&counts))));

    while let Some(mv) = session.hint() {
        let positions = mv.positions();
        session.activate(positions[0]).unwrap();
        session.activate(positions[1]).unwrap();
    }

    assert!(session.outcome().is_terminal());
    assert_eq!(counts.borrow().boards, session.moves() as usize);
    assert_eq!(counts.borrow().ended, vec![session.outcome()]);

    // Clicking around afterwards changes nothing.
    for pos in 0..52 {
        assert_eq!(session.activate(pos).unwrap(), Activation::Ignored);
    }
    assert_eq!(counts.borrow().ended.len(), 1);
}

#[test]
fn test_draw_notifies_board_change() {
    let counts = Rc::new(RefCell::new(Counts::default()));
    let mut session = PyramidBuilder::new().build_seeded(42).unwrap();
    session.subscribe(Box::new(Counter(Rc::clone(&counts))));

    assert!(session.draw());
    assert_eq!(counts.borrow().boards, 1);
    assert!(counts.borrow().ended.is_empty());
}
