//! Win/loss evaluation.
//!
//! Wins are topology-specific (see each topology's `is_won`). Losses are
//! only declared by topologies that opt into stalemate detection; the
//! others stay in progress even when the player has run out of moves.

use super::{has_legal_move, MatchRule, Outcome};
use crate::core::SessionConfig;
use crate::topology::Topology;

/// Evaluate the current board.
pub fn evaluate<T, R>(topology: &T, rule: &R, config: &SessionConfig) -> Outcome
where
    T: Topology,
    R: MatchRule<T> + ?Sized,
{
    if topology.is_won(config) {
        Outcome::Won
    } else if topology.detects_stalemate() && !has_legal_move(topology, rule) {
        Outcome::Lost
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Rank, Role, Suit};
    use crate::rules::{SuitOrRankRule, SumRule};
    use crate::topology::{Grid, Linear, Pyramid};

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_line_won() {
        let line = Linear::new(vec![c(Suit::Hearts, Rank::King), c(Suit::Hearts, Rank::Queen)]);
        assert_eq!(evaluate(&line, &SuitOrRankRule, &SessionConfig::default()), Outcome::Won);
    }

    #[test]
    fn test_line_lost_when_stuck() {
        let line = Linear::new(vec![
            c(Suit::Hearts, Rank::King),
            c(Suit::Clubs, Rank::Five),
            c(Suit::Diamonds, Rank::Six),
            c(Suit::Hearts, Rank::Queen),
        ]);
        assert_eq!(evaluate(&line, &SuitOrRankRule, &SessionConfig::default()), Outcome::Lost);
    }

    #[test]
    fn test_line_in_progress() {
        let line = Linear::new(vec![
            c(Suit::Hearts, Rank::King),
            c(Suit::Clubs, Rank::Five),
            c(Suit::Clubs, Rank::Six),
            c(Suit::Hearts, Rank::Queen),
        ]);
        assert_eq!(
            evaluate(&line, &SuitOrRankRule, &SessionConfig::default()),
            Outcome::InProgress
        );
    }

    #[test]
    fn test_grid_and_pyramid_never_lost() {
        let mut cells = vec![None; 25];
        cells[0] = Some(c(Suit::Hearts, Rank::King).with_role(Role::KingProtagonist));
        cells[24] = Some(c(Suit::Hearts, Rank::Queen).with_role(Role::QueenProtagonist));
        let grid = Grid::new(5, cells, vec![]).unwrap();
        assert_eq!(
            evaluate(&grid, &SuitOrRankRule, &SessionConfig::default()),
            Outcome::InProgress
        );

        let mut cells = vec![None; 28];
        cells[27] = Some(c(Suit::Clubs, Rank::Two));
        let pyramid = Pyramid::with_cells(7, cells, vec![], 0).unwrap();
        assert_eq!(
            evaluate(&pyramid, &SumRule::default(), &SessionConfig::default()),
            Outcome::InProgress
        );
    }
}
