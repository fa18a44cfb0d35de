use crate::{game::Game, types::*};

/// Pure perft node count.
/// Counts all leaf positions from the current one down to `depth`.
///
/// A promoting pawn move expands into one node per promotion kind, so counts
/// line up with the usual published perft tables.
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if game.phase() == GamePhase::Ended {
        return 0;
    }

    let mut nodes = 0u64;
    for mv in game.all_legal_moves() {
        let mut next = game.clone();
        next.apply_and_advance(mv);
        if next.phase() == GamePhase::AwaitingPromotion {
            for kind in PieceKind::PROMOTIONS {
                let mut promoted = next.clone();
                if promoted.promote(kind).is_ok() {
                    nodes += perft(&promoted, depth - 1);
                }
            }
        } else {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}
