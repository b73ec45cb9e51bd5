//! Perft (performance test) for move generation correctness verification.

use tracing::debug;

use crate::position::Position;

/// Count the leaf nodes of the legal move tree at `depth`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without playing them.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&position.update(mv), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs in coordinate notation, sorted
/// alphabetically.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = position
        .valid_moves()
        .into_iter()
        .map(|mv| {
            let count = perft(&position.update(mv), depth.saturating_sub(1));
            debug!(%mv, count, "divide");
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    // --- Position 1: starting position ---

    #[test]
    fn perft_startpos_depth_0() {
        assert_eq!(perft(&Position::starting(), 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Position::starting(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Position::starting(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Position::starting(), 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Position::starting(), 4), 197_281);
    }

    // --- Position 2: Kiwipete ---

    fn kiwipete() -> Position {
        pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&kiwipete(), 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&kiwipete(), 2), 2_039);
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&kiwipete(), 3), 97_862);
    }

    // --- Position 3: rook and pawn endgame with en passant pins ---

    fn position_3() -> Position {
        pos("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
    }

    #[test]
    fn perft_position_3_depth_1() {
        assert_eq!(perft(&position_3(), 1), 14);
    }

    #[test]
    fn perft_position_3_depth_2() {
        assert_eq!(perft(&position_3(), 2), 191);
    }

    #[test]
    fn perft_position_3_depth_3() {
        assert_eq!(perft(&position_3(), 3), 2_812);
    }

    #[test]
    #[ignore] // slow
    fn perft_position_3_depth_4() {
        assert_eq!(perft(&position_3(), 4), 43_238);
    }

    // --- Position 4: promotions and castling under fire ---

    fn position_4() -> Position {
        pos("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
    }

    #[test]
    fn perft_position_4_depth_1() {
        assert_eq!(perft(&position_4(), 1), 6);
    }

    #[test]
    fn perft_position_4_depth_2() {
        assert_eq!(perft(&position_4(), 2), 264);
    }

    #[test]
    #[ignore] // slow
    fn perft_position_4_depth_3() {
        assert_eq!(perft(&position_4(), 3), 9_467);
    }

    // --- Position 5 ---

    fn position_5() -> Position {
        pos("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
    }

    #[test]
    fn perft_position_5_depth_1() {
        assert_eq!(perft(&position_5(), 1), 44);
    }

    #[test]
    fn perft_position_5_depth_2() {
        assert_eq!(perft(&position_5(), 2), 1_486);
    }

    #[test]
    #[ignore] // slow
    fn perft_position_5_depth_3() {
        assert_eq!(perft(&position_5(), 3), 62_379);
    }

    // --- Divide ---

    #[test]
    fn divide_startpos_depth_2() {
        let results = divide(&Position::starting(), 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 20));
        assert_eq!(results[0].0, "a2a3");
        assert_eq!(results.iter().map(|(_, c)| c).sum::<u64>(), 400);
    }

    #[test]
    fn divide_depth_1_counts_each_move_once() {
        let results = divide(&kiwipete(), 1);
        assert_eq!(results.len(), 48);
        assert!(results.iter().all(|(_, count)| *count == 1));
    }
}
