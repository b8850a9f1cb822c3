//! Property-based tests for position transitions and attack lookups.

use proptest::prelude::*;

use crate::board::attack_tables::{
    diagonal_attacks, diagonal_attacks_by_walk, flip_a1h8, rotate_45_anticlockwise,
    rotate_45_clockwise, straight_attacks, straight_attacks_by_walk,
};
use crate::board::{Color, Piece, Position};

/// Play a pseudo-random game, picking each move by index, until a king falls.
fn random_walk(choices: &[u8]) -> Vec<Position> {
    let mut pos = Position::new();
    let mut seen = vec![pos];
    for &choice in choices {
        if pos.king_count() < 2 {
            break;
        }
        let moves = pos.generate_moves();
        if moves.is_empty() {
            break;
        }
        pos = pos.play(moves[usize::from(choice) % moves.len()]);
        seen.push(pos);
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn incremental_hash_matches_full_hash(choices in prop::collection::vec(any::<u8>(), 1..80)) {
        for pos in random_walk(&choices) {
            prop_assert_eq!(pos.hash(), pos.full_hash());
        }
    }

    #[test]
    fn positions_stay_consistent(choices in prop::collection::vec(any::<u8>(), 1..80)) {
        for pos in random_walk(&choices) {
            prop_assert_eq!(pos.color_mask(Color::White) & pos.color_mask(Color::Black), 0);
            prop_assert_eq!(
                pos.color_mask(Color::White) | pos.color_mask(Color::Black),
                pos.occupied()
            );
            prop_assert!(pos.king_count() >= 1);
        }
    }

    #[test]
    fn only_captures_change_material(choices in prop::collection::vec(any::<u8>(), 1..120)) {
        let mut pos = Position::new();
        for &choice in &choices {
            let moves = pos.generate_moves();
            if pos.king_count() < 2 || moves.is_empty() {
                break;
            }
            let mv = moves[usize::from(choice) % moves.len()];
            let enemy = pos.color_mask(pos.side_to_move().opponent());
            let takes_en_passant = mv.piece == Piece::Pawn && mv.to.bit() == pos.en_passant();
            let expected = u32::from(enemy & mv.to.bit() != 0 || takes_en_passant);
            let next = pos.play(mv);
            prop_assert_eq!(pos.piece_count() - next.piece_count(), expected, "{}", mv);
            pos = next;
        }
    }

    #[test]
    fn evaluation_is_antisymmetric(choices in prop::collection::vec(any::<u8>(), 1..40)) {
        let walk = random_walk(&choices);
        let pos = walk[walk.len() - 1];
        prop_assume!(pos.king_count() == 2);
        prop_assert_eq!(pos.evaluate(0), -pos.mirrored().evaluate(0));
    }

    #[test]
    fn straight_lookup_matches_ray_walk(occupancy in any::<u64>(), sq in 0usize..64) {
        let occupancy = occupancy | (1u64 << sq);
        prop_assert_eq!(
            straight_attacks(occupancy, flip_a1h8(occupancy), sq),
            straight_attacks_by_walk(occupancy, sq)
        );
    }

    #[test]
    fn diagonal_lookup_matches_ray_walk(occupancy in any::<u64>(), sq in 0usize..64) {
        let occupancy = occupancy | (1u64 << sq);
        prop_assert_eq!(
            diagonal_attacks(
                rotate_45_clockwise(occupancy),
                rotate_45_anticlockwise(occupancy),
                sq
            ),
            diagonal_attacks_by_walk(occupancy, sq)
        );
    }
}
