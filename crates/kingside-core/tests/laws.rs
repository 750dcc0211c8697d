//! Laws that must hold over random legal games.

use kingside_core::{Board, Color, GameState, Outcome, Status, generate_legal_moves};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 6] = [1, 7, 42, 1_234, 99_991, 0xC0FFEE];
const MAX_PLIES: usize = 80;

/// Play random legal moves until the game ends or `MAX_PLIES` is reached,
/// calling `check` before every move.
fn random_walk(seed: u64, mut check: impl FnMut(&GameState)) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = GameState::new();
    for _ in 0..MAX_PLIES {
        check(&state);
        let moves = state.valid_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        state.apply_move(mv);
    }
    state
}

#[test]
fn every_move_round_trips() {
    for seed in SEEDS {
        random_walk(seed, |state| {
            for mv in state.valid_moves() {
                let mut scratch = state.clone();
                scratch.apply_move(mv);
                assert_eq!(scratch.undo_move(), Ok(mv));
                assert_eq!(scratch.board(), state.board(), "seed {seed}, {mv:?}");
                assert_eq!(scratch.turn(), state.turn());
                assert_eq!(scratch.in_check(), state.in_check());
                assert_eq!(scratch.ply(), state.ply());
            }
        });
    }
}

#[test]
fn turns_alternate_and_ledger_grows_by_one() {
    for seed in SEEDS {
        let mut expected = Color::White;
        let mut plies = 0;
        random_walk(seed, |state| {
            assert_eq!(state.turn(), expected);
            assert_eq!(state.move_log().len(), plies);
            expected = expected.flip();
            plies += 1;
        });
    }
}

#[test]
fn undo_all_returns_to_start() {
    for seed in SEEDS {
        let mut state = random_walk(seed, |_| {});
        let played = state.ply();
        for remaining in (0..played).rev() {
            state.undo_move().unwrap();
            assert_eq!(state.move_log().len(), remaining);
        }
        assert_eq!(state, GameState::new());
        assert!(state.undo_move().is_err());
    }
}

#[test]
fn ledger_replay_reproduces_board() {
    for seed in SEEDS {
        let state = random_walk(seed, |_| {});
        let mut board = Board::starting_position();
        for mv in state.move_log().moves() {
            assert!(generate_legal_moves(&board).contains(&mv));
            board.apply(mv);
        }
        assert_eq!(&board, state.board());
        assert_eq!(state.notation_log().len(), state.ply());
    }
}

#[test]
fn move_generation_is_deterministic() {
    for seed in SEEDS {
        random_walk(seed, |state| {
            let copy = state.clone();
            assert_eq!(state.valid_moves(), copy.valid_moves());
        });
    }
}

#[test]
fn terminal_classification() {
    for seed in SEEDS {
        let state = random_walk(seed, |state| {
            let has_moves = !state.valid_moves().is_empty();
            assert_eq!(state.status() == Status::Ongoing, has_moves);
        });
        match state.status() {
            Status::Checkmate => assert!(state.in_check() && state.valid_moves().is_empty()),
            Status::Stalemate => assert!(!state.in_check() && state.valid_moves().is_empty()),
            Status::Ongoing => assert!(!state.valid_moves().is_empty()),
        }
    }
}

#[test]
fn fen_survives_random_games() {
    for seed in SEEDS {
        random_walk(seed, |state| {
            let fen = state.board().to_string();
            let parsed: Board = fen.parse().unwrap();
            assert_eq!(&parsed, state.board());
        });
    }
}

#[test]
fn opening_has_twenty_moves() {
    assert_eq!(GameState::new().valid_moves().len(), 20);
}

#[test]
fn fools_mate_scenario() {
    let mut state = GameState::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mv = state.parse_move(text).unwrap();
        state.apply_move(mv);
    }
    assert!(state.valid_moves().is_empty());
    assert!(state.in_check());
    assert_eq!(state.outcome(), Some(Outcome::BlackWins));
    assert_eq!(state.notation_log(), vec!["f3", "e5", "g4", "Qh4#"]);
}
