//! Whole sessions driven through the public controller and console API.

use std::sync::Arc;

use kingside_core::{Board, Color, Outcome};
use kingside_engine::{Orchestrator, SearchError};
use kingside_play::{Console, ControllerError, Phase, Player, SessionConfig, TurnController};

fn exploding_orchestrator() -> Orchestrator {
    Orchestrator::new(Arc::new(|_: &Board| -> i32 { panic!("evaluator exploded") }))
}

#[test]
fn computer_vs_computer_alternates_legal_moves() {
    let config = SessionConfig::computer_vs_computer().with_depth(1).unwrap();
    let mut controller = TurnController::new(config);

    for ply in 0..20 {
        if controller.phase() != Phase::AwaitingMove {
            break;
        }
        let mover = controller.state().turn();
        let legal = controller.state().valid_moves();
        let mv = controller.tick().unwrap().unwrap();
        assert!(legal.contains(&mv), "ply {ply}: {mv} not legal");
        assert_eq!(mv.piece().color(), mover);
        assert_eq!(controller.state().turn(), mover.flip());
        assert_eq!(controller.state().ply(), ply + 1);
    }
}

#[test]
fn extreme_evaluator_scores_do_not_end_the_game() {
    let evaluator = |board: &Board| match board.side_to_move() {
        Color::White => -50_000,
        Color::Black => 50_000,
    };
    let config = SessionConfig::computer_vs_computer().with_depth(1).unwrap();
    let mut controller = TurnController::with_orchestrator(config, Orchestrator::new(Arc::new(evaluator)));
    let mv = controller.tick().unwrap();
    assert!(mv.is_some());
    assert_eq!(controller.phase(), Phase::AwaitingMove);
    assert_eq!(controller.state().ply(), 1);
}

#[test]
fn strategy_fault_aborts_until_reset() {
    let config = SessionConfig::human_vs_computer(Color::White);
    let mut controller = TurnController::with_orchestrator(config, exploding_orchestrator());
    controller.submit_uci("d2d4").unwrap();
    let before = controller.state().clone();

    match controller.tick() {
        Err(ControllerError::StrategyFault(SearchError::StrategyFault { message })) => {
            assert!(message.contains("evaluator exploded"), "{message}");
        }
        other => panic!("expected a strategy fault, got {other:?}"),
    }
    assert_eq!(controller.phase(), Phase::Aborted);
    assert_eq!(controller.state(), &before);

    assert!(matches!(controller.tick(), Err(ControllerError::Aborted)));
    assert!(matches!(controller.submit_uci("e7e5"), Err(ControllerError::Aborted)));
    assert!(matches!(controller.undo(), Err(ControllerError::Aborted)));

    controller.reset();
    assert_eq!(controller.phase(), Phase::AwaitingMove);
    assert_eq!(controller.state().ply(), 0);
    assert!(controller.submit_uci("e2e4").is_ok());
}

#[test]
fn human_undo_in_computer_game_takes_back_one_ply() {
    let config = SessionConfig::human_vs_computer(Color::White).with_depth(1).unwrap();
    let mut controller = TurnController::new(config);
    controller.submit_uci("e2e4").unwrap();
    controller.tick().unwrap();
    assert_eq!(controller.state().ply(), 2);

    controller.undo().unwrap();
    assert_eq!(controller.state().ply(), 1);
    assert_eq!(controller.state().turn(), Color::Black);
    assert!(controller.computer_to_move());
    assert!(matches!(controller.submit_uci("e7e5"), Err(ControllerError::NotHumanTurn)));
}

#[test]
fn stalemated_computer_is_a_draw() {
    let config = SessionConfig::human_vs_computer(Color::White)
        .with_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1")
        .unwrap();
    let mut controller = TurnController::new(config);
    assert_eq!(controller.phase(), Phase::GameOver(Outcome::Draw));
    assert_eq!(controller.tick().unwrap(), None);
    assert_eq!(controller.outcome(), Some(Outcome::Draw));
}

#[test]
fn player_overrides_apply() {
    let config = SessionConfig::human_vs_human().with_player(Color::Black, Player::Computer(kingside_engine::Strategy::Minimax));
    let mut controller = TurnController::new(config.with_depth(1).unwrap());
    controller.submit_uci("g1f3").unwrap();
    assert!(controller.computer_to_move());
    assert!(controller.tick().unwrap().is_some());
}

#[test]
fn console_reports_aborted_session() {
    let config = SessionConfig::human_vs_computer(Color::White);
    let controller = TurnController::with_orchestrator(config, exploding_orchestrator());
    let mut console = Console::new(controller, Vec::new());
    console.run("e2e4\ne7e5\nreset\nstatus\n".as_bytes()).unwrap();
    let (controller, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("White plays e4"), "{out}");
    assert!(out.contains("evaluator exploded"), "{out}");
    assert!(out.contains("session aborted"), "{out}");
    assert!(out.contains("error: the session was aborted"), "{out}");
    assert!(out.contains("White to move (human), ply 0, check: no, game in progress"), "{out}");
    assert_eq!(controller.phase(), Phase::AwaitingMove);
}

#[test]
fn console_plays_computer_replies() {
    let config = SessionConfig::human_vs_computer(Color::Black).with_depth(1).unwrap();
    let mut console = Console::new(TurnController::new(config), Vec::new());
    console.run("moves\n".as_bytes()).unwrap();
    let out = String::from_utf8(console.into_inner().1).unwrap();

    assert!(out.contains("White plays "), "{out}");
    assert!(out.contains("Black> "), "{out}");
}

#[test]
fn console_undo_takes_back_the_human_move() {
    let config = SessionConfig::human_vs_computer(Color::White).with_depth(1).unwrap();
    let mut console = Console::new(TurnController::new(config), Vec::new());
    console.run("e2e4\nundo\nlog\n".as_bytes()).unwrap();
    let (controller, out) = console.into_inner();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(controller.state().ply(), 0);
    assert!(out.contains("took back e2e4"), "{out}");
    assert_eq!(out.matches("Black plays").count(), 1, "{out}");
}
