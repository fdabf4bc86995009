//! End-to-end play through the public API.

use chessboard_core::{Color, Coord, PieceKind, Square};
use chessboard_engine::{
    CommandLog, DrawCommand, Game, GameOutcome, IgnoreReason, InputEvent, ScriptedEvents,
    Selection, Session, SquarePaint, Transition,
};
use proptest::prelude::*;

fn sq(name: &str) -> Square {
    Square::from_name(name).unwrap()
}

fn clicks(names: &[&str]) -> Vec<InputEvent> {
    names
        .iter()
        .map(|name| InputEvent::SquareActivated(sq(name).coord()))
        .collect()
}

/// Black's queen walks out and takes the White king on move five.
const QUEEN_RAID: [&str; 10] = ["E2", "E3", "F7", "F6", "D1", "H5", "A7", "A6", "H5", "E8"];

#[test]
fn starting_layout() {
    let game = Game::new();
    let board = game.board();
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (file, kind) in back.iter().enumerate() {
        let black = board.piece_at_coord(Coord::new(file as i8, 0)).unwrap();
        let white = board.piece_at_coord(Coord::new(file as i8, 7)).unwrap();
        assert_eq!((black.kind(), black.color()), (*kind, Color::Black));
        assert_eq!((white.kind(), white.color()), (*kind, Color::White));

        let pawn = board.piece_at_coord(Coord::new(file as i8, 1)).unwrap();
        assert_eq!((pawn.kind(), pawn.color()), (PieceKind::Pawn, Color::Black));
        let pawn = board.piece_at_coord(Coord::new(file as i8, 6)).unwrap();
        assert_eq!((pawn.kind(), pawn.color()), (PieceKind::Pawn, Color::White));
    }
    assert_eq!(board.occupied_count(), 32);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn session_plays_to_king_capture() {
    let mut game = Game::new();
    let mut log = CommandLog::new();
    let mut script = clicks(&QUEEN_RAID);
    // Nothing after the win may move a piece.
    script.extend(clicks(&["A6", "A5"]));
    let mut events = ScriptedEvents::new(script);

    let stats = Session::new(&mut game, &mut log, &mut events).run().unwrap();

    // Ten clicks, two ignored clicks, then the quit at the end of the script.
    assert_eq!(stats.events, 13);
    assert_eq!(
        game.outcome(),
        Some(GameOutcome::KingCaptured {
            winner: Color::Black
        })
    );
    let taken = game.captures().captured_by(Color::Black);
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0].kind(), PieceKind::King);
    assert_eq!(taken[0].color(), Color::White);
    assert!(game.captures().captured_by(Color::White).is_empty());
    assert_eq!(log.commands().last(), Some(&DrawCommand::Close));
}

#[test]
fn moves_after_win_are_ignored() {
    let mut game = Game::new();
    let mut log = CommandLog::new();
    game.reset(&mut log);
    for coord in QUEEN_RAID.iter().map(|name| sq(name).coord()) {
        game.activate(coord, &mut log);
    }
    assert!(game.is_over());
    assert_eq!(game.turn(), Color::White);

    let queen = game.board().piece_at(sq("E8")).unwrap();
    assert_eq!((queen.kind(), queen.color()), (PieceKind::Queen, Color::Black));
    assert_eq!(game.board().occupied_count(), 31);

    log.take();
    assert_eq!(
        game.activate(sq("A6").coord(), &mut log),
        Transition::Ignored(IgnoreReason::GameOver)
    );
    assert!(log.commands().is_empty());
}

#[test]
fn selection_highlights_and_restores() {
    let mut game = Game::new();
    let mut log = CommandLog::new();
    game.reset(&mut log);
    log.take();

    game.activate(sq("G1").coord(), &mut log);
    let mut expected = vec![sq("G1"), sq("F3"), sq("H3")];
    expected.sort();
    let mut lit = log.painted(SquarePaint::Highlight);
    lit.sort();
    assert_eq!(lit, expected);

    log.take();
    game.activate(sq("H3").coord(), &mut log);
    let mut restored = log.restored();
    restored.sort();
    assert_eq!(restored, expected);
    assert!(log
        .commands()
        .contains(&DrawCommand::Piece(sq("H3"), "BLACK_KNIGHT".to_string())));
    assert_eq!(game.selection(), &Selection::Idle);
}

#[test]
fn turns_alternate_strictly() {
    let mut game = Game::new();
    let mut log = CommandLog::new();
    game.reset(&mut log);

    // White may not open.
    assert_eq!(
        game.activate(sq("E7").coord(), &mut log),
        Transition::Ignored(IgnoreReason::NotYourTurn)
    );
    game.activate(sq("E2").coord(), &mut log);
    game.activate(sq("E4").coord(), &mut log);

    // Black may not move twice.
    assert_eq!(
        game.activate(sq("D2").coord(), &mut log),
        Transition::Ignored(IgnoreReason::NotYourTurn)
    );
    assert!(matches!(
        game.activate(sq("E7").coord(), &mut log),
        Transition::Selected { .. }
    ));
}

#[test]
fn resumed_position_keeps_turn() {
    let mut game = Game::from_placement("4k3/8/8/8/8/8/8/4K3", Color::White).unwrap();
    let mut log = CommandLog::new();
    let mut events = ScriptedEvents::new(clicks(&["E1", "E2", "E8", "E7"]));
    Session::new(&mut game, &mut log, &mut events)
        .resume()
        .unwrap();

    // E1 is Black's king, so only the White king on E8 moved.
    assert!(!game.is_over());
    assert_eq!(game.turn(), Color::Black);
}

fn any_coord() -> impl Strategy<Value = Coord> {
    (-1i8..9, -1i8..9).prop_map(|(file, rank)| Coord::new(file, rank))
}

proptest! {
    #[test]
    fn activations_keep_bookkeeping_consistent(coords in prop::collection::vec(any_coord(), 0..120)) {
        let mut game = Game::new();
        let mut log = CommandLog::new();
        game.reset(&mut log);

        for coord in coords {
            let turn = game.turn();
            let board = game.board().clone();
            let was_over = game.is_over();

            match game.activate(coord, &mut log) {
                Transition::Moved(mv) => {
                    prop_assert!(!was_over);
                    prop_assert_eq!(mv.piece.color(), turn);
                    prop_assert_eq!(game.turn(), turn.opposite());
                    prop_assert_eq!(game.board().piece_at(mv.to), Some(mv.piece));
                    prop_assert_eq!(game.board().piece_at(mv.from), None);
                    if let Some(victim) = mv.captured {
                        prop_assert_eq!(victim.color(), turn.opposite());
                    }
                }
                Transition::Selected { square, candidates } => {
                    prop_assert!(!candidates.is_empty());
                    prop_assert!(!candidates.contains(square));
                    prop_assert_eq!(game.turn(), turn);
                    prop_assert_eq!(game.board(), &board);
                }
                Transition::Cancelled { .. } | Transition::Ignored(_) => {
                    prop_assert_eq!(game.turn(), turn);
                    prop_assert_eq!(game.board(), &board);
                }
            }

            prop_assert_eq!(
                game.board().occupied_count() + game.captures().len(),
                32
            );
        }
    }
}
