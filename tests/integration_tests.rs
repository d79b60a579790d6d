//! Integration tests for the turn state machine

use std::collections::VecDeque;

use match3::core::{
    has_matches, GameConfig, InstantView, Layout, NoInput, PieceView, TimedView, TurnStateMachine,
    ViewEvent,
};
use match3::types::{Fade, PieceHandle, Position, Swipe, TurnPhase};

// Bottom row reads 0 0 1 0: swiping (2, 0) right completes a Line3.
const LAYOUT: &str = "\
3,1,3,1
2,3,2,3
1,2,3,2
0,0,1,0
";

fn layout_game(seed: u64) -> TurnStateMachine {
    let config = GameConfig::seeded(seed).with_size(4, 4).with_palette(4);
    let layout = Layout::parse(LAYOUT, 4).unwrap();
    TurnStateMachine::with_layout(config, &layout).unwrap()
}

fn winning_swipe() -> Option<Swipe> {
    Some(Swipe::new(Position::new(2, 0), 0.9, 0.2))
}

fn run_to_waiting<V: PieceView>(game: &mut TurnStateMachine, view: &mut V) -> Vec<TurnPhase> {
    let mut phases = Vec::new();
    while !game.is_waiting() {
        phases.push(game.tick(view, &mut NoInput));
        assert!(phases.len() < 10_000, "cascade did not settle");
    }
    phases
}

#[test]
fn test_game_lifecycle() {
    let game = TurnStateMachine::new(GameConfig::seeded(12345)).unwrap();
    assert_eq!(game.phase(), TurnPhase::WaitingForInput);
    assert!(game.board().is_full());
    assert!(!has_matches(game.board()));
    assert_eq!(game.score(), 0);
    assert_eq!(game.turns(), 0);
    assert!(game.last_turn().is_none());
}

#[test]
fn test_cascade_visits_every_phase_in_order() {
    let mut game = layout_game(3);
    let mut view = InstantView::new();

    let mut phases = vec![game.tick(&mut view, &mut winning_swipe())];
    phases.extend(run_to_waiting(&mut game, &mut view));

    let expected = [
        TurnPhase::SwapAnimating,
        TurnPhase::Matching,
        TurnPhase::DeleteFading,
        TurnPhase::Falling,
        TurnPhase::FallingAnimating,
        TurnPhase::Creating,
        TurnPhase::CreatingAnimating,
        TurnPhase::Matching,
    ];
    assert_eq!(&phases[..expected.len()], &expected);
    assert_eq!(phases.last(), Some(&TurnPhase::WaitingForInput));

    assert!(game.board().is_full());
    assert!(!has_matches(game.board()));
    assert_eq!(game.turns(), 1);

    let stats = game.last_turn().unwrap();
    assert!(stats.chain >= 1);
    assert!(stats.cleared >= 3);
    assert_eq!(stats.score, game.score());
    assert!(game.score() >= 50);
}

#[test]
fn test_removed_pieces_are_announced_once() {
    let mut game = layout_game(3);
    let mut view = InstantView::new();
    game.tick(&mut view, &mut winning_swipe());
    run_to_waiting(&mut game, &mut view);

    let mut removed: Vec<PieceHandle> = view
        .events()
        .iter()
        .filter_map(|e| match e {
            ViewEvent::Removed { handle } => Some(*handle),
            _ => None,
        })
        .collect();
    let total = removed.len();
    removed.sort();
    removed.dedup();
    assert_eq!(removed.len(), total);

    // every removed piece faded out first and every spawn faded in
    assert_eq!(view.fade_count(Fade::Out), total);
    assert_eq!(view.spawned_count(), total);
    assert_eq!(view.fade_count(Fade::In), total);
    for handle in removed {
        assert!(game.board().find(handle).is_none());
    }
}

#[test]
fn test_swap_without_match_ends_turn() {
    let mut game = layout_game(3);
    let mut view = InstantView::new();
    // (0, 3) and (1, 3) swap to 1 3 3 1 on top: no match
    let mut input = Some(Swipe::new(Position::new(0, 3), 1.0, 0.0));

    assert_eq!(game.tick(&mut view, &mut input), TurnPhase::SwapAnimating);
    assert_eq!(game.tick(&mut view, &mut NoInput), TurnPhase::Matching);
    assert_eq!(game.tick(&mut view, &mut NoInput), TurnPhase::WaitingForInput);

    assert_eq!(game.board().get(0, 3).kind().map(|k| k.index()), Some(1));
    assert!(game.last_turn().unwrap().is_dry());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_queued_swipes_wait_for_next_turn() {
    let mut game = layout_game(3);
    let mut view = InstantView::new();
    let mut input: VecDeque<Swipe> = VecDeque::new();
    input.push_back(Swipe::new(Position::new(0, 0), 0.1, 0.1)); // too short, dropped
    input.push_back(Swipe::new(Position::new(2, 0), 1.0, 0.0));
    input.push_back(Swipe::new(Position::new(0, 3), 1.0, 0.0));

    assert_eq!(game.tick(&mut view, &mut input), TurnPhase::SwapAnimating);
    assert_eq!(input.len(), 1);

    while !game.is_waiting() {
        game.tick(&mut view, &mut input);
    }
    // not consumed during the cascade
    assert_eq!(input.len(), 1);
    assert_eq!(game.tick(&mut view, &mut input), TurnPhase::SwapAnimating);
    assert!(input.is_empty());
}

#[test]
fn test_timed_view_holds_phases() {
    let mut game = layout_game(3);
    let mut view = TimedView::new(3, 2);

    assert_eq!(game.tick(&mut view, &mut winning_swipe()), TurnPhase::SwapAnimating);
    let mut swap_ticks = 0;
    while game.phase() == TurnPhase::SwapAnimating {
        view.advance();
        game.tick(&mut view, &mut NoInput);
        swap_ticks += 1;
    }
    assert_eq!(swap_ticks, 3);

    while !game.is_waiting() {
        view.advance();
        game.tick(&mut view, &mut NoInput);
    }
    assert!(view.is_idle());
    assert!(game.board().is_full());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut game = TurnStateMachine::new(GameConfig::seeded(seed)).unwrap();
        let mut view = InstantView::new();
        for i in 0..5 {
            let mut input = Some(Swipe::new(Position::new(i, i), 1.0, 0.0));
            game.tick(&mut view, &mut input);
            run_to_waiting(&mut game, &mut view);
        }
        (game.snapshot(), view.events().to_vec())
    };

    let (a, events_a) = play(2024);
    let (b, events_b) = play(2024);
    assert_eq!(a, b);
    assert_eq!(events_a, events_b);

    let (c, _) = play(2025);
    assert_ne!(a.board_hash, c.board_hash);
}
