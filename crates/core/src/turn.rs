//! Turn state machine - tick-driven cascade orchestration
//!
//! The machine owns the board, the spawner and the swapper. Each call to
//! [`TurnStateMachine::tick`] performs at most one phase transition:
//!
//! ```text
//! WaitingForInput -> SwapAnimating -> Matching -> DeleteFading -> Falling
//!        ^                              |  ^                          |
//!        +------------ no match --------+  |                          v
//!                                 CreatingAnimating <- Creating <- FallingAnimating
//! ```
//!
//! Animation phases poll the [`PieceView`] and only advance once every
//! piece they started has settled (or the optional settle timeout runs out).
//! Data in flight lives inside the [`TurnState`] variant, so a swap intent,
//! a match set and a list of pending moves can never coexist.

use std::mem;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::gravity;
use crate::layout::Layout;
use crate::matcher::{find_matches, has_matches, MatchSet};
use crate::scoring::TurnStats;
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::swapper::Swapper;
use crate::types::{Fade, PendingMove, SwapIntent, TurnPhase};
use crate::view::{PieceView, SwipeSource};

/// Current phase together with its in-flight data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TurnState {
    #[default]
    WaitingForInput,
    SwapAnimating(SwapIntent),
    Matching,
    DeleteFading(MatchSet),
    Falling,
    FallingAnimating(Vec<PendingMove>),
    Creating,
    CreatingAnimating(Vec<PendingMove>),
}

impl TurnState {
    pub fn phase(&self) -> TurnPhase {
        match self {
            TurnState::WaitingForInput => TurnPhase::WaitingForInput,
            TurnState::SwapAnimating(_) => TurnPhase::SwapAnimating,
            TurnState::Matching => TurnPhase::Matching,
            TurnState::DeleteFading(_) => TurnPhase::DeleteFading,
            TurnState::Falling => TurnPhase::Falling,
            TurnState::FallingAnimating(_) => TurnPhase::FallingAnimating,
            TurnState::Creating => TurnPhase::Creating,
            TurnState::CreatingAnimating(_) => TurnPhase::CreatingAnimating,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TurnStateMachine {
    config: GameConfig,
    board: Board,
    spawner: Spawner,
    swapper: Swapper,
    state: TurnState,
    /// Busy polls in the current animation phase
    waited: u32,
    /// Stats of the turn in progress
    stats: TurnStats,
    last_turn: Option<TurnStats>,
    score: u32,
    turns: u32,
    tick: u64,
    /// Fixing passes run on the initial board
    fix_iterations: u32,
}

impl TurnStateMachine {
    /// Start a game on a randomly filled board
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut machine = Self::unfilled(config)?;
        let positions: Vec<_> = machine.board.positions().collect();
        for pos in positions {
            let piece = machine.spawner.create_at(pos);
            machine.board.place(pos, piece);
        }
        machine.fix_iterations = machine.fix_initial_matches();
        Ok(machine)
    }

    /// Start a game from a fixed layout
    ///
    /// The layout must match the configured size and every cell must hold a
    /// valid palette index. Initial matches in the layout are still broken up.
    pub fn with_layout(config: GameConfig, layout: &Layout) -> Result<Self, GameError> {
        let mut machine = Self::unfilled(config)?;
        layout.check_size(machine.board.width(), machine.board.height())?;
        let unset = layout.unset_count();
        if unset > 0 {
            return Err(GameError::IncompleteLayout { unset });
        }

        let positions: Vec<_> = machine.board.positions().collect();
        for pos in positions {
            let piece = layout
                .kind_at(pos)
                .and_then(|kind| machine.spawner.create_with_type(pos, i64::from(kind.0)));
            if let Some(piece) = piece {
                machine.board.place(pos, piece);
            }
        }
        machine.fix_iterations = machine.fix_initial_matches();
        Ok(machine)
    }

    fn unfilled(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.resolve();
        info!(
            width = config.width,
            height = config.height,
            palette = config.palette_size,
            seed,
            "new board"
        );
        Ok(Self {
            board: Board::new(config.width, config.height),
            spawner: Spawner::new(config.palette_size, seed),
            swapper: Swapper::new(config.swipe_threshold),
            state: TurnState::WaitingForInput,
            waited: 0,
            stats: TurnStats::default(),
            last_turn: None,
            score: 0,
            turns: 0,
            tick: 0,
            fix_iterations: 0,
            config,
        })
    }

    /// Break up matches on a freshly filled board
    ///
    /// Each pass keeps the first cell of every cluster and replaces the next
    /// one with a piece of a different type. Returns the number of passes
    /// that replaced pieces, at most the configured cap.
    fn fix_initial_matches(&mut self) -> u32 {
        let cap = self.config.fix_initial_cap;
        let mut passes = 0;
        while passes < cap {
            let matches = find_matches(&self.board);
            if matches.is_empty() {
                break;
            }
            for cluster in matches.clusters() {
                let keep = cluster.first();
                let Some(pos) = cluster.cells.iter().copied().find(|&p| Some(p) != keep) else {
                    continue;
                };
                self.board.take(pos);
                let piece = self.spawner.create_excluding(pos, cluster.kind);
                self.board.place(pos, piece);
            }
            passes += 1;
        }

        if has_matches(&self.board) {
            warn!(cap, passes, "initial board still has matches at the iteration cap");
        } else {
            debug!(passes, "initial board is match-free");
        }
        passes
    }

    /// Announce every piece on the board to `view`
    pub fn present<V: PieceView + ?Sized>(&self, view: &mut V) {
        for pos in self.board.positions() {
            if let Some(piece) = self.board.at(pos).piece() {
                view.spawned(piece.handle, piece.kind, pos);
            }
        }
    }

    /// Advance by one tick and return the phase after it
    pub fn tick<V, S>(&mut self, view: &mut V, input: &mut S) -> TurnPhase
    where
        V: PieceView + ?Sized,
        S: SwipeSource + ?Sized,
    {
        self.tick += 1;
        let from = self.state.phase();
        self.state = match mem::take(&mut self.state) {
            TurnState::WaitingForInput => self.poll_input(view, input),
            TurnState::SwapAnimating(intent) => self.on_swap_animating(view, intent),
            TurnState::Matching => self.on_matching(view),
            TurnState::DeleteFading(matches) => self.on_delete_fading(view, matches),
            TurnState::Falling => self.on_falling(view),
            TurnState::FallingAnimating(moves) => self.on_falling_animating(view, moves),
            TurnState::Creating => self.on_creating(view),
            TurnState::CreatingAnimating(drops) => self.on_creating_animating(view, drops),
        };
        let to = self.state.phase();
        if from != to {
            self.waited = 0;
            debug!(from = from.as_str(), to = to.as_str(), tick = self.tick, "phase");
        }
        to
    }

    /// Whether an animation phase may advance
    ///
    /// With a settle timeout, a phase that has stayed busy for that many
    /// polls is forced forward.
    fn settled(&mut self, phase: TurnPhase, busy: bool) -> bool {
        if !busy {
            return true;
        }
        self.waited += 1;
        match self.config.settle_timeout_ticks {
            Some(limit) if self.waited >= limit => {
                warn!(
                    phase = phase.as_str(),
                    ticks = self.waited,
                    "view did not settle in time, advancing"
                );
                true
            }
            _ => false,
        }
    }

    fn poll_input<V, S>(&mut self, view: &mut V, input: &mut S) -> TurnState
    where
        V: PieceView + ?Sized,
        S: SwipeSource + ?Sized,
    {
        while let Some(swipe) = input.poll_swipe() {
            let Some(intent) = self.swapper.attempt_swap(&self.board, swipe) else {
                continue;
            };
            let a = self.board.at(intent.a).handle();
            let b = self.board.at(intent.b).handle();
            if let (Some(a), Some(b)) = (a, b) {
                view.start_move(a, intent.a, intent.b);
                view.start_move(b, intent.b, intent.a);
            }
            self.stats.clear();
            debug!(
                ax = intent.a.x,
                ay = intent.a.y,
                bx = intent.b.x,
                by = intent.b.y,
                "swap"
            );
            return TurnState::SwapAnimating(intent);
        }
        TurnState::WaitingForInput
    }

    fn on_swap_animating<V>(&mut self, view: &mut V, intent: SwapIntent) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let busy = [intent.a, intent.b]
            .iter()
            .filter_map(|&p| self.board.at(p).handle())
            .any(|h| view.is_moving(h));
        if !self.settled(TurnPhase::SwapAnimating, busy) {
            return TurnState::SwapAnimating(intent);
        }
        self.swapper.commit(&mut self.board, intent);
        TurnState::Matching
    }

    fn on_matching<V>(&mut self, view: &mut V) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let matches = find_matches(&self.board);
        if matches.is_empty() {
            let stats = mem::take(&mut self.stats);
            self.turns += 1;
            debug!(
                turn = self.turns,
                chain = stats.chain,
                cleared = stats.cleared,
                points = stats.score,
                "turn settled"
            );
            self.last_turn = Some(stats);
            return TurnState::WaitingForInput;
        }

        let result = self.stats.record_pass(&matches);
        self.score = self.score.saturating_add(result.total);
        debug!(
            clusters = matches.len(),
            cells = matches.cell_count(),
            chain = result.chain,
            points = result.total,
            "matches"
        );
        for pos in matches.positions() {
            if let Some(h) = self.board.at(pos).handle() {
                view.start_fade(h, Fade::Out);
            }
        }
        TurnState::DeleteFading(matches)
    }

    fn on_delete_fading<V>(&mut self, view: &mut V, matches: MatchSet) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let busy = matches
            .positions()
            .filter_map(|p| self.board.at(p).handle())
            .any(|h| view.is_fading(h));
        if !self.settled(TurnPhase::DeleteFading, busy) {
            return TurnState::DeleteFading(matches);
        }
        // each cell belongs to one cluster, so every slot is cleared once
        for pos in matches.positions() {
            if let Some(h) = self.board.take(pos).handle() {
                view.removed(h);
            }
        }
        TurnState::Falling
    }

    fn on_falling<V>(&mut self, view: &mut V) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let moves = gravity::resolve(&self.board);
        for m in &moves {
            view.start_move(m.handle, m.from, m.to);
        }
        TurnState::FallingAnimating(moves)
    }

    fn on_falling_animating<V>(&mut self, view: &mut V, moves: Vec<PendingMove>) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let busy = moves.iter().any(|m| view.is_moving(m.handle));
        if !self.settled(TurnPhase::FallingAnimating, busy) {
            return TurnState::FallingAnimating(moves);
        }
        gravity::commit(&mut self.board, &moves);
        TurnState::Creating
    }

    fn on_creating<V>(&mut self, view: &mut V) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let empties = gravity::empty_slots(&self.board);
        let mut per_column = vec![0i32; self.board.width()];
        for pos in &empties {
            per_column[pos.x as usize] += 1;
        }

        // New pieces start stacked above the top edge, in column order.
        let mut drops = Vec::with_capacity(empties.len());
        for pos in empties {
            let start_y = pos.y + per_column[pos.x as usize];
            let (piece, drop) = self.spawner.create_and_stage_drop(pos, start_y);
            self.board.place(pos, piece);
            view.spawned(piece.handle, piece.kind, pos);
            view.start_move(drop.handle, drop.from, drop.to);
            view.start_fade(piece.handle, Fade::In);
            drops.push(drop);
        }
        TurnState::CreatingAnimating(drops)
    }

    fn on_creating_animating<V>(&mut self, view: &mut V, drops: Vec<PendingMove>) -> TurnState
    where
        V: PieceView + ?Sized,
    {
        let busy = drops
            .iter()
            .any(|d| view.is_moving(d.handle) || view.is_fading(d.handle));
        if !self.settled(TurnPhase::CreatingAnimating, busy) {
            return TurnState::CreatingAnimating(drops);
        }
        TurnState::Matching
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.phase()
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Waiting for a swipe, with the board full and stable
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, TurnState::WaitingForInput)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    /// Reseed the spawner for subsequent pieces
    pub fn set_seed(&mut self, seed: u64) {
        self.spawner.set_seed(seed);
    }

    /// Running total over all turns
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed turns
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Stats of the turn in progress
    pub fn current_stats(&self) -> &TurnStats {
        &self.stats
    }

    pub fn last_turn(&self) -> Option<&TurnStats> {
        self.last_turn.as_ref()
    }

    pub fn fix_iterations(&self) -> u32 {
        self.fix_iterations
    }

    /// Fill `out` with the current state, reusing its row buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let (width, height) = (self.board.width(), self.board.height());
        out.width = width;
        out.height = height;
        out.rows.resize_with(height, Vec::new);
        for (r, row) in out.rows.iter_mut().enumerate() {
            let y = (height - 1 - r) as i32;
            row.clear();
            row.extend((0..width as i32).map(|x| self.board.get(x, y).kind().map(|k| k.index())));
        }
        out.rehash();
        out.phase = self.phase();
        out.seed = self.seed();
        out.tick = self.tick;
        out.turns = self.turns;
        out.score = self.score;
        out.last_turn = self.last_turn.clone();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::types::{PieceHandle, Position, Swipe};
    use crate::view::{InstantView, NoInput};

    // bottom row is 0 0 1 0; swapping the last two makes a Line3
    const LAYOUT: &str = "3,1,3,1\n2,3,2,3\n1,2,3,2\n0,0,1,0\n";

    fn layout_machine() -> TurnStateMachine {
        let config = GameConfig::seeded(7).with_size(4, 4).with_palette(4);
        let layout = Layout::parse(LAYOUT, 4).unwrap();
        TurnStateMachine::with_layout(config, &layout).unwrap()
    }

    /// A view whose animations never finish
    struct StuckView;

    impl PieceView for StuckView {
        fn start_move(&mut self, _: PieceHandle, _: Position, _: Position) {}
        fn is_moving(&self, _: PieceHandle) -> bool {
            true
        }
        fn start_fade(&mut self, _: PieceHandle, _: Fade) {}
        fn is_fading(&self, _: PieceHandle) -> bool {
            true
        }
    }

    #[test]
    fn test_new_board_is_full_and_match_free() {
        let m = TurnStateMachine::new(GameConfig::seeded(99)).unwrap();
        assert!(m.board().is_full());
        assert!(!has_matches(m.board()));
        assert_eq!(m.phase(), TurnPhase::WaitingForInput);
        assert_eq!(m.seed(), 99);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = TurnStateMachine::new(GameConfig::seeded(1).with_palette(0)).unwrap_err();
        assert_eq!(err, GameError::Config(ConfigError::EmptyPalette));
    }

    #[test]
    fn test_single_type_palette_is_rejected() {
        let err = TurnStateMachine::new(GameConfig::seeded(1).with_size(4, 4).with_palette(1))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::Config(ConfigError::PaletteTooSmall { size: 1, min: 2 })
        );
    }

    #[test]
    fn test_layout_with_unset_cells_is_rejected() {
        let config = GameConfig::seeded(1).with_size(2, 2).with_palette(3);
        let layout = Layout::parse("0,9\n1,2", 3).unwrap();
        let err = TurnStateMachine::with_layout(config, &layout).unwrap_err();
        assert_eq!(err, GameError::IncompleteLayout { unset: 1 });
    }

    #[test]
    fn test_layout_size_must_match() {
        let config = GameConfig::seeded(1).with_size(3, 3).with_palette(3);
        let layout = Layout::parse("0,1\n1,2", 3).unwrap();
        assert!(matches!(
            TurnStateMachine::with_layout(config, &layout),
            Err(GameError::Layout(_))
        ));
    }

    #[test]
    fn test_fix_cap_reached_still_builds() {
        // one fixing pass cannot break a run of five
        let mut config = GameConfig::seeded(3).with_size(5, 1).with_palette(2);
        config.fix_initial_cap = 1;
        let layout = Layout::parse("0,0,0,0,0", 2).unwrap();
        let m = TurnStateMachine::with_layout(config, &layout).unwrap();
        assert_eq!(m.fix_iterations(), 1);
        assert!(has_matches(m.board()));
        assert!(m.is_waiting());
        assert!(m.board().is_full());
    }

    #[test]
    fn test_fix_iterations_counts_passes_run() {
        let layout = Layout::parse("0,0,0", 2).unwrap();
        let config = GameConfig::seeded(3).with_size(3, 1).with_palette(2);
        let m = TurnStateMachine::with_layout(config.clone(), &layout).unwrap();
        assert_eq!(m.fix_iterations(), 1);
        assert!(!has_matches(m.board()));

        // a cap equal to the passes needed reports the same count
        let mut capped = config;
        capped.fix_initial_cap = 1;
        let m = TurnStateMachine::with_layout(capped, &layout).unwrap();
        assert_eq!(m.fix_iterations(), 1);
        assert!(!has_matches(m.board()));
        assert_eq!(m.board().get(0, 0).kind().map(|k| k.index()), Some(0));
        assert_eq!(m.board().get(1, 0).kind().map(|k| k.index()), Some(1));
    }

    #[test]
    fn test_layout_is_loaded_bottom_up() {
        let m = layout_machine();
        assert_eq!(m.fix_iterations(), 0);
        assert_eq!(m.board().get(2, 0).kind().map(|k| k.index()), Some(1));
        assert_eq!(m.board().get(0, 3).kind().map(|k| k.index()), Some(3));
    }

    #[test]
    fn test_no_transition_without_input() {
        let mut m = layout_machine();
        let mut view = InstantView::new();
        for _ in 0..5 {
            assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::WaitingForInput);
        }
        assert!(view.events().is_empty());
        assert_eq!(m.ticks(), 5);
    }

    #[test]
    fn test_invalid_swipe_is_dropped() {
        let mut m = layout_machine();
        let mut view = InstantView::new();
        let mut input = Some(Swipe::new(Position::new(3, 0), 1.0, 0.0));
        assert_eq!(m.tick(&mut view, &mut input), TurnPhase::WaitingForInput);
        assert!(input.is_none());
    }

    #[test]
    fn test_swap_starts_two_moves() {
        let mut m = layout_machine();
        let mut view = InstantView::new();
        let mut input = Some(Swipe::new(Position::new(2, 0), 1.0, 0.0));
        assert_eq!(m.tick(&mut view, &mut input), TurnPhase::SwapAnimating);
        assert_eq!(view.move_count(), 2);

        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::Matching);
        assert_eq!(m.board().get(2, 0).kind().map(|k| k.index()), Some(0));

        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::DeleteFading);
        assert_eq!(view.fade_count(Fade::Out), 3);
        assert_eq!(m.current_stats().chain, 1);
        assert_eq!(m.score(), 50);
    }

    #[test]
    fn test_swap_commits_intent_held_by_state() {
        let mut m = layout_machine();
        let mut view = InstantView::new();
        let mut input = Some(Swipe::new(Position::new(2, 0), 1.0, 0.0));
        m.tick(&mut view, &mut input);
        let expected = SwapIntent {
            a: Position::new(2, 0),
            b: Position::new(3, 0),
        };
        assert_eq!(m.state(), &TurnState::SwapAnimating(expected));

        // input arriving mid-animation is not polled
        let mut late = Some(Swipe::new(Position::new(0, 3), 1.0, 0.0));
        assert_eq!(m.tick(&mut view, &mut late), TurnPhase::Matching);
        assert!(late.is_some());
        assert_eq!(m.board().get(2, 0).kind().map(|k| k.index()), Some(0));
        assert_eq!(m.board().get(3, 0).kind().map(|k| k.index()), Some(1));
        assert_eq!(m.board().get(0, 3).kind().map(|k| k.index()), Some(3));
    }

    #[test]
    fn test_removal_and_refill() {
        let mut m = layout_machine();
        let mut view = InstantView::new();
        let mut input = Some(Swipe::new(Position::new(2, 0), 1.0, 0.0));
        m.tick(&mut view, &mut input); // swap animating
        m.tick(&mut view, &mut NoInput); // matching
        m.tick(&mut view, &mut NoInput); // delete fading
        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::Falling);
        assert_eq!(m.board().empty_count(), 3);
        assert_eq!(view.removed_count(), 3);

        view.clear();
        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::FallingAnimating);
        // three columns, three pieces each above the cleared row
        assert_eq!(view.move_count(), 9);

        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::Creating);
        assert!(m.board().get(0, 3).is_empty());

        view.clear();
        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::CreatingAnimating);
        assert!(m.board().is_full());
        assert_eq!(view.spawned_count(), 3);
        assert_eq!(view.fade_count(Fade::In), 3);
        // single empty slot per column drops in from one row above the board
        let drops: Vec<_> = view
            .events()
            .iter()
            .filter_map(|e| match e {
                crate::view::ViewEvent::Move { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(drops.len(), 3);
        assert!(drops.iter().all(|(from, to)| from.y == 4 && to.y == 3));

        assert_eq!(m.tick(&mut view, &mut NoInput), TurnPhase::Matching);
    }

    #[test]
    fn test_stuck_view_waits_without_timeout() {
        let mut m = layout_machine();
        let mut input = Some(Swipe::new(Position::new(2, 0), 1.0, 0.0));
        m.tick(&mut StuckView, &mut input);
        for _ in 0..100 {
            assert_eq!(m.tick(&mut StuckView, &mut NoInput), TurnPhase::SwapAnimating);
        }
    }

    #[test]
    fn test_settle_timeout_advances() {
        let config = GameConfig::seeded(7)
            .with_size(4, 4)
            .with_palette(4)
            .with_settle_timeout(3);
        let layout = Layout::parse(LAYOUT, 4).unwrap();
        let mut m = TurnStateMachine::with_layout(config, &layout).unwrap();
        let mut input = Some(Swipe::new(Position::new(2, 0), 1.0, 0.0));

        assert_eq!(m.tick(&mut StuckView, &mut input), TurnPhase::SwapAnimating);
        assert_eq!(m.tick(&mut StuckView, &mut NoInput), TurnPhase::SwapAnimating);
        assert_eq!(m.tick(&mut StuckView, &mut NoInput), TurnPhase::SwapAnimating);
        assert_eq!(m.tick(&mut StuckView, &mut NoInput), TurnPhase::Matching);
    }

    #[test]
    fn test_snapshot_rows_are_top_first() {
        let m = layout_machine();
        let snap = m.snapshot();
        assert_eq!(snap.width, 4);
        assert_eq!(snap.rows[0], vec![Some(3), Some(1), Some(3), Some(1)]);
        assert_eq!(snap.rows[3], vec![Some(0), Some(0), Some(1), Some(0)]);
        assert_eq!(snap.phase, TurnPhase::WaitingForInput);
        assert_eq!(snap.board_hash, crate::snapshot::board_hash(&snap.rows));
    }
}
