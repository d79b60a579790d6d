//! View and input collaborators
//!
//! The state machine never renders or times anything itself. It asks a
//! [`PieceView`] to start moves and fades by piece handle and polls it each
//! tick until they finish. Swipes arrive through a [`SwipeSource`].
//!
//! Two headless views ship with the core:
//!
//! - [`InstantView`]: every animation finishes immediately; all calls are
//!   recorded so tests can assert on them.
//! - [`TimedView`]: every animation takes a fixed number of ticks, advanced
//!   by the driver with [`TimedView::advance`].

use std::collections::{HashMap, VecDeque};

use crate::types::{Fade, PieceHandle, PieceType, Position, Swipe};

/// Animation surface driven by the state machine
pub trait PieceView {
    /// Begin moving the piece from `from` to `to`
    fn start_move(&mut self, handle: PieceHandle, from: Position, to: Position);

    fn is_moving(&self, handle: PieceHandle) -> bool;

    fn start_fade(&mut self, handle: PieceHandle, fade: Fade);

    fn is_fading(&self, handle: PieceHandle) -> bool;

    /// A piece was created at `at`
    fn spawned(&mut self, _handle: PieceHandle, _kind: PieceType, _at: Position) {}

    /// A piece left the board for good
    fn removed(&mut self, _handle: PieceHandle) {}
}

impl<V: PieceView + ?Sized> PieceView for &mut V {
    fn start_move(&mut self, handle: PieceHandle, from: Position, to: Position) {
        (**self).start_move(handle, from, to);
    }

    fn is_moving(&self, handle: PieceHandle) -> bool {
        (**self).is_moving(handle)
    }

    fn start_fade(&mut self, handle: PieceHandle, fade: Fade) {
        (**self).start_fade(handle, fade);
    }

    fn is_fading(&self, handle: PieceHandle) -> bool {
        (**self).is_fading(handle)
    }

    fn spawned(&mut self, handle: PieceHandle, kind: PieceType, at: Position) {
        (**self).spawned(handle, kind, at);
    }

    fn removed(&mut self, handle: PieceHandle) {
        (**self).removed(handle);
    }
}

/// Pull-based swipe input, polled only while waiting for input
pub trait SwipeSource {
    fn poll_swipe(&mut self) -> Option<Swipe>;
}

impl SwipeSource for Option<Swipe> {
    fn poll_swipe(&mut self) -> Option<Swipe> {
        self.take()
    }
}

impl SwipeSource for VecDeque<Swipe> {
    fn poll_swipe(&mut self) -> Option<Swipe> {
        self.pop_front()
    }
}

/// No input at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl SwipeSource for NoInput {
    fn poll_swipe(&mut self) -> Option<Swipe> {
        None
    }
}

/// One call received by an [`InstantView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Move {
        handle: PieceHandle,
        from: Position,
        to: Position,
    },
    Fade {
        handle: PieceHandle,
        fade: Fade,
    },
    Spawned {
        handle: PieceHandle,
        kind: PieceType,
        at: Position,
    },
    Removed {
        handle: PieceHandle,
    },
}

/// View whose animations complete as soon as they start
#[derive(Debug, Clone, Default)]
pub struct InstantView {
    events: Vec<ViewEvent>,
}

impl InstantView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn move_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Move { .. }))
            .count()
    }

    pub fn fade_count(&self, fade: Fade) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Fade { fade: f, .. } if *f == fade))
            .count()
    }

    pub fn spawned_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Spawned { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Removed { .. }))
            .count()
    }
}

impl PieceView for InstantView {
    fn start_move(&mut self, handle: PieceHandle, from: Position, to: Position) {
        self.events.push(ViewEvent::Move { handle, from, to });
    }

    fn is_moving(&self, _handle: PieceHandle) -> bool {
        false
    }

    fn start_fade(&mut self, handle: PieceHandle, fade: Fade) {
        self.events.push(ViewEvent::Fade { handle, fade });
    }

    fn is_fading(&self, _handle: PieceHandle) -> bool {
        false
    }

    fn spawned(&mut self, handle: PieceHandle, kind: PieceType, at: Position) {
        self.events.push(ViewEvent::Spawned { handle, kind, at });
    }

    fn removed(&mut self, handle: PieceHandle) {
        self.events.push(ViewEvent::Removed { handle });
    }
}

/// View whose animations take a fixed number of ticks
///
/// Remaining ticks are counted per handle; [`advance`](Self::advance) moves
/// every running animation one tick closer to done.
#[derive(Debug, Clone, Default)]
pub struct TimedView {
    move_ticks: u32,
    fade_ticks: u32,
    moving: HashMap<PieceHandle, u32>,
    fading: HashMap<PieceHandle, u32>,
}

impl TimedView {
    pub fn new(move_ticks: u32, fade_ticks: u32) -> Self {
        Self {
            move_ticks,
            fade_ticks,
            ..Self::default()
        }
    }

    /// Step all running animations by one tick
    pub fn advance(&mut self) {
        for left in self.moving.values_mut().chain(self.fading.values_mut()) {
            *left = left.saturating_sub(1);
        }
        self.moving.retain(|_, left| *left > 0);
        self.fading.retain(|_, left| *left > 0);
    }

    /// No animation is running
    pub fn is_idle(&self) -> bool {
        self.moving.is_empty() && self.fading.is_empty()
    }
}

impl PieceView for TimedView {
    fn start_move(&mut self, handle: PieceHandle, _from: Position, _to: Position) {
        if self.move_ticks > 0 {
            self.moving.insert(handle, self.move_ticks);
        }
    }

    fn is_moving(&self, handle: PieceHandle) -> bool {
        self.moving.contains_key(&handle)
    }

    fn start_fade(&mut self, handle: PieceHandle, _fade: Fade) {
        if self.fade_ticks > 0 {
            self.fading.insert(handle, self.fade_ticks);
        }
    }

    fn is_fading(&self, handle: PieceHandle) -> bool {
        self.fading.contains_key(&handle)
    }

    fn removed(&mut self, handle: PieceHandle) {
        self.moving.remove(&handle);
        self.fading.remove(&handle);
    }
}
