//! A running game: one state plus the scheduler that drives its gravity.
//!
//! The scheduler is kept in step with the state after every transition. It
//! runs only while the game is started, unpaused and not over.

use crate::game_state::GameState;
use crate::scheduler::Scheduler;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    scheduler: Scheduler,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            scheduler: Scheduler::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Reduce one action, then start or stop gravity to match.
    pub fn dispatch(&mut self, action: GameAction, now_ms: u64) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.sync(now_ms);
    }

    /// Advance one frame. Returns true when a tick was dispatched.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        self.frame_with(now_ms, |_| {})
    }

    /// Like [`Session::frame`], calling `on_tick` with the state after the tick.
    pub fn frame_with<F>(&mut self, now_ms: u64, mut on_tick: F) -> bool
    where
        F: FnMut(&GameState),
    {
        let interval = self.state.gravity_interval_ms() as u64;
        if !self.scheduler.on_frame(now_ms, interval) {
            return false;
        }
        self.dispatch(GameAction::Tick, now_ms);
        on_tick(&self.state);
        true
    }

    fn sync(&mut self, now_ms: u64) {
        if self.state.is_live() {
            self.scheduler.start(now_ms);
        } else {
            self.scheduler.stop();
        }
    }
}
