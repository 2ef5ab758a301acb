use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Idle,
    Playing,
    Finished,
}

impl RoundPhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Countdown and score counters. The phase is derived, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    is_playing: bool,
    seconds_remaining: Seconds,
    success_count: Saturating<u32>,
    miss_count: Saturating<u32>,
}

impl RoundState {
    pub const fn new(round_seconds: Seconds) -> Self {
        Self {
            is_playing: false,
            seconds_remaining: round_seconds,
            success_count: Saturating(0),
            miss_count: Saturating(0),
        }
    }

    pub const fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub const fn seconds_remaining(&self) -> Seconds {
        self.seconds_remaining
    }

    pub const fn success_count(&self) -> u32 {
        self.success_count.0
    }

    pub const fn miss_count(&self) -> u32 {
        self.miss_count.0
    }

    pub const fn phase(&self) -> RoundPhase {
        match (self.is_playing, self.seconds_remaining) {
            (false, _) => RoundPhase::Idle,
            (true, 0) => RoundPhase::Finished,
            (true, _) => RoundPhase::Playing,
        }
    }

    /// Misses weigh double; the result may be negative.
    pub const fn score(&self) -> i64 {
        self.success_count.0 as i64 - 2 * (self.miss_count.0 as i64)
    }

    pub fn remaining_fraction(&self, round_seconds: Seconds) -> f64 {
        if round_seconds == 0 {
            return 0.0;
        }
        (f64::from(self.seconds_remaining) / f64::from(round_seconds)).clamp(0.0, 1.0)
    }

    pub fn progress(&self, round_seconds: Seconds) -> f64 {
        1.0 - self.remaining_fraction(round_seconds)
    }
}

/// One play session: config, countdown, counters, the current board and the
/// sampler that refills it.
#[derive(Clone, Debug)]
pub struct Round<S = RandomBoardSampler> {
    config: RoundConfig,
    state: RoundState,
    board: Board,
    sampler: S,
}

impl Round<RandomBoardSampler> {
    pub fn with_seed(config: RoundConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomBoardSampler::new(seed))
    }

    /// Round with the default preset, which needs no validation.
    pub fn progressive(seed: u64) -> Self {
        Self::from_valid_config(RoundConfig::progressive(), RandomBoardSampler::new(seed))
    }
}

impl<S: BoardSampler> Round<S> {
    pub fn new(config: RoundConfig, sampler: S) -> Result<Self> {
        Ok(Self::from_valid_config(config.validate()?, sampler))
    }

    fn from_valid_config(config: RoundConfig, sampler: S) -> Self {
        Self {
            state: RoundState::new(config.round_seconds),
            board: Board::empty(config.size()),
            config,
            sampler,
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    pub fn score(&self) -> i64 {
        self.state.score()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress(self.config.round_seconds)
    }

    pub fn urgency(&self) -> TimerUrgency {
        TimerUrgency::from_remaining_fraction(
            self.state.remaining_fraction(self.config.round_seconds),
        )
    }

    pub fn start(&mut self) -> RoundOutcome {
        if !self.phase().is_idle() {
            log::debug!("start ignored in {:?}", self.phase());
            return RoundOutcome::NoChange;
        }

        self.state.is_playing = true;
        self.resample();
        log::debug!("round started ({}s)", self.config.round_seconds);
        RoundOutcome::Started
    }

    pub fn restart(&mut self) -> RoundOutcome {
        self.state = RoundState {
            is_playing: true,
            ..RoundState::new(self.config.round_seconds)
        };
        self.resample();
        log::debug!("round restarted ({}s)", self.config.round_seconds);
        RoundOutcome::Restarted
    }

    pub fn tick_countdown(&mut self) -> RoundOutcome {
        if !self.phase().is_playing() {
            return RoundOutcome::NoChange;
        }

        self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);
        if self.state.seconds_remaining == 0 {
            log::info!(
                "round finished: score {} ({} exorcised, {} missed)",
                self.score(),
                self.state.success_count(),
                self.state.miss_count()
            );
            RoundOutcome::Finished
        } else {
            RoundOutcome::Ticked
        }
    }

    pub fn tick_sampler(&mut self) -> RoundOutcome {
        if !self.phase().is_playing() {
            return RoundOutcome::NoChange;
        }

        self.resample();
        RoundOutcome::Resampled
    }

    /// Resolves the item at `index`. Empty, already resolved, or out of range
    /// cells are ignored, as is anything outside of play.
    pub fn click(&mut self, index: CellIndex) -> ClickOutcome {
        if !self.phase().is_playing() {
            log::trace!("click at {} ignored in {:?}", index, self.phase());
            return ClickOutcome::NoChange;
        }

        match self.board.resolve(index) {
            Some(ItemKind::Ghost) => {
                self.record_success();
                ClickOutcome::Exorcised
            }
            Some(ItemKind::Decoy) => {
                self.record_miss();
                ClickOutcome::Missed
            }
            None => ClickOutcome::NoChange,
        }
    }

    fn record_success(&mut self) {
        self.state.success_count += 1;
    }

    fn record_miss(&mut self) {
        self.state.miss_count += 1;
    }

    fn resample(&mut self) {
        let board = self.sampler.sample(&self.config, self.progress());
        if board.size() != self.config.size() {
            log::warn!(
                "Sampled board size mismatch, actual: {:?}, configured: {:?}",
                board.size(),
                self.config.size()
            );
            self.board = Board::empty(self.config.size());
            return;
        }
        self.board = board;
    }
}
