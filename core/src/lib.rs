#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use round::*;
pub use sampler::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod round;
mod sampler;
mod tile;
mod types;

/// Tunables for one round: duration, grid shape and how items are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub round_seconds: Seconds,
    pub base_item_count: CellCount,
    pub max_extra_items: CellCount,
    pub obake_rate: f64,
    pub grid_width: Coord,
    pub grid_height: Coord,
    pub sample_interval_ms: u32,
}

impl RoundConfig {
    pub const WIDTH: Coord = 5;
    pub const HEIGHT: Coord = 5;
    pub const BASE_COUNT: CellCount = 2;
    pub const OBAKE_RATE: f64 = 0.8;
    pub const SAMPLE_INTERVAL_MS: u32 = 1000;

    /// 20 second rounds where more items show up as the clock runs down.
    pub const fn progressive() -> Self {
        Self {
            round_seconds: 20,
            base_item_count: Self::BASE_COUNT,
            max_extra_items: 3,
            obake_rate: Self::OBAKE_RATE,
            grid_width: Self::WIDTH,
            grid_height: Self::HEIGHT,
            sample_interval_ms: Self::SAMPLE_INTERVAL_MS,
        }
    }

    /// Short 5 second rounds with a constant number of draws per tick.
    pub const fn fixed() -> Self {
        Self {
            round_seconds: 5,
            base_item_count: Self::BASE_COUNT,
            max_extra_items: 0,
            obake_rate: Self::OBAKE_RATE,
            grid_width: Self::WIDTH,
            grid_height: Self::HEIGHT,
            sample_interval_ms: Self::SAMPLE_INTERVAL_MS,
        }
    }

    pub fn validate(self) -> Result<Self> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidGridSize);
        }
        if self.round_seconds == 0 {
            return Err(GameError::InvalidRoundSeconds);
        }
        if !(0.0..=1.0).contains(&self.obake_rate) {
            return Err(GameError::InvalidObakeRate);
        }
        if self.sample_interval_ms == 0 {
            return Err(GameError::InvalidSampleInterval);
        }
        Ok(self)
    }

    pub const fn size(&self) -> Coord2 {
        (self.grid_width, self.grid_height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_width, self.grid_height)
    }

    /// Number of placement draws for a tick at `progress` through the round.
    pub fn draw_count(&self, progress: f64) -> CellCount {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        // non-negative, so truncation floors
        let extra = (progress * f64::from(self.max_extra_items)) as CellCount;
        self.base_item_count.saturating_add(extra)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::progressive()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoundOutcome {
    NoChange,
    Started,
    Restarted,
    Ticked,
    Finished,
    Resampled,
}

impl RoundOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    NoChange,
    Exorcised,
    Missed,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Exorcised => true,
            Missed => true,
        }
    }
}

/// Countdown color bands, by remaining fraction of the round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerUrgency {
    Normal,
    Warning,
    Critical,
}

impl TimerUrgency {
    pub fn from_remaining_fraction(fraction: f64) -> Self {
        if fraction < 0.3 {
            Self::Critical
        } else if fraction < 0.5 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert_eq!(RoundConfig::progressive().validate(), Ok(RoundConfig::progressive()));
        assert_eq!(RoundConfig::fixed().validate(), Ok(RoundConfig::fixed()));
        assert_eq!(RoundConfig::default(), RoundConfig::progressive());
        assert_eq!(RoundConfig::default().total_cells(), 25);
    }

    #[test]
    fn validate_rejects_each_bad_field() {
        let base = RoundConfig::fixed();

        let zero_width = RoundConfig { grid_width: 0, ..base };
        assert_eq!(zero_width.validate(), Err(GameError::InvalidGridSize));

        let zero_height = RoundConfig { grid_height: 0, ..base };
        assert_eq!(zero_height.validate(), Err(GameError::InvalidGridSize));

        let zero_seconds = RoundConfig { round_seconds: 0, ..base };
        assert_eq!(zero_seconds.validate(), Err(GameError::InvalidRoundSeconds));

        let rate_too_high = RoundConfig { obake_rate: 1.5, ..base };
        assert_eq!(rate_too_high.validate(), Err(GameError::InvalidObakeRate));

        let rate_nan = RoundConfig { obake_rate: f64::NAN, ..base };
        assert_eq!(rate_nan.validate(), Err(GameError::InvalidObakeRate));

        let zero_interval = RoundConfig { sample_interval_ms: 0, ..base };
        assert_eq!(zero_interval.validate(), Err(GameError::InvalidSampleInterval));
    }

    #[test]
    fn draw_count_scales_with_progress() {
        let progressive = RoundConfig::progressive();
        assert_eq!(progressive.draw_count(0.0), 2);
        assert_eq!(progressive.draw_count(0.34), 3);
        assert_eq!(progressive.draw_count(0.95), 4);
        assert_eq!(progressive.draw_count(1.0), 5);
        assert_eq!(progressive.draw_count(7.0), 5);
        assert_eq!(progressive.draw_count(-1.0), 2);
        assert_eq!(progressive.draw_count(f64::NAN), 2);

        let fixed = RoundConfig::fixed();
        assert_eq!(fixed.draw_count(0.0), 2);
        assert_eq!(fixed.draw_count(1.0), 2);
    }

    #[test]
    fn urgency_bands() {
        assert_eq!(TimerUrgency::from_remaining_fraction(1.0), TimerUrgency::Normal);
        assert_eq!(TimerUrgency::from_remaining_fraction(0.5), TimerUrgency::Normal);
        assert_eq!(TimerUrgency::from_remaining_fraction(0.45), TimerUrgency::Warning);
        assert_eq!(TimerUrgency::from_remaining_fraction(0.3), TimerUrgency::Warning);
        assert_eq!(TimerUrgency::from_remaining_fraction(0.25), TimerUrgency::Critical);
        assert_eq!(TimerUrgency::from_remaining_fraction(0.0), TimerUrgency::Critical);
    }
}
