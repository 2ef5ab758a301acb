use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Draws items into uniformly random cells, later draws overwriting earlier ones.
#[derive(Clone, Debug)]
pub struct RandomBoardSampler {
    rng: SmallRng,
}

impl RandomBoardSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn draw_kind(&mut self, obake_rate: f64) -> ItemKind {
        let obake_rate = if obake_rate.is_nan() {
            0.0
        } else {
            obake_rate.clamp(0.0, 1.0)
        };
        if self.rng.random_bool(obake_rate) {
            ItemKind::Ghost
        } else {
            ItemKind::Decoy
        }
    }
}

impl BoardSampler for RandomBoardSampler {
    fn sample(&mut self, config: &RoundConfig, progress: f64) -> Board {
        let mut board = Board::empty(config.size());
        let total_cells = config.total_cells();
        if total_cells == 0 {
            log::warn!("Cannot sample an empty grid");
            return board;
        }

        let draws = config.draw_count(progress);
        for _ in 0..draws {
            let index: CellIndex = self.rng.random_range(0..total_cells);
            let kind = self.draw_kind(config.obake_rate);
            if let Err(err) = board.place(index, kind) {
                log::warn!("Dropped draw at {}: {}", index, err);
            }
        }

        log::trace!(
            "sampled {} draws into {} items (progress {:.2})",
            draws,
            board.item_count(),
            progress
        );
        board
    }
}
