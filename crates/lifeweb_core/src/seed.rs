//! Random initial population.

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How live cells are scattered after the initial fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    /// Fill the leading cells, then do `height * width` random pairwise copies.
    /// Cheap but biased: the final live count drifts from the target.
    #[default]
    Shuffle,
    /// Exactly the target number of live cells, chosen uniformly.
    Uniform,
}

impl Grid {
    /// Seeds the grid so roughly `percentage`% of cells are alive.
    ///
    /// The target count is `percentage * height * width / 100` (truncated).
    pub fn random_fill<R: Rng + ?Sized>(
        &mut self,
        percentage: u8,
        strategy: FillStrategy,
        rng: &mut R,
    ) -> Result<()> {
        if percentage > 100 {
            return Err(LifeError::InvalidPercentage(percentage));
        }
        let total = self.cells.len();
        let target = usize::from(percentage) * total / 100;

        self.clear();
        match strategy {
            FillStrategy::Shuffle => {
                self.cells[..target].fill(true);
                for _ in 0..total {
                    let dst = rng.gen_range(0..total);
                    let src = rng.gen_range(0..total);
                    self.cells[dst] = self.cells[src];
                }
            }
            FillStrategy::Uniform => {
                for idx in index::sample(rng, total, target) {
                    self.cells[idx] = true;
                }
            }
        }

        tracing::debug!(
            percentage,
            ?strategy,
            target,
            population = self.population(),
            "Seeded grid"
        );
        Ok(())
    }
}
