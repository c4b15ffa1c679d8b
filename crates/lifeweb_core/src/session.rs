//! Session state: two grid buffers that trade roles every generation.

use crate::error::Result;
use crate::grid::Grid;
use crate::seed::FillStrategy;
use crate::stepper;
use rand::Rng;

/// Holds the current generation and a spare buffer to write the next one into.
///
/// Not synchronised. Callers sharing a session across tasks must wrap it in a
/// mutex so only one `advance_generation` runs at a time.
#[derive(Debug, Clone)]
pub struct Session {
    buffers: [Grid; 2],
    current: usize,
    generation: u64,
}

impl Session {
    /// Builds a session with the default fill strategy.
    pub fn new<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        seed_percentage: u8,
        rng: &mut R,
    ) -> Result<Self> {
        Self::with_fill(height, width, seed_percentage, FillStrategy::default(), rng)
    }

    pub fn with_fill<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        seed_percentage: u8,
        fill: FillStrategy,
        rng: &mut R,
    ) -> Result<Self> {
        let mut first = Grid::new(height, width)?;
        first.random_fill(seed_percentage, fill, rng)?;
        let second = Grid::new(height, width)?;
        Ok(Self::from_grid_pair(first, second))
    }

    /// Starts a session from an explicit first generation.
    pub fn from_grid(initial: Grid) -> Self {
        let spare = initial.clone();
        Self::from_grid_pair(initial, spare)
    }

    fn from_grid_pair(current: Grid, spare: Grid) -> Self {
        tracing::info!(
            height = current.height(),
            width = current.width(),
            population = current.population(),
            "Session started"
        );
        Self {
            buffers: [current, spare],
            current: 0,
            generation: 0,
        }
    }

    /// Computes the next generation and makes it current.
    ///
    /// The previous generation's buffer becomes the write target of the next call.
    pub fn advance_generation(&mut self) -> Result<&Grid> {
        let [first, second] = &mut self.buffers;
        let (source, target) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        stepper::advance(source, target)?;

        self.current ^= 1;
        self.generation += 1;

        let grid = &self.buffers[self.current];
        tracing::debug!(
            generation = self.generation,
            population = grid.population(),
            "Advanced generation"
        );
        Ok(grid)
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// Generations computed since the session started.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `(height, width)` shared by both buffers.
    pub fn dimensions(&self) -> (usize, usize) {
        self.current().dimensions()
    }

    /// Index of the buffer currently holding the live generation (0 or 1).
    pub fn current_index(&self) -> usize {
        self.current
    }
}
