//! Generation stepper: computes one generation from another.

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Writes the generation following `source` into `target`.
///
/// Only `source` is read; every cell of `target` is overwritten. Updating a
/// single grid in place would corrupt neighbour counts halfway through the pass.
pub fn advance(source: &Grid, target: &mut Grid) -> Result<()> {
    if source.dimensions() != target.dimensions() {
        return Err(LifeError::mismatch(source.dimensions(), target.dimensions()));
    }
    let width = source.width();
    for (idx, cell) in target.cells.iter_mut().enumerate() {
        *cell = source.next_cell_state(idx % width, idx / width);
    }
    Ok(())
}
