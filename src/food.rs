use rand::Rng;
use thiserror::Error;

use crate::grid::{Grid, Position};

/// Random draws attempted per grid cell before falling back to enumeration.
const DRAW_CAP_PER_CELL: usize = 4;

/// No free cell remains for food.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on a {tile_count}x{tile_count} grid")]
pub struct GridFull {
    pub tile_count: u16,
}

/// Picks a uniformly random unoccupied cell.
///
/// Draws each coordinate independently uniform in `[0, tile_count)` and
/// redraws while `occupied` holds. Draws are capped; past the cap the free
/// cells are enumerated so a nearly full board still terminates. Returns
/// [`GridFull`] only when the board has no free cell at all.
pub fn place<R, F>(rng: &mut R, grid: Grid, occupied: F) -> Result<Position, GridFull>
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    let upper = i32::from(grid.tile_count());

    for _ in 0..grid.total_cells().saturating_mul(DRAW_CAP_PER_CELL) {
        let candidate = Position {
            x: rng.gen_range(0..upper),
            y: rng.gen_range(0..upper),
        };
        if !occupied(candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Position> = (0..upper)
        .flat_map(|y| (0..upper).map(move |x| Position { x, y }))
        .filter(|position| !occupied(*position))
        .collect();

    if free.is_empty() {
        return Err(GridFull {
            tile_count: grid.tile_count(),
        });
    }

    Ok(free[rng.gen_range(0..free.len())])
}
