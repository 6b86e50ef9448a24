// error module
mod error;
// grid module
mod grid;
// visited module
mod visited;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the board modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GridError;
pub use grid::{fold_char, Cell, Grid, NEIGHBOR_OFFSETS};
pub use visited::VisitedMask;
