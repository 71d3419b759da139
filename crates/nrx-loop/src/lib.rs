#![deny(missing_docs)]
#![doc = "Exact-text emission of nested C `for` loops with optional per-level annotations."]

mod columns;
mod level;
mod nest;

pub use columns::LoopColumns;
pub use level::{LoopLevel, INDENT_UNIT};
pub use nest::{emit, loop_1d, LoopNest, LoopText};
