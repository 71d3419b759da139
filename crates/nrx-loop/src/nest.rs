use nrx_core::errors::{ErrorInfo, NrxError};
use tracing::trace;

use crate::level::LoopLevel;

/// Rendered loop nest: the text to place before and after the loop body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopText {
    /// Opening lines, outermost loop first.
    pub header: String,
    /// Closing lines, innermost loop first.
    pub footer: String,
}

/// Ordered loop levels, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopNest {
    levels: Vec<LoopLevel>,
}

impl LoopNest {
    /// Wraps the given levels, outermost first.
    pub fn new(levels: Vec<LoopLevel>) -> Self {
        Self { levels }
    }

    /// Builds a nest from five parallel columns; an empty pragma entry means
    /// no annotation for that level.
    ///
    /// Every column must have the same length.
    pub fn from_columns<S: AsRef<str>>(
        index: &[S],
        lower: &[S],
        upper: &[S],
        increment: &[S],
        pragma: &[S],
    ) -> Result<Self, NrxError> {
        let lengths = [
            ("index", index.len()),
            ("lower", lower.len()),
            ("upper", upper.len()),
            ("increment", increment.len()),
            ("pragma", pragma.len()),
        ];
        if lengths.iter().any(|(_, len)| *len != index.len()) {
            let info = lengths.iter().fold(
                ErrorInfo::new("loop-columns", "loop columns must all have the same length")
                    .with_hint("supply one entry per loop level in every column"),
                |info, (name, len)| info.with_context(*name, len),
            );
            return Err(NrxError::Config(info));
        }
        let levels = (0..index.len())
            .map(|level| {
                LoopLevel::new(index[level].as_ref(), lower[level].as_ref(), upper[level].as_ref())
                    .step(increment[level].as_ref())
                    .parallel(pragma[level].as_ref())
            })
            .collect();
        Ok(Self { levels })
    }

    /// The levels, outermost first.
    pub fn levels(&self) -> &[LoopLevel] {
        &self.levels
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Renders the nest in one pass.
    ///
    /// Level `i` opens at `i` indentation units; the footer closes the levels
    /// in reverse so header loop line `i` pairs with footer line `N - 1 - i`.
    pub fn render(&self) -> LoopText {
        let header: String = self
            .levels
            .iter()
            .enumerate()
            .map(|(depth, level)| level.opening(depth))
            .collect();
        let footer: String = self
            .levels
            .iter()
            .enumerate()
            .rev()
            .map(|(depth, level)| level.closing(depth))
            .collect();
        trace!(depth = self.levels.len(), "rendered loop nest");
        LoopText { header, footer }
    }
}

/// Renders a single loop at `depth` levels of indentation.
pub fn loop_1d(level: &LoopLevel, depth: usize) -> LoopText {
    LoopText {
        header: level.opening(depth),
        footer: level.closing(depth),
    }
}

/// Validates the columns and renders the nest; nothing is produced on error.
pub fn emit<S: AsRef<str>>(
    index: &[S],
    lower: &[S],
    upper: &[S],
    increment: &[S],
    pragma: &[S],
) -> Result<LoopText, NrxError> {
    LoopNest::from_columns(index, lower, upper, increment, pragma).map(|nest| nest.render())
}
