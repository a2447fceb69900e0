use std::{io, path::PathBuf};

use crossfill_core::ParseRulesError;
use crossfill_solver::SearchError;

/// A failure that prevents the command from running to completion.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum CliError {
    #[display("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("{}: {source}", path.display())]
    Rules {
        path: PathBuf,
        source: ParseRulesError,
    },
    #[display("{} has no rules", path.display())]
    NoPuzzles { path: PathBuf },
    #[display("puzzle {index} requested, but {} has only {count}", path.display())]
    NoSuchPuzzle {
        path: PathBuf,
        index: usize,
        count: usize,
    },
    #[display("cannot draw a random seed: {reason}")]
    Entropy { reason: String },
    #[display("puzzle {puzzle}: {source}")]
    Search { puzzle: usize, source: SearchError },
}
