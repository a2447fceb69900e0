//! Command-line front end for the crossword fill-in solver.
//!
//! Loads a rule file and a word list, searches each puzzle and prints the
//! filled boards with search statistics.
//!
//! # Usage
//!
//! ```sh
//! crossfill puzzles.txt --words words.txt
//! ```
//!
//! Pick the heuristics and the propagation, and print up to three solutions:
//!
//! ```sh
//! crossfill puzzles.txt --words words.txt --strategy mrv --propagation forward-check -n 3
//! ```
//!
//! Count every solution of every puzzle, in parallel:
//!
//! ```sh
//! crossfill puzzles.txt --words words.txt --count
//! ```
//!
//! Randomize the search; the seed is printed so the run can be replayed:
//!
//! ```sh
//! crossfill puzzles.txt --words words.txt --random --seed <HEX>
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the search.
//!
//! The exit status is 0 when every puzzle has a solution, 1 when some puzzle
//! has none and 2 when the input cannot be used.

use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::BufReader,
    num::NonZeroUsize,
    path::Path,
    process::ExitCode,
    sync::Arc,
};

use clap::Parser as _;
use crossfill_core::{SlotTopology, WordSource};
use crossfill_solver::SearchSeed;
use log::{info, warn};
use rayon::prelude::*;

use self::{
    args::Args,
    error::CliError,
    report::{PuzzleReport, print_report},
    search::SearchConfig,
};

mod args;
mod error;
mod report;
mod search;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every selected puzzle has a solution.
fn run(args: &Args) -> Result<bool, CliError> {
    let puzzles = load_puzzles(&args.rules, args.puzzle)?;
    let words = load_words(&args.words)?;
    info!(
        "loaded {} puzzle(s) from {} and {} word(s) from {}",
        puzzles.len(),
        args.rules.display(),
        words.len(),
        args.words.display()
    );

    for (index, topology) in &puzzles {
        let missing = missing_lengths(topology, &words);
        if !missing.is_empty() {
            warn!("puzzle {index}: no words of length {missing:?}, it has no solution");
        }
    }

    let seed = if args.random {
        let seed = match args.seed {
            Some(seed) => seed,
            None => SearchSeed::generate().map_err(|err| CliError::Entropy {
                reason: err.to_string(),
            })?,
        };
        println!("Seed:");
        println!("  {seed}");
        println!();
        Some(seed)
    } else {
        None
    };

    let config = SearchConfig {
        strategy: args.strategy,
        propagation: args.propagation.into(),
        seed,
        max_stack: args.max_stack,
        limit: args.solution_limit(),
    };

    if args.count {
        let reports = puzzles
            .par_iter()
            .map(|(index, topology)| config.count(*index, Arc::clone(topology), &words))
            .collect::<Result<Vec<_>, _>>()?;
        for report in &reports {
            print_report(report, config.limit);
        }
        return Ok(reports.iter().all(PuzzleReport::is_solved));
    }

    let mut all_solved = true;
    for (index, topology) in puzzles {
        let report = config.solve(index, topology, &words)?;
        print_report(&report, config.limit);
        all_solved &= report.is_solved();
    }
    Ok(all_solved)
}

fn load_puzzles(
    path: &Path,
    only: Option<NonZeroUsize>,
) -> Result<Vec<(usize, Arc<SlotTopology>)>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let puzzles = SlotTopology::parse_rules(&text).map_err(|source| CliError::Rules {
        path: path.to_owned(),
        source,
    })?;
    select_puzzles(path, puzzles, only)
}

/// Numbers the puzzles from 1 and keeps the requested one, if any.
fn select_puzzles(
    path: &Path,
    puzzles: Vec<SlotTopology>,
    only: Option<NonZeroUsize>,
) -> Result<Vec<(usize, Arc<SlotTopology>)>, CliError> {
    if puzzles.is_empty() {
        return Err(CliError::NoPuzzles {
            path: path.to_owned(),
        });
    }
    let count = puzzles.len();
    let numbered = puzzles
        .into_iter()
        .enumerate()
        .map(|(i, topology)| (i + 1, Arc::new(topology)));
    let Some(index) = only else {
        return Ok(numbered.collect());
    };
    let selected: Vec<_> = numbered.filter(|(i, _)| *i == index.get()).collect();
    if selected.is_empty() {
        return Err(CliError::NoSuchPuzzle {
            path: path.to_owned(),
            index: index.get(),
            count,
        });
    }
    Ok(selected)
}

/// Returns the slot lengths, ascending and deduplicated, for which `words`
/// has no candidate.
fn missing_lengths(topology: &SlotTopology, words: &WordSource) -> Vec<usize> {
    let known: BTreeSet<usize> = words.lengths().collect();
    topology
        .slots()
        .map(|(_, slot)| slot.length())
        .filter(|length| !known.contains(length))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn load_words(path: &Path) -> Result<WordSource, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    WordSource::from_reader(BufReader::new(file)).map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<SlotTopology> {
        SlotTopology::parse_rules("0 0 3 A\n\n0 0 3 A 1 -1 3 D\n").unwrap()
    }

    #[test]
    fn test_select_all_puzzles() {
        let selected = select_puzzles(Path::new("rules.txt"), rules(), None).unwrap();
        let numbers: Vec<_> = selected.iter().map(|(i, _)| *i).collect();
        assert_eq!(numbers, [1, 2]);
        assert_eq!(selected[1].1.len(), 2);
    }

    #[test]
    fn test_missing_lengths() {
        let topology: SlotTopology = "0 0 3 A 1 -1 4 D 0 2 5 A 0 4 5 A".parse().unwrap();
        let words: WordSource = ["cat", "bird"].into_iter().collect();
        assert_eq!(missing_lengths(&topology, &words), [5]);
        let words: WordSource = ["cat", "bird", "mouse"].into_iter().collect();
        assert!(missing_lengths(&topology, &words).is_empty());
    }

    #[test]
    fn test_select_one_puzzle() {
        let selected = select_puzzles(Path::new("rules.txt"), rules(), NonZeroUsize::new(2)).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0, 2);
    }

    #[test]
    fn test_select_missing_puzzle() {
        let err = select_puzzles(Path::new("rules.txt"), rules(), NonZeroUsize::new(3)).unwrap_err();
        assert_eq!(err.to_string(), "puzzle 3 requested, but rules.txt has only 2");
        let err = select_puzzles(Path::new("empty.txt"), vec![], None).unwrap_err();
        assert_eq!(err.to_string(), "empty.txt has no rules");
    }
}
