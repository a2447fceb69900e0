use crossfill_core::Board;
use crossfill_solver::SearchStats;

/// What one search produced.
#[derive(Debug)]
pub(crate) struct PuzzleReport {
    pub(crate) puzzle: usize,
    pub(crate) strategy: &'static str,
    pub(crate) boards: Vec<Board>,
    pub(crate) solutions: usize,
    pub(crate) stats: SearchStats,
}

impl PuzzleReport {
    pub(crate) fn is_solved(&self) -> bool {
        self.solutions > 0
    }
}

pub(crate) fn print_report(report: &PuzzleReport, limit: Option<usize>) {
    println!("Puzzle {}:", report.puzzle);
    if report.boards.is_empty() && report.is_solved() {
        let capped = limit.is_some_and(|limit| report.solutions >= limit);
        let suffix = if capped { " (limit reached)" } else { "" };
        println!("  Solutions: {}{suffix}", report.solutions);
    } else if !report.is_solved() {
        println!("  No solution.");
    }
    for (i, board) in report.boards.iter().enumerate() {
        println!("  Solution {}:", i + 1);
        for row in board.to_string().lines() {
            println!("    {row}");
        }
    }
    print_stats(report.strategy, &report.stats);
    println!();
}

fn print_stats(strategy: &str, stats: &SearchStats) {
    println!("  Stats ({strategy}):");
    println!("    steps: {}", stats.steps());
    println!("    solutions: {}", stats.solutions());
    println!("    failures: {}", stats.failures());
    println!("    max stack: {}", stats.max_stack_size());
}
