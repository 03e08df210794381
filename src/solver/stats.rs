use std::collections::HashMap;

use prettytable::{Cell, Row, Table};

use crate::solver::{clue::Clue, engine::ClueId};

/// Counters for a single clue, accumulated across all passes.
#[derive(Debug, Clone, Default)]
pub struct PerClueStats {
    /// Times the clue was applied.
    pub applications: u64,
    /// Applications that changed at least one domain.
    pub propagations: u64,
    pub time_spent_micros: u64,
}

/// Aggregate statistics for one solve run.
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    /// Full passes over the script, including the final quiescent one.
    pub passes: u64,
    /// Total clue applications across all passes.
    pub applications: u64,
    pub clue_stats: HashMap<ClueId, PerClueStats>,
}

impl SolveStats {
    pub(crate) fn record(&mut self, clue_id: ClueId, changed: bool, micros: u64) {
        self.applications += 1;
        let entry = self.clue_stats.entry(clue_id).or_default();
        entry.applications += 1;
        if changed {
            entry.propagations += 1;
        }
        entry.time_spent_micros += micros;
    }
}

pub fn render_stats_table(stats: &SolveStats, clues: &[Box<dyn Clue>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Clue Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Applications"),
        Cell::new("Propagations"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ClueId, &PerClueStats)> = stats.clue_stats.iter().collect();

    sorted_stats.sort_by_key(|a| a.1.time_spent_micros);

    for (clue_id, clue_stats) in sorted_stats {
        let descriptor = clues[*clue_id].descriptor();
        let avg_time = if clue_stats.applications > 0 {
            clue_stats.time_spent_micros as f64 / clue_stats.applications as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&clue_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&clue_stats.applications.to_string()),
            Cell::new(&clue_stats.propagations.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                clue_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
