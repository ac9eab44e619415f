use std::collections::hash_map::Iter;
use std::collections::HashMap;

use serde::Serialize;

use crate::types::Month;

/// Per-month totals produced by one aggregation pass.
///
/// Only months with at least one matching transaction have an entry.
/// Iteration order is unspecified; use [`MonthlySummary::sorted`] for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlySummary(HashMap<Month, f64>);

impl MonthlySummary {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub(crate) fn add(&mut self, month: Month, amount: f64) {
        *self.0.entry(month).or_insert(0.0) += amount;
    }

    pub fn get(&self, month: Month) -> Option<f64> {
        self.0.get(&month).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Month, f64> {
        self.0.iter()
    }

    /// Entries ordered by month number.
    pub fn sorted(&self) -> Vec<(Month, f64)> {
        let mut entries: Vec<(Month, f64)> = self.0.iter().map(|(month, total)| (*month, *total)).collect();
        entries.sort_by_key(|(month, _)| *month);
        entries
    }

    /// Sum over all months, added in month order so the result is reproducible.
    pub fn total(&self) -> f64 {
        self.sorted().into_iter().map(|(_, total)| total).sum()
    }
}

impl From<MonthlySummary> for HashMap<Month, f64> {
    fn from(summary: MonthlySummary) -> Self {
        summary.0
    }
}
