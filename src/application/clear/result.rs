//! Clear result types

use crate::domain::value_objects::ClearOutcome;

/// All outcomes of one clear request, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearSummary {
    pub outcomes: Vec<ClearOutcome>,
}

impl ClearSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outcome
    pub fn push(&mut self, outcome: ClearOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Total entries removed across all regions
    pub fn removed_total(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(ClearOutcome::removed_count)
            .sum()
    }

    /// Outcomes that were not found or failed
    pub fn failures(&self) -> impl Iterator<Item = &ClearOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Check if every region was cleared (or previewed)
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_ignore_failures_and_previews() {
        let mut summary = ClearSummary::new();
        summary.push(ClearOutcome::Removed {
            region: "a".to_string(),
            count: 3,
        });
        summary.push(ClearOutcome::WouldRemove {
            region: "b".to_string(),
            count: 10,
        });
        summary.push(ClearOutcome::NotFound {
            region: "c".to_string(),
        });

        assert_eq!(summary.removed_total(), 3);
        assert_eq!(summary.failures().count(), 1);
        assert!(!summary.is_success());
    }

    #[test]
    fn empty_summary_is_success() {
        assert!(ClearSummary::new().is_success());
    }
}
