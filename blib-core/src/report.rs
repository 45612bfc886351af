use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accumulated outcome of one export or import batch
///
/// Items skipped under the `Ignore` policy appear in no count; for
/// everything actually considered, succeeded + failed + incompatible adds up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Batch session id, for correlating log lines
    pub session_id: Uuid,
    /// When the batch started
    pub started_at: DateTime<Utc>,
    pub succeeded: usize,
    pub failed: usize,
    /// Files rejected by the codec's type check (imports only)
    pub incompatible: usize,
    /// Items skipped under the ignore policy (exports only)
    pub skipped: usize,
    /// Names of items that failed
    pub failed_items: Vec<String>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            succeeded: 0,
            failed: 0,
            incompatible: 0,
            skipped: 0,
            failed_items: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, name: impl Into<String>) {
        self.failed += 1;
        self.failed_items.push(name.into());
    }

    pub fn record_incompatible(&mut self) {
        self.incompatible += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Items the batch actually considered (attempted or type-rejected)
    pub fn considered(&self) -> usize {
        self.succeeded + self.failed + self.incompatible
    }

    /// Attempted (de)serializations, the "of M" in summary lines
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Summary line for an export batch
    pub fn export_summary(&self) -> String {
        format!(
            "{} of {} successful exports.",
            self.succeeded,
            self.attempted()
        )
    }

    /// Summary line for an import batch; names the incompatible count only
    /// when there is one
    pub fn import_summary(&self, kind_name: &str) -> String {
        if self.incompatible == 0 {
            format!(
                "{} of {} successful imports.",
                self.succeeded,
                self.attempted()
            )
        } else {
            format!(
                "{} of {} successful imports. {} files were not of type '{}'.",
                self.succeeded,
                self.attempted(),
                self.incompatible,
                kind_name
            )
        }
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counts_accumulate() {
        let mut report = BatchReport::new();
        report.record_success();
        report.record_success();
        report.record_failure("wood");
        report.record_incompatible();
        report.record_skipped();

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.incompatible, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.considered(), 4);
        assert_eq!(report.failed_items, vec!["wood".to_string()]);
    }

    #[test]
    fn import_summary_mentions_incompatible_files_only_when_present() {
        let mut report = BatchReport::new();
        report.record_success();
        assert_eq!(report.import_summary("Cycles Material"), "1 of 1 successful imports.");

        report.record_incompatible();
        assert_eq!(
            report.import_summary("Cycles Material"),
            "1 of 1 successful imports. 1 files were not of type 'Cycles Material'."
        );
    }

    proptest! {
        #[test]
        fn considered_always_balances(
            outcomes in proptest::collection::vec(0u8..3, 0..64)
        ) {
            let mut report = BatchReport::new();
            for outcome in &outcomes {
                match outcome {
                    0 => report.record_success(),
                    1 => report.record_failure("item"),
                    _ => report.record_incompatible(),
                }
            }

            prop_assert_eq!(report.considered(), outcomes.len());
            prop_assert_eq!(report.failed_items.len(), report.failed);
        }
    }
}
