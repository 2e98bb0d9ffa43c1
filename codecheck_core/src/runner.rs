//! # Check Registry and Runner
//!
//! An ordered list of `(label, check function)` entries. Registration order is
//! evaluation order and decides the report row ids; it never changes a
//! numeric outcome, since checks do not see each other's results.
//!
//! Every registered check always runs. A failing clause does not stop the
//! run, so the report shows the full picture.
//!
//! ## Example
//!
//! ```rust
//! use codecheck_core::clauses::Clause;
//! use codecheck_core::runner::CheckRegistry;
//!
//! // Default EN 1993-1-1 run plus the bending check
//! let registry = CheckRegistry::default().with_clause(Clause::Eq6_12);
//! assert_eq!(registry.len(), 7);
//! assert_eq!(registry.labels().last().map(String::as_str), Some("EQ (6.12)"));
//! ```

use std::num::NonZeroUsize;

use tracing::{debug, info};

use crate::checks::CheckFn;
use crate::clauses::{Clause, DEFAULT_CLAUSES};
use crate::errors::{CalcError, CalcResult};
use crate::member::MemberState;
use crate::report::CheckReport;

/// One registered check.
#[derive(Debug, Clone)]
pub struct CheckEntry {
    /// Clause label written to the report
    pub label: String,
    /// Function evaluating the clause
    pub check: CheckFn,
}

impl CheckEntry {
    pub fn new(label: impl Into<String>, check: CheckFn) -> Self {
        CheckEntry {
            label: label.into(),
            check,
        }
    }
}

impl From<Clause> for CheckEntry {
    fn from(clause: Clause) -> Self {
        CheckEntry::new(clause.label(), clause.check_fn())
    }
}

/// Ordered set of checks to evaluate against a member.
#[derive(Debug, Clone)]
pub struct CheckRegistry {
    entries: Vec<CheckEntry>,
}

impl Default for CheckRegistry {
    /// The EN 1993-1-1 default run: EQ 6.1, 6.2, 6.5, 6.9, 6.17, 6.19.
    fn default() -> Self {
        CheckRegistry::eurocode()
    }
}

impl CheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        CheckRegistry { entries: Vec::new() }
    }

    /// The default clause list
    pub fn eurocode() -> Self {
        CheckRegistry::from_clauses(DEFAULT_CLAUSES)
    }

    pub fn from_clauses(clauses: &[Clause]) -> Self {
        CheckRegistry {
            entries: clauses.iter().map(|clause| CheckEntry::from(*clause)).collect(),
        }
    }

    /// Build from clause labels such as `"EQ (6.9)"` or `"6.9"`.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> CalcResult<Self> {
        let clauses = labels
            .iter()
            .map(|label| label.as_ref().parse::<Clause>())
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(CheckRegistry::from_clauses(&clauses))
    }

    /// Append a built-in clause
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.entries.push(CheckEntry::from(clause));
        self
    }

    /// Append a custom check
    pub fn with_check(mut self, label: impl Into<String>, check: CheckFn) -> Self {
        self.entries.push(CheckEntry::new(label, check));
        self
    }

    pub fn push(&mut self, entry: CheckEntry) {
        self.entries.push(entry);
    }

    /// Insert at a 0-based position, shifting later entries back.
    pub fn insert(&mut self, index: usize, entry: CheckEntry) -> CalcResult<()> {
        if index > self.entries.len() {
            return Err(CalcError::invalid_input(
                "index",
                index.to_string(),
                format!("Registry holds {} entries", self.entries.len()),
            ));
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Remove the first entry with this label
    pub fn remove(&mut self, label: &str) -> Option<CheckEntry> {
        let index = self.entries.iter().position(|entry| entry.label == label)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|entry| entry.label == label)
    }

    pub fn entries(&self) -> &[CheckEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate every registered check against one member.
    pub fn run(&self, member: &MemberState) -> CheckReport {
        let mut report = CheckReport::new();
        for entry in &self.entries {
            let result = (entry.check)(member);
            let row = report.push(entry.label.as_str(), result);
            debug!(
                id = row.id,
                clause = %row.clause,
                utilization_ratio = row.utilization_ratio,
                is_satisfied = row.is_satisfied,
                "check evaluated"
            );
        }

        if let Some(governing) = report.governing() {
            debug!(
                clause = %governing.clause,
                utilization_ratio = governing.utilization_ratio,
                passes = report.passes(),
                "run complete"
            );
        }
        report
    }

    /// Evaluate each member in turn; output order follows input order.
    pub fn run_batch(&self, members: &[MemberState]) -> Vec<CheckReport> {
        members.iter().map(|member| self.run(member)).collect()
    }

    /// Evaluate a batch on up to `workers` scoped threads.
    ///
    /// The batch is split into contiguous chunks, so the reports match
    /// [`CheckRegistry::run_batch`] in content and order. A check that panics
    /// on a worker surfaces as [`CalcError::Internal`].
    pub fn run_batch_parallel(&self, members: &[MemberState], workers: NonZeroUsize) -> CalcResult<Vec<CheckReport>> {
        if members.is_empty() {
            return Ok(Vec::new());
        }

        let chunk_size = members.len().div_ceil(workers.get());
        info!(
            members = members.len(),
            workers = workers.get(),
            chunk_size,
            "evaluating batch"
        );

        let reports = std::thread::scope(|scope| {
            let handles: Vec<_> = members
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || self.run_batch(chunk)))
                .collect();

            // Join every worker before inspecting results; the scope panics on any left unjoined
            let joined: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();

            let mut reports = Vec::with_capacity(members.len());
            for chunk in joined {
                let chunk = chunk.map_err(|panic| CalcError::internal(panic_message(panic.as_ref())))?;
                reports.extend(chunk);
            }
            Ok::<_, CalcError>(reports)
        })?;

        info!(reports = reports.len(), "batch complete");
        Ok(reports)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    format!("check panicked on a batch worker: {}", detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckResult;
    use crate::member::test_member;

    fn always_fails(_: &MemberState) -> CheckResult {
        CheckResult::from_ratio(5.0)
    }

    fn panics_on_torsion(member: &MemberState) -> CheckResult {
        if member.t_ed > 1.0 {
            panic!("torsion out of range");
        }
        CheckResult::from_ratio(0.0)
    }

    fn half_torsion(member: &MemberState) -> CheckResult {
        CheckResult::from_ratio(0.5 * member.t_ed / member.t_rd)
    }

    #[test]
    fn test_default_registry_order() {
        let labels = CheckRegistry::default().labels();
        assert_eq!(
            labels,
            vec!["EQ (6.1)", "EQ (6.2)", "EQ (6.5)", "EQ (6.9)", "EQ (6.17)", "EQ (6.19)"]
        );
    }

    #[test]
    fn test_run_produces_one_row_per_check() {
        let report = CheckRegistry::default().run(&test_member());
        assert_eq!(report.len(), 6);
        for (index, row) in report.iter().enumerate() {
            assert_eq!(row.id, index + 1);
        }
        assert_eq!(report.get(4).unwrap().clause, "EQ (6.9)");
    }

    #[test]
    fn test_failing_check_does_not_short_circuit() {
        let registry = CheckRegistry::new()
            .with_check("always fails", always_fails)
            .with_clause(Clause::Eq6_19);
        let report = registry.run(&test_member());
        assert_eq!(report.len(), 2);
        assert!(!report.get(1).unwrap().is_satisfied);
        assert!(report.get(2).unwrap().is_satisfied);
    }

    #[test]
    fn test_order_changes_ids_not_values() {
        let member = test_member();
        let forward = CheckRegistry::from_clauses(&[Clause::Eq6_5, Clause::Eq6_17]).run(&member);
        let reversed = CheckRegistry::from_clauses(&[Clause::Eq6_17, Clause::Eq6_5]).run(&member);

        assert_eq!(forward.get(1).unwrap().utilization_ratio, reversed.get(2).unwrap().utilization_ratio);
        assert_eq!(forward.get(2).unwrap().utilization_ratio, reversed.get(1).unwrap().utilization_ratio);
    }

    #[test]
    fn test_custom_check_and_removal() {
        let mut registry = CheckRegistry::default().with_check("half torsion", half_torsion);
        assert!(registry.contains("half torsion"));

        let removed = registry.remove("EQ (6.2)").unwrap();
        assert_eq!(removed.label, "EQ (6.2)");
        assert!(registry.remove("EQ (6.2)").is_none());
        assert_eq!(registry.len(), 6);

        let report = registry.run(&test_member());
        let last = report.get(6).unwrap();
        assert_eq!(last.clause, "half torsion");
        assert!((last.utilization_ratio - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_insert_bounds() {
        let mut registry = CheckRegistry::default();
        registry.insert(0, CheckEntry::from(Clause::Eq6_12)).unwrap();
        assert_eq!(registry.labels()[0], "EQ (6.12)");
        assert!(registry.insert(99, CheckEntry::from(Clause::Eq6_12)).is_err());
    }

    #[test]
    fn test_from_labels() {
        let registry = CheckRegistry::from_labels(&["EQ (6.17)", "6.1"]).unwrap();
        assert_eq!(registry.labels(), vec!["EQ (6.17)", "EQ (6.1)"]);

        let err = CheckRegistry::from_labels(&["EQ (6.1)", "EQ (7.1)"]).unwrap_err();
        assert_eq!(err, CalcError::unknown_clause("EQ (7.1)"));
    }

    #[test]
    fn test_empty_registry_runs_empty_report() {
        let report = CheckRegistry::new().run(&test_member());
        assert!(report.is_empty());
        assert!(report.governing().is_none());
    }

    #[test]
    fn test_batch_matches_single_evaluation() {
        let registry = CheckRegistry::default().with_clause(Clause::Eq6_12);
        let members: Vec<MemberState> = (0..7)
            .map(|i| MemberState {
                n_ed: 0.2 * i as f64,
                v_ed: 30.0 * i as f64,
                ..test_member()
            })
            .collect();

        let batch = registry.run_batch(&members);
        assert_eq!(batch.len(), members.len());
        for (member, report) in members.iter().zip(&batch) {
            assert_eq!(*report, registry.run(member));
        }
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let registry = CheckRegistry::default();
        let members: Vec<MemberState> = (0..23)
            .map(|i| MemberState {
                sigma_x_ed: 15.0 * i as f64,
                t_ed: 0.1 * i as f64,
                ..test_member()
            })
            .collect();

        let sequential = registry.run_batch(&members);
        for workers in [1, 2, 4, 64] {
            let parallel = registry
                .run_batch_parallel(&members, NonZeroUsize::new(workers).unwrap())
                .unwrap();
            assert_eq!(parallel, sequential, "workers = {}", workers);
        }
    }

    #[test]
    fn test_parallel_empty_batch() {
        let reports = CheckRegistry::default()
            .run_batch_parallel(&[], NonZeroUsize::new(4).unwrap())
            .unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_panicking_check_becomes_internal_error() {
        let registry = CheckRegistry::new().with_check("fragile", panics_on_torsion);
        let members = vec![
            test_member(),
            MemberState { t_ed: 5.0, ..test_member() },
            test_member(),
        ];

        for workers in [1, 3] {
            let err = registry
                .run_batch_parallel(&members, NonZeroUsize::new(workers).unwrap())
                .unwrap_err();
            assert_eq!(err.error_code(), "INTERNAL_ERROR");
            assert!(err.to_string().contains("torsion out of range"), "{}", err);
        }
    }
}
