//! # Check Report
//!
//! The ordered outcome of one run: one row per registered check, ids `1..=N`
//! in registration order. Rows are never reordered; [`CheckReport::sorted`]
//! returns a borrowed view instead.
//!
//! ## Example
//!
//! ```rust
//! use codecheck_core::checks::CheckResult;
//! use codecheck_core::report::{CheckReport, ReportSort};
//!
//! let mut report = CheckReport::new();
//! report.push("EQ (6.1)", CheckResult::from_ratio(0.42));
//! report.push("EQ (6.17)", CheckResult::from_ratio(1.30));
//!
//! let governing = report.governing().unwrap();
//! assert_eq!(governing.id, 2);
//! assert!(!report.passes());
//!
//! println!("{}", report.render_table(ReportSort::Utilization));
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "rows": [
//!     { "id": 1, "clause": "EQ (6.1)", "utilization_ratio": 0.42, "is_satisfied": true },
//!     { "id": 2, "clause": "EQ (6.17)", "utilization_ratio": 1.3, "is_satisfied": false }
//!   ]
//! }
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::errors::CalcError;

/// One evaluated clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRow {
    /// 1-based position in registration order
    pub id: usize,
    /// Clause label, e.g. `EQ (6.9)`
    pub clause: String,
    pub utilization_ratio: f64,
    pub is_satisfied: bool,
}

impl CheckRow {
    /// Verdict column text
    pub fn verdict(&self) -> &'static str {
        if self.is_satisfied { "OK" } else { "FAIL" }
    }
}

/// Ordering for listings and tables. Storage order is always by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSort {
    /// Registration order
    #[default]
    Id,
    /// Descending utilization ratio, ties in id order
    Utilization,
}

impl FromStr for ReportSort {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(ReportSort::Id),
            "utilization" | "ur" => Ok(ReportSort::Utilization),
            other => Err(CalcError::invalid_input("sort", other, "Expected 'id' or 'utilization'")),
        }
    }
}

/// Ordered collection of check rows for one member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReport", into = "RawReport")]
pub struct CheckReport {
    rows: Vec<CheckRow>,
}

#[derive(Serialize, Deserialize)]
struct RawReport {
    rows: Vec<CheckRow>,
}

impl TryFrom<RawReport> for CheckReport {
    type Error = CalcError;

    /// Ids must be exactly `1..=N` in order.
    fn try_from(raw: RawReport) -> Result<Self, Self::Error> {
        for (index, row) in raw.rows.iter().enumerate() {
            if row.id != index + 1 {
                return Err(CalcError::invalid_input(
                    "rows",
                    format!("id {} at position {}", row.id, index + 1),
                    "Row ids must run 1..=N in order",
                ));
            }
        }
        Ok(CheckReport { rows: raw.rows })
    }
}

impl From<CheckReport> for RawReport {
    fn from(report: CheckReport) -> Self {
        RawReport { rows: report.rows }
    }
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row; its id is the next position.
    pub fn push(&mut self, clause: impl Into<String>, result: CheckResult) -> &CheckRow {
        let id = self.rows.len() + 1;
        self.rows.push(CheckRow {
            id,
            clause: clause.into(),
            utilization_ratio: result.utilization_ratio,
            is_satisfied: result.is_satisfied,
        });
        &self.rows[id - 1]
    }

    /// Look up a row by its 1-based id
    pub fn get(&self, id: usize) -> Option<&CheckRow> {
        id.checked_sub(1).and_then(|index| self.rows.get(index))
    }

    /// Rows in registration order
    pub fn rows(&self) -> &[CheckRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row with the largest utilization ratio.
    ///
    /// Ties go to the lowest id. A NaN ratio ranks above every number, so an
    /// undefined result is never hidden behind a finite one.
    pub fn governing(&self) -> Option<&CheckRow> {
        let mut rows = self.rows.iter();
        let first = rows.next()?;
        Some(rows.fold(first, |best, row| {
            if compare_ratio(row, best) == Ordering::Greater {
                row
            } else {
                best
            }
        }))
    }

    /// Check if every clause is satisfied. An empty report is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.rows.iter().all(|row| row.is_satisfied)
    }

    /// Same as [`CheckReport::all_satisfied`]
    pub fn passes(&self) -> bool {
        self.all_satisfied()
    }

    /// Rows that failed, in id order
    pub fn failing(&self) -> Vec<&CheckRow> {
        self.rows.iter().filter(|row| !row.is_satisfied).collect()
    }

    /// Borrowed listing in the requested order
    pub fn sorted(&self, sort: ReportSort) -> Vec<&CheckRow> {
        let mut rows: Vec<&CheckRow> = self.rows.iter().collect();
        if sort == ReportSort::Utilization {
            // sort_by is stable: equal ratios keep id order
            rows.sort_by(|a, b| compare_ratio(b, a));
        }
        rows
    }

    /// Human-readable table with columns id, clause, UR, check.
    pub fn render_table(&self, sort: ReportSort) -> String {
        let clause_width = self
            .rows
            .iter()
            .map(|row| row.clause.chars().count())
            .max()
            .unwrap_or(0)
            .max("clause".len());

        let mut output = String::new();
        output.push_str(&format!(
            "{:>4}  {:<width$}  {:>10}  {}\n",
            "id",
            "clause",
            "UR",
            "check",
            width = clause_width
        ));
        for row in self.sorted(sort) {
            output.push_str(&format!(
                "{:>4}  {:<width$}  {:>10.4}  {}\n",
                row.id,
                row.clause,
                row.utilization_ratio,
                row.verdict(),
                width = clause_width
            ));
        }
        output
    }
}

fn compare_ratio(a: &CheckRow, b: &CheckRow) -> Ordering {
    a.utilization_ratio.abs().total_cmp(&b.utilization_ratio.abs())
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_table(ReportSort::Id))
    }
}

impl<'a> IntoIterator for &'a CheckReport {
    type Item = &'a CheckRow;
    type IntoIter = std::slice::Iter<'a, CheckRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
