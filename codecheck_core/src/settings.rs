//! # Run Settings
//!
//! Settings that compose the check registry and choose how reports are
//! presented. Stored as TOML; every key is optional.
//!
//! ```toml
//! checks = ["EQ (6.1)", "EQ (6.2)"]   # default run when absent
//! include_bending = true              # append EQ (6.12)
//! workers = 4
//!
//! [report]
//! sort = "utilization"                # "id" | "utilization"
//! format = "table"                    # "table" | "json"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codecheck_core::settings::RunSettings;
//!
//! let settings = RunSettings::from_toml_str("include_bending = true").unwrap();
//! assert_eq!(settings.registry().unwrap().len(), 7);
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clauses::Clause;
use crate::errors::{CalcError, CalcResult};
use crate::report::ReportSort;
use crate::runner::CheckRegistry;

/// Settings for one code-check run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    /// Clause labels to run, in order. `None` means the default run.
    pub checks: Option<Vec<String>>,

    /// Append EQ (6.12) bending resistance when it is not already listed
    pub include_bending: bool,

    /// Worker threads for batch evaluation
    pub workers: usize,

    /// Report presentation
    pub report: ReportSettings,
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings {
            checks: None,
            include_bending: false,
            workers: 1,
            report: ReportSettings::default(),
        }
    }
}

/// How reports are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub sort: ReportSort,
    pub format: OutputFormat,
}

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl RunSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let settings: RunSettings = toml::from_str(content).map_err(|e| CalcError::settings_error(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read settings", path.display().to_string(), e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded run settings");
        RunSettings::from_toml_str(&content)
    }

    /// Check internal consistency
    pub fn validate(&self) -> CalcResult<()> {
        if self.workers == 0 {
            return Err(CalcError::settings_error("workers must be at least 1"));
        }
        if let Some(checks) = &self.checks {
            for label in checks {
                label.parse::<Clause>()?;
            }
        }
        Ok(())
    }

    /// Compose the registry these settings describe.
    pub fn registry(&self) -> CalcResult<CheckRegistry> {
        let mut registry = match &self.checks {
            Some(labels) => CheckRegistry::from_labels(labels.as_slice())?,
            None => CheckRegistry::eurocode(),
        };
        if self.include_bending && !registry.contains(&Clause::Eq6_12.label()) {
            registry = registry.with_clause(Clause::Eq6_12);
        }
        Ok(registry)
    }

    /// Worker count for batch evaluation
    pub fn workers(&self) -> CalcResult<NonZeroUsize> {
        NonZeroUsize::new(self.workers).ok_or_else(|| CalcError::settings_error("workers must be at least 1"))
    }
}
