use serde::{Deserialize, Serialize};
use std::fmt;

/// A single prop-contract violation found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropIssue {
    /// Component the prop belongs to (e.g. "Toggle")
    pub component: String,
    /// Name of the offending prop (e.g. "aria-label")
    pub prop: String,
    pub message: String,
}

impl PropIssue {
    pub fn new(component: &str, prop: &str, message: String) -> Self {
        PropIssue {
            component: component.to_string(),
            prop: prop.to_string(),
            message,
        }
    }

    /// Stable key for once-per-violation warning deduplication.
    pub fn key(&self) -> String {
        format!("{}.{}", self.component, self.prop)
    }
}

impl fmt::Display for PropIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: prop '{}' {}",
            self.component, self.prop, self.message
        )
    }
}

pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<PropIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: PropIssue) {
        self.is_valid = false;
        self.issues.push(issue);
    }
}
