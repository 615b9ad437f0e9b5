//! Consistency between declared variable names and variables.feature_order.
//!
//! Each section (inputs, outputs) is compared as a pair of name sets:
//! - missing: declared but not listed in feature_order
//! - extra:   listed in feature_order but not declared
//!
//! Both sections are checked independently and merged into one report.

use std::collections::BTreeSet;
use std::fmt;

/// Set difference for one section. Names are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDiff {
    pub missing: Vec<String>,
    pub extra: Vec<String>,
}

impl SectionDiff {
    pub fn between<'a>(
        declared: impl IntoIterator<Item = &'a str>,
        listed: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let declared: BTreeSet<&str> = declared.into_iter().collect();
        let listed: BTreeSet<&str> = listed.into_iter().collect();

        Self {
            missing: declared.difference(&listed).map(|s| s.to_string()).collect(),
            extra: listed.difference(&declared).map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    fn describe(&self, section: &str) -> String {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!(
                "missing_in_feature_order_{}={}",
                section,
                name_list(&self.missing)
            ));
        }
        if !self.extra.is_empty() {
            parts.push(format!(
                "extra_in_feature_order_{}={}",
                section,
                name_list(&self.extra)
            ));
        }
        format!("{} mismatch: {}", section, parts.join("; "))
    }
}

/// Disagreement between declared names and feature_order, per section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureOrderMismatch {
    pub inputs: SectionDiff,
    pub outputs: SectionDiff,
}

impl FeatureOrderMismatch {
    /// `None` when both sections agree.
    pub fn check(inputs: SectionDiff, outputs: SectionDiff) -> Option<Self> {
        if inputs.is_empty() && outputs.is_empty() {
            None
        } else {
            Some(Self { inputs, outputs })
        }
    }
}

impl fmt::Display for FeatureOrderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = Vec::new();
        if !self.inputs.is_empty() {
            errors.push(self.inputs.describe("inputs"));
        }
        if !self.outputs.is_empty() {
            errors.push(self.outputs.describe("outputs"));
        }
        write!(f, "feature_order validation failed: {}", errors.join(" | "))
    }
}

impl std::error::Error for FeatureOrderMismatch {}

/// Render names as `['a', 'b']`.
fn name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}
