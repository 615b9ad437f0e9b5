//! Views over a parsed project.json.
//!
//! JSON shape (unknown sections and fields are ignored):
//! {
//!   "variables": {
//!     "inputs":  [ <variable>, ... ],
//!     "outputs": [ <variable>, ... ],
//!     "feature_order": { "inputs": ["a", ...], "outputs": ["y", ...] }
//!   },
//!   "optimization": {
//!     "constraint_strs": ["a + b <= 10", ...]
//!   }
//! }
//!
//! Each view reads only the paths it needs, so a malformed section elsewhere
//! in the file does not affect it. Missing or null values read as empty.

use crate::spec::feature_order::{FeatureOrderMismatch, SectionDiff};
use crate::spec::{Groups, Range, Variable};

use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned};
use serde_json::{Map, Value};

/// Raw parsed project file: a JSON object.
pub type Document = Map<String, Value>;

const INPUTS: &[&str] = &["variables", "inputs"];
const OUTPUTS: &[&str] = &["variables", "outputs"];
const ORDER_INPUTS: &[&str] = &["variables", "feature_order", "inputs"];
const ORDER_OUTPUTS: &[&str] = &["variables", "feature_order", "outputs"];
const CONSTRAINTS: &[&str] = &["optimization", "constraint_strs"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSpec {
    doc: Document,
}

impl From<Document> for ProjectSpec {
    fn from(doc: Document) -> Self {
        Self { doc }
    }
}

impl ProjectSpec {
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Deserialize the value at `path`. Missing or null anywhere along the
    /// path yields `T::default()`; a non-object in the middle is an error.
    fn read<T>(&self, path: &[&str]) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned + Default,
    {
        let Some((first, rest)) = path.split_first() else {
            return Ok(T::default());
        };

        let mut value = self.doc.get(*first);
        for (depth, key) in rest.iter().enumerate() {
            value = match value {
                None | Some(Value::Null) => None,
                Some(Value::Object(fields)) => fields.get(*key),
                Some(_) => {
                    return Err(de::Error::custom(format!(
                        "`{}` is not an object",
                        path[..=depth].join(".")
                    )));
                }
            };
        }

        match value {
            None | Some(Value::Null) => Ok(T::default()),
            Some(v) => T::deserialize(v).map_err(|e| {
                <serde_json::Error as de::Error>::custom(format!("`{}`: {}", path.join("."), e))
            }),
        }
    }

    /// Inputs in declaration order, optionally restricted to `groups`.
    pub fn inputs(&self, groups: Option<&Groups>) -> Result<Vec<Variable>, serde_json::Error> {
        let inputs: Vec<Variable> = self.read(INPUTS)?;
        Ok(match groups {
            Some(groups) => inputs.into_iter().filter(|v| groups.matches(v)).collect(),
            None => inputs,
        })
    }

    /// Range per input name for the inputs selected by `groups`, in
    /// declaration order.
    ///
    /// A later variable with the same name replaces the earlier entry's value
    /// in place. Inputs without a name cannot be keyed and are skipped.
    pub fn input_ranges(
        &self,
        groups: &Groups,
    ) -> Result<IndexMap<String, Range>, serde_json::Error> {
        let mut ranges = IndexMap::new();
        for var in self.inputs(Some(groups))? {
            let Some(name) = var.name.clone() else {
                tracing::warn!(?var, "skipping input without a name");
                continue;
            };
            if ranges.insert(name, var.range()).is_some() {
                tracing::warn!(name = ?var.name, "duplicate input name, later entry wins");
            }
        }
        Ok(ranges)
    }

    pub fn constraint_strs(&self) -> Result<Vec<String>, serde_json::Error> {
        self.read(CONSTRAINTS)
    }

    /// Compare declared input/output names against feature_order.
    ///
    /// `Ok(None)` when both sections agree.
    pub fn feature_order_mismatch(&self) -> Result<Option<FeatureOrderMismatch>, serde_json::Error> {
        let declared_inputs: Vec<Value> = self.read(INPUTS)?;
        let declared_outputs: Vec<Value> = self.read(OUTPUTS)?;
        let order_inputs: Vec<String> = self.read(ORDER_INPUTS)?;
        let order_outputs: Vec<String> = self.read(ORDER_OUTPUTS)?;

        let inputs = SectionDiff::between(
            declared_names(&declared_inputs),
            order_inputs.iter().map(String::as_str),
        );
        let outputs = SectionDiff::between(
            declared_names(&declared_outputs),
            order_outputs.iter().map(String::as_str),
        );

        Ok(FeatureOrderMismatch::check(inputs, outputs))
    }
}

/// Names of declared variables. Entries that are not objects, or whose name
/// is missing, empty or not a string, are not declarations.
fn declared_names(entries: &[Value]) -> impl Iterator<Item = &str> {
    entries
        .iter()
        .filter_map(|entry| entry.as_object()?.get("name")?.as_str())
        .filter(|n| !n.is_empty())
}
