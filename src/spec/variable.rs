//! Optimization variables and their derived ranges.
//!
//! JSON shape of one entry under variables.inputs / variables.outputs:
//! {
//!   "name": "blade_angle",
//!   "type": "float",          // int | float | bool | anything else
//!   "group": "geometry",      // optional, used for filtering
//!   "min": 10, "max": 40,     // default 0
//!   "step": 0.5               // default 1 for int, 0.1 otherwise
//! }
//!
//! Fields we do not read are kept in `extra` so callers see the entry as
//! authored.

use crate::spec::Numeric;
use crate::spec::decimal::decimals_from_step;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Group applied by `input_ranges` when the caller does not pick one.
pub const DEFAULT_RANGE_GROUP: &str = "geometry";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VarType {
    Int,
    Float,
    Bool,
    Other(String),
}

impl From<String> for VarType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "int" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            _ => Self::Other(s),
        }
    }
}

impl From<VarType> for String {
    fn from(t: VarType) -> Self {
        match t {
            VarType::Int => "int".to_string(),
            VarType::Float => "float".to_string(),
            VarType::Bool => "bool".to_string(),
            VarType::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub var_type: Option<VarType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Numeric>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Numeric>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Numeric>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Variable {
    pub fn new(name: impl Into<String>, var_type: VarType) -> Self {
        Self {
            name: Some(name.into()),
            var_type: Some(var_type),
            group: None,
            min: None,
            max: None,
            step: None,
            extra: Map::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_bounds(mut self, min: impl Into<Numeric>, max: impl Into<Numeric>) -> Self {
        self.min = Some(min.into());
        self.max = Some(max.into());
        self
    }

    pub fn with_step(mut self, step: impl Into<Numeric>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Declared step, or the type's default (1 for int, 0.1 otherwise).
    pub fn effective_step(&self) -> Numeric {
        match (&self.step, &self.var_type) {
            (Some(step), _) => step.clone(),
            (None, Some(VarType::Int)) => Numeric::from(1_i64),
            (None, _) => Numeric::from(0.1),
        }
    }

    /// Search range for this variable.
    ///
    /// A bool is always a 0/1 choice, whatever bounds the author wrote.
    pub fn range(&self) -> Range {
        if self.var_type == Some(VarType::Bool) {
            return Range::boolean();
        }

        let step = self.effective_step();
        let round_digits = match self.var_type {
            Some(VarType::Int) => 0,
            _ => decimals_from_step(&step),
        };

        Range {
            min: self.min.clone().unwrap_or_else(Numeric::zero),
            max: self.max.clone().unwrap_or_else(Numeric::zero),
            step,
            round_digits,
        }
    }
}

/// `[min, max, step, round_digits]`, serialized as a 4-element array.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub min: Numeric,
    pub max: Numeric,
    pub step: Numeric,
    pub round_digits: u32,
}

impl Range {
    pub fn boolean() -> Self {
        Self {
            min: Numeric::from(0_i64),
            max: Numeric::from(1_i64),
            step: Numeric::from(1_i64),
            round_digits: 0,
        }
    }
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.min, &self.max, &self.step, self.round_digits).serialize(serializer)
    }
}

/// Set of group names used to filter inputs.
///
/// Built from a single name or any collection of names; an empty set keeps
/// every variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups(BTreeSet<String>);

impl Groups {
    pub fn geometry() -> Self {
        Self::from(DEFAULT_RANGE_GROUP)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, var: &Variable) -> bool {
        self.is_empty() || var.group.as_ref().is_some_and(|g| self.0.contains(g))
    }
}

impl From<&str> for Groups {
    fn from(name: &str) -> Self {
        Self(BTreeSet::from([name.to_string()]))
    }
}

impl From<String> for Groups {
    fn from(name: String) -> Self {
        Self(BTreeSet::from([name]))
    }
}

impl<const N: usize> From<[&str; N]> for Groups {
    fn from(names: [&str; N]) -> Self {
        names.into_iter().collect()
    }
}

impl From<&[&str]> for Groups {
    fn from(names: &[&str]) -> Self {
        names.iter().copied().collect()
    }
}

impl From<Vec<String>> for Groups {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Groups {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bool_range_ignores_declared_bounds() {
        let var = Variable::new("vent", VarType::Bool)
            .with_bounds(3_i64, 9_i64)
            .with_step(0.5);
        assert_eq!(var.range(), Range::boolean());
    }

    #[test]
    fn int_range_never_rounds() {
        let var = Variable::new("ribs", VarType::Int)
            .with_bounds(2_i64, 12_i64)
            .with_step(0.25);
        let range = var.range();
        assert_eq!(range.round_digits, 0);
        assert_eq!(range.step, Numeric::from(0.25));
    }

    #[test]
    fn int_defaults_to_unit_step() {
        let range = Variable::new("ribs", VarType::Int).range();
        assert_eq!(range.step, Numeric::from(1_i64));
        assert_eq!(range.min, Numeric::zero());
        assert_eq!(range.max, Numeric::zero());
    }

    #[test]
    fn float_defaults_to_tenth_step() {
        let range = Variable::new("chord", VarType::Float)
            .with_bounds(0.5, 2.5)
            .range();
        assert_eq!(range.step, Numeric::from(0.1));
        assert_eq!(range.round_digits, 1);
    }

    #[test]
    fn untyped_variable_uses_step_precision() {
        let mut var = Variable::new("span", VarType::Float).with_step("0.025");
        var.var_type = None;
        assert_eq!(var.range().round_digits, 3);
    }

    #[test]
    fn range_serializes_as_array() {
        let var = Variable::new("chord", VarType::Float)
            .with_bounds(1_i64, 2_i64)
            .with_step(0.05);
        let json = serde_json::to_value(var.range()).unwrap();
        assert_eq!(json, serde_json::json!([1, 2, 0.05, 2]));
    }

    #[test]
    fn var_type_round_trips_unknown_names() {
        let var: Variable =
            serde_json::from_value(serde_json::json!({"name": "mat", "type": "category"})).unwrap();
        assert_eq!(var.var_type, Some(VarType::Other("category".to_string())));
        assert_eq!(
            serde_json::to_value(&var).unwrap(),
            serde_json::json!({"name": "mat", "type": "category"})
        );
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let var: Variable = serde_json::from_value(serde_json::json!({
            "name": "chord",
            "type": "float",
            "unit": "mm"
        }))
        .unwrap();
        assert_eq!(var.extra.get("unit"), Some(&serde_json::json!("mm")));
    }

    #[test]
    fn single_group_equals_one_element_collection() {
        assert_eq!(Groups::from("geometry"), Groups::from(["geometry"]));
        assert_eq!(Groups::geometry(), Groups::from(vec!["geometry".to_string()]));
    }

    #[test]
    fn empty_groups_match_everything() {
        let var = Variable::new("chord", VarType::Float);
        assert!(Groups::default().matches(&var));
        assert!(!Groups::geometry().matches(&var));
        assert!(Groups::geometry().matches(&var.with_group("geometry")));
    }
}
