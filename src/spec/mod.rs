//! Spec layer: project.json model + derived views.
//!
//! This module does no I/O. It owns:
//! - the parsed document (ProjectSpec) and the views read from it
//! - variables, numeric values and ranges
//! - step precision (decimal) and the feature_order check

pub mod decimal;
pub mod feature_order;
pub mod numeric;
pub mod project;
pub mod variable;

pub use decimal::decimals_from_step;
pub use feature_order::{FeatureOrderMismatch, SectionDiff};
pub use numeric::Numeric;
pub use project::{Document, ProjectSpec};
pub use variable::{DEFAULT_RANGE_GROUP, Groups, Range, VarType, Variable};
