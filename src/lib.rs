//! Read-only access to optimization project files (project.json).
//!
//! - `spec`: typed document model and the pure derived views
//! - `accessor`: path-taking functions that re-read the file on every call
//! - `error`: error kinds

pub mod accessor;
pub mod error;
pub mod logging;
pub mod spec;

pub use accessor::{
    DEFAULT_PROJECT_PATH, constraint_strs, input_ranges, input_ranges_default, inputs,
    load, load_default, load_spec, validate,
};
pub use error::{Error, Result};
pub use spec::{
    Document, FeatureOrderMismatch, Groups, Numeric, ProjectSpec, Range, VarType, Variable,
    decimals_from_step,
};
