//! Path-based accessors over project.json.
//!
//! Every call re-reads the file; nothing is cached between calls.

use crate::error::{Error, Result};
use crate::spec::{Document, Groups, ProjectSpec, Range, Variable};

use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File read when no path is given.
pub const DEFAULT_PROJECT_PATH: &str = "project.json";

/// Read and parse the file at `path`.
///
/// An empty file or a top-level value that is not an object is a parse error.
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let doc: Document = serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), keys = doc.len(), "loaded project file");
    Ok(doc)
}

/// `load` on `project.json` in the working directory.
pub fn load_default() -> Result<Document> {
    load(DEFAULT_PROJECT_PATH)
}

pub fn load_spec(path: impl AsRef<Path>) -> Result<ProjectSpec> {
    Ok(ProjectSpec::from(load(path)?))
}

fn schema_error(path: &Path, source: serde_json::Error) -> Error {
    Error::Schema {
        path: path.to_path_buf(),
        source,
    }
}

/// Input variables in declaration order. `None` returns every input.
pub fn inputs(path: impl AsRef<Path>, include_groups: Option<&Groups>) -> Result<Vec<Variable>> {
    let path = path.as_ref();
    load_spec(path)?
        .inputs(include_groups)
        .map_err(|e| schema_error(path, e))
}

/// `[min, max, step, round_digits]` per input name for the selected groups,
/// in declaration order.
pub fn input_ranges(
    path: impl AsRef<Path>,
    include_groups: &Groups,
) -> Result<IndexMap<String, Range>> {
    let path = path.as_ref();
    load_spec(path)?
        .input_ranges(include_groups)
        .map_err(|e| schema_error(path, e))
}

/// `input_ranges` over the geometry group.
pub fn input_ranges_default(path: impl AsRef<Path>) -> Result<IndexMap<String, Range>> {
    input_ranges(path, &Groups::geometry())
}

pub fn constraint_strs(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    load_spec(path)?
        .constraint_strs()
        .map_err(|e| schema_error(path, e))
}

/// Check that declared input/output names match variables.feature_order.
pub fn validate(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mismatch = load_spec(path)?
        .feature_order_mismatch()
        .map_err(|e| schema_error(path, e))?;

    match mismatch {
        Some(mismatch) => Err(mismatch.into()),
        None => {
            tracing::debug!(path = %path.display(), "feature_order consistent");
            Ok(())
        }
    }
}
