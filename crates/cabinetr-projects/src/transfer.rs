//! Project import and export
//!
//! Projects travel between installations in a versioned JSON envelope. An
//! import always produces new records: ids and timestamps are replaced so
//! they cannot collide with projects already in the store.

use crate::error::{ProjectError, ProjectResult};
use crate::model::Cabinet;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

pub const EXPORT_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectExport {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub projects: Vec<Cabinet>,
}

impl ProjectExport {
    pub fn new(projects: Vec<Cabinet>) -> Self {
        Self {
            version: EXPORT_FORMAT_VERSION.to_string(),
            export_date: Utc::now(),
            projects,
        }
    }

    pub fn to_json(&self) -> ProjectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Envelope holding a single project.
pub fn export_project(cabinet: &Cabinet) -> ProjectResult<String> {
    ProjectExport::new(vec![cabinet.clone()]).to_json()
}

/// Envelope holding every project, used for backups.
pub fn export_all(cabinets: &[Cabinet]) -> ProjectResult<String> {
    ProjectExport::new(cabinets.to_vec()).to_json()
}

/// Read the projects out of an export envelope.
///
/// The file must be JSON with a non-empty `version` and a `projects` array
/// of valid projects; anything else is [`ProjectError::InvalidFormat`] and
/// nothing is imported. Every returned project has fresh ids and timestamps.
pub fn import_projects(content: &str) -> ProjectResult<Vec<Cabinet>> {
    let data: Value = serde_json::from_str(content).map_err(|e| {
        warn!("Project import is not JSON: {}", e);
        ProjectError::InvalidFormat
    })?;

    let has_version = data.get("version").is_some_and(is_truthy);
    let projects = match data.get("projects") {
        Some(Value::Array(projects)) if has_version => projects.clone(),
        _ => return Err(ProjectError::InvalidFormat),
    };

    let mut cabinets: Vec<Cabinet> =
        serde_json::from_value(Value::Array(projects)).map_err(|e| {
            warn!("Project import has malformed projects: {}", e);
            ProjectError::InvalidFormat
        })?;
    for cabinet in &mut cabinets {
        cabinet.refresh_identity();
    }

    info!("Read {} project(s) from import file", cabinets.len());
    Ok(cabinets)
}

/// `<name>_<date>.json`, with whitespace runs in the name replaced by `_`.
pub fn project_file_name(name: &str, date: NaiveDate) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }
    format!("{}_{}.json", stem, date)
}

pub fn backup_file_name(date: NaiveDate) -> String {
    format!("cabinetr_backup_{}.json", date)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
