//! Cabinet project data model
//!
//! A project carries its own parameters plus an optional list of named
//! configurations. Older saves only have the top-level parameters, so those
//! stay on the record.

use cabinetr_cutlist::{CabinetParams, CutlistError, CutlistResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A named set of opening parameters within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetConfiguration {
    pub id: String,
    pub name: String,
    pub params: CabinetParams,
}

impl CabinetConfiguration {
    pub fn new(name: impl Into<String>, params: CabinetParams) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabinet {
    pub id: String,
    pub name: String,
    pub params: CabinetParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<CabinetConfiguration>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cabinet {
    pub fn new(name: impl Into<String>, params: CabinetParams) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: name.into(),
            params,
            configurations: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_configurations(&self) -> bool {
        self.configurations.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn configurations(&self) -> &[CabinetConfiguration] {
        self.configurations.as_deref().unwrap_or_default()
    }

    /// Export sections: one per configuration, or the project itself when it
    /// has none.
    pub fn sections(&self) -> Vec<(String, &CabinetParams)> {
        if self.has_configurations() {
            self.configurations()
                .iter()
                .map(|c| (format!("{} - {}", self.name, c.name), &c.params))
                .collect()
        } else {
            vec![(self.name.clone(), &self.params)]
        }
    }

    /// Fails on the first section with a custom drawer split that cannot be
    /// applied.
    pub fn check_ratios(&self) -> CutlistResult<()> {
        for (title, params) in self.sections() {
            let opening = params.to_opening(title);
            if !opening.ratios_ready() {
                return Err(CutlistError::InvalidRatios {
                    sum: opening.ratio_total(),
                    name: opening.name,
                });
            }
        }
        Ok(())
    }

    /// Copy with fresh ids and timestamps and ` (Copy)` appended to the name.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.name = format!("{} (Copy)", self.name);
        copy.refresh_identity();
        copy
    }

    /// Give the project and its configurations new ids and stamp it as
    /// created now.
    pub(crate) fn refresh_identity(&mut self) {
        let now = Utc::now();
        self.id = new_id();
        self.created_at = now;
        self.updated_at = now;
        if let Some(configurations) = self.configurations.as_mut() {
            for configuration in configurations {
                configuration.id = new_id();
            }
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update of a project. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CabinetPatch {
    pub name: Option<String>,
    pub params: Option<CabinetParams>,
    pub configurations: Option<Vec<CabinetConfiguration>>,
}

impl CabinetPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn params(params: CabinetParams) -> Self {
        Self {
            params: Some(params),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, cabinet: &mut Cabinet) {
        if let Some(name) = self.name {
            cabinet.name = name;
        }
        if let Some(params) = self.params {
            cabinet.params = params;
        }
        if let Some(configurations) = self.configurations {
            cabinet.configurations = Some(configurations);
        }
        cabinet.touch();
    }
}
