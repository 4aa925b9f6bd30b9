//! Project store
//!
//! Holds every saved project in memory and persists them as a plain JSON
//! array. The store never writes on its own; callers decide when to `save`.

use crate::error::{ProjectError, ProjectResult};
use crate::model::{Cabinet, CabinetConfiguration, CabinetPatch};
use cabinetr_cutlist::CabinetParams;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the store inside the data directory.
pub const STORE_FILE_NAME: &str = "cabinetr-cabinets.json";

#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    path: Option<PathBuf>,
    cabinets: Vec<Cabinet>,
}

impl ProjectStore {
    /// In-memory store with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store at `path`. A missing file gives an empty store.
    pub fn open(path: impl Into<PathBuf>) -> ProjectResult<Self> {
        let path = path.into();
        let cabinets = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            debug!("No project store at {}, starting empty", path.display());
            Vec::new()
        };
        Ok(Self {
            path: Some(path),
            cabinets,
        })
    }

    pub fn load_from_file(path: &Path) -> ProjectResult<Vec<Cabinet>> {
        let content = fs::read_to_string(path)?;
        let cabinets: Vec<Cabinet> = serde_json::from_str(&content)?;
        info!(
            "Loaded {} project(s) from {}",
            cabinets.len(),
            path.display()
        );
        Ok(cabinets)
    }

    pub fn save_to_file(&self, path: &Path) -> ProjectResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.cabinets)?;
        fs::write(path, json)?;
        info!(
            "Saved {} project(s) to {}",
            self.cabinets.len(),
            path.display()
        );
        Ok(())
    }

    /// Write back to the file the store was opened from. No-op for an
    /// in-memory store.
    pub fn save(&self) -> ProjectResult<()> {
        match &self.path {
            Some(path) => self.save_to_file(path),
            None => Ok(()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn cabinets(&self) -> &[Cabinet] {
        &self.cabinets
    }

    pub fn len(&self) -> usize {
        self.cabinets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cabinets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Cabinet> {
        self.cabinets.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> ProjectResult<&mut Cabinet> {
        self.cabinets
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))
    }

    /// Create a project, using the default parameters when none are given.
    pub fn add(&mut self, name: impl Into<String>, params: Option<CabinetParams>) -> &Cabinet {
        let cabinet = Cabinet::new(name, params.unwrap_or_default());
        info!("Created project '{}' ({})", cabinet.name, cabinet.id);
        self.cabinets.push(cabinet);
        &self.cabinets[self.cabinets.len() - 1]
    }

    pub fn update(&mut self, id: &str, patch: CabinetPatch) -> ProjectResult<&Cabinet> {
        let cabinet = self.get_mut(id)?;
        patch.apply(cabinet);
        debug!("Updated project '{}'", cabinet.name);
        Ok(cabinet)
    }

    /// Remove a project. Returns the removed record.
    pub fn delete(&mut self, id: &str) -> ProjectResult<Cabinet> {
        let index = self
            .cabinets
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))?;
        let removed = self.cabinets.remove(index);
        info!("Deleted project '{}'", removed.name);
        Ok(removed)
    }

    pub fn add_configuration(
        &mut self,
        id: &str,
        name: impl Into<String>,
        params: CabinetParams,
    ) -> ProjectResult<&CabinetConfiguration> {
        let cabinet = self.get_mut(id)?;
        let configurations = cabinet.configurations.get_or_insert_with(Vec::new);
        configurations.push(CabinetConfiguration::new(name, params));
        cabinet.touch();
        let configurations = cabinet.configurations();
        Ok(&configurations[configurations.len() - 1])
    }

    pub fn update_configuration(
        &mut self,
        id: &str,
        configuration_id: &str,
        params: CabinetParams,
    ) -> ProjectResult<()> {
        let cabinet = self.get_mut(id)?;
        let configuration = cabinet
            .configurations
            .as_mut()
            .and_then(|list| list.iter_mut().find(|c| c.id == configuration_id))
            .ok_or_else(|| ProjectError::ConfigurationNotFound {
                project: id.to_string(),
                configuration: configuration_id.to_string(),
            })?;
        configuration.params = params;
        cabinet.touch();
        Ok(())
    }

    /// Remove a configuration. Unknown configuration ids are ignored.
    pub fn remove_configuration(&mut self, id: &str, configuration_id: &str) -> ProjectResult<()> {
        let cabinet = self.get_mut(id)?;
        cabinet
            .configurations
            .get_or_insert_with(Vec::new)
            .retain(|c| c.id != configuration_id);
        cabinet.touch();
        Ok(())
    }

    /// Append a copy of a project. See [`Cabinet::duplicate`].
    pub fn duplicate(&mut self, id: &str) -> ProjectResult<&Cabinet> {
        let copy = self
            .get(id)
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))?
            .duplicate();
        info!("Duplicated project into '{}'", copy.name);
        self.cabinets.push(copy);
        Ok(&self.cabinets[self.cabinets.len() - 1])
    }

    /// Append already-prepared projects, as produced by an import.
    pub fn import(&mut self, cabinets: Vec<Cabinet>) -> usize {
        let count = cabinets.len();
        self.cabinets.extend(cabinets);
        info!("Imported {} project(s)", count);
        count
    }

    pub fn replace_all(&mut self, cabinets: Vec<Cabinet>) {
        info!(
            "Replacing {} project(s) with {}",
            self.cabinets.len(),
            cabinets.len()
        );
        self.cabinets = cabinets;
    }
}
