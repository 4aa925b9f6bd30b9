//! # Cabinetr Projects
//!
//! Saved cabinet projects: the project model, a JSON file-backed store, the
//! versioned import/export envelope and the multi-project CSV report.

pub mod csv;
pub mod error;
pub mod model;
pub mod store;
pub mod transfer;

pub use csv::{all_cabinets_csv, all_cutlists_file_name, cabinet_csv};
pub use error::{ProjectError, ProjectResult};
pub use model::{Cabinet, CabinetConfiguration, CabinetPatch};
pub use store::{ProjectStore, STORE_FILE_NAME};
pub use transfer::{
    backup_file_name, export_all, export_project, import_projects, project_file_name,
    ProjectExport, EXPORT_FORMAT_VERSION,
};
