//! Command line front end
//!
//! `calc` works on a throwaway list of openings read from JSON. The other
//! commands operate on the project store in the configured data directory.

use anyhow::{bail, Context, Result};
use cabinetr_core::format_inches;
use cabinetr_cutlist::{
    calculate_piece_dimensions, cutlist_to_csv, CabinetOpening, CabinetParams, CutlistItem,
    GlobalSettings, OpeningSession, PieceDimensions, DEFAULT_CUTLIST_FILENAME,
};
use cabinetr_projects::{
    all_cabinets_csv, all_cutlists_file_name, backup_file_name, cabinet_csv, export_all,
    export_project, import_projects, project_file_name, Cabinet, ProjectStore, STORE_FILE_NAME,
};
use cabinetr_settings::{default_config_path, Config};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(
    name = "cabinetr",
    about = "Cutlists for frame-and-panel cabinet doors and drawer fronts",
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate the cutlist for a JSON file of openings.
    Calc(CalcArgs),

    /// Manage saved projects.
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Export one project, or back up every project.
    Export(ExportArgs),

    /// Import projects from an export file.
    Import { file: PathBuf },

    /// Write the piece breakdown of saved projects as CSV.
    Csv(CsvArgs),
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Either an array of openings or `{"settings": {..}, "openings": [..]}`
    pub input: PathBuf,

    /// Emit CSV instead of a table.
    #[arg(long)]
    pub csv: bool,

    /// Write to this file instead of stdout.
    #[arg(short, long, conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the CSV to `cabinet_cutlist.csv` in the export directory.
    #[arg(long, requires = "csv")]
    pub save: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List saved projects.
    List,

    /// Create a project.
    New {
        name: String,

        /// JSON file with the project parameters; defaults otherwise.
        #[arg(long)]
        params: Option<PathBuf>,
    },

    /// Print a project's piece breakdown.
    Show { id: String },

    Delete { id: String },

    Duplicate { id: String },
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export only this project.
    #[arg(long)]
    pub id: Option<String>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CsvArgs {
    /// Only this project.
    #[arg(long)]
    pub id: Option<String>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CalcInput {
    Openings(Vec<CabinetOpening>),
    Job {
        #[serde(default)]
        settings: Option<GlobalSettings>,
        openings: Vec<CabinetOpening>,
    },
}

impl CalcInput {
    fn into_parts(self, defaults: GlobalSettings) -> (GlobalSettings, Vec<CabinetOpening>) {
        match self {
            Self::Openings(openings) => (defaults, openings),
            Self::Job { settings, openings } => (settings.unwrap_or(defaults), openings),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &config, &mut out)
}

/// Run one command against `config`, writing human output to `out`.
pub fn execute(command: Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    let today = Utc::now().date_naive();
    match command {
        Commands::Calc(args) => run_calc(args, config, out),
        Commands::Project(command) => run_project(command, config, out),
        Commands::Export(args) => run_export(args, config, today, out),
        Commands::Import { file } => run_import(&file, config, out),
        Commands::Csv(args) => run_csv(args, config, today, out),
    }
}

fn run_calc(args: CalcArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let input: CalcInput = serde_json::from_str(&content)
        .with_context(|| format!("parsing openings from {}", args.input.display()))?;
    let (settings, openings) = input.into_parts(config.frame);
    settings.validate().context("invalid frame settings")?;

    let mut session = OpeningSession::with_options(settings, config.formula);
    for opening in openings {
        if let Err(e) = opening.validate() {
            warn!("Opening '{}': {}", opening.name, e);
        }
        session.add_opening(opening);
    }

    let rendered = if args.csv {
        session.check_ratios()?;
        cutlist_to_csv(&session.cutlist())
    } else {
        cutlist_table(&session.cutlist())
    };

    let output = match args.output {
        Some(path) => Some(path),
        None if args.save => Some(config.output_dir().join(DEFAULT_CUTLIST_FILENAME)),
        None => None,
    };
    match output {
        Some(path) => write_file(&path, &rendered, out),
        None => {
            writeln!(out, "{}", rendered)?;
            Ok(())
        }
    }
}

fn run_project(command: ProjectCommand, config: &Config, out: &mut dyn Write) -> Result<()> {
    let mut store = open_store(config)?;
    match command {
        ProjectCommand::List => {
            if store.is_empty() {
                writeln!(out, "No projects")?;
            }
            for cabinet in store.cabinets() {
                writeln!(out, "{}", project_line(cabinet))?;
            }
            return Ok(());
        }
        ProjectCommand::New { name, params } => {
            let params = match params {
                Some(path) => Some(read_params(&path)?),
                None => None,
            };
            let cabinet = store.add(name, params);
            writeln!(out, "{}", project_line(cabinet))?;
        }
        ProjectCommand::Show { id } => {
            let cabinet = find_project(&store, &id)?;
            for (title, params) in cabinet.sections() {
                writeln!(out, "=== {} ===", title)?;
                writeln!(
                    out,
                    "{}, {}\" x {}\", quantity {}",
                    params.kind_label(),
                    format_inches(params.opening_width),
                    format_inches(params.opening_height),
                    params.quantity
                )?;
                writeln!(out, "{}", pieces_table(&calculate_piece_dimensions(params)))?;
            }
            return Ok(());
        }
        ProjectCommand::Delete { id } => {
            let removed = store.delete(&id)?;
            writeln!(out, "Deleted {}", removed.name)?;
        }
        ProjectCommand::Duplicate { id } => {
            let copy = store.duplicate(&id)?;
            writeln!(out, "{}", project_line(copy))?;
        }
    }

    store.save().context("saving projects")?;
    Ok(())
}

fn run_export(
    args: ExportArgs,
    config: &Config,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<()> {
    let store = open_store(config)?;
    let (file_name, json) = match args.id {
        Some(id) => {
            let cabinet = find_project(&store, &id)?;
            (
                project_file_name(&cabinet.name, today),
                export_project(cabinet)?,
            )
        }
        None => (backup_file_name(today), export_all(store.cabinets())?),
    };

    let path = args
        .output
        .unwrap_or_else(|| config.output_dir().join(file_name));
    write_file(&path, &json, out)
}

fn run_import(file: &Path, config: &Config, out: &mut dyn Write) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let cabinets =
        import_projects(&content).with_context(|| format!("importing {}", file.display()))?;

    let mut store = open_store(config)?;
    let count = store.import(cabinets);
    store.save().context("saving projects")?;
    writeln!(out, "Imported {} project(s)", count)?;
    Ok(())
}

fn run_csv(args: CsvArgs, config: &Config, today: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let store = open_store(config)?;
    let csv = match &args.id {
        Some(id) => cabinet_csv(find_project(&store, id)?)?,
        None => {
            if store.is_empty() {
                bail!("no projects to export");
            }
            all_cabinets_csv(store.cabinets())?
        }
    };

    let path = args
        .output
        .unwrap_or_else(|| config.output_dir().join(all_cutlists_file_name(today)));
    write_file(&path, &csv, out)
}

fn open_store(config: &Config) -> Result<ProjectStore> {
    let path = config.data_dir().join(STORE_FILE_NAME);
    debug!("Opening project store at {}", path.display());
    ProjectStore::open(&path).with_context(|| format!("opening {}", path.display()))
}

fn find_project<'a>(store: &'a ProjectStore, id: &str) -> Result<&'a Cabinet> {
    store
        .get(id)
        .with_context(|| format!("no project with id {}", id))
}

fn read_params(path: &Path) -> Result<CabinetParams> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let params: CabinetParams = serde_json::from_str(&content)
        .with_context(|| format!("parsing parameters from {}", path.display()))?;
    params
        .to_opening("")
        .validate()
        .context("invalid project parameters")?;
    Ok(params)
}

fn write_file(path: &Path, content: &str, out: &mut dyn Write) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

fn project_line(cabinet: &Cabinet) -> String {
    let sections = if cabinet.has_configurations() {
        format!("{} configuration(s)", cabinet.configurations().len())
    } else {
        cabinet.params.kind_label().to_string()
    };
    format!(
        "{}  {}  [{}]  updated {}",
        cabinet.id,
        cabinet.name,
        sections,
        cabinet.updated_at.format("%Y-%m-%d %H:%M")
    )
}

fn cutlist_table(items: &[CutlistItem]) -> String {
    let mut lines = vec![format!(
        "{:<20} {:<6} {:>10} {:>10} {:>10} {:>4}",
        "Name", "Piece", "Length", "Width", "Thickness", "Qty"
    )];
    for item in items {
        lines.push(format!(
            "{:<20} {:<6} {:>10} {:>10} {:>10} {:>4}",
            item.name,
            item.piece,
            format_inches(item.length),
            format_inches(item.width),
            format_inches(item.thickness),
            item.quantity
        ));
    }
    lines.join("\n")
}

fn pieces_table(pieces: &[PieceDimensions]) -> String {
    pieces
        .iter()
        .map(|piece| {
            format!(
                "{:<18} {:>8} x {:>8}  x{:<3} {}",
                piece.name,
                format_inches(piece.width),
                format_inches(piece.length),
                piece.quantity,
                piece.notes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
