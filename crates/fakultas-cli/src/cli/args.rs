use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fakultas",
    version,
    about = "Record student exam scores and predict a faculty"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// config file (default: fakultas.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// reject unknown keys in the config file
    #[arg(long, global = true)]
    pub strict_config: bool,

    /// database file; overrides the config file
    #[arg(long, global = true, env = "FAKULTAS_DB")]
    pub db: Option<PathBuf>,

    /// tracing filter, e.g. info or fakultas_core=debug
    #[arg(long, global = true, env = "FAKULTAS_LOG")]
    pub log_level: Option<String>,

    /// emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the table if it does not exist
    Init(InitArgs),
    /// Show every record
    List(ListArgs),
    /// Load one record into form values
    Show(ShowArgs),
    /// Add a record
    Add(FormArgs),
    /// Replace the fields of the selected record
    Update(UpdateArgs),
    /// Delete the selected record
    Delete(DeleteArgs),
    /// Predict a faculty without storing anything
    Predict(PredictArgs),
    /// Database location and row count
    Status,
    Version,
}

#[derive(clap::Args, Clone)]
pub struct InitArgs {
    /// also write a sample fakultas.yaml (or --config path)
    #[arg(long)]
    pub write_config: bool,
}

#[derive(clap::Args, Clone)]
pub struct ListArgs {
    /// text | json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// write JSON to this file instead of stdout (needs --format json)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args, Clone)]
pub struct ShowArgs {
    #[arg(long)]
    pub id: i64,
}

/// Form fields. Scores stay text so validation happens in one place.
#[derive(clap::Args, Clone)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub biologi: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub fisika: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub inggris: String,
}

#[derive(clap::Args, Clone)]
pub struct UpdateArgs {
    /// selected record; omitted means nothing is selected
    #[arg(long)]
    pub id: Option<i64>,

    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(clap::Args, Clone)]
pub struct DeleteArgs {
    /// selected record; omitted means nothing is selected
    #[arg(long)]
    pub id: Option<i64>,
}

#[derive(clap::Args, Clone)]
pub struct PredictArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub biologi: String,

    #[arg(long, allow_hyphen_values = true)]
    pub fisika: String,

    #[arg(long, allow_hyphen_values = true)]
    pub inggris: String,
}
