use super::args::*;
use fakultas_core::config::{self, AppConfig};
use fakultas_core::controller::parse_score;
use fakultas_core::{RecordController, RecordError, Store, Subject};
use std::path::{Path, PathBuf};

pub mod records;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const INVALID_INPUT: i32 = 1;
    pub const FATAL: i32 = 2;
}

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let cfg = match resolve_config(&cli.global) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return Ok(exit_codes::FATAL);
        }
    };
    crate::logging::init_logging(&cfg.log_level, cli.global.log_json);
    tracing::debug!(event = "config_resolved", config = ?cfg);

    match cli.cmd {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
        Command::Predict(args) => cmd_predict(args),
        Command::Init(args) => cmd_init(args, &cli.global, &cfg),
        Command::Status => cmd_status(&cfg),
        Command::List(args) => records::cmd_list(&open_controller(&cfg)?, args),
        Command::Show(args) => records::cmd_show(&open_controller(&cfg)?, args),
        Command::Add(args) => records::cmd_add(&open_controller(&cfg)?, args),
        Command::Update(args) => records::cmd_update(&open_controller(&cfg)?, args),
        Command::Delete(args) => records::cmd_delete(&open_controller(&cfg)?, args),
    }
}

/// Defaults, then the config file, then `--db`/`--log-level` (or their env vars).
fn resolve_config(global: &GlobalArgs) -> Result<AppConfig, config::ConfigError> {
    let mut cfg = config::load_or_default(global.config.as_deref(), global.strict_config)?;
    if let Some(db) = &global.db {
        cfg.db_path = db.clone();
    }
    if let Some(level) = &global.log_level {
        cfg.log_level = level.clone();
    }
    Ok(cfg)
}

/// Opens the store and makes sure the table exists, as every startup does.
fn open_controller(cfg: &AppConfig) -> anyhow::Result<RecordController> {
    ensure_parent_dir(&cfg.db_path)?;
    let ctl = RecordController::new(Store::open(&cfg.db_path)?);
    ctl.ensure_schema()?;
    Ok(ctl)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if path.as_os_str() == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Recoverable errors become a message and exit code 1; storage failures
/// propagate as fatal.
pub(crate) fn report(err: RecordError) -> anyhow::Result<i32> {
    if err.is_recoverable() {
        eprintln!("error: {err}");
        Ok(exit_codes::INVALID_INPUT)
    } else {
        Err(err.into())
    }
}

fn cmd_init(args: InitArgs, global: &GlobalArgs, cfg: &AppConfig) -> anyhow::Result<i32> {
    if args.write_config {
        let path = global
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
        if path.exists() {
            eprintln!("note: {} already exists (skipped)", path.display());
        } else {
            config::write_sample_config(&path)?;
            eprintln!("created {}", path.display());
        }
    }

    open_controller(cfg)?;
    eprintln!("database ready: {}", cfg.db_path.display());
    Ok(exit_codes::OK)
}

fn cmd_status(cfg: &AppConfig) -> anyhow::Result<i32> {
    let ctl = open_controller(cfg)?;
    let stats = ctl.store().stats_best_effort()?;

    println!("database: {}", cfg.db_path.display());
    println!(
        "records: {}",
        stats
            .records
            .map(|n| n.to_string())
            .unwrap_or_else(|| "<unknown>".into())
    );
    println!(
        "last id: {}",
        stats
            .last_id
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".into())
    );
    println!("sqlite: {}", stats.sqlite_version);
    Ok(exit_codes::OK)
}

fn cmd_predict(args: PredictArgs) -> anyhow::Result<i32> {
    let scores = parse_score(Subject::Biologi, &args.biologi).and_then(|b| {
        let p = parse_score(Subject::Fisika, &args.fisika)?;
        let e = parse_score(Subject::Inggris, &args.inggris)?;
        Ok((b, p, e))
    });

    match scores {
        Ok((b, p, e)) => {
            println!("{}", fakultas_core::predict(b, p, e));
            Ok(exit_codes::OK)
        }
        Err(e) => report(e.into()),
    }
}
