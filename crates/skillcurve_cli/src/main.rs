//! `skillcurve` command-line entry point.
//!
//! # Responsibility
//! - Load a skill catalog (file or embedded default) and project it.
//! - Enforce dashboard-level limits (experience range, top-N minimum).
//! - Keep all rendering in `render`; core stays presentation-free.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use skillcurve_core::{
    builtin_registry, default_log_level, init_logging, load_catalog, ProjectionTable,
    SkillRegistry,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_YEARS: f64 = 0.5;
const MAX_YEARS: f64 = 10.0;
/// Smallest top-N a chart can render meaningfully.
const MIN_TOP_N: usize = 3;

#[derive(Debug, Parser)]
#[command(
    name = "skillcurve",
    version,
    about = "Project skill growth curves from a skill catalog"
)]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "SKILLCURVE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "SKILLCURVE_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank skills by projected level after a number of years.
    Project(ProjectArgs),
    /// Validate a catalog and report how many skills it defines.
    Validate(CatalogArgs),
    /// Average current and projected levels per category.
    Categories(CategoriesArgs),
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// TOML skill catalog; the embedded default is used when omitted.
    #[arg(long, env = "SKILLCURVE_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ProjectArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Years of experience to project (0-10).
    #[arg(long, default_value_t = DEFAULT_YEARS, value_parser = parse_years)]
    years: f64,

    /// Only show the N highest projected skills.
    #[arg(long)]
    top: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct CategoriesArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[arg(long, default_value_t = DEFAULT_YEARS, value_parser = parse_years)]
    years: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Project(args) => run_project(&args),
        Command::Validate(args) => run_validate(&args),
        Command::Categories(args) => run_categories(&args),
    }
}

fn run_project(args: &ProjectArgs) -> Result<()> {
    let registry = open_registry(args.catalog.catalog.as_deref())?;
    let table = ProjectionTable::compute(&registry, args.years);
    let limit = resolve_top(args.top, table.len())?;
    let rows = table
        .top_n(limit)
        .with_context(|| format!("cannot select top {limit} skills"))?;

    info!(
        "event=cli_project module=cli status=ok years={} skills={} shown={}",
        table.elapsed(),
        table.len(),
        rows.len()
    );

    let output = match args.format {
        OutputFormat::Table => render::projection_table(table.elapsed(), rows),
        OutputFormat::Json => render::projection_json(table.elapsed(), rows)?,
    };
    println!("{output}");
    Ok(())
}

fn run_validate(args: &CatalogArgs) -> Result<()> {
    let registry = open_registry(args.catalog.as_deref())?;
    println!(
        "catalog ok: {} skills in {} categories (ceiling policy: {})",
        registry.len(),
        registry.categories().len(),
        registry.ceiling_policy().as_str()
    );
    Ok(())
}

fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let registry = open_registry(args.catalog.catalog.as_deref())?;
    let table = ProjectionTable::compute(&registry, args.years);
    let summaries = table.categories();

    let output = match args.format {
        OutputFormat::Table => render::category_table(table.elapsed(), &summaries),
        OutputFormat::Json => render::category_json(table.elapsed(), &summaries)?,
    };
    println!("{output}");
    Ok(())
}

fn open_registry(catalog: Option<&Path>) -> Result<SkillRegistry> {
    match catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => builtin_registry().context("embedded catalog is invalid"),
    }
}

fn parse_years(raw: &str) -> std::result::Result<f64, String> {
    let years: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !years.is_finite() || !(0.0..=MAX_YEARS).contains(&years) {
        return Err(format!("years must be between 0 and {MAX_YEARS}, got {raw}"));
    }
    Ok(years)
}

/// Applies the chart minimum on top of the core `1..=len` range.
fn resolve_top(requested: Option<usize>, available: usize) -> Result<usize> {
    let Some(top) = requested else {
        return Ok(available);
    };
    let minimum = MIN_TOP_N.min(available);
    if top < minimum {
        bail!("--top must be at least {minimum}, got {top}");
    }
    if top > available {
        bail!("--top must be at most {available}, got {top}");
    }
    Ok(top)
}
