use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use log::LevelFilter;
use serde::Deserialize;

use vitrin::app_dirs;
use vitrin::{Controls, SortOrder};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    catalog: CatalogSection,
    controls: ControlsSection,
    ui: UiSection,
    share: ShareSection,
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ControlsSection {
    query: Option<String>,
    category: Option<String>,
    public_only: Option<bool>,
    sort: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ShareSection {
    command: Option<Vec<String>>,
    osc52: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
}

/// Where the profiles come from for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    /// The built-in sample catalog.
    Sample,
    /// A catalog file on disk, canonicalized.
    File(PathBuf),
}

pub(crate) struct ResolvedConfig {
    pub(crate) catalog: CatalogSource,
    pub(crate) controls: Controls,
    pub(crate) theme: Option<String>,
    pub(crate) title: String,
    pub(crate) share_command: Vec<String>,
    pub(crate) osc52: bool,
    pub(crate) log_level: LevelFilter,
}

impl ResolvedConfig {
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        match &self.catalog {
            CatalogSource::Sample => println!("  Catalog: built-in sample"),
            CatalogSource::File(path) => println!("  Catalog: {}", path.display()),
        }
        if !self.controls.query.is_empty() {
            println!("  Initial query: {}", self.controls.query);
        }
        println!("  Category: {}", self.controls.category);
        println!("  Public only: {}", bool_to_word(self.controls.public_only));
        println!("  Sort: {}", self.controls.sort);
        println!(
            "  UI theme: {}",
            self.theme.as_deref().unwrap_or("(use the library default)")
        );
        println!("  Prompt title: {}", self.title);
        match self.share_command.as_slice() {
            [] => println!("  Share command: (none)"),
            argv => println!("  Share command: {}", argv.join(" ")),
        }
        println!("  OSC 52 copy: {}", bool_to_word(self.osc52));
        println!("  Log level: {}", self.log_level);
    }
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli.sample, installed_catalog())
}

/// A drop-in catalog under the data directory, when one is installed.
fn installed_catalog() -> Option<PathBuf> {
    let path = app_dirs::default_catalog_path().ok()?;
    if path.is_file() {
        fs::canonicalize(path).ok()
    } else {
        None
    }
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("vitrin")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".vitrin.toml"));
        files.push(current_dir.join("vitrin.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.catalog.clone() {
            self.catalog.path = Some(path);
        }
        if let Some(query) = cli.query.clone() {
            self.controls.query = Some(query);
        }
        if let Some(category) = cli.category.clone() {
            self.controls.category = Some(category);
        }
        if let Some(value) = cli.public_only {
            self.controls.public_only = Some(value);
        }
        if let Some(order) = cli.sort {
            self.controls.sort = Some(order.as_str().to_string());
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(argv) = cli.share_command.clone() {
            self.share.command = Some(argv);
        }
        if let Some(value) = cli.osc52 {
            self.share.osc52 = Some(value);
        }
        if let Some(level) = cli.log_level {
            self.log.level = Some(level.to_string());
        }
    }

    fn resolve(self, use_sample: bool, installed: Option<PathBuf>) -> Result<ResolvedConfig> {
        let catalog = if use_sample {
            CatalogSource::Sample
        } else {
            match (self.catalog.path, installed) {
                (Some(path), _) => CatalogSource::File(resolve_catalog_path(path)?),
                (None, Some(path)) => CatalogSource::File(path),
                (None, None) => CatalogSource::Sample,
            }
        };

        let mut controls = Controls::new();
        if let Some(query) = self.controls.query {
            controls.query = query;
        }
        if let Some(category) = self.controls.category {
            controls.category = category;
        }
        controls.public_only = self.controls.public_only.unwrap_or(false);
        if let Some(order) = self.controls.sort {
            controls.sort = parse_order(&order)?;
        }

        let theme = self.ui.theme;
        let title = self.ui.title.unwrap_or_else(|| "vitrin".to_string());

        let share_command = self
            .share
            .command
            .map(sanitize_command)
            .filter(|argv| !argv.is_empty())
            .unwrap_or_default();
        let osc52 = self.share.osc52.unwrap_or(true);

        let log_level = match self.log.level {
            Some(level) => parse_level(&level)?,
            None => LevelFilter::Info,
        };

        Ok(ResolvedConfig {
            catalog,
            controls,
            theme,
            title,
            share_command,
            osc52,
            log_level,
        })
    }
}

fn resolve_catalog_path(path: PathBuf) -> Result<PathBuf> {
    let mut path = path;
    if path.is_relative() {
        path = env::current_dir()
            .context("failed to resolve current directory for the catalog path")?
            .join(path);
    }
    let path = fs::canonicalize(&path)
        .with_context(|| format!("failed to canonicalize catalog path {}", path.display()))?;

    let metadata = fs::metadata(&path)
        .with_context(|| format!("failed to inspect catalog file {}", path.display()))?;
    ensure!(metadata.is_file(), "the catalog path must be a file");

    Ok(path)
}

fn parse_order(value: &str) -> Result<SortOrder> {
    SortOrder::from_str(value).map_err(|err| anyhow!(err))
}

fn parse_level(value: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(value.trim())
        .map_err(|_| anyhow!("unknown log level '{}'", value.trim()))
}

fn sanitize_command(argv: Vec<String>) -> Vec<String> {
    argv.into_iter()
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
