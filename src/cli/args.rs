use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        BoolishValueParser, Styles,
        styling::{AnsiColor, Effects},
    },
};
use log::LevelFilter;

use vitrin::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("vitrin {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "vitrin",
    version,
    long_version = long_version(),
    about = "Interactive terminal showcase for assistant profiles",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `vitrin` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "VITRIN_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "Browse the profiles in this catalog file (default: configured catalog)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        long,
        help = "Browse the built-in sample catalog instead of a file (default: disabled)"
    )]
    pub(crate) sample: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        long,
        value_name = "LABEL",
        help = "Start with one category selected (default: all)"
    )]
    pub(crate) category: Option<String>,
    #[arg(
        long = "public-only",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Show only profiles marked public (default: disabled)"
    )]
    pub(crate) public_only: Option<bool>,
    #[arg(
        short = 's',
        long,
        value_enum,
        help = "Choose the initial row order (default: recent)"
    )]
    pub(crate) sort: Option<SortArg>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: midnight)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: vitrin)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long = "share-command",
        value_delimiter = ',',
        value_name = "CMD",
        help = "Comma-separated command that presents the share surface (default: none)"
    )]
    pub(crate) share_command: Option<Vec<String>>,
    #[arg(
        long = "osc52",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Copy through the terminal with an OSC 52 sequence (default: enabled)"
    )]
    pub(crate) osc52: Option<bool>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Maximum level captured by the log pane (default: info)"
    )]
    pub(crate) log_level: Option<LevelFilter>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
/// Row orders accepted via the command line.
pub(crate) enum SortArg {
    Recent,
    Alphabetical,
}

impl SortArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortArg::Recent => "recent",
            SortArg::Alphabetical => "alphabetical",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
