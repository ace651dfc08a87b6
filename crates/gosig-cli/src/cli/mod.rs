use clap::Parser;
use gosig_config::{ConfigOverrides, DiscoveryOverrides, FormatOverrides, split_list};

pub mod global;

pub use global::OutputFormat;

const AFTER_HELP: &str = "\
Paths ending in /... are scanned recursively; a directory without the marker
lists only its own files.

Errors: every path is attempted. A file that cannot be read or parsed is
reported on stderr and skipped, the remaining paths are still processed, and
gosig exits with status 1 once all paths are done.

Settings also come from ~/.config/gosig/config.toml, ./.gosig.toml and
GOSIG_* environment variables; flags win. GOSIG_LOG sets the log filter.";

/// Top-level CLI parser for the `gosig` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gosig",
    version,
    about = "Print one-line signatures of top-level Go declarations",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Files or directories; append /... to recurse
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,

    /// Include unexported declarations
    #[arg(long)]
    pub private: bool,

    /// Omit the values of var and const declarations
    #[arg(long)]
    pub no_values: bool,

    /// Truncate values longer than this many characters [default: 30]
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Comma-separated file extensions to scan [default: .go]
    #[arg(long, value_name = "LIST")]
    pub ext: Option<String>,

    /// Comma-separated file name suffixes to skip [default: _test.go]
    #[arg(long, value_name = "LIST")]
    pub exclude: Option<String>,

    /// Honor .gitignore files while walking directories
    #[arg(long)]
    pub gitignore: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags that were actually given, as a config layer.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            format: FormatOverrides {
                include_private: self.private.then_some(true),
                include_values: self.no_values.then_some(false),
                max_value_length: self.max_length,
            },
            discovery: DiscoveryOverrides {
                extensions: self.ext.as_deref().map(split_list),
                exclude_suffixes: self.exclude.as_deref().map(split_list),
                respect_gitignore: self.gitignore.then_some(true),
            },
        }
    }
}
