use clap::ValueEnum;

/// How signatures are written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `<path>: <signature>` per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}
