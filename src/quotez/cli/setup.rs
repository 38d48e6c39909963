use clap::{Parser, ValueEnum};
use quotez::config::DisplayStyle;
use quotez::filter::MatchMode;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MatchArg {
    /// Whole tag or author, ignoring case
    Exact,
    /// Any part of the tag or author, ignoring case
    Partial,
}

impl From<MatchArg> for MatchMode {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Exact => MatchMode::Exact,
            MatchArg::Partial => MatchMode::Partial,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Plain,
    Bordered,
}

impl From<StyleArg> for DisplayStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Plain => DisplayStyle::Plain,
            StyleArg::Bordered => DisplayStyle::Bordered,
        }
    }
}

/// Precedence when several modes are requested: --version, --add, --tag,
/// --author, then a random quote.
#[derive(Parser, Debug)]
#[command(name = "quotez", bin_name = "quotez", version = get_version())]
#[command(about = "Print a random quote from your collection", long_about = None)]
pub struct Cli {
    /// Path to the quotes file (defaults to quotes.json in the config dir)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show quotes with this tag
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Show quotes by this author
    #[arg(short, long, value_name = "AUTHOR")]
    pub author: Option<String>,

    /// How --tag and --author are compared
    #[arg(short, long = "match", value_enum, default_value_t = MatchArg::Exact)]
    pub match_mode: MatchArg,

    /// Show one random match instead of every match
    #[arg(long)]
    pub one: bool,

    /// Add a new quote interactively
    #[arg(long)]
    pub add: bool,

    /// Output style (overrides the config file)
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Wrap to this many columns instead of the terminal width
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Seed for the random pick, for repeatable output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
