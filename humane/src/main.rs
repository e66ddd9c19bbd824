use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod context;
mod format;

use commands::text::Transform;

/// Humane - humanize dates and text
///
/// Renders durations, relative dates and date ranges the way people write
/// them, and tidies text with title case, widow control and slugs.
#[derive(Parser, Debug)]
#[command(name = "humane")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    /// Output format: pretty, json, yaml (defaults to style.format from config)
    #[arg(short, long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a duration in seconds, e.g. "3 hours 4 minutes"
    Interval {
        /// Duration in seconds (sign is ignored)
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
        /// Number of units to show
        #[arg(short, long)]
        granularity: Option<i64>,
    },
    /// Describe a date relative to now, e.g. "4 days ago"
    Friendly {
        /// Date text or epoch seconds
        date: String,
        /// Age in seconds after which the absolute date is shown
        #[arg(long)]
        max_seconds: Option<i64>,
        /// Layout for absolute dates, e.g. "jS F Y"
        #[arg(long)]
        format: Option<String>,
        /// Interpret and render dates in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },
    /// Render a date range, e.g. "5th–20th January"
    Range {
        /// Start date text or epoch seconds
        start: String,
        /// End date text or epoch seconds
        end: String,
        /// Use abbreviated month names
        #[arg(long)]
        abbreviated: bool,
        /// Interpret and render dates in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },
    /// Render a date with a token layout, e.g. "l jS F Y"
    Date {
        /// Date text or epoch seconds
        date: String,
        /// Token layout
        layout: String,
        /// Interpret and render dates in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },
    /// Convert text to title case (reads stdin lines when no text is given)
    Title {
        /// Text to convert
        text: Vec<String>,
    },
    /// Join the last two words with a non-breaking space (reads stdin lines when no text is given)
    Widont {
        /// Text to convert
        text: Vec<String>,
    },
    /// Convert text to a URL slug (reads stdin lines when no text is given)
    Slug {
        /// Text to convert
        text: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Get a configuration value (or display all if no key provided)
    Get {
        /// Configuration key to get (e.g., date.granularity)
        key: Option<String>,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set (e.g., date.month_format)
        key: String,
        /// Value to set
        value: String,
    },
    /// Print the configuration file path
    Path,
}

fn setup_logging(verbosity: context::VerbosityLevel) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    setup_logging(verbosity);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(format::ColorChoice::from(cli.color.as_str()), verbosity);
    let fmt = cli
        .output
        .as_deref()
        .map(format::OutputFormat::from)
        .unwrap_or(ctx.config.style.format);
    tracing::debug!(verbosity = ?ctx.verbosity, output = %fmt, "starting humane");

    match cli.command {
        Commands::Interval {
            seconds,
            granularity,
        } => commands::date::handle_interval(&ctx, seconds, granularity, fmt),
        Commands::Friendly {
            date,
            max_seconds,
            format,
            utc,
        } => commands::date::handle_friendly(
            &ctx,
            &date,
            max_seconds,
            format.as_deref(),
            utc,
            fmt,
        ),
        Commands::Range {
            start,
            end,
            abbreviated,
            utc,
        } => commands::date::handle_range(&ctx, &start, &end, abbreviated, utc, fmt),
        Commands::Date { date, layout, utc } => {
            commands::date::handle_date(&ctx, &date, &layout, utc, fmt)
        }
        Commands::Title { text } => {
            commands::text::handle_text(&ctx, Transform::Title, &text, fmt)
        }
        Commands::Widont { text } => {
            commands::text::handle_text(&ctx, Transform::Widont, &text, fmt)
        }
        Commands::Slug { text } => commands::text::handle_text(&ctx, Transform::Slug, &text, fmt),
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx),
            ConfigCommands::Get { key } => commands::config::handle_get(&ctx, key.as_deref(), fmt),
            ConfigCommands::Set { key, value } => {
                commands::config::handle_set(&ctx, &key, &value)
            }
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
