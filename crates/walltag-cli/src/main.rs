use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;
use walltag_core::Identity;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "walltag", version, about = "Track tags for wallpapers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the database (default: ~/.local/share/walltag.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

/// Which wallpaper a command applies to.
#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
struct Target {
    /// Wallpaper file; the MD5 hash of its contents is used as the key
    #[arg(short, long)]
    filename: Option<PathBuf>,

    /// Explicit key to store tags under
    #[arg(short, long)]
    key: Option<String>,
}

impl Target {
    fn into_identity(self) -> Result<Identity> {
        match (self.key, self.filename) {
            (Some(key), None) => Ok(Identity::Key(key)),
            (None, Some(path)) => Ok(Identity::File(path)),
            _ => anyhow::bail!("exactly one of --key or --filename is required"),
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Set a tag value for a wallpaper
    ///
    /// The value is stored as given, even if it is not one of the category's
    /// known values. Prints the value written.
    Set {
        #[command(flatten)]
        target: Target,

        /// Tag category: color, people or time
        category: String,

        /// Value to store
        tag: String,
    },
    /// Show the tags stored for a wallpaper
    ///
    /// Without --category, prints every column as a JSON object ({} when
    /// nothing is stored).
    Get {
        #[command(flatten)]
        target: Target,

        /// Only print this category's value
        #[arg(long)]
        category: Option<String>,
    },
    /// Advance a tag to the next value in its category
    ///
    /// color: warm -> cool -> greyscale
    /// people: many -> few -> none
    /// time: night -> day -> dawn/dusk
    ///
    /// Wraps around at the end. A missing or unrecognised value moves to the
    /// second value of the set.
    Cycle {
        #[command(flatten)]
        target: Target,

        /// Tag category: color, people or time
        category: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Print an example config file
    Example,
    /// Write the example config file if none exists
    Init,
}

fn db_path(cli_db: Option<PathBuf>) -> Result<PathBuf> {
    let path = config::resolve_db_path(cli_db)?;
    tracing::debug!(db = %path.display(), "using tag database");
    Ok(path)
}

/// Execute a parsed command line, writing command output to `out`.
///
/// Without a subcommand this prints help and never touches the database.
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().write_help(out)?;
        return Ok(());
    };

    match command {
        Commands::Set {
            target,
            category,
            tag,
        } => commands::run_set(
            &db_path(cli.db)?,
            &target.into_identity()?,
            &category,
            &tag,
            out,
        )?,
        Commands::Get { target, category } => commands::run_get(
            &db_path(cli.db)?,
            &target.into_identity()?,
            category.as_deref(),
            out,
        )?,
        Commands::Cycle { target, category } => {
            commands::run_cycle(&db_path(cli.db)?, &target.into_identity()?, &category)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse(), &mut std::io::stdout().lock())
}
