//! # Roster Match CLI (`roster`)
//!
//! The `roster` binary answers staffing queries against an employee dataset,
//! either one-off from the command line or through the HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! roster --config ./config/roster.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `roster chat "<query>"` | Rank employees for a free-text query |
//! | `roster hints "<query>"` | Show the hints extracted from a query |
//! | `roster search` | Exact-match directory search |
//! | `roster serve` | Start the HTTP server |
//! | `roster completions <shell>` | Print a shell completion script |

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use roster_match::directory::DirectoryFilter;
use roster_match::{chat, config, dataset, directory, logging, server};

/// Roster Match CLI — free-text staffing queries over an employee roster.
#[derive(Parser)]
#[command(
    name = "roster",
    about = "Roster Match — find people who match a description",
    version,
    long_about = "Roster Match extracts hints (skills, minimum experience, domain, availability) \
    from a free-text query, scores every employee profile against them, and returns the best \
    matches with a short written summary."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/roster.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv). `RUST_LOG` overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank employees for a free-text query.
    Chat {
        /// The query, e.g. "python developer with 3+ years in retail".
        query: String,

        /// Maximum number of candidates. Defaults to `[retrieval].default_top_k`.
        #[arg(long, allow_negative_numbers = true)]
        top_k: Option<i64>,

        /// Print the full response (query, candidates, answer) as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the hints extracted from a query as JSON.
    Hints {
        query: String,
    },

    /// Exact-match directory search.
    ///
    /// All given constraints must hold. With no constraints, every employee
    /// is listed.
    Search {
        /// Required skill (repeatable; all must match).
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Minimum years of experience (inclusive).
        #[arg(long, allow_negative_numbers = true)]
        min_experience: Option<i64>,

        /// Availability state (`available`, `busy`, `notice`).
        #[arg(long)]
        availability: Option<String>,

        /// Print matches as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP server on `[server].bind`.
    Serve,

    /// Print a shell completion script to stdout.
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that don't require config
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "roster", &mut std::io::stdout());
        return Ok(());
    }

    logging::init_tracing(cli.verbose);

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Chat { query, top_k, json } => {
            let roster = dataset::load_from_config(&cfg)?;
            let top_k = top_k.unwrap_or(cfg.retrieval.default_top_k);
            chat::run_chat(&roster, &query, top_k, json)?;
        }
        Commands::Hints { query } => {
            let roster = dataset::load_from_config(&cfg)?;
            chat::run_hints(&roster, &query)?;
        }
        Commands::Search {
            skills,
            min_experience,
            availability,
            json,
        } => {
            let roster = dataset::load_from_config(&cfg)?;
            let filter = DirectoryFilter {
                skills,
                min_experience,
                availability,
            };
            directory::run_directory_search(&roster, &filter, json)?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
