use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;

use grove::action::Action;
use grove::commands::{list, new, switch};
use grove::config::Config;
use grove::git;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "grove")]
#[command(about = "Per-branch git worktree switcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch to a branch's worktree, creating it on demand.
    /// With no branch, print the worktree listing.
    #[command(visible_alias = "switch-or-create")]
    Switch {
        /// Branch to resolve (may be remote-qualified, e.g. origin/fix)
        branch: Option<String>,
    },

    /// Create a new branch off the current HEAD in a fresh worktree
    #[command(visible_alias = "create-new")]
    New {
        /// Name of the branch to create
        branch: Option<String>,
    },

    /// List registered worktrees
    List {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Diagnostics go to stderr only: stdout carries the `cd` protocol line
/// the shell wrapper evaluates.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grove=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands, config: &Config) -> Result<Action> {
    let repo_root = git::repo_root(&std::env::current_dir()?)?;

    match command {
        Commands::Switch { branch } => switch::execute(branch, &repo_root, config),
        Commands::New { branch } => new::execute(branch, &repo_root, config),
        Commands::List { json } => list::execute(json, &repo_root),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::from_env();

    let code = match run(cli.command, &config) {
        Ok(action) => {
            let stdout = io::stdout();
            let stderr = io::stderr();
            action
                .render(&config, &mut stdout.lock(), &mut stderr.lock())
                .unwrap_or_else(|err| {
                    eprintln!("{} {err:#}", "✗".red().bold());
                    1
                })
        }
        Err(err) => {
            eprintln!("{} {err:#}", "✗".red().bold());
            1
        }
    };

    std::process::exit(code);
}
