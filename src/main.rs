use anyhow::Result;
use clap::{Parser, Subcommand};
use sgit::areas::repository::Repository;
use sgit::error::SgitError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sgit",
    version = "0.1.0",
    about = "A minimal local version-control engine",
    long_about = "sgit stages files, freezes their current content into immutable \
    commits, and reports per-file tracking state relative to the working directory. \
    Commit identifiers are random, not content hashes, and the staging list is \
    append-only: every commit includes all paths ever staged.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory. \
        It fails if any enclosing repository already exists."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage files for commit",
        long_about = "This command appends the given files to the staging list. \
        Directories are expanded recursively, skipping hidden entries; a missing \
        path is reported per file without aborting the batch."
    )]
    Add {
        #[arg(required = true, help = "The paths to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Freeze the staged files into a new commit",
        long_about = "This command snapshots the current content of every staged file \
        into a new immutable commit and moves HEAD to it."
    )]
    Commit,
    #[command(
        name = "status",
        about = "Show per-file tracking state",
        long_about = "This command classifies every visible working-tree file as new, \
        staged, or committed. Committed files print nothing."
    )]
    Status,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        report_fatal(&error);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init => {
            let pwd = std::env::current_dir()?;
            Repository::init(&pwd, &mut std::io::stdout())?
        }
        Commands::Add { paths } => open_repository()?.add(paths)?,
        Commands::Commit => open_repository()?.commit()?,
        Commands::Status => open_repository()?.status()?,
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Ok(Repository::open(&pwd, Box::new(std::io::stdout()))?)
}

/// The single safety net at the dispatch boundary. User-correctable
/// conditions get their own guidance line; everything else collapses
/// into the generic broken-repository message, with the specific cause
/// chain preserved after it.
fn report_fatal(error: &anyhow::Error) {
    match error.downcast_ref::<SgitError>() {
        Some(SgitError::RepositoryAbsent) => {
            eprintln!("No repository found! Create a new one using 'sgit init'");
        }
        Some(SgitError::RepositoryAlreadyExists { .. }) => {
            eprintln!("Repository already exists!");
        }
        _ => {
            tracing::error!(cause = ?error, "repository operation failed");
            eprintln!("FATAL ERROR: repository broken ({:#})", error);
        }
    }
}
