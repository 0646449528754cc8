//! filedrops — command-line access to a Filedrops file system.
//!
//! The file system is either a local directory (`--root`, defaulting to the
//! current directory) or built from a TOML settings file (`--config`).
//! Relative paths given to subcommands resolve against the root.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filedrops_core::{Entry, FileSystem, FileSystemConfig, FsEntry, SearchOption};
use tracing_subscriber::EnvFilter;

/// Browse and modify a Filedrops file system
#[derive(Parser, Debug)]
#[command(name = "filedrops")]
#[command(about = "Browse and modify a Filedrops file system", long_about = None)]
#[command(version)]
struct Args {
    /// TOML settings describing the file system
    #[arg(long, value_name = "PATH", global = true, conflicts_with = "root")]
    config: Option<PathBuf>,

    /// Root directory of a local file system (default: current directory)
    #[arg(long, value_name = "PATH", global = true)]
    root: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List files, then directories
    Ls {
        /// Descend into every subdirectory
        #[arg(short, long)]
        recursive: bool,

        /// Only list files whose full path matches this regex
        #[arg(long, value_name = "REGEX")]
        filter: Option<String>,

        path: Option<PathBuf>,
    },
    /// Print a file to stdout
    Cat { path: PathBuf },
    /// Write stdin to a file
    Put {
        path: PathBuf,

        /// Fail instead of creating missing parent directories
        #[arg(long)]
        no_parents: bool,
    },
    /// Delete a file
    Rm { path: PathBuf },
    /// Delete a directory
    Rmdir {
        /// Delete the directory with everything in it
        #[arg(short, long)]
        recursive: bool,

        path: PathBuf,
    },
    /// Create a directory and any missing parents
    Mkdir { path: PathBuf },
    /// Rename a file or directory within its parent
    Mv { path: PathBuf, new_name: String },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_file_system(args: &Args) -> Result<FileSystem> {
    if let Some(path) = &args.config {
        let config = FileSystemConfig::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        return Ok(FileSystem::from_config(&config));
    }
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    Ok(FileSystem::os(root))
}

fn run(args: Args, input: &mut impl Read, out: &mut impl Write) -> Result<()> {
    let fs = open_file_system(&args)?;
    tracing::debug!("opened {fs}");

    match args.command {
        Command::Ls {
            recursive,
            filter,
            path,
        } => {
            let dir = match path {
                Some(path) => fs.construct_directory(path),
                None => fs.working_directory(),
            };
            let option = if recursive {
                SearchOption::AllLevels
            } else {
                SearchOption::ThisLevelOnly
            };
            let entries: Vec<FsEntry> = match filter {
                Some(filter) => dir
                    .get_files_matching(&filter, option)?
                    .into_iter()
                    .map(FsEntry::from)
                    .collect(),
                None => dir.get_entries(option)?,
            };
            for entry in &entries {
                let marker = if entry.is_dir() { 'd' } else { '-' };
                writeln!(out, "{marker} {}", entry.full_name().display())?;
            }
        }
        Command::Cat { path } => {
            let mut file = fs.construct_file(path);
            file.read()
                .with_context(|| format!("failed to read {}", file.full_name().display()))?;
            out.write_all(file.bytes_content().unwrap_or_default())?;
        }
        Command::Put { path, no_parents } => {
            let mut content = Vec::new();
            input.read_to_end(&mut content)?;
            let mut file = fs.construct_file(path);
            file.set_bytes_content(Some(content));
            file.create(!no_parents)
                .with_context(|| format!("failed to write {}", file.full_name().display()))?;
        }
        Command::Rm { path } => {
            fs.construct_file(path).delete()?;
        }
        Command::Rmdir { recursive, path } => {
            fs.construct_directory(path).delete(recursive)?;
        }
        Command::Mkdir { path } => {
            fs.construct_directory(path).create()?;
        }
        Command::Mv { path, new_name } => {
            let renamed = if fs.construct_directory(&path).exists() {
                let mut dir = fs.construct_directory(path);
                dir.rename(&new_name)?;
                dir.full_name().to_path_buf()
            } else {
                let mut file = fs.construct_file(path);
                file.rename(&new_name)?;
                file.full_name().to_path_buf()
            };
            writeln!(out, "{}", renamed.display())?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(args, &mut stdin.lock(), &mut stdout.lock())
}
