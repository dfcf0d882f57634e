use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use tini::Document;

#[derive(Debug, Clone, ValueEnum)]
enum Verbosity {
    Warnings,
    Silent,
    Debug,
}

/// Simple cli tool to inspect and edit .ini files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, value_enum, global = true, default_value_t = Verbosity::Warnings)]
    verbosity: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value of a key
    Get {
        /// File path of the .ini file
        #[arg(short, long)]
        path: PathBuf,

        /// Section name. Use an empty string for keys outside any section.
        #[arg(short, long, default_value = "")]
        section: String,

        /// Key name
        #[arg(short, long)]
        key: String,

        /// Printed when the section or key does not exist
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Set a key, creating the file and section when needed
    Set {
        #[arg(short, long)]
        path: PathBuf,

        #[arg(short, long, default_value = "")]
        section: String,

        #[arg(short, long)]
        key: String,

        #[arg(short, long)]
        value: String,

        /// Fail instead of overwriting an existing key
        #[arg(long)]
        no_replace: bool,
    },
    /// Remove a key, or a whole section when no key is given
    Remove {
        #[arg(short, long)]
        path: PathBuf,

        #[arg(short, long, default_value = "")]
        section: String,

        #[arg(short, long)]
        key: Option<String>,
    },
    /// List sections and their parameter counts
    Sections {
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Print the normalized contents of the file
    Dump {
        #[arg(short, long)]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.verbosity {
        Verbosity::Silent => (),
        Verbosity::Warnings => LoggerBuilder::new().filter(None, LevelFilter::Warn).init(),
        Verbosity::Debug => LoggerBuilder::new().filter(None, LevelFilter::Debug).init(),
    }

    match args.command {
        Command::Get { path, section, key, default } => {
            let document = load(&path)?;
            match (document.find_section(&section).and_then(|found| found.find_parameter(&key)), default) {
                (Some(value), _) => print!("{value}"),
                (None, Some(default)) => print!("{default}"),
                (None, None) => return Err(anyhow!("The given ini file did not contain [{section}] {key}")),
            }
        }
        Command::Set { path, section, key, value, no_replace } => {
            let mut document = if path.exists() { load(&path)? } else { Document::new()? };
            document.add_parameter(&section, &key, &value, !no_replace)?;
            save(&document, &path)?;
        }
        Command::Remove { path, section, key } => {
            let mut document = load(&path)?;
            match key {
                Some(key) => document.remove_parameter(&section, &key)?,
                None => document.remove_section(&section)?,
            }
            save(&document, &path)?;
        }
        Command::Sections { path } => {
            let document = load(&path)?;
            let mut stdout = io::stdout().lock();
            for section in document.sections() {
                writeln!(stdout, "{}\t{}", section.name(), section.parameter_count())?;
            }
        }
        Command::Dump { path } => {
            let document = load(&path)?;
            document.dump(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn warn_on_extension(path: &Path) {
    if path.extension().is_none_or(|extension| extension != "ini") {
        log::warn!("Specified file does not have an .ini extension!");
    }
}

fn load(path: &Path) -> anyhow::Result<Document> {
    warn_on_extension(path);

    // Try to read the file regardless
    Document::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn save(document: &Document, path: &Path) -> anyhow::Result<()> {
    document.save(path).with_context(|| format!("Failed to save {}", path.display()))
}
