//! SkipKV CLI
//!
//! Command-line interface over a snapshot file. Each invocation loads the
//! snapshot into a fresh list, applies one operation, and dumps the list
//! back when it mutated.

use clap::{Parser, Subcommand};
use skipkv::{Config, SkipList};
use tracing_subscriber::{fmt, EnvFilter};

/// SkipKV CLI
#[derive(Parser, Debug)]
#[command(name = "skipkv-cli")]
#[command(about = "CLI for the SkipKV snapshot-backed key-value list")]
#[command(version)]
struct Args {
    /// Snapshot file to operate on
    #[arg(short, long, default_value = "./skipkv.snapshot")]
    file: String,

    /// Maximum node level of the list
    #[arg(short, long, default_value = "16")]
    max_height: usize,

    /// Snapshot field delimiter
    #[arg(short, long, default_value = ":")]
    delimiter: char,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair (fails if the key exists)
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all entries in key order
    List,

    /// Print the number of entries
    Len,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,skipkv=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .max_height(args.max_height)
        .delimiter(args.delimiter)
        .build();

    let list: SkipList<String, String> = match SkipList::with_config(config) {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // A missing snapshot just means an empty list
    if std::path::Path::new(&args.file).exists() {
        if let Err(e) = list.load(&args.file) {
            tracing::error!("Failed to load snapshot {}: {}", args.file, e);
            std::process::exit(1);
        }
    }

    let result = run(&args, &list);
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, list: &SkipList<String, String>) -> skipkv::Result<()> {
    match &args.command {
        Commands::Get { key } => match list.get(key) {
            Some(value) => println!("{value}"),
            None => println!("(not found)"),
        },
        Commands::Set { key, value } => {
            list.insert(key.clone(), value.clone())?;
            list.dump(&args.file)?;
        }
        Commands::Del { key } => {
            list.remove(key)?;
            list.dump(&args.file)?;
        }
        Commands::List => {
            let stdout = std::io::stdout();
            list.dump_to(stdout.lock())?;
        }
        Commands::Len => println!("{}", list.len()),
    }
    Ok(())
}
