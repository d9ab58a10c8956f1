// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vecgen_cli::commands::{diff, digest, inspect, sample, verify};

#[derive(Parser)]
#[command(name = "vecgen")]
#[command(about = "vecgen - Forensic tooling for conformance test vectors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a vector file.
    Inspect {
        vector_path: PathBuf,
    },
    /// Check snapshot block hashes, root set and closure.
    Verify {
        vector_path: PathBuf,
    },
    /// Print the BLAKE3 fingerprint of a vector as JSON.
    Digest {
        vector_path: PathBuf,
    },
    /// Compare two vectors, ignoring their ids.
    Diff {
        a: PathBuf,
        b: PathBuf,
    },
    /// Generate the reference transfer vector.
    Sample {
        /// Output file
        #[arg(long, short)]
        out: PathBuf,

        /// Vector id
        #[arg(long, default_value = "transfer-ok")]
        id: String,

        /// Network variant name (defaults to the configured one)
        #[arg(long)]
        network: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "vecgen_kernel=info,vecgen_persistence=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { vector_path } => inspect::run(&vector_path),
        Commands::Verify { vector_path } => verify::run(&vector_path),
        Commands::Digest { vector_path } => digest::run(&vector_path).map(|_| ()),
        Commands::Diff { a, b } => {
            if diff::run(&a, &b)? {
                Ok(())
            } else {
                anyhow::bail!("vectors drifted")
            }
        }
        Commands::Sample { out, id, network } => sample::run(&out, &id, network),
    }
}
