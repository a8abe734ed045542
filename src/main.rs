//! Buildx Lane CLI
//!
//! Entry point for the `buildx-lane` command-line tool. Reads
//! already-captured `docker buildx` output (inspection text, metadata
//! files) and prints the structured form; it never runs docker or
//! buildx itself.

use buildx_lane::{parse_inspect, BuildMetadata};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io, process};

#[derive(Parser)]
#[command(name = "buildx-lane")]
#[command(about = "Builder inspection and build-option resolution for buildx CI lanes", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse captured `buildx inspect` output into a builder record
    Inspect {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// File with the captured output (default: stdin)
        file: Option<PathBuf>,
    },

    /// Project result keys out of a build metadata file
    Metadata {
        /// Print a single metadata key instead of the summary
        #[arg(long, short = 'k')]
        key: Option<String>,

        /// Path to the metadata JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Inspect { human, file } => cmd_inspect(human, file),
        Commands::Metadata { key, file } => cmd_metadata(key, &file),
    };
    process::exit(code);
}

fn read_input(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn cmd_inspect(human: bool, file: Option<PathBuf>) -> i32 {
    let text = match read_input(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading inspect output: {}", e);
            return 1;
        }
    };

    let builder = parse_inspect(&text);
    if human {
        println!("Builder: {}", builder.name.as_deref().unwrap_or("<unnamed>"));
        if let Some(driver) = &builder.driver {
            println!("Driver:  {}", driver);
        }
        if let Some(last_activity) = &builder.last_activity {
            println!("Last activity: {}", last_activity.to_rfc3339());
        }
        for node in &builder.nodes {
            println!();
            println!("Node: {}", node.name.as_deref().unwrap_or("<unnamed>"));
            if let Some(endpoint) = &node.endpoint {
                println!("  endpoint:  {}", endpoint);
            }
            if let Some(status) = &node.status {
                println!("  status:    {}", status);
            }
            if let Some(buildkit) = &node.buildkit_version {
                println!("  buildkit:  {}", buildkit);
            }
            if let Some(platforms) = &node.platforms {
                println!("  platforms: {}", platforms);
            }
        }
        0
    } else {
        match serde_json::to_string_pretty(&builder) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                1
            }
        }
    }
}

fn cmd_metadata(key: Option<String>, file: &PathBuf) -> i32 {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading metadata file: {}", e);
            return 1;
        }
    };
    let metadata: BuildMetadata = match content.parse() {
        Ok(metadata) => metadata,
        Err(e) => {
            eprintln!("Error parsing metadata: {}", e);
            return 1;
        }
    };

    match key {
        Some(key) => match metadata.get(&key) {
            Some(value) => {
                println!("{}", value);
                0
            }
            None => {
                eprintln!("Key '{}' not found in metadata.", key);
                1
            }
        },
        None => {
            let summary = serde_json::json!({
                "ref": metadata.build_ref(),
                "digest": metadata.digest(),
                "config_digest": metadata.config_digest(),
            });
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    1
                }
            }
        }
    }
}
