//! beanweave CLI - Method synthesis for schema-generated Java classes
//!
//! Commands:
//! - `beanweave generate` - Run synthesis passes and write Java sources
//! - `beanweave plugins` - List the available passes
//! - `beanweave check` - Validate a class model file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "beanweave")]
#[command(author, version, about = "Method synthesis for schema-generated Java classes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run synthesis passes over a class model and write Java sources
    Generate {
        /// Class model file (JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Output directory for the generated sources
        #[arg(short, long)]
        output: PathBuf,

        /// Path to beanweave.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pass option to enable, e.g. Xph-equalshashcode (repeatable)
        #[arg(short, long = "pass", allow_hyphen_values = true)]
        passes: Vec<String>,

        /// Interface for -Xph-implements, e.g. java.io.Serializable (repeatable,
        /// or separated by ',' or ';')
        #[arg(long = "implements")]
        implements: Vec<String>,

        /// Log at DEBUG level
        #[arg(long)]
        debug: bool,

        /// Write the run report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List the available passes
    Plugins,

    /// Validate a class model file
    Check {
        /// Class model file (JSON)
        #[arg(short, long)]
        model: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            model,
            output,
            config,
            passes,
            implements,
            debug,
            report,
        } => {
            generate::run(generate::GenerateArgs {
                model,
                output,
                config,
                passes,
                implements,
                debug,
                report,
            })?;
        }
        Commands::Plugins => {
            list_passes();
        }
        Commands::Check { model } => {
            check::run(&model)?;
        }
    }

    Ok(())
}

fn list_passes() {
    println!("Available passes:");
    for pass in beanweave_synth::Engine::new().synthesizers() {
        println!("  -{:<26} {}", pass.option_name(), pass.usage());
    }
}
