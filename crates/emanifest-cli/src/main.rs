//! # emanifest CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// e-Manifest toolchain.
///
/// Validates draft manifests, assembles submittable documents, and checks
/// lifecycle transitions for the hazardous-waste manifest core.
#[derive(Parser, Debug)]
#[command(name = "emanifest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the field validation pass over a draft manifest.
    Validate(emanifest_cli::validate::ValidateArgs),
    /// Assemble a draft into a submittable document.
    Assemble(emanifest_cli::assemble::AssembleArgs),
    /// Check a lifecycle transition.
    Transition(emanifest_cli::transition::TransitionArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let ok = match cli.command {
        Commands::Validate(args) => emanifest_cli::validate::run(&args)?,
        Commands::Assemble(args) => emanifest_cli::assemble::run(&args)?,
        Commands::Transition(args) => emanifest_cli::transition::run(&args)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
