mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::sla::SlaSubcommand;

#[derive(Parser)]
#[command(
    name = "limsflow",
    about = "Inspect workflow status machines, validate transitions, and report SLA compliance",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entity types and their status machines
    Entities,

    /// Show every status of a machine (label, description, color, final flag)
    Statuses {
        /// Entity type (e.g. SAMPLE, ORDER, SEQUENCING_RUN)
        entity: String,
    },

    /// Show what a status can become next
    Transitions {
        /// Entity type
        entity: String,
        /// Current status value
        status: String,
    },

    /// Validate a status-change request (exit code 1 when denied)
    Check {
        /// Entity type
        entity: String,
        /// Current status value
        from: String,
        /// Requested status value
        to: String,
        /// Actor role; when given, role gates apply
        #[arg(long, env = "LIMSFLOW_ROLE")]
        role: Option<String>,
    },

    /// SLA compliance reporting
    Sla {
        #[command(subcommand)]
        subcommand: SlaSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Entities => cmd::entities::run(cli.json),
        Commands::Statuses { entity } => cmd::statuses::run(&entity, cli.json),
        Commands::Transitions { entity, status } => {
            cmd::transitions::run(&entity, &status, cli.json)
        }
        Commands::Check {
            entity,
            from,
            to,
            role,
        } => cmd::check::run(&entity, &from, &to, role.as_deref(), cli.json),
        Commands::Sla { subcommand } => cmd::sla::run(subcommand, cli.json),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
