//! CLI argument definitions for pubgate.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "pubgate",
    version,
    about = "Configure Maven publications and skip versions that are already published",
    long_about = "pubgate configures a Maven publication for every member of a multi-module \
                  build, fills in its POM from gradle.properties, and uploads it to the \
                  configured repository unless that exact version is already there."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set a project property, overriding gradle.properties (repeatable)
    #[arg(short = 'P', value_name = "KEY=VALUE", global = true)]
    pub properties: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the gated publish tasks
    Publish {
        /// Only publish this workspace member
        #[arg(short, long)]
        module: Option<String>,
        /// Check the gate and report, but upload nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Render publication POMs
    Pom {
        /// Only render this workspace member
        #[arg(short, long)]
        module: Option<String>,
        /// Write POMs here instead of each member's build directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which publications already exist in the repository
    Status {
        /// Only check this workspace member
        #[arg(short, long)]
        module: Option<String>,
    },

    /// Show project shapes, publications and publish tasks
    Plan {
        /// Output format
        #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
        format: PlanFormat,
    },

    /// Show the resolved repository credentials
    Env {
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Text,
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
