use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lexguard",
    version,
    about = "Compile natural-language policy statements and judge access inquiries"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "lexguard.yaml")]
    pub config: PathBuf,

    /// Path to the policy seed file (overrides config file setting)
    #[arg(short, long)]
    pub policies: Option<PathBuf>,

    /// Path to the decision log (overrides config file setting)
    #[arg(long)]
    pub decision_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a policy statement into a stored policy and exchange document
    Compile {
        /// Identifier for the compiled policy
        #[arg(long, default_value = "policy-1")]
        id: String,

        /// The natural-language policy statement
        text: String,
    },

    /// Judge a concrete access inquiry against the seeded policies
    Check {
        #[arg(long)]
        subject: String,

        #[arg(long)]
        action: String,

        #[arg(long)]
        resource: String,

        #[arg(long)]
        condition: String,
    },

    /// Compile a statement and immediately judge the inquiry built from the
    /// same entities (the classic end-to-end demonstration; trivially
    /// allows under equality matching)
    Simulate {
        /// The natural-language policy statement
        text: String,
    },
}
