//! CLI for the risk engine settings
//!
//! # Usage
//!
//! ```bash
//! riskengine-settings                      # same as `show`
//! riskengine-settings show --format json
//! riskengine-settings check
//! riskengine-settings vars
//! ```

use clap::{Parser, Subcommand};

use riskengine_settings::cli::{
    OutputFormat, check::run_check, init_logging, show::{ShowArgs, run_show}, vars::run_vars,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "riskengine-settings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved settings
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the database password instead of masking it
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Exit non-zero if the environment does not resolve
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the environment variables that are read, with defaults
    Vars,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Show {
            format,
            reveal_secrets,
        }) => run_show(ShowArgs {
            format,
            reveal_secrets,
        }),
        Some(Commands::Check { format }) => {
            if !run_check(format) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Vars) => {
            run_vars();
            Ok(())
        }
        None => run_show(ShowArgs::default()),
    }
}
