//! Configuration management command.

use crate::commands::common::config_file;
use clap::{Args, Subcommand};
use clipscope_config::{AnalysisConfig, ensure_user_config_dir, user_config_path};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration
    Init {
        /// Destination (defaults to the user config file)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the user config file location
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = match config_file(config_path) {
                Some(path) => AnalysisConfig::load_validated(&path)?,
                None => AnalysisConfig::default(),
            };
            print!("{}", config.to_toml()?);
        }

        ConfigCommand::Init { path, force } => {
            let path = match path {
                Some(path) => path,
                None => {
                    ensure_user_config_dir()?;
                    user_config_path()
                }
            };

            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }

            AnalysisConfig::default().save(&path)?;
            tracing::info!(path = %path.display(), "wrote default config");
            println!("Wrote {}", path.display());
        }

        ConfigCommand::Path => {
            println!("{}", user_config_path().display());
        }
    }

    Ok(())
}
