use crate::config::toml_config::TomlConfig;
use crate::core::factorial::FactorialStrategy;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "fn-tour")]
#[command(about = "A tour of small functions: factorial, sum, closures and friends")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Override the output format from the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Compute factorials by recursive descent instead of iteration
    #[arg(long, global = true)]
    pub recursive: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute x!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },
    /// Sum zero or more integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Add two integers with a closure
    Add {
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,
    },
    /// Print a greeting
    Greet { name: String },
    /// Return the given name unchanged
    Echo { name: String },
    /// Run every demonstration in order
    Tour,
}

impl CliConfig {
    /// Loads the TOML file (or defaults) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(format) = self.format {
            tracing::debug!("Output format overridden to: {:?}", format);
            config.set_output_format(format);
        }
        if self.recursive {
            tracing::debug!("Factorial strategy overridden to: recursive");
            config.set_strategy(FactorialStrategy::Recursive);
        }

        Ok(config)
    }
}
