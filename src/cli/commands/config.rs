use super::Context;
use crate::config::{ConfigFormat, FindMatchConfig};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show {
        /// Syntax to render: json, toml, yaml
        #[arg(value_name = "FORMAT", default_value = "toml")]
        syntax: String,
    },
    /// Get a configuration value, e.g. "walk.follow_symbolic_links"
    Get { key: String },
    /// Validate the merged configuration
    Validate,
}

pub fn execute(args: ConfigArgs, context: &Context<'_>) -> Result<()> {
    let config = FindMatchConfig::load_with_custom_config(context.custom_config)?;

    match args.command {
        ConfigCommand::Show { syntax } => {
            let format_enum = match syntax.to_lowercase().as_str() {
                "json" => ConfigFormat::Json,
                "yaml" | "yml" => ConfigFormat::Yaml,
                "toml" => ConfigFormat::Toml,
                _ => return Err(anyhow::anyhow!("Unsupported format: {}. Use json, toml, or yaml", syntax)),
            };
            println!("{}", config.export(format_enum)?);
        }
        ConfigCommand::Get { key } => {
            let value = config
                .get_section(&key)
                .map_err(|_| anyhow::anyhow!("Configuration key '{}' not found", key))?;
            match value {
                serde_json::Value::String(s) => println!("{s}"),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    println!("{}", serde_json::to_string_pretty(&value)?)
                }
                other => println!("{other}"),
            }
        }
        ConfigCommand::Validate => {
            config.settings()?;
            context.output.success("Configuration is valid!");
        }
    }

    Ok(())
}
