use crate::config::{ScaffoldConfig, TomlConfig};
use crate::core::template::parse_field_decls;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cord-scaffold")]
#[command(about = "Generate skeleton C struct declarations from a list of entity names")]
pub struct CliConfig {
    /// Names file, one entity name per line [default: discord_objects_names.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Field declaration such as "int user_id"; repeat to replace the template
    #[arg(short, long = "field", value_name = "DECL")]
    pub fields: Vec<String>,

    /// Identifier prefix [default: cord_]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Identifier suffix [default: _t]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Drop blank lines instead of emitting an empty-named struct
    #[arg(long)]
    pub skip_blank: bool,

    /// Emit a `void <name>_init(...)` prototype after each struct
    #[arg(long)]
    pub init_fn: bool,

    /// Print the trimmed names only
    #[arg(long)]
    pub names_only: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Layers command-line values over the TOML file (if any) over the defaults.
    pub fn resolve(&self) -> Result<ScaffoldConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                ScaffoldConfig::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => ScaffoldConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.style.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.style.suffix = suffix.clone();
        }
        if !self.fields.is_empty() {
            config.template.fields = parse_field_decls(&self.fields)?;
        }
        if self.init_fn {
            config.template.init_function = true;
        }
        if self.skip_blank {
            config.skip_blank = true;
        }

        Ok(config)
    }
}
