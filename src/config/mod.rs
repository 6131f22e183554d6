#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::template::parse_field_decls;
use crate::core::{ConfigProvider, IdentifierStyle, Template};
use crate::domain::model::DEFAULT_INPUT_FILE;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

pub use toml_config::TomlConfig;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldConfig {
    pub input: PathBuf,
    pub style: IdentifierStyle,
    pub template: Template,
    pub skip_blank: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            style: IdentifierStyle::default(),
            template: Template::default(),
            skip_blank: false,
        }
    }
}

impl ScaffoldConfig {
    /// Applies the values present in `file` on top of the defaults.
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(input) = &file.input {
            config.input = PathBuf::from(input);
        }
        if let Some(prefix) = file.prefix() {
            config.style.prefix = prefix.to_string();
        }
        if let Some(suffix) = file.suffix() {
            config.style.suffix = suffix.to_string();
        }
        if let Some(fields) = file.fields() {
            config.template.fields = parse_field_decls(fields)?;
        }
        if let Some(init_function) = file.init_function() {
            config.template.init_function = init_function;
        }
        if let Some(skip_blank) = file.skip_blank() {
            config.skip_blank = skip_blank;
        }

        Ok(config)
    }
}

impl Validate for ScaffoldConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input.to_string_lossy())?;
        validation::validate_identifier_prefix("naming.prefix", &self.style.prefix)?;
        validation::validate_identifier_suffix("naming.suffix", &self.style.suffix)?;
        validation::validate_non_empty("template.fields", &self.template.fields)?;

        for field in &self.template.fields {
            validation::validate_c_identifier("template.fields", &field.name)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ScaffoldConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn style(&self) -> &IdentifierStyle {
        &self.style
    }

    fn template(&self) -> &Template {
        &self.template
    }

    fn skip_blank(&self) -> bool {
        self.skip_blank
    }
}
