use crate::utils::error::{Result, ScaffoldError};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// On-disk configuration. Every key is optional; absent keys fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<String>,
    pub naming: Option<NamingConfig>,
    pub template: Option<TemplateConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    pub fields: Option<Vec<String>>,
    pub init_function: Option<bool>,
    pub skip_blank: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed)
            .map_err(|e| ScaffoldError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.naming.as_ref()?.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.naming.as_ref()?.suffix.as_deref()
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.template.as_ref()?.fields.as_deref()
    }

    pub fn init_function(&self) -> Option<bool> {
        self.template.as_ref()?.init_function
    }

    pub fn skip_blank(&self) -> Option<bool> {
        self.template.as_ref()?.skip_blank
    }
}
