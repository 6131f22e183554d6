use crate::utils::error::{Result, ScaffoldError};
use regex::Regex;
use std::sync::LazyLock;

static C_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

static C_IDENTIFIER_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]*$").expect("identifier tail pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScaffoldError::invalid_value(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(ScaffoldError::invalid_value(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_c_identifier(field_name: &str, value: &str) -> Result<()> {
    if !C_IDENTIFIER.is_match(value) {
        return Err(ScaffoldError::invalid_value(
            field_name,
            value,
            "Not a valid C identifier",
        ));
    }
    Ok(())
}

/// An empty prefix is allowed; otherwise it must be able to start a C identifier.
pub fn validate_identifier_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Ok(());
    }
    validate_c_identifier(field_name, prefix)
}

pub fn validate_identifier_suffix(field_name: &str, suffix: &str) -> Result<()> {
    if !C_IDENTIFIER_TAIL.is_match(suffix) {
        return Err(ScaffoldError::invalid_value(
            field_name,
            suffix,
            "May only contain letters, digits and underscores",
        ));
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ScaffoldError::invalid_value(
            field_name,
            "[]",
            "At least one entry is required",
        ));
    }
    Ok(())
}
