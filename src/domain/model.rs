use std::fmt;

pub const DEFAULT_PREFIX: &str = "cord_";
pub const DEFAULT_SUFFIX: &str = "_t";
pub const DEFAULT_INPUT_FILE: &str = "discord_objects_names.txt";

/// One line of the names file, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawName(String);

impl RawName {
    pub fn new(line: &str) -> Self {
        Self(line.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercased whitespace-separated words.
    pub fn words(&self) -> Vec<String> {
        self.0.split_whitespace().map(str::to_lowercase).collect()
    }
}

impl fmt::Display for RawName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `cord_guild_member_t`: prefix, underscore-joined base, suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructIdentifier {
    value: String,
    stem: String,
    base: String,
}

impl StructIdentifier {
    pub fn new(prefix: &str, base: &str, suffix: &str) -> Self {
        let stem = format!("{prefix}{base}");
        Self {
            value: format!("{stem}{suffix}"),
            stem,
            base: base.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The segment between prefix and suffix, e.g. `guild_member`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Prefix and base without the suffix, e.g. `cord_guild_member`.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn words(&self) -> Vec<&str> {
        self.base.split('_').filter(|w| !w.is_empty()).collect()
    }
}

impl fmt::Display for StructIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierStyle {
    pub prefix: String,
    pub suffix: String,
}

impl Default for IdentifierStyle {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// A single struct member such as `int user_id` or `cord_strbuf_t *id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub ty: String,
    pub name: String,
}

impl FieldDecl {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn user_id() -> Self {
        Self::new("int", "user_id")
    }
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ty.ends_with('*') {
            write!(f, "{}{}", self.ty, self.name)
        } else {
            write!(f, "{} {}", self.ty, self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub fields: Vec<FieldDecl>,
    pub init_function: bool,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            fields: vec![FieldDecl::user_id()],
            init_function: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
    pub identifier: StructIdentifier,
    pub fields: Vec<FieldDecl>,
    pub init_function: bool,
}
